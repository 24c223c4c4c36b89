use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

mod config;
mod engine;
mod food;
mod input;
mod lang;
mod render;
mod snek;
mod ticker;

use config::Cli;
use engine::{GameEngine, GameEvent};
use input::{Input, InputAdapter};
use render::Scoreboard;
use lang::Lang;

/// Longest wait for input while no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), io::Error> {
    let cli = Cli::parse();

    // Set up logging before anything else
    WriteLogger::init(
        cli.log_level.into(),
        Config::default(),
        File::create(&cli.log_file)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting gridsnek with {:?}", cli.game_config());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameEngine::new(cli.game_config()), cli.lang);
    let result = app.run(&mut terminal);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct App {
    engine: GameEngine,
    input: InputAdapter,
    scoreboard: Scoreboard,
    lang: Lang,
    should_quit: bool,
}

impl App {
    fn new(engine: GameEngine, lang: Lang) -> Self {
        App {
            scoreboard: Scoreboard::from_snapshot(&engine.snapshot()),
            engine,
            input: InputAdapter::new(),
            lang,
            should_quit: false,
        }
    }

    /// Draw, wait for input until the next tick is due, apply input, tick.
    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        while !self.should_quit {
            let snapshot = self.engine.snapshot();
            terminal.draw(|f| render::draw(f, &snapshot, &self.scoreboard, self.lang))?;

            let timeout = self
                .engine
                .until_next_tick(Instant::now())
                .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

            if event::poll(timeout)? {
                self.handle_event(event::read()?);
                while event::poll(Duration::ZERO)? {
                    self.handle_event(event::read()?);
                }
            }

            self.engine.update(Instant::now());
            self.dispatch_events();
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match self.input.handle_event(event) {
            Some(Input::Game(command)) => {
                self.engine.apply(command, Instant::now());
                self.dispatch_events();
            }
            Some(Input::ToggleLanguage) => {
                self.lang = self.lang.toggled();
                debug!("language now {:?}", self.lang);
            }
            Some(Input::Quit) => {
                info!("Quitting");
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Hands engine events to the scoreboard the HUD and game-over panel draw from.
    fn dispatch_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => debug!("score {}", score),
                GameEvent::SpeedChanged(speed) => debug!("speed {}", speed),
                GameEvent::GameOver {
                    final_score,
                    outcome,
                } => info!("Final score {} ({:?})", final_score, outcome),
            }
            self.scoreboard.apply(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::Phase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        let config = GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        };
        App::new(GameEngine::new(config), Lang::Zh)
    }

    #[test]
    fn test_keys_drive_engine() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char(' ')));
        assert_eq!(app.engine.snapshot().phase, Phase::Running);

        app.handle_event(key(KeyCode::Char('p')));
        assert_eq!(app.engine.snapshot().phase, Phase::Paused);

        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.engine.snapshot().phase, Phase::Idle);
    }

    #[test]
    fn test_language_toggle_leaves_game_alone() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('l')));
        assert_eq!(app.lang, Lang::En);
        assert_eq!(app.engine.snapshot().phase, Phase::Idle);
        app.handle_event(key(KeyCode::Char('l')));
        assert_eq!(app.lang, Lang::Zh);
    }

    #[test]
    fn test_events_reach_scoreboard() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char(' ')));
        app.engine.apply(engine::Command::MoveUp, Instant::now());

        // Drive ticks until the snake hits the top wall.
        let mut now = Instant::now();
        while app.engine.snapshot().phase != Phase::Over {
            now += Duration::from_secs(1);
            app.engine.update(now);
        }
        app.dispatch_events();

        let snap = app.engine.snapshot();
        assert_eq!(app.scoreboard.score, snap.score);
        assert_eq!(app.scoreboard.final_score, Some(snap.score));

        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.scoreboard.score, 0);
        assert_eq!(app.scoreboard.speed, GameConfig::default().base_speed);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
