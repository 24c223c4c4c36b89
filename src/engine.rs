use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::config::{GameConfig, REWARD, SPEED_INCREMENT, SPEED_THRESHOLD, START_CELL};
use crate::food::generate_food;
use crate::snek::{Cell, Direction, Snek, Velocity};
use crate::ticker::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Crashed(Collision),
    /// The snek covers every cell; there is nowhere left for food.
    Cleared,
}

/// Commands the engine understands. Direction commands carry nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Start,
    Pause,
    Restart,
}

impl Command {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Start | Command::Pause | Command::Restart => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Command::MoveUp,
            Direction::Down => Command::MoveDown,
            Direction::Left => Command::MoveLeft,
            Direction::Right => Command::MoveRight,
        }
    }
}

/// Notifications for the score display and the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    SpeedChanged(u32),
    GameOver { final_score: u32, outcome: Outcome },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No direction chosen yet.
    Stalled,
    Moved,
    Nommed(u32),
    Over(Outcome),
}

/// Everything a renderer needs, detached from the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tile_count: i32,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub speed: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    snek: Snek,
    food: Option<Cell>,
    velocity: Velocity,
    last_direction: Option<Direction>,
    score: u32,
    speed: u32,
    phase: Phase,
    outcome: Option<Outcome>,
    ticks: u64,
    ticker: Ticker,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snek = Snek::new(START_CELL);
        let food = generate_food(&mut rng, config.tile_count, &snek);

        GameEngine {
            config,
            rng,
            snek,
            food,
            velocity: Velocity::ZERO,
            last_direction: None,
            score: 0,
            speed: config.base_speed,
            phase: Phase::Idle,
            outcome: None,
            ticks: 0,
            ticker: Ticker::new(config.base_speed),
            events: Vec::new(),
        }
    }

    /// Applies one command in full. Returns `false` if it was ignored.
    pub fn apply(&mut self, command: Command, now: Instant) -> bool {
        let applied = match command {
            Command::Start => self.start(now),
            Command::Pause => self.toggle_pause(now),
            Command::Restart => self.restart(),
            _ => match command.direction() {
                Some(dir) => self.steer(dir),
                None => false,
            },
        };
        if !applied {
            debug!("ignored {:?} while {:?}", command, self.phase);
        }
        applied
    }

    fn start(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        self.ticker.reschedule(self.speed, now);
        info!("game started at speed {}", self.speed);
        true
    }

    fn toggle_pause(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Running => {
                self.ticker.stop();
                self.phase = Phase::Paused;
                info!("paused after {} ticks", self.ticks);
                true
            }
            Phase::Paused => {
                self.ticker.reschedule(self.speed, now);
                self.phase = Phase::Running;
                info!("resumed at speed {}", self.speed);
                true
            }
            Phase::Idle | Phase::Over => false,
        }
    }

    fn restart(&mut self) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        self.ticker.stop();
        self.snek = Snek::new(START_CELL);
        self.food = generate_food(&mut self.rng, self.config.tile_count, &self.snek);
        self.velocity = Velocity::ZERO;
        self.last_direction = None;
        if self.speed != self.config.base_speed {
            self.speed = self.config.base_speed;
            self.events.push(GameEvent::SpeedChanged(self.speed));
        }
        self.phase = Phase::Idle;
        self.outcome = None;
        self.ticks = 0;
        if self.score != 0 {
            self.score = 0;
            self.events.push(GameEvent::ScoreChanged(0));
        }
        info!("game reset");
        true
    }

    /// Takes a new direction unless it would double back on the last one.
    /// Between ticks the last accepted direction wins.
    fn steer(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.last_direction == Some(dir.opposite()) {
            return false;
        }
        self.velocity = dir.into();
        self.last_direction = Some(dir);
        true
    }

    /// Runs the tick if one is due.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.phase != Phase::Running || !self.ticker.poll(now) {
            return None;
        }
        Some(self.tick(now))
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_next(now)
    }

    fn tick(&mut self, now: Instant) -> TickOutcome {
        self.ticks += 1;

        if self.velocity.is_zero() {
            return TickOutcome::Stalled;
        }

        let head = self.snek.head().offset(self.velocity);
        if !head.on_board(self.config.tile_count) {
            return self.game_over(Outcome::Crashed(Collision::Wall));
        }
        if self.snek.occupies(head) {
            return self.game_over(Outcome::Crashed(Collision::Body));
        }

        self.snek.grow_to(head);

        if self.food != Some(head) {
            self.snek.drop_tail();
            return TickOutcome::Moved;
        }

        self.score += REWARD;
        self.events.push(GameEvent::ScoreChanged(self.score));

        if self.score % SPEED_THRESHOLD == 0 {
            self.speed += SPEED_INCREMENT;
            self.ticker.reschedule(self.speed, now);
            self.events.push(GameEvent::SpeedChanged(self.speed));
            info!("speed up to {} at score {}", self.speed, self.score);
        }

        self.food = generate_food(&mut self.rng, self.config.tile_count, &self.snek);
        if self.food.is_none() {
            return self.game_over(Outcome::Cleared);
        }

        TickOutcome::Nommed(self.score)
    }

    fn game_over(&mut self, outcome: Outcome) -> TickOutcome {
        self.ticker.stop();
        self.phase = Phase::Over;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
            outcome,
        });
        info!(
            "game over ({:?}) with score {} and length {} after {} ticks",
            outcome,
            self.score,
            self.snek.len(),
            self.ticks
        );
        TickOutcome::Over(outcome)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tile_count: self.config.tile_count,
            snake: self.snek.cells().copied().collect(),
            food: self.food,
            score: self.score,
            speed: self.speed,
            phase: self.phase,
            outcome: self.outcome,
        }
    }
}
