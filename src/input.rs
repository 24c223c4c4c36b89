use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::CELL_WIDTH;
use crate::engine::Command;
use crate::snek::Direction;

/// What a terminal event asks for. Only `Game` commands reach the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Game(Command),
    ToggleLanguage,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Up | KeyCode::Char('w' | 'W') => Input::Game(Command::MoveUp),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Input::Game(Command::MoveDown),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Input::Game(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Input::Game(Command::MoveRight),
        KeyCode::Char(' ') | KeyCode::Enter => Input::Game(Command::Start),
        KeyCode::Char('p' | 'P') => Input::Game(Command::Pause),
        KeyCode::Char('r' | 'R') => Input::Game(Command::Restart),
        KeyCode::Char('l' | 'L') => Input::ToggleLanguage,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

/// Direction of a drag by its dominant axis.
///
/// A terminal column is about half as wide as a row is tall, so vertical
/// travel is scaled up by `CELL_WIDTH` before the axes are compared.
pub fn swipe_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx == 0 && dy == 0 {
        return None;
    }
    if dx.abs() > dy.abs() * i32::from(CELL_WIDTH) {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Turns left-button drags into swipes.
///
/// Each drag step is judged from the previous step's position, so one
/// long drag can turn the snek several times.
#[derive(Debug, Default)]
pub struct Swipe {
    origin: Option<(u16, u16)>,
    last: Option<Direction>,
}

impl Swipe {
    pub fn handle(&mut self, mouse: MouseEvent) -> Option<Direction> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((mouse.column, mouse.row));
                self.last = None;
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (x0, y0) = self.origin?;
                let dx = i32::from(mouse.column) - i32::from(x0);
                let dy = i32::from(mouse.row) - i32::from(y0);
                let dir = swipe_direction(dx, dy)?;
                self.origin = Some((mouse.column, mouse.row));
                // Repeats of the same direction change nothing.
                if self.last.replace(dir) == Some(dir) {
                    return None;
                }
                Some(dir)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.origin = None;
                self.last = None;
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputAdapter {
    swipe: Swipe,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Input> {
        match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self
                .swipe
                .handle(mouse)
                .map(|dir| Input::Game(dir.into())),
            _ => None,
        }
    }
}
