use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::CELL_WIDTH;
use crate::engine::{GameEvent, Outcome, Phase, Snapshot};
use crate::lang::{Lang, Text};

const FLOOR: Color = Color::Rgb(0xe0, 0xe0, 0xe0);
const FOOD: Color = Color::Red;
const BODY: Color = Color::Green;
const HEAD: Color = Color::Rgb(0x00, 0x64, 0x00);

/// Score display and final-score screen, fed by engine events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub speed: u32,
    pub final_score: Option<u32>,
}

impl Scoreboard {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Scoreboard {
            score: snap.score,
            speed: snap.speed,
            final_score: None,
        }
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged(score) => self.score = score,
            GameEvent::SpeedChanged(speed) => self.speed = speed,
            GameEvent::GameOver { final_score, .. } => self.final_score = Some(final_score),
        }
    }
}

/// Paints the grid. Each cell is `CELL_WIDTH` columns by one row.
pub struct Board<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> Board<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Board { snapshot }
    }

    /// Columns and rows the board needs, borders excluded.
    pub fn size(tile_count: i32) -> (u16, u16) {
        let tiles = u16::try_from(tile_count).unwrap_or(0);
        (tiles * CELL_WIDTH, tiles)
    }
}

fn paint(buf: &mut Buffer, area: Rect, x: i32, y: i32, color: Color) {
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    let row = area.y + y;
    for dx in 0..CELL_WIDTH {
        let col = area.x + x * CELL_WIDTH + dx;
        if col < area.right() && row < area.bottom() {
            buf[(col, row)].set_symbol(" ").set_bg(color);
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;
        for y in 0..snap.tile_count {
            for x in 0..snap.tile_count {
                paint(buf, area, x, y, FLOOR);
            }
        }

        if let Some(food) = snap.food {
            paint(buf, area, food.x, food.y, FOOD);
        }

        for cell in snap.snake.iter().skip(1) {
            paint(buf, area, cell.x, cell.y, BODY);
        }
        if let Some(head) = snap.snake.first() {
            paint(buf, area, head.x, head.y, HEAD);
        }
    }
}

fn hud(board: &Scoreboard, lang: Lang) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            lang.text(Text::Title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::raw(lang.text(Text::ScoreLabel)),
        Span::raw(board.score.to_string()),
        Span::raw("    "),
        Span::raw(lang.text(Text::SpeedLabel)),
        Span::raw(board.speed.to_string()),
    ])
}

fn button(key: &'static str, label: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("[{key}] {label}  "), style)
}

/// Key hints, greyed out when the command would be ignored.
fn buttons(snap: &Snapshot, lang: Lang) -> Line<'static> {
    let pause_label = if snap.phase == Phase::Paused {
        Text::Continue
    } else {
        Text::Pause
    };
    let restart_label = if snap.phase == Phase::Over {
        Text::PlayAgain
    } else {
        Text::Restart
    };

    Line::from(vec![
        button("Space", lang.text(Text::Start), snap.phase == Phase::Idle),
        button(
            "P",
            lang.text(pause_label),
            matches!(snap.phase, Phase::Running | Phase::Paused),
        ),
        button("R", lang.text(restart_label), snap.phase != Phase::Idle),
        button("L", lang.text(Text::LangToggle), true),
        button("Q", lang.text(Text::Quit), true),
    ])
}

fn game_over_panel(snap: &Snapshot, board: &Scoreboard, lang: Lang) -> Paragraph<'static> {
    let mut lines = vec![Line::from(lang.text(Text::GameOver)).bold()];
    if snap.outcome == Some(Outcome::Cleared) {
        lines.push(Line::from(lang.text(Text::Cleared)));
    }
    lines.push(Line::from(format!(
        "{}{}",
        lang.text(Text::FinalScoreLabel),
        board.final_score.unwrap_or(board.score)
    )));
    lines.push(Line::from(format!("[R] {}", lang.text(Text::PlayAgain))));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draws the whole screen for one frame.
pub fn draw(frame: &mut Frame, snap: &Snapshot, board: &Scoreboard, lang: Lang) {
    let area = frame.area();
    let (board_w, board_h) = Board::size(snap.tile_count);
    let height = 3 + board_h + 2 + 1;

    if area.width < board_w + 2 || area.height < height {
        frame.render_widget(
            Paragraph::new(lang.text(Text::TooSmall)).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let column = centered(area, area.width, height);
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title + score
            Constraint::Length(board_h + 2), // Board
            Constraint::Length(1),           // Buttons
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(hud(board, lang)).block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let block = Block::default().borders(Borders::ALL);
    let board_area = centered(layout[1], board_w + 2, board_h + 2);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(Board::new(snap), inner);

    frame.render_widget(Paragraph::new(buttons(snap, lang)), layout[2]);

    if snap.phase == Phase::Over {
        let panel = centered(layout[1], 34, 6);
        frame.render_widget(Clear, panel);
        frame.render_widget(game_over_panel(snap, board, lang), panel);
    }
}
