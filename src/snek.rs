use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn offset(&self, velocity: Velocity) -> Cell {
        Cell {
            x: self.x + velocity.x,
            y: self.y + velocity.y,
        }
    }

    pub fn on_board(&self, tile_count: i32) -> bool {
        (0..tile_count).contains(&self.x) && (0..tile_count).contains(&self.y)
    }
}

/// One step of motion per tick. Either a unit vector along an axis or zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0, y: 0 };

    pub fn is_zero(&self) -> bool {
        *self == Velocity::ZERO
    }
}

impl From<Direction> for Velocity {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Velocity { x: 0, y: -1 },
            Direction::Down => Velocity { x: 0, y: 1 },
            Direction::Left => Velocity { x: -1, y: 0 },
            Direction::Right => Velocity { x: 1, y: 0 },
        }
    }
}

/// Snake body, head at the front.
#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    cells: VecDeque<Cell>,
}

impl Snek {
    pub fn new(start: Cell) -> Self {
        Snek {
            cells: VecDeque::from([start]),
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "a snek needs at least a head");
        Snek { cells }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Pushes a new head. The caller decides whether the tail goes.
    pub fn grow_to(&mut self, head: Cell) {
        self.cells.push_front(head);
    }

    pub fn drop_tail(&mut self) -> Option<Cell> {
        if self.cells.len() > 1 {
            self.cells.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_direction_velocity() {
        assert_eq!(Velocity::from(Direction::Up), Velocity { x: 0, y: -1 });
        assert_eq!(Velocity::from(Direction::Down), Velocity { x: 0, y: 1 });
        assert_eq!(Velocity::from(Direction::Left), Velocity { x: -1, y: 0 });
        assert_eq!(Velocity::from(Direction::Right), Velocity { x: 1, y: 0 });
        assert!(Velocity::default().is_zero());
    }

    #[test]
    fn test_zero_velocity_stays_put() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.offset(Velocity::ZERO), cell);
    }

    #[test]
    fn test_offset_leaves_board() {
        // No wrapping: stepping off an edge gives an off-board cell.
        let corner = Cell::new(0, 0);
        let left = corner.offset(Direction::Left.into());
        assert_eq!(left, Cell::new(-1, 0));
        assert!(!left.on_board(10));

        let edge = Cell::new(9, 5);
        let right = edge.offset(Direction::Right.into());
        assert_eq!(right, Cell::new(10, 5));
        assert!(!right.on_board(10));
        assert!(edge.on_board(10));
    }

    #[test]
    fn test_grow_and_drop_tail() {
        let mut snek = Snek::new(Cell::new(5, 5));
        snek.grow_to(Cell::new(6, 5));
        assert_eq!(snek.len(), 2);
        assert_eq!(snek.head(), Cell::new(6, 5));

        assert_eq!(snek.drop_tail(), Some(Cell::new(5, 5)));
        assert_eq!(snek.len(), 1);

        // The head is never dropped.
        assert_eq!(snek.drop_tail(), None);
        assert_eq!(snek.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_occupies() {
        let snek = Snek::from_cells([Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)]);
        assert!(snek.occupies(Cell::new(5, 5)));
        assert!(snek.occupies(Cell::new(5, 7)));
        assert!(!snek.occupies(Cell::new(4, 6)));
        let order: Vec<_> = snek.cells().copied().collect();
        assert_eq!(order, [Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)]);
    }
}
