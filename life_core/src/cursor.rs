use crate::prelude::*;

/// The active cell. Always a valid coordinate on the board it was created for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    x: usize,
    y: usize,
}

impl Cursor {
    /// Places the cursor at `pt`, or None if it is off the board.
    pub fn at(pt: Point, grid: &Grid) -> Option<Self> {
        grid.contains(pt).then_some(Cursor { x: pt.0, y: pt.1 })
    }

    pub fn centered(grid: &Grid) -> Self {
        Cursor {
            x: grid.width() / 2,
            y: grid.height() / 2,
        }
    }

    pub fn position(&self) -> Point {
        (self.x, self.y)
    }

    /// Moves one cell toward `direction`. Moving off the board is refused and
    /// leaves the cursor where it was; returns whether the cursor moved.
    pub fn step(&mut self, direction: Compass, grid: &Grid) -> bool {
        match direction.add_to_point(self.position(), grid.width(), grid.height()) {
            Some((x, y)) => {
                self.x = x;
                self.y = y;
                true
            },
            None => false,
        }
    }

    /// Flips the cell under the cursor and returns its new state.
    pub fn toggle(&self, grid: &mut Grid) -> bool {
        grid.toggle(self.position())
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn starts_in_the_center() {
        let grid = Grid::new(9, 4).unwrap();
        assert_eq!(Cursor::centered(&grid).position(), (4, 2));
        let tiny = Grid::new(1, 1).unwrap();
        assert_eq!(Cursor::centered(&tiny).position(), (0, 0));
    }

    #[test]
    fn movement_off_the_top_left_is_refused() {
        let grid = Grid::new(3, 3).unwrap();
        let mut cursor = Cursor::at((0, 0), &grid).unwrap();
        assert!(!cursor.step(Compass::West, &grid));
        assert!(!cursor.step(Compass::North, &grid));
        assert_eq!(cursor.position(), (0, 0));
    }

    #[test]
    fn movement_off_the_bottom_right_is_refused() {
        let grid = Grid::new(3, 2).unwrap();
        let mut cursor = Cursor::at((2, 1), &grid).unwrap();
        assert!(!cursor.step(Compass::East, &grid));
        assert!(!cursor.step(Compass::South, &grid));
        assert_eq!(cursor.position(), (2, 1));
    }

    #[test]
    fn walks_the_whole_board() {
        let grid = Grid::new(4, 3).unwrap();
        let mut cursor = Cursor::at((0, 0), &grid).unwrap();
        let mut moves = 0;
        while cursor.step(Compass::East, &grid) {
            moves += 1;
        }
        while cursor.step(Compass::South, &grid) {
            moves += 1;
        }
        assert_eq!(moves, 5);
        assert_eq!(cursor.position(), (3, 2));
        assert!(cursor.step(Compass::West, &grid));
        assert!(cursor.step(Compass::North, &grid));
        assert_eq!(cursor.position(), (2, 1));
    }

    #[test]
    fn cannot_be_placed_off_the_board() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(Cursor::at((3, 0), &grid), None);
    }

    #[test]
    fn toggle_edits_the_cell_under_the_cursor() {
        let mut grid = Grid::new(3, 3).unwrap();
        let cursor = Cursor::at((2, 1), &grid).unwrap();
        assert!(cursor.toggle(&mut grid));
        assert!(grid.get((2, 1)));
        assert_eq!(grid.count_live(), 1);
        assert!(!cursor.toggle(&mut grid));
        assert_eq!(grid.count_live(), 0);
    }
}
