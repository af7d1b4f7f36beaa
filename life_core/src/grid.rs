use bitvec::prelude::*;
use getset::CopyGetters;

use crate::prelude::*;

/// The board. A fixed-size, non-wrapping grid of cells that are either alive
/// or dead, stored row-major in a single bit vector.
///
/// Coordinates are `(x, y)`: `x` is the column in `0..width`, `y` is the row
/// in `0..height`. The accessors that take a point panic when it lies outside
/// the board, since every caller derives its points from the board's own
/// bounds. Use [Grid::cell] when that is not the case.
#[derive(Clone, CopyGetters, Debug, Eq, PartialEq)]
pub struct Grid {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    cells: BitVec,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: bitvec![0; width * height],
        })
    }

    /// Creates a grid where only the listed points are alive. Fails if any of
    /// them is off the board.
    pub fn with_live_cells<I: IntoIterator<Item = Point>>(
        width: usize,
        height: usize,
        live: I,
    ) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for point in live {
            let idx = grid.index(point).ok_or(LifeError::OutOfBounds {
                point,
                width,
                height,
            })?;
            grid.cells.set(idx, true);
        }
        Ok(grid)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, (x, y): Point) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn index_or_panic(&self, pt: Point) -> usize {
        match self.index(pt) {
            Some(idx) => idx,
            None => panic!(
                "point {:?} is outside of the {}x{} board",
                pt, self.width, self.height
            ),
        }
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.index(pt).is_some()
    }

    /// Checked read, None if the point is off the board.
    pub fn cell(&self, pt: Point) -> Option<bool> {
        self.index(pt).map(|idx| self.cells[idx])
    }

    pub fn get(&self, pt: Point) -> bool {
        self.cells[self.index_or_panic(pt)]
    }

    pub fn set(&mut self, pt: Point, alive: bool) {
        let idx = self.index_or_panic(pt);
        self.cells.set(idx, alive);
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, pt: Point) -> bool {
        let idx = self.index_or_panic(pt);
        let alive = !self.cells[idx];
        self.cells.set(idx, alive);
        alive
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    pub fn count_live(&self) -> usize {
        self.cells.count_ones()
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .by_vals()
            .enumerate()
            .map(move |(idx, alive)| ((idx % width, idx / width), alive))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        self.cells
            .iter_ones()
            .map(move |idx| (idx % width, idx / width))
    }
}
