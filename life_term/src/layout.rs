//! Where the board and the status panel go on screen. The board fills the
//! left side of the terminal with each cell two columns wide, and the status
//! panel takes a fixed width on the right.

use getset::CopyGetters;
use life_core::{LifeError, Point};

pub const STATUS_PANEL_WIDTH: u16 = 30;
/// Columns per cell, so cells come out roughly square
pub const CELL_WIDTH: u16 = 2;

#[derive(Clone, Copy, CopyGetters, Debug, Eq, PartialEq)]
#[get_copy = "pub"]
pub struct BoardLayout {
    /// Cells per row
    grid_width: usize,
    /// Cells per column
    grid_height: usize,
    /// First terminal column of the status panel
    panel_x: u16,
    /// Rows available to both board and panel
    rows: u16,
}

impl BoardLayout {
    /// Fits a board into a terminal of `cols` by `rows`. Fails when there is
    /// no room for a single cell next to the status panel.
    pub fn fit(cols: u16, rows: u16) -> Result<Self, LifeError> {
        let board_cols = cols.saturating_sub(STATUS_PANEL_WIDTH + 1);
        let grid_width = usize::from(board_cols / CELL_WIDTH);
        let grid_height = usize::from(rows);
        if grid_width == 0 || grid_height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: grid_width,
                height: grid_height,
            });
        }
        Ok(BoardLayout {
            grid_width,
            grid_height,
            panel_x: board_cols,
            rows,
        })
    }

    /// Terminal position of the left half of a cell
    pub fn cell_origin(&self, (x, y): Point) -> (u16, u16) {
        (x as u16 * CELL_WIDTH, y as u16)
    }

    /// Terminal row of a status panel line. The four lines sit around the
    /// vertical middle of the panel, and may fall off a very short terminal.
    pub fn status_row(&self, line: StatusLine) -> u16 {
        let middle = self.rows / 2;
        match line {
            StatusLine::BoardSize => middle.saturating_sub(2),
            StatusLine::CellsAlive => middle.saturating_sub(1),
            StatusLine::TicksRemaining => middle,
            StatusLine::TotalTicks => middle + 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusLine {
    BoardSize,
    CellsAlive,
    TicksRemaining,
    TotalTicks,
}

impl StatusLine {
    pub const ALL: [StatusLine; 4] = [
        StatusLine::BoardSize,
        StatusLine::CellsAlive,
        StatusLine::TicksRemaining,
        StatusLine::TotalTicks,
    ];
}
