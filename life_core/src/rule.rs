use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// How neighbors are looked up at the edges of the board. The board never
/// wraps under either rule: a neighbor that does not exist is dead.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRule {
    /// Symmetric bounds on all four sides.
    #[default]
    Bounded,
    /// Left, right and upward neighbors are gated on the board's bounds, but
    /// downward neighbors are only gated on `y < height`. Reads below the last
    /// row fall off the board and come back dead, so every neighbor count
    /// matches [EdgeRule::Bounded]. Older builds kept a hidden partial row
    /// under the board that could feed births back into the last row; that row
    /// does not exist here.
    Legacy,
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Number of live cells in the Moore neighborhood of `pt`, in `0..=8`.
pub fn neighbor_count(grid: &Grid, pt: Point, edge_rule: EdgeRule) -> usize {
    match edge_rule {
        EdgeRule::Bounded => bounded_neighbor_count(grid, pt),
        EdgeRule::Legacy => legacy_neighbor_count(grid, pt),
    }
}

fn bounded_neighbor_count(grid: &Grid, (x, y): Point) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(|&pt| grid.cell(pt) == Some(true))
        .count()
}

fn legacy_neighbor_count(grid: &Grid, (x, y): Point) -> usize {
    let height = grid.height();
    let width = grid.width();
    let alive = |pt: Point| usize::from(grid.cell(pt) == Some(true));
    let mut count = 0;
    if x != 0 {
        count += alive((x - 1, y));
        if y != 0 {
            count += alive((x - 1, y - 1));
        }
        if y < height {
            count += alive((x - 1, y + 1));
        }
    }
    if x < width - 1 {
        count += alive((x + 1, y));
        if y != 0 {
            count += alive((x + 1, y - 1));
        }
        if y < height {
            count += alive((x + 1, y + 1));
        }
    }
    if y != 0 {
        count += alive((x, y - 1));
    }
    if y < height {
        count += alive((x, y + 1));
    }
    count
}

/// Whether a cell is alive in the next generation.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Advances the grid by one generation. Every cell is computed against a copy
/// of the previous generation, so the rule applies to all cells at once.
///
/// Returns the number of cells that changed state.
pub fn step(grid: &mut Grid, edge_rule: EdgeRule) -> usize {
    let previous = grid.clone();
    let mut changed = 0;
    for (pt, alive) in previous.cells() {
        let next = next_state(alive, neighbor_count(&previous, pt, edge_rule));
        if next != alive {
            grid.set(pt, next);
            changed += 1;
        }
    }
    changed
}
