mod common;
pub mod configuration;
pub mod cursor;
pub mod grid;
pub mod prelude;
pub mod rule;
pub mod session;
pub mod theme;
pub mod ticks;

use thiserror::Error;

pub use common::{Compass, Point};
pub use configuration::SessionConfiguration;
pub use cursor::Cursor;
pub use grid::Grid;
pub use rule::EdgeRule;
pub use session::{Command, InputSource, Painter, Session, SessionState, StatusReport};
pub use theme::Theme;
pub use ticks::{NoDelay, Pace, Pacer, SleepPacer, TickAdjustment, TickScheduler};

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("board must be at least 1x1, but terminal space allows only {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("point {point:?} is outside of the {width}x{height} board")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    #[error("failed to render board")]
    Render(#[source] std::io::Error),
    #[error("failed to read input")]
    Input(#[source] std::io::Error),
}
