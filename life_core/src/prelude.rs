pub use crate::common::*;
pub use crate::grid::Grid;
pub use crate::rule::EdgeRule;
pub use crate::theme::Theme;
pub use crate::{LifeError, Result};
