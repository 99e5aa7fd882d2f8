mod geometry;
mod hover;

pub use geometry::{position, Bounds, Pos, Size, MARGIN};
pub use hover::{HoverTooltip, HIDE_GRACE};
