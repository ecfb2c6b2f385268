//! Top-of-book snapshot for one side.

use crate::side::Side;

/// Best price level of a side: the price and the aggregate resting volume
/// at that price, or `None` when the side is empty.
///
/// Snapshots are compared by value to decide whether a top-of-book event
/// must be emitted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TobSnapshot {
    pub side: Side,
    pub level: Option<(u32, u32)>,
}

impl TobSnapshot {
    pub fn new(side: Side, level: Option<(u32, u32)>) -> Self {
        TobSnapshot { side, level }
    }

    pub fn empty(side: Side) -> Self {
        TobSnapshot { side, level: None }
    }
}
