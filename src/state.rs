use crate::{ActiveRange, ItemStats};

/// A lightweight, serializable snapshot of the engine's visibility window.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    /// Scroll offset the window was last evaluated against.
    pub offset: f32,
    /// Materialized groups, or `None` when nothing is materialized.
    pub range: Option<ActiveRange>,
    pub stats: ItemStats,
}

impl WindowState {
    /// First materialized group (`None` when the window is empty).
    pub fn first_active_index(&self) -> Option<usize> {
        self.range.map(|r| r.first)
    }

    /// Last materialized group (`None` when the window is empty).
    pub fn last_active_index(&self) -> Option<usize> {
        self.range.map(|r| r.last)
    }
}
