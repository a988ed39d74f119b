use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{Padding, ScrollError, Vec2};

/// Creates the visual for a logical item. Returning `None` leaves the index unmaterialized.
pub type CreateItemFn<I> = Box<dyn FnMut(usize) -> Option<I>>;

/// Hands a visual back to the host, which may destroy or pool it.
///
/// The returned acknowledgement is informational only.
pub type ReleaseItemFn<I> = Box<dyn FnMut(usize, I) -> bool>;

/// Scroll-axis sizes for the logical items.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemSizes {
    /// `count` items, all sized by [`ScrollOptions::item_size`].
    Uniform(usize),
    /// One scroll-axis size per item.
    PerItem(Vec<f32>),
    /// Sizes keyed by index. The item count is the largest key + 1; missing keys fall back to
    /// [`ScrollOptions::item_size`].
    Map(BTreeMap<usize, f32>),
}

impl ItemSizes {
    /// Number of logical items; `None` when a map key leaves no room for one past it.
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Uniform(count) => Some(*count),
            Self::PerItem(sizes) => Some(sizes.len()),
            Self::Map(sizes) => match sizes.last_key_value() {
                Some((&k, _)) => k.checked_add(1),
                None => Some(0),
            },
        }
    }

    /// Scroll-axis size of `index`, or `default` when the index has no explicit size.
    pub fn main_size(&self, index: usize, default: f32) -> f32 {
        match self {
            Self::Uniform(_) => default,
            Self::PerItem(sizes) => sizes.get(index).copied().unwrap_or(default),
            Self::Map(sizes) => sizes.get(&index).copied().unwrap_or(default),
        }
    }
}

impl Default for ItemSizes {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

impl From<usize> for ItemSizes {
    fn from(count: usize) -> Self {
        Self::Uniform(count)
    }
}

impl From<Vec<f32>> for ItemSizes {
    fn from(sizes: Vec<f32>) -> Self {
        Self::PerItem(sizes)
    }
}

impl From<BTreeMap<usize, f32>> for ItemSizes {
    fn from(sizes: BTreeMap<usize, f32>) -> Self {
        Self::Map(sizes)
    }
}

impl FromIterator<f32> for ItemSizes {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        Self::PerItem(iter.into_iter().collect())
    }
}

/// Layout and visibility configuration for a [`crate::ScrollEngine`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOptions {
    /// Default item size in host terms (width, height).
    ///
    /// The scroll-axis component can be overridden per item through [`ItemSizes`]; the cross-axis
    /// component always applies.
    pub item_size: Vec2,

    /// Padding between the content edges and the items.
    pub padding: Padding,

    /// Space between items: the scroll-axis component separates groups, the cross-axis component
    /// separates members of a grid group.
    pub spacing: Vec2,

    /// Extra margin beyond the viewport, on both sides, within which items are kept materialized.
    pub threshold: f32,

    /// Falls back to a full rebuild when one edge step per notification was not enough to catch
    /// up with the scroll position (fast flicks).
    pub rebuild_on_overrun: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            item_size: Vec2::new(100.0, 100.0),
            padding: Padding::default(),
            spacing: Vec2::ZERO,
            threshold: 0.0,
            rebuild_on_overrun: false,
        }
    }
}

impl ScrollOptions {
    /// Creates options with the given default item size (width, height).
    pub fn new(item_size: Vec2) -> Self {
        Self {
            item_size,
            ..Self::default()
        }
    }

    pub fn with_item_size(mut self, item_size: Vec2) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, spacing: Vec2) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_rebuild_on_overrun(mut self, rebuild_on_overrun: bool) -> Self {
        self.rebuild_on_overrun = rebuild_on_overrun;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ScrollError> {
        let lengths = [
            ("item_size.x", self.item_size.x),
            ("item_size.y", self.item_size.y),
            ("spacing.x", self.spacing.x),
            ("spacing.y", self.spacing.y),
        ];
        for (field, value) in lengths.into_iter().chain(self.padding.values()) {
            if !is_length(value) {
                return Err(ScrollError::InvalidLength { field, value });
            }
        }
        if !self.threshold.is_finite() {
            return Err(ScrollError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

pub(crate) fn is_length(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
