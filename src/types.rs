use core::ops::Range;

/// A 2D vector in host coordinates (x grows right, y grows down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The scroll axis of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Component of `v` along the scroll axis.
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// Component of `v` across the scroll axis.
    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Self::Vertical => v.x,
            Self::Horizontal => v.y,
        }
    }

    /// Builds a host vector from axis-relative components.
    pub fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(cross, main),
            Self::Horizontal => Vec2::new(main, cross),
        }
    }
}

/// Padding around the content, in host terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Leading padding along the scroll axis.
    pub fn main_start(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    /// Trailing padding along the scroll axis.
    pub fn main_end(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    /// Leading padding across the scroll axis.
    pub fn cross_start(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.left,
            Orientation::Horizontal => self.top,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f32); 4] {
        [
            ("padding.left", self.left),
            ("padding.right", self.right),
            ("padding.top", self.top),
            ("padding.bottom", self.bottom),
        ]
    }
}

/// Layout of one logical item. Immutable once the geometry is built.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    size: Vec2,
    position: Vec2,
}

impl ItemSlot {
    pub(crate) fn new(size: Vec2, position: Vec2) -> Self {
        Self { size, position }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Offset of the item's top-left corner from the content origin.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// A run of consecutive items sharing one position along the scroll axis.
///
/// Linear lists have exactly one member per group.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    position: f32,
    extent: f32,
    members: Range<usize>,
    pub(crate) visible: bool,
}

impl Group {
    pub(crate) fn new(position: f32, extent: f32, members: Range<usize>) -> Self {
        Self {
            position,
            extent,
            members,
            visible: false,
        }
    }

    /// Distance from the content origin along the scroll axis.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Size along the scroll axis.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn end(&self) -> f32 {
        self.position + self.extent
    }

    /// Item indexes owned by this group.
    pub fn members(&self) -> Range<usize> {
        self.members.clone()
    }

    /// Whether the group is currently inside the visibility window.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The inclusive range of groups currently materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveRange {
    pub first: usize,
    pub last: usize, // inclusive
}

impl ActiveRange {
    /// Number of groups in the range.
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }
}

/// Lifecycle counters for materialized items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStats {
    /// Successful factory calls.
    pub created: usize,
    /// Release callbacks issued.
    pub released: usize,
    /// Factory calls that returned no item.
    pub failed: usize,
    /// Items currently materialized.
    pub live: usize,
}
