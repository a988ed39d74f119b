use crate::{Orientation, Vec2};

/// Converts between scroll-axis distances and the host container's conventions.
///
/// `offset` is the distance the content has scrolled from its start along the scroll axis
/// (0 = first item at the viewport's leading edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentAdapter {
    orientation: Orientation,
    content_extent: f32,
    viewport: Vec2,
}

impl ContentAdapter {
    pub fn new(orientation: Orientation, content_extent: f32, viewport: Vec2) -> Self {
        Self {
            orientation,
            content_extent,
            viewport,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn viewport_extent(&self) -> f32 {
        self.orientation.main(self.viewport)
    }

    /// The content size to hand the host: the full extent along the scroll axis, the viewport's
    /// size across it.
    pub fn content_size(&self) -> Vec2 {
        self.orientation
            .compose(self.content_extent, self.orientation.cross(self.viewport))
    }

    /// How far the content can scroll. Zero when it fits inside the viewport.
    pub fn scrollable_extent(&self) -> f32 {
        (self.content_extent - self.viewport_extent()).max(0.0)
    }

    /// Normalized position of the content start for this orientation.
    pub fn start_normalized(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => 1.0,
            Orientation::Horizontal => 0.0,
        }
    }

    /// Host normalized position for a scroll offset.
    ///
    /// Content that fits inside the viewport always maps to the start position.
    pub fn normalized_for_offset(&self, offset: f32) -> f32 {
        let scrollable = self.scrollable_extent();
        if scrollable <= 0.0 || !offset.is_finite() {
            return self.start_normalized();
        }
        let n = match self.orientation {
            Orientation::Vertical => (scrollable - offset) / scrollable,
            Orientation::Horizontal => offset / scrollable,
        };
        n.clamp(0.0, 1.0)
    }

    /// Scroll offset for a host normalized position, clamped into `[0, scrollable_extent]`.
    pub fn offset_for_normalized(&self, normalized: f32) -> f32 {
        let scrollable = self.scrollable_extent();
        if scrollable <= 0.0 || !normalized.is_finite() {
            return 0.0;
        }
        let n = normalized.clamp(0.0, 1.0);
        let offset = match self.orientation {
            Orientation::Vertical => (1.0 - n) * scrollable,
            Orientation::Horizontal => n * scrollable,
        };
        self.clamp_offset(offset)
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.scrollable_extent())
    }

    /// Offset that centers the span `[position, position + extent]` in the viewport.
    pub fn centered_offset(&self, position: f32, extent: f32) -> f32 {
        let center = position + extent / 2.0;
        self.clamp_offset(center - self.viewport_extent() / 2.0)
    }
}
