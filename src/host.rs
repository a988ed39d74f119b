use crate::{Orientation, Vec2};

/// Capabilities the engine needs from a visual item.
///
/// The engine never constructs or frees items itself; it only parents and positions the ones the
/// host factory hands it.
pub trait ScrollItem {
    /// The node items are parented under (the container's content root).
    type Parent: ?Sized;

    fn set_parent(&mut self, parent: &Self::Parent);

    /// Pins the item's anchor and pivot to its top-left corner so that
    /// [`Self::set_position`] places that corner.
    ///
    /// Hosts whose items are always positioned by their top-left corner can keep the default.
    fn set_top_left_anchor(&mut self) {}

    /// Places the item's top-left corner at `position`, relative to the content origin.
    fn set_position(&mut self, position: Vec2);
}

/// The host's scroll container.
///
/// The container owns the scrollbar and drag mechanics. The engine reads and writes its
/// normalized position and sizes its content so those mechanics see the full virtual extent.
pub trait ScrollContainer {
    /// The content root items are parented under.
    type Content: ?Sized;

    fn content(&self) -> &Self::Content;

    /// Scroll axis. Read once at initialization.
    fn orientation(&self) -> Orientation;

    fn viewport_size(&self) -> Vec2;

    /// Current position in `0.0..=1.0`.
    ///
    /// Vertical containers use 1.0 for the top; horizontal containers use 0.0 for the left edge.
    fn normalized_position(&self) -> f32;

    fn set_normalized_position(&mut self, position: f32);

    fn set_content_size(&mut self, size: Vec2);

    /// Called when the engine starts listening for position changes.
    ///
    /// From here on the host should call [`crate::ScrollEngine::on_scroll_changed`] on every
    /// position change.
    fn subscribe(&mut self) {}

    /// Called when the engine stops listening for position changes.
    fn unsubscribe(&mut self) {}
}
