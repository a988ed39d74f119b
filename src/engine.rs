use alloc::boxed::Box;
use core::ops::Range;

use crate::geometry::{Geometry, Grid, Grouping, Linear};
use crate::lifecycle::ItemLifecycle;
use crate::position::ContentAdapter;
use crate::window::{ViewSpan, VisibilityWindow, WindowCtx};
use crate::{
    ActiveRange, ItemSizes, ItemStats, ScrollContainer, ScrollError, ScrollItem, ScrollOptions,
    WindowState,
};

/// A list engine: one item per position along the scroll axis.
pub type AdaptiveScroll<I, C> = ScrollEngine<I, C, Linear>;

/// A grid engine: a fixed number of items per row (vertical) or column (horizontal).
pub type AdaptiveGridScroll<I, C> = ScrollEngine<I, C, Grid>;

/// A recycling scroll engine.
///
/// The engine keeps a contiguous window of materialized groups around the viewport of a host
/// [`ScrollContainer`]. Items are created through the host's factory when their group enters the
/// window and handed back when it leaves, while the container's content is sized to the full
/// virtual extent so its native scrollbar and drag mechanics work unchanged.
///
/// Everything runs synchronously on the caller's thread:
/// - [`Self::initialize`] builds the layout and materializes the first window.
/// - [`Self::on_scroll_changed`] must be called by the host on every position change. It moves
///   each window edge by at most one group, so it assumes the position moves by less than one
///   group extent between calls (see [`ScrollOptions::rebuild_on_overrun`]).
/// - [`Self::change_position`] and [`Self::scroll_to_offset`] jump and rebuild the window.
/// - [`Self::cleanup`] releases everything.
pub struct ScrollEngine<I, C, G = Linear> {
    container: C,
    options: ScrollOptions,
    grouping: G,
    geometry: Geometry,
    adapter: Option<ContentAdapter>,
    window: VisibilityWindow,
    items: Option<ItemLifecycle<I>>,
    offset: f32,
}

impl<I, C> ScrollEngine<I, C, Linear>
where
    C: ScrollContainer,
    I: ScrollItem<Parent = C::Content>,
{
    /// Creates a list engine. Nothing happens until [`Self::initialize`].
    pub fn new(container: C, options: ScrollOptions) -> Self {
        Self::with_grouping(container, options, Linear)
    }
}

impl<I, C> ScrollEngine<I, C, Grid>
where
    C: ScrollContainer,
    I: ScrollItem<Parent = C::Content>,
{
    /// Creates a grid engine with `items_per_group` items per row/column.
    pub fn grid(container: C, options: ScrollOptions, items_per_group: usize) -> Self {
        Self::with_grouping(container, options, Grid::new(items_per_group))
    }
}

impl<I, C, G> ScrollEngine<I, C, G>
where
    C: ScrollContainer,
    I: ScrollItem<Parent = C::Content>,
    G: Grouping,
{
    pub fn with_grouping(container: C, options: ScrollOptions, grouping: G) -> Self {
        Self {
            container,
            options,
            grouping,
            geometry: Geometry::default(),
            adapter: None,
            window: VisibilityWindow::default(),
            items: None,
            offset: 0.0,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn grouping(&self) -> G {
        self.grouping
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the host container, e.g. to move it in response to input.
    ///
    /// Call [`Self::on_scroll_changed`] after changing its position.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn is_initialized(&self) -> bool {
        self.items.is_some()
    }

    /// Builds the layout, sizes the host content, scrolls to the start and materializes the
    /// first window.
    ///
    /// Calling this while already initialized does nothing.
    pub fn initialize(
        &mut self,
        create_item: impl FnMut(usize) -> Option<I> + 'static,
        release_item: impl FnMut(usize, I) -> bool + 'static,
        items: impl Into<ItemSizes>,
    ) -> Result<(), ScrollError> {
        self.initialize_with_ready(create_item, release_item, items, |_| {})
    }

    /// Same as [`Self::initialize`], then calls `on_ready` once the first window is in place.
    ///
    /// `on_ready` is not called when the engine was already initialized or the configuration is
    /// rejected.
    pub fn initialize_with_ready(
        &mut self,
        create_item: impl FnMut(usize) -> Option<I> + 'static,
        release_item: impl FnMut(usize, I) -> bool + 'static,
        items: impl Into<ItemSizes>,
        on_ready: impl FnOnce(&Self),
    ) -> Result<(), ScrollError> {
        if self.is_initialized() {
            vdebug!("ScrollEngine::initialize: already initialized");
            return Ok(());
        }

        let sizes = items.into();
        let orientation = self.container.orientation();
        let geometry = Geometry::build(&sizes, self.grouping, &self.options, orientation)?;
        let adapter = ContentAdapter::new(
            orientation,
            geometry.content_extent(),
            self.container.viewport_size(),
        );

        self.container.set_content_size(adapter.content_size());
        self.container
            .set_normalized_position(adapter.start_normalized());

        self.geometry = geometry;
        self.adapter = Some(adapter);
        self.window = VisibilityWindow::default();
        self.items = Some(ItemLifecycle::new(
            Box::new(create_item),
            Box::new(release_item),
        ));
        self.rebuild_at(0.0);
        self.container.subscribe();

        vdebug!(
            items = self.geometry.item_count(),
            groups = self.geometry.group_count(),
            content_extent = adapter.content_extent(),
            ?orientation,
            "ScrollEngine::initialize"
        );
        on_ready(self);
        Ok(())
    }

    /// Releases every materialized item, stops listening to the host and resets all state.
    ///
    /// Calling this when not initialized does nothing.
    pub fn cleanup(&mut self) {
        let Some(mut items) = self.items.take() else {
            return;
        };
        let mut ctx = WindowCtx {
            geometry: &mut self.geometry,
            items: &mut items,
            parent: self.container.content(),
        };
        self.window.clear(&mut ctx);
        self.container.unsubscribe();

        vdebug!(stats = ?items.stats(), "ScrollEngine::cleanup");
        self.geometry = Geometry::default();
        self.adapter = None;
        self.offset = 0.0;
    }

    /// Host notification: the container's position changed.
    ///
    /// Ignored until the engine is initialized.
    pub fn on_scroll_changed(&mut self) {
        let Some(adapter) = self.adapter else {
            return;
        };
        let offset = adapter.offset_for_normalized(self.container.normalized_position());
        let rebuild_on_overrun = self.options.rebuild_on_overrun;
        self.with_window(offset, |window, ctx, span| {
            window.on_scroll_moved(ctx, span, rebuild_on_overrun);
        });
    }

    /// Recomputes the window from scratch at the container's current position.
    pub fn rebuild(&mut self) {
        let Some(adapter) = self.adapter else {
            return;
        };
        let offset = adapter.offset_for_normalized(self.container.normalized_position());
        self.rebuild_at(offset);
    }

    /// Scrolls so that item `index` is centered in the viewport, then rebuilds the window.
    ///
    /// Out-of-range indexes are clamped to the last item.
    pub fn change_position(&mut self, index: usize) {
        let Some(adapter) = self.adapter else {
            return;
        };
        let count = self.geometry.item_count();
        if count == 0 {
            return;
        }
        let clamped = index.min(count - 1);
        if clamped != index {
            vdebug!(index, clamped, "change_position: index out of range");
        }
        let Some(group) = self
            .geometry
            .group_of(clamped)
            .and_then(|g| self.geometry.group(g))
        else {
            return;
        };
        let target = adapter.centered_offset(group.position(), group.extent());
        vdebug!(index = clamped, target, "change_position");
        self.jump_to(adapter, target);
    }

    /// Scrolls to `offset` (distance from the content start), then rebuilds the window.
    pub fn scroll_to_offset(&mut self, offset: f32) {
        let Some(adapter) = self.adapter else {
            return;
        };
        self.jump_to(adapter, adapter.clamp_offset(offset));
    }

    /// The materialized item for `index`, if any.
    pub fn try_get_visible_item(&self, index: usize) -> Option<&I> {
        self.items.as_ref()?.try_get(index)
    }

    pub fn try_get_visible_item_mut(&mut self, index: usize) -> Option<&mut I> {
        self.items.as_mut()?.try_get_mut(index)
    }

    /// Calls `f` for every materialized item, in index order.
    pub fn for_each_visible_item(&self, mut f: impl FnMut(usize, &I)) {
        let (Some(items), Some(range)) = (self.items.as_ref(), self.window.range()) else {
            return;
        };
        for group in range.first..=range.last {
            let Some(g) = self.geometry.group(group) else {
                continue;
            };
            for index in g.members() {
                if let Some(item) = items.try_get(index) {
                    f(index, item);
                }
            }
        }
    }

    /// Materialized groups (items, for lists).
    pub fn active_range(&self) -> Option<ActiveRange> {
        self.window.range()
    }

    pub fn first_active_index(&self) -> Option<usize> {
        self.window.range().map(|r| r.first)
    }

    pub fn last_active_index(&self) -> Option<usize> {
        self.window.range().map(|r| r.last)
    }

    /// Item indexes covered by the window (holes left by failed factory calls included).
    pub fn visible_item_range(&self) -> Option<Range<usize>> {
        let range = self.window.range()?;
        let first = self.geometry.group(range.first)?;
        let last = self.geometry.group(range.last)?;
        Some(first.members().start..last.members().end)
    }

    /// Number of currently materialized items.
    pub fn visible_item_count(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    /// Scroll offset the window was last evaluated against.
    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Position conversions for the current layout (`None` until initialized).
    pub fn content_adapter(&self) -> Option<ContentAdapter> {
        self.adapter
    }

    pub fn stats(&self) -> ItemStats {
        self.items
            .as_ref()
            .map_or_else(ItemStats::default, |items| items.stats())
    }

    pub fn window_state(&self) -> WindowState {
        WindowState {
            offset: self.offset,
            range: self.window.range(),
            stats: self.stats(),
        }
    }

    fn jump_to(&mut self, adapter: ContentAdapter, offset: f32) {
        self.container
            .set_normalized_position(adapter.normalized_for_offset(offset));
        // Rebuild at the offset the host's echo notification will report, not at the target:
        // the normalized round trip is lossy.
        let offset = adapter.offset_for_normalized(self.container.normalized_position());
        self.rebuild_at(offset);
    }

    fn rebuild_at(&mut self, offset: f32) {
        self.with_window(offset, |window, ctx, span| window.rebuild(ctx, span));
    }

    fn with_window(
        &mut self,
        offset: f32,
        f: impl FnOnce(&mut VisibilityWindow, &mut WindowCtx<'_, I>, ViewSpan),
    ) {
        let (Some(adapter), Some(items)) = (self.adapter, self.items.as_mut()) else {
            return;
        };
        let span = ViewSpan::new(offset, adapter.viewport_extent(), self.options.threshold);
        let mut ctx = WindowCtx {
            geometry: &mut self.geometry,
            items,
            parent: self.container.content(),
        };
        f(&mut self.window, &mut ctx, span);
        self.offset = offset;
    }
}

impl<I, C, G: core::fmt::Debug> core::fmt::Debug for ScrollEngine<I, C, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("options", &self.options)
            .field("grouping", &self.grouping)
            .field("adapter", &self.adapter)
            .field("window", &self.window)
            .field("items", &self.items)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
