use crate::geometry::Geometry;
use crate::lifecycle::ItemLifecycle;
use crate::{ActiveRange, Group, ScrollItem};

/// The region, along the scroll axis, within which groups are materialized.
///
/// The leading edge is inclusive and the trailing edge exclusive: a group whose end touches
/// `start` is visible, a group starting exactly at `end` is not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSpan {
    pub start: f32,
    pub end: f32,
}

impl ViewSpan {
    pub fn new(offset: f32, viewport_extent: f32, threshold: f32) -> Self {
        Self {
            start: offset - threshold,
            end: offset + viewport_extent + threshold,
        }
    }

    pub fn overlaps(&self, position: f32, extent: f32) -> bool {
        position < self.end && position + extent >= self.start
    }

    pub fn contains_group(&self, group: &Group) -> bool {
        self.overlaps(group.position(), group.extent())
    }
}

/// Tracks the contiguous range of materialized groups.
///
/// Every group in `range` is materialized (failed factory calls aside) and no group outside it
/// is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct VisibilityWindow {
    range: Option<ActiveRange>,
}

/// Mutable borrows the tracker needs to show or hide groups.
pub(crate) struct WindowCtx<'a, I: ScrollItem> {
    pub(crate) geometry: &'a mut Geometry,
    pub(crate) items: &'a mut ItemLifecycle<I>,
    pub(crate) parent: &'a I::Parent,
}

impl<I: ScrollItem> WindowCtx<'_, I> {
    fn is_visible(&self, group: usize, span: ViewSpan) -> bool {
        self.geometry
            .group(group)
            .is_some_and(|g| span.contains_group(g))
    }

    fn show(&mut self, group: usize) {
        let Some(g) = self.geometry.group(group) else {
            return;
        };
        for index in g.members() {
            if let Some(slot) = self.geometry.slot(index) {
                self.items.materialize(index, slot, self.parent);
            }
        }
        self.geometry.groups_mut()[group].visible = true;
    }

    fn hide(&mut self, group: usize) {
        let Some(g) = self.geometry.group(group) else {
            return;
        };
        for index in g.members() {
            self.items.release(index);
        }
        self.geometry.groups_mut()[group].visible = false;
    }
}

impl VisibilityWindow {
    pub(crate) fn range(&self) -> Option<ActiveRange> {
        self.range
    }

    /// Recomputes the window for `span` from scratch.
    ///
    /// Groups in both the old and the new window stay materialized (members whose factory call
    /// failed are retried); groups only in the old window are released.
    pub(crate) fn rebuild<I: ScrollItem>(&mut self, ctx: &mut WindowCtx<'_, I>, span: ViewSpan) {
        let next = visible_range(ctx.geometry.groups(), span);
        vtrace!(
            span_start = span.start,
            span_end = span.end,
            ?next,
            "VisibilityWindow::rebuild"
        );

        if let Some(prev) = self.range {
            for group in prev.first..=prev.last {
                if !next.is_some_and(|r| r.contains(group)) {
                    ctx.hide(group);
                }
            }
        }
        if let Some(next) = next {
            for group in next.first..=next.last {
                ctx.show(group);
            }
        }
        self.range = next;
    }

    /// Moves each edge of the window by at most one group.
    ///
    /// Correct only while consecutive calls see the scroll position move by less than one group
    /// extent; larger jumps need [`Self::rebuild`] (or `rebuild_on_overrun`). An empty window
    /// cannot grow from its edges, so it is rebuilt.
    pub(crate) fn on_scroll_moved<I: ScrollItem>(
        &mut self,
        ctx: &mut WindowCtx<'_, I>,
        span: ViewSpan,
        rebuild_on_overrun: bool,
    ) {
        let Some(mut range) = self.range else {
            self.rebuild(ctx, span);
            return;
        };
        let group_count = ctx.geometry.group_count();

        if !ctx.is_visible(range.first, span) {
            ctx.hide(range.first);
            if range.first == range.last {
                self.range = None;
                self.rebuild(ctx, span);
                return;
            }
            range.first += 1;
            vtrace!(first = range.first, "window: leading edge advanced");
        }

        if !ctx.is_visible(range.last, span) {
            ctx.hide(range.last);
            if range.first == range.last {
                self.range = None;
                self.rebuild(ctx, span);
                return;
            }
            range.last -= 1;
            vtrace!(last = range.last, "window: trailing edge retreated");
        }

        if range.first > 0 && ctx.is_visible(range.first - 1, span) {
            range.first -= 1;
            ctx.show(range.first);
            vtrace!(first = range.first, "window: leading edge extended");
        }

        if range.last + 1 < group_count && ctx.is_visible(range.last + 1, span) {
            range.last += 1;
            ctx.show(range.last);
            vtrace!(last = range.last, "window: trailing edge extended");
        }

        self.range = Some(range);

        if rebuild_on_overrun && is_stale(ctx, range, span, group_count) {
            vdebug!(
                first = range.first,
                last = range.last,
                "scroll delta exceeded one group; rebuilding window"
            );
            self.rebuild(ctx, span);
        }
    }

    /// Releases every group in the window and empties it.
    pub(crate) fn clear<I: ScrollItem>(&mut self, ctx: &mut WindowCtx<'_, I>) {
        if let Some(range) = self.range.take() {
            for group in range.first..=range.last {
                ctx.hide(group);
            }
        }
    }
}

fn is_stale<I: ScrollItem>(
    ctx: &WindowCtx<'_, I>,
    range: ActiveRange,
    span: ViewSpan,
    group_count: usize,
) -> bool {
    !ctx.is_visible(range.first, span)
        || !ctx.is_visible(range.last, span)
        || (range.first > 0 && ctx.is_visible(range.first - 1, span))
        || (range.last + 1 < group_count && ctx.is_visible(range.last + 1, span))
}

/// First and last groups overlapping `span`.
///
/// Group positions and ends never decrease, so both edges can be found by binary search; the
/// result equals testing every group.
pub(crate) fn visible_range(groups: &[Group], span: ViewSpan) -> Option<ActiveRange> {
    let first = groups.partition_point(|g| g.end() < span.start);
    let end = groups.partition_point(|g| g.position() < span.end);
    (first < end).then(|| ActiveRange {
        first,
        last: end - 1,
    })
}
