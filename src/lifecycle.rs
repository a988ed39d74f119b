use crate::map::ItemMap;
use crate::{CreateItemFn, ItemSlot, ItemStats, ReleaseItemFn, ScrollItem};

/// Bridges the visibility window to the host's item factory.
///
/// Owns the index → item map: an entry exists exactly while the index is materialized.
pub(crate) struct ItemLifecycle<I> {
    create: CreateItemFn<I>,
    release: ReleaseItemFn<I>,
    items: ItemMap<I>,
    stats: ItemStats,
}

impl<I: ScrollItem> ItemLifecycle<I> {
    pub(crate) fn new(create: CreateItemFn<I>, release: ReleaseItemFn<I>) -> Self {
        Self {
            create,
            release,
            items: ItemMap::new(),
            stats: ItemStats::default(),
        }
    }

    /// Creates, parents and positions the item for `index`.
    ///
    /// Returns `false` when the factory produced nothing; the index stays unmaterialized until a
    /// later pass asks for it again.
    pub(crate) fn materialize(&mut self, index: usize, slot: &ItemSlot, parent: &I::Parent) -> bool {
        if self.items.contains_key(&index) {
            return true;
        }
        let Some(mut item) = (self.create)(index) else {
            vwarn!(index, "create_item returned no item; leaving index unmaterialized");
            self.stats.failed += 1;
            return false;
        };
        item.set_parent(parent);
        item.set_top_left_anchor();
        item.set_position(slot.position());
        self.items.insert(index, item);
        self.stats.created += 1;
        self.stats.live = self.items.len();
        true
    }

    /// Hands the item for `index` back to the host. No-op when nothing is materialized there.
    pub(crate) fn release(&mut self, index: usize) {
        let Some(item) = self.items.remove(&index) else {
            return;
        };
        let acked = (self.release)(index, item);
        if !acked {
            vtrace!(index, "release_item was not acknowledged");
        }
        self.stats.released += 1;
        self.stats.live = self.items.len();
    }

    pub(crate) fn try_get(&self, index: usize) -> Option<&I> {
        self.items.get(&index)
    }

    pub(crate) fn try_get_mut(&mut self, index: usize) -> Option<&mut I> {
        self.items.get_mut(&index)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn stats(&self) -> ItemStats {
        self.stats
    }
}

impl<I> core::fmt::Debug for ItemLifecycle<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemLifecycle")
            .field("live", &self.items.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
