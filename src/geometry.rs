use alloc::vec::Vec;

use crate::options::is_length;
use crate::{Group, ItemSizes, ItemSlot, Orientation, ScrollError, ScrollOptions};

/// How logical items are clustered along the scroll axis.
///
/// Every group occupies one position along the scroll axis; its members are laid out side by side
/// across it.
pub trait Grouping: Copy {
    fn items_per_group(&self) -> usize;
}

/// One item per group: a plain list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Grouping for Linear {
    fn items_per_group(&self) -> usize {
        1
    }
}

/// `items_per_group` items per row (vertical) or column (horizontal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub items_per_group: usize,
}

impl Grid {
    pub fn new(items_per_group: usize) -> Self {
        Self { items_per_group }
    }
}

impl Grouping for Grid {
    fn items_per_group(&self) -> usize {
        self.items_per_group
    }
}

/// Precomputed layout of every item and group, plus the total content extent.
///
/// Built once per initialization; a pure function of its inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    orientation: Orientation,
    slots: Vec<ItemSlot>,
    groups: Vec<Group>,
    content_extent: f32,
}

impl Geometry {
    pub fn build(
        sizes: &ItemSizes,
        grouping: impl Grouping,
        options: &ScrollOptions,
        orientation: Orientation,
    ) -> Result<Self, ScrollError> {
        let per_group = grouping.items_per_group();
        if per_group == 0 {
            return Err(ScrollError::ZeroItemsPerGroup);
        }
        options.validate()?;

        let axis = orientation;
        let item_main = axis.main(options.item_size);
        let item_cross = axis.cross(options.item_size);
        let spacing_main = axis.main(options.spacing);
        let spacing_cross = axis.cross(options.spacing);
        let cross_start = options.padding.cross_start(axis);

        let count = sizes.count().ok_or(ScrollError::TooManyItems)?;
        let mut slots = Vec::new();
        let mut groups = Vec::new();
        slots
            .try_reserve_exact(count)
            .and_then(|()| groups.try_reserve_exact(count.div_ceil(per_group)))
            .map_err(|_| ScrollError::TooManyItems)?;

        let mut offset = options.padding.main_start(axis);
        for first in (0..count).step_by(per_group) {
            let end = (first + per_group).min(count);
            let mut extent = 0.0f32;
            let mut cross = cross_start;
            for index in first..end {
                let main = sizes.main_size(index, item_main);
                if !is_length(main) {
                    return Err(ScrollError::InvalidItemSize { index, size: main });
                }
                slots.push(ItemSlot::new(
                    axis.compose(main, item_cross),
                    axis.compose(offset, cross),
                ));
                cross += item_cross + spacing_cross;
                extent = extent.max(main);
            }
            groups.push(Group::new(offset, extent, first..end));

            offset += extent;
            if end < count {
                offset += spacing_main;
            }
        }

        let content_extent = offset + options.padding.main_end(axis);
        vdebug!(
            count,
            groups = groups.len(),
            content_extent,
            "Geometry::build"
        );

        Ok(Self {
            orientation,
            slots,
            groups,
            content_extent,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn item_count(&self) -> usize {
        self.slots.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&ItemSlot> {
        self.slots.get(index)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Group owning item `index`.
    pub fn group_of(&self, index: usize) -> Option<usize> {
        if index >= self.slots.len() {
            return None;
        }
        // Every group but the last is full, so the first group's length is the stride.
        let stride = self.groups.first().map_or(1, |g| g.members().len());
        Some(index / stride)
    }

    /// Total size of the content along the scroll axis, padding included.
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }
}
