//! A recycling visibility-window engine for virtualized lists and grids.
//!
//! Given a large logical item count and a fixed-size viewport, the engine materializes visuals
//! only for the items intersecting (or near) the viewport, recycles them as the viewport moves,
//! and sizes the host's scroll content to the full virtual extent so native scrollbar and drag
//! mechanics keep working.
//!
//! The crate is UI-agnostic. The host provides:
//! - a [`ScrollContainer`] (normalized scroll position, content size, viewport size, axis)
//! - a visual item type implementing [`ScrollItem`]
//! - factory/release callbacks that create and recycle those items
//!
//! Lists and grids share one engine, [`ScrollEngine`], parameterized by a [`Grouping`]:
//! [`AdaptiveScroll`] (one item per row/column) and [`AdaptiveGridScroll`] (N items per row/column).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod geometry;
mod host;
mod lifecycle;
mod map;
mod options;
mod position;
mod state;
mod types;
mod window;


pub use engine::{AdaptiveGridScroll, AdaptiveScroll, ScrollEngine};
pub use error::ScrollError;
pub use geometry::{Geometry, Grid, Grouping, Linear};
pub use host::{ScrollContainer, ScrollItem};
pub use options::{CreateItemFn, ItemSizes, ReleaseItemFn, ScrollOptions};
pub use position::ContentAdapter;
pub use state::WindowState;
pub use types::{ActiveRange, Group, ItemSlot, ItemStats, Orientation, Padding, Vec2};
pub use window::ViewSpan;
