use thiserror::Error;

/// Configuration errors reported by [`crate::ScrollEngine::initialize`].
///
/// Runtime degradations (a factory returning no item, an out-of-range index passed to
/// `change_position`, repeated initialize/cleanup calls) are not errors and never surface here.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScrollError {
    #[error("items per group must be at least 1")]
    ZeroItemsPerGroup,

    #[error("item {index} has invalid size {size}")]
    InvalidItemSize { index: usize, size: f32 },

    #[error("{field} must be finite and non-negative (got {value})")]
    InvalidLength { field: &'static str, value: f32 },

    #[error("visibility threshold must be finite (got {0})")]
    InvalidThreshold(f32),

    #[error("item count exceeds what the layout can hold")]
    TooManyItems,
}
