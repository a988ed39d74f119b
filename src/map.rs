#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type ItemMap<I> = HashMap<usize, I>;
#[cfg(not(feature = "std"))]
pub(crate) type ItemMap<I> = BTreeMap<usize, I>;
