#[cfg(feature = "std")]
pub use std::collections::HashMap;
#[cfg(feature = "std")]
pub use std::sync::LazyLock as Lazy;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use hashbrown::HashMap;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Lazy;
