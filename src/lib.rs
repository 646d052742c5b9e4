//! # Flowmoments
//!
//! Single-pass descriptive statistics for streams of `f32` values.
//!
//! An [`Accumulator`] takes one value at a time and provides count, minimum,
//! maximum, mean, absolute mean, quadratic mean, standard deviation,
//! skewness and excess kurtosis without storing the values. Accumulators
//! built on separate workers combine into the same result as a single pass
//! over all values.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowmoments::prelude::*;
//!
//! let mut stats = Accumulator::new();
//! for value in [-2.0, 0.0, 2.0, 4.0] {
//!     stats.add(value);
//! }
//!
//! assert_eq!(stats.count(), 4);
//! assert_eq!(stats.mean(), Some(1.0));
//!
//! // Undefined measures are `None`
//! let empty = Accumulator::new();
//! assert_eq!(empty.mean(), None);
//! ```
//!
//! ## Distributed Computing
//!
//! Accumulators implement the [`Sketch`](traits::Sketch) trait, whose `merge`
//! combines accumulators across distributed workers. `+`, `+=` and `Sum` do
//! the same:
//!
//! ```rust
//! use flowmoments::statistics::Accumulator;
//!
//! let mut worker1 = Accumulator::new();
//! let mut worker2 = Accumulator::new();
//!
//! // Each worker processes its partition
//! worker1.add(1.0);
//! worker2.add(2.0);
//! worker2.add(3.0);
//!
//! // Combine results
//! let combined: Accumulator = [worker1, worker2].into_iter().sum();
//! assert_eq!(combined.mean(), Some(2.0));
//! assert_eq!(combined.kurtosis(), Some(-1.5));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses libm
//! - `serde`: Enable serialization of accumulators
//! - `parallel`: Parallel accumulation of slices on the rayon pool
//! - `full`: Enable all of the above

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

// Core traits always available
pub mod traits;

pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{Accumulator, Measure};

    #[cfg(feature = "parallel")]
    pub use crate::statistics::parallel;
}

pub use statistics::Accumulator;
