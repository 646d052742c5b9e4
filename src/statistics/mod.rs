//! Descriptive statistics for streaming data
//!
//! This module computes count, extrema, mean, absolute mean, quadratic mean,
//! standard deviation, skewness and kurtosis over a stream in a single pass
//! with constant memory.
//!
//! # Example
//!
//! ```
//! use flowmoments::statistics::Accumulator;
//!
//! let mut stats = Accumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {:?}", stats.mean());
//! println!("Stddev: {:?}", stats.standard_deviation());
//! println!("Skewness: {:?}", stats.skewness());
//! println!("{}", stats.report());
//! ```

mod measure;
mod moments;
pub mod report;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use measure::{Measure, UnknownMeasure};
pub use moments::Accumulator;
pub use report::{description, Report};
