//! Core traits for streaming accumulators
//!
//! Accumulators implement the base [`Sketch`] trait so that generic pipelines
//! can feed, merge and reset them without knowing the concrete type.

use core::fmt::Debug;

/// Core trait for all mergeable streaming summaries
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// After merging, `self` summarizes the union of both input streams.
    fn merge(&mut self, other: &Self);

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Feed every item of an iterator into a sketch
pub fn update_all<'a, S, I>(sketch: &mut S, items: I)
where
    S: Sketch,
    S::Item: 'a,
    I: IntoIterator<Item = &'a S::Item>,
{
    for item in items {
        sketch.update(item);
    }
}

/// Merge a sequence of sketches left-to-right into `into`
pub fn merge_all<'a, S, I>(into: &mut S, sketches: I)
where
    S: Sketch + 'a,
    I: IntoIterator<Item = &'a S>,
{
    for sketch in sketches {
        into.merge(sketch);
    }
}
