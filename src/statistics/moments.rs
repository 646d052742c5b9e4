//! Running moments (count, extrema, mean, deviation, skewness, kurtosis)
//!
//! Computes streaming statistics with John D. Cook's skewness/kurtosis
//! extension of the Knuth/Welford one-pass algorithm. Supports merging with
//! the pairwise formulas of Chan et al. and Pébay for distributed computation.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use crate::math;
use crate::statistics::Measure;
use crate::traits::Sketch;

/// Single-pass descriptive statistics accumulator
///
/// Accepts `f32` values one at a time and provides count, minimum, maximum,
/// mean, absolute mean, quadratic mean (rms), population standard deviation,
/// skewness and excess kurtosis. Values are not stored.
///
/// Extrema and measures are `f32`; the running moments are kept in `f64` so
/// that rounding error accumulates slowly. Stress runs see deviations at
/// `f32` precision only after roughly:
///
/// - standard deviation: 134 billion values
/// - skewness: 29 billion values
/// - kurtosis: 2.6 billion values
///
/// Measures return `None` when they are undefined: every measure is undefined
/// for an empty accumulator, and skewness and kurtosis are undefined when all
/// values are identical.
///
/// # Example
///
/// ```
/// use flowmoments::statistics::Accumulator;
///
/// let mut stats = Accumulator::new();
///
/// for value in [-2.0, 0.0, 2.0, 4.0] {
///     stats.add(value);
/// }
///
/// assert_eq!(stats.len(), 4);
/// assert_eq!(stats.mean(), Some(1.0));
/// assert_eq!(stats.minimum(), Some(-2.0));
/// assert_eq!(stats.maximum(), Some(4.0));
/// assert!((stats.standard_deviation().unwrap() - 2.236068).abs() < 1e-5);
/// ```
///
/// # Distributed Usage
///
/// ```
/// use flowmoments::statistics::Accumulator;
///
/// // Worker 1
/// let stats1: Accumulator = [1.0f32, 2.0, 3.0].iter().collect();
///
/// // Worker 2
/// let stats2: Accumulator = [4.0f32, 5.0, 6.0].iter().collect();
///
/// // Combine
/// let combined = stats1 + stats2;
/// assert_eq!(combined.len(), 6);
/// assert_eq!(combined.mean(), Some(3.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    /// Number of values seen
    count: u64,
    /// Minimum value
    minimum: f32,
    /// Maximum value
    maximum: f32,
    /// Running mean
    moment1: f64,
    /// Running mean of absolute values
    abs_moment1: f64,
    /// Σ(x - mean)², M2 in Welford's algorithm
    moment2: f64,
    /// Σ(x - mean)³
    moment3: f64,
    /// Σ(x - mean)⁴
    moment4: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            minimum: f32::MAX,
            maximum: -f32::MAX,
            moment1: 0.0,
            abs_moment1: 0.0,
            moment2: 0.0,
            moment3: 0.0,
            moment4: 0.0,
        }
    }

    /// Add a value to the statistics
    ///
    /// Every value is accepted. A NaN poisons the moments; the extrema skip it
    /// once a number has been seen and are NaN while only NaN has been added.
    ///
    /// With `core::ops::Add` in scope, `stats.add(v)` on an owned binding
    /// resolves to `Add::add`; call `Accumulator::add(&mut stats, v)` there.
    pub fn add(&mut self, value: f32) {
        self.count += 1;

        if self.count == 1 {
            self.minimum = value;
            self.maximum = value;
        } else {
            self.minimum = self.minimum.min(value);
            self.maximum = self.maximum.max(value);
        }

        let x = f64::from(value);
        let n = self.count as f64;

        // moment4 and moment3 read the previous moment2/moment3, and all three
        // use the mean from before this value (captured in `delta`).
        let delta = x - self.moment1;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * (n - 1.0);

        self.moment1 += delta_n;
        self.abs_moment1 += (math::abs(x) - self.abs_moment1) / n;
        self.moment4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.moment2
            - 4.0 * delta_n * self.moment3;
        self.moment3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.moment2;
        self.moment2 += term1;
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Alias of [`count`](Self::count)
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the minimum value
    pub fn minimum(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.minimum)
        }
    }

    /// Get the maximum value
    pub fn maximum(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.maximum)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.maximum - self.minimum)
        }
    }

    /// Get the arithmetic mean
    pub fn mean(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.moment1 as f32)
        }
    }

    /// Get the mean of the absolute values
    pub fn absolute_mean(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.abs_moment1 as f32)
        }
    }

    /// Get the quadratic mean (root mean square)
    pub fn quadratic_mean(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }

        let mean2 = self.moment1 * self.moment1;
        let variance = self.moment2 / self.count as f64;
        Some(math::sqrt(mean2 + variance) as f32)
    }

    /// Get the population variance
    pub fn variance(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some((self.moment2 / self.count as f64) as f32)
        }
    }

    /// Get the population standard deviation
    ///
    /// This divides by `n`, treating the values as the entire population.
    pub fn standard_deviation(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }

        Some(math::sqrt(self.moment2 / self.count as f64) as f32)
    }

    /// Get the skewness
    ///
    /// The normal distribution's skewness is zero.
    pub fn skewness(&self) -> Option<f32> {
        if self.count == 0 || self.moment2 == 0.0 {
            return None;
        }

        let n = self.count as f64;
        let skew = (math::sqrt(n) * self.moment3) / math::powf(self.moment2, 1.5);
        Some(skew as f32)
    }

    /// Get the excess kurtosis
    ///
    /// The normal distribution's excess kurtosis is zero.
    pub fn kurtosis(&self) -> Option<f32> {
        if self.count == 0 || self.moment2 == 0.0 {
            return None;
        }

        let n = self.count as f64;
        let kurt = (n * self.moment4) / (self.moment2 * self.moment2) - 3.0;
        Some(kurt as f32)
    }

    /// Get a measure by name
    pub fn measure(&self, measure: Measure) -> Option<f32> {
        match measure {
            Measure::Minimum => self.minimum(),
            Measure::Maximum => self.maximum(),
            Measure::Mean => self.mean(),
            Measure::AbsoluteMean => self.absolute_mean(),
            Measure::QuadraticMean => self.quadratic_mean(),
            Measure::StandardDeviation => self.standard_deviation(),
            Measure::Skewness => self.skewness(),
            Measure::Kurtosis => self.kurtosis(),
        }
    }

    /// Combine two accumulators into one covering both sets of values
    ///
    /// An empty accumulator is the identity: combining with it returns the
    /// other operand unchanged. The result does not depend on how the values
    /// were split between `self` and `other`, up to rounding.
    pub fn combine(&self, other: &Self) -> Self {
        if self.count == 0 {
            return *other;
        }
        if other.count == 0 {
            return *self;
        }

        let a_n = self.count as f64;
        let b_n = other.count as f64;
        let c_n = (self.count + other.count) as f64;

        let delta = other.moment1 - self.moment1;
        let delta2 = delta * delta;
        let delta3 = delta * delta2;
        let delta4 = delta2 * delta2;

        let moment1 = (a_n * self.moment1 + b_n * other.moment1) / c_n;
        let abs_moment1 = (a_n * self.abs_moment1 + b_n * other.abs_moment1) / c_n;

        let moment2 = self.moment2 + other.moment2 + delta2 * a_n * b_n / c_n;

        let moment3 = self.moment3
            + other.moment3
            + delta3 * a_n * b_n * (a_n - b_n) / (c_n * c_n)
            + 3.0 * delta * (a_n * other.moment2 - b_n * self.moment2) / c_n;

        let moment4 = self.moment4
            + other.moment4
            + delta4 * a_n * b_n * (a_n * a_n - a_n * b_n + b_n * b_n) / (c_n * c_n * c_n)
            + 6.0 * delta2 * (a_n * a_n * other.moment2 + b_n * b_n * self.moment2) / (c_n * c_n)
            + 4.0 * delta * (a_n * other.moment3 - b_n * self.moment3) / c_n;

        Self {
            count: self.count + other.count,
            minimum: self.minimum.min(other.minimum),
            maximum: self.maximum.max(other.maximum),
            moment1,
            abs_moment1,
            moment2,
            moment3,
            moment4,
        }
    }

    /// Merge another accumulator into this one
    pub fn merge_stats(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

impl Add for Accumulator {
    type Output = Accumulator;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(&rhs)
    }
}

impl Add<&Accumulator> for Accumulator {
    type Output = Accumulator;

    fn add(self, rhs: &Accumulator) -> Self::Output {
        self.combine(rhs)
    }
}

impl AddAssign for Accumulator {
    fn add_assign(&mut self, rhs: Self) {
        self.merge_stats(&rhs);
    }
}

impl AddAssign<&Accumulator> for Accumulator {
    fn add_assign(&mut self, rhs: &Accumulator) {
        self.merge_stats(rhs);
    }
}

impl Sum for Accumulator {
    fn sum<I: Iterator<Item = Accumulator>>(iter: I) -> Self {
        iter.fold(Accumulator::new(), |acc, partial| acc.combine(&partial))
    }
}

impl<'a> Sum<&'a Accumulator> for Accumulator {
    fn sum<I: Iterator<Item = &'a Accumulator>>(iter: I) -> Self {
        iter.fold(Accumulator::new(), |acc, partial| acc.combine(partial))
    }
}

impl Extend<f32> for Accumulator {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a f32> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a f32>>(&mut self, iter: I) {
        for value in iter {
            self.add(*value);
        }
    }
}

impl FromIterator<f32> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut stats = Accumulator::new();
        stats.extend(iter);
        stats
    }
}

impl<'a> FromIterator<&'a f32> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a f32>>(iter: I) -> Self {
        let mut stats = Accumulator::new();
        stats.extend(iter);
        stats
    }
}

impl Sketch for Accumulator {
    type Item = f32;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_stats(other);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::Accumulator;
    use crate::math;
    use crate::statistics::Measure;
    use crate::traits::Sketch;

    fn close(actual: Option<f32>, expected: f64) -> bool {
        match actual {
            Some(v) => math::abs(f64::from(v) - expected) <= 1e-5 * math::abs(expected).max(1.0),
            None => false,
        }
    }

    #[test]
    fn test_empty() {
        let stats = Accumulator::new();

        assert!(stats.is_empty());
        assert_eq!(stats.len(), 0);
        for measure in Measure::ALL {
            assert_eq!(stats.measure(measure), None, "{:?}", measure);
        }
        assert_eq!(stats.variance(), None);
        assert_eq!(stats.range(), None);
    }

    #[test]
    fn test_single_value() {
        let mut stats = Accumulator::new();
        let value = 123.4f32;
        stats.add(value);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats.minimum(), Some(value));
        assert_eq!(stats.maximum(), Some(value));
        assert_eq!(stats.mean(), Some(value));
        assert_eq!(stats.absolute_mean(), Some(value));
        assert_eq!(stats.quadratic_mean(), Some(value));
        assert_eq!(stats.standard_deviation(), Some(0.0));
        assert_eq!(stats.skewness(), None);
        assert_eq!(stats.kurtosis(), None);
    }

    #[test]
    fn test_constant_values() {
        let value = 234.5f32;
        let stats: Accumulator = core::iter::repeat(value).take(50).collect();

        assert_eq!(stats.len(), 50);
        assert_eq!(stats.minimum(), Some(value));
        assert_eq!(stats.maximum(), Some(value));
        assert_eq!(stats.mean(), Some(value));
        assert_eq!(stats.absolute_mean(), Some(value));
        assert_eq!(stats.quadratic_mean(), Some(value));
        assert_eq!(stats.standard_deviation(), Some(0.0));
        assert_eq!(stats.skewness(), None);
        assert_eq!(stats.kurtosis(), None);
    }

    #[test]
    fn test_negative_values() {
        let stats: Accumulator = [-6.0f32, -2.0, -1.0].iter().collect();

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.minimum(), Some(-6.0));
        assert_eq!(stats.maximum(), Some(-1.0));
        assert_eq!(stats.mean(), Some(-3.0));
        assert_eq!(stats.absolute_mean(), Some(3.0));
        assert!(close(stats.quadratic_mean(), math::sqrt(41.0f64 / 3.0)));
        assert!(close(stats.standard_deviation(), math::sqrt(14.0f64 / 3.0)));
    }

    #[test]
    fn test_zero_centered_values() {
        let stats: Accumulator = [-1.0f32, 0.0, 1.0].iter().collect();

        assert_eq!(stats.mean(), Some(0.0));
        assert!(close(stats.absolute_mean(), 2.0 / 3.0));
        assert!(close(stats.quadratic_mean(), math::sqrt(2.0f64 / 3.0)));
        assert!(close(stats.standard_deviation(), math::sqrt(2.0f64 / 3.0)));
        assert_eq!(stats.skewness(), Some(0.0));
        assert!(close(stats.kurtosis(), -1.5));
    }

    #[test]
    fn test_documented_example() {
        let stats: Accumulator = [1.0f32, 2.0, 3.0].iter().collect();

        assert_eq!(stats.mean(), Some(2.0));
        assert_eq!(stats.absolute_mean(), Some(2.0));
        assert!(close(stats.quadratic_mean(), math::sqrt(14.0f64 / 3.0)));
        assert!(close(stats.standard_deviation(), math::sqrt(2.0f64 / 3.0)));
        assert_eq!(stats.skewness(), Some(0.0));
        assert_eq!(stats.kurtosis(), Some(-1.5));
        assert!(close(stats.variance(), 2.0 / 3.0));
        assert_eq!(stats.range(), Some(2.0));
    }

    #[test]
    fn test_skewed_values() {
        // mean 1, deviations [-1, -1, -1, 3]: m2 = 12, m3 = 24, m4 = 84
        let stats: Accumulator = [0.0f32, 0.0, 0.0, 4.0].iter().collect();

        assert!(close(stats.skewness(), 2.0 * 24.0 / math::powf(12.0, 1.5)));
        assert!(close(stats.kurtosis(), 4.0 * 84.0 / 144.0 - 3.0));
    }

    #[test]
    fn test_extreme_boundaries() {
        let mut low = Accumulator::new();
        low.add(-f32::MAX);
        assert_eq!(low.minimum(), Some(-f32::MAX));
        assert_eq!(low.maximum(), Some(-f32::MAX));

        let mut high = Accumulator::new();
        high.add(f32::MAX);
        assert_eq!(high.minimum(), Some(f32::MAX));
        assert_eq!(high.maximum(), Some(f32::MAX));

        let both = low + high;
        assert_eq!(both.minimum(), Some(-f32::MAX));
        assert_eq!(both.maximum(), Some(f32::MAX));
        assert_eq!(both.mean(), Some(0.0));
    }

    #[test]
    fn test_combine() {
        let a: Accumulator = [1.0f32, 2.0, 3.0].iter().collect();
        let b: Accumulator = [4.0f32, 5.0, 6.0].iter().collect();

        let combined = a.combine(&b);

        assert_eq!(combined.len(), 6);
        assert_eq!(combined.mean(), Some(3.5));
        assert_eq!(combined.minimum(), Some(1.0));
        assert_eq!(combined.maximum(), Some(6.0));
        assert!(close(combined.variance(), 17.5 / 6.0));
        assert!(close(combined.skewness(), 0.0));
        assert!(close(combined.kurtosis(), 6.0 * 88.375 / (17.5 * 17.5) - 3.0));
    }

    #[test]
    fn test_combine_single_value_accumulators() {
        let mut a = Accumulator::new();
        a.add(1.0);
        let mut b = Accumulator::new();
        b.add(2.0);

        let mut full = Accumulator::new();
        full.add(1.0);
        full.add(2.0);

        assert_eq!(a + b, full);
    }

    #[test]
    fn test_combine_empty_is_identity() {
        let populated: Accumulator = [1.0f32, 2.0].iter().collect();
        let empty = Accumulator::new();

        assert_eq!(populated.combine(&empty), populated);
        assert_eq!(empty.combine(&populated), populated);
        assert_eq!(empty.combine(&empty), empty);
    }

    #[test]
    fn test_add_assign_and_sum() {
        let parts = [
            Accumulator::new(),
            [1.0f32, 1.5, 2.0].iter().collect::<Accumulator>(),
            Accumulator::new(),
            [3.0f32, 4.0].iter().collect::<Accumulator>(),
        ];

        let mut incremented = Accumulator::new();
        for part in &parts {
            incremented += part;
        }

        let summed: Accumulator = parts.iter().sum();
        assert_eq!(incremented, summed);
        assert_eq!(summed.len(), 5);
        assert!(close(summed.mean(), 2.3));
    }

    #[test]
    fn test_clear() {
        let mut stats: Accumulator = [1.0f32, 2.0, 3.0].iter().collect();

        stats.clear();

        assert!(stats.is_empty());
        assert_eq!(stats, Accumulator::new());
        assert_eq!(stats.minimum(), None);
    }

    #[test]
    fn test_nan_is_counted() {
        let mut stats = Accumulator::new();

        stats.add(1.0);
        stats.add(f32::NAN);
        stats.add(3.0);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.minimum(), Some(1.0));
        assert_eq!(stats.maximum(), Some(3.0));
        assert!(stats.mean().is_some_and(f32::is_nan));
    }

    #[test]
    fn test_leading_nan_gives_way_to_numbers() {
        let mut stats = Accumulator::new();

        stats.add(f32::NAN);
        assert!(stats.minimum().is_some_and(f32::is_nan));
        assert!(stats.maximum().is_some_and(f32::is_nan));

        stats.add(3.0);
        stats.add(-1.0);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.minimum(), Some(-1.0));
        assert_eq!(stats.maximum(), Some(3.0));
        assert_eq!(stats.range(), Some(4.0));
    }

    #[test]
    fn test_infinity() {
        let mut stats = Accumulator::new();

        stats.add(1.0);
        stats.add(f32::INFINITY);
        stats.add(2.0);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.maximum(), Some(f32::INFINITY));
        assert_eq!(stats.minimum(), Some(1.0));
    }

    #[test]
    fn test_numerical_stability() {
        // Large offset with a small spread: the naive sum-of-squares formula
        // loses the variance entirely at this magnitude.
        let stats: Accumulator = (0..1000).map(|i| 1.0e6f32 + (i % 10) as f32).collect();

        assert!(close(stats.mean(), 1.0e6 + 4.5));
        assert!(close(stats.variance(), 8.25));
        assert!(close(stats.skewness(), 0.0));
    }
}
