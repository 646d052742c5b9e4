//! Names for the value measures an accumulator derives

use core::fmt;
use core::str::FromStr;

/// A value measure derived from an [`Accumulator`](super::Accumulator)
///
/// `count` is not listed: it is always defined and is not a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measure {
    Minimum,
    Maximum,
    Mean,
    AbsoluteMean,
    QuadraticMean,
    StandardDeviation,
    Skewness,
    Kurtosis,
}

impl Measure {
    /// All measures, in report order
    pub const ALL: [Measure; 8] = [
        Measure::Minimum,
        Measure::Maximum,
        Measure::Mean,
        Measure::AbsoluteMean,
        Measure::QuadraticMean,
        Measure::StandardDeviation,
        Measure::Skewness,
        Measure::Kurtosis,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Measure::Minimum => "minimum",
            Measure::Maximum => "maximum",
            Measure::Mean => "mean",
            Measure::AbsoluteMean => "absolute_mean",
            Measure::QuadraticMean => "quadratic_mean",
            Measure::StandardDeviation => "standard_deviation",
            Measure::Skewness => "skewness",
            Measure::Kurtosis => "kurtosis",
        }
    }

    /// Fixed-width label used by the text report
    pub fn label(self) -> &'static str {
        match self {
            Measure::Minimum => "Minimum ",
            Measure::Maximum => "Maximum ",
            Measure::Mean => "Mean    ",
            Measure::AbsoluteMean => "Abs.Mean",
            Measure::QuadraticMean => "Rms     ",
            Measure::StandardDeviation => "Std.Devn",
            Measure::Skewness => "Skewness",
            Measure::Kurtosis => "Kurtosis",
        }
    }

    /// Whether the measure can be undefined on a non-empty accumulator
    pub fn needs_spread(self) -> bool {
        matches!(self, Measure::Skewness | Measure::Kurtosis)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Measure`] from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMeasure;

impl fmt::Display for UnknownMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown measure: expected one of minimum, maximum, mean, absolute_mean, \
             quadratic_mean, standard_deviation, skewness, kurtosis"
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownMeasure {}

impl FromStr for Measure {
    type Err = UnknownMeasure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "minimum" | "min" => Ok(Measure::Minimum),
            "maximum" | "max" => Ok(Measure::Maximum),
            "mean" => Ok(Measure::Mean),
            "absolute_mean" | "abs_mean" => Ok(Measure::AbsoluteMean),
            "quadratic_mean" | "rms" => Ok(Measure::QuadraticMean),
            "standard_deviation" | "stddev" => Ok(Measure::StandardDeviation),
            "skewness" | "skew" => Ok(Measure::Skewness),
            "kurtosis" | "kurt" => Ok(Measure::Kurtosis),
            _ => Err(UnknownMeasure),
        }
    }
}
