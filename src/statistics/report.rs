//! Human-readable summary of an accumulator
//!
//! ```
//! use flowmoments::statistics::Accumulator;
//!
//! let stats: Accumulator = [1.0f32, 2.0, 3.0].iter().collect();
//!
//! assert_eq!(
//!     stats.report().to_string(),
//!     "3 Values\n Minimum  = 1\n Maximum  = 3\n Mean     = 2\n Abs.Mean = 2\n \
//!      Rms      = 2.16025\n Std.Devn = 0.816497\n Skewness = 0\n Kurtosis = -1.5"
//! );
//! ```

use core::fmt;

#[cfg(feature = "std")]
use std::string::{String, ToString};

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};

use crate::statistics::{Accumulator, Measure};

/// Significant digits printed per value
const PRECISION: i32 = 6;

/// Label of the single line printed for a one-value accumulator
const VALUE_LABEL: &str = "Value";

/// `Display` adapter rendering the text report of an [`Accumulator`]
///
/// The first line counts the values (`No Values`, `1 Value`, `n Values`).
/// A single value is printed on its own; two or more values print every
/// measure, leaving out skewness and kurtosis when they are undefined.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    stats: &'a Accumulator,
}

impl<'a> Report<'a> {
    /// Create a report over the current state of `stats`
    pub fn new(stats: &'a Accumulator) -> Self {
        Self { stats }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.stats.count();
        match count {
            0 => return f.write_str("No Values"),
            1 => f.write_str("1 Value")?,
            n => write!(f, "{} Values", n)?,
        }

        if count == 1 {
            if let Some(value) = self.stats.minimum() {
                write!(f, "\n {} = {}", VALUE_LABEL, General(value))?;
            }
            return Ok(());
        }

        for measure in Measure::ALL {
            match self.stats.measure(measure) {
                Some(value) => write!(f, "\n {} = {}", measure.label(), General(value))?,
                None => debug_assert!(measure.needs_spread(), "{} undefined", measure),
            }
        }
        Ok(())
    }
}

impl Accumulator {
    /// Text report of the measures, see [`Report`]
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

/// Text report of the measures as an owned string
pub fn description(stats: &Accumulator) -> String {
    stats.report().to_string()
}

/// `f32` printed with `%g` rules at six significant digits
///
/// The value is widened to `f64` first. Fixed notation is used when the
/// decimal exponent is in `-4..6`, scientific otherwise; trailing zeros are
/// dropped.
#[derive(Clone, Copy, Debug)]
pub struct General(pub f32);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = f64::from(self.0);

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        // Rounding to the final digit count can carry into the exponent
        // (999999.5 -> 1e+06), so take the exponent from the rounded form.
        let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if (-4..PRECISION).contains(&exponent) {
            let decimals = (PRECISION - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
