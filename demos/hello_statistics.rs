//! Prints the report for the values 1, 2 and 3:
//!
//! ```text
//! 3 Values
//!  Minimum  = 1
//!  Maximum  = 3
//!  Mean     = 2
//!  Abs.Mean = 2
//!  Rms      = 2.16025
//!  Std.Devn = 0.816497
//!  Skewness = 0
//!  Kurtosis = -1.5
//! ```

use flowmoments::statistics::Accumulator;

fn main() {
    let mut statistics = Accumulator::new();

    statistics.add(1.0);
    statistics.add(2.0);
    statistics.add(3.0);

    println!("{}", statistics.report());
}
