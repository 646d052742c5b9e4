//! Accumulates values on the rayon pool and prints the combined report.
//!
//! Run with: RUST_LOG=flowmoments=debug cargo run --example hello_parallel_statistics --features parallel

use flowmoments::statistics::parallel;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let values = [1.0f32, 2.0, 3.0];
    let statistics = parallel::accumulate(&values);

    println!("{}", statistics.report());
}
