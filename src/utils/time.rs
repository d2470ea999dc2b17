//! Time utilities

use std::time::Duration;

/// Format a duration with the largest unit that keeps it readable
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}
