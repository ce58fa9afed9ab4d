use std::env;

use choptop_core::RowBounds;
use tracing::warn;

/// Bounds applied to every rows-per-page computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowsConfig {
    pub bounds: RowBounds,
}

impl RowsConfig {
    /// Reads `ROWS_MIN` and `ROWS_MAX`.
    ///
    /// Unparseable values fall back to the defaults (8 and 50); an inverted
    /// pair is reordered.
    pub fn from_env() -> Self {
        let min = read_u32("ROWS_MIN", RowBounds::DEFAULT.min);
        let max = read_u32("ROWS_MAX", RowBounds::DEFAULT.max);
        if min > max {
            warn!(min, max, "ROWS_MIN is greater than ROWS_MAX, swapping");
        }

        Self {
            bounds: RowBounds::new(min, max),
        }
    }
}

fn read_u32(key: &str, default: u32) -> u32 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
