//! Metric-score to reading-age conversion.
//!
//! Each converter interpolates linearly over a fixed breakpoint table and
//! clamps to the boundary age outside the table's domain. Clamped results
//! stay distinguishable from interpolated ones.

use serde::{Deserialize, Serialize};

/// Estimated reading age for a metric score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "age", rename_all = "lowercase")]
pub enum AgeEstimate {
    /// The score fell outside the table; pinned to the boundary age.
    Clamped(u32),
    /// Exact linear interpolation between adjacent breakpoints.
    Interpolated(f64),
}

impl AgeEstimate {
    /// The estimate as plain years, whichever variant.
    pub fn years(&self) -> f64 {
        match *self {
            AgeEstimate::Clamped(age) => f64::from(age),
            AgeEstimate::Interpolated(age) => age,
        }
    }
}

/// `(metric value, reading age)` breakpoints, ascending by metric value.
type Table = &'static [(f64, f64)];

// Higher FRES reads easier, so the age column descends.
const FRES_TABLE: Table = &[
    (30.0, 24.0),
    (50.0, 18.0),
    (60.0, 15.0),
    (70.0, 13.0),
    (80.0, 12.0),
    (90.0, 11.0),
    (100.0, 10.0),
];

const ARI_TABLE: Table = &[
    (1.0, 5.0),
    (2.0, 6.0),
    (3.0, 7.0),
    (4.0, 9.0),
    (5.0, 10.0),
    (6.0, 11.0),
    (7.0, 12.0),
    (8.0, 13.0),
    (9.0, 14.0),
    (10.0, 15.0),
    (11.0, 16.0),
    (12.0, 17.0),
    (13.0, 18.0),
    (14.0, 24.0),
];

const GFI_TABLE: Table = &[
    (6.0, 11.0),
    (7.0, 12.0),
    (8.0, 13.0),
    (9.0, 14.0),
    (10.0, 15.0),
    (11.0, 16.0),
    (12.0, 17.0),
    (13.0, 19.0),
    (14.0, 20.0),
    (15.0, 21.0),
    (16.0, 23.0),
    (17.0, 24.0),
];

// Callers guarantee value lies within the table's domain.
fn interpolate(table: Table, value: f64) -> f64 {
    for pair in table.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if value <= x1 {
            return y0 + (value - x0) * (y1 - y0) / (x1 - x0);
        }
    }
    table[table.len() - 1].1
}

/// Reading age for a Flesch Reading Ease score. Higher scores read younger.
pub fn convert_fres(value: f64) -> AgeEstimate {
    if value < 30.0 {
        AgeEstimate::Clamped(24)
    } else if value > 100.0 {
        AgeEstimate::Clamped(10)
    } else {
        AgeEstimate::Interpolated(interpolate(FRES_TABLE, value))
    }
}

/// Reading age for an Automated Readability Index score.
pub fn convert_ari(value: f64) -> AgeEstimate {
    if value > 14.0 {
        AgeEstimate::Clamped(24)
    } else if value < 1.0 {
        AgeEstimate::Clamped(5)
    } else {
        AgeEstimate::Interpolated(interpolate(ARI_TABLE, value))
    }
}

/// Reading age for a Gunning Fog Index score.
pub fn convert_gfi(value: f64) -> AgeEstimate {
    if value > 17.0 {
        AgeEstimate::Clamped(24)
    } else if value < 6.0 {
        AgeEstimate::Clamped(11)
    } else {
        AgeEstimate::Interpolated(interpolate(GFI_TABLE, value))
    }
}
