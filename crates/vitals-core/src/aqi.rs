//! Air Quality Index from PM2.5 and PM10 concentrations.
//!
//! Each pollutant maps through its own breakpoint table by piecewise-linear
//! interpolation; the overall AQI is the larger of the two rounded
//! sub-indices.
//!
//! Every segment spans the same index range `i_low..i_high` (0..300) rather
//! than the stepped EPA sub-ranges. Readings below zero are not rejected and
//! yield a negative sub-index.

/// Breakpoint table for one pollutant species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointTable {
    /// Ascending concentration breakpoints (µg/m³).
    pub breakpoints: &'static [f64],
    pub c_low: f64,
    pub c_high: f64,
    pub i_low: f64,
    pub i_high: f64,
}

pub const PM25_TABLE: BreakpointTable = BreakpointTable {
    breakpoints: &[12.0, 35.4, 55.4, 150.4, 250.4],
    c_low: 0.0,
    c_high: 250.4,
    i_low: 0.0,
    i_high: 300.0,
};

pub const PM10_TABLE: BreakpointTable = BreakpointTable {
    breakpoints: &[54.0, 154.0, 254.0, 354.0, 424.0],
    c_low: 0.0,
    c_high: 424.0,
    i_low: 0.0,
    i_high: 300.0,
};

#[inline]
fn lerp_index(value: f64, c_from: f64, run: f64, i_low: f64, i_high: f64) -> f64 {
    (i_high - i_low) / run * (value - c_from) + i_low
}

/// Unrounded sub-index for `value` against `table`.
///
/// - `value <= b[0]`: slope over the whole table, anchored at `(c_low, i_low)`.
/// - `b[i-1] < value <= b[i]`: slope over `b[i-1]..b[i]`, anchored at
///   `(b[i-1], i_low)`.
/// - `value > b[last]`: extrapolated from `(b[last], i_low)` with run
///   `c_high − b[last]`. When that run is zero (both shipped tables) the
///   last interior span is used instead.
///
/// A table with no breakpoints degenerates to the single outer segment.
pub fn interpolate_sub_index(value: f64, table: &BreakpointTable) -> f64 {
    let bp = table.breakpoints;
    let (i_low, i_high) = (table.i_low, table.i_high);

    if bp.first().map_or(true, |&first| value <= first) {
        return lerp_index(value, table.c_low, table.c_high - table.c_low, i_low, i_high);
    }

    for i in 1..bp.len() {
        if value <= bp[i] {
            return lerp_index(value, bp[i - 1], bp[i] - bp[i - 1], i_low, i_high);
        }
    }

    let last = bp[bp.len() - 1];
    let mut run = table.c_high - last;
    if run <= 0.0 {
        run = if bp.len() >= 2 { last - bp[bp.len() - 2] } else { last - table.c_low };
    }
    lerp_index(value, last, run, i_low, i_high)
}

/// Round to the nearest integer, ties to even.
pub fn round_index(value: f64) -> i64 {
    value.round_ties_even() as i64
}

pub fn calculate_aqi_pm25(pm25: f64) -> i64 {
    round_index(interpolate_sub_index(pm25, &PM25_TABLE))
}

pub fn calculate_aqi_pm10(pm10: f64) -> i64 {
    round_index(interpolate_sub_index(pm10, &PM10_TABLE))
}

/// Overall AQI: the worse of the two rounded sub-indices.
pub fn calculate_aqi(pm25: f64, pm10: f64) -> i64 {
    if pm25 < 0.0 || pm10 < 0.0 {
        log::warn!("negative concentration (PM2.5={pm25}, PM10={pm10}); index will be below scale");
    }
    calculate_aqi_pm25(pm25).max(calculate_aqi_pm10(pm10))
}
