// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Flight Computer.
//!
//! Unit conversions and values derived from a decoded [`Report`]. All
//! functions are total over finite inputs and never round unless stated.
//! Rounding to the precision a value is reported in is left to the caller.
//!
//! [`Report`]: crate::Report

mod category;
pub mod constants;

pub use category::*;

/// Converts a wind speed reported in `MPS` to knots.
pub fn mps_to_kt(mps: f32) -> f32 {
    mps * constants::METER_PER_SECONDS_IN_KNOTS
}

/// Converts kilometers per hour to knots.
pub fn kmh_to_kt(kmh: f32) -> f32 {
    kmh * constants::KILOMETERS_PER_HOUR_IN_KNOTS
}

/// Converts statute miles to meters.
pub fn sm_to_m(sm: f32) -> f32 {
    sm * constants::STATUTE_MILE_IN_METER
}

/// Converts meters to statute miles.
pub fn m_to_sm(m: f32) -> f32 {
    m / constants::STATUTE_MILE_IN_METER
}

/// Converts degree Celsius to degree Fahrenheit.
pub fn c_to_f(c: f32) -> f32 {
    c * constants::CELSIUS_IN_FAHRENHEIT_SCALE + constants::CELSIUS_IN_FAHRENHEIT_OFFSET
}

/// Converts inches of mercury to hectopascal.
pub fn inhg_to_hpa(inhg: f32) -> f32 {
    inhg * constants::INCH_OF_MERCURY_IN_HECTOPASCAL
}

/// Converts hectopascal to inches of mercury.
pub fn hpa_to_inhg(hpa: f32) -> f32 {
    hpa * constants::HECTOPASCAL_IN_INCH_OF_MERCURY
}

/// Returns the relative humidity in percent.
///
/// The humidity is computed from the air temperature `t` and dewpoint `td` in
/// degree Celsius using the Magnus approximation:
///
/// ```text
/// RH = 100 * exp(α(td) - α(t))    with    α(x) = 17.625 * x / (243.04 + x)
/// ```
///
/// The result is rounded to the nearest percent but not clamped, thus a
/// dewpoint above the temperature results in more than 100 %.
///
/// # Examples
///
/// ```
/// use metar::fc::relative_humidity;
///
/// assert_eq!(relative_humidity(20.0, 20.0), 100.0);
/// assert_eq!(relative_humidity(30.0, 22.0), 62.0);
/// ```
pub fn relative_humidity(t: f32, td: f32) -> f32 {
    fn alpha(x: f32) -> f32 {
        (constants::MAGNUS_B * x) / (constants::MAGNUS_C + x)
    }

    (100.0 * (alpha(td) - alpha(t)).exp()).round()
}

/// Rounds `value` to two decimals.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected} but got {actual}"
        );
    }

    #[test]
    fn converts_speed() {
        assert_close(mps_to_kt(10.0), 8.68976);
        assert_close(kmh_to_kt(100.0), 53.9957);
    }

    #[test]
    fn converts_distance() {
        assert_close(sm_to_m(10.0), 16093.44);
        assert_close(m_to_sm(1609.344), 1.0);
        assert_close(m_to_sm(sm_to_m(2.5)), 2.5);
    }

    #[test]
    fn converts_temperature() {
        assert_close(c_to_f(0.0), 32.0);
        assert_close(c_to_f(30.0), 86.0);
        assert_close(c_to_f(22.0), 71.6);
        assert_close(c_to_f(-40.0), -40.0);
    }

    #[test]
    fn converts_pressure() {
        assert_eq!(inhg_to_hpa(29.92).round(), 1013.0);
        assert_eq!(round2(hpa_to_inhg(1018.0)), 30.06);
        assert_eq!(round2(hpa_to_inhg(1013.0)), 29.91);
    }

    #[test]
    fn relative_humidity_of_saturated_air() {
        assert_eq!(relative_humidity(-5.0, -5.0), 100.0);
        assert_eq!(relative_humidity(15.0, 15.0), 100.0);
    }

    #[test]
    fn relative_humidity_is_not_clamped() {
        assert!(relative_humidity(10.0, 12.0) > 100.0);
    }

    #[test]
    fn relative_humidity_of_dry_air() {
        assert_eq!(relative_humidity(30.0, 22.0), 62.0);
        assert_eq!(relative_humidity(25.0, 5.0), 28.0);
        assert_eq!(relative_humidity(15.0, 10.0), 72.0);
    }
}
