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

//! METAR decoder.
//!
//! This crate decodes METAR aviation routine weather reports into a typed
//! [`Report`]. Decoding is forgiving: groups that can't be decoded are
//! skipped, and a malformed report results in a partially decoded report
//! rather than an error.
//!
//! # Examples
//!
//! Lets decode a report of John F Kennedy Intl airport:
//!
//! ```
//! use metar::prelude::*;
//!
//! let report = metar::decode("METAR KJFK 121651Z 18015G25KT 10SM FEW020 SCT250 30/22 A2992");
//!
//! assert_eq!(report.icao, "KJFK");
//! assert_eq!(report.wind.map(|wind| wind.speed()), Some(Speed::kt(15)));
//! assert_eq!(report.pressure.map(|qnh| qnh.hpa), Some(1013));
//! assert_eq!(report.flight_category(), FlightCategory::VFR);
//! ```
//!
//! The observation time of a report has only a day, hour and minute. Use a
//! [`Decoder`] with an anchor to decode reports of another month:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use metar::Decoder;
//!
//! let anchor = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
//! let report = Decoder::with_anchor(anchor).decode_str("EDDH 301020Z 27008KT CAVOK 02/M03 Q1031");
//!
//! assert_eq!(report.observed_at, Utc.with_ymd_and_hms(2025, 12, 30, 10, 20, 0).single());
//! ```
//!
//! Decoded reports can be printed in the units a user prefers with the
//! [`Printer`].

#[macro_use]
mod macros;

mod decoder;
mod error;
pub mod fc;
mod printer;
pub mod report;

pub use decoder::{normalize_and_split, Decoder};
pub use error::{Error, Result};
pub use fc::FlightCategory;
pub use printer::{PressureUnit, Printer, TemperatureUnit, Units};
pub use report::{
    CloudCover, CloudLayer, Condition, Convective, Phenomenon, Qnh, Qualifier, Report, Speed,
    SpeedUnit, Temperatures, Visibility, VisibilitySource, Wind,
};

/// Decodes the `raw` report observed in the current month.
///
/// This is a shortcut for [`Decoder::new`] followed by
/// [`Decoder::decode_str`].
pub fn decode(raw: &str) -> Report {
    Decoder::new().decode_str(raw)
}

pub mod prelude {
    pub use crate::decoder::Decoder;
    pub use crate::fc::FlightCategory;
    pub use crate::printer::{Printer, Units};
    pub use crate::report::*;
}
