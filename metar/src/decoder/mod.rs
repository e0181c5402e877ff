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

//! Report decoding.
//!
//! A report is decoded in a single pass over its tokens. The groups of a
//! report have a fixed order, so the decoder walks through the sections of a
//! report and only tries to decode a token as the group of the current
//! section:
//!
//! ```text
//! Station → Time → Wind → Visibility → Weather → Clouds → Temperature → Pressure → Done
//! ```
//!
//! The decoder never goes back to a previous section. Station, time, wind,
//! visibility, temperature and pressure are reported at most once and the
//! decoder moves on once they are decoded. Weather and clouds can be reported
//! multiple times and the decoder stays in those sections until a token of a
//! later section shows up.
//!
//! # Skipping sections
//!
//! Most groups are optional. Before a token is decoded, it is checked against
//! the shape of the visibility, clouds and temperature group (in that order).
//! If the token looks like one of them and the decoder is still in an earlier
//! section, the decoder skips ahead to that section. A token can skip more
//! than one section, e.g. `30/22` looks like a visibility fraction first but
//! then skips on to the temperature.
//!
//! # Errors
//!
//! Decoding never fails. A token that doesn't match the group of the current
//! section is logged and skipped. Thus, a malformed report results in a
//! partially decoded [`Report`].

use chrono::{DateTime, Utc};
use log::{debug, trace, warn};

use crate::error::Error;
use crate::report::*;

mod token;

pub use token::normalize_and_split;

/// Remarks group that ends the decoded part of a report.
const REMARKS: &str = "RMK";

/// Sections of a report in the order they are reported.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
enum Section {
    Station,
    Time,
    Wind,
    Visibility,
    Weather,
    Clouds,
    Temperature,
    Pressure,
    Done,
}

/// Section to skip to if a token has the shape of its group.
type Guard = (Section, fn(&str) -> bool);

/// Guards in the order they are checked. The order matters since a token can
/// pass multiple guards.
const GUARDS: [Guard; 3] = [
    (Section::Visibility, Visibility::is_visibility),
    (Section::Clouds, CloudLayer::is_cloud_layer),
    (Section::Temperature, Temperatures::is_temperature),
];

/// Decodes reports.
///
/// A report has no year and month, so the observation time is anchored to
/// the year and month of the decoder's anchor. By default, this is the
/// current UTC time when the decoder is created.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use metar::{Decoder, Wind};
///
/// let anchor = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
/// let report = Decoder::with_anchor(anchor).decode_str("KJFK 121651Z 00000KT 10SM");
///
/// assert_eq!(report.icao, "KJFK");
/// assert_eq!(report.wind, Some(Wind::Calm));
/// assert_eq!(
///     report.observed_at,
///     Some(Utc.with_ymd_and_hms(2026, 7, 12, 16, 51, 0).unwrap())
/// );
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Decoder {
    anchor: DateTime<Utc>,
}

impl Decoder {
    /// Creates a decoder anchored to the current UTC time.
    pub fn new() -> Self {
        Self::with_anchor(Utc::now())
    }

    /// Creates a decoder anchored to the `anchor`.
    pub fn with_anchor(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> &DateTime<Utc> {
        &self.anchor
    }

    /// Decodes the `raw` report.
    pub fn decode_str(&self, raw: &str) -> Report {
        debug!("decode report: {:?}", raw);
        self.decode(&normalize_and_split(raw))
    }

    /// Decodes a report from its `tokens`.
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Report {
        let mut machine = Machine::new(&self.anchor);
        let mut i = 0;

        while i < tokens.len() {
            let next = tokens.get(i + 1).map(AsRef::as_ref);
            i += machine.consume(tokens[i].as_ref(), next);
        }

        debug!(
            "report {:?} decoded up to {:?}",
            machine.report.icao, machine.section
        );
        machine.report
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/////////////////////////////////////////////////////////////////////////////
// State machine
/////////////////////////////////////////////////////////////////////////////

struct Machine<'a> {
    section: Section,
    report: Report,
    anchor: &'a DateTime<Utc>,
}

impl<'a> Machine<'a> {
    fn new(anchor: &'a DateTime<Utc>) -> Self {
        Self {
            section: Section::Station,
            report: Report::default(),
            anchor,
        }
    }

    fn advance(&mut self, section: Section) {
        debug_assert!(section >= self.section, "decoder can't go back");
        trace!("advance from {:?} to {:?}", self.section, section);
        self.section = section;
    }

    fn skip(&self, token: &str, e: Error) {
        trace!("skip {:?} in {:?}: {}", token, self.section, e);
    }

    /// Consumes the `token` and returns how many tokens were consumed.
    ///
    /// The `next` token is consumed too if it is the variation of the wind.
    fn consume(&mut self, token: &str, next: Option<&str>) -> usize {
        if token == REMARKS {
            self.advance(Section::Done);
            return 1;
        }

        for (section, has_shape) in GUARDS {
            if self.section < section && has_shape(token) {
                self.advance(section);
            }
        }

        match self.section {
            Section::Station => {
                self.report.icao = token.to_string();
                self.advance(Section::Time);
            }

            Section::Time => {
                match token.parse::<DayTime>() {
                    Ok(day_time) => {
                        // a day outside of the anchor month leaves the time
                        // empty but the group is still consumed
                        match day_time.anchored(self.anchor) {
                            Ok(observed_at) => self.report.observed_at = Some(observed_at),
                            Err(e) => {
                                warn!("report {} has invalid time: {}", self.report.icao, e)
                            }
                        }
                        self.advance(Section::Wind);
                    }
                    Err(e) => self.skip(token, e),
                }
            }

            Section::Wind => {
                // automated station without any influence of an observer
                if token == "AUTO" {
                    return 1;
                }

                // a missing wind could be followed by the visibility, thus
                // we move on even if the wind can't be decoded
                self.advance(Section::Visibility);

                match token.parse::<Wind>() {
                    Ok(mut wind) => {
                        let variation =
                            next.filter(|next| *next != "CAVOK" && next.contains('V'));

                        let consumed = match variation {
                            Some(variation) => match wind.set_variation(variation) {
                                Ok(()) => 2,
                                Err(e) => {
                                    self.skip(variation, e);
                                    1
                                }
                            },
                            None => 1,
                        };

                        self.report.wind = Some(wind);
                        return consumed;
                    }
                    Err(e) => self.skip(token, e),
                }
            }

            Section::Visibility => match token.parse::<Visibility>() {
                Ok(visibility) => {
                    // no weather is reported with CAVOK
                    let section = match visibility.source {
                        VisibilitySource::CeilingAndVisibilityOk => Section::Clouds,
                        _ => Section::Weather,
                    };
                    self.report.visibility = Some(visibility);
                    self.advance(section);
                }
                Err(e) => self.skip(token, e),
            },

            Section::Weather => match Condition::parse_group(token) {
                Ok(conditions) => self.report.conditions.extend(conditions),
                Err(e) => self.skip(token, e),
            },

            Section::Clouds => match token.parse::<CloudLayer>() {
                Ok(layer) => self.report.clouds.push(layer),
                Err(e) => self.skip(token, e),
            },

            Section::Temperature => {
                if token == MISSING_TEMPERATURES {
                    self.advance(Section::Pressure);
                    return 1;
                }

                match token.parse::<Temperatures>() {
                    Ok(temperature) => {
                        self.report.temperature = Some(temperature);
                        self.advance(Section::Pressure);
                    }
                    Err(e) => self.skip(token, e),
                }
            }

            Section::Pressure => match token.parse::<Qnh>() {
                Ok(qnh) => {
                    self.report.pressure = Some(qnh);
                    self.advance(Section::Done);
                }
                Err(e) => self.skip(token, e),
            },

            Section::Done => (),
        }

        1
    }
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
