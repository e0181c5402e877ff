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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fc::{self, constants};

/// How the visibility was reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum VisibilitySource {
    /// In meters without unit e.g. `0800`.
    Meters,
    /// In statute miles e.g. `10SM` or `1 3/4SM`.
    StatuteMiles,
    /// As `CAVOK` (or `CLR` in place of the visibility).
    CeilingAndVisibilityOk,
}

/// The prevailing visibility.
///
/// Both the meters and statute miles are always set, one of them is the
/// reported value and the other is converted. Which one was reported is
/// stored in the `source`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    pub meters: u32,
    pub statute_miles: f32,
    pub source: VisibilitySource,
    /// The fraction as reported e.g. `1 3/4`, if the visibility was reported
    /// in fractions of statute miles.
    pub fraction: Option<String>,
}

impl Visibility {
    /// Visibility of 10 km or more.
    pub fn cavok() -> Self {
        Self {
            meters: constants::VISIBILITY_UNLIMITED_M,
            statute_miles: constants::VISIBILITY_UNLIMITED_SM,
            source: VisibilitySource::CeilingAndVisibilityOk,
            fraction: None,
        }
    }

    /// Visibility reported in meters.
    ///
    /// The reported maximum of 9999 m means 10 km or more and is converted to
    /// 10 SM instead of its exact value.
    pub fn from_meters(meters: u32) -> Self {
        let statute_miles = if meters == constants::VISIBILITY_UNLIMITED_M {
            constants::VISIBILITY_UNLIMITED_SM
        } else {
            fc::m_to_sm(meters as f32)
        };

        Self {
            meters,
            statute_miles,
            source: VisibilitySource::Meters,
            fraction: None,
        }
    }

    /// Visibility reported in statute miles.
    pub fn from_statute_miles(statute_miles: f32, fraction: Option<String>) -> Self {
        Self {
            meters: fc::sm_to_m(statute_miles).round() as u32,
            statute_miles,
            source: VisibilitySource::StatuteMiles,
            fraction,
        }
    }

    /// Returns `true` if `s` has the shape of a visibility group.
    ///
    /// This includes shapes that are no valid visibility like `1/2` without
    /// unit or a zero denominator.
    pub(crate) fn is_visibility(s: &str) -> bool {
        pattern().is_match(s)
    }
}

fn pattern() -> &'static regex::Regex {
    regex!(r"^(?:(\d+) )?(\d+)(?:/(\d+))?(SM)?$")
}

impl FromStr for Visibility {
    type Err = Error;

    /// Parses the visibility from `CAVOK`, meters (`0800`) or statute miles
    /// (`10SM`, `3/4SM`, `1 3/4SM`).
    ///
    /// `CLR` is accepted in place of the visibility and handled as `CAVOK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "CAVOK" || s == "CLR" {
            return Ok(Self::cavok());
        }

        let caps = pattern()
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let numerator = capture!(caps, 2, u32, s)?;
        let whole = caps.get(1).map(|_| capture!(caps, 1, u32, s)).transpose()?;
        let denominator = caps.get(3).map(|_| capture!(caps, 3, u32, s)).transpose()?;

        match (caps.get(4), whole, denominator) {
            // meters without unit
            (None, None, None) => Ok(Self::from_meters(numerator)),

            (Some(_), None, None) => Ok(Self::from_statute_miles(numerator as f32, None)),

            (Some(unit), whole, Some(denominator)) if denominator > 0 => {
                let statute_miles =
                    whole.unwrap_or_default() as f32 + numerator as f32 / denominator as f32;
                let fraction = s[..unit.start()].to_string();
                Ok(Self::from_statute_miles(statute_miles, Some(fraction)))
            }

            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            VisibilitySource::CeilingAndVisibilityOk => write!(f, "CAVOK"),
            VisibilitySource::Meters if self.meters == constants::VISIBILITY_UNLIMITED_M => {
                write!(f, "10 km or more")
            }
            VisibilitySource::Meters => write!(f, "{} m", self.meters),
            VisibilitySource::StatuteMiles => match &self.fraction {
                Some(fraction) => write!(f, "{fraction} SM"),
                None => write!(f, "{} SM", self.statute_miles),
            },
        }
    }
}
