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
use crate::fc;

/// Marker reported if temperature and dewpoint are missing.
pub(crate) const MISSING: &str = "/////";

/// Air temperature and dewpoint in degree Celsius.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperatures {
    pub air_c: i16,
    pub dewpoint_c: i16,
}

impl Temperatures {
    pub fn new(air_c: i16, dewpoint_c: i16) -> Self {
        Self { air_c, dewpoint_c }
    }

    /// Returns the air temperature in degree Fahrenheit.
    pub fn air_f(&self) -> f32 {
        fc::c_to_f(self.air_c.into())
    }

    /// Returns the dewpoint in degree Fahrenheit.
    pub fn dewpoint_f(&self) -> f32 {
        fc::c_to_f(self.dewpoint_c.into())
    }

    /// Returns the relative humidity in percent.
    ///
    /// See [`fc::relative_humidity`].
    pub fn relative_humidity(&self) -> f32 {
        fc::relative_humidity(self.air_c.into(), self.dewpoint_c.into())
    }

    /// Returns `true` if `s` has the shape of a temperature group or is the
    /// missing temperature marker.
    pub(crate) fn is_temperature(s: &str) -> bool {
        s == MISSING || pattern().is_match(s)
    }
}

fn pattern() -> &'static regex::Regex {
    regex!(r"^(M?\d+)/(M?\d+)$")
}

/// Parses a value where a leading `M` marks a value below zero.
fn parse_celsius(s: &str) -> Option<i16> {
    match s.strip_prefix('M') {
        Some(value) => value.parse::<i16>().ok().map(|value| -value),
        None => s.parse::<i16>().ok(),
    }
}

impl FromStr for Temperatures {
    type Err = Error;

    /// Parses a temperature group e.g. `30/22` or `M01/M03`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = pattern()
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        match (parse_celsius(&caps[1]), parse_celsius(&caps[2])) {
            (Some(air_c), Some(dewpoint_c)) => Ok(Self { air_c, dewpoint_c }),
            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

impl fmt::Display for Temperatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C, dewpoint {} °C", self.air_c, self.dewpoint_c)
    }
}
