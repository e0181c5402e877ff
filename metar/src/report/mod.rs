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

//! Decoded report and its groups.
//!
//! Each group of a report is its own type that can be parsed from a single
//! token with [`str::parse`]. The [`Decoder`] decides which group a token
//! belongs to and assembles the groups into a [`Report`].
//!
//! [`Decoder`]: crate::Decoder

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fc::{self, FlightCategory};

mod cloud;
mod pressure;
mod temperature;
mod time;
mod visibility;
mod weather;
mod wind;

pub use cloud::{CloudCover, CloudLayer, Convective};
pub use pressure::Qnh;
pub(crate) use temperature::MISSING as MISSING_TEMPERATURES;
pub use temperature::Temperatures;
pub use time::DayTime;
pub use visibility::{Visibility, VisibilitySource};
pub use weather::{Condition, Phenomenon, Qualifier};
pub use wind::{Speed, SpeedUnit, Wind};

/// A decoded METAR.
///
/// Only the station is always present. Every other group is optional and
/// left empty if it wasn't reported or couldn't be decoded.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// ICAO location indicator of the reporting station.
    pub icao: String,
    pub observed_at: Option<DateTime<Utc>>,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    /// Present weather in the order reported.
    pub conditions: Vec<Condition>,
    /// Cloud layers in the order reported, usually from lowest to highest.
    pub clouds: Vec<CloudLayer>,
    pub temperature: Option<Temperatures>,
    pub pressure: Option<Qnh>,
}

impl Report {
    /// Returns the height of the lowest broken or overcast layer in feet.
    ///
    /// Returns `None` if no layer forms a ceiling.
    pub fn ceiling(&self) -> Option<u32> {
        self.clouds
            .iter()
            .filter(|layer| layer.cover.is_ceiling())
            .map(|layer| layer.height_ft)
            .min()
    }

    /// Returns the flight category of this report.
    ///
    /// See [`fc::flight_category`].
    pub fn flight_category(&self) -> FlightCategory {
        fc::flight_category(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_is_lowest_broken_or_overcast_layer() {
        let report = Report {
            clouds: vec![
                CloudLayer::new(CloudCover::Few, 800),
                CloudLayer::new(CloudCover::Overcast, 4000),
                CloudLayer::new(CloudCover::Broken, 2500),
            ],
            ..Default::default()
        };
        assert_eq!(report.ceiling(), Some(2500));
    }

    #[test]
    fn no_ceiling_without_broken_or_overcast_layer() {
        let report = Report {
            clouds: vec![
                CloudLayer::new(CloudCover::Few, 800),
                CloudLayer::new(CloudCover::Scattered, 4000),
                CloudLayer::new(CloudCover::VerticalVisibility, 200),
            ],
            ..Default::default()
        };
        assert_eq!(report.ceiling(), None);
    }
}
