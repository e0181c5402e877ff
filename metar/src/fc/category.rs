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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants;
use crate::Report;

/// Flight category from the ceiling and visibility.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum FlightCategory {
    /// Visual flight rules.
    VFR,
    /// Marginal visual flight rules.
    MVFR,
    /// Instrument flight rules.
    IFR,
    /// Low instrument flight rules.
    LIFR,
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VFR => write!(f, "VFR"),
            Self::MVFR => write!(f, "MVFR"),
            Self::IFR => write!(f, "IFR"),
            Self::LIFR => write!(f, "LIFR"),
        }
    }
}

/// Limits as `(ceiling in ft, visibility in SM, category)` where the category
/// applies if the ceiling or visibility is below its limit. The limits are
/// checked in order and the first match wins.
const LIMITS: [(u32, f32, FlightCategory); 3] = [
    (500, 1.0, FlightCategory::LIFR),
    (1000, 3.0, FlightCategory::IFR),
    (3000, 5.0, FlightCategory::MVFR),
];

/// Returns the flight category of a `report`.
///
/// The ceiling is the lowest broken or overcast layer and unlimited if there
/// is none. A missing visibility is assumed to be 10 SM.
///
/// # Examples
///
/// ```
/// use metar::fc::FlightCategory;
/// use metar::Decoder;
///
/// let report = Decoder::new().decode_str("KJFK 121651Z 18015KT 2SM BKN004 10/09 A2992");
/// assert_eq!(report.flight_category(), FlightCategory::LIFR);
/// ```
pub fn flight_category(report: &Report) -> FlightCategory {
    let ceiling = report.ceiling().unwrap_or(u32::MAX);
    let visibility = report
        .visibility
        .as_ref()
        .map(|vis| vis.statute_miles)
        .unwrap_or(constants::VISIBILITY_UNLIMITED_SM);

    LIMITS
        .iter()
        .find(|(min_ceiling, min_visibility, _)| {
            ceiling < *min_ceiling || visibility < *min_visibility
        })
        .map(|(_, _, category)| *category)
        .unwrap_or(FlightCategory::VFR)
}
