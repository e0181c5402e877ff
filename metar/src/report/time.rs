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

use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::Error;

/// The day-time group `ddhhmmZ` of a report.
///
/// The group has no year and month. Use [`DayTime::anchored`] to get the
/// observation time within a known month.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DayTime {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl DayTime {
    /// Returns the date-time at this day and time in the year and month of
    /// the `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateTime`] if the day doesn't exist in the anchor's
    /// month or the time is out of range.
    ///
    /// [`InvalidDateTime`]: Error::InvalidDateTime
    pub fn anchored(&self, anchor: &DateTime<Utc>) -> Result<DateTime<Utc>, Error> {
        Utc.with_ymd_and_hms(
            anchor.year(),
            anchor.month(),
            self.day,
            self.hour,
            self.minute,
            0,
        )
        .single()
        .ok_or(Error::InvalidDateTime {
            day: self.day,
            hour: self.hour,
            minute: self.minute,
        })
    }
}

impl FromStr for DayTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = regex!(r"^(\d{2})(\d{2})(\d{2})Z$")
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        Ok(Self {
            day: capture!(caps, 1, u32, s)?,
            hour: capture!(caps, 2, u32, s)?,
            minute: capture!(caps, 3, u32, s)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 8, 30, 12)
            .single()
            .expect("anchor should be valid")
    }

    #[test]
    fn parses_day_time() {
        assert_eq!(
            "121651Z".parse::<DayTime>(),
            Ok(DayTime {
                day: 12,
                hour: 16,
                minute: 51
            })
        );
        assert!("121651".parse::<DayTime>().is_err());
        assert!("1216Z".parse::<DayTime>().is_err());
    }

    #[test]
    fn anchors_to_year_and_month() {
        let dt = DayTime {
            day: 12,
            hour: 16,
            minute: 51,
        }
        .anchored(&anchor())
        .expect("date should exist");

        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 12);
        assert_eq!(dt.hour(), 16);
        assert_eq!(dt.minute(), 51);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn rejects_day_outside_of_month() {
        let day_time = "301200Z".parse::<DayTime>().expect("group should parse");
        assert_eq!(
            day_time.anchored(&anchor()),
            Err(Error::InvalidDateTime {
                day: 30,
                hour: 12,
                minute: 0
            })
        );
    }
}
