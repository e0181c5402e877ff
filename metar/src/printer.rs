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

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::report::{Qnh, Report, Temperatures};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum PressureUnit {
    #[default]
    Hectopascal,
    InchesOfMercury,
}

/// Units in which a report is printed.
///
/// The units affect only how values are printed, the decoded [`Report`] is
/// always the same.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Units {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
}

/// Prints a decoded report in plain text.
///
/// Each group that was decoded is printed on its own line, prefixed with a
/// label padded to a common width. Groups that are missing in the report are
/// left out.
///
/// # Examples
///
/// ```
/// use metar::{Decoder, Printer};
///
/// let report = Decoder::new().decode_str("EDDH 121650Z 27010KT 9999 FEW020 15/10 Q1013");
/// let printer = Printer::default();
///
/// assert!(printer.print(&report).contains("QNH          1013 hPa"));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Printer {
    pub units: Units,
}

impl Printer {
    const LABEL_WIDTH: usize = 13;

    pub fn new(units: Units) -> Self {
        Self { units }
    }

    pub fn print(&self, report: &Report) -> String {
        let mut lines: Vec<(&str, String)> = vec![("Station", report.icao.clone())];

        if let Some(observed_at) = report.observed_at {
            lines.push(("Observed", observed_at.format("%d %H:%MZ").to_string()));
        }

        if let Some(wind) = &report.wind {
            lines.push(("Wind", wind.to_string()));
        }

        if let Some(visibility) = &report.visibility {
            lines.push(("Visibility", visibility.to_string()));
        }

        if !report.conditions.is_empty() {
            let conditions = report
                .conditions
                .iter()
                .map(|c| match c.qualifier {
                    Some(qualifier) => {
                        format!("{} ({})", c.phenomenon.description(), qualifier.symbol())
                    }
                    None => c.phenomenon.description().to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(("Weather", conditions));
        }

        for layer in &report.clouds {
            lines.push(("Clouds", layer.to_string()));
        }

        if let Some(temperature) = &report.temperature {
            lines.push(("Temperature", self.temperature(temperature)));
            lines.push((
                "Humidity",
                format!("{:.0} %", temperature.relative_humidity()),
            ));
        }

        if let Some(qnh) = &report.pressure {
            lines.push(("QNH", self.pressure(qnh)));
        }

        lines.push(("Category", report.flight_category().to_string()));

        let mut s = String::new();
        for (label, value) in lines {
            // writing to a string never fails
            let _ = writeln!(s, "{label:<width$}{value}", width = Self::LABEL_WIDTH);
        }
        s
    }

    fn temperature(&self, temperature: &Temperatures) -> String {
        match self.units.temperature {
            TemperatureUnit::Celsius => format!(
                "{} °C, dewpoint {} °C",
                temperature.air_c, temperature.dewpoint_c
            ),
            TemperatureUnit::Fahrenheit => format!(
                "{:.0} °F, dewpoint {:.0} °F",
                temperature.air_f(),
                temperature.dewpoint_f()
            ),
        }
    }

    fn pressure(&self, qnh: &Qnh) -> String {
        match self.units.pressure {
            PressureUnit::Hectopascal => format!("{} hPa", qnh.hpa),
            PressureUnit::InchesOfMercury => format!("{:.2} inHg", qnh.inhg),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::Decoder;

    const KJFK: &str =
        "KJFK 121651Z 18015G25KT 1 3/4SM -RA BR FEW020 BKN250 30/22 A2992 RMK AO2";

    fn decode() -> Report {
        let anchor = Utc
            .with_ymd_and_hms(2026, 8, 1, 0, 0, 0)
            .single()
            .expect("anchor should be valid");
        Decoder::with_anchor(anchor).decode_str(KJFK)
    }

    #[test]
    fn prints_report() {
        let printer = Printer::default();
        assert_eq!(
            printer.print(&decode()),
            "\
Station      KJFK
Observed     12 16:51Z
Wind         180° at 15 kt gusting 25 kt
Visibility   1 3/4 SM
Weather      rain (-), mist
Clouds       FEW 2000 ft
Clouds       BKN 25000 ft
Temperature  30 °C, dewpoint 22 °C
Humidity     62 %
QNH          1013 hPa
Category     IFR
"
        );
    }

    #[test]
    fn prints_in_preferred_units() {
        let printer = Printer::new(Units {
            temperature: TemperatureUnit::Fahrenheit,
            pressure: PressureUnit::InchesOfMercury,
        });
        let s = printer.print(&decode());

        assert!(s.contains("Temperature  86 °F, dewpoint 72 °F\n"));
        assert!(s.contains("QNH          29.92 inHg\n"));
    }

    #[test]
    fn prints_only_station_of_empty_report() {
        let report = Report {
            icao: "EDDH".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Printer::default().print(&report),
            "Station      EDDH\nCategory     VFR\n"
        );
    }
}
