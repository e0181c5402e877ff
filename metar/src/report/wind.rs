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

/// Unit a wind speed is reported in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KT" => Ok(Self::Knots),
            "MPS" => Ok(Self::MetersPerSecond),
            "KMH" => Ok(Self::KilometersPerHour),
            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

/// A wind speed as reported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Speed {
    pub value: u16,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn kt(value: u16) -> Self {
        Self {
            value,
            unit: SpeedUnit::Knots,
        }
    }

    pub fn mps(value: u16) -> Self {
        Self {
            value,
            unit: SpeedUnit::MetersPerSecond,
        }
    }

    pub fn kmh(value: u16) -> Self {
        Self {
            value,
            unit: SpeedUnit::KilometersPerHour,
        }
    }

    /// Returns the speed in knots.
    pub fn to_kt(&self) -> f32 {
        let value = self.value as f32;
        match self.unit {
            SpeedUnit::Knots => value,
            SpeedUnit::MetersPerSecond => fc::mps_to_kt(value),
            SpeedUnit::KilometersPerHour => fc::kmh_to_kt(value),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// The surface wind of a report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wind {
    /// No wind, reported as e.g. `00000KT`.
    Calm,

    /// Wind of variable direction, reported as e.g. `VRB03KT`.
    Variable { speed: Speed, gusts: Option<Speed> },

    /// Wind from a true direction in degrees.
    ///
    /// If the direction varies by 60° or more, the `variable_range` holds the
    /// extreme directions `(from, to)` reported in the group following the
    /// wind e.g. `060V140`.
    Directional {
        degrees: u16,
        speed: Speed,
        gusts: Option<Speed>,
        variable_range: Option<(u16, u16)>,
    },
}

impl Wind {
    /// Returns the mean wind speed. A calm wind has a speed of zero knots.
    pub fn speed(&self) -> Speed {
        match self {
            Self::Calm => Speed::kt(0),
            Self::Variable { speed, .. } | Self::Directional { speed, .. } => *speed,
        }
    }

    /// Returns the gust speed if any.
    pub fn gusts(&self) -> Option<Speed> {
        match self {
            Self::Calm => None,
            Self::Variable { gusts, .. } | Self::Directional { gusts, .. } => *gusts,
        }
    }

    /// Sets the variable range from a `dddVddd` group.
    ///
    /// Only a directional wind can vary in its direction. The range is
    /// ignored on calm or variable wind but the group is still valid.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedString`] if `s` is no variation group.
    ///
    /// [`UnexpectedString`]: Error::UnexpectedString
    pub fn set_variation(&mut self, s: &str) -> Result<(), Error> {
        let caps = regex!(r"^(\d{3})V(\d{3})$")
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let from = capture!(caps, 1, u16, s)?;
        let to = capture!(caps, 2, u16, s)?;

        if from > 360 || to > 360 {
            return Err(Error::UnexpectedString(s.to_string()));
        }

        if let Self::Directional { variable_range, .. } = self {
            *variable_range = Some((from, to));
        }

        Ok(())
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group `(ddd|VRB)[P]ff[Gff](KT|MPS|KMH)`.
    ///
    /// The speeds have two or three digits. A `P` in front of a speed marks
    /// values above the reportable maximum and is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = regex!(r"^(\d{3}|VRB)P?(\d{2,3})(?:GP?(\d{2,3}))?(KT|MPS|KMH)$")
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let unit: SpeedUnit = caps[4].parse()?;
        let speed = Speed {
            value: capture!(caps, 2, u16, s)?,
            unit,
        };
        let gusts = match caps.get(3) {
            Some(_) => Some(Speed {
                value: capture!(caps, 3, u16, s)?,
                unit,
            }),
            None => None,
        };

        if speed.value == 0 && gusts.is_none() {
            return Ok(Self::Calm);
        }

        match &caps[1] {
            "VRB" => Ok(Self::Variable { speed, gusts }),
            direction => {
                let degrees = direction
                    .parse::<u16>()
                    .ok()
                    .filter(|degrees| *degrees <= 360)
                    .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

                Ok(Self::Directional {
                    degrees,
                    speed,
                    gusts,
                    variable_range: None,
                })
            }
        }
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calm => write!(f, "calm"),
            Self::Variable { speed, gusts } => {
                write!(f, "variable at {speed}")?;
                if let Some(gusts) = gusts {
                    write!(f, " gusting {gusts}")?;
                }
                Ok(())
            }
            Self::Directional {
                degrees,
                speed,
                gusts,
                variable_range,
            } => {
                write!(f, "{degrees:03}° at {speed}")?;
                if let Some(gusts) = gusts {
                    write!(f, " gusting {gusts}")?;
                }
                if let Some((from, to)) = variable_range {
                    write!(f, ", varying between {from:03}° and {to:03}°")?;
                }
                Ok(())
            }
        }
    }
}
