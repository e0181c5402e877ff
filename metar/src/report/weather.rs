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

/// Intensity or proximity in front of a weather group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum Qualifier {
    /// `-`
    Light,
    /// `+`
    Heavy,
    /// `VC`
    Vicinity,
    /// `RE`
    Recent,
}

impl Qualifier {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Light => "-",
            Self::Heavy => "+",
            Self::Vicinity => "VC",
            Self::Recent => "RE",
        }
    }
}

impl FromStr for Qualifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Light),
            "+" => Ok(Self::Heavy),
            "VC" => Ok(Self::Vicinity),
            "RE" => Ok(Self::Recent),
            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

macro_rules! phenomena {
    ($($(#[$meta:meta])* $variant:ident => $code:literal, $description:literal;)+) => {
        /// Two-letter weather phenomenon code.
        ///
        /// Descriptors (e.g. `SH` for showers) are phenomena on their own, thus
        /// `SHRA` are two phenomena.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(C)]
        pub enum Phenomenon {
            $($(#[$meta])* $variant,)+
        }

        impl Phenomenon {
            /// Returns the two-letter code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns a plain English description.
            pub fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }
        }

        impl FromStr for Phenomenon {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(Error::UnexpectedString(s.to_string())),
                }
            }
        }
    };
}

phenomena! {
    // descriptors
    Shallow => "MI", "shallow";
    Partial => "PR", "partial";
    Patches => "BC", "patches";
    LowDrifting => "DR", "low drifting";
    Blowing => "BL", "blowing";
    Showers => "SH", "showers";
    Thunderstorm => "TS", "thunderstorm";
    Freezing => "FZ", "freezing";
    // precipitation
    Drizzle => "DZ", "drizzle";
    Rain => "RA", "rain";
    Snow => "SN", "snow";
    SnowGrains => "SG", "snow grains";
    IceCrystals => "IC", "ice crystals";
    IcePellets => "PL", "ice pellets";
    Hail => "GR", "hail";
    SmallHail => "GS", "small hail";
    /// Precipitation of unknown type reported by automated stations.
    Unknown => "UP", "unknown precipitation";
    // obscuration
    Mist => "BR", "mist";
    Fog => "FG", "fog";
    Smoke => "FU", "smoke";
    VolcanicAsh => "VA", "volcanic ash";
    Dust => "DU", "widespread dust";
    Sand => "SA", "sand";
    Haze => "HZ", "haze";
    Spray => "PY", "spray";
    // other
    DustWhirls => "PO", "dust whirls";
    Squalls => "SQ", "squalls";
    FunnelCloud => "FC", "funnel cloud";
    Sandstorm => "SS", "sandstorm";
    Duststorm => "DS", "duststorm";
}

/// A single present weather condition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    pub qualifier: Option<Qualifier>,
    pub phenomenon: Phenomenon,
}

impl Condition {
    /// Parses a weather group into its conditions.
    ///
    /// A group is an optional [`Qualifier`] followed by one to three
    /// concatenated phenomena, e.g. `+TSRA`. Each phenomenon becomes its own
    /// condition in the order it was reported, and all of them share the
    /// qualifier of the group.
    ///
    /// # Errors
    ///
    /// Returns [`UnexpectedString`] if `s` is no weather group or contains
    /// an unknown phenomenon.
    ///
    /// [`UnexpectedString`]: Error::UnexpectedString
    pub fn parse_group(s: &str) -> Result<Vec<Self>, Error> {
        let caps = regex!(r"^(\+|-|VC|RE)?((?:[A-Z]{2}){1,3})$")
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let qualifier = caps
            .get(1)
            .map(|m| m.as_str().parse::<Qualifier>())
            .transpose()?;

        caps[2]
            .as_bytes()
            .chunks(2)
            .map(|code| {
                let code = std::str::from_utf8(code)
                    .map_err(|_| Error::UnexpectedString(s.to_string()))?;
                let phenomenon = code
                    .parse::<Phenomenon>()
                    .map_err(|_| Error::UnexpectedString(s.to_string()))?;
                Ok(Self {
                    qualifier,
                    phenomenon,
                })
            })
            .collect()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = self.qualifier {
            write!(f, "{}", qualifier.symbol())?;
        }
        write!(f, "{}", self.phenomenon.code())
    }
}
