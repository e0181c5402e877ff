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

/// Cloud amount in oktas or the vertical visibility into an obscured sky.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum CloudCover {
    /// `FEW` 1-2 oktas.
    Few,
    /// `SCT` 3-4 oktas.
    Scattered,
    /// `BKN` 5-7 oktas.
    Broken,
    /// `OVC` 8 oktas.
    Overcast,
    /// `VV` vertical visibility.
    VerticalVisibility,
}

impl CloudCover {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Few => "FEW",
            Self::Scattered => "SCT",
            Self::Broken => "BKN",
            Self::Overcast => "OVC",
            Self::VerticalVisibility => "VV",
        }
    }

    /// Returns `true` if a layer of this cover forms a ceiling.
    pub fn is_ceiling(&self) -> bool {
        matches!(self, Self::Broken | Self::Overcast)
    }
}

impl FromStr for CloudCover {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FEW" => Ok(Self::Few),
            "SCT" => Ok(Self::Scattered),
            "BKN" => Ok(Self::Broken),
            "OVC" => Ok(Self::Overcast),
            "VV" => Ok(Self::VerticalVisibility),
            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

/// Significant convective cloud type of a layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum Convective {
    /// `CB`
    Cumulonimbus,
    /// `TCU`
    ToweringCumulus,
}

/// A cloud layer with its height above ground level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudLayer {
    pub cover: CloudCover,
    /// Height of the cloud base in feet.
    pub height_ft: u32,
    pub convective: Option<Convective>,
}

impl CloudLayer {
    pub fn new(cover: CloudCover, height_ft: u32) -> Self {
        Self {
            cover,
            height_ft,
            convective: None,
        }
    }

    /// Returns `true` if `s` has the shape of a cloud layer, with or without
    /// height.
    pub(crate) fn is_cloud_layer(s: &str) -> bool {
        pattern().is_match(s)
    }
}

fn pattern() -> &'static regex::Regex {
    regex!(r"^(FEW|SCT|BKN|OVC|VV)(\d+|/{3})?(CB|TCU|/{3})?$")
}

impl FromStr for CloudLayer {
    type Err = Error;

    /// Parses a cloud layer e.g. `BKN016` or `SCT030CB`.
    ///
    /// The height is reported in hundreds of feet.
    ///
    /// # Errors
    ///
    /// A layer without height like `OVC` or `VV///` can't be used and returns
    /// [`MissingCloudHeight`].
    ///
    /// [`MissingCloudHeight`]: Error::MissingCloudHeight
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = pattern()
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let cover: CloudCover = caps[1].parse()?;
        let height_ft = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .and_then(|hundreds| hundreds.checked_mul(100))
            .ok_or_else(|| Error::MissingCloudHeight(s.to_string()))?;
        let convective = match caps.get(3).map(|m| m.as_str()) {
            Some("CB") => Some(Convective::Cumulonimbus),
            Some("TCU") => Some(Convective::ToweringCumulus),
            _ => None,
        };

        Ok(Self {
            cover,
            height_ft,
            convective,
        })
    }
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ft", self.cover.code(), self.height_ft)?;
        match self.convective {
            Some(Convective::Cumulonimbus) => write!(f, " CB"),
            Some(Convective::ToweringCumulus) => write!(f, " TCU"),
            None => Ok(()),
        }
    }
}
