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

/// The altimeter setting (QNH).
///
/// Both units are always set. The reported unit is exact and the other one is
/// converted and rounded to the precision it would be reported in, i.e. whole
/// hectopascal and hundredths of inches of mercury.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Qnh {
    pub hpa: u16,
    pub inhg: f32,
}

impl Qnh {
    /// QNH reported in hectopascal.
    pub fn from_hpa(hpa: u16) -> Self {
        Self {
            hpa,
            inhg: fc::round2(fc::hpa_to_inhg(hpa.into())),
        }
    }

    /// QNH reported in inches of mercury.
    pub fn from_inhg(inhg: f32) -> Self {
        Self {
            hpa: fc::inhg_to_hpa(inhg).round() as u16,
            inhg,
        }
    }
}

impl FromStr for Qnh {
    type Err = Error;

    /// Parses `Q1013` in hectopascal or `A2992` in hundredths of inches of
    /// mercury.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = regex!(r"^(Q|A)(\d{4})$")
            .captures(s)
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let value = capture!(caps, 2, u16, s)?;

        match &caps[1] {
            "Q" => Ok(Self::from_hpa(value)),
            _ => Ok(Self::from_inhg(value as f32 / 100.0)),
        }
    }
}

impl fmt::Display for Qnh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hPa ({:.2} inHg)", self.hpa, self.inhg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qnh_in_hectopascal() {
        let qnh = "Q1018".parse::<Qnh>().expect("QNH should parse");
        assert_eq!(qnh.hpa, 1018);
        assert_eq!(qnh.inhg, 30.06);
    }

    #[test]
    fn qnh_in_inches_of_mercury() {
        let qnh = "A2992".parse::<Qnh>().expect("QNH should parse");
        assert_eq!(qnh.inhg, 29.92);
        assert_eq!(qnh.hpa, 1013);
    }

    #[test]
    fn rejects_invalid_qnh() {
        assert!("Q101".parse::<Qnh>().is_err());
        assert!("QNH1013".parse::<Qnh>().is_err());
        assert!("A29.92".parse::<Qnh>().is_err());
    }

    #[test]
    fn formats_qnh() {
        assert_eq!(Qnh::from_hpa(1013).to_string(), "1013 hPa (29.91 inHg)");
    }
}
