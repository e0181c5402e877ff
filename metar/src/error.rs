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

use std::error;
use std::fmt;

/// Error returned when a single report group can't be parsed.
///
/// The [`Decoder`] never returns these errors. It absorbs them and skips the
/// token, but they are returned when a group is parsed on its own e.g. with
/// `"18015G25KT".parse::<Wind>()`.
///
/// [`Decoder`]: crate::Decoder
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The token doesn't have the shape of the group.
    UnexpectedString(String),
    /// The day-time group points to a date that doesn't exist in the anchor
    /// month.
    InvalidDateTime { day: u32, hour: u32, minute: u32 },
    /// A cloud layer was reported without a height.
    MissingCloudHeight(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString(s) => write!(f, "unexpected string \"{s}\""),
            Self::InvalidDateTime { day, hour, minute } => {
                write!(
                    f,
                    "day {day} at {hour:02}:{minute:02}Z is not a valid observation time"
                )
            }
            Self::MissingCloudHeight(s) => {
                write!(f, "cloud layer \"{s}\" has no height")
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
