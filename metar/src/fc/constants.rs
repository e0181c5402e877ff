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

pub const CELSIUS_IN_FAHRENHEIT_SCALE: f32 = 1.8;
pub const CELSIUS_IN_FAHRENHEIT_OFFSET: f32 = 32.0;
pub const HECTOPASCAL_IN_INCH_OF_MERCURY: f32 = 0.02952998057228;
pub const INCH_OF_MERCURY_IN_HECTOPASCAL: f32 = 33.863889532611;
pub const KILOMETERS_PER_HOUR_IN_KNOTS: f32 = 0.539957;
/// Factor applied to winds reported in `MPS` to get knots.
pub const METER_PER_SECONDS_IN_KNOTS: f32 = 0.868976;
pub const STATUTE_MILE_IN_METER: f32 = 1609.344;

/// Magnus coefficient for water.
pub const MAGNUS_B: f32 = 17.625;
/// Magnus coefficient for water in °C.
pub const MAGNUS_C: f32 = 243.04;

/// Reported visibility in meters that means 10 km or more.
pub const VISIBILITY_UNLIMITED_M: u32 = 9999;
/// Statute miles that are assumed for an unlimited visibility.
pub const VISIBILITY_UNLIMITED_SM: f32 = 10.0;
