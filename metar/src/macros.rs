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

/// Returns a `&'static Regex` that is compiled once on first use.
///
/// The pattern is a literal and covered by the unit tests, thus compiling it
/// can't fail at runtime.
macro_rules! regex {
    ($pattern:literal) => {{
        static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        PATTERN.get_or_init(|| regex::Regex::new($pattern).expect("pattern should be valid"))
    }};
}

/// Parses the capture group `$i` of `$caps` into `$t`.
///
/// Evaluates to `Result<$t, Error>` with an [`UnexpectedString`] of `$s` if
/// the group didn't participate in the match or isn't a number.
///
/// [`UnexpectedString`]: crate::Error::UnexpectedString
macro_rules! capture {
    ($caps:expr, $i:expr, $t:ty, $s:expr) => {
        $caps
            .get($i)
            .and_then(|m| m.as_str().parse::<$t>().ok())
            .ok_or_else(|| $crate::Error::UnexpectedString($s.to_string()))
    };
}
