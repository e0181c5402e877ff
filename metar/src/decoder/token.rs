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

//! Report tokenization.
//!
//! A raw report is split into its space separated groups after two textual
//! repairs:
//!
//! - `"METAR KJFK ..."` → `"KJFK ..."` (report type is dropped)
//! - `"... 1 3/4SM ..."` → `"..."`, `"1 3/4SM"`, `"..."` (whole miles and
//!   the fraction that follows them are one group)
//!
//! The tokens carry no meaning yet. Which group a token belongs to is decided
//! by the [`Decoder`](super::Decoder) from its position in the report.

/// Splits the `raw` report into its tokens.
///
/// # Examples
///
/// ```
/// use metar::normalize_and_split;
///
/// assert_eq!(
///     normalize_and_split("METAR EDDH 121650Z 1 1/2SM BR"),
///     vec!["EDDH", "121650Z", "1 1/2SM", "BR"]
/// );
/// ```
pub fn normalize_and_split(raw: &str) -> Vec<String> {
    let mut words = strip_report_type(raw.trim()).split_whitespace().peekable();
    let mut tokens = Vec::new();

    while let Some(word) = words.next() {
        match words.next_if(|next| is_whole_miles(word) && is_fraction(next)) {
            Some(fraction) => tokens.push(format!("{word} {fraction}")),
            None => tokens.push(word.to_string()),
        }
    }

    tokens
}

/// Strips a leading `METAR` or `SPECI`, optionally followed by `COR` or `AMD`.
fn strip_report_type(report: &str) -> &str {
    match regex!(r"^(?:METAR|SPECI)(?:\s+(?:COR|AMD))?(?:\s+|$)").find(report) {
        Some(m) => &report[m.end()..],
        None => report,
    }
}

fn is_whole_miles(word: &str) -> bool {
    regex!(r"^\d+$").is_match(word)
}

/// Returns `true` if the `word` is a fraction of statute miles e.g. `3/4SM`.
fn is_fraction(word: &str) -> bool {
    regex!(r"^\d+/\d+SM$").is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_report() {
        assert_eq!(
            normalize_and_split("KJFK 121651Z 18015G25KT 10SM FEW020"),
            vec!["KJFK", "121651Z", "18015G25KT", "10SM", "FEW020"]
        );
    }

    #[test]
    fn strips_report_type() {
        assert_eq!(
            normalize_and_split("METAR EDDH 121650Z"),
            vec!["EDDH", "121650Z"]
        );
        assert_eq!(
            normalize_and_split("METAR COR EDDH 121650Z"),
            vec!["EDDH", "121650Z"]
        );
        assert_eq!(
            normalize_and_split("SPECI AMD EDDH 121650Z"),
            vec!["EDDH", "121650Z"]
        );
        assert_eq!(normalize_and_split("METAR"), Vec::<String>::new());
    }

    #[test]
    fn keeps_station_starting_like_report_type() {
        assert_eq!(normalize_and_split("METARX 121650Z"), vec!["METARX", "121650Z"]);
    }

    #[test]
    fn joins_fractions() {
        assert_eq!(
            normalize_and_split("KJFK 121651Z 18015KT 1 3/4SM BR"),
            vec!["KJFK", "121651Z", "18015KT", "1 3/4SM", "BR"]
        );
        assert_eq!(
            normalize_and_split("KJFK 121651Z 18015KT 3/4SM BR"),
            vec!["KJFK", "121651Z", "18015KT", "3/4SM", "BR"]
        );
    }

    #[test]
    fn doesnt_join_temperature() {
        assert_eq!(
            normalize_and_split("BKN020 12 30/22"),
            vec!["BKN020", "12", "30/22"]
        );
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(
            normalize_and_split("KJFK A_B 1 3/4SM"),
            vec!["KJFK", "A_B", "1 3/4SM"]
        );
    }

    #[test]
    fn joins_only_miles_with_fraction() {
        assert_eq!(
            normalize_and_split("KJFK 121651Z 2 1/2 3/4SM 1 1/2SM"),
            vec!["KJFK", "121651Z", "2", "1/2", "3/4SM", "1 1/2SM"]
        );
    }

    #[test]
    fn empty_report() {
        assert!(normalize_and_split("").is_empty());
        assert!(normalize_and_split("   ").is_empty());
    }
}
