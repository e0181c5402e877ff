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

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use metar::normalize_and_split;
use metar::prelude::*;

const KJFK: &str =
    "KJFK 121651Z 18015G25KT 10SM FEW020 SCT250 30/22 A2992 RMK AO2 SLP134 T03000217";

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0)
        .single()
        .expect("anchor should be valid")
}

fn decode(raw: &str) -> Report {
    Decoder::with_anchor(anchor()).decode_str(raw)
}

#[test]
fn decodes_kjfk() {
    let report = decode(KJFK);

    assert_eq!(report.icao, "KJFK");
    assert_eq!(
        report.observed_at,
        Utc.with_ymd_and_hms(2026, 1, 12, 16, 51, 0).single()
    );
    assert_eq!(
        report.wind,
        Some(Wind::Directional {
            degrees: 180,
            speed: Speed::kt(15),
            gusts: Some(Speed::kt(25)),
            variable_range: None,
        })
    );

    let visibility = report.visibility.as_ref().expect("visibility should be decoded");
    assert_eq!(visibility.statute_miles, 10.0);
    assert_eq!(visibility.meters, 16093);
    assert!(report.conditions.is_empty());

    assert_eq!(
        report.clouds,
        vec![
            CloudLayer::new(CloudCover::Few, 2000),
            CloudLayer::new(CloudCover::Scattered, 25000),
        ]
    );
    assert_eq!(report.temperature, Some(Temperatures::new(30, 22)));

    let qnh = report.pressure.expect("pressure should be decoded");
    assert_eq!(qnh.hpa, 1013);
    assert_eq!(qnh.inhg, 29.92);

    assert_eq!(report.flight_category(), FlightCategory::VFR);
}

#[test]
fn observation_time_matches_token() {
    for (token, day, hour, minute) in [
        ("010000Z", 1, 0, 0),
        ("121651Z", 12, 16, 51),
        ("282359Z", 28, 23, 59),
        ("311200Z", 31, 12, 0),
    ] {
        let report = decode(&format!("EDDH {token}"));
        let observed_at = report.observed_at.expect("time should be decoded");

        assert_eq!(observed_at.year(), 2026);
        assert_eq!(observed_at.month(), 1);
        assert_eq!(observed_at.day(), day);
        assert_eq!(observed_at.hour(), hour);
        assert_eq!(observed_at.minute(), minute);
        assert_eq!(observed_at.second(), 0);
    }
}

#[test]
fn decodes_wind() {
    assert_eq!(decode("EDDH 121650Z 00000KT").wind, Some(Wind::Calm));
    assert_eq!(
        decode("EDDH 121650Z VRB01KT").wind,
        Some(Wind::Variable {
            speed: Speed::kt(1),
            gusts: None
        })
    );
    assert_eq!(
        decode("UUEE 121650Z 27005MPS").wind.map(|wind| wind.speed()),
        Some(Speed::mps(5))
    );
}

#[test]
fn variation_is_consumed_with_wind() {
    let report = decode("EDDH 121650Z 10010KT 060V140 9999 BKN030 12/08 Q1015");

    assert_eq!(
        report.wind,
        Some(Wind::Directional {
            degrees: 100,
            speed: Speed::kt(10),
            gusts: None,
            variable_range: Some((60, 140)),
        })
    );
    assert_eq!(report.visibility, Some(Visibility::from_meters(9999)));
    assert_eq!(report.clouds, vec![CloudLayer::new(CloudCover::Broken, 3000)]);
}

#[test]
fn decodes_visibility() {
    let vis = decode("KJFK 121651Z 18015KT 1 3/4SM BR")
        .visibility
        .expect("visibility should be decoded");
    assert_eq!(vis.statute_miles, 1.75);
    assert_eq!(vis.fraction.as_deref(), Some("1 3/4"));
    assert_eq!(vis.to_string(), "1 3/4 SM");

    let vis = decode("EDDH 121650Z 27010KT 9999")
        .visibility
        .expect("visibility should be decoded");
    assert_eq!(vis.meters, 9999);
    assert_eq!(vis.statute_miles, 10.0);
    assert_eq!(vis.source, VisibilitySource::Meters);
}

#[test]
fn cavok_skips_weather() {
    let report = decode("LOWI 121650Z 24005KT CAVOK RA 20/10 Q1020");
    let vis = report.visibility.expect("visibility should be decoded");

    assert_eq!(vis.meters, 9999);
    assert_eq!(vis.statute_miles, 10.0);
    assert_eq!(vis.source, VisibilitySource::CeilingAndVisibilityOk);
    assert!(report.conditions.is_empty());
    assert!(report.clouds.is_empty());
    assert_eq!(report.temperature, Some(Temperatures::new(20, 10)));
    assert_eq!(report.pressure, Some(Qnh::from_hpa(1020)));
}

#[test]
fn decodes_weather() {
    let report = decode("EGLL 121650Z 22012KT 3000 -SHRA VCTS BR BKN008CB 11/10 Q0998");

    assert_eq!(
        report
            .conditions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["-SH", "-RA", "VCTS", "BR"]
    );
    assert_eq!(
        report.clouds,
        vec![CloudLayer {
            cover: CloudCover::Broken,
            height_ft: 800,
            convective: Some(Convective::Cumulonimbus),
        }]
    );
}

#[test]
fn heightless_layers_are_dropped() {
    let report = decode("EDDH 121650Z 27010KT 0800 FG OVC VV/// BKN016 M01/M01 Q1021");

    assert_eq!(report.clouds, vec![CloudLayer::new(CloudCover::Broken, 1600)]);
    assert_eq!(report.temperature, Some(Temperatures::new(-1, -1)));
}

#[test]
fn decodes_temperatures() {
    let temperature = decode(KJFK)
        .temperature
        .expect("temperature should be decoded");

    assert_eq!(temperature.air_c, 30);
    assert_eq!(temperature.dewpoint_c, 22);
    assert_eq!(temperature.air_f(), 86.0);
    assert!((temperature.dewpoint_f() - 71.6).abs() < 0.01);
}

#[test]
fn missing_temperatures_keep_pressure() {
    let report = decode("EDDH 121650Z 27010KT 9999 FEW020 ///// Q1013");

    assert_eq!(report.temperature, None);
    assert_eq!(report.pressure, Some(Qnh::from_hpa(1013)));
}

#[test]
fn decodes_pressure() {
    let qnh = decode("EDDH 121650Z 27010KT 9999 15/10 Q1018")
        .pressure
        .expect("pressure should be decoded");
    assert_eq!(qnh.hpa, 1018);
    assert_eq!(qnh.inhg, 30.06);

    let qnh = decode("KJFK 121651Z 18015KT 10SM 15/10 A2992")
        .pressure
        .expect("pressure should be decoded");
    assert_eq!(qnh.inhg, 29.92);
    assert_eq!(qnh.hpa, 1013);
}

#[test]
fn remarks_are_ignored() {
    let report = decode("KJFK 121651Z 18015KT 10SM RMK BKN005 01/01 A2900");

    assert!(report.clouds.is_empty());
    assert_eq!(report.temperature, None);
    assert_eq!(report.pressure, None);
}

#[test]
fn decoding_is_idempotent() {
    let decoder = Decoder::with_anchor(anchor());

    for raw in [
        KJFK,
        "METAR EDDH 121650Z 10010KT 060V140 1 1/2SM -RA BR BKN008 M01/M02 Q1003",
        "garbage in",
        "",
    ] {
        assert_eq!(decoder.decode_str(raw), decoder.decode_str(raw));
    }
}

#[test]
fn decodes_split_tokens() {
    let tokens = normalize_and_split(KJFK);
    let decoder = Decoder::with_anchor(anchor());

    assert_eq!(decoder.decode(&tokens), decoder.decode_str(KJFK));
}

#[test]
fn low_ceiling_is_lifr() {
    let report = decode("KJFK 121651Z 18005KT 2SM BR OVC004 10/09 A2992");

    assert_eq!(report.ceiling(), Some(400));
    assert_eq!(report.flight_category(), FlightCategory::LIFR);
}
