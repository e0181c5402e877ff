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

use chrono::DateTime;
use metar::prelude::*;
use metar::{PressureUnit, TemperatureUnit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Decodes the `raw` report observed in the current month.
#[wasm_bindgen(js_name = decodeMetar)]
pub fn decode_metar(raw: &str) -> Result<JsValue, JsValue> {
    let report = metar::decode(raw);
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Returns the flight category of the `raw` report e.g. `"MVFR"`.
#[wasm_bindgen(js_name = flightCategory)]
pub fn flight_category(raw: &str) -> String {
    metar::decode(raw).flight_category().to_string()
}

#[wasm_bindgen(js_name = relativeHumidity)]
pub fn relative_humidity(t: f32, td: f32) -> f32 {
    metar::fc::relative_humidity(t, td)
}

/// Prints the `raw` report in Celsius or Fahrenheit and hectopascal or inches
/// of mercury.
#[wasm_bindgen(js_name = printMetar)]
pub fn print_metar(raw: &str, celsius: bool, hectopascal: bool) -> String {
    let units = Units {
        temperature: if celsius {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Fahrenheit
        },
        pressure: if hectopascal {
            PressureUnit::Hectopascal
        } else {
            PressureUnit::InchesOfMercury
        },
    };

    Printer::new(units).print(&metar::decode(raw))
}

#[wasm_bindgen(js_name = Decoder)]
pub struct JsDecoder {
    inner: Decoder,
}

#[wasm_bindgen(js_class = Decoder)]
impl JsDecoder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Decoder::new(),
        }
    }

    /// Creates a decoder anchored to milliseconds since the Unix epoch as
    /// returned by `Date.getTime()`.
    #[wasm_bindgen(js_name = withAnchor)]
    pub fn with_anchor(millis: f64) -> Result<Self, JsError> {
        let anchor = DateTime::from_timestamp_millis(millis as i64)
            .ok_or_else(|| JsError::new(&format!("invalid anchor: {millis}")))?;

        Ok(Self {
            inner: Decoder::with_anchor(anchor),
        })
    }

    pub fn decode(&self, raw: &str) -> Result<JsValue, JsValue> {
        let report = self.inner.decode_str(raw);
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}

impl Default for JsDecoder {
    fn default() -> Self {
        Self::new()
    }
}
