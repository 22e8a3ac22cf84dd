// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Encode and decode records as JSON documents.
//!
//! Records implement [serde::Serialize] and [serde::Deserialize], and work
//! with any serde format. The functions in this module add the behavior the
//! OCM APIs need on top of that:
//!
//! * the decoder keeps going after malformed values, and reports all of them,
//!   see [Decoder],
//! * the encoder can indent its output, see [Config::set_pretty].
//!
//! # Example
//! ```
//! # use ocm_model::json;
//! ocm_model::record! {
//!     pub struct QuotaCost {
//!         allowed: i32,
//!         consumed: i32,
//!         quota_id: String,
//!     }
//! }
//! let cost = json::unmarshal::<QuotaCost>(r#"{"quota_id":"q1","allowed":5,"extra":true}"#)?;
//! assert_eq!(cost.quota_id(), "q1");
//! assert_eq!(cost.allowed(), 5);
//! assert!(cost.get_consumed().is_none());
//!
//! let text = json::to_string(&cost)?;
//! assert_eq!(text, r#"{"allowed":5,"quota_id":"q1"}"#);
//! # Ok::<(), ocm_model::Error>(())
//! ```

mod config;
mod decoder;

pub use config::Config;
pub use decoder::{Decode, Decoder};

use crate::Error;
use serde_json::Value;
use std::collections::BTreeMap;

/// Writes `value` as a compact JSON document to `writer`.
pub fn marshal<T, W>(value: &T, writer: W) -> Result<(), Error>
where
    T: serde::Serialize + ?Sized,
    W: std::io::Write,
{
    marshal_with(value, writer, &Config::default())
}

/// Writes `value` as a JSON document to `writer`, using `config`.
pub fn marshal_with<T, W>(value: &T, writer: W, config: &Config) -> Result<(), Error>
where
    T: serde::Serialize + ?Sized,
    W: std::io::Write,
{
    if config.pretty() {
        return serde_json::to_writer_pretty(writer, value).map_err(Error::Encode);
    }
    serde_json::to_writer(writer, value).map_err(Error::Encode)
}

/// Returns `value` as a compact JSON document.
pub fn to_string<T>(value: &T) -> Result<String, Error>
where
    T: serde::Serialize + ?Sized,
{
    to_string_with(value, &Config::default())
}

/// Returns `value` as a JSON document, using `config`.
pub fn to_string_with<T>(value: &T, config: &Config) -> Result<String, Error>
where
    T: serde::Serialize + ?Sized,
{
    if config.pretty() {
        return serde_json::to_string_pretty(value).map_err(Error::Encode);
    }
    serde_json::to_string(value).map_err(Error::Encode)
}

/// Returns `value` as a [serde_json::Value].
pub fn to_value<T>(value: &T) -> Result<Value, Error>
where
    T: serde::Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(Error::Encode)
}

/// Decodes a JSON document.
///
/// Fails if the input is not JSON, or if any value in the document is
/// malformed. Use a [Decoder] to get the well-formed parts of a document with
/// malformed values. A `null` document, or a nil reference, decodes as the
/// default value.
pub fn unmarshal<T>(input: &(impl AsRef<[u8]> + ?Sized)) -> Result<T, Error>
where
    T: Decode + Default,
{
    unmarshal_with(input, &Config::default())
}

/// Like [unmarshal], using `config` for the decoder.
pub fn unmarshal_with<T>(input: &(impl AsRef<[u8]> + ?Sized), config: &Config) -> Result<T, Error>
where
    T: Decode + Default,
{
    let mut decoder = Decoder::with_config(config);
    let value = decoder.decode_slice::<T>(input.as_ref())?;
    decoder.finish()?;
    Ok(value.unwrap_or_default())
}

/// Like [unmarshal], reading the document from `reader`.
pub fn unmarshal_reader<T>(reader: impl std::io::Read) -> Result<T, Error>
where
    T: Decode + Default,
{
    let mut decoder = Decoder::new();
    let value = decoder.decode_reader::<T, _>(reader)?;
    decoder.finish()?;
    Ok(value.unwrap_or_default())
}

/// Like [unmarshal], for a document that is already parsed.
pub fn unmarshal_value<T>(value: &Value) -> Result<T, Error>
where
    T: Decode + Default,
{
    let mut decoder = Decoder::new();
    let value = decoder.decode_document::<T>(value);
    decoder.finish()?;
    Ok(value.unwrap_or_default())
}

/// Implements [serde::Deserialize] in terms of [Decode].
#[doc(hidden)]
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Decode + Default,
{
    use serde::Deserialize;
    use serde::de::Error as _;
    let value = Value::deserialize(deserializer)?;
    let mut decoder = Decoder::new();
    let decoded = decoder.decode_document::<T>(&value);
    decoder.finish().map_err(D::Error::custom)?;
    Ok(decoded.unwrap_or_default())
}

impl Decode for String {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        decoder.expect_str(value).map(str::to_string)
    }
}

impl Decode for bool {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        decoder.expect_bool(value)
    }
}

impl Decode for i32 {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        let v = decoder.expect_i64(value)?;
        match i32::try_from(v) {
            Ok(v) => Some(v),
            Err(_) => {
                decoder.report(format!("value {v} out of range for a 32-bit integer"));
                None
            }
        }
    }
}

impl Decode for i64 {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        decoder.expect_i64(value)
    }
}

impl Decode for f64 {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        decoder.expect_f64(value)
    }
}

/// Arrays skip `null` and malformed items.
impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        let items = decoder.expect_array(value)?;
        let decoded = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| decoder.item::<T>(index, item))
            .collect();
        Some(decoded)
    }
}

/// Maps skip `null` and malformed entries.
impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        let entries = decoder.expect_object(value)?;
        let decoded = entries
            .iter()
            .filter_map(|(key, entry)| decoder.entry::<T>(key, entry).map(|v| (key.clone(), v)))
            .collect();
        Some(decoded)
    }
}
