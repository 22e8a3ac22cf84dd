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

use super::Config;
use crate::error::Path;
use crate::{DecodeError, DecodeErrors, Error};
use serde_json::{Map, Value};

/// A type that can be decoded from a JSON value.
///
/// Implementations report malformed values to the [Decoder] and return
/// `None`, the caller then leaves the corresponding attribute unset.
/// Implementations do not see `null` values, the decoder treats them as
/// absent.
pub trait Decode: Sized {
    /// Decodes `value`, reporting any problems to `decoder`.
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self>;
}

#[derive(Clone, Debug)]
enum Segment {
    Field(String),
    Index(usize),
    Key(String),
}

/// Decodes JSON documents into records, collecting per-attribute errors.
///
/// The decoder does not stop at the first malformed value. It records the
/// error, with the path to the value, leaves the attribute unset, and keeps
/// going. Inspect the errors after the decode pass with [Decoder::errors] or
/// [Decoder::finish].
///
/// # Example
/// ```
/// # use ocm_model::json::Decoder;
/// ocm_model::record! {
///     pub struct Contract {
///         start_date: ocm_model::Timestamp,
///         end_date: ocm_model::Timestamp,
///     }
/// }
///
/// let mut decoder = Decoder::new();
/// let contract = decoder
///     .decode_str::<Contract>(r#"{"start_date":"not-a-date","end_date":"2025-01-01T00:00:00Z"}"#)?
///     .unwrap();
/// assert!(contract.get_start_date().is_none());
/// assert!(contract.get_end_date().is_some());
/// assert_eq!(decoder.errors().len(), 1);
/// assert_eq!(decoder.errors()[0].path(), "start_date");
/// # Ok::<(), ocm_model::Error>(())
/// ```
#[derive(Debug)]
pub struct Decoder {
    tracing: bool,
    max_errors: Option<usize>,
    path: Vec<Segment>,
    errors: Vec<DecodeError>,
    dropped: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a decoder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a decoder with the given configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            tracing: config.tracing_enabled(),
            max_errors: config.max_errors(),
            path: Vec::new(),
            errors: Vec::new(),
            dropped: 0,
        }
    }

    /// Parses `text` and decodes the resulting document.
    ///
    /// Returns an error only if `text` is not valid JSON. Returns `Ok(None)`
    /// if the document is `null`, a nil reference, or not of the expected
    /// shape, the latter is recorded as a decode error.
    pub fn decode_str<T: Decode>(&mut self, text: &str) -> Result<Option<T>, Error> {
        let value = serde_json::from_str::<Value>(text).map_err(Error::Syntax)?;
        Ok(self.decode_document(&value))
    }

    /// Like [Decoder::decode_str], for byte slices.
    pub fn decode_slice<T: Decode>(&mut self, bytes: &[u8]) -> Result<Option<T>, Error> {
        let value = serde_json::from_slice::<Value>(bytes).map_err(Error::Syntax)?;
        Ok(self.decode_document(&value))
    }

    /// Like [Decoder::decode_str], reading the document from `reader`.
    pub fn decode_reader<T: Decode, R: std::io::Read>(
        &mut self,
        reader: R,
    ) -> Result<Option<T>, Error> {
        let value = serde_json::from_reader::<_, Value>(reader).map_err(Error::Syntax)?;
        Ok(self.decode_document(&value))
    }

    /// Decodes a document that is already parsed.
    pub fn decode_document<T: Decode>(&mut self, value: &Value) -> Option<T> {
        let span = tracing::debug_span!("decode", record = std::any::type_name::<T>());
        let _enter = span.enter();
        self.decode_value(value)
    }

    /// Decodes a nested value at the current path. `null` is absent.
    pub fn decode_value<T: Decode>(&mut self, value: &Value) -> Option<T> {
        if value.is_null() {
            return None;
        }
        T::decode(value, self)
    }

    /// Decodes the attribute `name` of the current object.
    pub fn field<T: Decode>(&mut self, name: &str, value: &Value) -> Option<T> {
        self.nested(Segment::Field(name.to_string()), value)
    }

    /// Decodes the item at `index` of the current array.
    pub fn item<T: Decode>(&mut self, index: usize, value: &Value) -> Option<T> {
        self.nested(Segment::Index(index), value)
    }

    /// Decodes the entry `key` of the current map.
    pub fn entry<T: Decode>(&mut self, key: &str, value: &Value) -> Option<T> {
        self.nested(Segment::Key(key.to_string()), value)
    }

    fn nested<T: Decode>(&mut self, segment: Segment, value: &Value) -> Option<T> {
        self.path.push(segment);
        let result = self.decode_value(value);
        self.path.pop();
        result
    }

    /// Records an error for the value at the current path.
    pub fn report<M: Into<String>>(&mut self, message: M) {
        let error = DecodeError::new(self.current_path(), message.into());
        if self.tracing {
            tracing::debug!(path = %error.path(), "{}", error.message());
        }
        match self.max_errors {
            Some(max) if self.errors.len() >= max => self.dropped += 1,
            _ => self.errors.push(error),
        }
    }

    /// Notes an attribute of the current object that the record does not
    /// know about. The attribute is skipped.
    pub fn unknown_field(&mut self, name: &str) {
        if self.tracing {
            tracing::trace!(path = %self.current_path(), field = %name, "skipping unknown field");
        }
    }

    /// Returns the value as an object, or records an error.
    pub fn expect_object<'v>(&mut self, value: &'v Value) -> Option<&'v Map<String, Value>> {
        self.expect(value, Value::as_object, "an object")
    }

    /// Returns the value as an array, or records an error.
    pub fn expect_array<'v>(&mut self, value: &'v Value) -> Option<&'v Vec<Value>> {
        self.expect(value, Value::as_array, "an array")
    }

    /// Returns the value as a string, or records an error.
    pub fn expect_str<'v>(&mut self, value: &'v Value) -> Option<&'v str> {
        self.expect(value, Value::as_str, "a string")
    }

    /// Returns the value as a boolean, or records an error.
    pub fn expect_bool(&mut self, value: &Value) -> Option<bool> {
        self.expect(value, Value::as_bool, "a boolean")
    }

    /// Returns the value as a 64-bit integer, or records an error.
    pub fn expect_i64(&mut self, value: &Value) -> Option<i64> {
        self.expect(value, Value::as_i64, "an integer")
    }

    /// Returns the value as a floating point number, or records an error.
    pub fn expect_f64(&mut self, value: &Value) -> Option<f64> {
        self.expect(value, Value::as_f64, "a number")
    }

    fn expect<'v, T, F>(&mut self, value: &'v Value, f: F, expected: &str) -> Option<T>
    where
        F: FnOnce(&'v Value) -> Option<T>,
    {
        let got = f(value);
        if got.is_none() {
            self.report(format!("expected {expected}, found {}", describe(value)));
        }
        got
    }

    /// The errors recorded so far.
    pub fn errors(&self) -> &[DecodeError] {
        &self.errors
    }

    /// Returns true if any error was found, including errors past the
    /// configured limit.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.dropped != 0
    }

    /// Removes and returns the errors found so far.
    pub fn take_errors(&mut self) -> DecodeErrors {
        let errors = std::mem::take(&mut self.errors);
        let dropped = std::mem::take(&mut self.dropped);
        DecodeErrors::new(errors, dropped)
    }

    /// Returns the errors found so far, if any, and resets the decoder.
    pub fn finish(&mut self) -> Result<(), DecodeErrors> {
        let errors = self.take_errors();
        if errors.is_empty() {
            return Ok(());
        }
        Err(errors)
    }

    fn current_path(&self) -> String {
        let mut path = Path::default();
        for segment in &self.path {
            match segment {
                Segment::Field(name) => path.push_field(name),
                Segment::Index(index) => path.push_index(*index),
                Segment::Key(key) => path.push_key(key),
            }
        }
        path.to_string()
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
