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

use crate::json::{Decode, Decoder};
use crate::{Attribute, BuildError};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A point in time, as used by the `creation_timestamp`, `start_date` and
/// similar attributes of OCM objects.
///
/// The value is a count of seconds since the Unix epoch plus a non-negative
/// count of nanoseconds. Only the years 0001 to 9999 are valid, which are
/// the years RFC 3339 can represent. The JSON form is an RFC 3339 string in
/// UTC. Parsing accepts any offset.
///
/// The default value, returned by accessors when a timestamp attribute is not
/// set, is the Unix epoch.
///
/// # Examples
/// ```
/// # use ocm_model::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T11:46:12.500+02:00")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// assert_eq!(ts.to_string(), "2025-05-16T09:46:12.5Z");
/// # Ok::<(), TimestampError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// The reasons a value cannot be converted to a [Timestamp].
///
/// # Examples
/// ```
/// # use ocm_model::{Timestamp, TimestampError};
/// let ts = Timestamp::new(Timestamp::MAX_SECONDS + 1, 0);
/// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
///
/// let ts = Timestamp::try_from("next tuesday");
/// assert!(matches!(ts, Err(TimestampError::Deserialize(_))));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The value is outside the years 0001 to 9999, or the nanoseconds are
    /// not in `0..1_000_000_000`.
    #[error("the timestamp is out of range")]
    OutOfRange,

    /// The text is not an RFC 3339 timestamp.
    #[error("cannot parse timestamp: {0}")]
    Deserialize(#[source] time::error::Parse),
}

const NANOS_PER_SECOND: i32 = 1_000_000_000;

impl Timestamp {
    /// The seconds of `0001-01-01T00:00:00Z`.
    pub const MIN_SECONDS: i64 = -62_135_596_800;

    /// The seconds of `9999-12-31T23:59:59Z`.
    pub const MAX_SECONDS: i64 = 253_402_300_799;

    /// Creates a timestamp, failing if `seconds` or `nanos` is out of range.
    ///
    /// # Examples
    /// ```
    /// # use ocm_model::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1747388772, 0)?;
    /// assert_eq!(ts.to_string(), "2025-05-16T09:46:12Z");
    /// assert!(Timestamp::new(0, -1).is_err());
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, TimestampError> {
        let seconds_ok = (Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds);
        let nanos_ok = (0..NANOS_PER_SECOND).contains(&nanos);
        if !(seconds_ok && nanos_ok) {
            return Err(TimestampError::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Seconds since `1970-01-01T00:00:00Z`.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds within the second, always in `0..1_000_000_000`.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn from_offset_date_time(value: OffsetDateTime) -> Result<Self, TimestampError> {
        // `unix_timestamp` rounds towards the past, so `nanosecond` is the
        // non-negative remainder.
        Self::new(value.unix_timestamp(), value.nanosecond() as i32)
    }

    fn to_offset_date_time(self) -> OffsetDateTime {
        let nanos =
            i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos);
        // Every valid timestamp is in the range of `OffsetDateTime`.
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .to_offset_date_time()
            .format(&Rfc3339)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

/// Parses an RFC 3339 timestamp with any offset.
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed =
            OffsetDateTime::parse(value, &Rfc3339).map_err(TimestampError::Deserialize)?;
        Self::from_offset_date_time(parsed)
    }
}

impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        Self::from_offset_date_time(value)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value.to_offset_date_time()
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<chrono::DateTime<chrono::Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: chrono::DateTime<chrono::Utc>) -> Result<Self, Self::Error> {
        // A leap second has more than 10^9 nanos, `new` rejects it.
        let nanos = i32::try_from(value.timestamp_subsec_nanos())
            .map_err(|_| TimestampError::OutOfRange)?;
        Self::new(value.timestamp(), nanos)
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<Timestamp> for chrono::DateTime<chrono::Utc> {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        chrono::DateTime::from_timestamp(value.seconds, value.nanos as u32)
            .ok_or(TimestampError::OutOfRange)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an RFC 3339 timestamp")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Malformed timestamps are reported to the decoder, the attribute is left
/// unset.
impl Decode for Timestamp {
    fn decode(value: &serde_json::Value, decoder: &mut Decoder) -> Option<Self> {
        let text = decoder.expect_str(value)?;
        match Timestamp::try_from(text) {
            Ok(ts) => Some(ts),
            Err(e) => {
                decoder.report(format!("cannot parse {text:?} as a RFC 3339 timestamp: {e}"));
                None
            }
        }
    }
}

impl Attribute for Timestamp {
    type Builder = TimestampInput;
    type View<'a> = Timestamp;

    fn view(&self) -> Timestamp {
        *self
    }

    fn zero<'a>() -> Timestamp
    where
        Self: 'a,
    {
        Timestamp::default()
    }

    fn build(builder: TimestampInput) -> Result<Timestamp, BuildError> {
        builder.0.map_err(BuildError::invalid)
    }

    fn to_builder(&self) -> TimestampInput {
        TimestampInput::from(*self)
    }
}

/// A timestamp value staged in a builder.
///
/// Builders accept timestamps in several forms: [Timestamp] values,
/// [time::OffsetDateTime] values, and RFC 3339 strings. Conversions that can
/// fail are not reported by the setter, the failure is kept and reported by
/// the `build()` function of the builder.
///
/// # Example
/// ```
/// # use ocm_model::{Timestamp, TimestampInput};
/// let input = TimestampInput::from("2025-05-16T09:46:12Z");
/// assert!(input.value().is_ok());
/// let input = TimestampInput::from("yesterday");
/// assert!(input.value().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimestampInput(Result<Timestamp, InvalidTimestamp>);

impl TimestampInput {
    /// The staged value, or the reason it is invalid.
    pub fn value(&self) -> Result<&Timestamp, &InvalidTimestamp> {
        self.0.as_ref()
    }
}

impl Default for TimestampInput {
    fn default() -> Self {
        Self(Ok(Timestamp::default()))
    }
}

impl From<Timestamp> for TimestampInput {
    fn from(value: Timestamp) -> Self {
        Self(Ok(value))
    }
}

impl From<&str> for TimestampInput {
    fn from(value: &str) -> Self {
        Self(Timestamp::try_from(value).map_err(|e| InvalidTimestamp::new(value, e)))
    }
}

impl From<String> for TimestampInput {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for TimestampInput {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<OffsetDateTime> for TimestampInput {
    fn from(value: OffsetDateTime) -> Self {
        Self(Timestamp::try_from(value).map_err(|e| InvalidTimestamp::new(format!("{value}"), e)))
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl From<chrono::DateTime<chrono::Utc>> for TimestampInput {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self(Timestamp::try_from(value).map_err(|e| InvalidTimestamp::new(value.to_rfc3339(), e)))
    }
}

/// A value that could not be converted to a [Timestamp].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("cannot use {input:?} as a timestamp: {reason}")]
pub struct InvalidTimestamp {
    input: String,
    reason: String,
}

impl InvalidTimestamp {
    fn new<T: Into<String>>(input: T, error: TimestampError) -> Self {
        Self {
            input: input.into(),
            reason: error.to_string(),
        }
    }

    /// The value given to the builder.
    pub fn input(&self) -> &str {
        &self.input
    }
}
