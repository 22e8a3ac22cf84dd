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

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error returned by the `build()` functions of builders.
///
/// Builders stage values that may be invalid, for example a timestamp given
/// as a string that is not in RFC 3339 format. The first such value stops the
/// build. The error wraps the failing value with the attribute name, list
/// index, or map key that leads to it, outermost first.
///
/// # Example
/// ```
/// # use ocm_model::{BuildError, Timestamp};
/// ocm_model::record! {
///     pub struct Contract {
///         start_date: Timestamp,
///     }
/// }
/// let err = Contract::builder()
///     .set_start_date("not a timestamp")
///     .build()
///     .unwrap_err();
/// assert_eq!(err.path(), "start_date");
/// assert!(matches!(err.root_cause(), BuildError::Invalid(_)));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum BuildError {
    /// The staged value is invalid.
    #[error("invalid value: {0}")]
    Invalid(#[source] BoxError),

    /// An attribute of a record failed to build.
    #[error("cannot build attribute `{attribute}`: {source}")]
    Attribute {
        attribute: &'static str,
        #[source]
        source: Box<BuildError>,
    },

    /// An item of a list failed to build.
    #[error("cannot build list item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<BuildError>,
    },

    /// An entry of a map failed to build.
    #[error("cannot build map entry `{key}`: {source}")]
    Entry {
        key: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Creates an error for an invalid staged value.
    pub fn invalid<T: Into<BoxError>>(source: T) -> Self {
        Self::Invalid(source.into())
    }

    /// Wraps `self` with the name of the attribute that failed.
    pub fn in_attribute(self, attribute: &'static str) -> Self {
        Self::Attribute {
            attribute,
            source: Box::new(self),
        }
    }

    /// Wraps `self` with the index of the list item that failed.
    pub fn in_item(self, index: usize) -> Self {
        Self::Item {
            index,
            source: Box::new(self),
        }
    }

    /// Wraps `self` with the key of the map entry that failed.
    pub fn in_entry<K: Into<String>>(self, key: K) -> Self {
        Self::Entry {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, the one that caused the build to fail.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            Self::Invalid(_) => self,
            Self::Attribute { source, .. }
            | Self::Item { source, .. }
            | Self::Entry { source, .. } => source.root_cause(),
        }
    }

    /// Returns the location of the failing value, for example
    /// `contracts[1].start_date`.
    pub fn path(&self) -> String {
        let mut path = Path::default();
        let mut current = self;
        loop {
            match current {
                Self::Invalid(_) => break,
                Self::Attribute { attribute, source } => {
                    path.push_field(attribute);
                    current = source.as_ref();
                }
                Self::Item { index, source } => {
                    path.push_index(*index);
                    current = source.as_ref();
                }
                Self::Entry { key, source } => {
                    path.push_key(key);
                    current = source.as_ref();
                }
            }
        }
        path.to_string()
    }
}

/// A single error found while decoding a JSON document.
///
/// The decoder keeps going after these errors, see
/// [Decoder][crate::json::Decoder].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}: {message}", display_path(.path))]
pub struct DecodeError {
    path: String,
    message: String,
}

impl DecodeError {
    pub(crate) fn new(path: String, message: String) -> Self {
        Self { path, message }
    }

    /// The location of the malformed value, for example
    /// `contracts[0].start_date`. Empty for the document root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

/// All the errors found while decoding a JSON document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodeErrors {
    errors: Vec<DecodeError>,
    dropped: usize,
}

impl DecodeErrors {
    pub(crate) fn new(errors: Vec<DecodeError>, dropped: usize) -> Self {
        Self { errors, dropped }
    }

    /// The recorded errors, in the order they were found.
    pub fn errors(&self) -> &[DecodeError] {
        &self.errors
    }

    /// The number of errors that were not recorded because the decoder
    /// reached its limit, see [Config::set_max_errors][crate::json::Config::set_max_errors].
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The total number of errors found.
    pub fn len(&self) -> usize {
        self.errors.len() + self.dropped
    }

    /// Returns true if no errors were found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for DecodeErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.errors.as_slice() {
            [] if self.dropped == 0 => write!(f, "no decode errors"),
            [] => write!(f, "cannot decode JSON document, found {} errors", self.dropped),
            [only] if self.dropped == 0 => write!(f, "cannot decode JSON document, {only}"),
            [first, ..] => write!(
                f,
                "cannot decode JSON document, found {} errors, the first is {first}",
                self.len()
            ),
        }
    }
}

impl std::error::Error for DecodeErrors {}

/// The error type for the JSON entry points in [json][crate::json].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input is not well-formed JSON, or could not be read.
    #[error("cannot parse JSON input: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The input is well-formed JSON, but some values do not match the
    /// expected types.
    #[error(transparent)]
    Decode(#[from] DecodeErrors),

    /// The value could not be written.
    #[error("cannot write JSON output: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// Returns the decode errors, if that is the kind of error.
    pub fn decode_errors(&self) -> Option<&DecodeErrors> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Formats locations within a document, like `contracts[0].start_date`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Path {
    text: String,
}

impl Path {
    pub(crate) fn push_field(&mut self, name: &str) {
        if !self.text.is_empty() {
            self.text.push('.');
        }
        self.text.push_str(name);
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        use std::fmt::Write;
        let _ = write!(self.text, "[{index}]");
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        use std::fmt::Write;
        let _ = write!(self.text, "[{key:?}]");
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn build_error_path() {
        let err = BuildError::invalid("bad timestamp")
            .in_attribute("start_date")
            .in_item(1)
            .in_attribute("contracts")
            .in_entry("primary")
            .in_attribute("accounts");
        assert_eq!(err.path(), r#"accounts["primary"].contracts[1].start_date"#);
        assert!(matches!(err.root_cause(), BuildError::Invalid(_)));
        assert!(err.source().is_some());
        let msg = err.to_string();
        assert!(msg.contains("accounts"), "{msg}");
        assert!(msg.contains("bad timestamp"), "{msg}");
    }

    #[test]
    fn build_error_root() {
        let err = BuildError::invalid("bad");
        assert_eq!(err.path(), "");
        assert_eq!(err.to_string(), "invalid value: bad");
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::new("a.b".into(), "expected a string".into());
        assert_eq!(err.to_string(), "a.b: expected a string");
        let err = DecodeError::new(String::new(), "expected an object".into());
        assert_eq!(err.to_string(), "<root>: expected an object");
    }

    #[test]
    fn decode_errors_display() {
        let errors = DecodeErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "no decode errors");

        let one = DecodeError::new("a".into(), "bad".into());
        let errors = DecodeErrors::new(vec![one.clone()], 0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "cannot decode JSON document, a: bad");

        let errors = DecodeErrors::new(vec![one], 2);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.dropped(), 2);
        let msg = errors.to_string();
        assert!(msg.contains("found 3 errors"), "{msg}");
    }

    #[test]
    fn error_predicates() {
        let err = Error::from(DecodeErrors::new(
            vec![DecodeError::new("x".into(), "bad".into())],
            0,
        ));
        assert_eq!(err.decode_errors().map(DecodeErrors::len), Some(1));

        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Syntax(syntax);
        assert!(err.decode_errors().is_none());
        assert!(err.source().is_some());
    }
}
