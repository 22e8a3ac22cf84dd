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

pub(crate) const LOGGING_VAR: &str = "OCM_MODEL_LOGGING";

/// Configure the JSON encoder and decoder.
///
/// # Example
/// ```
/// # use ocm_model::json::Config;
/// let config = Config::new()
///     .set_pretty(true)
///     .set_max_errors(10)
///     .enable_tracing();
/// assert!(config.pretty());
/// assert!(config.tracing_enabled());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pretty: bool,
    tracing: bool,
    max_errors: Option<usize>,
}

impl Config {
    /// Returns a default [Config].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the encoder indents its output.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// The maximum number of errors recorded by a decoder, if any.
    pub fn max_errors(&self) -> Option<usize> {
        self.max_errors
    }

    /// Returns true if the configuration or the environment enables tracing.
    ///
    /// Setting the `OCM_MODEL_LOGGING` environment variable to `true` enables
    /// tracing for all decoders.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Indent the encoded output.
    pub fn set_pretty(mut self, v: bool) -> Self {
        self.pretty = v;
        self
    }

    /// Enables tracing.
    ///
    /// The decoder logs each malformed value at `debug` level and each
    /// skipped unknown attribute at `trace` level.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// Limits the number of errors recorded by a decoder.
    ///
    /// Errors past the limit are only counted, see
    /// [DecodeErrors::dropped][crate::DecodeErrors::dropped].
    pub fn set_max_errors(mut self, v: usize) -> Self {
        self.max_errors = Some(v);
        self
    }

    /// Records all the errors found by a decoder. This is the default.
    pub fn clear_max_errors(mut self) -> Self {
        self.max_errors = None;
        self
    }
}
