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

use std::collections::BTreeMap;

ocm_model::record! {
    /// The credentials used to pull images from the registries used by
    /// clusters.
    ///
    /// The JSON form is the one expected in the `config.json` file of
    /// container tools.
    pub struct AccessToken {
        /// The credentials, indexed by registry host name.
        auths: BTreeMap<String, AccessTokenAuth>,
    }
}

ocm_model::record! {
    /// The credentials for one registry.
    pub struct AccessTokenAuth {
        /// The base64 encoded `user:password` pair.
        auth: String,
        email: String,
    }
}
