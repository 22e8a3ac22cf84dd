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

use super::{Account, ReservedResource, Subscription};
use ocm_model::List;

ocm_model::record! {
    /// Asks the service to check, and optionally reserve, quota for a set of
    /// resources.
    pub struct QuotaAuthorizationRequest {
        account_username: String,
        availability_zone: String,
        display_name: String,
        product_category: String,
        product_id: String,
        quota_version: String,
        /// Reserve the resources if the request is allowed.
        reserve: bool,
        resources: List<ReservedResource>,
    }
}

ocm_model::record! {
    pub struct QuotaAuthorizationResponse {
        allowed: bool,
        /// The resources that exceed the available quota.
        excess_resources: List<ReservedResource>,
        subscription: Subscription,
    }
}

ocm_model::record! {
    /// Asks the service for the account that owns a pull secret.
    pub struct TokenAuthorizationRequest {
        authorization_token: String,
    }
}

ocm_model::record! {
    pub struct TokenAuthorizationResponse {
        account: Account,
    }
}
