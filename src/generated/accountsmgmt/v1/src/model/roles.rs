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

use super::{Account, Organization, Subscription};
use ocm_model::{List, Timestamp};

ocm_model::resource! {
    /// A named set of permissions.
    pub struct Role {
        name: String,
        permissions: List<Permission>,
    }
}

ocm_model::resource! {
    /// An action allowed on a type of resource.
    pub struct Permission {
        action: String,
        resource: String,
    }
}

ocm_model::resource! {
    /// Grants a role to an account, within the scope of an organization or a
    /// subscription, or globally.
    pub struct RoleBinding {
        account: Account,
        account_id: String,
        config_managed: bool,
        created_at: Timestamp,
        managed_by: String,
        organization: Organization,
        organization_id: String,
        role: Role,
        role_id: String,
        subscription: Subscription,
        subscription_id: String,
        /// The scope of the binding: `Application`, `Subscription` or
        /// `Organization`.
        type_: String as "type",
        updated_at: Timestamp,
    }
}
