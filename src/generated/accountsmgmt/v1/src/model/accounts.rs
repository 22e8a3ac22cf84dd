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

use ocm_model::{List, Timestamp};

ocm_model::resource! {
    /// A user account.
    pub struct Account {
        ban_code: String,
        ban_description: String,
        /// True if the account has been banned.
        banned: bool,
        capabilities: List<Capability>,
        created_at: Timestamp,
        email: String,
        first_name: String,
        labels: List<Label>,
        last_name: String,
        /// The organization the account belongs to. Usually a link.
        organization: Organization,
        rhit_account_id: String,
        rhit_web_user_id: String,
        service_account: bool,
        updated_at: Timestamp,
        username: String,
    }
}

ocm_model::resource! {
    /// An organization, the owner of accounts and subscriptions.
    pub struct Organization {
        capabilities: List<Capability>,
        created_at: Timestamp,
        ebs_account_id: String,
        /// The identifier of the organization in the external identity
        /// provider.
        external_id: String,
        labels: List<Label>,
        name: String,
        updated_at: Timestamp,
    }
}

ocm_model::resource! {
    /// A key/value pair attached to an account, an organization or a
    /// subscription.
    pub struct Label {
        account_id: String,
        created_at: Timestamp,
        internal: bool,
        key: String,
        managed_by: String,
        organization_id: String,
        subscription_id: String,
        /// The type of the labelled object.
        type_: String as "type",
        updated_at: Timestamp,
        value: String,
    }
}

ocm_model::record! {
    /// A capability granted to an account, an organization or a
    /// subscription.
    pub struct Capability {
        /// True if the capability is inherited from the owner of the
        /// object.
        inherited: bool,
        name: String,
        value: String,
    }
}
