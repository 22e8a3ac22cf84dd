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

use super::{Account, BillingModel, Capability, Label};
use ocm_model::{List, Timestamp};

ocm_model::resource! {
    /// The entitlement of an organization to run a cluster or a product.
    pub struct Subscription {
        billing_expiration_date: Timestamp,
        billing_marketplace_account: String,
        capabilities: List<Capability>,
        cloud_account_id: String,
        cloud_provider_id: String,
        cluster_billing_model: BillingModel,
        cluster_id: String,
        console_url: String,
        consumer_uuid: String,
        cpu_total: i32,
        created_at: Timestamp,
        /// The account that created the subscription. Usually a link.
        creator: Account,
        display_name: String,
        external_cluster_id: String,
        labels: List<Label>,
        last_reconcile_date: Timestamp,
        last_released_at: Timestamp,
        last_telemetry_date: Timestamp,
        managed: bool,
        organization_id: String,
        plan: Plan,
        product_bundle: String,
        provenance: String,
        released: bool,
        rh_region_id: String,
        service_level: String,
        socket_total: i32,
        /// The state of the subscription, for example `Active` or
        /// `Archived`.
        status: String,
        support_level: String,
        system_units: String,
        trial_end_date: Timestamp,
        updated_at: Timestamp,
        usage: String,
    }
}

ocm_model::resource! {
    /// A product plan, for example `OSD` or `ROSA`.
    pub struct Plan {
        category: String,
        name: String,
        type_: String as "type",
    }
}
