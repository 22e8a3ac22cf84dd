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

use super::{BillingModel, CloudAccount};
use ocm_model::{List, Timestamp};

ocm_model::resource! {
    /// A quota definition.
    pub struct Quota {
        created_at: Timestamp,
        description: String,
        updated_at: Timestamp,
    }
}

ocm_model::resource! {
    /// The quota granted to an organization for a given SKU.
    pub struct ResourceQuota {
        created_at: Timestamp,
        organization_id: String,
        quota_id: String,
        /// The number of SKU units granted.
        sku_count: i32,
        updated_at: Timestamp,
    }
}

ocm_model::record! {
    /// The consumption of a quota by an organization.
    pub struct QuotaCost {
        allowed: i32,
        cloud_accounts: List<CloudAccount>,
        consumed: i32,
        organization_id: String,
        quota_id: String,
        related_resources: List<RelatedResource>,
        version: String,
    }
}

ocm_model::record! {
    /// A resource that consumes a quota, and how much it costs.
    pub struct RelatedResource {
        availability_zone_type: String,
        billing_model: String,
        byoc: String,
        cloud_provider: String,
        cost: i32,
        product: String,
        resource_name: String,
        resource_type: String,
    }
}

ocm_model::record! {
    /// A resource reserved by a quota authorization.
    pub struct ReservedResource {
        availability_zone_type: String,
        billing_marketplace_account: String,
        billing_model: BillingModel,
        /// True if the resource runs in a cloud account owned by the
        /// customer.
        byoc: bool,
        count: i32,
        created_at: Timestamp,
        resource_name: String,
        resource_type: String,
        scope: String,
        updated_at: Timestamp,
    }
}

ocm_model::resource! {
    /// A type of resource offered by a cloud provider, for example a
    /// machine type.
    pub struct CloudResource {
        active: bool,
        category: String,
        category_pretty: String,
        cloud_provider: String,
        cpu_cores: i32,
        created_at: Timestamp,
        generic_name: String,
        /// The memory, in bytes.
        memory: i64,
        memory_pretty: String,
        name_pretty: String,
        resource_type: String,
        size_pretty: String,
        updated_at: Timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quota_cost() -> anyhow::Result<()> {
        let got = serde_json::from_value::<QuotaCost>(json!({
            "allowed": 10,
            "consumed": 0,
            "quota_id": "cluster|byoc|moa|marketplace",
            "related_resources": [
                {"resource_type": "cluster", "byoc": "byoc", "cost": 1},
            ],
            "cloud_accounts": [
                {"cloud_account_id": "acct-1", "cloud_provider_id": "aws"},
            ],
        }))?;
        assert_eq!(got.allowed(), 10);
        assert_eq!(got.get_consumed(), Some(&0));
        assert_eq!(got.get_version(), None);
        let cost = got
            .related_resources()
            .and_then(|r| r.get(0))
            .map(RelatedResource::cost);
        assert_eq!(cost, Some(1));
        let accounts = got.cloud_accounts().map(|a| a.to_vec()).unwrap_or_default();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].cloud_provider_id(), "aws");
        Ok(())
    }

    #[test]
    fn reserved_resource_billing_model() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ReservedResource>(json!({
            "billing_model": "marketplace-aws",
            "count": 3,
        }))?;
        assert_eq!(got.billing_model(), &BillingModel::MarketplaceAws);
        assert_eq!(got.count(), 3);
        assert!(!got.byoc());
        Ok(())
    }

    #[test]
    fn cloud_resource_memory() -> anyhow::Result<()> {
        let resource = CloudResource::builder()
            .set_id("m5.xlarge")
            .set_memory(17179869184_i64)
            .set_cpu_cores(4)
            .build()?;
        let got = serde_json::to_value(&resource)?;
        assert_eq!(
            got,
            json!({"kind": "CloudResource", "id": "m5.xlarge", "cpu_cores": 4, "memory": 17179869184_i64})
        );
        Ok(())
    }
}
