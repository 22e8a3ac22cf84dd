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

ocm_model::string_enum! {
    /// How the resources of a subscription are billed.
    pub enum BillingModel {
        /// Billed through a marketplace, the specific one is not known.
        Marketplace = "marketplace",
        MarketplaceAws = "marketplace-aws",
        MarketplaceAzure = "marketplace-azure",
        MarketplaceGcp = "marketplace-gcp",
        MarketplaceRhm = "marketplace-rhm",
        /// Billed directly by Red Hat.
        Standard = "standard",
    }
}

ocm_model::record! {
    /// An account in a cloud provider, used to bill the resources of a
    /// subscription.
    pub struct CloudAccount {
        cloud_account_id: String,
        cloud_provider_id: String,
        contracts: List<Contract>,
    }
}

ocm_model::record! {
    /// A contract between the owner of a cloud account and the marketplace.
    pub struct Contract {
        dimensions: List<ContractDimension>,
        end_date: Timestamp,
        start_date: Timestamp,
    }
}

ocm_model::record! {
    pub struct ContractDimension {
        name: String,
        value: String,
    }
}
