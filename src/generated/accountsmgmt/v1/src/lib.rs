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

//! Typed models for the OCM Account Management API, version 1.
//!
//! The types in [model] describe the JSON documents exchanged with the
//! account management service: accounts, organizations, subscriptions,
//! quotas, roles, and the related request and response bodies. Every type
//! comes with a builder, and encodes to and decodes from the JSON wire form.
//! See [ocm_model] for the behavior shared by all of them.
//!
//! # Example
//! ```
//! use ocm_accountsmgmt_v1::model::{CloudAccount, Contract, ContractDimension};
//! use ocm_model::json;
//!
//! let account = CloudAccount::builder()
//!     .set_cloud_account_id("acct-1")
//!     .set_cloud_provider_id("aws")
//!     .set_contracts([Contract::builder()
//!         .set_start_date("2025-01-01T00:00:00Z")
//!         .set_dimensions([ContractDimension::builder()
//!             .set_name("four_vcpu_hour")
//!             .set_value("100")])])
//!     .build()?;
//!
//! let text = json::to_string(&account)?;
//! let decoded = json::unmarshal::<CloudAccount>(&text)?;
//! assert_eq!(decoded, account);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// The records, resources, and enumerations of the API.
pub mod model;
