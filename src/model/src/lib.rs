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

//! Runtime support for the OCM model crates.
//!
//! The OCM REST APIs exchange flat JSON objects. Every object type is
//! described by a schema: an ordered list of named and typed attributes. This
//! crate turns such a schema into Rust types. For each object type the
//! [record!] and [resource!] macros generate:
//!
//! * an immutable record, with a presence bitmap ([FieldSet]) that tells apart
//!   "absent" from "present with a zero value",
//! * a builder, with fluent setters and a fallible `build()` step,
//! * a list wrapper, via the generic [List] and [ListBuilder] types,
//! * a JSON writer and reader. The writer emits only present attributes, in
//!   declaration order. The reader skips unknown attributes and reports
//!   malformed values through a [json::Decoder] instead of aborting.
//!
//! # Example
//! ```
//! use ocm_model::json;
//!
//! ocm_model::record! {
//!     /// A cloud account.
//!     pub struct CloudAccount {
//!         /// The account identifier in the cloud provider.
//!         cloud_account_id: String,
//!         /// The cloud provider, for example `aws`.
//!         cloud_provider_id: String,
//!     }
//! }
//!
//! let account = CloudAccount::builder()
//!     .set_cloud_account_id("acct-1")
//!     .set_cloud_provider_id("aws")
//!     .build()?;
//! let text = json::to_string(&account)?;
//! assert_eq!(text, r#"{"cloud_account_id":"acct-1","cloud_provider_id":"aws"}"#);
//!
//! let decoded = json::unmarshal::<CloudAccount>(&text)?;
//! assert_eq!(decoded, account);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod attribute;
pub use attribute::Attribute;
mod enumeration;
pub use enumeration::UnknownValue;
mod error;
pub use error::{BuildError, DecodeError, DecodeErrors, Error};
mod field_set;
pub use field_set::FieldSet;
pub mod json;
mod list;
pub use list::{List, ListBuilder};
mod macros;
mod record;
pub use record::{Kind, Record, Resource, kind_of};
mod timestamp;
pub use timestamp::{InvalidTimestamp, Timestamp, TimestampError, TimestampInput};

/// Implementation details used by the code generated with the macros in this
/// crate. Not intended for direct use.
#[doc(hidden)]
pub mod __private {
    pub use crate::enumeration::EnumVisitor;
    pub use pastey::paste;
    pub use serde;
    pub use serde_json;
}
