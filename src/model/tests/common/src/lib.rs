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

//! Records used in the integration tests of `ocm-model`.

use model::{List, Timestamp};
use std::collections::BTreeMap;

model::string_enum! {
    /// An enumeration for the tests.
    pub enum Color {
        Red = "red",
        Green = "green",
        Blue = "blue",
    }
}

model::record! {
    pub struct RecordWithString {
        singular: String,
        repeated: Vec<String>,
        map: BTreeMap<String, String>,
    }
}

model::record! {
    pub struct RecordWithBool {
        singular: bool,
        repeated: Vec<bool>,
    }
}

model::record! {
    pub struct RecordWithI32 {
        singular: i32,
        repeated: Vec<i32>,
        map: BTreeMap<String, i32>,
    }
}

model::record! {
    pub struct RecordWithI64 {
        singular: i64,
        repeated: Vec<i64>,
    }
}

model::record! {
    pub struct RecordWithF64 {
        singular: f64,
        repeated: Vec<f64>,
    }
}

model::record! {
    pub struct RecordWithTimestamp {
        singular: Timestamp,
        repeated: Vec<Timestamp>,
        map: BTreeMap<String, Timestamp>,
    }
}

model::record! {
    pub struct RecordWithEnum {
        singular: Color,
        repeated: Vec<Color>,
    }
}

model::record! {
    pub struct RecordWithRecord {
        singular: RecordWithTimestamp,
        list: List<RecordWithTimestamp>,
        map: BTreeMap<String, RecordWithTimestamp>,
    }
}

model::record! {
    /// Uses JSON names that are not valid Rust identifiers.
    pub struct RecordWithJsonNames {
        type_: String as "type",
        self_: bool as "self",
    }
}

model::resource! {
    /// A resource with nested resources.
    pub struct Widget {
        name: String,
        owner: Gadget,
        children: List<Widget>,
        created_at: Timestamp,
    }
}

model::resource! {
    pub struct Gadget {
        name: String,
    }
}
