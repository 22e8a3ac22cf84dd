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

ocm_model::record! {
    /// Opens a support case for a cluster.
    pub struct SupportCasesRequest {
        cluster_id: String,
        cluster_uuid: String,
        description: String,
        event_stream_id: String,
        severity: String,
        subscription_id: String,
        summary: String,
    }
}

ocm_model::record! {
    /// Describes the support case created for a [SupportCasesRequest].
    pub struct SupportCasesCreatedResponse {
        case_number: String,
        cluster_id: String,
        cluster_uuid: String,
        description: String,
        severity: String,
        status: String,
        subscription_id: String,
        summary: String,
        /// The location of the case in the customer portal.
        uri: String,
    }
}
