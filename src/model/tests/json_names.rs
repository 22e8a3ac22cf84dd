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

#[cfg(test)]
mod test {
    use common::RecordWithJsonNames;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn serialize() -> Result {
        let input = RecordWithJsonNames::builder()
            .set_type_("Cluster")
            .set_self_(true)
            .build()?;
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"type": "Cluster", "self": true}));
        Ok(())
    }

    #[test]
    fn deserialize() -> Result {
        let got = serde_json::from_value::<RecordWithJsonNames>(json!({
            "type": "Cluster",
            "self": false,
            "type_": "ignored",
        }))?;
        assert_eq!(got.type_(), "Cluster");
        assert_eq!(got.get_self_(), Some(&false));
        Ok(())
    }

    #[test]
    fn errors_use_json_names() {
        let err = serde_json::from_value::<RecordWithJsonNames>(json!({"self": "yes"}))
            .unwrap_err()
            .to_string();
        assert!(err.contains("self"), "{err}");
        assert!(!err.contains("self_"), "{err}");
    }
}
