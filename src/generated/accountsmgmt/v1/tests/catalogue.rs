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
    use ocm_accountsmgmt_v1::model::*;
    use ocm_model::{Attribute, BuildError, Kind, List, ListBuilder, Record, Resource, json};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    static_assertions::assert_impl_all!(Account: Send, Sync, Clone, std::fmt::Debug, PartialEq);
    static_assertions::assert_impl_all!(Subscription: Send, Sync, Clone, std::fmt::Debug, PartialEq);
    static_assertions::assert_impl_all!(RoleBinding: Send, Sync, Clone, std::fmt::Debug, PartialEq);
    static_assertions::assert_impl_all!(AccessToken: Send, Sync, Clone, std::fmt::Debug, PartialEq);
    static_assertions::assert_impl_all!(List<QuotaCost>: Send, Sync, Clone, std::fmt::Debug, PartialEq);
    static_assertions::assert_impl_all!(SubscriptionBuilder: Send, Sync, Clone, std::fmt::Debug);
    static_assertions::assert_impl_all!(BillingModel: Send, Sync, Clone, std::fmt::Debug, PartialEq);

    fn empty<T: Record>() -> anyhow::Result<String> {
        Ok(json::to_string(&T::default())?)
    }

    #[test_case(empty::<AccessToken>())]
    #[test_case(empty::<AccessTokenAuth>())]
    #[test_case(empty::<Capability>())]
    #[test_case(empty::<CloudAccount>())]
    #[test_case(empty::<Contract>())]
    #[test_case(empty::<ContractDimension>())]
    #[test_case(empty::<QuotaCost>())]
    #[test_case(empty::<RelatedResource>())]
    #[test_case(empty::<ReservedResource>())]
    #[test_case(empty::<QuotaAuthorizationRequest>())]
    #[test_case(empty::<QuotaAuthorizationResponse>())]
    #[test_case(empty::<TokenAuthorizationRequest>())]
    #[test_case(empty::<TokenAuthorizationResponse>())]
    #[test_case(empty::<SupportCasesRequest>())]
    #[test_case(empty::<SupportCasesCreatedResponse>())]
    fn empty_record(got: anyhow::Result<String>) -> Result {
        assert_eq!(got?, "{}");
        Ok(())
    }

    #[test_case(empty::<Account>(), "Account")]
    #[test_case(empty::<Organization>(), "Organization")]
    #[test_case(empty::<Label>(), "Label")]
    #[test_case(empty::<CloudResource>(), "CloudResource")]
    #[test_case(empty::<Quota>(), "Quota")]
    #[test_case(empty::<ResourceQuota>(), "ResourceQuota")]
    #[test_case(empty::<Subscription>(), "Subscription")]
    #[test_case(empty::<Plan>(), "Plan")]
    #[test_case(empty::<Role>(), "Role")]
    #[test_case(empty::<Permission>(), "Permission")]
    #[test_case(empty::<RoleBinding>(), "RoleBinding")]
    fn empty_resource(got: anyhow::Result<String>, kind: &str) -> Result {
        assert_eq!(got?, format!(r#"{{"kind":"{kind}"}}"#));
        Ok(())
    }

    fn link_roundtrip<T: Resource>(text: &str) -> Result {
        let got = json::unmarshal::<T>(text)?;
        assert!(got.is_link());
        assert_eq!(got.kind(), Kind::Link);
        assert!(!Record::is_empty(&got));
        assert_eq!(json::to_string(&got)?, text);
        Ok(())
    }

    #[test]
    fn link_stubs() -> Result {
        link_roundtrip::<Account>(r#"{"kind":"AccountLink","id":"1","href":"/api/accounts_mgmt/v1/accounts/1"}"#)?;
        link_roundtrip::<Organization>(r#"{"kind":"OrganizationLink","id":"2"}"#)?;
        link_roundtrip::<Subscription>(r#"{"kind":"SubscriptionLink","href":"/api/accounts_mgmt/v1/subscriptions/3"}"#)?;
        link_roundtrip::<Role>(r#"{"kind":"RoleLink","id":"ClusterEditor"}"#)?;
        Ok(())
    }

    #[test]
    fn nil_references() -> Result {
        let got = json::unmarshal::<Account>(r#"{"kind":"AccountNil"}"#)?;
        assert!(Record::is_empty(&got));
        assert!(!got.is_link());

        let got = json::unmarshal::<Subscription>(
            r#"{"kind":"Subscription","id":"s","creator":{"kind":"AccountNil"}}"#,
        )?;
        assert!(got.get_creator().is_none());
        assert_eq!(ocm_model::kind_of(got.creator()), "AccountNil");
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored() -> Result {
        let got = json::unmarshal::<Organization>(
            r#"{"kind":"Organization","id":"1","name":"acme","quota_summary":[{"x":1}],"extra":null}"#,
        )?;
        let want = Organization::builder().set_id("1").set_name("acme").build()?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn zero_values_are_present() -> Result {
        let input = ResourceQuota::builder()
            .set_sku_count(0)
            .set_organization_id("")
            .build()?;
        let text = json::to_string(&input)?;
        assert_eq!(
            text,
            r#"{"kind":"ResourceQuota","organization_id":"","sku_count":0}"#
        );
        let got = json::unmarshal::<ResourceQuota>(&text)?;
        assert_eq!(got.get_sku_count(), Some(&0));
        assert_eq!(got.get_organization_id().map(String::as_str), Some(""));
        assert_eq!(got.get_quota_id(), None);
        assert_eq!(got.field_set(), input.field_set());
        Ok(())
    }

    #[test]
    fn list_build_failure() {
        let err = CloudAccount::builder()
            .set_cloud_account_id("acct-1")
            .set_contracts([
                Contract::builder().set_start_date("2025-01-01T00:00:00Z"),
                Contract::builder().set_end_date("2025-13-01T00:00:00Z"),
            ])
            .build()
            .unwrap_err();
        assert_eq!(err.path(), "contracts[1].end_date");
        let msg = err.to_string();
        assert!(msg.contains("2025-13-01"), "{msg}");
    }

    #[test]
    fn decode_continues_after_errors() -> Result {
        let input = r#"{
            "cloud_account_id": "acct-1",
            "contracts": [
                {"start_date": "2025-01-01T00:00:00Z", "end_date": "never"},
                {"dimensions": [{"name": "vcpu", "value": 4}]}
            ]
        }"#;
        let mut decoder = json::Decoder::new();
        let got = decoder
            .decode_str::<CloudAccount>(input)?
            .expect("the document is an object");
        assert_eq!(got.cloud_account_id(), "acct-1");
        assert_eq!(got.contracts().map(List::len), Some(2));
        let paths = decoder
            .errors()
            .iter()
            .map(|e| e.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec!["contracts[0].end_date", "contracts[1].dimensions[0].value"]
        );

        let err = json::unmarshal::<CloudAccount>(input).unwrap_err();
        assert_eq!(err.decode_errors().map(|e| e.len()), Some(2));
        Ok(())
    }

    #[test]
    fn full_roundtrip() -> Result {
        let input = Account::builder()
            .set_id("acc-1")
            .set_href("/api/accounts_mgmt/v1/accounts/acc-1")
            .set_banned(false)
            .set_capabilities([Capability::builder().set_name("capability.account.a").set_value("true")])
            .set_created_at("2025-05-16T09:46:12.5Z")
            .set_email("jdoe@example.com")
            .set_first_name("Jane")
            .set_labels([Label::builder().set_key("k").set_value("v").set_internal(true)])
            .set_last_name("Doe")
            .set_organization(
                Organization::builder()
                    .set_id("org-1")
                    .set_name("acme")
                    .set_external_id("123"),
            )
            .set_service_account(false)
            .set_username("jdoe")
            .build()?;
        let value = json::to_value(&input)?;
        assert_eq!(value["created_at"], Value::from("2025-05-16T09:46:12.5Z"));
        let got = json::unmarshal_value::<Account>(&value)?;
        assert_eq!(got, input);

        let pretty = json::to_string_with(&input, &json::Config::new().set_pretty(true))?;
        assert!(pretty.contains('\n'), "{pretty}");
        let got = json::unmarshal::<Account>(&pretty)?;
        assert_eq!(got, input);
        Ok(())
    }

    const API: &str = "/api/accounts_mgmt/v1";
    const T0: &str = "2025-05-16T09:46:12Z";
    const T1: &str = "2025-06-01T00:00:00.5Z";

    fn capability() -> Value {
        json!({"inherited": true, "name": "capability.account.create_moa_clusters", "value": "true"})
    }

    fn label() -> Value {
        json!({
            "kind": "Label",
            "id": "lbl-1",
            "href": format!("{API}/labels/lbl-1"),
            "account_id": "acc-1",
            "created_at": T0,
            "internal": false,
            "key": "env",
            "managed_by": "Account",
            "organization_id": "org-1",
            "subscription_id": "sub-1",
            "type": "Account",
            "updated_at": T1,
            "value": "prod",
        })
    }

    fn link(kind: &str, id: &str, collection: &str) -> Value {
        json!({"kind": kind, "id": id, "href": format!("{API}/{collection}/{id}")})
    }

    fn organization() -> Value {
        json!({
            "kind": "Organization",
            "id": "org-1",
            "href": format!("{API}/organizations/org-1"),
            "capabilities": [capability()],
            "created_at": T0,
            "ebs_account_id": "7654321",
            "external_id": "12345678",
            "labels": [label()],
            "name": "Acme",
            "updated_at": T1,
        })
    }

    fn account() -> Value {
        json!({
            "kind": "Account",
            "id": "acc-1",
            "href": format!("{API}/accounts/acc-1"),
            "ban_code": "export_control_compliance",
            "ban_description": "blocked by export control",
            "banned": true,
            "capabilities": [capability()],
            "created_at": T0,
            "email": "jdoe@example.com",
            "first_name": "Jane",
            "labels": [label()],
            "last_name": "Doe",
            "organization": link("OrganizationLink", "org-1", "organizations"),
            "rhit_account_id": "1234567",
            "rhit_web_user_id": "7654321",
            "service_account": false,
            "updated_at": T1,
            "username": "jdoe",
        })
    }

    fn plan() -> Value {
        json!({
            "kind": "Plan",
            "id": "MOA",
            "href": format!("{API}/plans/MOA"),
            "category": "Cluster",
            "name": "Red Hat OpenShift Service on AWS",
            "type": "MOA",
        })
    }

    fn subscription() -> Value {
        json!({
            "kind": "Subscription",
            "id": "sub-1",
            "href": format!("{API}/subscriptions/sub-1"),
            "billing_expiration_date": "2026-05-16T00:00:00Z",
            "billing_marketplace_account": "123456789012",
            "capabilities": [capability()],
            "cloud_account_id": "123456789012",
            "cloud_provider_id": "aws",
            "cluster_billing_model": "marketplace-aws",
            "cluster_id": "2a3b4c",
            "console_url": "https://console.example.com",
            "consumer_uuid": "4f0ae57b-4c0e-4f1c-9f24-4fdf7e2a8e9a",
            "cpu_total": 96,
            "created_at": T0,
            "creator": link("AccountLink", "acc-1", "accounts"),
            "display_name": "production",
            "external_cluster_id": "5b6f3c3e-0c76-4b5e-8a3b-4f0b8a2a1c11",
            "labels": [label()],
            "last_reconcile_date": T1,
            "last_released_at": T1,
            "last_telemetry_date": T1,
            "managed": true,
            "organization_id": "org-1",
            "plan": plan(),
            "product_bundle": "Openshift",
            "provenance": "Provisioning",
            "released": false,
            "rh_region_id": "us-east-1",
            "service_level": "L1-L3",
            "socket_total": 4,
            "status": "Active",
            "support_level": "Premium",
            "system_units": "Cores/vCPU",
            "trial_end_date": "2025-07-01T00:00:00Z",
            "updated_at": T1,
            "usage": "Production",
        })
    }

    fn reserved_resource() -> Value {
        json!({
            "availability_zone_type": "multi",
            "billing_marketplace_account": "123456789012",
            "billing_model": "marketplace-aws",
            "byoc": true,
            "count": 3,
            "created_at": T0,
            "resource_name": "m5.xlarge",
            "resource_type": "compute.node",
            "scope": "cluster",
            "updated_at": T1,
        })
    }

    fn related_resource() -> Value {
        json!({
            "availability_zone_type": "single",
            "billing_model": "standard",
            "byoc": "rhinfra",
            "cloud_provider": "aws",
            "cost": 4,
            "product": "OSD",
            "resource_name": "m5.2xlarge",
            "resource_type": "compute.node",
        })
    }

    fn cloud_account() -> Value {
        json!({
            "cloud_account_id": "123456789012",
            "cloud_provider_id": "aws",
            "contracts": [{
                "dimensions": [{"name": "four_vcpu_hour", "value": "10"}],
                "end_date": "2026-05-16T00:00:00Z",
                "start_date": T0,
            }],
        })
    }

    fn populated<T: Record>(input: Value) -> anyhow::Result<usize> {
        let object = json::unmarshal_value::<T>(&input)?;
        assert_eq!(json::to_value(&object)?, input);

        let text = json::to_string(&object)?;
        assert_eq!(json::unmarshal::<T>(&text)?, object);

        let rebuilt = T::build(Attribute::to_builder(&object))?;
        assert_eq!(rebuilt, object);
        Ok(object.field_set().len())
    }

    // The counts include `id` and `href` for resources.
    #[test_case(populated::<AccessToken>(json!({"auths": {"registry.example.com": {"auth": "dXNlcjpwYXNz", "email": "jdoe@example.com"}}})), 1; "access token")]
    #[test_case(populated::<AccessTokenAuth>(json!({"auth": "dXNlcjpwYXNz", "email": "jdoe@example.com"})), 2; "access token auth")]
    #[test_case(populated::<Account>(account()), 17; "account")]
    #[test_case(populated::<Organization>(organization()), 9; "organization")]
    #[test_case(populated::<Label>(label()), 12; "label")]
    #[test_case(populated::<Capability>(capability()), 3; "capability")]
    #[test_case(populated::<CloudAccount>(cloud_account()), 3; "cloud account")]
    #[test_case(populated::<Contract>(cloud_account()["contracts"][0].clone()), 3; "contract")]
    #[test_case(populated::<ContractDimension>(json!({"name": "four_vcpu_hour", "value": "10"})), 2; "contract dimension")]
    #[test_case(populated::<Quota>(json!({
        "kind": "Quota", "id": "q-1", "href": format!("{API}/quota/q-1"),
        "created_at": T0, "description": "OSD clusters", "updated_at": T1,
    })), 5; "quota")]
    #[test_case(populated::<ResourceQuota>(json!({
        "kind": "ResourceQuota", "id": "rq-1", "href": format!("{API}/resource_quota/rq-1"),
        "created_at": T0, "organization_id": "org-1", "quota_id": "cluster|byoc|osd",
        "sku_count": 5, "updated_at": T1,
    })), 7; "resource quota")]
    #[test_case(populated::<QuotaCost>(json!({
        "allowed": 10, "cloud_accounts": [cloud_account()], "consumed": 4,
        "organization_id": "org-1", "quota_id": "cluster|byoc|osd",
        "related_resources": [related_resource()], "version": "v2",
    })), 7; "quota cost")]
    #[test_case(populated::<RelatedResource>(related_resource()), 8; "related resource")]
    #[test_case(populated::<ReservedResource>(reserved_resource()), 10; "reserved resource")]
    #[test_case(populated::<CloudResource>(json!({
        "kind": "CloudResource", "id": "m5.xlarge", "href": format!("{API}/cloud_resources/m5.xlarge"),
        "active": true, "category": "compute_node", "category_pretty": "Compute",
        "cloud_provider": "aws", "cpu_cores": 4, "created_at": T0,
        "generic_name": "standard-4", "memory": 17179869184_i64, "memory_pretty": "16.0 GiB",
        "name_pretty": "m5.xlarge - General Purpose", "resource_type": "compute.node",
        "size_pretty": "xlarge", "updated_at": T1,
    })), 15; "cloud resource")]
    #[test_case(populated::<QuotaAuthorizationRequest>(json!({
        "account_username": "jdoe", "availability_zone": "multi", "display_name": "production",
        "product_category": "osd", "product_id": "OSD", "quota_version": "v2", "reserve": true,
        "resources": [reserved_resource()],
    })), 8; "quota authorization request")]
    #[test_case(populated::<QuotaAuthorizationResponse>(json!({
        "allowed": false, "excess_resources": [reserved_resource()], "subscription": subscription(),
    })), 3; "quota authorization response")]
    #[test_case(populated::<TokenAuthorizationRequest>(json!({"authorization_token": "c2VjcmV0"})), 1; "token authorization request")]
    #[test_case(populated::<TokenAuthorizationResponse>(json!({"account": account()})), 1; "token authorization response")]
    #[test_case(populated::<Role>(json!({
        "kind": "Role", "id": "OrganizationAdmin", "href": format!("{API}/roles/OrganizationAdmin"),
        "name": "OrganizationAdmin",
        "permissions": [{"kind": "Permission", "id": "p-1", "href": format!("{API}/permissions/p-1"), "action": "get", "resource": "Cluster"}],
    })), 4; "role")]
    #[test_case(populated::<Permission>(json!({
        "kind": "Permission", "id": "p-1", "href": format!("{API}/permissions/p-1"),
        "action": "update", "resource": "Subscription",
    })), 4; "permission")]
    #[test_case(populated::<RoleBinding>(json!({
        "kind": "RoleBinding", "id": "rb-1", "href": format!("{API}/role_bindings/rb-1"),
        "account": account(), "account_id": "acc-1", "config_managed": true, "created_at": T0,
        "managed_by": "Config", "organization": organization(), "organization_id": "org-1",
        "role": link("RoleLink", "OrganizationAdmin", "roles"), "role_id": "OrganizationAdmin",
        "subscription": link("SubscriptionLink", "sub-1", "subscriptions"), "subscription_id": "sub-1",
        "type": "Organization", "updated_at": T1,
    })), 15; "role binding")]
    #[test_case(populated::<Subscription>(subscription()), 35; "subscription")]
    #[test_case(populated::<Plan>(plan()), 5; "plan")]
    #[test_case(populated::<SupportCasesRequest>(json!({
        "cluster_id": "2a3b4c", "cluster_uuid": "5b6f3c3e-0c76-4b5e-8a3b-4f0b8a2a1c11",
        "description": "nodes are not ready", "event_stream_id": "ev-1", "severity": "High",
        "subscription_id": "sub-1", "summary": "cluster degraded",
    })), 7; "support cases request")]
    #[test_case(populated::<SupportCasesCreatedResponse>(json!({
        "case_number": "04123456", "cluster_id": "2a3b4c",
        "cluster_uuid": "5b6f3c3e-0c76-4b5e-8a3b-4f0b8a2a1c11", "description": "nodes are not ready",
        "severity": "High", "status": "Waiting on Red Hat", "subscription_id": "sub-1",
        "summary": "cluster degraded", "uri": "https://access.example.com/support/cases/04123456",
    })), 9; "support cases created response")]
    fn fully_populated(got: anyhow::Result<usize>, want: usize) -> Result {
        assert_eq!(got?, want);
        Ok(())
    }

    #[test]
    fn record_lists_cannot_be_links() -> Result {
        let err = QuotaCost::builder()
            .set_related_resources(ListBuilder::<RelatedResource>::new().set_link(true))
            .build()
            .unwrap_err();
        assert_eq!(err.path(), "related_resources");
        assert!(matches!(err.root_cause(), BuildError::Invalid(_)), "{err:?}");

        let cost = QuotaCost::builder()
            .set_related_resources(ListBuilder::<RelatedResource>::new().set_href(format!("{API}/related")))
            .build()?;
        let text = json::to_string(&cost)?;
        assert_eq!(text, format!(r#"{{"related_resources":{{"href":"{API}/related"}}}}"#));
        assert_eq!(json::unmarshal::<QuotaCost>(&text)?, cost);
        Ok(())
    }

    #[test]
    fn lists_of_resources() -> Result {
        let got = json::unmarshal::<List<Subscription>>(
            r#"{"kind":"SubscriptionList","href":"/api/accounts_mgmt/v1/subscriptions","items":[{"kind":"Subscription","id":"1"},{"kind":"SubscriptionLink","id":"2"}]}"#,
        )?;
        assert_eq!(got.len(), 2);
        let ids = got.iter().map(|s| s.id().to_string()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(got.get(1).map(Subscription::is_link), Some(true));

        let plain = json::unmarshal::<List<Label>>(r#"[{"kind":"Label","key":"a"}]"#)?;
        assert_eq!(json::to_string(&plain)?, r#"[{"kind":"Label","key":"a"}]"#);
        Ok(())
    }

    #[test]
    fn reader_entry_points() -> Result {
        let account = CloudAccount::builder()
            .set_cloud_account_id("acct-1")
            .set_cloud_provider_id("aws")
            .build()?;
        let mut buffer = Vec::new();
        json::marshal(&account, &mut buffer)?;
        let got = json::unmarshal_reader::<CloudAccount>(buffer.as_slice())?;
        assert_eq!(got, account);
        Ok(())
    }
}
