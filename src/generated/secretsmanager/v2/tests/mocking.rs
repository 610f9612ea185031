// Copyright 2025 IBM Cloud Rust SDK Authors
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
mod mocking {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use ibm_cloud_secretsmanager_v2 as sm;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    mockall::mock! {
        #[derive(Debug)]
        SecretsManager {}
        impl sm::stub::SecretsManager for SecretsManager {
            async fn list_secrets(&self, req: sm::model::ListSecretsRequest, _options: RequestOptions) -> gax::Result<Response<Value>>;
            async fn list_secret_locks(&self, req: sm::model::ListSecretLocksRequest, _options: RequestOptions) -> gax::Result<Response<Value>>;
            async fn list_secret_version_locks(&self, req: sm::model::ListSecretVersionLocksRequest, _options: RequestOptions) -> gax::Result<Response<Value>>;
            async fn list_secrets_locks(&self, req: sm::model::ListSecretsLocksRequest, _options: RequestOptions) -> gax::Result<Response<Value>>;
            async fn list_configurations(&self, req: sm::model::ListConfigurationsRequest, _options: RequestOptions) -> gax::Result<Response<Value>>;
        }
    }

    fn secret(id: &str) -> Value {
        json!({"id": id, "name": format!("name-{id}"), "secret_type": "arbitrary"})
    }

    #[tokio::test]
    async fn secrets_two_pages() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.offset.is_none() && r.limit == Some(1))
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "next": {"href": "https://example.com/api/v2/secrets?offset=1&limit=1"},
                    "total_count": 2,
                    "limit": 1,
                    "secrets": [secret("A")],
                })))
            });
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.offset.as_deref() == Some("1") && r.limit == Some(1))
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "total_count": 2,
                    "limit": 1,
                    "secrets": [secret("B")],
                })))
            });

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client.list_secrets().set_limit(1).by_page()?;
        assert!(pager.has_next());
        let items = pager.get_all().await?;
        assert!(!pager.has_next());
        let ids = items.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(items[0].name, "name-A");
        Ok(())
    }

    #[tokio::test]
    async fn secrets_page_by_page() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "next": {"href": "/api/v2/secrets?offset=2"},
                    "secrets": [secret("A"), secret("B")],
                })))
            });
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.offset.as_deref() == Some("2"))
            .return_once(|_, _| Ok(Response::from(json!({"secrets": [secret("C")]}))));

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client.list_secrets().by_page()?;
        let mut pages = Vec::new();
        while pager.has_next() {
            let page = pager.get_next().await?;
            pages.push(page.into_iter().map(|s| s.id).collect::<Vec<_>>());
        }
        assert_eq!(pages, vec![vec!["A", "B"], vec!["C"]]);

        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_illegal_state(), "{err:?}");
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn secrets_filters_on_every_page() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        let want = sm::model::ListSecretsRequest::new()
            .set_limit(5)
            .set_sort("-created_at")
            .set_search("db")
            .set_groups(["default", "team-a"])
            .set_secret_types(["arbitrary", "username_password"])
            .set_match_all_labels(["env:prod"]);
        let first = want.clone();
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r == &first)
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "next": {"href": "https://example.com/api/v2/secrets?limit=5&offset=5&search=db"},
                    "secrets": [secret("A")],
                })))
            });
        let second = want.clone().set_offset("5");
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(move |r, _| r == &second)
            .return_once(|_, _| Ok(Response::from(json!({"secrets": [secret("B")]}))));

        let client = sm::client::SecretsManager::from_stub(mock);
        let items = client
            .list_secrets()
            .with_request(want.clone())
            .by_page()?
            .get_all()
            .await?;
        assert_eq!(items.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn secrets_retry_after_error() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "next": {"href": "https://example.com/api/v2/secrets?offset=7"},
                    "secrets": [secret("A")],
                })))
            });
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.offset.as_deref() == Some("7"))
            .return_once(|_, _| Err(gax::error::Error::io("connection reset")));
        mock.expect_list_secrets()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.offset.as_deref() == Some("7"))
            .return_once(|_, _| Ok(Response::from(json!({"secrets": [secret("B")]}))));

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client.list_secrets().by_page()?;
        assert_eq!(pager.get_next().await?.len(), 1);
        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(pager.has_next());
        let items = pager.get_next().await?;
        assert_eq!(items[0].id, "B");
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn secrets_service_error() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        mock.expect_list_secrets().once().return_once(|_, _| {
            let status = gax::error::api::ApiErrorStatus::default()
                .set_status_code(403_u16)
                .set_errors([gax::error::api::ApiErrorItem::default()
                    .set_code("forbidden")
                    .set_message("missing the SecretsReader role")]);
            Err(gax::error::Error::service(status))
        });

        let client = sm::client::SecretsManager::from_stub(mock);
        let err = client.list_secrets().by_page()?.get_all().await.unwrap_err();
        assert_eq!(err.status().and_then(|s| s.code()), Some("forbidden"));
        Ok(())
    }

    #[tokio::test]
    async fn secret_locks() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_secret_locks()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.id == "secret-1" && r.offset.is_none() && r.search.as_deref() == Some("app"))
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "locks": [{"name": "lock-a", "secret_id": "secret-1", "secret_version_alias": "current"}],
                    "next": {"href": "https://example.com/api/v2/secrets/secret-1/locks?offset=1&search=app"},
                })))
            });
        mock.expect_list_secret_locks()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.id == "secret-1" && r.offset.as_deref() == Some("1") && r.search.as_deref() == Some("app"))
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "locks": [{"name": "lock-b", "secret_id": "secret-1", "secret_version_alias": "previous"}],
                })))
            });

        let client = sm::client::SecretsManager::from_stub(mock);
        let locks = client
            .list_secret_locks()
            .set_id("secret-1")
            .set_search("app")
            .by_page()?
            .get_all()
            .await?;
        let got = locks
            .iter()
            .map(|l| (l.name.as_str(), l.secret_version_alias.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(got, vec![("lock-a", "current"), ("lock-b", "previous")]);
        Ok(())
    }

    #[tokio::test]
    async fn secret_version_locks_single_page() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        mock.expect_list_secret_version_locks()
            .once()
            .withf(|r, _| r.secret_id == "secret-1" && r.id == "version-1")
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "total_count": 2,
                    "limit": 10,
                    "offset": 0,
                    "locks": [
                        {"name": "lock-a", "secret_version_id": "version-1"},
                        {"name": "lock-b", "secret_version_id": "version-1"},
                    ],
                })))
            });

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client
            .list_secret_version_locks()
            .set_secret_id("secret-1")
            .set_id("version-1")
            .set_limit(10)
            .by_page()?;
        let locks = pager.get_all().await?;
        assert_eq!(locks.len(), 2);
        assert!(!pager.has_next());
        assert!(pager.get_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn secrets_locks() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_secrets_locks()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.groups == vec!["default"])
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "secrets_locks": [{
                        "secret_id": "secret-1",
                        "versions": [{"version_id": "v1", "locks": ["lock-a"]}],
                    }],
                    "next": {"href": "https://example.com/api/v2/secrets_locks?groups=default&offset=1"},
                })))
            });
        mock.expect_list_secrets_locks()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.groups == vec!["default"] && r.offset.as_deref() == Some("1"))
            .return_once(|_, _| Ok(Response::from(json!({"secrets_locks": []}))));

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client
            .list_secrets_locks()
            .set_groups(["default"])
            .by_page()?;
        let first = pager.get_next().await?;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].versions[0].locks, vec!["lock-a"]);
        assert!(pager.has_next());
        let second = pager.get_next().await?;
        assert!(second.is_empty(), "{second:?}");
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn configurations_protocol_violation() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        mock.expect_list_configurations()
            .once()
            .return_once(|_, _| Ok(Response::from(json!({"total_count": 0}))));

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut pager = client.list_configurations().by_page()?;
        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn configurations_send() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        mock.expect_list_configurations()
            .once()
            .withf(|r, _| r.offset.as_deref() == Some("20") && r.secret_types == vec!["public_cert"])
            .return_once(|_, _| {
                Ok(Response::from(json!({
                    "total_count": 21,
                    "limit": 20,
                    "offset": 20,
                    "previous": {"href": "https://example.com/api/v2/configurations?offset=0&limit=20"},
                    "configurations": [{
                        "name": "le-config",
                        "config_type": "public_cert_configuration_ca_lets_encrypt",
                        "lets_encrypt_environment": "production",
                    }],
                })))
            });

        let client = sm::client::SecretsManager::from_stub(mock);
        let page = client
            .list_configurations()
            .set_offset("20")
            .set_secret_types(["public_cert"])
            .send()
            .await?;
        assert_eq!(page.total_count, 21);
        assert!(page.next.is_none(), "{page:?}");
        assert_eq!(page.configurations[0].name, "le-config");
        assert_eq!(
            page.configurations[0].extra.get("lets_encrypt_environment"),
            Some(&json!("production"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn by_page_rejects_offset() {
        let client = sm::client::SecretsManager::from_stub(MockSecretsManager::new());
        let err = client
            .list_secret_locks()
            .set_id("secret-1")
            .set_offset("10")
            .by_page()
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }

    #[tokio::test]
    async fn request_options_forwarded() -> anyhow::Result<()> {
        use gax::options::RequestOptionsBuilder;
        let mut mock = MockSecretsManager::new();
        mock.expect_list_secrets()
            .times(2)
            .withf(|_, o| {
                o.user_agent().as_deref() == Some("my-app/1.0")
                    && o.attempt_timeout() == &Some(std::time::Duration::from_secs(5))
            })
            .returning(|r, _| match r.offset {
                None => Ok(Response::from(json!({
                    "secrets": [],
                    "next": {"href": "https://example.com/api/v2/secrets?offset=0"},
                }))),
                Some(_) => Ok(Response::from(json!({"secrets": []}))),
            });

        let client = sm::client::SecretsManager::from_stub(mock);
        let items = client
            .list_secrets()
            .with_user_agent("my-app/1.0")
            .with_attempt_timeout(std::time::Duration::from_secs(5))
            .by_page()?
            .get_all()
            .await?;
        assert!(items.is_empty(), "{items:?}");
        Ok(())
    }

    #[tokio::test]
    async fn unimplemented_default() {
        #[derive(Debug)]
        struct Empty;
        impl sm::stub::SecretsManager for Empty {}

        let client = sm::client::SecretsManager::from_stub(Empty);
        let result = tokio::spawn(async move { client.list_secrets().send().await }).await;
        assert!(result.is_err_and(|e| e.is_panic()));
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn secrets_stream() -> anyhow::Result<()> {
        let mut mock = MockSecretsManager::new();
        mock.expect_list_secrets().times(2).returning(|r, _| match r.offset {
            None => Ok(Response::from(json!({
                "secrets": [secret("A"), secret("B")],
                "next": {"href": "https://example.com/api/v2/secrets?offset=2"},
            }))),
            Some(_) => Ok(Response::from(json!({"secrets": [secret("C")]}))),
        });

        let client = sm::client::SecretsManager::from_stub(mock);
        let mut stream = client.list_secrets().by_page()?.into_stream();
        let mut ids = Vec::new();
        while let Some(item) = stream.next().await {
            ids.push(item?.id);
        }
        assert_eq!(ids, vec!["A", "B", "C"]);
        Ok(())
    }
}
