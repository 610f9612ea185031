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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::credentials::{self, Credentials, CredentialsProvider};
    use gax::error::CredentialsError;
    use gax::options::*;
    use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_gax_internal::options::ClientConfig;
    use ibm_cloud_gax_internal::query_parameter::QueryParameter;
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> credentials::Result<HeaderMap>;
        }
    }

    fn test_config(cred: Credentials) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(cred);
        config
    }

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let config = test_config(credentials::bearer_token("test-token"));
        Ok(ReqwestClient::new(config, &endpoint).await?)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/secrets"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({"secrets": []}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"secrets": []}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/secrets"),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("groups", "default,my-group")))),
                request::query(url_decoded(contains(("offset", "20")))),
                request::query(url_decoded(not(contains(key("search"))))),
            ])
            .respond_with(json_encoded(json!({"secrets": []}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let builder = Some(10_i64).add(builder, "limit");
        let builder = None::<String>.add(builder, "search");
        let builder = vec!["default".to_string(), "my-group".to_string()].add(builder, "groups");
        let builder = Some("20".to_string()).add(builder, "offset");
        let _ = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent_prefix() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/configurations"),
                request::headers(contains((
                    "user-agent",
                    "test-prefix/1.2.3 ibm-cloud-rust/0.1.0 secrets-manager/0.1.0"
                ))),
            ])
            .respond_with(json_encoded(json!({"configurations": []}))),
        );

        let client = test_client(&server).await?;
        let builder = client
            .builder(reqwest::Method::GET, "/api/v2/configurations".into())
            .header(
                reqwest::header::USER_AGENT,
                "ibm-cloud-rust/0.1.0 secrets-manager/0.1.0",
            );
        let options = {
            let mut o = RequestOptions::default();
            o.set_user_agent("test-prefix/1.2.3");
            o
        };
        let _ = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn extra_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/secrets_locks"),
                request::headers(contains(("x-correlation-id", "abc123"))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(not(contains(("authorization", "Bearer override")))),
            ])
            .respond_with(json_encoded(json!({"secrets_locks": []}))),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets_locks".into());
        let options = {
            let mut o = RequestOptions::default();
            o.set_header(
                HeaderName::from_static("x-correlation-id"),
                HeaderValue::from_static("abc123"),
            );
            o.set_header(
                http::header::AUTHORIZATION,
                HeaderValue::from_static("Bearer override"),
            );
            o
        };
        let _ = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let payload = json!({
            "status_code": 404,
            "trace": "test-trace",
            "errors": [{"code": "secret_not_found", "message": "Secret not found"}],
        });
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v2/secrets/123/locks"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .body(payload.to_string()),
                ),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets/123/locks".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code(), Some("secret_not_found"));
        assert_eq!(status.trace, "test-trace");
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v2/secrets"))
                .respond_with(status_code(StatusCode::BAD_GATEWAY.as_u16()).body("upstream error")),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"upstream error"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v2/secrets"))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), Value::Null);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn response_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v2/secrets")).respond_with(
                status_code(200)
                    .insert_header("x-request-id", "req-123")
                    .body(json!({"secrets": []}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(
            response.headers().get("x-request-id"),
            Some(&HeaderValue::from_static("req-123"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v2/secrets")).respond_with(
                delay_and_then(
                    Duration::from_secs(5),
                    json_encoded(json!({"secrets": []})),
                ),
            ),
        );

        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let options = {
            let mut o = RequestOptions::default();
            o.set_attempt_timeout(Duration::from_millis(50));
            o
        };
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_error() -> Result<()> {
        let server = Server::run();
        let endpoint = format!("http://{}", server.addr());
        drop(server);

        let config = test_config(credentials::anonymous());
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials_error() -> Result<()> {
        let server = Server::run();
        let endpoint = format!("http://{}", server.addr());

        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .once()
            .returning(|| Err(CredentialsError::from_msg(false, "token expired")));
        let config = test_config(Credentials::from(mock));
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn custom_credentials_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/secrets"),
                request::headers(contains(("authorization", "Bearer refreshed"))),
            ])
            .times(2)
            .respond_with(json_encoded(json!({"secrets": []}))),
        );

        let mut mock = MockCredentials::new();
        mock.expect_headers().times(2).returning(|| {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::AUTHORIZATION,
                HeaderValue::from_static("Bearer refreshed"),
            );
            Ok(headers)
        });
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(Credentials::from(mock)), &endpoint).await?;
        for _ in 0..2 {
            let builder = client.builder(reqwest::Method::GET, "/api/v2/secrets".into());
            let _ = client
                .execute::<NoBody, Value>(builder, None, RequestOptions::default())
                .await?;
        }
        Ok(())
    }
}
