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

use crate::Result;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::path_parameter::required;
use gaxi::query_parameter::QueryParameter;
use serde_json::Value;

/// Implements [SecretsManager](super::stub::SecretsManager) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct SecretsManager {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for SecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("SecretsManager")
            .field("inner", &self.inner)
            .finish()
    }
}

impl SecretsManager {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    fn get(&self, path: String) -> reqwest::RequestBuilder {
        self.inner
            .builder(reqwest::Method::GET, path)
            .header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_static(&crate::info::USER_AGENT_HEADER),
            )
    }
}

impl super::stub::SecretsManager for SecretsManager {
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let builder = self.get("/api/v2/secrets".to_string());
        let builder = req.offset.add(builder, "offset");
        let builder = req.limit.add(builder, "limit");
        let builder = req.sort.add(builder, "sort");
        let builder = req.search.add(builder, "search");
        let builder = req.groups.add(builder, "groups");
        let builder = req.secret_types.add(builder, "secret_types");
        let builder = req.match_all_labels.add(builder, "match_all_labels");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_secret_locks(
        &self,
        req: crate::model::ListSecretLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = required("id", &req.id)?;
        let builder = self.get(format!("/api/v2/secrets/{id}/locks"));
        let builder = req.offset.add(builder, "offset");
        let builder = req.limit.add(builder, "limit");
        let builder = req.sort.add(builder, "sort");
        let builder = req.search.add(builder, "search");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_secret_version_locks(
        &self,
        req: crate::model::ListSecretVersionLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let secret_id = required("secret_id", &req.secret_id)?;
        let id = required("id", &req.id)?;
        let builder = self.get(format!("/api/v2/secrets/{secret_id}/versions/{id}/locks"));
        let builder = req.offset.add(builder, "offset");
        let builder = req.limit.add(builder, "limit");
        let builder = req.sort.add(builder, "sort");
        let builder = req.search.add(builder, "search");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_secrets_locks(
        &self,
        req: crate::model::ListSecretsLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let builder = self.get("/api/v2/secrets_locks".to_string());
        let builder = req.offset.add(builder, "offset");
        let builder = req.limit.add(builder, "limit");
        let builder = req.search.add(builder, "search");
        let builder = req.groups.add(builder, "groups");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_configurations(
        &self,
        req: crate::model::ListConfigurationsRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let builder = self.get("/api/v2/configurations".to_string());
        let builder = req.offset.add(builder, "offset");
        let builder = req.limit.add(builder, "limit");
        let builder = req.sort.add(builder, "sort");
        let builder = req.search.add(builder, "search");
        let builder = req.secret_types.add(builder, "secret_types");
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
