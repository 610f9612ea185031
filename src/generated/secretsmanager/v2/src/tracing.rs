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
use serde_json::Value;

/// Implements a [SecretsManager](super::stub::SecretsManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct SecretsManager<T>
where
    T: super::stub::SecretsManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> SecretsManager<T>
where
    T: super::stub::SecretsManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::SecretsManager for SecretsManager<T>
where
    T: super::stub::SecretsManager + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", skip_all, fields(offset = req.offset.as_deref()), err)]
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.inner.list_secrets(req, options).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(offset = req.offset.as_deref()), err)]
    async fn list_secret_locks(
        &self,
        req: crate::model::ListSecretLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.inner.list_secret_locks(req, options).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(offset = req.offset.as_deref()), err)]
    async fn list_secret_version_locks(
        &self,
        req: crate::model::ListSecretVersionLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.inner.list_secret_version_locks(req, options).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(offset = req.offset.as_deref()), err)]
    async fn list_secrets_locks(
        &self,
        req: crate::model::ListSecretsLocksRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.inner.list_secrets_locks(req, options).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(offset = req.offset.as_deref()), err)]
    async fn list_configurations(
        &self,
        req: crate::model::ListConfigurationsRequest,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.inner.list_configurations(req, options).await
    }
}
