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

use gax::options::RequestOptions;
use gax::response::Response;
use serde_json::Value;

/// A dyn-compatible, crate-private version of [super::SecretsManager].
#[async_trait::async_trait]
pub trait SecretsManager: std::fmt::Debug + Send + Sync {
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>>;

    async fn list_secret_locks(
        &self,
        req: crate::model::ListSecretLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>>;

    async fn list_secret_version_locks(
        &self,
        req: crate::model::ListSecretVersionLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>>;

    async fn list_secrets_locks(
        &self,
        req: crate::model::ListSecretsLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>>;

    async fn list_configurations(
        &self,
        req: crate::model::ListConfigurationsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>>;
}

/// All implementations of [super::SecretsManager] also implement [SecretsManager].
#[async_trait::async_trait]
impl<T: super::SecretsManager> SecretsManager for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>> {
        T::list_secrets(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_secret_locks(
        &self,
        req: crate::model::ListSecretLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>> {
        T::list_secret_locks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_secret_version_locks(
        &self,
        req: crate::model::ListSecretVersionLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>> {
        T::list_secret_version_locks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_secrets_locks(
        &self,
        req: crate::model::ListSecretsLocksRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>> {
        T::list_secrets_locks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_configurations(
        &self,
        req: crate::model::ListConfigurationsRequest,
        options: RequestOptions,
    ) -> crate::Result<Response<Value>> {
        T::list_configurations(self, req, options).await
    }
}
