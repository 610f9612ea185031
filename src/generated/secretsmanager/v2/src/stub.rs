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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::SecretsManager].
///
/// Application developers may need to implement this trait to mock
/// `client::SecretsManager`. In other use-cases, application developers only
/// use `client::SecretsManager` and need not be concerned with this trait or
/// its implementations.
///
/// The list operations return the decoded JSON body of one page. The pagers in
/// [crate::pager] extract the items and the link to the next page from this
/// body, mocks should return bodies with the same shape as the service.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait SecretsManager: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::SecretsManager::list_secrets].
    fn list_secrets(
        &self,
        _req: crate::model::ListSecretsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<serde_json::Value>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SecretsManager::list_secret_locks].
    fn list_secret_locks(
        &self,
        _req: crate::model::ListSecretLocksRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<serde_json::Value>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SecretsManager::list_secret_version_locks].
    fn list_secret_version_locks(
        &self,
        _req: crate::model::ListSecretVersionLocksRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<serde_json::Value>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SecretsManager::list_secrets_locks].
    fn list_secrets_locks(
        &self,
        _req: crate::model::ListSecretsLocksRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<serde_json::Value>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::SecretsManager::list_configurations].
    fn list_configurations(
        &self,
        _req: crate::model::ListConfigurationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<serde_json::Value>>>
    + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
