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

#![allow(rustdoc::bare_urls)]

use serde_json::{Map, Value};

/// Request message for [SecretsManager::list_secrets].
///
/// [SecretsManager::list_secrets]: crate::client::SecretsManager::list_secrets
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSecretsRequest {
    /// The number of secrets to skip.
    ///
    /// The pagers manage this value, only set it when calling `send()`
    /// directly.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<String>,

    /// The maximum number of secrets in each page, the service allows up to
    /// 1000.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<i64>,

    /// Sort the results by this field, prefix with `-` for descending order.
    ///
    /// For example, `created_at` or `-name`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort: Option<String>,

    /// Returns only the secrets whose name, labels, or id contain this text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search: Option<String>,

    /// Returns only the secrets in these secret groups.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub groups: Vec<String>,

    /// Returns only the secrets of these types, e.g., `arbitrary` or
    /// `imported_cert`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub secret_types: Vec<String>,

    /// Returns only the secrets with all these labels.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub match_all_labels: Vec<String>,
}

impl ListSecretsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offset][ListSecretsRequest::offset].
    pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][ListSecretsRequest::offset].
    pub fn set_or_clear_offset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListSecretsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListSecretsRequest::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [search][ListSecretsRequest::search].
    pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }

    /// Sets the value of [groups][ListSecretsRequest::groups].
    pub fn set_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.groups = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [secret_types][ListSecretsRequest::secret_types].
    pub fn set_secret_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.secret_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [match_all_labels][ListSecretsRequest::match_all_labels].
    pub fn set_match_all_labels<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_all_labels = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request message for [SecretsManager::list_secret_locks].
///
/// [SecretsManager::list_secret_locks]: crate::client::SecretsManager::list_secret_locks
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSecretLocksRequest {
    /// The id of the secret.
    pub id: String,

    /// The number of locks to skip.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<String>,

    /// The maximum number of locks in each page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<i64>,

    /// Sort the results by this field, prefix with `-` for descending order.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort: Option<String>,

    /// Returns only the locks whose name contains this text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search: Option<String>,
}

impl ListSecretLocksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ListSecretLocksRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [offset][ListSecretLocksRequest::offset].
    pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][ListSecretLocksRequest::offset].
    pub fn set_or_clear_offset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListSecretLocksRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListSecretLocksRequest::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [search][ListSecretLocksRequest::search].
    pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }
}

/// Request message for [SecretsManager::list_secret_version_locks].
///
/// [SecretsManager::list_secret_version_locks]: crate::client::SecretsManager::list_secret_version_locks
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSecretVersionLocksRequest {
    /// The id of the secret.
    pub secret_id: String,

    /// The id of the secret version, or one of the `current` and `previous`
    /// aliases.
    pub id: String,

    /// The number of locks to skip.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<String>,

    /// The maximum number of locks in each page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<i64>,

    /// Sort the results by this field, prefix with `-` for descending order.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort: Option<String>,

    /// Returns only the locks whose name contains this text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search: Option<String>,
}

impl ListSecretVersionLocksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [secret_id][ListSecretVersionLocksRequest::secret_id].
    pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_id = v.into();
        self
    }

    /// Sets the value of [id][ListSecretVersionLocksRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [offset][ListSecretVersionLocksRequest::offset].
    pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][ListSecretVersionLocksRequest::offset].
    pub fn set_or_clear_offset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListSecretVersionLocksRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListSecretVersionLocksRequest::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [search][ListSecretVersionLocksRequest::search].
    pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }
}

/// Request message for [SecretsManager::list_secrets_locks].
///
/// [SecretsManager::list_secrets_locks]: crate::client::SecretsManager::list_secrets_locks
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListSecretsLocksRequest {
    /// The number of secrets to skip.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<String>,

    /// The maximum number of secrets in each page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<i64>,

    /// Returns only the secrets with locks whose name contains this text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search: Option<String>,

    /// Returns only the secrets in these secret groups.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub groups: Vec<String>,
}

impl ListSecretsLocksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offset][ListSecretsLocksRequest::offset].
    pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][ListSecretsLocksRequest::offset].
    pub fn set_or_clear_offset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListSecretsLocksRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [search][ListSecretsLocksRequest::search].
    pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }

    /// Sets the value of [groups][ListSecretsLocksRequest::groups].
    pub fn set_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.groups = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Request message for [SecretsManager::list_configurations].
///
/// [SecretsManager::list_configurations]: crate::client::SecretsManager::list_configurations
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListConfigurationsRequest {
    /// The number of configurations to skip.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub offset: Option<String>,

    /// The maximum number of configurations in each page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: Option<i64>,

    /// Sort the results by this field, prefix with `-` for descending order.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort: Option<String>,

    /// Returns only the configurations whose name contains this text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub search: Option<String>,

    /// Returns only the configurations for these secret types, e.g.,
    /// `public_cert` or `private_cert`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub secret_types: Vec<String>,
}

impl ListConfigurationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [offset][ListConfigurationsRequest::offset].
    pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][ListConfigurationsRequest::offset].
    pub fn set_or_clear_offset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][ListConfigurationsRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListConfigurationsRequest::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [search][ListConfigurationsRequest::search].
    pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
        self.search = Some(v.into());
        self
    }

    /// Sets the value of [secret_types][ListConfigurationsRequest::secret_types].
    pub fn set_secret_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.secret_types = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A link to another page in a paginated collection.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PaginatedCollectionLink {
    /// The URL of the page.
    pub href: String,
}

impl PaginatedCollectionLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][PaginatedCollectionLink::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = v.into();
        self
    }
}

/// The metadata of a secret.
///
/// Secrets Manager supports several secret types. The fields common to all
/// types are decoded into this struct, the type-specific fields, e.g.,
/// `expiration_date` for certificates, are kept in
/// [extra][SecretMetadata::extra].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub secret_type: String,
    pub secret_group_id: String,
    pub crn: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub labels: Vec<String>,
    /// The lifecycle state, `1` is active.
    pub state: i64,
    pub state_description: String,
    pub versions_total: i64,
    pub locks_total: i64,
    pub downloaded: bool,
    pub custom_metadata: Map<String, Value>,

    /// The fields specific to each secret type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SecretMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][SecretMetadata::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][SecretMetadata::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [secret_type][SecretMetadata::secret_type].
    pub fn set_secret_type<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_type = v.into();
        self
    }

    /// Sets the value of [secret_group_id][SecretMetadata::secret_group_id].
    pub fn set_secret_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_group_id = v.into();
        self
    }

    /// Sets the value of [labels][SecretMetadata::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A lock on a secret version.
///
/// Locks prevent the deletion or rotation of a secret version while an
/// application uses it.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretLock {
    pub name: String,
    pub description: String,
    /// Optional information about the lock, as key-value pairs.
    pub attributes: Map<String, Value>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub secret_id: String,
    pub secret_group_id: String,
    pub secret_version_id: String,
    /// Either `current` or `previous`.
    pub secret_version_alias: String,
}

impl SecretLock {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][SecretLock::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [secret_id][SecretLock::secret_id].
    pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_id = v.into();
        self
    }

    /// Sets the value of [secret_version_id][SecretLock::secret_version_id].
    pub fn set_secret_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_version_id = v.into();
        self
    }
}

/// The locks on the versions of a secret, as returned by the account-wide
/// list operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretLocks {
    pub secret_id: String,
    pub secret_group_id: String,
    pub secret_type: String,
    pub versions: Vec<SecretVersionLocks>,
}

impl SecretLocks {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [secret_id][SecretLocks::secret_id].
    pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
        self.secret_id = v.into();
        self
    }

    /// Sets the value of [versions][SecretLocks::versions].
    pub fn set_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SecretVersionLocks>,
    {
        self.versions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The names of the locks on one secret version.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretVersionLocks {
    pub version_id: String,
    pub version_alias: String,
    pub locks: Vec<String>,
    pub payload_available: bool,
}

impl SecretVersionLocks {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version_id][SecretVersionLocks::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = v.into();
        self
    }

    /// Sets the value of [locks][SecretVersionLocks::locks].
    pub fn set_locks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.locks = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The metadata of a secret engine configuration.
///
/// The configuration types, e.g., `public_cert_configuration_ca_lets_encrypt`,
/// have different fields. The common fields are decoded into this struct, the
/// rest are kept in [extra][ConfigurationMetadata::extra].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigurationMetadata {
    pub name: String,
    pub config_type: String,
    pub secret_type: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,

    /// The fields specific to each configuration type.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigurationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ConfigurationMetadata::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [config_type][ConfigurationMetadata::config_type].
    pub fn set_config_type<T: Into<String>>(mut self, v: T) -> Self {
        self.config_type = v.into();
        self
    }
}

macro_rules! paginated_collection {
    ($(#[$meta:meta])* $name:ident, $field:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default)]
        #[non_exhaustive]
        pub struct $name {
            /// The number of items in the full collection.
            pub total_count: i64,
            /// The page size requested.
            pub limit: i64,
            /// The number of items skipped before this page.
            pub offset: i64,
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub first: Option<PaginatedCollectionLink>,
            /// The link to the next page, absent on the last page.
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub next: Option<PaginatedCollectionLink>,
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub previous: Option<PaginatedCollectionLink>,
            #[serde(skip_serializing_if = "std::option::Option::is_none")]
            pub last: Option<PaginatedCollectionLink>,
            pub $field: Vec<$item>,
        }
    };
}

paginated_collection!(
    /// One page of the results of [SecretsManager::list_secrets].
    ///
    /// [SecretsManager::list_secrets]: crate::client::SecretsManager::list_secrets
    SecretMetadataPaginatedCollection,
    secrets,
    SecretMetadata
);

paginated_collection!(
    /// One page of the results of [SecretsManager::list_secret_locks].
    ///
    /// [SecretsManager::list_secret_locks]: crate::client::SecretsManager::list_secret_locks
    SecretLocksPaginatedCollection,
    locks,
    SecretLock
);

paginated_collection!(
    /// One page of the results of [SecretsManager::list_secret_version_locks].
    ///
    /// [SecretsManager::list_secret_version_locks]: crate::client::SecretsManager::list_secret_version_locks
    SecretVersionLocksPaginatedCollection,
    locks,
    SecretLock
);

paginated_collection!(
    /// One page of the results of [SecretsManager::list_secrets_locks].
    ///
    /// [SecretsManager::list_secrets_locks]: crate::client::SecretsManager::list_secrets_locks
    SecretsLocksPaginatedCollection,
    secrets_locks,
    SecretLocks
);

paginated_collection!(
    /// One page of the results of [SecretsManager::list_configurations].
    ///
    /// [SecretsManager::list_configurations]: crate::client::SecretsManager::list_configurations
    ConfigurationMetadataPaginatedCollection,
    configurations,
    ConfigurationMetadata
);
