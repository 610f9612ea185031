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

//! The pagers for each list operation.
//!
//! Each pager enumerates all the results of a list operation, fetching one
//! page per call to [get_next][gax::paginator::CursorPager::get_next]. The
//! filters in the request are sent with every page.

use crate::model::*;
use gax::paginator::{Cursor, CursorPager, PageRequest};

/// The response field with the items of [SecretsManager::list_secrets].
///
/// [SecretsManager::list_secrets]: crate::client::SecretsManager::list_secrets
pub const SECRETS_FIELD: &str = "secrets";

/// The response field with the items of the secret and version lock
/// operations.
pub const LOCKS_FIELD: &str = "locks";

/// The response field with the items of [SecretsManager::list_secrets_locks].
///
/// [SecretsManager::list_secrets_locks]: crate::client::SecretsManager::list_secrets_locks
pub const SECRETS_LOCKS_FIELD: &str = "secrets_locks";

/// The response field with the items of [SecretsManager::list_configurations].
///
/// [SecretsManager::list_configurations]: crate::client::SecretsManager::list_configurations
pub const CONFIGURATIONS_FIELD: &str = "configurations";

/// Enumerates the secrets in an instance.
pub type SecretsPager = CursorPager<SecretMetadata, ListSecretsRequest>;

/// Enumerates the locks on a secret.
pub type SecretLocksPager = CursorPager<SecretLock, ListSecretLocksRequest>;

/// Enumerates the locks on a secret version.
pub type SecretVersionLocksPager = CursorPager<SecretLock, ListSecretVersionLocksRequest>;

/// Enumerates the locks of all the secrets in an instance, grouped by secret.
pub type SecretsLocksPager = CursorPager<SecretLocks, ListSecretsLocksRequest>;

/// Enumerates the secret engine configurations in an instance.
pub type ConfigurationsPager = CursorPager<ConfigurationMetadata, ListConfigurationsRequest>;

macro_rules! offset_page_request {
    ($($request:ty),* $(,)?) => {
        $(
            impl PageRequest for $request {
                fn cursor(&self) -> Option<&str> {
                    self.offset.as_deref()
                }

                fn set_cursor(&mut self, cursor: Cursor) {
                    self.offset = Some(cursor.into());
                }
            }
        )*
    };
}

offset_page_request!(
    ListSecretsRequest,
    ListSecretLocksRequest,
    ListSecretVersionLocksRequest,
    ListSecretsLocksRequest,
    ListConfigurationsRequest,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn pagers_are_send() {
        static_assertions::assert_impl_all!(SecretsPager: Send, Sync);
        static_assertions::assert_impl_all!(SecretLocksPager: Send, Sync);
        static_assertions::assert_impl_all!(SecretVersionLocksPager: Send, Sync);
        static_assertions::assert_impl_all!(SecretsLocksPager: Send, Sync);
        static_assertions::assert_impl_all!(ConfigurationsPager: Send, Sync);
    }

    #[test]
    fn cursor() {
        let mut request = ListSecretsLocksRequest::new().set_search("app");
        assert_eq!(request.cursor(), None);
        request.set_cursor(Cursor::new("40"));
        assert_eq!(request.cursor(), Some("40"));
        assert_eq!(request.search.as_deref(), Some("app"));
    }

    #[tokio::test]
    async fn version_locks() -> anyhow::Result<()> {
        let list = |r: ListSecretVersionLocksRequest| async move {
            assert_eq!(r.secret_id, "s-1");
            assert_eq!(r.id, "current");
            let body = match r.offset.as_deref() {
                None => json!({
                    "locks": [{"name": "lock-a", "secret_version_alias": "current"}],
                    "next": {"href": "https://example.com/api/v2/secrets/s-1/versions/current/locks?offset=1&limit=1"},
                }),
                Some("1") => json!({
                    "locks": [{"name": "lock-b", "secret_version_alias": "current"}],
                }),
                Some(o) => panic!("unexpected offset {o}"),
            };
            gax::Result::<Value>::Ok(body)
        };
        let request = ListSecretVersionLocksRequest::new()
            .set_secret_id("s-1")
            .set_id("current")
            .set_limit(1);
        let mut pager = SecretVersionLocksPager::new(list, request, LOCKS_FIELD)?;
        let names = pager
            .get_all()
            .await?
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["lock-a", "lock-b"]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[test]
    fn rejects_offset() {
        let list = |_: ListConfigurationsRequest| async { gax::Result::<Value>::Ok(json!({})) };
        let request = ListConfigurationsRequest::new().set_offset("10");
        let err = ConfigurationsPager::new(list, request, CONFIGURATIONS_FIELD).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }
}
