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

/// Implements a client for the Secrets Manager API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_secretsmanager_v2::client::SecretsManager;
/// let client = SecretsManager::builder()
///     .with_endpoint("https://my-instance.us-south.secrets-manager.appdomain.cloud")
///     .build()
///     .await?;
/// let mut pager = client.list_configurations().set_secret_types(["public_cert"]).by_page()?;
/// for config in pager.get_all().await? {
///     println!("{} {}", config.name, config.config_type);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// With IBM Cloud Secrets Manager, you can create, lease, and centrally manage
/// secrets that are used in IBM Cloud services or your custom-built
/// applications. This client covers the list operations, which return their
/// results in pages.
///
/// # Configuration
///
/// To configure `SecretsManager` use the `with_*` methods in the type returned
/// by [builder()][SecretsManager::builder]. Each service instance has its own
/// endpoint, set it with
/// [with_endpoint()][crate::builder::secrets_manager::ClientBuilder::with_endpoint]
/// or the `SECRETS_MANAGER_URL` environment variable. The default credentials
/// use the IAM token in the `SECRETS_MANAGER_BEARER_TOKEN` environment
/// variable, use
/// [with_credentials()][crate::builder::secrets_manager::ClientBuilder::with_credentials]
/// to override them.
///
/// # Pooling and Cloning
///
/// `SecretsManager` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `SecretsManager` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct SecretsManager {
    inner: std::sync::Arc<dyn super::stub::dynamic::SecretsManager>,
}

impl SecretsManager {
    /// Returns a builder for [SecretsManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_secretsmanager_v2::client::SecretsManager;
    /// let client = SecretsManager::builder()
    ///     .with_credentials(gax::credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::secrets_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::secrets_manager::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SecretsManager + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::SecretsManager>>
    {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SecretsManager> {
        super::transport::SecretsManager::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SecretsManager> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::SecretsManager::new)
    }

    /// Lists the secrets in the instance.
    ///
    /// Use [by_page()][super::builder::secrets_manager::ListSecrets::by_page]
    /// to enumerate all the secrets, or
    /// [send()][super::builder::secrets_manager::ListSecrets::send] to fetch
    /// a single page.
    pub fn list_secrets(&self) -> super::builder::secrets_manager::ListSecrets {
        super::builder::secrets_manager::ListSecrets::new(self.inner.clone())
    }

    /// Lists the locks on the current and previous versions of a secret.
    ///
    /// ```no_run
    /// # use ibm_cloud_secretsmanager_v2::client::SecretsManager;
    /// async fn sample(client: &SecretsManager, secret_id: &str) -> anyhow::Result<()> {
    ///     let mut pager = client.list_secret_locks().set_id(secret_id).by_page()?;
    ///     while pager.has_next() {
    ///         for lock in pager.get_next().await? {
    ///             println!("{} on version {}", lock.name, lock.secret_version_alias);
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_secret_locks(&self) -> super::builder::secrets_manager::ListSecretLocks {
        super::builder::secrets_manager::ListSecretLocks::new(self.inner.clone())
    }

    /// Lists the locks on one version of a secret.
    pub fn list_secret_version_locks(
        &self,
    ) -> super::builder::secrets_manager::ListSecretVersionLocks {
        super::builder::secrets_manager::ListSecretVersionLocks::new(self.inner.clone())
    }

    /// Lists the locks of all the secrets in the instance.
    ///
    /// The results are grouped by secret, each item lists the locks on the
    /// versions of one secret.
    pub fn list_secrets_locks(&self) -> super::builder::secrets_manager::ListSecretsLocks {
        super::builder::secrets_manager::ListSecretsLocks::new(self.inner.clone())
    }

    /// Lists the secret engine configurations in the instance.
    pub fn list_configurations(&self) -> super::builder::secrets_manager::ListConfigurations {
        super::builder::secrets_manager::ListConfigurations::new(self.inner.clone())
    }
}
