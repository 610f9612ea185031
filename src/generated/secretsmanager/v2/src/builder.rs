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

pub mod secrets_manager {
    use crate::Result;
    use gax::error::Error;
    use gax::response::Response;

    /// A builder for [SecretsManager][crate::client::SecretsManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_secretsmanager_v2::*;
    /// # use builder::secrets_manager::ClientBuilder;
    /// # use client::SecretsManager;
    /// let builder : ClientBuilder = SecretsManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://my-instance.us-south.secrets-manager.appdomain.cloud")
    ///     .with_credentials(gax::credentials::bearer_token("my-iam-token"))
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::SecretsManager;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SecretsManager;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::SecretsManager] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T> {
        serde_json::from_value(body).map_err(Error::deser)
    }

    /// The request builder for [SecretsManager::list_secrets][crate::client::SecretsManager::list_secrets] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_secretsmanager_v2::builder;
    /// use builder::secrets_manager::ListSecrets;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut pager = builder.by_page()?;
    /// let secrets = pager.get_all().await?;
    /// println!("found {} secrets", secrets.len());
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListSecrets {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListSecrets(RequestBuilder<crate::model::ListSecretsRequest>);

    impl ListSecrets {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSecretsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning one page of results.
        pub async fn send(self) -> Result<crate::model::SecretMetadataPaginatedCollection> {
            let body = (*self.0.stub)
                .list_secrets(self.0.request, self.0.options)
                .await
                .map(Response::into_body)?;
            decode(body)
        }

        /// Returns a pager over all the secrets matching the request.
        ///
        /// Returns an [invalid argument][Error::is_invalid_argument] error if
        /// the request has an offset.
        pub fn by_page(self) -> Result<crate::pager::SecretsPager> {
            let stub = self.0.stub;
            let options = self.0.options;
            let list = move |r: crate::model::ListSecretsRequest| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_secrets(r, options)
                        .await
                        .map(Response::into_body)
                }
            };
            crate::pager::SecretsPager::new(list, self.0.request, crate::pager::SECRETS_FIELD)
        }

        /// Sets the value of [offset][crate::model::ListSecretsRequest::offset].
        pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSecretsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListSecretsRequest::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets the value of [search][crate::model::ListSecretsRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }

        /// Sets the value of [groups][crate::model::ListSecretsRequest::groups].
        pub fn set_groups<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request = self.0.request.set_groups(v);
            self
        }

        /// Sets the value of [secret_types][crate::model::ListSecretsRequest::secret_types].
        pub fn set_secret_types<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request = self.0.request.set_secret_types(v);
            self
        }

        /// Sets the value of [match_all_labels][crate::model::ListSecretsRequest::match_all_labels].
        pub fn set_match_all_labels<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request = self.0.request.set_match_all_labels(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSecrets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SecretsManager::list_secret_locks][crate::client::SecretsManager::list_secret_locks] calls.
    #[derive(Clone, Debug)]
    pub struct ListSecretLocks(RequestBuilder<crate::model::ListSecretLocksRequest>);

    impl ListSecretLocks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSecretLocksRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning one page of results.
        pub async fn send(self) -> Result<crate::model::SecretLocksPaginatedCollection> {
            let body = (*self.0.stub)
                .list_secret_locks(self.0.request, self.0.options)
                .await
                .map(Response::into_body)?;
            decode(body)
        }

        /// Returns a pager over all the locks on the secret.
        pub fn by_page(self) -> Result<crate::pager::SecretLocksPager> {
            let stub = self.0.stub;
            let options = self.0.options;
            let list = move |r: crate::model::ListSecretLocksRequest| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_secret_locks(r, options)
                        .await
                        .map(Response::into_body)
                }
            };
            crate::pager::SecretLocksPager::new(list, self.0.request, crate::pager::LOCKS_FIELD)
        }

        /// Sets the value of [id][crate::model::ListSecretLocksRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [offset][crate::model::ListSecretLocksRequest::offset].
        pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSecretLocksRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListSecretLocksRequest::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets the value of [search][crate::model::ListSecretLocksRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSecretLocks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SecretsManager::list_secret_version_locks][crate::client::SecretsManager::list_secret_version_locks] calls.
    #[derive(Clone, Debug)]
    pub struct ListSecretVersionLocks(RequestBuilder<crate::model::ListSecretVersionLocksRequest>);

    impl ListSecretVersionLocks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSecretVersionLocksRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning one page of results.
        pub async fn send(self) -> Result<crate::model::SecretVersionLocksPaginatedCollection> {
            let body = (*self.0.stub)
                .list_secret_version_locks(self.0.request, self.0.options)
                .await
                .map(Response::into_body)?;
            decode(body)
        }

        /// Returns a pager over all the locks on the secret version.
        pub fn by_page(self) -> Result<crate::pager::SecretVersionLocksPager> {
            let stub = self.0.stub;
            let options = self.0.options;
            let list = move |r: crate::model::ListSecretVersionLocksRequest| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_secret_version_locks(r, options)
                        .await
                        .map(Response::into_body)
                }
            };
            crate::pager::SecretVersionLocksPager::new(
                list,
                self.0.request,
                crate::pager::LOCKS_FIELD,
            )
        }

        /// Sets the value of [secret_id][crate::model::ListSecretVersionLocksRequest::secret_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.secret_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::ListSecretVersionLocksRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }

        /// Sets the value of [offset][crate::model::ListSecretVersionLocksRequest::offset].
        pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSecretVersionLocksRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListSecretVersionLocksRequest::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets the value of [search][crate::model::ListSecretVersionLocksRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSecretVersionLocks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SecretsManager::list_secrets_locks][crate::client::SecretsManager::list_secrets_locks] calls.
    #[derive(Clone, Debug)]
    pub struct ListSecretsLocks(RequestBuilder<crate::model::ListSecretsLocksRequest>);

    impl ListSecretsLocks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSecretsLocksRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning one page of results.
        pub async fn send(self) -> Result<crate::model::SecretsLocksPaginatedCollection> {
            let body = (*self.0.stub)
                .list_secrets_locks(self.0.request, self.0.options)
                .await
                .map(Response::into_body)?;
            decode(body)
        }

        /// Returns a pager over the locks of all the secrets, grouped by
        /// secret.
        pub fn by_page(self) -> Result<crate::pager::SecretsLocksPager> {
            let stub = self.0.stub;
            let options = self.0.options;
            let list = move |r: crate::model::ListSecretsLocksRequest| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_secrets_locks(r, options)
                        .await
                        .map(Response::into_body)
                }
            };
            crate::pager::SecretsLocksPager::new(
                list,
                self.0.request,
                crate::pager::SECRETS_LOCKS_FIELD,
            )
        }

        /// Sets the value of [offset][crate::model::ListSecretsLocksRequest::offset].
        pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSecretsLocksRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [search][crate::model::ListSecretsLocksRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }

        /// Sets the value of [groups][crate::model::ListSecretsLocksRequest::groups].
        pub fn set_groups<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request = self.0.request.set_groups(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSecretsLocks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [SecretsManager::list_configurations][crate::client::SecretsManager::list_configurations] calls.
    #[derive(Clone, Debug)]
    pub struct ListConfigurations(RequestBuilder<crate::model::ListConfigurationsRequest>);

    impl ListConfigurations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::SecretsManager>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConfigurationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request, returning one page of results.
        pub async fn send(self) -> Result<crate::model::ConfigurationMetadataPaginatedCollection> {
            let body = (*self.0.stub)
                .list_configurations(self.0.request, self.0.options)
                .await
                .map(Response::into_body)?;
            decode(body)
        }

        /// Returns a pager over all the configurations matching the request.
        pub fn by_page(self) -> Result<crate::pager::ConfigurationsPager> {
            let stub = self.0.stub;
            let options = self.0.options;
            let list = move |r: crate::model::ListConfigurationsRequest| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    stub.list_configurations(r, options)
                        .await
                        .map(Response::into_body)
                }
            };
            crate::pager::ConfigurationsPager::new(
                list,
                self.0.request,
                crate::pager::CONFIGURATIONS_FIELD,
            )
        }

        /// Sets the value of [offset][crate::model::ListConfigurationsRequest::offset].
        pub fn set_offset<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.offset = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListConfigurationsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListConfigurationsRequest::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sort = Some(v.into());
            self
        }

        /// Sets the value of [search][crate::model::ListConfigurationsRequest::search].
        pub fn set_search<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.search = Some(v.into());
            self
        }

        /// Sets the value of [secret_types][crate::model::ListConfigurationsRequest::secret_types].
        pub fn set_secret_types<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.0.request = self.0.request.set_secret_types(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConfigurations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
