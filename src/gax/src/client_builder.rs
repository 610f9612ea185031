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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the credentials used by
//! the client library. All the client libraries use the same builder type,
//! this module contains that type and related types.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! use examples::Client; // Placeholder for the client being configured.
//! let client = Client::builder()
//!     .with_endpoint("https://private.us-south.secrets-manager.appdomain.cloud")
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_gax::client_builder::examples;
/// use examples::Client; // Placeholder for the client being configured.
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using the IAM bearer token documentation");
///         return;
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return;
///     }
/// };
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// use examples::Client; // Placeholder for the client being configured.
/// let builder = Client::builder();
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// use examples::Client; // Placeholder for the client being configured.
/// # tokio_test::block_on(async {
/// let client = Client::builder().build().await?;
/// # ibm_cloud_gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several methods to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// use examples::Client; // Placeholder for the client being configured.
/// # tokio_test::block_on(async {
/// let client = Client::builder()
///     .with_endpoint("http://private.endpoint.com")
///     .with_tracing()
///     .build()
///     .await?;
/// # ibm_cloud_gax::client_builder::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The default endpoint is the public endpoint for the service in the
    /// `us-south` region. Applications set this to use a specific instance
    /// of the service, or a private endpoint.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// use examples::Client; // Placeholder for the client being configured.
    /// # tokio_test::block_on(async {
    /// let client = Client::builder()
    ///     .with_endpoint("https://my-instance.us-south.secrets-manager.appdomain.cloud")
    ///     .build()
    ///     .await?;
    /// # ibm_cloud_gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most IBM Cloud services require authentication, though some services
    /// allow for anonymous access, and some services provide emulators where
    /// no authentication is required. More information about valid
    /// credentials types can be found in the [credentials][crate::credentials]
    /// module.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// use examples::Client; // Placeholder for the client being configured.
    /// use examples::credentials;
    /// # tokio_test::block_on(async {
    /// let client = Client::builder()
    ///     .with_credentials(credentials::bearer_token("my-token"))
    ///     .build()
    ///     .await?;
    /// # ibm_cloud_gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common type to configure clients. Applications use this type through
    /// the [ClientBuilder] methods.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require a client type, which would introduce a circular
    //! dependency on the generated client libraries.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// A credentials type for use in examples.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub token: Option<String>,
    }

    pub mod credentials {
        /// Create example credentials using a fixed token.
        pub fn bearer_token<T: Into<String>>(token: T) -> super::Credentials {
            super::Credentials {
                token: Some(token.into()),
            }
        }
    }

}
