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

use crate::error::CredentialsError;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use std::future::Future;
use std::sync::Arc;

/// The environment variable holding the default bearer token.
pub const BEARER_TOKEN_VAR: &str = "SECRETS_MANAGER_BEARER_TOKEN";

/// The result type for credentials providers.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, the client libraries do not acquire or refresh IAM tokens.
/// Applications obtain tokens using the IBM Cloud IAM service, and either
/// provide a fixed token via [bearer_token], or implement
/// [CredentialsProvider] to refresh the token as needed.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials may be shared across threads (`Send + Sync`), and the
    // clients holding them derive `Clone`.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to include in each request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Creates the authentication headers for requests.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::credentials::{Credentials, CredentialsProvider, Result};
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct MyTokenSource;
/// impl CredentialsProvider for MyTokenSource {
///     async fn headers(&self) -> Result<HeaderMap> {
///         // ... details omitted, refresh the token as needed ...
///         Ok(HeaderMap::new())
///     }
/// }
/// let credentials = Credentials::from(MyTokenSource);
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// The underlying implementation refreshes the token as needed.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Creates credentials using a fixed IAM bearer token.
///
/// The token is sent in the `Authorization` header, the header value is
/// marked as sensitive.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::credentials::bearer_token;
/// let credentials = bearer_token("my-iam-token");
/// ```
pub fn bearer_token<T: Into<String>>(token: T) -> Credentials {
    Credentials::from(BearerToken(token.into()))
}

/// Creates credentials that do not add any headers.
///
/// Useful with emulators and in tests.
pub fn anonymous() -> Credentials {
    Credentials::from(Anonymous)
}

/// Creates the default credentials.
///
/// The default credentials use the bearer token in the
/// `SECRETS_MANAGER_BEARER_TOKEN` environment variable.
pub fn from_env() -> Result<Credentials> {
    match std::env::var(BEARER_TOKEN_VAR) {
        Ok(token) if !token.is_empty() => Ok(bearer_token(token)),
        _ => Err(CredentialsError::from_msg(
            false,
            format!("the {BEARER_TOKEN_VAR} environment variable is not set"),
        )),
    }
}

struct BearerToken(String);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[censored]").finish()
    }
}

impl CredentialsProvider for BearerToken {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|e| CredentialsError::new(false, e))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[derive(Debug)]
struct Anonymous;

impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}
