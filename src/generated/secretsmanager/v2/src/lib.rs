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

//! IBM Cloud Client Libraries for Rust - Secrets Manager API
//!
//! This crate contains the client for the list operations of the
//! [IBM Cloud Secrets Manager] v2 API. The service returns the results of
//! these operations in pages, the [pager] types iterate over all the pages
//! without any cursor management in the application.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use ibm_cloud_secretsmanager_v2::client::SecretsManager;
//! let client = SecretsManager::builder()
//!     .with_endpoint("https://my-instance.us-south.secrets-manager.appdomain.cloud")
//!     .build()
//!     .await?;
//! let mut pager = client
//!     .list_secrets()
//!     .set_limit(100)
//!     .set_groups(["default"])
//!     .by_page()?;
//! while pager.has_next() {
//!     for secret in pager.get_next().await? {
//!         println!("{} {}", secret.id, secret.name);
//!     }
//! }
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! [IBM Cloud Secrets Manager]: https://cloud.ibm.com/apidocs/secrets-manager/secrets-manager-v2

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request and client builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Typed pagers for the list operations.
pub mod pager;

/// Traits to mock the clients in this library.
pub mod stub;

pub(crate) mod tracing;

pub(crate) mod transport;

/// The default host used by the service.
///
/// Secrets Manager endpoints are specific to each service instance,
/// applications are expected to override this value.
const DEFAULT_HOST: &str =
    "https://provide-here-your-smgr-instanceuuid.us-south.secrets-manager.appdomain.cloud";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref USER_AGENT_HEADER: String = {
            let ac = gaxi::api_header::SdkHeader {
                name: NAME,
                version: VERSION,
            };
            ac.header_value()
        };
    }
}
