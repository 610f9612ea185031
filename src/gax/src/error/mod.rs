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

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;

/// The error model returned by IBM Cloud services.
///
/// The client libraries distinguish between errors detected while trying to
/// send a request (e.g. cannot open a connection), errors detected while
/// processing a response (e.g. the response is missing required fields), and
/// errors returned by the service itself.
///
/// The types in this module represent detailed information returned by the
/// IBM Cloud services.
///
/// # Examples
///
/// ```
/// use ibm_cloud_gax::error::Error;
/// use ibm_cloud_gax::error::api::ApiErrorStatus;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         let status : ApiErrorStatus = status.clone();
///         println!("{status:?}")
///     }
/// }
/// ```
pub mod api;
