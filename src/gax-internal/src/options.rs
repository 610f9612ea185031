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

pub use gax::credentials::Credentials;

/// Client configuration, as used by the transport layer.
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

pub(crate) const ENDPOINT_VAR: &str = "SECRETS_MANAGER_URL";

/// Returns true if the client should wrap its stub with tracing spans.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Resolves the service endpoint.
///
/// An endpoint set in the client builder wins over the `SECRETS_MANAGER_URL`
/// environment variable, which wins over the service default. A trailing
/// `/` is removed, the request paths start with one.
pub fn endpoint(config: &ClientConfig, default_endpoint: &str) -> String {
    let endpoint = config
        .endpoint
        .clone()
        .or_else(|| std::env::var(ENDPOINT_VAR).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| default_endpoint.to_string());
    endpoint.trim_end_matches('/').to_string()
}
