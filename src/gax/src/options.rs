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

//! Request options.
//!
//! The client libraries accept per-request options to override the default
//! behavior. Applications rarely need to set these. They are mostly used to
//! set a shorter timeout on a single request, or to add a custom header.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::options::RequestOptions;
//! # use std::time::Duration;
//! let mut options = RequestOptions::default();
//! options.set_attempt_timeout(Duration::from_secs(30));
//! options.set_user_agent("my-application/1.0");
//! ```

use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Use the [RequestOptionsBuilder] methods on the request builders to set
/// these options.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Adds a header to the request.
    ///
    /// Replaces any previous value for the same header. These headers are
    /// sent before the authentication headers, credentials always win.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// The additional headers for the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The IBM Cloud client libraries for Rust provide a builder for each request.
/// These builders can be used to set the request parameters, e.g., the
/// filters for a list request, and also to set the options for the request.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Adds a header to the request.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().set_header(name, value);
        self
    }
}
