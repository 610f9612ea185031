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

//! IBM Cloud API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud Client Libraries for Rust.
//!
//! Most applications only need the [error] types, to examine failed requests,
//! and the [paginator] types, to iterate over list results.
//!
//! <div class="warning">
//! All the types, traits, and functions marked as "not part of the public
//! API" are <b>not</b> intended for general use. They are used to implement
//! the service clients, and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Cursor-following iterators over paginated list operations.
///
/// The IBM Cloud list operations return results in pages. Each page may
/// include a link to the next page, with the continuation cursor embedded as
/// a query parameter. The types in this module hide the cursor management
/// from the application.
pub mod paginator;

/// Authentication credentials used by the client libraries.
pub mod credentials;

/// Per-request configuration.
pub mod options;

/// Responses, including their metadata, returned by the service stubs.
pub mod response;

/// Configure and build clients.
pub mod client_builder;
