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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error payload returned by IBM Cloud services.
///
/// IBM Cloud services report errors using a common JSON envelope:
///
/// ```json
/// {
///   "status_code": 404,
///   "trace": "a1b2c3d4-e5f6",
///   "errors": [{
///     "code": "not_found",
///     "message": "Secret not found",
///     "more_info": "https://cloud.ibm.com/apidocs/secrets-manager"
///   }]
/// }
/// ```
///
/// The `trace` field is useful when contacting IBM Cloud support.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiErrorStatus {
    /// The HTTP status code, as reported in the payload.
    pub status_code: u16,

    /// An identifier for the request, used by the service support teams.
    pub trace: String,

    /// The detailed errors. Services always include at least one.
    pub errors: Vec<ApiErrorItem>,
}

impl ApiErrorStatus {
    /// Sets the value for [status_code][ApiErrorStatus::status_code].
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.status_code = v.into();
        self
    }

    /// Sets the value for [trace][ApiErrorStatus::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = v.into();
        self
    }

    /// Sets the value for [errors][ApiErrorStatus::errors].
    pub fn set_errors<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<ApiErrorItem>,
    {
        self.errors = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// The machine-readable identifier of the first error, if any.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::error::api::{ApiErrorItem, ApiErrorStatus};
    /// let status = ApiErrorStatus::default()
    ///     .set_errors([ApiErrorItem::default().set_code("not_found")]);
    /// assert_eq!(status.code(), Some("not_found"));
    /// ```
    pub fn code(&self) -> Option<&str> {
        self.errors.first().map(|e| e.code.as_str())
    }

    /// The human-readable message of the first error, if any.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

/// One of the errors included in an [ApiErrorStatus].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiErrorItem {
    /// A machine-readable identifier, e.g. `not_found` or `bad_request`.
    pub code: String,

    /// A developer-facing error message, in English.
    pub message: String,

    /// A link to the documentation describing this error.
    pub more_info: String,
}

impl ApiErrorItem {
    /// Sets the value for [code][ApiErrorItem::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][ApiErrorItem::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [more_info][ApiErrorItem::more_info].
    pub fn set_more_info<T: Into<String>>(mut self, v: T) -> Self {
        self.more_info = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for ApiErrorStatus {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let status = serde_json::from_slice::<ApiErrorStatus>(value).map_err(Error::deser)?;
        // Every field has a default, only a non-empty `errors` list shows the
        // payload is really an IBM Cloud error.
        if status.errors.is_empty() {
            return Err(Error::deser("the payload does not contain any errors"));
        }
        Ok(status)
    }
}
