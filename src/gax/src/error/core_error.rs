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

use super::CredentialsError;
use super::api::ApiErrorStatus;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, the service may return a response that does not
/// match the documented API, or the application may use an iterator in a way
/// that is not supported.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if matches!(e.status(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.status().unwrap());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use ibm_cloud_gax::error::api::{ApiErrorItem, ApiErrorStatus};
///     # Err(Error::service(ApiErrorStatus::default().set_errors([ApiErrorItem::default().set_code("not_found")])))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by IBM Cloud services.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// use ibm_cloud_gax::error::api::{ApiErrorItem, ApiErrorStatus};
    /// let status = ApiErrorStatus::default()
    ///     .set_status_code(404_u16)
    ///     .set_errors([ApiErrorItem::default().set_code("not_found").set_message("NOT FOUND")]);
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: ApiErrorStatus) -> Self {
        let details = ServiceDetails {
            status,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing an invalid argument.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::invalid_argument("the request already has a cursor");
    /// assert!(error.is_invalid_argument());
    /// assert!(error.source().is_some());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// The application provided an argument that cannot be used.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent to the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is setting the `offset` field in a list request
    /// and then asking the client library to iterate over all the pages. The
    /// client library manages the `offset` field while iterating, and cannot
    /// combine it with a value set by the application. Either clear the
    /// `offset` field, or fetch each page with `send()`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Creates an error representing an operation invoked in the wrong state.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::illegal_state("no more pages");
    /// assert!(error.is_illegal_state());
    /// assert!(error.source().is_some());
    /// ```
    pub fn illegal_state<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::IllegalState,
            source: Some(source.into()),
        }
    }

    /// The operation is not valid in the current state of the object.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is sent to the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is requesting the next page from a pager that
    /// has already returned all the pages. Check `has_next()` before calling
    /// `get_next()`, or use `get_all()`.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self.kind, ErrorKind::IllegalState)
    }

    /// Creates an error representing a response that breaks the API contract.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::protocol_violation("missing `secrets` field");
    /// assert!(error.is_protocol_violation());
    /// assert!(error.source().is_some());
    /// ```
    pub fn protocol_violation<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::ProtocolViolation,
            source: Some(source.into()),
        }
    }

    /// The service returned a successful response that does not match the
    /// documented API.
    ///
    /// For example, a list response without the field holding the items, or
    /// a link to the next page without a continuation cursor.
    ///
    /// # Troubleshooting
    ///
    /// This error is not transient: repeating the request is unlikely to
    /// produce a different response. Most often this indicates a proxy
    /// between the application and the service is rewriting responses, or
    /// the endpoint is not a Secrets Manager instance. Verify the endpoint
    /// configured in the client. If the problem persists, contact IBM Cloud
    /// support and include the `Debug` format of this error.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self.kind, ErrorKind::ProtocolViolation)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// client library and (rarely) bugs in the service. The client libraries
    /// accept unknown fields, but a field with an unexpected type cannot be
    /// decoded. Upgrading to the latest version of the client library may be
    /// the only possible fix.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a header value, such as the user agent
    /// prefix, with characters that are not valid in HTTP headers.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [ApiErrorStatus] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// use ibm_cloud_gax::error::api::{ApiErrorItem, ApiErrorStatus};
    /// let error = Error::service(ApiErrorStatus::default()
    ///     .set_errors([ApiErrorItem::default().set_code("not_found")]));
    /// if let Some(status) = error.status() {
    ///     if status.code() == Some("not_found") {
    ///         println!("cannot find the thing, more details in {:?}", status.errors);
    ///     }
    /// }
    /// ```
    ///
    /// IBM Cloud services return a detailed payload, including a
    /// machine-readable code for each error, a human-readable message, and a
    /// link to more information.
    pub fn status(&self) -> Option<&ApiErrorStatus> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, your proxy or a load balancer may generate errors without the
    /// detailed payload. In such cases the client library returns the status
    /// code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only present when the service (or a proxy) returned an error without
    /// the standard IBM Cloud error payload.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: ApiErrorStatus,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        let kind = ErrorKind::Service(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot format the request path, typically because a required path
    /// parameter is empty.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required field
    /// in the request builder, such as the secret id, was not initialized.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authentication environment for
    /// your application. Consult the documentation for the credentials type
    /// you configured in the client.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// any HTTP error that did not include a status code or other headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, and broken connections.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. This type of error is
    /// rare, but includes crashes and restarts on proxies and load balancers.
    /// Pagers leave their state unchanged on this error, applications can
    /// safely request the same page again.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response,
    /// and broken connections.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidArgument, Some(e)) => write!(f, "invalid argument: {e}"),
            (ErrorKind::IllegalState, Some(e)) => {
                write!(f, "the operation is not valid in the current state: {e}")
            }
            (ErrorKind::ProtocolViolation, Some(e)) => {
                write!(f, "the service response does not match the API: {e}")
            }
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code().unwrap_or("unknown"),
                    d.status.message().unwrap_or_default()
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidArgument,
    IllegalState,
    ProtocolViolation,
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: ApiErrorStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::api::ApiErrorItem;
    use std::error::Error as StdError;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("test-only-source")]
    struct TestSource;

    fn not_found() -> ApiErrorStatus {
        ApiErrorStatus::default()
            .set_status_code(404_u16)
            .set_trace("test-trace")
            .set_errors([ApiErrorItem::default()
                .set_code("not_found")
                .set_message("NOT FOUND")])
    }

    fn assert_no_http_details(error: &Error) {
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    fn assert_source(error: &Error) {
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert_eq!(got, Some(&TestSource), "{error:?}");
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }

    #[test]
    fn service() {
        let status = not_found();
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("not_found"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_without_errors() {
        let error = Error::service(ApiErrorStatus::default());
        assert!(error.to_string().contains("unknown"), "{error}");
    }

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument(TestSource);
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_illegal_state(), "{error:?}");
        assert!(!error.is_protocol_violation(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }

    #[test]
    fn illegal_state() {
        let error = Error::illegal_state(TestSource);
        assert!(error.is_illegal_state(), "{error:?}");
        assert!(!error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_protocol_violation(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }

    #[test]
    fn protocol_violation() {
        let error = Error::protocol_violation(TestSource);
        assert!(error.is_protocol_violation(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(TestSource);
        assert!(error.is_timeout(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(TestSource);
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_protocol_violation(), "{error:?}");
        assert_source(&error);
    }

    #[test]
    fn serialization() {
        let error = Error::ser(TestSource);
        assert!(error.is_serialization(), "{error:?}");
        assert_source(&error);
    }

    #[test]
    fn binding() {
        let error = Error::binding(TestSource);
        assert!(error.is_binding(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }

    #[test]
    fn service_with_http_metadata() {
        let status = not_found();
        let headers = {
            let mut headers = http::HeaderMap::new();
            headers.insert(
                "content-type",
                http::HeaderValue::from_static("application/json"),
            );
            headers
        };
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
    }

    #[test]
    fn http() {
        let headers = {
            let mut headers = http::HeaderMap::new();
            headers.insert(
                "content-type",
                http::HeaderValue::from_static("text/plain"),
            );
            headers
        };
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, http::HeaderMap::new(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(TestSource);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert_source(&error);
        assert_no_http_details(&error);
    }
}
