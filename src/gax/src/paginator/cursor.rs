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

use super::PaginationError;
use crate::Result;
use crate::error::Error;

const OFFSET: &str = "offset";
const RELATIVE_BASE: &str = "http://unused.invalid/";

/// An opaque continuation token.
///
/// The service embeds the token in the link to the next page, as the value
/// of the `offset` query parameter. The client libraries never interpret the
/// value, they only send it back in the request for the next page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Creates a cursor from a token, used in tests and mocks.
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    /// Extracts the cursor from the `next.href` link in a list response.
    ///
    /// The link may be an absolute URL or a relative reference. The cursor is
    /// the value of the first `offset` query parameter.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::paginator::Cursor;
    /// let cursor = Cursor::from_next_href("https://example.com/api/v2/secrets?limit=10&offset=20")?;
    /// assert_eq!(cursor.as_str(), "20");
    /// # ibm_cloud_gax::Result::<()>::Ok(())
    /// ```
    ///
    /// Returns an error, classified as a
    /// [protocol violation][Error::is_protocol_violation], if the link cannot
    /// be parsed or has no `offset` parameter.
    pub fn from_next_href(href: &str) -> Result<Self> {
        let url = match url::Url::parse(href) {
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                url::Url::parse(RELATIVE_BASE).and_then(|base| base.join(href))
            }
            parsed => parsed,
        };
        let url = match url {
            Ok(url) => url,
            Err(source) => {
                return Err(Error::protocol_violation(
                    PaginationError::InvalidNextHref {
                        href: href.to_string(),
                        source,
                    },
                ));
            }
        };
        url.query_pairs()
            .find(|(name, _)| name == OFFSET)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(Self)
            .ok_or_else(|| {
                Error::protocol_violation(PaginationError::MissingCursor(href.to_string()))
            })
    }

    /// The token, as sent to the service.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Cursor> for String {
    fn from(value: Cursor) -> Self {
        value.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("https://example.com/api/v2/secrets?offset=5", "5")]
    #[test_case("https://example.com/api/v2/secrets?limit=1&offset=5", "5")]
    #[test_case("https://example.com/api/v2/secrets?offset=5&limit=1#frag", "5")]
    #[test_case("https://example.com/api/v2/secrets?offset=5&offset=7", "5")]
    #[test_case("https://example.com/x?offset=abc%20def", "abc def")]
    #[test_case("https://example.com/x?offset=opaque-token%3D%3D", "opaque-token==")]
    #[test_case("/api/v2/secrets?limit=1&offset=1", "1")]
    #[test_case(".../x?offset=1", "1")]
    #[test_case("?offset=42#ignored", "42")]
    #[test_case("secrets?offset=3&offset=4", "3")]
    fn from_next_href(href: &str, want: &str) -> anyhow::Result<()> {
        let got = Cursor::from_next_href(href)?;
        assert_eq!(got.as_str(), want);
        assert_eq!(got.to_string(), want);
        Ok(())
    }

    #[test_case("https://example.com/api/v2/secrets")]
    #[test_case("https://example.com/api/v2/secrets?limit=10")]
    #[test_case("https://example.com/api/v2/secrets?offset=")]
    #[test_case("https://example.com/api/v2/secrets#offset=5")]
    #[test_case("/api/v2/secrets?offsets=5")]
    #[test_case("")]
    fn missing_cursor(href: &str) {
        let err = Cursor::from_next_href(href).unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<PaginationError>());
        assert!(
            matches!(source, Some(PaginationError::MissingCursor(h)) if h == href),
            "{err:?}"
        );
    }

    #[test]
    fn invalid_href() {
        let href = "https://[::1/x?offset=5";
        let err = Cursor::from_next_href(href).unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<PaginationError>());
        assert!(
            matches!(source, Some(PaginationError::InvalidNextHref { .. })),
            "{err:?}"
        );
    }

    #[test]
    fn into_string() {
        let cursor = Cursor::new("abc");
        assert_eq!(String::from(cursor.clone()), "abc");
        assert_eq!(cursor.as_str(), "abc");
    }
}
