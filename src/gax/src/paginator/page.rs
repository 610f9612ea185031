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

use super::{Cursor, PaginationError};
use crate::Result;
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

const NEXT: &str = "next";
const HREF: &str = "href";

/// The items returned by one list request, and the cursor for the next page.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// The items, in the order returned by the service.
    pub items: Vec<T>,

    /// The cursor for the next page, `None` on the last page.
    pub next: Option<Cursor>,
}

impl<T> Page<T>
where
    T: DeserializeOwned,
{
    /// Extracts a page from the decoded body of a list response.
    ///
    /// The items are in the `items_field` array. The optional `next` field
    /// holds the link to the next page.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::paginator::Page;
    /// let body = serde_json::json!({
    ///     "total_count": 3,
    ///     "locks": [{"name": "lock-1"}, {"name": "lock-2"}],
    ///     "next": {"href": "https://example.com/api/v2/secrets/123/locks?offset=2"},
    /// });
    /// let page = Page::<serde_json::Value>::from_response(body, "locks")?;
    /// assert_eq!(page.items.len(), 2);
    /// assert_eq!(page.next.as_ref().map(|c| c.as_str()), Some("2"));
    /// # ibm_cloud_gax::Result::<()>::Ok(())
    /// ```
    ///
    /// # Errors
    /// * [protocol violation][Error::is_protocol_violation] if the body has no
    ///   `items_field` array, or the `next` field has no valid link.
    /// * [deserialization][Error::is_deserialization] if an item cannot be
    ///   decoded into `T`.
    pub fn from_response(body: Value, items_field: &str) -> Result<Self> {
        let Value::Object(mut body) = body else {
            return Err(Error::protocol_violation(PaginationError::NotAnObject));
        };
        let items = match body.remove(items_field) {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => {
                return Err(Error::protocol_violation(PaginationError::MissingItems(
                    items_field.to_string(),
                )));
            }
            Some(_) => {
                return Err(Error::protocol_violation(PaginationError::ItemsNotArray(
                    items_field.to_string(),
                )));
            }
        };
        let next = match body.remove(NEXT) {
            None | Some(Value::Null) => None,
            Some(link) => Some(next_cursor(&link)?),
        };
        let items = items
            .into_iter()
            .map(serde_json::from_value::<T>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::deser)?;
        Ok(Self { items, next })
    }
}

fn next_cursor(link: &Value) -> Result<Cursor> {
    match link.get(HREF).and_then(Value::as_str) {
        Some(href) => Cursor::from_next_href(href),
        None => Err(Error::protocol_violation(PaginationError::InvalidNextLink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::error::Error as _;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
        }
    }

    fn pagination_error(err: &Error) -> Option<&PaginationError> {
        err.source()
            .and_then(|e| e.downcast_ref::<PaginationError>())
    }

    #[test]
    fn with_next() -> anyhow::Result<()> {
        let body = json!({
            "next": {"href": ".../x?offset=1"},
            "total_count": 2,
            "limit": 1,
            "items": [{"name": "A"}],
        });
        let page = Page::<Item>::from_response(body, "items")?;
        assert_eq!(
            page,
            Page {
                items: vec![item("A")],
                next: Some(Cursor::new("1"))
            }
        );
        Ok(())
    }

    #[test]
    fn last_page() -> anyhow::Result<()> {
        let body = json!({"total_count": 2, "limit": 1, "items": [{"name": "B"}]});
        let page = Page::<Item>::from_response(body, "items")?;
        assert_eq!(page.items, vec![item("B")]);
        assert!(page.next.is_none(), "{page:?}");
        Ok(())
    }

    #[test]
    fn null_next() -> anyhow::Result<()> {
        let body = json!({"items": [], "next": null});
        let page = Page::<Item>::from_response(body, "items")?;
        assert!(page.items.is_empty(), "{page:?}");
        assert!(page.next.is_none(), "{page:?}");
        Ok(())
    }

    #[test]
    fn empty_page_with_next() -> anyhow::Result<()> {
        let body = json!({"items": [], "next": {"href": "https://example.com/x?offset=10"}});
        let page = Page::<Item>::from_response(body, "items")?;
        assert!(page.items.is_empty(), "{page:?}");
        assert_eq!(page.next, Some(Cursor::new("10")));
        Ok(())
    }

    #[test]
    fn preserves_order() -> anyhow::Result<()> {
        let body = json!({"secrets": [{"name": "c"}, {"name": "a"}, {"name": "b"}]});
        let page = Page::<Item>::from_response(body, "secrets")?;
        assert_eq!(page.items, vec![item("c"), item("a"), item("b")]);
        Ok(())
    }

    #[test]
    fn missing_items() {
        let body = json!({"total_count": 0, "other": []});
        let err = Page::<Item>::from_response(body, "secrets_locks").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(
            matches!(pagination_error(&err), Some(PaginationError::MissingItems(f)) if f == "secrets_locks"),
            "{err:?}"
        );
    }

    #[test]
    fn null_items() {
        let body = json!({"locks": null});
        let err = Page::<Item>::from_response(body, "locks").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
    }

    #[test]
    fn items_not_array() {
        let body = json!({"configurations": {"name": "a"}});
        let err = Page::<Item>::from_response(body, "configurations").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(
            matches!(pagination_error(&err), Some(PaginationError::ItemsNotArray(_))),
            "{err:?}"
        );
    }

    #[test]
    fn not_an_object() {
        let err = Page::<Item>::from_response(json!([1, 2, 3]), "items").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(
            matches!(pagination_error(&err), Some(PaginationError::NotAnObject)),
            "{err:?}"
        );
    }

    #[test]
    fn next_without_href() {
        let body = json!({"items": [], "next": {"link": "https://example.com/x?offset=10"}});
        let err = Page::<Item>::from_response(body, "items").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(
            matches!(pagination_error(&err), Some(PaginationError::InvalidNextLink)),
            "{err:?}"
        );
    }

    #[test]
    fn next_without_offset() {
        let body = json!({"items": [], "next": {"href": "https://example.com/x?limit=10"}});
        let err = Page::<Item>::from_response(body, "items").unwrap_err();
        assert!(err.is_protocol_violation(), "{err:?}");
        assert!(
            matches!(pagination_error(&err), Some(PaginationError::MissingCursor(_))),
            "{err:?}"
        );
    }

    #[test]
    fn bad_item() {
        let body = json!({"items": [{"name": "a"}, {"name": 42}]});
        let err = Page::<Item>::from_response(body, "items").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(!err.is_protocol_violation(), "{err:?}");
    }
}
