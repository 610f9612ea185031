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

use super::{CursorPager, PageRequest};
use crate::Result;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::pin::Pin;

impl<T, R> CursorPager<T, R>
where
    T: DeserializeOwned + Send + 'static,
    R: PageRequest + 'static,
{
    /// Converts the pager into a [Stream] of pages.
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn into_page_stream(self) -> PageStream<T> {
        let stream = unfold(Some(self), |state| async move {
            let mut pager = state?;
            if !pager.has_next() {
                return None;
            }
            match pager.get_next().await {
                Ok(items) => Some((Ok(items), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        });
        PageStream {
            stream: Box::pin(stream),
        }
    }

    /// Converts the pager into a [Stream] of items.
    ///
    /// Pages are fetched as needed. The stream ends after the last item, or
    /// after the first error.
    pub fn into_stream(self) -> ItemStream<T> {
        let stream = unfold(
            Some((self, VecDeque::new())),
            |state| async move {
                let (mut pager, mut buffer) = state?;
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Some((Ok(item), Some((pager, buffer))));
                    }
                    if !pager.has_next() {
                        return None;
                    }
                    match pager.get_next().await {
                        Ok(items) => buffer.extend(items),
                        Err(e) => return Some((Err(e), None)),
                    }
                }
            },
        );
        ItemStream {
            stream: Box::pin(stream),
        }
    }
}

/// A stream of pages, see [CursorPager::into_page_stream].
#[pin_project]
pub struct PageStream<T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<Vec<T>>> + Send>>,
}

impl<T> PageStream<T> {
    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T> Stream for PageStream<T> {
    type Item = Result<Vec<T>>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items, see [CursorPager::into_stream].
#[pin_project]
pub struct ItemStream<T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T>> + Send>>,
}

impl<T> ItemStream<T> {
    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T> Stream for ItemStream<T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
