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

//! A tracing layer to verify the spans created by the client libraries.
//!
//! The layer is installed as the default subscriber for the current thread,
//! use it with single-threaded runtimes, e.g., `#[tokio::test]`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// A span observed by [TestLayer].
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub id: span::Id,
    pub name: String,
    pub attributes: HashMap<String, String>,
}

struct TestVisitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// Captures the spans created while the layer is installed.
#[derive(Clone, Default)]
pub struct TestLayer {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for this thread.
    ///
    /// The subscriber is removed when the returned guard is dropped.
    pub fn initialize() -> (Self, tracing::subscriber::DefaultGuard) {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (layer, guard)
    }

    /// Returns and removes the spans captured so far.
    pub fn capture(&self) -> Vec<CapturedSpan> {
        let mut spans = self.spans.lock().expect("span log is not poisoned");
        std::mem::take(&mut *spans)
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut TestVisitor(&mut attributes));
        let captured_span = CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name().to_string(),
            attributes,
        };
        self.spans
            .lock()
            .expect("span log is not poisoned")
            .push(captured_span);
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut spans = self.spans.lock().expect("span log is not poisoned");
        if let Some(captured_span) = spans.iter_mut().find(|s| s.id == *id) {
            values.record(&mut TestVisitor(&mut captured_span.attributes));
        }
    }
}
