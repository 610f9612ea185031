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

/// Identifies the client library in the `User-Agent` header.
#[derive(Debug, PartialEq)]
pub struct SdkHeader {
    pub name: &'static str,
    pub version: &'static str,
}

pub const SDK_NAME: &str = "ibm-cloud-rust";

mod build_info {
    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl SdkHeader {
    pub fn header_value(&self) -> String {
        let gax_version = build_info::PKG_VERSION;
        format!("{SDK_NAME}/{gax_version} {}/{}", self.name, self.version)
    }
}
