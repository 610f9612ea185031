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

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("the value of parameter {0} cannot be a dot segment")]
    DotSegment(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// The characters percent encoded in a path segment.
///
/// Any of these would end the segment, or start the query or fragment, if
/// they appeared unencoded in the request path.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent encodes a value for use as a single path segment.
pub fn encode(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

/// Validates a path parameter and encodes it as a single path segment.
///
/// The service paths have no optional segments, an empty value would change
/// the meaning of the request. So would `.` or `..`, which the URL parser
/// removes or resolves against the parent segment.
pub fn required(name: &str, value: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    if value == "." || value == ".." {
        return Err(gax::error::Error::binding(Error::DotSegment(
            name.to_string(),
        )));
    }
    Ok(encode(value))
}
