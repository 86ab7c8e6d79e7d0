// Copyright 2024 Google LLC
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

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and an empty value would produce a request for a different
//! resource. The generated code rejects such requests before sending them,
//! and escapes the values so they cannot change the path structure.

/// Encode the characters that are not valid in a path segment, or that would
/// change the meaning of the path.
const PATH_SEGMENT: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::invalid_argument(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the escaped value of a required path parameter.
///
/// # Example
/// ```
/// # use analytics_engine_gax_internal::path_parameter::required;
/// let p = required("my instance", "instance_id")?;
/// assert_eq!(p, "my%20instance");
/// assert!(required("", "instance_id").is_err());
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn required(value: &str, name: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(percent_encoding::utf8_percent_encode(value, &PATH_SEGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_invalid_argument(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test_case("abc-123", "abc-123")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("50%", "50%25")]
    fn required(input: &str, want: &str) {
        let got = super::required(input, "test_field").unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn required_empty() {
        let e = super::required("", "instance_id").unwrap_err();
        assert!(e.is_invalid_argument(), "{e:?}");
        assert!(format!("{e}").contains("instance_id"), "{e}");
    }
}
