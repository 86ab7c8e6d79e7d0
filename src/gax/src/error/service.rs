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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The [Status] type is the error envelope returned by the service.
///
/// Each [Status] contains the HTTP status code reported by the service, a
/// list of error [details][ErrorDetail], and (usually) a trace identifier
/// that the service operators can use to find the request in their logs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Status {
    /// The HTTP status code, as reported in the payload.
    pub status_code: u16,

    /// The trace identifier for the failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    /// The list of errors. Services always return at least one.
    pub errors: Vec<ErrorDetail>,
}

impl Status {
    /// Sets the value for [status_code][Status::status_code].
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.status_code = v.into();
        self
    }

    /// Sets the value for [trace][Status::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the value for [errors][Status::errors].
    pub fn set_errors<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<ErrorDetail>,
    {
        self.errors = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// The code of the first error, or an empty string.
    pub fn code(&self) -> &str {
        self.errors.first().map(|e| e.code.as_str()).unwrap_or_default()
    }

    /// The message of the first error, or an empty string.
    pub fn message(&self) -> &str {
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or_default()
    }
}

/// A single error reported by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// A short, machine readable code, e.g. `not_found`.
    pub code: String,

    /// A developer-facing error message, in English.
    pub message: String,

    /// A link to more information about the error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

impl ErrorDetail {
    /// Sets the value for [code][ErrorDetail::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [more_info][ErrorDetail::more_info].
    pub fn set_more_info<T: Into<String>>(mut self, v: T) -> Self {
        self.more_info = Some(v.into());
        self
    }
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let status = serde_json::from_slice::<Status>(value).map_err(Error::deser)?;
        if status.errors.is_empty() {
            return Err(Error::deser("the error payload has no `errors` field"));
        }
        Ok(status)
    }
}
