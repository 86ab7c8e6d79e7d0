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

//! Telemetry header helpers.

/// The name of the header identifying the client library.
pub const X_CLIENT_LIBRARY: &str = "x-client-library";

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize the `x-client-library` header value.
#[derive(Debug, PartialEq)]
pub struct XClientLibrary {
    /// The crate name, e.g. `analytics-engine-v3`.
    pub name: &'static str,
    /// The crate version.
    pub version: &'static str,
    /// The service name, e.g. `ibm-analytics-engine`.
    pub service: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XClientLibrary {
    /// Format the struct as needed for the `x-client-library` header.
    pub fn header_value(&self) -> String {
        format!(
            "rust/{} gax/{} {}/{} service/{}",
            build_info::RUSTC_VERSION,
            build_info::PKG_VERSION,
            self.name,
            self.version,
            self.service
        )
    }
}

/// The default `user-agent` header value.
pub fn user_agent() -> String {
    format!("analytics-engine-rust/{}", build_info::PKG_VERSION)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k, &v[1..]))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn header_value() {
        let header = XClientLibrary {
            name: "analytics-engine-v3",
            version: "1.2.3",
            service: "ibm-analytics-engine",
        };
        let fields = breakdown(header.header_value().as_str());

        let got = fields.get("analytics-engine-v3").map(String::as_str);
        assert_eq!(got, Some("1.2.3"), "{fields:?}");

        let got = fields.get("service").map(String::as_str);
        assert_eq!(got, Some("ibm-analytics-engine"), "{fields:?}");

        let got = fields.get("gax").map(String::as_str);
        assert_eq!(got, Some(build_info::PKG_VERSION), "{fields:?}");

        let got = fields.get("rust").map(String::as_str);
        assert_eq!(got, Some(build_info::RUSTC_VERSION), "{fields:?}");
        assert!(!build_info::RUSTC_VERSION.is_empty());
    }

    #[test]
    fn default_user_agent() {
        let got = user_agent();
        assert!(got.starts_with("analytics-engine-rust/"), "{got}");
        assert!(got.ends_with(build_info::PKG_VERSION), "{got}");
    }
}
