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

//! Defines traits and helpers to serialize query parameters.
//!
//! The generator produces query parameters as fields in the request object:
//! - [Option] fields that do not contain a value are not included in the
//!   HTTP query.
//! - Repeated fields are formatted as repeated query parameters.
//! - Scalars are formatted as usual.
//!
//! The generated code can treat all the query parameters uniformly, without
//! any conditionally generated code to handle different types.
//!
//! The types are not intended for application developers to use.

/// Adds a query parameter to a builder.
pub fn add<T>(builder: reqwest::RequestBuilder, name: &str, parameter: &T) -> reqwest::RequestBuilder
where
    T: QueryParameter,
{
    QueryParameter::add(parameter, builder, name)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

/// Scalar values sent as a single `name=value` pair.
pub trait QueryValue {
    fn format(&self) -> String;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match &self {
            None => builder,
            Some(t) => t.add(builder, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.iter().fold(builder, |builder, e| e.add(builder, name))
    }
}

impl<T: QueryValue> QueryParameter for T {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self.format())])
    }
}

macro_rules! display_query_value {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn format(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

display_query_value!(i32, i64, u32, u64, bool, String);
