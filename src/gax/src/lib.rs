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

//! Analytics Engine API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Analytics Engine client libraries for Rust. The
//! clients for each API version (`analytics-engine-v2`,
//! `analytics-engine-v3`) return the [Result] and [error::Error] types
//! defined here, accept [options::RequestOptions] for each request, and
//! expose list operations through the [paginator::Pager].
//!
//! <div class="warning">
//! Some types and functions in this crate are marked <code>doc(hidden)</code>.
//! They are used by the generated clients and are <b>not</b> intended for
//! general use.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Walks cursor-paginated list operations page by page, or item by item.
pub mod paginator;

pub mod client_builder;
pub mod credentials;
pub mod options;
pub mod response;
