// Copyright 2025 Google LLC
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

/// The default implementation for each method in the generated stub traits.
///
/// The transport and tracing stubs override every method. Mocks created in
/// tests may not, and calling one of the missing methods panics.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide default implementations of each method, so ",
        "adding operations to a service does not break existing mocks. The ",
        "client libraries override all the methods. If this panic appears ",
        "in a test, verify the mock implements all the methods used in the ",
        "test."
    ));
}
