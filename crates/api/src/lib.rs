// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod client;
mod console;
mod coordinator;
mod directory_page;
mod error;
mod http;
mod requests_page;
mod resource;
mod transport;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use console::Console;
pub use coordinator::{MutationCoordinator, MutationOutcome};
pub use directory_page::DirectoryPage;
pub use error::{ApiError, filter_message};
pub use http::HttpTransport;
pub use requests_page::RequestsPage;
pub use resource::{Deletable, Departments, Editable, Requests, Resource, ResourceKind, Users};
pub use transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, TransportError};
