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

mod draft;
mod error;
mod filter;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use draft::{
    DepartmentDraft, DepartmentPayload, NewRequest, NewUser, RequestDraft, UserChanges, UserDraft,
};
pub use error::DomainError;
pub use filter::{DateField, DateRange, FilterError, validate_date_range};
pub use types::{Department, EntityId, Identified, Request, User, technicians};
pub use validation::require_non_empty;
