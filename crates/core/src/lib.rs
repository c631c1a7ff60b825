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

mod confirm;
mod error;
mod notice;
mod reference;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use confirm::{AutoConfirm, Confirmation};
pub use error::SessionError;
pub use notice::{Notice, NoticeBus, NoticeLevel};
pub use reference::InformeReferences;
pub use session::{ModalSession, SessionPhase, Submission};
pub use store::{CollectionStore, LoadStatus};
