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

mod clock;
mod error;
mod repository;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use error::CoreError;
pub use repository::{AppealRepository, InMemoryRepository};
pub use store::{AppealStore, StatusCounts};
