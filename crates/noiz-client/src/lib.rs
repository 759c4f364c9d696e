//! Off-chain client library for the Noiz button protocol.
//!
//! Pairs with the `button-program` on-chain crate:
//! - [`pda`] derives the deterministic button/like addresses,
//! - [`ix`] builds the creation and like instructions with caller-side
//!   validation,
//! - [`quota`] holds the daily bolt arithmetic and day-boundary policy,
//! - [`docs`] validates loosely-typed documents at the read boundary,
//! - [`mirror`] is the in-memory document store with like/unlike and
//!   quota enforcement,
//! - [`watch`] exposes explicit change subscriptions over the mirror.

pub mod docs;
pub mod error;
pub mod ix;
pub mod mirror;
pub mod pda;
pub mod quota;
pub mod watch;

pub use error::{ClientError, Result};
pub use mirror::{NewSound, SoundMirror};
pub use quota::{BoltStatus, DayBoundary, MAX_BOLTS_PER_DAY};
pub use watch::{ChangeEvent, Subscription, WatchFilter};
