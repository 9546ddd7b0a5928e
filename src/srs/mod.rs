//! Spaced-repetition scheduling engine.
//!
//! - [`store`]: persisted review items
//! - [`deck`]: one-time seeding from built-in content
//! - [`queue`]: today's due queue and review recording
//! - [`clock`]: time sources and the end-of-day cutoff
//! - [`service`]: facade combining the above

pub mod clock;
pub mod deck;
pub mod queue;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use queue::ReviewStats;
pub use service::SrsService;
pub use store::ReviewStore;
