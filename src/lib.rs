//! # lingo-srs
//!
//! Spaced-repetition scheduling for an English-learning app: decides which
//! words and sentences are due for review and how each review outcome moves
//! the next due date.
//!
//! ```text
//! initialize_deck → ReviewStore → due_queue → review → compute_next → ReviewStore
//! ```
//!
//! - [`srs`]: review store, deck seeding, due queue, clock
//! - [`models`]: review items, quality ratings, the SM-2 scheduler, sessions
//! - [`database`]: key-value persistence backends
//! - [`export`]: JSON backup of review progress
//! - [`config`], [`logging`], [`cli`], [`app`]: command-line front end

pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod srs;

pub use error::{Result, SrsError};
pub use models::{ItemKey, ItemType, Quality, Rating, ReviewItem, ReviewSession};
pub use srs::{ReviewStore, SrsService};
