//! Fake record generation for the rental-seed populator.
//!
//! [`FactGenerator`] wraps a seeded RNG and yields scalar values (names,
//! titles, comments, timestamps, bounded integers, categorical picks).
//! [`EntityGenerator`] builds on it to produce complete host, listing and
//! review records that respect the temporal ordering between them:
//!
//! - `updated_at` is never before `created_at`
//! - `created_at` falls between the start of the current decade and now
//! - a review is dated between its listing's `created_at` and now
//!
//! # Example
//!
//! ```rust
//! use rental_generator::EntityGenerator;
//!
//! let mut entities = EntityGenerator::new(42);
//! let host = entities.host().unwrap();
//! let listing = entities.listing(1).unwrap();
//! let review = entities.review(1, listing.created_at).unwrap();
//! assert!(host.updated_at >= host.created_at);
//! assert!(review.date >= listing.created_at);
//! ```

pub mod entities;
pub mod error;
pub mod facts;
pub mod records;

pub use entities::EntityGenerator;
pub use error::GeneratorError;
pub use facts::{FactGenerator, DEFAULT_SEED};
pub use records::{
    HostId, HostRecord, ListingId, ListingRecord, Price, ReviewId, ReviewRecord, RoomType,
    Sentiment,
};
