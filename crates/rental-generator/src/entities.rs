//! Field production for hosts, listings and reviews.

use crate::error::GeneratorError;
use crate::facts::FactGenerator;
use crate::records::{
    HostId, HostRecord, ListingId, ListingRecord, Price, ReviewRecord, RoomType, Sentiment,
};
use chrono::NaiveDateTime;

/// Inclusive bounds for `minimum_nights`.
pub const MINIMUM_NIGHTS_RANGE: (i64, i64) = (1, 30);

/// Inclusive bounds for the integer part of a price.
pub const PRICE_DOLLARS_RANGE: (i64, i64) = (50, 300);

/// Inclusive bounds for the fractional part of a price.
pub const PRICE_CENTS_RANGE: (i64, i64) = (0, 99);

/// Produces fully-populated records from a shared [`FactGenerator`].
///
/// Parent identifiers are supplied by the caller once the parent row has
/// been persisted; this type never touches storage.
pub struct EntityGenerator {
    facts: FactGenerator,
}

impl EntityGenerator {
    /// Create an entity generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_facts(FactGenerator::new(seed))
    }

    pub fn with_facts(facts: FactGenerator) -> Self {
        Self { facts }
    }

    /// Access the underlying fact source.
    pub fn facts(&mut self) -> &mut FactGenerator {
        &mut self.facts
    }

    pub fn host(&mut self) -> Result<HostRecord, GeneratorError> {
        let name = self.facts.name();
        let is_superhost = self.facts.coin();
        let (created_at, updated_at) = self.created_and_updated()?;

        Ok(HostRecord {
            name,
            is_superhost,
            created_at,
            updated_at,
        })
    }

    pub fn listing(&mut self, host_id: HostId) -> Result<ListingRecord, GeneratorError> {
        let name = self.facts.phrase();
        let room_type = self.facts.choose(&RoomType::ALL)?;
        let minimum_nights = self
            .facts
            .int_in(MINIMUM_NIGHTS_RANGE.0, MINIMUM_NIGHTS_RANGE.1)?;
        let price = self.price()?;
        let (created_at, updated_at) = self.created_and_updated()?;

        Ok(ListingRecord {
            name,
            room_type,
            minimum_nights: minimum_nights as i32,
            host_id,
            price,
            created_at,
            updated_at,
        })
    }

    /// Generate a review dated between the listing's creation and now.
    pub fn review(
        &mut self,
        listing_id: ListingId,
        listing_created_at: NaiveDateTime,
    ) -> Result<ReviewRecord, GeneratorError> {
        let reviewer_name = self.facts.name();
        let comments = self.facts.paragraph();
        let sentiment = self.facts.choose(&Sentiment::ALL)?;
        let now = self.facts.now();
        let date = self.facts.between(listing_created_at, now)?;

        Ok(ReviewRecord {
            listing_id,
            reviewer_name,
            comments,
            sentiment,
            date,
        })
    }

    fn price(&mut self) -> Result<Price, GeneratorError> {
        let dollars = self
            .facts
            .int_in(PRICE_DOLLARS_RANGE.0, PRICE_DOLLARS_RANGE.1)?;
        let cents = self.facts.int_in(PRICE_CENTS_RANGE.0, PRICE_CENTS_RANGE.1)?;
        Ok(Price {
            dollars: dollars as u16,
            cents: cents as u8,
        })
    }

    fn created_and_updated(&mut self) -> Result<(NaiveDateTime, NaiveDateTime), GeneratorError> {
        let created_at = self.facts.this_decade()?;
        let now = self.facts.now();
        let updated_at = self.facts.between(created_at, now)?;
        Ok((created_at, updated_at))
    }
}
