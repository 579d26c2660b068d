//! Persisting generated records through a [`SeedSink`].

use crate::error::PopulateError;
use crate::schema::{SeedValue, TableDefinition, HOSTS, LISTINGS, REVIEWS};
use crate::sink::SeedSink;
use chrono::NaiveDateTime;
use rental_generator::{
    EntityGenerator, HostId, HostRecord, ListingId, ListingRecord, ReviewId, ReviewRecord,
};
use tracing::debug;

/// A record that maps onto one row of a rental table.
pub trait ToRow {
    /// Table the record is stored in.
    fn table() -> &'static TableDefinition;

    /// Column values in `table().columns` order.
    fn values(&self) -> Vec<SeedValue>;
}

impl ToRow for HostRecord {
    fn table() -> &'static TableDefinition {
        &HOSTS
    }

    fn values(&self) -> Vec<SeedValue> {
        vec![
            SeedValue::Text(self.name.clone()),
            SeedValue::Bool(self.is_superhost),
            SeedValue::Timestamp(self.created_at),
            SeedValue::Timestamp(self.updated_at),
        ]
    }
}

impl ToRow for ListingRecord {
    fn table() -> &'static TableDefinition {
        &LISTINGS
    }

    fn values(&self) -> Vec<SeedValue> {
        vec![
            SeedValue::Text(self.name.clone()),
            SeedValue::Text(self.room_type.to_string()),
            SeedValue::Int32(self.minimum_nights),
            SeedValue::Int64(self.host_id),
            SeedValue::Text(self.price.to_string()),
            SeedValue::Timestamp(self.created_at),
            SeedValue::Timestamp(self.updated_at),
        ]
    }
}

impl ToRow for ReviewRecord {
    fn table() -> &'static TableDefinition {
        &REVIEWS
    }

    fn values(&self) -> Vec<SeedValue> {
        vec![
            SeedValue::Int64(self.listing_id),
            SeedValue::Text(self.reviewer_name.clone()),
            SeedValue::Text(self.comments.clone()),
            SeedValue::Text(self.sentiment.to_string()),
            SeedValue::Timestamp(self.date),
        ]
    }
}

/// A listing that has been written, with the creation time its reviews
/// are bounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedListing {
    pub id: ListingId,
    pub created_at: NaiveDateTime,
}

async fn insert_record<S, R>(sink: &mut S, namespace: &str, record: &R) -> Result<i64, PopulateError>
where
    S: SeedSink,
    R: ToRow + Sync,
{
    let table = R::table();
    let id = sink
        .insert_returning_id(namespace, table, &record.values())
        .await?;
    debug!("Inserted {}.{} id={}", namespace, table.name, id);
    Ok(id)
}

/// Generate one host, persist it and return its identifier.
pub async fn insert_host<S: SeedSink>(
    sink: &mut S,
    entities: &mut EntityGenerator,
    namespace: &str,
) -> Result<HostId, PopulateError> {
    let host = entities.host()?;
    insert_record(sink, namespace, &host).await
}

/// Generate one listing owned by `host_id`, persist it and return its
/// identifier together with its creation time.
pub async fn insert_listing<S: SeedSink>(
    sink: &mut S,
    entities: &mut EntityGenerator,
    namespace: &str,
    host_id: HostId,
) -> Result<PersistedListing, PopulateError> {
    let listing = entities.listing(host_id)?;
    let id = insert_record(sink, namespace, &listing).await?;
    Ok(PersistedListing {
        id,
        created_at: listing.created_at,
    })
}

/// Generate one review of `listing`, persist it and return its identifier.
pub async fn insert_review<S: SeedSink>(
    sink: &mut S,
    entities: &mut EntityGenerator,
    namespace: &str,
    listing: &PersistedListing,
) -> Result<ReviewId, PopulateError> {
    let review = entities.review(listing.id, listing.created_at)?;
    insert_record(sink, namespace, &review).await
}
