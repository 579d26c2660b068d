//! Three-phase population pipeline: hosts, then listings, then reviews.

use crate::entity::{insert_host, insert_listing, insert_review, PersistedListing};
use crate::error::PopulateError;
use crate::schema::TABLES;
use crate::sink::SeedSink;
use rental_generator::{EntityGenerator, HostId};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on rows reserved up front for a phase's id list.
const MAX_RESERVED_ROWS: usize = 4096;

/// How many rows of each kind one run appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulatePlan {
    pub hosts: u64,
    pub listings_per_host: u64,
    pub reviews_per_listing: u64,
}

impl PopulatePlan {
    pub fn new(hosts: u64, listings_per_host: u64, reviews_per_listing: u64) -> Self {
        Self {
            hosts,
            listings_per_host,
            reviews_per_listing,
        }
    }

    pub fn total_listings(&self) -> u64 {
        self.hosts.saturating_mul(self.listings_per_host)
    }

    pub fn total_reviews(&self) -> u64 {
        self.total_listings().saturating_mul(self.reviews_per_listing)
    }
}

impl Default for PopulatePlan {
    fn default() -> Self {
        Self::new(10, 3, 5)
    }
}

/// Metrics from a populate run.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    pub hosts_inserted: u64,
    pub listings_inserted: u64,
    pub reviews_inserted: u64,
    pub total_duration: Duration,
}

impl PopulateMetrics {
    pub fn rows_inserted(&self) -> u64 {
        self.hosts_inserted + self.listings_inserted + self.reviews_inserted
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives schema provisioning and the host → listing → review phases
/// against a [`SeedSink`].
///
/// Each phase runs to completion and is committed before the next one
/// starts, so children only ever reference parents that are already
/// visible. The first error aborts the run; phases committed earlier are
/// kept.
pub struct Populator<S: SeedSink> {
    sink: S,
    entities: EntityGenerator,
    namespace: String,
}

impl<S: SeedSink> Populator<S> {
    /// Create a populator writing under `namespace`, seeding the
    /// generator once with `seed`.
    pub fn new(sink: S, namespace: impl Into<String>, seed: u64) -> Self {
        Self::with_entities(sink, namespace, EntityGenerator::new(seed))
    }

    pub fn with_entities(sink: S, namespace: impl Into<String>, entities: EntityGenerator) -> Self {
        Self {
            sink,
            entities,
            namespace: namespace.into(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Create the namespace and the three tables if they are absent.
    pub async fn provision(&mut self) -> Result<(), PopulateError> {
        info!("Ensuring namespace '{}'", self.namespace);
        self.sink.ensure_namespace(&self.namespace).await?;

        for table in &TABLES {
            debug!("Ensuring table {}.{}", self.namespace, table.name);
            self.sink.ensure_table(&self.namespace, table).await?;
        }
        Ok(())
    }

    /// Provision the schema, then append `plan` worth of rows.
    pub async fn populate(&mut self, plan: PopulatePlan) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!(
            "Populating '{}': {} hosts, {} listings per host, {} reviews per listing",
            self.namespace, plan.hosts, plan.listings_per_host, plan.reviews_per_listing
        );
        debug!(
            "Expecting {} listings and {} reviews",
            plan.total_listings(),
            plan.total_reviews()
        );

        self.provision().await?;

        let host_ids = self.populate_hosts(plan.hosts).await?;
        metrics.hosts_inserted = host_ids.len() as u64;

        let listings = self
            .populate_listings(&host_ids, plan.listings_per_host)
            .await?;
        metrics.listings_inserted = listings.len() as u64;

        metrics.reviews_inserted = self
            .populate_reviews(&listings, plan.reviews_per_listing)
            .await?;

        metrics.total_duration = start_time.elapsed();

        info!(
            "Population complete: {} rows in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted(),
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Insert `count` hosts and commit them as one unit.
    pub async fn populate_hosts(&mut self, count: u64) -> Result<Vec<HostId>, PopulateError> {
        self.sink.begin().await?;

        let mut host_ids = Vec::with_capacity(reserved_rows(count));
        for _ in 0..count {
            let id = insert_host(&mut self.sink, &mut self.entities, &self.namespace).await?;
            host_ids.push(id);
        }

        self.sink.commit().await?;
        info!("Committed {} hosts", host_ids.len());
        Ok(host_ids)
    }

    /// Insert `per_host` listings for every host and commit them as one unit.
    pub async fn populate_listings(
        &mut self,
        host_ids: &[HostId],
        per_host: u64,
    ) -> Result<Vec<PersistedListing>, PopulateError> {
        self.sink.begin().await?;

        let planned = (host_ids.len() as u64).saturating_mul(per_host);
        let mut listings = Vec::with_capacity(reserved_rows(planned));
        for &host_id in host_ids {
            for _ in 0..per_host {
                let listing =
                    insert_listing(&mut self.sink, &mut self.entities, &self.namespace, host_id)
                        .await?;
                listings.push(listing);
            }
        }

        self.sink.commit().await?;
        info!("Committed {} listings", listings.len());
        Ok(listings)
    }

    /// Insert `per_listing` reviews for every listing and commit them as
    /// one unit. Returns the number of reviews written.
    pub async fn populate_reviews(
        &mut self,
        listings: &[PersistedListing],
        per_listing: u64,
    ) -> Result<u64, PopulateError> {
        self.sink.begin().await?;

        let mut inserted = 0;
        for listing in listings {
            for _ in 0..per_listing {
                insert_review(&mut self.sink, &mut self.entities, &self.namespace, listing)
                    .await?;
                inserted += 1;
            }
        }

        self.sink.commit().await?;
        info!("Committed {} reviews", inserted);
        Ok(inserted)
    }

    /// Populate `plan`, then close the sink even if population failed.
    /// A population error is reported in preference to a close error.
    pub async fn populate_and_close(
        &mut self,
        plan: PopulatePlan,
    ) -> Result<PopulateMetrics, PopulateError> {
        let result = self.populate(plan).await;
        let closed = self.sink.close().await;

        let metrics = result?;
        closed?;
        Ok(metrics)
    }

    /// Close the underlying sink.
    pub async fn close(mut self) -> Result<(), PopulateError> {
        self.sink.close().await
    }
}

fn reserved_rows(planned: u64) -> usize {
    usize::try_from(planned).map_or(MAX_RESERVED_ROWS, |n| n.min(MAX_RESERVED_ROWS))
}
