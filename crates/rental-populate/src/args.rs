//! Common CLI argument definitions shared by all populators.

use crate::populator::PopulatePlan;
use clap::Args;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Number of hosts to generate
    #[arg(long, default_value = "10")]
    pub hosts: u64,

    /// Number of listings to generate for each host
    #[arg(long, default_value = "3")]
    pub listings_per_host: u64,

    /// Number of reviews to generate for each listing
    #[arg(long, default_value = "5")]
    pub reviews_per_listing: u64,

    /// Random seed for the fake data generator
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Dry-run mode: generate rows into memory without contacting the database
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    pub fn plan(&self) -> PopulatePlan {
        PopulatePlan::new(self.hosts, self.listings_per_host, self.reviews_per_listing)
    }
}
