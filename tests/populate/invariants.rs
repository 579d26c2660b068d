//! Properties every successful population run must satisfy.

use crate::support::{int, is_valid_price, text, timestamp, NAMESPACE};
use rental_generator::{RoomType, Sentiment};
use rental_populate::{MemorySink, PopulatePlan, Populator, SeedValue};
use std::collections::{HashMap, HashSet};

async fn populate(plan: PopulatePlan) -> MemorySink {
    let mut populator = Populator::new(MemorySink::new(), NAMESPACE, 42);
    populator.populate(plan).await.expect("populate failed");
    populator.into_sink()
}

#[tokio::test]
async fn test_row_count_law() {
    let plan = PopulatePlan::new(4, 3, 2);
    let sink = populate(plan).await;

    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 4);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 12);
    assert_eq!(sink.row_count(NAMESPACE, "reviews"), 24);
}

#[tokio::test]
async fn test_default_plan_counts() {
    let mut populator = Populator::new(MemorySink::new(), NAMESPACE, 42);
    let metrics = populator.populate(PopulatePlan::default()).await.unwrap();

    assert_eq!(metrics.hosts_inserted, 10);
    assert_eq!(metrics.listings_inserted, 30);
    assert_eq!(metrics.reviews_inserted, 150);
    assert_eq!(populator.sink().row_count(NAMESPACE, "reviews"), 150);
}

#[tokio::test]
async fn test_two_hosts_one_listing_one_review() {
    let sink = populate(PopulatePlan::new(2, 1, 1)).await;

    let host_ids: HashSet<i64> = sink.rows(NAMESPACE, "hosts").iter().map(|r| r.id).collect();
    let listings = sink.rows(NAMESPACE, "listings");
    let reviews = sink.rows(NAMESPACE, "reviews");
    assert_eq!(host_ids.len(), 2);
    assert_eq!(listings.len(), 2);
    assert_eq!(reviews.len(), 2);

    // One listing per host.
    let owners: HashSet<i64> = listings.iter().map(|l| int(l, "host_id")).collect();
    assert_eq!(owners, host_ids);

    // One review per listing.
    let listing_ids: HashSet<i64> = listings.iter().map(|l| l.id).collect();
    let reviewed: HashSet<i64> = reviews.iter().map(|r| int(r, "listing_id")).collect();
    assert_eq!(reviewed, listing_ids);
}

#[tokio::test]
async fn test_no_hosts_means_no_children() {
    let sink = populate(PopulatePlan::new(0, 5, 5)).await;

    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 0);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 0);
    assert_eq!(sink.row_count(NAMESPACE, "reviews"), 0);
    // The schema is still provisioned.
    assert!(sink.has_table(NAMESPACE, "reviews"));
}

#[tokio::test]
async fn test_timestamps_are_ordered() {
    let sink = populate(PopulatePlan::new(5, 3, 4)).await;
    let now = chrono::Utc::now().naive_utc();

    for host in sink.rows(NAMESPACE, "hosts") {
        assert!(timestamp(host, "updated_at") >= timestamp(host, "created_at"));
        assert!(timestamp(host, "updated_at") <= now);
    }

    let listing_created: HashMap<i64, _> = sink
        .rows(NAMESPACE, "listings")
        .iter()
        .map(|l| {
            assert!(timestamp(l, "updated_at") >= timestamp(l, "created_at"));
            (l.id, timestamp(l, "created_at"))
        })
        .collect();

    for review in sink.rows(NAMESPACE, "reviews") {
        let created = listing_created[&int(review, "listing_id")];
        let date = timestamp(review, "date");
        assert!(date >= created, "review {} dated before its listing", review.id);
        assert!(date <= now);
    }
}

#[tokio::test]
async fn test_categories_and_formats() {
    let sink = populate(PopulatePlan::new(6, 4, 3)).await;
    let room_types: Vec<&str> = RoomType::ALL.iter().map(|r| r.as_str()).collect();
    let sentiments: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();

    for listing in sink.rows(NAMESPACE, "listings") {
        assert!(room_types.contains(&text(listing, "room_type")));
        assert!(is_valid_price(text(listing, "price")), "{listing:?}");
        assert!((1..=30).contains(&int(listing, "minimum_nights")));
        assert!(!text(listing, "name").contains('.'));
    }

    for review in sink.rows(NAMESPACE, "reviews") {
        assert!(sentiments.contains(&text(review, "sentiment")));
        assert!(text(review, "comments").chars().count() <= 200);
        assert!(!text(review, "reviewer_name").is_empty());
    }

    for host in sink.rows(NAMESPACE, "hosts") {
        assert!(host.get("host_is_superhost").and_then(SeedValue::as_bool).is_some());
    }
}

#[tokio::test]
async fn test_second_run_appends() {
    let mut populator = Populator::new(MemorySink::new(), NAMESPACE, 42);
    populator.populate(PopulatePlan::new(2, 2, 2)).await.unwrap();
    populator.populate(PopulatePlan::new(2, 2, 2)).await.unwrap();

    let sink = populator.sink();
    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 4);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 8);
    assert_eq!(sink.row_count(NAMESPACE, "reviews"), 16);

    // Identifiers of the second batch are disjoint from the first.
    let ids: HashSet<i64> = sink.rows(NAMESPACE, "hosts").iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_same_seed_same_shape() {
    let a = populate(PopulatePlan::new(3, 2, 1)).await;
    let b = populate(PopulatePlan::new(3, 2, 1)).await;

    let names = |sink: &MemorySink| -> Vec<String> {
        sink.rows(NAMESPACE, "hosts")
            .iter()
            .map(|r| text(r, "name").to_string())
            .collect()
    };
    assert_eq!(names(&a), names(&b));
}
