//! Error propagation and partial-run behaviour.

use crate::support::{FailingSink, FailurePoint, NAMESPACE};
use rental_populate::{PopulateError, PopulatePlan, Populator};

#[tokio::test]
async fn test_permission_error_inserts_nothing() {
    let mut populator = Populator::new(FailingSink::new(FailurePoint::Namespace), NAMESPACE, 42);
    let err = populator.populate(PopulatePlan::new(3, 2, 2)).await.unwrap_err();
    assert!(matches!(err, PopulateError::Permission(_)));

    let sink = &populator.sink().inner;
    for table in ["hosts", "listings", "reviews"] {
        assert_eq!(sink.row_count(NAMESPACE, table), 0);
    }
    assert_eq!(sink.pending_count(), 0);
    assert_eq!(sink.commit_count(), 0);
}

#[tokio::test]
async fn test_failure_mid_reviews_keeps_earlier_phases() {
    let failure = FailurePoint::Insert {
        table: "reviews",
        nth: 3,
    };
    let mut populator = Populator::new(FailingSink::new(failure), NAMESPACE, 42);
    let err = populator.populate(PopulatePlan::new(2, 2, 2)).await.unwrap_err();
    assert!(matches!(err, PopulateError::Connection(_)));

    let sink = &populator.sink().inner;
    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 2);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 4);
    // The review phase never committed.
    assert_eq!(sink.row_count(NAMESPACE, "reviews"), 0);
    assert_eq!(sink.commit_count(), 2);
}

#[tokio::test]
async fn test_failure_in_first_listing_stops_run() {
    let failure = FailurePoint::Insert {
        table: "listings",
        nth: 1,
    };
    let mut populator = Populator::new(FailingSink::new(failure), NAMESPACE, 42);
    assert!(populator.populate(PopulatePlan::new(3, 1, 1)).await.is_err());

    let sink = &populator.sink().inner;
    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 3);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 0);
    assert_eq!(sink.row_count(NAMESPACE, "reviews"), 0);
}

#[tokio::test]
async fn test_huge_listing_count_fails_cleanly() {
    let failure = FailurePoint::Insert {
        table: "listings",
        nth: 3,
    };
    let mut populator = Populator::new(FailingSink::new(failure), NAMESPACE, 42);
    let err = populator
        .populate(PopulatePlan::new(2, u64::MAX / 2 + 1, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, PopulateError::Connection(_)));

    let sink = &populator.sink().inner;
    assert_eq!(sink.row_count(NAMESPACE, "hosts"), 2);
    assert_eq!(sink.row_count(NAMESPACE, "listings"), 0);
    assert_eq!(sink.commit_count(), 1);
}

#[tokio::test]
async fn test_sink_closed_after_failed_run() {
    let failure = FailurePoint::Insert {
        table: "reviews",
        nth: 1,
    };
    let mut populator = Populator::new(FailingSink::new(failure), NAMESPACE, 42);
    let err = populator
        .populate_and_close(PopulatePlan::new(1, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, PopulateError::Connection(_)));
    assert!(populator.sink().closed);
}

#[tokio::test]
async fn test_sink_closed_after_successful_run() {
    let failure = FailurePoint::Insert {
        table: "reviews",
        nth: usize::MAX,
    };
    let mut populator = Populator::new(FailingSink::new(failure), NAMESPACE, 42);
    let metrics = populator
        .populate_and_close(PopulatePlan::new(1, 1, 1))
        .await
        .unwrap();
    assert_eq!(metrics.rows_inserted(), 3);
    assert!(populator.sink().closed);
}
