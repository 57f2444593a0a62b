use iss_tracker::tracker::{EphemSource, IssTracker};
use iss_tracker::TrackerError;

#[test]
fn test_refresh_from_file_source() {
    let tracker = IssTracker::new("file:tests/data/iss_oem_sample.xml").unwrap();

    // Nothing loaded yet
    assert!(tracker.snapshot().is_empty());

    let loaded = tracker.refresh().unwrap();
    assert_eq!(loaded, 6);

    let query = tracker.query();
    let vector = query.find_by_epoch("2025-074T11:34:54.000Z").unwrap();
    assert_eq!(vector.velocity, [5.3675, 5.3571, -0.9957]);
}

#[test]
fn test_queries_keep_their_snapshot_across_refresh() {
    let tracker = IssTracker::new("file:tests/data/iss_oem_sample.xml").unwrap();
    tracker.refresh().unwrap();

    // Queries keep the snapshot they were handed even while a refresh swaps
    // in a new set.
    let before = tracker.query();
    tracker.refresh().unwrap();
    assert_eq!(before.list(None, None).len(), 6);
    assert_eq!(tracker.snapshot().len(), 6);
}

#[test]
fn test_invalid_descriptor_is_rejected() {
    assert!(matches!(
        IssTracker::new("redis://iss"),
        Err(TrackerError::InvalidSource(_))
    ));
    assert!(EphemSource::try_from("").is_err());
}
