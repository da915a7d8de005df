//! Integration tests for the search engine.
//!
//! These tests drive the full pipeline — criteria validation, the two store
//! reads, room filtering, grouping, shaping, sorting, and the tier listings —
//! against an in-memory catalog fixture.

use async_trait::async_trait;
use catalog::{
    CatalogError, CatalogIndex, GenderPolicy, Hostel, HostelFilter, HostelImage, HostelStore,
    Room, RoomFilter, RoomStore, RoomType,
};
use engine::{EmptyReason, SearchCriteria, SearchEngine, SearchError, SearchOutcome, TierScope};
use std::sync::Arc;

fn hostel(id: &str, name: &str, location: &str, available: bool) -> Hostel {
    Hostel {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        gender: GenderPolicy::Mixed,
        available,
        amenities: vec!["wifi".to_string()],
        images: vec![],
        featured: false,
    }
}

fn room(id: &str, hostel_id: &str, room_type: RoomType, price: u64) -> Room {
    Room {
        id: id.to_string(),
        hostel_id: hostel_id.to_string(),
        room_type,
        gender: GenderPolicy::Mixed,
        price,
        max_occupancy: 2,
    }
}

/// Catalog used by most tests:
///
/// * `h_wande` — "Wandegeya Heights", single 500k + double 1.2M (premium)
/// * `h_kikoni` — "Kikoni Annex", two shared rooms under 600k (affordable)
/// * `h_mid` — "Makerere Court", double 700k + single 900k (mid-range)
/// * `h_exact` — "Bukoto Rooms", single 600k + double 1.0M (premium)
/// * `h_closed` — "Wandegeya Budget", unavailable, single 350k
/// * `h_empty` — "Ntinda Shell", no rooms at all
/// * one orphaned room pointing at a hostel that does not exist
fn build_catalog() -> Arc<CatalogIndex> {
    let mut index = CatalogIndex::new();

    let mut wande = hostel("h_wande", "Wandegeya Heights", "Wandegeya, Kampala", true);
    wande.images = vec![
        HostelImage {
            url: "side.jpg".to_string(),
            is_primary: false,
        },
        HostelImage {
            url: "front.jpg".to_string(),
            is_primary: true,
        },
    ];
    index.insert_hostel(wande);
    index.insert_hostel(hostel("h_kikoni", "Kikoni Annex", "Kikoni", true));
    index.insert_hostel(hostel("h_mid", "Makerere Court", "Makerere", true));
    index.insert_hostel(hostel("h_exact", "Bukoto Rooms", "Bukoto", true));
    index.insert_hostel(hostel("h_closed", "Wandegeya Budget", "Wandegeya", false));
    index.insert_hostel(hostel("h_empty", "Ntinda Shell", "Ntinda", true));

    index.insert_room(room("r1", "h_wande", RoomType::Single, 500_000));
    index.insert_room(room("r2", "h_wande", RoomType::Double, 1_200_000));
    index.insert_room(room("r3", "h_kikoni", RoomType::Shared, 450_000));
    index.insert_room(room("r4", "h_kikoni", RoomType::Shared, 550_000));
    index.insert_room(room("r5", "h_mid", RoomType::Double, 700_000));
    index.insert_room(room("r6", "h_mid", RoomType::Single, 900_000));
    index.insert_room(room("r7", "h_exact", RoomType::Single, 600_000));
    index.insert_room(room("r8", "h_exact", RoomType::Double, 1_000_000));
    index.insert_room(room("r9", "h_closed", RoomType::Single, 350_000));
    index.insert_room(room("r10", "ghost", RoomType::Shared, 200_000));

    Arc::new(index)
}

fn engine_over(index: Arc<CatalogIndex>) -> SearchEngine {
    SearchEngine::new(index.clone(), index)
}

/// Store stub whose every read fails, for error-propagation tests.
struct FailingStore;

#[async_trait]
impl HostelStore for FailingStore {
    async fn find_hostels(&self, _filter: &HostelFilter) -> catalog::Result<Vec<Hostel>> {
        Err(CatalogError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }
}

#[async_trait]
impl RoomStore for FailingStore {
    async fn find_rooms(&self, _filter: &RoomFilter) -> catalog::Result<Vec<Room>> {
        Err(CatalogError::Unavailable {
            reason: "connection refused".to_string(),
        })
    }
}

fn entry_ids(outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .entries()
        .iter()
        .map(|e| e.hostel.id.clone())
        .collect()
}

#[tokio::test]
async fn empty_criteria_is_rejected_before_any_read() {
    // Both stores would fail if touched; the validation error must win.
    let engine = SearchEngine::new(Arc::new(FailingStore), Arc::new(FailingStore));
    let result = engine.search(&SearchCriteria::default()).await;
    assert!(matches!(result, Err(SearchError::InvalidCriteria)));
}

#[tokio::test]
async fn location_matches_hostel_name_and_skips_unavailable() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // "Wandegeya Budget" also matches the term but is unavailable
    assert_eq!(entry_ids(&outcome), vec!["h_wande".to_string()]);
    assert_eq!(outcome.count(), 1);
}

#[tokio::test]
async fn unknown_location_is_an_empty_success() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Gulu".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Empty { reason, .. } => {
            assert_eq!(reason, EmptyReason::NoHostelsMatched);
        }
        SearchOutcome::Matches(_) => panic!("expected empty outcome"),
    }
}

#[tokio::test]
async fn hostel_without_surviving_rooms_is_an_empty_success() {
    let engine = engine_over(build_catalog());
    // "Ntinda Shell" matches the location but owns no rooms
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Ntinda".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Empty { reason, .. } => {
            assert_eq!(reason, EmptyReason::NoRoomsMatched);
        }
        SearchOutcome::Matches(_) => panic!("expected empty outcome"),
    }
}

#[tokio::test]
async fn price_band_bounds_are_inclusive() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            min_price: Some(600_000),
            max_price: Some(999_999),
            ..Default::default()
        })
        .await
        .unwrap();

    // 600_000 is in, 1_000_000 and 1_200_000 are out
    assert_eq!(
        entry_ids(&outcome),
        vec!["h_exact".to_string(), "h_mid".to_string()]
    );

    let exact = &outcome.entries()[0];
    assert_eq!(exact.rooms.len(), 1);
    assert_eq!(exact.rooms[0].price, 600_000);
}

#[tokio::test]
async fn room_type_matches_as_substring() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            room_type: Some("Sin".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // Hostels with single rooms, ordered by min surviving price
    assert_eq!(
        entry_ids(&outcome),
        vec![
            "h_wande".to_string(),
            "h_exact".to_string(),
            "h_mid".to_string()
        ]
    );
    assert!(outcome
        .entries()
        .iter()
        .all(|e| e.rooms.iter().all(|r| r.room_type == RoomType::Single)));
}

#[tokio::test]
async fn results_are_sorted_by_min_price_ascending() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            min_price: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        entry_ids(&outcome),
        vec![
            "h_kikoni".to_string(),
            "h_wande".to_string(),
            "h_exact".to_string(),
            "h_mid".to_string()
        ]
    );

    let mins: Vec<u64> = outcome
        .entries()
        .iter()
        .map(|e| e.price_range.min)
        .collect();
    assert_eq!(mins, vec![450_000, 500_000, 600_000, 700_000]);
}

#[tokio::test]
async fn price_range_covers_only_surviving_rooms() {
    let engine = engine_over(build_catalog());

    // Unfiltered: both rooms of Wandegeya Heights with the full range
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya Heights".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let entry = &outcome.entries()[0];
    assert_eq!(entry.rooms.len(), 2);
    assert_eq!(entry.price_range.min, 500_000);
    assert_eq!(entry.price_range.max, 1_200_000);

    // Price-capped: the 1.2M room no longer shapes the range
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya Heights".to_string()),
            max_price: Some(600_000),
            ..Default::default()
        })
        .await
        .unwrap();
    let entry = &outcome.entries()[0];
    assert_eq!(entry.rooms.len(), 1);
    assert_eq!(entry.price_range.min, 500_000);
    assert_eq!(entry.price_range.max, 500_000);
}

#[tokio::test]
async fn primary_image_is_carried_into_entries() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        outcome.entries()[0].primary_image.as_deref(),
        Some("front.jpg")
    );

    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Kikoni".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(outcome.entries()[0].primary_image.is_none());
}

#[tokio::test]
async fn applied_criteria_echo_uses_sentinel_for_absent_fields() {
    let engine = engine_over(build_catalog());
    let outcome = engine
        .search(&SearchCriteria {
            location: Some("Kikoni".to_string()),
            min_price: Some(400_000),
            ..Default::default()
        })
        .await
        .unwrap();

    match outcome {
        SearchOutcome::Matches(results) => {
            assert_eq!(results.criteria_applied.location, "Kikoni");
            assert_eq!(results.criteria_applied.min_price, "400000");
            assert_eq!(results.criteria_applied.room_type, engine::UNCONSTRAINED);
            assert_eq!(results.criteria_applied.max_price, engine::UNCONSTRAINED);
        }
        SearchOutcome::Empty { .. } => panic!("expected matches"),
    }
}

#[tokio::test]
async fn identical_searches_give_identical_output() {
    let engine = engine_over(build_catalog());
    let criteria = SearchCriteria {
        min_price: Some(0),
        ..Default::default()
    };

    let first = engine.search(&criteria).await.unwrap();
    let second = engine.search(&criteria).await.unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn tier_listings_partition_the_priced_catalog() {
    let engine = engine_over(build_catalog());

    let premium: Vec<String> = engine
        .list_premium()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(premium, vec!["h_exact".to_string(), "h_wande".to_string()]);

    // Availability is not re-checked by default, so the closed budget
    // hostel still shows up as affordable.
    let affordable: Vec<String> = engine
        .list_affordable()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(
        affordable,
        vec!["h_closed".to_string(), "h_kikoni".to_string()]
    );

    let mid_range: Vec<String> = engine
        .list_mid_range()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(mid_range, vec!["h_mid".to_string()]);
}

#[tokio::test]
async fn roomless_hostel_belongs_to_no_tier() {
    let engine = engine_over(build_catalog());
    for hostels in [
        engine.list_premium().await.unwrap(),
        engine.list_affordable().await.unwrap(),
        engine.list_mid_range().await.unwrap(),
    ] {
        assert!(hostels.iter().all(|h| h.id != "h_empty"));
    }
}

#[tokio::test]
async fn tier_scope_can_re_check_availability() {
    let engine = engine_over(build_catalog()).with_tier_scope(TierScope {
        respect_availability: true,
    });

    let affordable: Vec<String> = engine
        .list_affordable()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(affordable, vec!["h_kikoni".to_string()]);
}

#[tokio::test]
async fn empty_tier_is_a_successful_empty_list() {
    let mut index = CatalogIndex::new();
    index.insert_hostel(hostel("h1", "Cheap Stay", "Kampala", true));
    index.insert_room(room("r1", "h1", RoomType::Shared, 200_000));
    let engine = engine_over(Arc::new(index));

    assert!(engine.list_premium().await.unwrap().is_empty());
    assert!(engine.list_mid_range().await.unwrap().is_empty());
}

#[tokio::test]
async fn hostel_store_failure_propagates() {
    let index = build_catalog();
    let engine = SearchEngine::new(Arc::new(FailingStore), index);
    let result = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(SearchError::Store(_))));
}

#[tokio::test]
async fn room_store_failure_propagates() {
    let index = build_catalog();
    let engine = SearchEngine::new(index, Arc::new(FailingStore));
    let result = engine
        .search(&SearchCriteria {
            location: Some("Wandegeya".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(SearchError::Store(_))));

    let tiers = SearchEngine::new(build_catalog(), Arc::new(FailingStore));
    assert!(matches!(
        tiers.list_premium().await,
        Err(SearchError::Store(_))
    ));
}
