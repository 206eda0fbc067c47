use std::fs;
use std::path::Path;

use proptest::prelude::*;
use saucedemo_core::DataError;
use saucedemo_fixtures::{FixtureStore, PRIMARY_FIXTURE};
use tempfile::TempDir;

const MINIMAL_FIXTURE: &str = r#"{
    "schema_version": "0.1.0",
    "last_updated": "2026-06-01",
    "products": [
        {
            "id": "anchor",
            "name": "Anchor",
            "price": 12.5,
            "department": "marine",
            "tags": ["metal"],
            "description": "Holds things in place."
        }
    ],
    "test_scenarios": { "sort_by_price_asc": ["Anchor"] },
    "user_expectations": {
        "standard_user": { "can_checkout": true, "known_issues": [] }
    }
}"#;

/// Write a primary fixture into a throwaway data directory.
fn data_dir_with(contents: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp data dir");
    fs::write(dir.path().join(PRIMARY_FIXTURE), contents).expect("write fixture");
    dir
}

#[test]
fn open_loads_primary_fixture() {
    let dir = data_dir_with(MINIMAL_FIXTURE);
    let store = FixtureStore::open(dir.path()).unwrap();

    assert_eq!(store.schema_version(), "0.1.0");
    assert_eq!(store.last_updated(), "2026-06-01");
    assert_eq!(store.all_products().len(), 1);
    assert_eq!(store.product_by_id("anchor").unwrap().name(), "Anchor");
}

#[test]
fn open_fails_when_fixture_is_absent() {
    let dir = TempDir::new().unwrap();
    match FixtureStore::open(dir.path()) {
        Err(DataError::NotFound(path)) => assert!(path.contains(PRIMARY_FIXTURE)),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn open_fails_on_invalid_json() {
    let dir = data_dir_with("{ not json");
    match FixtureStore::open(dir.path()) {
        Err(DataError::Parse(_)) => {}
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn open_fails_fast_on_duplicate_product_ids() {
    let dir = data_dir_with(
        r#"{
            "products": [
                { "id": "dup", "name": "First", "price": 1.0, "department": "a" },
                { "id": "dup", "name": "Second", "price": 2.0, "department": "b" }
            ]
        }"#,
    );
    match FixtureStore::open(dir.path()) {
        Err(DataError::Duplicate(msg)) => assert!(msg.contains("dup")),
        other => panic!("expected Duplicate, got {other:?}"),
    }
}

#[test]
fn load_serves_cached_fixture_without_rereading() {
    let dir = data_dir_with(MINIMAL_FIXTURE);
    let mut store = FixtureStore::open(dir.path()).unwrap();

    let first = store.load(PRIMARY_FIXTURE).unwrap();

    // Remove the file from disk; a cache hit must not notice.
    fs::remove_file(dir.path().join(PRIMARY_FIXTURE)).unwrap();

    let second = store.load(PRIMARY_FIXTURE).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.product_by_id("anchor").unwrap().price(), 12.5);
}

#[test]
fn load_reads_secondary_fixtures_independently() {
    let dir = data_dir_with(MINIMAL_FIXTURE);
    fs::write(
        dir.path().join("alt.json"),
        r#"{ "schema_version": "9.9.9" }"#,
    )
    .unwrap();

    let mut store = FixtureStore::open(dir.path()).unwrap();
    let alt = store.load("alt.json").unwrap();

    assert_eq!(alt.schema_version(), "9.9.9");
    // The primary fixture the queries run against is untouched.
    assert_eq!(store.schema_version(), "0.1.0");
}

#[test]
fn load_missing_secondary_fixture_is_an_error() {
    let dir = data_dir_with(MINIMAL_FIXTURE);
    let mut store = FixtureStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.load("absent.json"),
        Err(DataError::NotFound(_))
    ));
}

#[test]
fn stores_hold_independent_caches() {
    let dir = data_dir_with(MINIMAL_FIXTURE);
    let store_a = FixtureStore::open(dir.path()).unwrap();

    // A second store opened after the file changes sees the new contents.
    fs::write(
        dir.path().join(PRIMARY_FIXTURE),
        r#"{ "schema_version": "2.0.0" }"#,
    )
    .unwrap();
    let store_b = FixtureStore::open(dir.path()).unwrap();

    assert_eq!(store_a.schema_version(), "0.1.0");
    assert_eq!(store_b.schema_version(), "2.0.0");
}

fn shipped_store() -> FixtureStore {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    FixtureStore::open(data_dir).expect("shipped fixture should load")
}

#[test]
fn shipped_fixture_roundtrips_every_product() {
    let store = shipped_store();
    assert!(!store.all_products().is_empty());

    for product in store.all_products() {
        assert_eq!(store.product_by_id(product.id()), Some(product));
        assert_eq!(store.product_by_name(product.name()), Some(product));
    }
}

#[test]
fn shipped_price_ascending_scenario_is_non_decreasing() {
    let store = shipped_store();
    let order = store.expected_sort_order("sort_by_price_asc");
    assert_eq!(order.len(), store.all_products().len());

    let prices: Vec<f64> = order
        .iter()
        .map(|name| {
            store
                .product_by_name(name)
                .expect("scenario names a known product")
                .price()
        })
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn shipped_name_scenarios_are_reverses_of_each_other() {
    let store = shipped_store();
    let asc = store.expected_sort_order("sort_by_name_asc");
    let desc: Vec<String> = store
        .expected_sort_order("sort_by_name_desc")
        .iter()
        .rev()
        .cloned()
        .collect();
    assert_eq!(asc, desc.as_slice());
}

#[test]
fn shipped_tag_filter_is_exact_subset_of_all_products() {
    let store = shipped_store();
    for tag in ["apparel", "accessories", "shirts", "no-such-tag"] {
        let tagged = store.products_by_tag(tag);
        let expected: Vec<_> = store
            .all_products()
            .iter()
            .filter(|p| p.has_tag(tag))
            .collect();
        assert_eq!(tagged, expected);
    }
}

#[test]
fn shipped_user_expectations_cover_checkout_contract() {
    let store = shipped_store();
    assert!(store.user_expectation("standard_user").unwrap().can_checkout);
    assert!(!store.user_expectation("locked_out_user").unwrap().can_checkout);
    assert!(store.user_expectation("ghost_user").is_none());
}

proptest! {
    #![proptest_config(ProptestConfig {
        // Each case opens the store, so keep the count modest.
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Lookups with arbitrary keys never panic; a key that is not declared
    /// in the fixture resolves to `None`/empty.
    #[test]
    fn arbitrary_keys_miss_softly(key in "[a-zA-Z0-9 _()./-]{0,40}") {
        let store = shipped_store();
        let known_id = store.all_products().iter().any(|p| p.id() == key);
        let known_name = store.all_products().iter().any(|p| p.name() == key);

        prop_assert_eq!(store.product_by_id(&key).is_some(), known_id);
        prop_assert_eq!(store.product_by_name(&key).is_some(), known_name);

        if !store.fixture().products().iter().any(|p| p.has_tag(&key)) {
            prop_assert!(store.products_by_tag(&key).is_empty());
        }
    }
}
