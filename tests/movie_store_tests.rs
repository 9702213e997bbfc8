/// Movie store behavior tests
///
/// Covers the observable contract of list/get/create/update/delete under both
/// the default configuration and the legacy preset.
/// Run with: cargo test --test movie_store_tests

use moviestore::{
    Deleted, IdStrategy, MovieData, MovieError, MovieStore, StoreConfig, UpdatePlacement,
    movie_data,
};
use serde_json::{Value, json};

fn data(value: Value) -> MovieData {
    movie_data(value).expect("test data must be a JSON object")
}

fn titles(store: &MovieStore) -> Vec<String> {
    store
        .get_all()
        .iter()
        .filter_map(|movie| movie.title().map(str::to_string))
        .collect()
}

#[test]
fn test_create_grows_store_by_one() {
    let mut store = MovieStore::new();
    let payload = data(json!({"title": "Arrival", "year": 2016, "genres": ["sci-fi"]}));

    let before = store.len();
    let count = store.create(payload.clone());

    assert_eq!(count, before + 1);
    assert_eq!(store.len(), count);

    let movie = store.get_one(count as u64).unwrap();
    assert_eq!(movie.fields, payload);
}

#[test]
fn test_get_unknown_and_deleted_ids() {
    let mut store = MovieStore::new();
    assert_eq!(store.get_one(1).unwrap_err(), MovieError::NotFound(1));

    store.create(data(json!({"title": "A"})));
    assert!(store.get_one(1).is_ok());

    assert_eq!(store.delete_one(1).unwrap(), Deleted { id: 1 });
    assert_eq!(store.get_one(1).unwrap_err(), MovieError::NotFound(1));
    assert_eq!(store.delete_one(1).unwrap_err(), MovieError::NotFound(1));
}

#[test]
fn test_update_preserves_id_and_absent_fields() {
    let mut store = MovieStore::new();
    store.create(data(json!({"title": "Heat", "year": 1995, "genres": ["crime"]})));

    store
        .update(1, data(json!({"year": 1996, "director": "Michael Mann"})))
        .unwrap();

    let movie = store.get_one(1).unwrap();
    assert_eq!(movie.id, 1);
    assert_eq!(movie.title(), Some("Heat"));
    assert_eq!(movie.get("year"), Some(&json!(1996)));
    assert_eq!(movie.get("genres"), Some(&json!(["crime"])));
    assert_eq!(movie.get("director"), Some(&json!("Michael Mann")));
}

#[test]
fn test_delete_preserves_survivor_order() {
    let mut store = MovieStore::new();
    for title in ["A", "B", "C", "D"] {
        store.create(data(json!({ "title": title })));
    }

    store.delete_one(2).unwrap();
    assert_eq!(titles(&store), vec!["A", "C", "D"]);
}

#[test]
fn test_legacy_scenario_reuses_ids() {
    let mut store = MovieStore::with_config(StoreConfig::legacy());

    assert_eq!(store.create(data(json!({"title": "A"}))), 1);
    assert_eq!(store.last_created_id(), Some(1));
    assert_eq!(store.create(data(json!({"title": "B"}))), 2);
    assert_eq!(store.last_created_id(), Some(2));

    assert_eq!(store.delete_one(1).unwrap(), Deleted { id: 1 });
    assert_eq!(titles(&store), vec!["B"]);

    assert_eq!(store.create(data(json!({"title": "C"}))), 2);
    assert_eq!(store.last_created_id(), Some(2));

    let ids: Vec<u64> = store.get_all().iter().map(|movie| movie.id).collect();
    assert_eq!(ids, vec![2, 2]);
}

#[test]
fn test_default_scenario_never_reuses_ids() {
    let mut store = MovieStore::new();

    store.create(data(json!({"title": "A"})));
    store.create(data(json!({"title": "B"})));
    store.delete_one(1).unwrap();
    assert_eq!(store.create(data(json!({"title": "C"}))), 2);
    assert_eq!(store.last_created_id(), Some(3));

    assert_eq!(store.get_one(2).unwrap().title(), Some("B"));
    assert_eq!(store.get_one(3).unwrap().title(), Some("C"));
}

#[test]
fn test_legacy_update_moves_record_to_end() {
    let mut store = MovieStore::with_config(StoreConfig::legacy());
    store.create(data(json!({"title": "A"})));
    store.create(data(json!({"title": "B"})));
    store.create(data(json!({"title": "C"})));

    store.update(2, data(json!({"title": "B2"}))).unwrap();

    let movie = store.get_one(2).unwrap();
    assert_eq!(movie.id, 2);
    assert_eq!(movie.title(), Some("B2"));
    assert_eq!(titles(&store), vec!["A", "C", "B2"]);
}

#[test]
fn test_default_update_keeps_position() {
    let mut store = MovieStore::new();
    store.create(data(json!({"title": "A"})));
    store.create(data(json!({"title": "B"})));
    store.create(data(json!({"title": "C"})));

    store.update(2, data(json!({"title": "B2"}))).unwrap();
    assert_eq!(titles(&store), vec!["A", "B2", "C"]);
}

#[test]
fn test_mixed_config() {
    let config = StoreConfig::new()
        .id_strategy(IdStrategy::LengthBased)
        .update_placement(UpdatePlacement::InPlace);
    let mut store = MovieStore::with_config(config);
    assert_eq!(store.config(), &config);

    store.create(data(json!({"title": "A"})));
    store.create(data(json!({"title": "B"})));
    store.update(1, data(json!({"title": "A2"}))).unwrap();

    assert_eq!(titles(&store), vec!["A2", "B"]);
}

#[test]
fn test_caller_id_never_wins() {
    let mut store = MovieStore::new();
    store.create(data(json!({"id": 100, "title": "A"})));

    assert!(store.get_one(100).is_err());
    let movie = store.get_one(1).unwrap();
    assert!(movie.get("id").is_none());
    assert_eq!(
        serde_json::to_value(movie).unwrap(),
        json!({"id": 1, "title": "A"})
    );
}
