//! Tests for a full session across several categories

use crate::common::{assert_close, pinned_ids, temp_json_storage, unit};
use unitdeck::format::format_value;
use unitdeck::pinned::PinnedUnitStore;
use unitdeck::quantity::parse_quantity;
use unitdeck::storage::JsonPinStorage;

#[test]
fn test_session_round_trip() {
    let (_dir, storage) = temp_json_storage();
    let path = storage.path().to_path_buf();
    let mut store = PinnedUnitStore::new(storage);

    // Cooking: add a pinch and enter a cup
    store.set_category("cooking").unwrap();
    store.pin_unit(unit("cooking", "pinch")).unwrap();
    store.update_value("cup", 1.0);
    assert_close(store.value_of("tbsp").unwrap(), 16.0, 1e-6);
    assert_close(store.value_of("tsp").unwrap(), 48.0, 1e-6);

    // Fuel: enter a consumption figure
    store.set_category("fuel").unwrap();
    store.update_value("l100km", 8.0);
    assert_eq!(format_value(store.value_of("kmpl").unwrap()), "12.5");

    // Restart
    let mut store = PinnedUnitStore::new(JsonPinStorage::new(&path));
    store.set_category("cooking").unwrap();
    assert_eq!(pinned_ids(&store), vec!["cup", "tbsp", "tsp", "ml", "pinch"]);
    assert!(store.pinned().iter().all(|p| p.value == 0.0));

    store.set_category("fuel").unwrap();
    assert_eq!(pinned_ids(&store), vec!["l100km", "kmpl", "mpg_us", "mpg_uk"]);
}

#[test]
fn test_parsed_quantity_drives_store() {
    let q = parse_quantity("5 km").unwrap();
    let (_dir, storage) = temp_json_storage();

    let mut store = PinnedUnitStore::new(storage);
    store.set_category(q.category.id).unwrap();
    if !store.is_pinned(q.unit.id) {
        store.pin_unit(q.unit).unwrap();
    }
    store.update_value(q.unit.id, q.amount);

    assert_eq!(store.value_of("m"), Some(5000.0));
    assert_eq!(format_value(store.value_of("cm").unwrap()), "500,000");
}
