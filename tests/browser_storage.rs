#![cfg(target_arch = "wasm32")]

use mood_board::config::BoardConfig;
use mood_board::layout_store::LayoutStore;
use mood_board::storage::{BrowserStorage, KeyValueStorage};
use mood_board::types::{ImageItem, PlacedItem};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config() -> BoardConfig {
    BoardConfig {
        storage_key: "moodBoardTest".to_string(),
        ..BoardConfig::default()
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let storage = BrowserStorage::open().expect("localStorage");
    let mut store = LayoutStore::open(storage, &config());
    store.clear_all().unwrap();

    store
        .append(PlacedItem::Image(ImageItem {
            url: "a.png".to_string(),
            left: "40px".to_string(),
            top: "70px".to_string(),
        }))
        .unwrap();

    let reopened = LayoutStore::open(BrowserStorage::open().expect("localStorage"), &config());
    assert_eq!(reopened.document(), store.document());

    store.clear_all().unwrap();
    assert_eq!(store.storage().get("moodBoardTest").unwrap(), None);
}
