//! Integration test: catalog sorting, filtering, and trending aggregation.

use vrshop::app::Kiosk;
use vrshop::catalog::{Category, SortMode, CATALOG};
use vrshop::storage::MemoryStore;

fn kiosk() -> Kiosk {
    Kiosk::new(Box::new(MemoryStore::new()))
}

#[test]
fn test_alphabetical_sort_with_open_filter_is_lexicographic() {
    let mut kiosk = kiosk();
    kiosk.view.query.clear();
    kiosk.view.filter = None;
    kiosk.set_sort(SortMode::Alphabetical);

    let names: Vec<&str> = kiosk.view.visible().iter().map(|p| p.name).collect();
    assert_eq!(names.len(), CATALOG.len(), "Open filter shows every card");
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn test_popularity_sort_follows_shop_clicks() {
    let mut kiosk = kiosk();
    kiosk.record_shop_click("Prescription Lens Inserts");
    kiosk.record_shop_click("Prescription Lens Inserts");
    kiosk.record_shop_click("Wall Mount Storage Hook");

    kiosk.set_sort(SortMode::Popularity);
    let names: Vec<&str> = kiosk.view.visible().iter().map(|p| p.name).collect();
    assert_eq!(names[0], "Prescription Lens Inserts");
    assert_eq!(names[1], "Wall Mount Storage Hook");
}

#[test]
fn test_category_sort_groups_categories_lexicographically() {
    let mut kiosk = kiosk();
    kiosk.set_sort(SortMode::Category);

    let categories: Vec<&str> = kiosk
        .view
        .visible()
        .iter()
        .map(|p| p.category.name())
        .collect();
    let mut expected = categories.clone();
    expected.sort();
    assert_eq!(categories, expected);
}

#[test]
fn test_filter_survives_sort_changes() {
    let mut kiosk = kiosk();
    kiosk.view.filter = Some(Category::Controllers);
    kiosk.set_sort(SortMode::Alphabetical);
    assert!(kiosk
        .view
        .visible()
        .iter()
        .all(|p| p.category == Category::Controllers));

    kiosk.set_sort(SortMode::Default);
    assert!(kiosk
        .view
        .visible()
        .iter()
        .all(|p| p.category == Category::Controllers));
}

#[test]
fn test_search_matches_category_text() {
    let mut kiosk = kiosk();
    kiosk.view.query = "hygiene".to_string();
    let visible = kiosk.view.visible();
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.category == Category::Hygiene));
}

#[test]
fn test_trending_feeds_leaderboard_and_chart() {
    let mut kiosk = kiosk();
    for _ in 0..3 {
        kiosk.record_shop_click("Roto VR Explorer Chair");
    }
    kiosk.record_shop_click("KIWI Design K4 Mini Head Strap");

    let board = kiosk.trending.leaderboard();
    assert_eq!(board[0], ("Roto VR Explorer Chair", 3));

    let totals = kiosk.trending.category_totals();
    let chairs = totals
        .iter()
        .find(|(label, _)| *label == "Chairs & Mounts")
        .unwrap();
    assert_eq!(chairs.1, 3);
}
