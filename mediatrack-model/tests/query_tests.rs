use mediatrack_model::{project, Filter, ViewQuery};
use mediatrack_types::{ItemId, MediaItem, MediaType, Status, Total};

fn make_item(id: &str, title: &str, media_type: MediaType) -> MediaItem {
    MediaItem {
        id: ItemId::from(id),
        title: title.into(),
        media_type,
        status: Status::Plan,
        current: 0,
        total: Total::Unbounded,
    }
}

fn titles(items: &[&MediaItem]) -> Vec<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

fn sample() -> Vec<MediaItem> {
    vec![
        make_item("1", "Naruto", MediaType::anime()),
        make_item("2", "One Piece", MediaType::manga()),
    ]
}

#[test]
fn filter_by_type() {
    let items = sample();
    let visible = project(&items, &Filter::Type(MediaType::anime()), "");
    assert_eq!(titles(&visible), vec!["Naruto"]);
}

#[test]
fn search_is_case_insensitive() {
    let items = sample();
    let visible = project(&items, &Filter::All, "one");
    assert_eq!(titles(&visible), vec!["One Piece"]);

    let visible = project(&items, &Filter::All, "NARU");
    assert_eq!(titles(&visible), vec!["Naruto"]);
}

#[test]
fn filter_and_search_combine() {
    let items = sample();
    assert!(project(&items, &Filter::Type(MediaType::anime()), "piece").is_empty());
}

#[test]
fn empty_collection_projects_empty() {
    assert!(project(&[], &Filter::All, "").is_empty());
}

#[test]
fn results_are_sorted_by_title() {
    let items = vec![
        make_item("1", "vinland Saga", MediaType::manga()),
        make_item("2", "Berserk", MediaType::manga()),
        make_item("3", "akira", MediaType::manga()),
        make_item("4", "Monster", MediaType::manga()),
    ];
    let visible = project(&items, &Filter::All, "");
    assert_eq!(titles(&visible), vec!["akira", "Berserk", "Monster", "vinland Saga"]);
}

#[test]
fn equal_titles_keep_collection_order() {
    let items = vec![
        make_item("b", "Hunter x Hunter", MediaType::manga()),
        make_item("a", "Hunter x Hunter", MediaType::anime()),
    ];
    let visible = project(&items, &Filter::All, "");
    let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn unknown_type_filter_matches_nothing() {
    let items = sample();
    let filter: Filter = "novel".parse().unwrap();
    assert!(project(&items, &filter, "").is_empty());
}

#[test]
fn view_query_applies_and_reports_empty_message() {
    let items = sample();
    let query = ViewQuery::new(Filter::All, "one");
    assert_eq!(query.apply(&items).len(), 1);
    assert_eq!(query.empty_message(), "Add your first media to get started!");

    let query = ViewQuery::new(Filter::Type(MediaType::manhwa()), "");
    assert_eq!(query.empty_message(), "Add your first manhwa to get started!");
}

#[test]
fn accented_titles_sort_with_their_base_letter() {
    let items = vec![
        make_item("1", "Zetman", MediaType::manga()),
        make_item("2", "Ébauche", MediaType::manga()),
        make_item("3", "apple", MediaType::manga()),
        make_item("4", "Ōkami", MediaType::manga()),
    ];
    let visible = project(&items, &Filter::All, "");
    assert_eq!(titles(&visible), vec!["apple", "Ébauche", "Ōkami", "Zetman"]);
}

#[test]
fn titles_differing_only_in_case_form_sort_deterministically() {
    let forward = vec![
        make_item("1", "\u{1C5}a", MediaType::manga()),
        make_item("2", "\u{1C6}a", MediaType::manga()),
    ];
    let backward: Vec<MediaItem> = forward.iter().rev().cloned().collect();
    assert_eq!(
        titles(&project(&forward, &Filter::All, "")),
        titles(&project(&backward, &Filter::All, ""))
    );
}

mod ordering_properties {
    use mediatrack_model::title_order;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    proptest! {
        #[test]
        fn equal_only_when_identical(a in "\\PC{0,6}", b in "\\PC{0,6}") {
            prop_assert_eq!(title_order(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn antisymmetric(a in "\\PC{0,6}", b in "\\PC{0,6}") {
            prop_assert_eq!(title_order(&a, &b), title_order(&b, &a).reverse());
        }

        #[test]
        fn transitive(a in "\\PC{0,4}", b in "\\PC{0,4}", c in "\\PC{0,4}") {
            if title_order(&a, &b) != Ordering::Greater && title_order(&b, &c) != Ordering::Greater {
                prop_assert_ne!(title_order(&a, &c), Ordering::Greater);
            }
        }
    }
}
