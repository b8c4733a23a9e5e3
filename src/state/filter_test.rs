use super::*;

// =============================================================
// Helpers
// =============================================================

fn activity(description: &str, schedule: &str, max: u32, taken: usize) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants: max,
        participants: (0..taken).map(|i| format!("p{i}@x.com")).collect(),
        category: None,
        time: None,
    }
}

fn with_category(mut activity: Activity, category: &str) -> Activity {
    activity.category = Some(category.to_owned());
    activity
}

fn with_time(mut activity: Activity, time: &str) -> Activity {
    activity.time = Some(time.to_owned());
    activity
}

fn chess_catalog() -> Catalog {
    Catalog::from_entries([(
        "Chess Club".to_owned(),
        Activity {
            description: "d".to_owned(),
            schedule: "Mon 3pm".to_owned(),
            max_participants: 5,
            participants: vec!["a@x.com".to_owned()],
            category: None,
            time: None,
        },
    )])
}

fn school_catalog() -> Catalog {
    Catalog::from_entries([
        ("Programming Class".to_owned(), activity("Learn Python", "Tuesdays 3:30 PM", 20, 2)),
        ("Chess Club".to_owned(), activity("Strategy games", "Fridays 3:30 PM", 12, 10)),
        ("art club".to_owned(), activity("Painting and drawing", "Mondays 4:00 PM", 15, 1)),
        ("Gym Class".to_owned(), activity("Physical education", "Mondays, Wednesdays 2:00 PM", 30, 25)),
    ])
}

fn names(visible: &[(&str, &Activity)]) -> Vec<String> {
    visible.iter().map(|(name, _)| (*name).to_owned()).collect()
}

fn filter_with(search: &str, sort: SortMode) -> FilterState {
    FilterState { search: search.to_owned(), sort, category: None }
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_search_shows_every_activity() {
    let catalog = chess_catalog();
    let visible = visible_activities(&catalog, &FilterState::default());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].1.spots_left(), 4);
}

#[test]
fn search_is_case_insensitive_on_name() {
    let catalog = chess_catalog();
    assert_eq!(names(&visible_activities(&catalog, &filter_with("chess", SortMode::NameAsc))), vec!["Chess Club"]);
    assert_eq!(names(&visible_activities(&catalog, &filter_with("CHESS", SortMode::NameAsc))), vec!["Chess Club"]);
}

#[test]
fn search_without_match_is_empty() {
    let catalog = chess_catalog();
    assert!(visible_activities(&catalog, &filter_with("robotics", SortMode::NameAsc)).is_empty());
}

#[test]
fn search_matches_description_and_schedule() {
    let catalog = school_catalog();
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("python", SortMode::NameAsc))),
        vec!["Programming Class"]
    );
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("mondays", SortMode::NameAsc))),
        vec!["art club", "Gym Class"]
    );
}

#[test]
fn search_includes_exactly_the_matching_entries() {
    let catalog = school_catalog();
    for query in ["", "a", "club", "3:30", "PM", "xyz", "s G"] {
        let filter = filter_with(query, SortMode::Unsorted);
        let visible = visible_activities(&catalog, &filter);
        let needle = query.to_lowercase();
        let expected: Vec<String> = catalog
            .iter()
            .filter(|(name, a)| {
                name.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
                    || a.schedule.to_lowercase().contains(&needle)
            })
            .map(|(name, _)| name.to_owned())
            .collect();
        assert_eq!(names(&visible), expected, "query {query:?}");
        for (name, a) in &visible {
            assert!(filter.matches(name, a));
        }
    }
}

#[test]
fn has_search_text_tracks_query() {
    assert!(!FilterState::default().has_search_text());
    assert!(filter_with("x", SortMode::NameAsc).has_search_text());
}

// =============================================================
// Category filter
// =============================================================

#[test]
fn category_filter_requires_exact_match() {
    let catalog = Catalog::from_entries([
        ("Soccer".to_owned(), with_category(activity("d", "s", 10, 0), "Sports")),
        ("Band".to_owned(), with_category(activity("d", "s", 10, 0), "Arts")),
        ("Debate".to_owned(), activity("d", "s", 10, 0)),
    ]);
    let mut filter = FilterState { category: Some("Sports".to_owned()), ..FilterState::default() };
    assert_eq!(names(&visible_activities(&catalog, &filter)), vec!["Soccer"]);

    filter.category = Some("sports".to_owned());
    assert!(visible_activities(&catalog, &filter).is_empty());

    filter.category = None;
    assert_eq!(visible_activities(&catalog, &filter).len(), 3);
}

#[test]
fn category_options_are_distinct_and_sorted() {
    let catalog = Catalog::from_entries([
        ("Soccer".to_owned(), with_category(activity("d", "s", 10, 0), "Sports")),
        ("Band".to_owned(), with_category(activity("d", "s", 10, 0), "arts")),
        ("Swim".to_owned(), with_category(activity("d", "s", 10, 0), "Sports")),
        ("Debate".to_owned(), activity("d", "s", 10, 0)),
    ]);
    assert_eq!(category_options(&catalog), vec!["arts".to_owned(), "Sports".to_owned()]);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn name_sort_is_case_insensitive() {
    let catalog = school_catalog();
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("", SortMode::NameAsc))),
        vec!["art club", "Chess Club", "Gym Class", "Programming Class"]
    );
}

#[test]
fn name_desc_mirrors_name_asc() {
    let catalog = school_catalog();
    let mut asc = names(&visible_activities(&catalog, &filter_with("", SortMode::NameAsc)));
    let desc = names(&visible_activities(&catalog, &filter_with("", SortMode::NameDesc)));
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn spots_most_and_least_are_reversed_for_distinct_counts() {
    let catalog = school_catalog();
    let most = names(&visible_activities(&catalog, &filter_with("", SortMode::SpotsMost)));
    let mut least = names(&visible_activities(&catalog, &filter_with("", SortMode::SpotsLeast)));
    assert_eq!(most, vec!["Programming Class", "art club", "Gym Class", "Chess Club"]);
    least.reverse();
    assert_eq!(most, least);
}

#[test]
fn spots_sort_keeps_catalog_order_on_ties() {
    let catalog = Catalog::from_entries([
        ("B".to_owned(), activity("d", "s", 5, 1)),
        ("A".to_owned(), activity("d", "s", 4, 0)),
        ("C".to_owned(), activity("d", "s", 9, 0)),
    ]);
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("", SortMode::SpotsMost))),
        vec!["C", "B", "A"]
    );
}

#[test]
fn unsorted_mode_keeps_catalog_order() {
    let catalog = school_catalog();
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("", SortMode::Unsorted))),
        vec!["Programming Class", "Chess Club", "art club", "Gym Class"]
    );
}

#[test]
fn time_sort_orders_parsed_times_and_trails_unparsed() {
    let catalog = Catalog::from_entries([
        ("Late".to_owned(), with_time(activity("d", "s", 5, 0), "2024-09-02T18:00:00Z")),
        ("Unknown".to_owned(), with_time(activity("d", "s", 5, 0), "after lunch")),
        ("Early".to_owned(), with_time(activity("d", "s", 5, 0), "2024-09-02 08:00")),
        ("Missing".to_owned(), activity("d", "s", 5, 0)),
    ]);
    assert_eq!(
        names(&visible_activities(&catalog, &filter_with("", SortMode::Time))),
        vec!["Early", "Late", "Unknown", "Missing"]
    );
}

#[test]
fn compare_unsorted_is_always_equal() {
    let a = activity("d", "s", 1, 0);
    let b = activity("d", "s", 9, 0);
    assert_eq!(compare(SortMode::Unsorted, ("Z", &a), ("A", &b)), Ordering::Equal);
}

#[test]
fn locale_compare_breaks_case_ties_deterministically() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
    assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
}

// =============================================================
// SortMode values
// =============================================================

#[test]
fn sort_mode_round_trips_select_values() {
    for (mode, _) in SortMode::OPTIONS {
        assert_eq!(SortMode::from_value(mode.value()), mode);
    }
}

#[test]
fn sort_mode_accepts_name_alias_and_flags_unknown() {
    assert_eq!(SortMode::from_value("name"), SortMode::NameAsc);
    assert_eq!(SortMode::from_value("popularity"), SortMode::Unsorted);
    assert_eq!(SortMode::default(), SortMode::NameAsc);
}
