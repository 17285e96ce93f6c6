mod common;

use assert2::check;
use common::{ids, names, scenario_catalog};
use robot_catalog_search::{
    CatalogEntry, create_search_index, fuzzy_search, search_robots_client_side,
};
use rstest::rstest;

// --- Scenario Tests ---

#[rstest]
#[case("pupp", "Pupper v3")]
#[case("quadruped", "Pupper v3")]
#[case("v3", "Pupper v3")]
#[case("so-101", "SO-101")]
#[case("amazng hand", "Amazing Hand")]
#[case("kiwi", "LeKiwi")]
fn search_ranks_expected_robot_first(
    scenario_catalog: Vec<CatalogEntry>,
    #[case] query: &str,
    #[case] expected: &str,
) {
    let results = search_robots_client_side(&scenario_catalog, query, None);
    check!(!results.is_empty(), "No results for '{}'", query);
    check!(names(&results)[0] == expected, "Unexpected order for '{}': {:?}", query, names(&results));
}

#[rstest]
fn search_educational_includes_both_spellings(scenario_catalog: Vec<CatalogEntry>) {
    let results = search_robots_client_side(&scenario_catalog, "educational", None);
    let found = names(&results);
    check!(found.contains(&"LeKiwi"));
    check!(found.contains(&"Pupper v3"));
}

#[rstest]
fn search_unknown_term_is_empty(scenario_catalog: Vec<CatalogEntry>) {
    check!(search_robots_client_side(&scenario_catalog, "nonexistentrobot", None).is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("-_.")]
fn search_empty_query_is_empty(scenario_catalog: Vec<CatalogEntry>, #[case] query: &str) {
    check!(search_robots_client_side(&scenario_catalog, query, None).is_empty());
    check!(fuzzy_search(&scenario_catalog, query, 10).is_empty());
}

#[rstest]
#[case("so-100")]
#[case("pupper")]
#[case("")]
fn search_empty_collection_is_empty(#[case] query: &str) {
    check!(search_robots_client_side(&[], query, None).is_empty());
}

// --- Separator Invariance ---

#[rstest]
fn search_ignores_separators(scenario_catalog: Vec<CatalogEntry>) {
    let reference = search_robots_client_side(&scenario_catalog, "SO-100", None);
    check!(names(&reference)[0] == "SO-100");

    for query in ["so-100", "so100", "so 100", "so_100", "So.100"] {
        let results = search_robots_client_side(&scenario_catalog, query, None);
        check!(ids(&results) == ids(&reference), "Query '{}' diverged", query);
    }
}

// --- Exact-Match Promotion ---

#[test]
fn search_exact_match_ranks_first() {
    let entries = vec![
        CatalogEntry::new("1", "SO-100"),
        CatalogEntry::new("2", "SO-101"),
        CatalogEntry::new("3", "Pupper v3"),
    ];
    check!(search_robots_client_side(&entries, "SO-100", None)[0].name == "SO-100");
}

#[test]
fn search_exact_name_beats_higher_fuzzy_score() {
    let entries = vec![
        CatalogEntry::new("bot", "Walker Bot")
            .with_slug("walker-bot")
            .with_description("walker")
            .with_tags(["walker"]),
        CatalogEntry::new("walker", "Walker"),
    ];

    // Matching in every field outscores the plain name match...
    check!(ids(&fuzzy_search(&entries, "walker", 10)) == ["bot", "walker"]);
    // ...but the literal name match is promoted.
    check!(ids(&search_robots_client_side(&entries, "walker", None)) == ["walker", "bot"]);
}

#[test]
fn search_exact_slug_is_promoted() {
    let entries = vec![
        CatalogEntry::new("1", "Hexapod Walker Mk2").with_slug("hexapod-walker-mk2"),
        CatalogEntry::new("2", "Spider").with_slug("hexapod"),
    ];
    check!(ids(&search_robots_client_side(&entries, "hexapod", None))[0] == "2");
}

#[test]
fn search_never_returns_duplicates() {
    let entries = vec![
        CatalogEntry::new("1", "Rover").with_slug("rover"),
        CatalogEntry::new("2", "Rover Mini").with_slug("rover-mini"),
    ];
    let results = search_robots_client_side(&entries, "rover", None);
    check!(ids(&results) == ["1", "2"]);
}

// --- Field Precedence ---

#[test]
fn search_name_outranks_description() {
    let entries = vec![
        CatalogEntry::new("1", "Gripper Kit").with_description("An amazing little gripper"),
        CatalogEntry::new("2", "Amazing Hand"),
    ];
    check!(search_robots_client_side(&entries, "Amazing", None)[0].name == "Amazing Hand");
}

#[test]
fn search_missing_fields_are_tolerated() {
    let entries = vec![CatalogEntry::new("1", ""), CatalogEntry::new("2", "Biped")];
    check!(ids(&search_robots_client_side(&entries, "biped", None)) == ["2"]);
}

// --- Limits ---

#[rstest]
#[case(Some(0), 0)]
#[case(Some(2), 2)]
#[case(None, 8)]
fn search_respects_limit(#[case] limit: Option<usize>, #[case] expected: usize) {
    let entries: Vec<CatalogEntry> = (0..12)
        .map(|i| CatalogEntry::new(format!("r{}", i), format!("Rover {}", i)))
        .collect();
    check!(search_robots_client_side(&entries, "rover", limit).len() == expected);
}

#[test]
fn search_exact_matches_can_crowd_out_fuzzy_results() {
    let entries = vec![
        CatalogEntry::new("1", "Hexapod Mini"),
        CatalogEntry::new("2", "Hexapod"),
        CatalogEntry::new("3", "hexapod"),
    ];
    check!(ids(&search_robots_client_side(&entries, "hexapod", Some(2))) == ["2", "3"]);
}

// --- Index Reuse ---

#[rstest]
fn search_prebuilt_index_matches_one_shot(scenario_catalog: Vec<CatalogEntry>) {
    let index = create_search_index(&scenario_catalog);
    for query in ["pupp", "so100", "educational", "arm", "hand", "nonexistentrobot"] {
        check!(
            index.search_robots(query, None) == search_robots_client_side(&scenario_catalog, query, None),
            "Query '{}' diverged",
            query
        );
    }
}

#[rstest]
fn search_does_not_modify_entries(scenario_catalog: Vec<CatalogEntry>) {
    let before = scenario_catalog.clone();
    let results = search_robots_client_side(&scenario_catalog, "pupper", None);
    check!(scenario_catalog == before);
    check!(results[0] == before[2]);
}
