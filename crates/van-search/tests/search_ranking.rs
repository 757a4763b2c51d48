//! Ranking properties of the relevance search.

use pretty_assertions::assert_eq;
use rstest::rstest;
use van_core::catalog::Catalog;
use van_core::entities::{System, Task};
use van_search::{RelevanceIndex, SearchOptions};

fn system(id: &str, name: &str) -> System {
    System {
        id: id.into(),
        name: name.into(),
        description: "description".into(),
        category: "Power".into(),
        icon: None,
        synonyms: Vec::new(),
        safety_notes: Vec::new(),
        declared_status: None,
    }
}

fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        system_id: "sys".into(),
        linked_system_ids: Vec::new(),
        keywords: Vec::new(),
        steps: Vec::new(),
        safety_warnings: Vec::new(),
    }
}

fn fixture_catalog() -> Catalog {
    let mut gas = system("gas-storage", "Gas Storage");
    gas.synonyms = vec!["lpg".into(), "propane".into(), "butane".into()];
    gas.safety_notes = vec!["Close cylinder valves before driving".into()];

    let mut fridge = system("fridge-3way", "3-Way Fridge");
    fridge.synonyms = vec!["refrigerator".into(), "cooler".into()];
    fridge.safety_notes = vec![
        "Turn off gas supply to fridge before refuelling".into(),
        "Never use gas mode in enclosed spaces".into(),
    ];

    let mut heating = system("alde-heating", "Alde Wet Heating");
    heating.synonyms = vec!["central heating".into(), "hot water".into()];

    let mut change_bottle = task("change-gas-bottle", "Change the gas bottle");
    change_bottle.keywords = vec!["cylinder".into(), "regulator".into()];
    change_bottle.steps = vec![
        "Close the valve on the empty cylinder".into(),
        "Unscrew the pigtail hose".into(),
    ];
    change_bottle.safety_warnings = vec!["No smoking while changing cylinders".into()];

    Catalog::new(
        vec![gas, fridge, heating],
        vec![change_bottle, task("tune-tv", "Tune the TV")],
    )
    .unwrap()
}

#[rstest]
#[case("")]
#[case("g")]
#[case(" ")]
#[case("\t x ")]
fn queries_below_two_chars_return_empty(#[case] query: &str) {
    let catalog = fixture_catalog();
    let index = RelevanceIndex::new(&catalog);
    assert!(index.search(query).is_empty());
}

#[test]
fn search_is_deterministic_and_order_stable() {
    let catalog = fixture_catalog();
    let index = RelevanceIndex::new(&catalog);

    let first: Vec<(String, u32)> = index
        .search("gas")
        .iter()
        .map(|h| (h.record.id().to_string(), h.score))
        .collect();
    let second: Vec<(String, u32)> = index
        .search("gas")
        .iter()
        .map(|h| (h.record.id().to_string(), h.score))
        .collect();

    assert_eq!(first, second, "identical inputs must yield identical output");
    assert!(!first.is_empty());
}

#[test]
fn name_match_outranks_safety_note_match() {
    // "Gas Storage" matches in name (10 + 3); the fridge only matches in
    // safety notes (2 per entry). Otherwise comparable records.
    let catalog = fixture_catalog();
    let index = RelevanceIndex::new(&catalog);
    let hits = index.search("gas");

    let gas_pos = hits
        .iter()
        .position(|h| h.record.id() == "gas-storage")
        .expect("gas-storage should match");
    let fridge_pos = hits
        .iter()
        .position(|h| h.record.id() == "fridge-3way")
        .expect("fridge should match via safety notes");
    assert!(
        gas_pos < fridge_pos,
        "name hit must outrank safety-note-only hit"
    );
}

#[test]
fn adding_a_synonym_surfaces_a_previously_unmatched_record() {
    let plain = system("alarm-system", "Alarm");
    let catalog = Catalog::new(vec![plain.clone()], Vec::new()).unwrap();
    let index = RelevanceIndex::new(&catalog);
    assert!(
        index.search("siren").is_empty(),
        "record should score 0 before the synonym exists"
    );

    let mut with_synonym = plain;
    with_synonym.synonyms = vec!["siren".into()];
    let catalog = Catalog::new(vec![with_synonym], Vec::new()).unwrap();
    let index = RelevanceIndex::new(&catalog);
    let hits = index.search("siren");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 0);
}

#[test]
fn adding_a_keyword_surfaces_a_previously_unmatched_task() {
    let plain = task("empty-cassette", "Empty the toilet cassette");
    let catalog = Catalog::new(Vec::new(), vec![plain.clone()]).unwrap();
    let index = RelevanceIndex::new(&catalog);
    assert!(index.search("chemical").is_empty());

    let mut with_keyword = plain;
    with_keyword.keywords = vec!["chemical fluid".into()];
    let catalog = Catalog::new(Vec::new(), vec![with_keyword]).unwrap();
    let index = RelevanceIndex::new(&catalog);
    assert_eq!(index.search("chemical").len(), 1);
}

#[test]
fn tasks_rank_alongside_systems() {
    let catalog = fixture_catalog();
    let index = RelevanceIndex::new(&catalog);
    let hits = index.search("gas");

    // Task title "Change the gas bottle" scores a full-query plus word hit;
    // it must beat the fridge's safety-note-only score.
    let task_pos = hits
        .iter()
        .position(|h| h.record.id() == "change-gas-bottle")
        .expect("task should match");
    let fridge_pos = hits
        .iter()
        .position(|h| h.record.id() == "fridge-3way")
        .unwrap();
    assert!(task_pos < fridge_pos);
}

#[test]
fn display_cap_truncates_after_ranking() {
    let catalog = fixture_catalog();
    let index = RelevanceIndex::new(&catalog);
    let all = index.search("gas");
    let capped = index.search_with(
        "gas",
        &SearchOptions {
            max_results: Some(2),
        },
    );
    assert!(all.len() > 2);
    assert_eq!(capped.len(), 2);
    assert_eq!(capped[0].record.id(), all[0].record.id());
    assert_eq!(capped[1].record.id(), all[1].record.id());
}
