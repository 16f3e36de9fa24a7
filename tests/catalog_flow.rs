//! End-to-end flows driven through `handle_event`.

use std::io::Write;

use chrono::{Duration, Utc};
use zicons::app::{pages, DrawerState};
use zicons::catalog::{load_registry, IconRegistry};
use zicons::clipboard::{copy, ClipboardMode, SnippetKind};
use zicons::domain::{Glyph, IconEntry};
use zicons::search::{filter, Grouper, GroupingPolicy};
use zicons::{handle_event, Action, AppState, Config, Event, InputMode, ZiconsError};

fn registry(names: &[&str]) -> IconRegistry {
    let entries: Vec<IconEntry> = names
        .iter()
        .map(|name| IconEntry::new(*name, Glyph::new("◆")))
        .collect();
    IconRegistry::load(&entries, 800).unwrap()
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn search(state: &mut AppState, query: &str) {
    send(state, Event::SearchMode);
    for c in query.chars() {
        send(state, Event::Char(c));
    }
}

fn names(entries: &[IconEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Runs a copy action the way the plugin shim does.
fn run_copy(state: &mut AppState, actions: Vec<Action>, mode: ClipboardMode) {
    let mut clipboard = mode.build();
    for action in actions {
        if let Action::CopyToClipboard { payload } = action {
            let outcome = copy(clipboard.as_mut(), &payload);
            send(state, Event::from(outcome));
        }
    }
}

#[test]
fn h_query_groups_under_one_letter() {
    let registry = registry(&["Home", "House", "Heart", "Star"]);

    let filtered = filter(registry.entries(), "h");
    assert_eq!(names(&filtered), vec!["Home", "House", "Heart"]);

    let display = Grouper::new(&registry).group(&filtered, &GroupingPolicy::Alphabetical);
    assert_eq!(display.labels(), vec!["H"]);
    assert_eq!(names(display.get("H").unwrap()), vec!["Home", "House", "Heart"]);
}

#[test]
fn five_entries_split_one_two_two() {
    let registry = registry(&["A", "B", "C", "D", "E"]);
    let display = Grouper::new(&registry).group(registry.entries(), &GroupingPolicy::FeatureSplit);

    assert_eq!(names(display.get("Featured").unwrap()), vec!["A"]);
    assert_eq!(names(display.get("Secondary").unwrap()), vec!["B", "C"]);
    assert_eq!(names(display.get("Standard").unwrap()), vec!["D", "E"]);
}

#[test]
fn unknown_name_is_not_found_and_route_shows_placeholder() {
    let mut state = AppState::new(registry(&["Home", "Star"]));

    assert!(matches!(
        state.registry.get("Nonexistent"),
        Err(ZiconsError::NotFound(_))
    ));

    send(&mut state, Event::Navigate("/collection/Nonexistent".to_string()));
    assert_eq!(state.missing_route.as_deref(), Some("Nonexistent"));
    assert!(!state.detail.is_open());

    let vm = state.compute_viewmodel(40, 100);
    let drawer = vm.drawer.expect("placeholder drawer");
    assert!(drawer.is_missing);
}

#[test]
fn failed_copy_leaves_query_and_selection_alone() {
    let mut state = AppState::new(registry(&["Home", "House", "Star"]));
    search(&mut state, "ho");
    send(&mut state, Event::FocusResults);
    send(&mut state, Event::Activate);
    let selected = state.detail.selection().selected().cloned();
    let filtered = state.filtered.clone();

    let actions = send(&mut state, Event::CopySnippet(SnippetKind::Name));
    run_copy(&mut state, actions, ClipboardMode::Off);

    assert_eq!(state.query, "ho");
    assert_eq!(state.detail.selection().selected().cloned(), selected);
    assert_eq!(state.filtered, filtered);
    let notice = state.notices.current().expect("error notice");
    assert!(notice.message.starts_with("Copy failed"));
}

#[test]
fn successful_copy_shows_notice_until_expiry() {
    let mut state = AppState::new(registry(&["Home"]));
    let actions = send(&mut state, Event::CopySnippet(SnippetKind::Jsx));
    assert_eq!(
        actions,
        vec![Action::CopyToClipboard {
            payload: "<Home />".to_string()
        }]
    );

    run_copy(&mut state, actions, ClipboardMode::Osc52);
    assert!(state.notices.current().is_some());

    let later = Utc::now() + Duration::seconds(60);
    let (render, _) = handle_event(&mut state, &Event::Tick { now: later }).unwrap();
    assert!(render);
    assert!(state.notices.current().is_none());
}

#[test]
fn selection_survives_filtering_it_out() {
    let mut state = AppState::new(registry(&["Home", "Star"]));
    send(&mut state, Event::Activate);
    assert_eq!(state.detail.selection().selected().unwrap().name, "Home");

    search(&mut state, "star");
    assert_eq!(names(&state.filtered), vec!["Star"]);
    assert_eq!(state.detail.selection().selected().unwrap().name, "Home");
}

#[test]
fn pages_share_query_and_selection() {
    let mut state = AppState::new(registry(&["Home", "House", "Star"]));
    search(&mut state, "ho");
    send(&mut state, Event::FocusResults);
    send(&mut state, Event::Activate);

    for _ in 0..state.pages.len() {
        send(&mut state, Event::NextPage);
        assert_eq!(state.query, "ho");
        assert_eq!(names(&state.filtered), vec!["Home", "House"]);
        assert_eq!(state.detail.selection().selected().unwrap().name, "Home");
    }
    assert_eq!(state.current_page().id, pages::DETAIL_PAGE);
}

#[test]
fn route_page_activation_opens_catalog_drawer() {
    let mut state = AppState::new(registry(&["Home", "Star"]));
    let broadsheet = pages::position(&state.pages, "broadsheet").unwrap();
    state.switch_page(broadsheet);

    send(&mut state, Event::KeyDown);
    send(&mut state, Event::Activate);

    assert_eq!(state.current_page().id, pages::DETAIL_PAGE);
    assert!(state.detail.is_open());
    assert_eq!(state.detail.selection().selected().unwrap().name, "Star");
}

#[test]
fn escape_from_search_results_closes_drawer_then_clears_query() {
    let mut state = AppState::new(registry(&["Home", "House", "Star"]));
    search(&mut state, "h");
    send(&mut state, Event::FocusResults);
    send(&mut state, Event::Activate);
    assert!(state.detail.is_open());

    // Esc while browsing results arrives as ExitSearch.
    send(&mut state, Event::ExitSearch);
    assert!(!state.detail.is_open());
    assert_eq!(state.query, "h");

    send(&mut state, Event::ExitSearch);
    assert!(state.query.is_empty());
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn copying_on_flat_page_moves_catalog_drawer() {
    let mut state = AppState::new(registry(&["Home", "Star"]));
    send(&mut state, Event::Activate);
    assert_eq!(state.detail.selection().selected().unwrap().name, "Home");

    let daily = pages::position(&state.pages, "daily").unwrap();
    state.switch_page(daily);
    send(&mut state, Event::KeyDown);
    send(&mut state, Event::Activate);

    let catalog = pages::position(&state.pages, pages::DETAIL_PAGE).unwrap();
    state.switch_page(catalog);

    let selected = state.detail.selection().selected().map(|e| e.name.clone());
    let drawer = match state.detail.drawer() {
        DrawerState::Open(entry) => Some(entry.name.clone()),
        DrawerState::Closed => None,
    };
    assert_eq!(selected.as_deref(), Some("Star"));
    assert_eq!(drawer, selected);
    assert_eq!(state.copy_target().unwrap().name, "Star");
}

#[test]
fn catalog_file_with_config_round_trip() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[[icons]]\nname = \"Anchor\"\nglyph = \"⚓\"\n\n[[icons]]\nname = \"Bolt\"\nglyph = \"⚡\""
    )
    .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let registry = load_registry(Some(&path), 800);
    assert_eq!(names(registry.entries()), vec!["Anchor", "Bolt"]);

    let config = Config {
        catalog_file: Some(path),
        route: Some("/collection/Bolt".to_string()),
        ..Config::default()
    };
    let state = zicons::initialize(&config);
    assert_eq!(state.detail.selection().selected().unwrap().name, "Bolt");

    let vm = state.compute_viewmodel(40, 100);
    let drawer = vm.drawer.unwrap();
    assert_eq!(drawer.title, "Bolt");
    assert!(drawer
        .snippets
        .iter()
        .any(|line| line.value == "import { Bolt } from 'lucide-react';"));
}
