//! Frame output for representative session states.

use mlaunch::app::SessionState;
use mlaunch::domain::{AppEntry, Catalog, SourceKind};
use mlaunch::ui::render;
use mlaunch::Config;

const REVERSE: &str = "\u{1b}[7m";
const BLINK: &str = "\u{1b}[5m";

fn catalog() -> Catalog {
    Catalog::new(vec![
        AppEntry::from_file_name("Files.desktop", SourceKind::Native).unwrap(),
        AppEntry::from_file_name("org.gimp.GIMP.desktop", SourceKind::Flatpak).unwrap(),
    ])
}

fn frame(state: &mut SessionState<'_>, rows: usize, cols: usize) -> String {
    String::from_utf8(render(state, rows, cols, &Config::default()).unwrap()).unwrap()
}

#[test]
fn highlighted_row_is_reversed() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);

    let out = frame(&mut state, 24, 80);

    assert!(out.contains(&format!("{REVERSE}    Files")));
    assert!(out.contains("[F] org.gimp.GIMP"));
    assert!(!out.contains(&format!("{REVERSE}[F]")));
}

#[test]
fn title_shows_counts_and_help_is_drawn() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);
    state.push_char('g');

    let out = frame(&mut state, 24, 80);

    assert!(out.contains(" m (1/2) "));
    assert!(out.contains("UP/DOWN:Navigate Enter:Start ESC/q:Quit"));
}

#[test]
fn cursor_blinks_only_after_typing() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);
    assert!(!frame(&mut state, 24, 80).contains(BLINK));

    state.push_char('f');
    let out = frame(&mut state, 24, 80);
    assert!(out.contains(&format!("Search: f{BLINK}_")));
}

#[test]
fn no_matches_message() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);
    state.push_char('x');

    let out = frame(&mut state, 24, 80);

    assert!(out.contains("No matches"));
    assert!(!out.contains(REVERSE));
}

#[test]
fn long_names_are_cut_to_the_box() {
    let long = format!("{}.desktop", "x".repeat(200));
    let catalog = Catalog::new(vec![AppEntry::from_file_name(&long, SourceKind::Native).unwrap()]);
    let mut state = SessionState::new(&catalog);

    let out = frame(&mut state, 24, 80);

    assert!(!out.contains(&"x".repeat(57)));
    assert!(out.contains(&"x".repeat(52)));
}

#[test]
fn small_terminal_scrolls_to_highlight() {
    let names: Vec<AppEntry> = (0..10)
        .filter_map(|i| AppEntry::from_file_name(&format!("app{i}.desktop"), SourceKind::Native))
        .collect();
    let catalog = Catalog::new(names);
    let mut state = SessionState::new(&catalog);
    for _ in 0..9 {
        state.move_down();
    }

    // 9 rows: box height 7, three list rows.
    let out = frame(&mut state, 9, 40);

    assert_eq!(state.offset(), 7);
    assert!(out.contains(&format!("{REVERSE}    app9")));
    assert!(!out.contains("app6"));
}

#[test]
fn six_row_terminal_still_shows_the_highlight() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);

    let out = frame(&mut state, 6, 40);

    assert!(out.contains("Search: "));
    assert!(out.contains(&format!("{REVERSE}    Files")));
}

#[test]
fn two_row_terminal_draws_only_borders() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);

    let out = frame(&mut state, 2, 40);

    assert!(!out.contains("Search: "));
    assert!(!out.contains('├'));
    assert!(!out.contains("Files"));
}

#[test]
fn very_narrow_terminal_draws_no_interior_lines() {
    let catalog = catalog();
    let mut state = SessionState::new(&catalog);

    let out = frame(&mut state, 24, 3);

    assert!(!out.contains('│'));
    assert!(!out.contains("Files"));
}
