use yahoozy_core::{Roster, RosterError};

#[test]
fn names_are_trimmed_on_add() {
    let mut roster = Roster::new();
    roster.add("  Ada  ").unwrap();
    assert_eq!(roster.names(), ["Ada"]);
}

#[test]
fn empty_and_whitespace_names_are_rejected() {
    let mut roster = Roster::new();
    assert_eq!(roster.add(""), Err(RosterError::EmptyName));
    assert_eq!(roster.add("   "), Err(RosterError::EmptyName));
    assert!(roster.is_empty());
}

#[test]
fn duplicate_names_are_rejected() {
    let mut roster = Roster::new();
    roster.add("Ada").unwrap();
    assert_eq!(roster.add("Ada"), Err(RosterError::DuplicateName));
    assert_eq!(roster.add(" Ada "), Err(RosterError::DuplicateName));
    assert_eq!(roster.len(), 1);
}

#[test]
fn reserved_characters_are_rejected() {
    let mut roster = Roster::new();
    assert_eq!(roster.add("A\nda"), Err(RosterError::UnsupportedChar));
    assert_eq!(roster.add("A\x1fda"), Err(RosterError::UnsupportedChar));
}

#[test]
fn renaming_to_the_current_name_is_allowed() {
    let mut roster = Roster::new();
    roster.add("Ada").unwrap();
    roster.add("Grace").unwrap();

    roster.rename(0, "Ada").unwrap();
    assert_eq!(roster.rename(1, "Ada"), Err(RosterError::DuplicateName));
    roster.rename(1, "Edsger").unwrap();
    assert_eq!(roster.names(), ["Ada", "Edsger"]);
}

#[test]
fn removal_returns_the_name() {
    let mut roster = Roster::new();
    roster.add("Ada").unwrap();
    assert_eq!(roster.remove(0), Some("Ada".to_string()));
    assert_eq!(roster.remove(0), None);
}

#[test]
fn fresh_players_have_empty_sheets_in_roster_order() {
    let mut roster = Roster::new();
    roster.add("Ada").unwrap();
    roster.add("Grace").unwrap();

    let players = roster.fresh_players();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Ada");
    assert_eq!(players[1].name, "Grace");
    assert!(players.iter().all(|p| p.sheet.is_empty()));

    // The roster itself is reusable for the next game.
    assert_eq!(roster.len(), 2);
}
