use yahoozy_core::{AlreadyScored, Category, ScoreSheet};

fn sheet_with_upper(ones: u32, twos: u32, threes: u32, fours: u32, fives: u32, sixes: u32) -> ScoreSheet {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Ones, ones).unwrap();
    sheet.set(Category::Twos, twos).unwrap();
    sheet.set(Category::Threes, threes).unwrap();
    sheet.set(Category::Fours, fours).unwrap();
    sheet.set(Category::Fives, fives).unwrap();
    sheet.set(Category::Sixes, sixes).unwrap();
    sheet
}

#[test]
fn empty_sheet_totals_zero() {
    let sheet = ScoreSheet::new();
    assert_eq!(sheet.total(), 0);
    assert_eq!(sheet.len(), 0);
    assert!(!sheet.is_complete());
}

#[test]
fn bonus_triggers_at_exactly_63() {
    let sheet = sheet_with_upper(3, 6, 9, 12, 15, 18);
    assert_eq!(sheet.upper_sum(), 63);
    assert_eq!(sheet.total(), 113);
}

#[test]
fn no_bonus_at_62() {
    let sheet = sheet_with_upper(2, 6, 9, 12, 15, 18);
    assert_eq!(sheet.upper_sum(), 62);
    assert_eq!(sheet.total(), 62);
}

#[test]
fn lower_entries_never_feed_the_bonus() {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Chance, 30).unwrap();
    sheet.set(Category::Yatzy, 50).unwrap();
    assert_eq!(sheet.upper_sum(), 0);
    assert_eq!(sheet.total(), 80);
}

#[test]
fn scoring_a_category_twice_fails_and_changes_nothing() {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Chance, 17).unwrap();
    let err = sheet.set(Category::Chance, 30).unwrap_err();
    assert_eq!(err, AlreadyScored(Category::Chance));
    assert_eq!(sheet.get(Category::Chance), Some(17));
    assert_eq!(sheet.len(), 1);
}

#[test]
fn zero_score_is_recorded_not_skipped() {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Yatzy, 0).unwrap();
    assert!(sheet.contains(Category::Yatzy));
    assert_eq!(sheet.get(Category::Yatzy), Some(0));
    assert_eq!(sheet.total(), 0);
}

#[test]
fn sheet_completes_at_fifteen_entries() {
    use strum::IntoEnumIterator;
    let mut sheet = ScoreSheet::new();
    for (i, category) in Category::iter().enumerate() {
        assert!(!sheet.is_complete());
        sheet.set(category, i as u32).unwrap();
    }
    assert!(sheet.is_complete());
    assert_eq!(sheet.len(), 15);
}

#[test]
fn projected_total_previews_without_mutating() {
    let mut sheet = sheet_with_upper(2, 6, 9, 12, 15, 18); // upper 62, no bonus
    sheet.set(Category::Chance, 20).unwrap();
    assert_eq!(sheet.total(), 82);

    // One more point of Ones is impossible (already set); an unscored
    // lower category previews plainly...
    assert_eq!(sheet.projected_total(Category::Yatzy, 50), 132);
    // ...and the sheet itself is untouched.
    assert!(!sheet.contains(Category::Yatzy));
    assert_eq!(sheet.total(), 82);
}

#[test]
fn projected_total_can_cross_the_bonus_threshold() {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Twos, 6).unwrap();
    sheet.set(Category::Threes, 9).unwrap();
    sheet.set(Category::Fours, 12).unwrap();
    sheet.set(Category::Fives, 15).unwrap();
    sheet.set(Category::Sixes, 18).unwrap(); // upper 60

    assert_eq!(sheet.projected_total(Category::Ones, 2), 62);
    assert_eq!(sheet.projected_total(Category::Ones, 3), 63 + 50);
}

#[test]
fn projected_total_of_a_scored_category_is_the_current_total() {
    let mut sheet = ScoreSheet::new();
    sheet.set(Category::Chance, 20).unwrap();
    assert_eq!(sheet.projected_total(Category::Chance, 99), sheet.total());
}
