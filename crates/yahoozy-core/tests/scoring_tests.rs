use rstest::rstest;
use yahoozy_core::scoring::score;
use yahoozy_core::{Category, Roll};

#[rstest]
#[case(Category::Ones, [1, 1, 2, 3, 1], 3)]
#[case(Category::Ones, [2, 3, 4, 5, 6], 0)]
#[case(Category::Twos, [2, 2, 2, 2, 2], 10)]
#[case(Category::Threes, [3, 3, 1, 1, 1], 6)]
#[case(Category::Fours, [4, 1, 4, 1, 4], 12)]
#[case(Category::Fives, [5, 5, 5, 5, 2], 20)]
#[case(Category::Sixes, [6, 6, 1, 2, 3], 12)]
fn upper_section_counts_one_face(
    #[case] category: Category,
    #[case] faces: [u8; 5],
    #[case] expected: u32,
) {
    assert_eq!(score(category, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case([3, 3, 5, 5, 1], 10)] // highest pair wins, not the first found
#[case([2, 2, 1, 3, 4], 4)]
#[case([6, 6, 6, 6, 6], 12)] // five of a kind still holds a pair of sixes
#[case([1, 2, 3, 4, 5], 0)]
fn one_pair_takes_highest(#[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(Category::OnePair, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case([2, 2, 5, 5, 6], 14)]
#[case([2, 2, 2, 5, 6], 0)] // a triple is only one qualifying face
#[case([4, 4, 4, 4, 6], 0)] // four of a kind is one face, not two pairs
#[case([1, 1, 6, 6, 6], 14)]
#[case([3, 3, 3, 2, 2], 10)]
#[case([1, 2, 3, 4, 5], 0)]
fn two_pairs_needs_two_distinct_faces(#[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(Category::TwoPairs, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case(Category::ThreeOfAKind, [4, 4, 4, 2, 1], 12)]
#[case(Category::ThreeOfAKind, [2, 2, 2, 5, 5], 6)]
#[case(Category::ThreeOfAKind, [6, 6, 6, 6, 6], 18)]
#[case(Category::ThreeOfAKind, [4, 4, 2, 2, 1], 0)]
#[case(Category::FourOfAKind, [5, 5, 5, 5, 2], 20)]
#[case(Category::FourOfAKind, [3, 3, 3, 3, 3], 12)]
#[case(Category::FourOfAKind, [5, 5, 5, 2, 2], 0)]
fn n_of_a_kind(#[case] category: Category, #[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(category, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case([1, 2, 3, 4, 5], 15, 0)]
#[case([5, 3, 1, 4, 2], 15, 0)] // order is irrelevant
#[case([2, 3, 4, 5, 6], 0, 20)]
#[case([6, 4, 2, 5, 3], 0, 20)]
#[case([1, 2, 3, 4, 4], 0, 0)]
#[case([1, 2, 3, 4, 6], 0, 0)] // a gap breaks both straights
fn straights_are_exact_sets(#[case] faces: [u8; 5], #[case] small: u32, #[case] large: u32) {
    let roll = Roll::from_faces(faces);
    assert_eq!(score(Category::SmallStraight, &roll), small);
    assert_eq!(score(Category::LargeStraight, &roll), large);
}

#[rstest]
#[case([2, 2, 3, 3, 3], 13)]
#[case([3, 3, 3, 2, 2], 13)]
#[case([6, 6, 5, 5, 5], 27)]
#[case([5, 5, 5, 5, 5], 0)] // no face with count exactly 2
#[case([4, 4, 4, 4, 2], 0)]
#[case([2, 2, 3, 3, 4], 0)]
fn full_house_needs_pair_and_triple(#[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(Category::FullHouse, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case([1, 1, 1, 1, 1], 5)]
#[case([6, 5, 4, 3, 2], 20)]
#[case([6, 6, 6, 6, 6], 30)]
fn chance_is_the_sum(#[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(Category::Chance, &Roll::from_faces(faces)), expected);
}

#[rstest]
#[case([4, 4, 4, 4, 4], 50)]
#[case([1, 1, 1, 1, 1], 50)]
#[case([4, 4, 4, 4, 5], 0)]
fn yatzy_is_all_or_nothing(#[case] faces: [u8; 5], #[case] expected: u32) {
    assert_eq!(score(Category::Yatzy, &Roll::from_faces(faces)), expected);
}

#[test]
fn display_names_match_the_table() {
    assert_eq!(Category::ThreeOfAKind.to_string(), "Three of a Kind");
    assert_eq!(Category::OnePair.to_string(), "One Pair");
    assert_eq!(Category::Yatzy.to_string(), "Yatzy");
    assert_eq!(Category::Ones.to_string(), "Ones");
}

#[test]
fn categories_keep_declaration_order() {
    assert_eq!(Category::from_index(0), Some(Category::Ones));
    assert_eq!(Category::from_index(14), Some(Category::Yatzy));
    assert_eq!(Category::from_index(15), None);
    assert!(Category::Ones < Category::Yatzy);
}
