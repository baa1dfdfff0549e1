//! Category scoring: pure dice-to-points rules.
//!
//! Every function here is total over (category, roll); "no qualifying
//! combination" scores 0.

use crate::category::Category;
use crate::consts::YATZY_SCORE;
use crate::dice::Roll;

/// Points the roll is worth in the given category.
pub fn score(category: Category, roll: &Roll) -> u32 {
    let counts = roll.face_counts();
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            // face() is Some for exactly these six variants.
            let face = category.face().unwrap_or(0) as usize;
            u32::from(counts[face]) * face as u32
        }
        Category::OnePair => highest_face_with(&counts, 2).map_or(0, |f| 2 * f),
        Category::TwoPairs => {
            let mut pairs = (1..=6u32).rev().filter(|&f| counts[f as usize] >= 2);
            match (pairs.next(), pairs.next()) {
                (Some(high), Some(low)) => 2 * (high + low),
                _ => 0,
            }
        }
        Category::ThreeOfAKind => highest_face_with(&counts, 3).map_or(0, |f| 3 * f),
        Category::FourOfAKind => highest_face_with(&counts, 4).map_or(0, |f| 4 * f),
        Category::SmallStraight => {
            if (1..=5).all(|f| counts[f] == 1) {
                15
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if (2..=6).all(|f| counts[f] == 1) {
                20
            } else {
                0
            }
        }
        Category::FullHouse => {
            // Needs a pair and a triple of two different faces; counts of
            // exactly 2 and 3 can never share a face, so five of a kind
            // does not qualify.
            let pair = (1..=6).any(|f| counts[f] == 2);
            let triple = (1..=6).any(|f| counts[f] == 3);
            if pair && triple {
                roll.sum()
            } else {
                0
            }
        }
        Category::Chance => roll.sum(),
        Category::Yatzy => {
            if counts.iter().any(|&c| c == 5) {
                YATZY_SCORE
            } else {
                0
            }
        }
    }
}

/// Highest face occurring at least `at_least` times.
fn highest_face_with(counts: &[u8; 7], at_least: u8) -> Option<u32> {
    (1..=6u32).rev().find(|&f| counts[f as usize] >= at_least)
}
