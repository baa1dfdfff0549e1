use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// The fifteen scoring categories of the Scandinavian ruleset.
///
/// Declaration order is significant: it is the score-sheet display order
/// and the order used for index-based selection, and it drives the
/// derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumCount, EnumIter,
)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    #[strum(serialize = "One Pair")]
    OnePair,
    #[strum(serialize = "Two Pairs")]
    TwoPairs,
    #[strum(serialize = "Three of a Kind")]
    ThreeOfAKind,
    #[strum(serialize = "Four of a Kind")]
    FourOfAKind,
    #[strum(serialize = "Small Straight")]
    SmallStraight,
    #[strum(serialize = "Large Straight")]
    LargeStraight,
    #[strum(serialize = "Full House")]
    FullHouse,
    Chance,
    Yatzy,
}

impl Category {
    /// The die face scored by an upper-section category.
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Whether this category counts towards the upper-section bonus.
    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Category at the given declaration-order index.
    pub fn from_index(index: usize) -> Option<Category> {
        Category::iter().nth(index)
    }
}
