use crate::category::Category;
use crate::consts::{UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use std::collections::BTreeMap;
use strum::EnumCount;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} has already been scored")]
pub struct AlreadyScored(pub Category);

/// A player's category-to-points record.
///
/// Each category can be scored once and is immutable afterwards; the
/// sheet is complete when all fifteen are present. A stored 0 means "no
/// qualifying combination", which only absence distinguishes from an
/// unscored category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    entries: BTreeMap<Category, u32>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record points for a category. Fails without touching the sheet if
    /// the category is already present.
    pub fn set(&mut self, category: Category, points: u32) -> Result<(), AlreadyScored> {
        if self.entries.contains_key(&category) {
            return Err(AlreadyScored(category));
        }
        self.entries.insert(category, points);
        Ok(())
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.entries.get(&category).copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == Category::COUNT
    }

    /// Sum of the upper-section entries (bonus not included).
    pub fn upper_sum(&self) -> u32 {
        self.section_sum(true)
    }

    /// Current score: upper + lower sums plus the one-time bonus once the
    /// upper sum reaches the threshold. Missing categories contribute 0.
    pub fn total(&self) -> u32 {
        let upper = self.upper_sum();
        let lower = self.section_sum(false);
        upper + lower + bonus_for(upper)
    }

    /// The total this sheet would have if an unscored category were
    /// filled with the given points. For an already-scored category this
    /// is just the current total.
    pub fn projected_total(&self, category: Category, points: u32) -> u32 {
        let mut upper = self.upper_sum();
        let mut lower = self.section_sum(false);
        if !self.contains(category) {
            if category.is_upper() {
                upper += points;
            } else {
                lower += points;
            }
        }
        upper + lower + bonus_for(upper)
    }

    fn section_sum(&self, upper: bool) -> u32 {
        self.entries
            .iter()
            .filter(|(c, _)| c.is_upper() == upper)
            .map(|(_, &points)| points)
            .sum()
    }
}

fn bonus_for(upper_sum: u32) -> u32 {
    if upper_sum >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS
    } else {
        0
    }
}
