//! The turn state machine.
//!
//! A session owns its players, the active dice state and its own RNG;
//! the driver issues commands and reads state back through the getters.
//! Every command failure is a recoverable validation error that leaves
//! the session untouched.

use crate::category::Category;
use crate::dice::{DiceState, Roll};
use crate::player::Player;
use crate::scoring;
use fastrand::Rng;
use itertools::Itertools;
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dice visible; the player marks dice and rerolls.
    Rolling,
    /// Dice frozen; the player highlights an unfilled category.
    PickingCategory,
    /// Terminal: a full round has been completed by every player.
    GameEnd,
}

/// Recoverable, user-facing command failures. Display text doubles as
/// the diagnostic line shown by the driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("No more rolls remaining")]
    NoRollsLeft,
    #[error("No dice selected to reroll")]
    NoDiceSelected,
    #[error("No category selected")]
    NoCategorySelected,
    #[error("{0} has already been scored")]
    CategoryAlreadyScored(Category),
}

pub struct TurnEngine {
    players: Vec<Player>,
    cursor: usize,
    dice: DiceState,
    phase: Phase,
    highlight: Option<Category>,
    rng: Rng,
}

impl TurnEngine {
    /// Start a session over a fixed, non-empty player sequence.
    ///
    /// # Panics
    /// Panics on an empty sequence; the roster collaborator guarantees
    /// at least one player before a session exists.
    pub fn new(players: Vec<Player>) -> Self {
        Self::with_rng(players, Rng::new())
    }

    /// Deterministic dice stream for tests.
    pub fn with_seed(players: Vec<Player>, seed: u64) -> Self {
        Self::with_rng(players, Rng::with_seed(seed))
    }

    pub fn with_rng(players: Vec<Player>, mut rng: Rng) -> Self {
        assert!(!players.is_empty(), "session requires at least one player");
        info!(players = players.len(), "session started");
        let dice = DiceState::roll(&mut rng);
        Self {
            players,
            cursor: 0,
            dice,
            phase: Phase::Rolling,
            highlight: None,
            rng,
        }
    }

    // --- Commands -------------------------------------------------------

    /// Flip die membership in the reroll selection. Always legal while
    /// rolling.
    pub fn toggle_die(&mut self, die: usize) {
        debug_assert_eq!(self.phase, Phase::Rolling, "toggle_die outside Rolling");
        if self.phase != Phase::Rolling {
            return;
        }
        self.dice.toggle(die);
    }

    /// Mark every die for rerolling.
    pub fn mark_all_dice(&mut self) {
        debug_assert_eq!(self.phase, Phase::Rolling, "mark_all_dice outside Rolling");
        if self.phase != Phase::Rolling {
            return;
        }
        self.dice.mark_all();
    }

    /// Redraw the selected dice. One reroll action costs one roll no
    /// matter how many dice were selected.
    pub fn reroll(&mut self) -> Result<(), TurnError> {
        debug_assert_eq!(self.phase, Phase::Rolling, "reroll outside Rolling");
        if self.phase != Phase::Rolling {
            return Ok(());
        }
        if self.dice.rolls_left() == 0 {
            return Err(TurnError::NoRollsLeft);
        }
        if !self.dice.any_marked() {
            return Err(TurnError::NoDiceSelected);
        }
        self.dice.reroll(&mut self.rng);
        Ok(())
    }

    /// Freeze the dice and move to category selection, clearing any
    /// prior highlight.
    pub fn enter_category_pick(&mut self) {
        debug_assert_eq!(self.phase, Phase::Rolling, "enter_category_pick outside Rolling");
        if self.phase != Phase::Rolling {
            return;
        }
        self.highlight = None;
        self.phase = Phase::PickingCategory;
    }

    /// Highlight a category as the pending choice. The driver only
    /// offers unfilled categories; a filled one is rejected here anyway.
    pub fn toggle_highlight(&mut self, category: Category) -> Result<(), TurnError> {
        debug_assert_eq!(
            self.phase,
            Phase::PickingCategory,
            "toggle_highlight outside PickingCategory"
        );
        if self.phase != Phase::PickingCategory {
            return Ok(());
        }
        if self.players[self.cursor].sheet.contains(category) {
            return Err(TurnError::CategoryAlreadyScored(category));
        }
        self.highlight = Some(category);
        Ok(())
    }

    /// Score the highlighted category for the active player, then
    /// advance the round.
    pub fn confirm_category(&mut self) -> Result<(), TurnError> {
        debug_assert_eq!(
            self.phase,
            Phase::PickingCategory,
            "confirm_category outside PickingCategory"
        );
        if self.phase != Phase::PickingCategory {
            return Ok(());
        }
        let category = self.highlight.ok_or(TurnError::NoCategorySelected)?;
        let points = scoring::score(category, self.dice.current());
        self.players[self.cursor]
            .sheet
            .set(category, points)
            .map_err(|e| TurnError::CategoryAlreadyScored(e.0))?;
        debug!(
            player = %self.players[self.cursor].name,
            category = %category,
            points,
            "category scored"
        );
        self.advance_round();
        Ok(())
    }

    /// Rotate to the next player and open their turn. The game ends
    /// exactly when control would cycle back to player 0 with player 0's
    /// sheet complete; checking any earlier would end the game before
    /// the trailing players finish the final round.
    fn advance_round(&mut self) {
        self.cursor = (self.cursor + 1) % self.players.len();
        self.dice = DiceState::roll(&mut self.rng);
        self.highlight = None;
        if self.cursor == 0 && self.players[0].sheet.is_complete() {
            self.phase = Phase::GameEnd;
            info!("game over");
        } else {
            self.phase = Phase::Rolling;
        }
    }

    // --- Observable state -----------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roll(&self) -> &Roll {
        self.dice.current()
    }

    pub fn rolls_left(&self) -> u8 {
        self.dice.rolls_left()
    }

    pub fn is_die_marked(&self, die: usize) -> bool {
        self.dice.is_marked(die)
    }

    pub fn highlight(&self) -> Option<Category> {
        self.highlight
    }

    pub fn active_index(&self) -> usize {
        self.cursor
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.cursor]
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players ordered by total, highest first; ties keep roster order.
    pub fn standings(&self) -> Vec<&Player> {
        self.players
            .iter()
            .sorted_by_key(|p| Reverse(p.total()))
            .collect()
    }

    /// Categories the active player can still score, in declaration
    /// order.
    pub fn open_categories(&self) -> Vec<Category> {
        use strum::IntoEnumIterator;
        let sheet = &self.players[self.cursor].sheet;
        Category::iter().filter(|c| !sheet.contains(*c)).collect()
    }

    /// Tear down a finished session and hand the players back for the
    /// leaderboard merge.
    pub fn into_players(self) -> Vec<Player> {
        debug_assert_eq!(self.phase, Phase::GameEnd, "session still in progress");
        self.players
    }
}
