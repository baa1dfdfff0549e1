use crate::consts::{DICE_COUNT, FACE_COUNT, REROLLS_PER_TURN};
use fastrand::Rng;

/// Five die faces, each in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    faces: [u8; DICE_COUNT],
}

impl Roll {
    /// Build a roll from explicit faces.
    ///
    /// # Panics
    /// Panics if any face is outside 1..=6.
    pub fn from_faces(faces: [u8; DICE_COUNT]) -> Self {
        assert!(
            faces.iter().all(|&f| (1..=FACE_COUNT).contains(&f)),
            "die face out of range: {:?}",
            faces
        );
        Self { faces }
    }

    pub fn random(rng: &mut Rng) -> Self {
        let mut faces = [0u8; DICE_COUNT];
        for f in &mut faces {
            *f = rng.u8(1..=FACE_COUNT);
        }
        Self { faces }
    }

    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.faces
    }

    pub fn face(&self, die: usize) -> u8 {
        self.faces[die]
    }

    pub fn sum(&self) -> u32 {
        self.faces.iter().map(|&f| u32::from(f)).sum()
    }

    /// Occurrences of each face, indexed by face value (index 0 unused).
    pub fn face_counts(&self) -> [u8; 7] {
        let mut counts = [0u8; 7];
        for &f in &self.faces {
            counts[f as usize] += 1;
        }
        counts
    }

    pub(crate) fn set_face(&mut self, die: usize, face: u8) {
        debug_assert!((1..=FACE_COUNT).contains(&face));
        self.faces[die] = face;
    }
}

/// The active roll of a turn: dice values, the reroll selection and the
/// rerolls still available.
///
/// The selection is a 5-bit mask where bit `i` marks die `i` for
/// rerolling. The opening roll of a turn is free; only reroll actions
/// consume a roll.
#[derive(Debug, Clone)]
pub struct DiceState {
    roll: Roll,
    reroll_mask: u8,
    rolls_left: u8,
}

impl DiceState {
    /// Start a turn: fresh random roll, empty selection, full rerolls.
    pub fn roll(rng: &mut Rng) -> Self {
        Self {
            roll: Roll::random(rng),
            reroll_mask: 0,
            rolls_left: REROLLS_PER_TURN,
        }
    }

    pub fn current(&self) -> &Roll {
        &self.roll
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn is_marked(&self, die: usize) -> bool {
        debug_assert!(die < DICE_COUNT);
        self.reroll_mask & (1 << die) != 0
    }

    pub fn any_marked(&self) -> bool {
        self.reroll_mask != 0
    }

    /// Flip die membership in the reroll selection.
    pub fn toggle(&mut self, die: usize) {
        debug_assert!(die < DICE_COUNT);
        self.reroll_mask ^= 1 << die;
    }

    /// Mark every die for rerolling.
    pub fn mark_all(&mut self) {
        self.reroll_mask = (1 << DICE_COUNT) - 1;
    }

    /// Redraw every marked die, clear the selection and spend one roll.
    ///
    /// One reroll action costs exactly one roll no matter how many dice
    /// it touches. Preconditions (rolls left, non-empty selection) are
    /// the engine's job.
    pub(crate) fn reroll(&mut self, rng: &mut Rng) {
        debug_assert!(self.rolls_left > 0);
        debug_assert!(self.reroll_mask != 0);
        for die in 0..DICE_COUNT {
            if self.reroll_mask & (1 << die) != 0 {
                self.roll.set_face(die, rng.u8(1..=FACE_COUNT));
            }
        }
        self.reroll_mask = 0;
        self.rolls_left -= 1;
    }
}
