/// Number of dice in a roll.
pub const DICE_COUNT: usize = 5;

/// Number of faces on a die (values 1..=6).
pub const FACE_COUNT: u8 = 6;

/// Rerolls available after the free opening roll of a turn.
pub const REROLLS_PER_TURN: u8 = 2;

/// Upper-section sum that triggers the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// One-time bonus for reaching [`UPPER_BONUS_THRESHOLD`].
pub const UPPER_BONUS: u32 = 50;

/// Points for five of a kind.
pub const YATZY_SCORE: u32 = 50;

/// How many leaderboard entries are shown; the persisted history itself
/// is unbounded.
pub const TOP_DISPLAY: usize = 10;
