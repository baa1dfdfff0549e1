use crate::sheet::ScoreSheet;
use thiserror::Error;

/// A participant: display name plus an owned score sheet.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub sheet: ScoreSheet,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheet: ScoreSheet::new(),
        }
    }

    pub fn total(&self) -> u32 {
        self.sheet.total()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Empty player name not allowed")]
    EmptyName,
    #[error("Name already taken")]
    DuplicateName,
    #[error("Player names cannot contain line breaks or separators")]
    UnsupportedChar,
}

/// The pre-game player list. Editing happens here only; once a session
/// starts it consumes a fixed player sequence built from the roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Add a player. The name is trimmed and must be non-empty, unique,
    /// and free of characters the history format reserves.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = self.validate(name, None)?;
        self.names.push(name);
        Ok(())
    }

    /// Rename the player at `index`. Renaming a player to its current
    /// name is allowed.
    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), RosterError> {
        let name = self.validate(name, Some(index))?;
        self.names[index] = name;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    /// Fresh players for a new session, one per roster entry, empty
    /// sheets, roster order preserved.
    pub fn fresh_players(&self) -> Vec<Player> {
        self.names.iter().map(Player::new).collect()
    }

    fn validate(&self, name: &str, keep_index: Option<usize>) -> Result<String, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if name.contains(['\n', '\x1f']) {
            return Err(RosterError::UnsupportedChar);
        }
        let taken = self
            .names
            .iter()
            .enumerate()
            .any(|(i, n)| Some(i) != keep_index && n == name);
        if taken {
            return Err(RosterError::DuplicateName);
        }
        Ok(name.to_string())
    }
}
