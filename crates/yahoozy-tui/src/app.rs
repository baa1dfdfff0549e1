//! Application state and key handling.
//!
//! Three screens route all input: the roster editor, the game itself and
//! the end-of-game summary. Every game action goes through the engine's
//! command set; validation failures land in the diagnostic line.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::env;
use tracing::info;
use yahoozy_core::consts::TOP_DISPLAY;
use yahoozy_core::{HistoryStore, LeaderboardEntry, Phase, Roster, TurnEngine, YhResult};

use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Game,
    GameOver,
}

/// The add/rename player dialog.
pub struct NameDialog {
    pub text: String,
    /// Roster index being renamed; `None` when adding.
    pub renaming: Option<usize>,
    pub diag: String,
}

pub struct App {
    store: HistoryStore,
    pub roster: Roster,
    pub screen: Screen,
    pub engine: Option<TurnEngine>,
    pub top: Vec<LeaderboardEntry>,
    pub last_results: Vec<LeaderboardEntry>,
    pub games_completed: u32,
    pub diag: String,
    pub roster_sel: usize,
    pub dialog: Option<NameDialog>,
    pub die_sel: usize,
    pub cat_sel: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: HistoryStore) -> YhResult<Self> {
        let top = store.load_top(TOP_DISPLAY)?;
        let mut roster = Roster::new();
        // One default player named after the login user, like a fresh
        // physical score pad with your own name already on it.
        let _ = roster.add(&default_player_name());
        Ok(Self {
            store,
            roster,
            screen: Screen::Roster,
            engine: None,
            top,
            last_results: Vec::new(),
            games_completed: 0,
            diag: String::new(),
            roster_sel: 0,
            dialog: None,
            die_sel: 0,
            cat_sel: 0,
            should_quit: false,
        })
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> YhResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> YhResult<()> {
        match self.screen {
            Screen::Roster => self.handle_roster_key(key),
            Screen::Game => self.handle_game_key(key),
            Screen::GameOver => {
                self.handle_game_over_key(key);
                Ok(())
            }
        }
    }

    // --- Roster screen --------------------------------------------------

    fn handle_roster_key(&mut self, key: KeyEvent) -> YhResult<()> {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return Ok(());
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('a') if ctrl => {
                self.dialog = Some(NameDialog {
                    text: String::new(),
                    renaming: None,
                    diag: String::new(),
                });
            }
            KeyCode::Char('s') if ctrl => self.start_game(),
            KeyCode::Enter if !self.roster.is_empty() => {
                let index = self.roster_sel;
                self.dialog = Some(NameDialog {
                    text: self.roster.names()[index].clone(),
                    renaming: Some(index),
                    diag: String::new(),
                });
            }
            KeyCode::Up => self.roster_sel = self.roster_sel.saturating_sub(1),
            KeyCode::Down => {
                if self.roster_sel + 1 < self.roster.len() {
                    self.roster_sel += 1;
                }
            }
            KeyCode::Backspace if !self.roster.is_empty() => {
                self.roster.remove(self.roster_sel);
                if self.roster_sel > 0 {
                    self.roster_sel -= 1;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.dialog = None,
            KeyCode::Char('e') if ctrl => self.dialog = None,
            KeyCode::Enter => self.submit_dialog(),
            KeyCode::Char('a') if ctrl => self.submit_dialog(),
            KeyCode::Backspace => {
                dialog.text.pop();
            }
            KeyCode::Char(c) if !ctrl => dialog.text.push(c),
            _ => {}
        }
    }

    fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        let result = match dialog.renaming {
            Some(index) => self.roster.rename(index, &dialog.text),
            None => self.roster.add(&dialog.text),
        };
        match result {
            Ok(()) => self.dialog = None,
            Err(e) => dialog.diag = e.to_string(),
        }
    }

    fn start_game(&mut self) {
        if self.roster.is_empty() {
            self.diag = "Cannot start game with no players".to_string();
            return;
        }
        self.engine = Some(TurnEngine::new(self.roster.fresh_players()));
        self.screen = Screen::Game;
        self.die_sel = 0;
        self.cat_sel = 0;
        self.diag.clear();
    }

    // --- Game screen ----------------------------------------------------

    fn handle_game_key(&mut self, key: KeyEvent) -> YhResult<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return Ok(());
        }
        let mut game_over = false;
        if let Some(engine) = self.engine.as_mut() {
            match engine.phase() {
                Phase::Rolling => match key.code {
                    KeyCode::Char('a') if ctrl => engine.mark_all_dice(),
                    KeyCode::Char('r') if ctrl => match engine.reroll() {
                        Ok(()) => self.diag.clear(),
                        Err(e) => self.diag = e.to_string(),
                    },
                    KeyCode::Char('k') if ctrl => {
                        engine.enter_category_pick();
                        self.cat_sel = 0;
                        self.diag.clear();
                    }
                    KeyCode::Left => self.die_sel = self.die_sel.saturating_sub(1),
                    KeyCode::Right => self.die_sel = (self.die_sel + 1).min(4),
                    KeyCode::Enter | KeyCode::Char(' ') => engine.toggle_die(self.die_sel),
                    _ => {}
                },
                Phase::PickingCategory => {
                    let open = engine.open_categories();
                    match key.code {
                        KeyCode::Char('s') if ctrl => match engine.confirm_category() {
                            Ok(()) => {
                                self.diag.clear();
                                self.die_sel = 0;
                                self.cat_sel = 0;
                                game_over = engine.phase() == Phase::GameEnd;
                            }
                            Err(e) => self.diag = e.to_string(),
                        },
                        KeyCode::Up => {
                            self.cat_sel = self.cat_sel.checked_sub(1).unwrap_or(open.len() - 1);
                        }
                        KeyCode::Down => self.cat_sel = (self.cat_sel + 1) % open.len(),
                        KeyCode::Enter => match engine.toggle_highlight(open[self.cat_sel]) {
                            Ok(()) => self.diag.clear(),
                            Err(e) => self.diag = e.to_string(),
                        },
                        _ => {}
                    }
                }
                Phase::GameEnd => {}
            }
        }
        if game_over {
            self.finish_game()?;
        }
        Ok(())
    }

    /// Merge the finished game into the persisted history and move to
    /// the summary screen. Runs exactly once per game.
    fn finish_game(&mut self) -> YhResult<()> {
        let Some(engine) = self.engine.take() else {
            return Ok(());
        };
        let players = engine.into_players();
        let finals: Vec<LeaderboardEntry> = players
            .iter()
            .map(|p| LeaderboardEntry::new(p.total(), p.name.clone()))
            .collect();
        info!(players = finals.len(), "recording finished game");

        let history = self.store.record_game(finals.clone())?;
        self.top = history.into_iter().take(TOP_DISPLAY).collect();

        let mut results = finals;
        results.sort_by(|a, b| b.score.cmp(&a.score));
        self.last_results = results;
        self.games_completed += 1;
        self.screen = Screen::GameOver;
        Ok(())
    }

    // --- Game-over screen -----------------------------------------------

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => {
                self.screen = Screen::Roster;
                self.roster_sel = 0;
                self.diag.clear();
            }
            _ => {}
        }
    }
}

/// Login name with an initial capital, or a bland fallback.
fn default_player_name() -> String {
    let login = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_default();
    let name = capitalize(login.trim());
    if name.is_empty() {
        "Player".to_string()
    } else {
        name
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_uppercases_the_first_letter_only() {
        assert_eq!(capitalize("ada"), "Ada");
        assert_eq!(capitalize("ada lovelace"), "Ada lovelace");
        assert_eq!(capitalize("Ada"), "Ada");
        assert_eq!(capitalize(""), "");
    }
}
