/// Neon Clicker — an incremental neon-orb clicker game.

pub mod actions;
pub mod logic;
pub mod render;
pub mod save;
pub mod simulator;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use actions::*;
use state::{tier_indices, GameState, Tier, CATALOG};

pub struct ClickerGame {
    pub state: GameState,
}

impl ClickerGame {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Start from the saved session when one exists, otherwise fresh.
    pub fn restore_or_new() -> Self {
        let mut game = Self::new();
        if load_saved(&mut game.state) {
            game.state.add_log("セーブデータを読み込みました。", false);
        }
        game
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(ch) => self.handle_key(*ch),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    /// Advance game logic by `delta_ticks` discrete ticks.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
        if self.state.save_due {
            self.state.save_due = false;
            persist(&self.state);
        }
    }

    /// Render the game into the given area.
    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    /// Flush the current state to storage (used on page unload).
    pub fn save_now(&self) {
        persist(&self.state);
    }

    fn handle_key(&mut self, key: char) -> bool {
        if self.state.show_settings {
            return self.handle_settings_key(key);
        }
        if self.state.show_store {
            return self.handle_store_key(key);
        }
        match key {
            'c' => {
                logic::click(&mut self.state);
                true
            }
            's' => {
                self.state.show_store = true;
                true
            }
            'x' => {
                self.state.show_settings = true;
                true
            }
            _ => false,
        }
    }

    fn handle_settings_key(&mut self, key: char) -> bool {
        match key {
            'r' => {
                logic::reset(&mut self.state);
                persist(&self.state);
                true
            }
            'x' | 'q' => {
                self.state.show_settings = false;
                true
            }
            'c' => {
                logic::click(&mut self.state);
                true
            }
            _ => false,
        }
    }

    fn handle_store_key(&mut self, key: char) -> bool {
        match key {
            'b' => {
                self.state.store_tab = Tier::Basic;
                true
            }
            'p' => {
                self.state.store_tab = Tier::Premium;
                true
            }
            's' | 'q' => {
                self.state.show_store = false;
                true
            }
            'c' => {
                logic::click(&mut self.state);
                true
            }
            '1'..='9' => {
                let display_idx = (key as u8 - b'1') as usize;
                if let Some(catalog_idx) = tier_entry(self.state.store_tab, display_idx) {
                    self.buy_by_index(catalog_idx);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        match id {
            CLICK_ORB => {
                logic::click(&mut self.state);
                true
            }
            OPEN_STORE => {
                self.state.show_store = true;
                self.state.show_settings = false;
                true
            }
            CLOSE_STORE => {
                self.state.show_store = false;
                true
            }
            OPEN_SETTINGS => {
                self.state.show_settings = true;
                self.state.show_store = false;
                true
            }
            CLOSE_SETTINGS => {
                self.state.show_settings = false;
                true
            }
            TAB_BASIC => {
                self.state.store_tab = Tier::Basic;
                true
            }
            TAB_PREMIUM => {
                self.state.store_tab = Tier::Premium;
                true
            }
            RESET_GAME => {
                logic::reset(&mut self.state);
                persist(&self.state);
                true
            }
            id if id >= BUY_BOOST_BASE && id < BUY_BOOST_BASE + CATALOG.len() as u16 => {
                self.buy_by_index((id - BUY_BOOST_BASE) as usize);
                true
            }
            _ => false,
        }
    }

    fn buy_by_index(&mut self, catalog_idx: usize) {
        let id = CATALOG[catalog_idx].id;
        if logic::buy_boost(&mut self.state, id).is_ok() {
            persist(&self.state);
        }
    }
}

/// Map a display position within a tier to its catalog index.
fn tier_entry(tier: Tier, display_idx: usize) -> Option<usize> {
    tier_indices(tier).nth(display_idx)
}

/// Persist now. Outside the browser this is a no-op (tests run headless).
fn persist(state: &GameState) {
    #[cfg(target_arch = "wasm32")]
    save::save_game(state);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;
}

/// Restore from storage. Outside the browser there is nothing to restore.
fn load_saved(state: &mut GameState) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        save::load_game(state)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = state;
        false
    }
}
