use crate::session::{Session, SessionConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Players,
    Ante,
    /// Name of the seat at this index.
    Name(usize),
}

const FIXED_ITEMS: usize = 2;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::Ante => format!("Ante per round: ${}", app.cfg_ante),
            MenuItem::Name(i) => {
                let name = app.cfg_names.get(i).map(|n| n.as_str()).unwrap_or("");
                if name.trim().is_empty() {
                    format!("Seat {}: (Player {})", i + 1, i + 1)
                } else {
                    format!("Seat {}: {name}", i + 1)
                }
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < SessionConfig::MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::Ante => {
                app.cfg_ante = app.cfg_ante.saturating_add(1);
            }
            MenuItem::Name(_) => {}
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > SessionConfig::MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::Ante => {
                if app.cfg_ante > 1 {
                    app.cfg_ante -= 1;
                }
            }
            MenuItem::Name(_) => {}
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        (0..self.menu_len()).map(|i| self.menu_item(i).display(self)).collect()
    }

    fn menu_len(&self) -> usize {
        FIXED_ITEMS + self.cfg_num_players
    }

    fn menu_item(&self, index: usize) -> MenuItem {
        match index {
            0 => MenuItem::Players,
            1 => MenuItem::Ante,
            i => MenuItem::Name(i - FIXED_ITEMS),
        }
    }

    /// True when the selected menu item is a player name.
    pub fn editing_name(&self) -> bool {
        self.scene == Scene::Setup
            && matches!(self.menu_item(self.menu_index), MenuItem::Name(_))
    }

    /// Names the next session will use, padded with defaults.
    pub fn cfg_player_names(&self) -> Vec<String> {
        (0..self.cfg_num_players)
            .map(|i| self.cfg_names.get(i).cloned().unwrap_or_default())
            .collect()
    }

    pub fn cfg_starting_pot(&self) -> u64 {
        self.cfg_ante.saturating_mul(self.cfg_num_players as u64)
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg_num_players = self.session.num_players();
        self.cfg_ante = self.session.ante();
        self.cfg_names = self.session.players().to_vec();
        self.scene = Scene::Setup;
    }

    /// Start a brand-new session from the edited values.
    pub fn apply_menu(&mut self) -> bool {
        let config = SessionConfig::new(self.cfg_player_names(), self.cfg_ante);
        match Session::new(config) {
            Ok(session) => {
                self.session = session;
                self.cfg_names = self.session.players().to_vec();
                self.clear_action_error();
                self.scene = Scene::Dealing;
                true
            }
            Err(err) => {
                log::warn!("setup rejected: {err}");
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % self.menu_len();
    }
    pub fn menu_prev(&mut self) {
        let len = self.menu_len();
        self.menu_index = (self.menu_index.min(len - 1) + len - 1) % len;
    }
    pub fn menu_inc(&mut self) {
        let item = self.menu_item(self.menu_index);
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = self.menu_item(self.menu_index);
        item.dec(self);
        self.menu_index = self.menu_index.min(self.menu_len() - 1);
    }

    /// Append a character to the selected seat's name.
    pub fn menu_type_char(&mut self, c: char) {
        let MenuItem::Name(i) = self.menu_item(self.menu_index) else {
            return;
        };
        if c.is_control() {
            return;
        }
        if self.cfg_names.len() <= i {
            self.cfg_names.resize(i + 1, String::new());
        }
        let name = &mut self.cfg_names[i];
        if name.chars().count() < SessionConfig::MAX_NAME_LEN {
            name.push(c);
        }
    }

    pub fn menu_backspace(&mut self) {
        if let MenuItem::Name(i) = self.menu_item(self.menu_index) {
            if let Some(name) = self.cfg_names.get_mut(i) {
                name.pop();
            }
        }
    }
}
