mod layout;
mod round;
mod setup;
mod table;
mod widgets;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Setup => setup::draw_setup(f, app),
        Scene::Dealing => round::draw_dealing(f, app),
        Scene::Table => table::draw_table(f, app),
        Scene::NewRound => round::draw_new_round(f, app),
    }
    if app.scene != Scene::Setup {
        if app.help_open() {
            widgets::draw_help(f);
        } else if app.history_open() {
            widgets::draw_history(f, app);
        }
    }
}
