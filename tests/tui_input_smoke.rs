use crossterm::event::KeyCode;
use in_between::cards::Rank;
use in_between::rules::Outcome;
use in_between::session::{Phase, SessionConfig, TurnStage};
use in_between::tui::app::{AppState, InputAction, Scene};
use in_between::tui::controller::handle_key;

fn setup_dealing_app() -> AppState {
    let mut app = AppState::default();
    assert!(app.handle_input(InputAction::MenuApply));
    app
}

fn type_keys(app: &mut AppState, keys: &str) {
    for c in keys.chars() {
        assert!(!handle_key(app, KeyCode::Char(c)));
    }
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Setup));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);

    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_num_players, 3);
    assert_eq!(app.cfg_starting_pot(), 3);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Dealing));
    assert_eq!(app.session.num_players(), 3);
    assert_eq!(app.session.players()[2], "Player 3");
}

#[test]
fn player_count_stays_within_table_limits() {
    let mut app = AppState::default();
    for _ in 0..20 {
        let _ = app.handle_input(InputAction::MenuInc);
    }
    assert_eq!(app.cfg_num_players, SessionConfig::MAX_PLAYERS);
    for _ in 0..20 {
        let _ = app.handle_input(InputAction::MenuDec);
    }
    assert_eq!(app.cfg_num_players, SessionConfig::MIN_PLAYERS);
}

#[test]
fn configured_names_seed_the_session() {
    let config = SessionConfig::new(vec!["Ann".into(), "Bo".into(), "Cy".into()], 2);
    let mut app = AppState::with_config(config);
    assert_eq!(app.cfg_num_players, 3);
    assert_eq!(app.cfg_ante, 2);
    assert!(app.handle_input(InputAction::MenuApply));
    assert_eq!(app.session.players(), &["Ann", "Bo", "Cy"]);
    assert_eq!(app.session.pot(), 6);
}

#[test]
fn rank_keys_deal_then_draw() {
    let mut app = setup_dealing_app();
    // q and k are ranks while dealing, not quit
    type_keys(&mut app, "2kq0");
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.session.dealt_hand(0), Some((Rank::Two, Rank::King)));
    assert_eq!(app.session.dealt_hand(1), Some((Rank::Queen, Rank::Ten)));

    type_keys(&mut app, "b");
    assert_eq!(app.session.turn().map(|t| t.stage), Some(TurnStage::Drawing));
    type_keys(&mut app, "7");
    let t = app.session.turn().copied().unwrap();
    assert_eq!(t.outcome, Some(Outcome::Win));
    assert_eq!(app.session.pot(), 1);

    type_keys(&mut app, "n");
    assert_eq!(app.session.turn().map(|t| t.player), Some(1));
}

#[test]
fn round_over_and_new_round_via_keys() {
    let mut app = setup_dealing_app();
    type_keys(&mut app, "55a3");
    type_keys(&mut app, "pp");
    assert!(matches!(app.scene, Scene::NewRound));
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(matches!(app.scene, Scene::Dealing));
    assert_eq!(app.session.round(), 2);
    assert_eq!(app.session.pot(), 6);
    assert_eq!(app.session.used().len(), 4);
}

#[test]
fn undo_key_takes_back_dealt_card() {
    let mut app = setup_dealing_app();
    type_keys(&mut app, "9");
    type_keys(&mut app, "u");
    assert!(app.session.used().is_empty());
    assert!(matches!(app.session.phase(), Phase::Dealing { player: 0, first: None }));
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_dealing_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    // ranks are not entered behind an overlay
    type_keys(&mut app, "5");
    assert!(app.session.used().is_empty());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn quit_only_from_setup() {
    let mut app = AppState::default();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    let mut app = setup_dealing_app();
    assert!(!handle_key(&mut app, KeyCode::Esc));
    let _ = app.handle_input(InputAction::ExitToSetup);
    assert!(matches!(app.scene, Scene::Setup));
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn seat_names_are_typed_in_setup() {
    let mut app = AppState::default();
    // Players, Ante, then one item per seat
    assert_eq!(app.menu_items_display().len(), 4);
    assert!(!handle_key(&mut app, KeyCode::Down));
    assert!(!handle_key(&mut app, KeyCode::Down));
    assert!(app.editing_name());

    for _ in 0.."Player 1".len() {
        assert!(!handle_key(&mut app, KeyCode::Backspace));
    }
    // q is part of the name here, not quit
    type_keys(&mut app, "Quinn");
    assert!(!handle_key(&mut app, KeyCode::Down));
    for _ in 0.."Player 2".len() {
        assert!(!handle_key(&mut app, KeyCode::Backspace));
    }
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(matches!(app.scene, Scene::Dealing));
    assert_eq!(app.session.players(), &["Quinn", "Player 2"]);
}

#[test]
fn seat_names_stop_at_twenty_characters() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuPrev);
    assert!(app.editing_name());
    for _ in 0..30 {
        let _ = app.handle_input(InputAction::MenuChar('x'));
    }
    assert!(app.handle_input(InputAction::MenuApply));
    assert_eq!(app.session.players()[1], format!("Player 2{}", "x".repeat(12)));
}

#[test]
fn number_keys_pick_quick_bets() {
    let mut app = AppState::with_config(SessionConfig::with_player_count(2, 5));
    assert!(app.handle_input(InputAction::MenuApply));
    type_keys(&mut app, "2k3q");
    assert_eq!(app.session.pot(), 10);

    type_keys(&mut app, "4");
    assert_eq!(app.session.turn().map(|t| t.bet), Some(2));
    type_keys(&mut app, "6");
    assert_eq!(app.session.turn().map(|t| t.bet), Some(7));
    type_keys(&mut app, "7");
    assert_eq!(app.session.turn().map(|t| t.bet), Some(10));
    type_keys(&mut app, "3");
    assert_eq!(app.session.turn().map(|t| t.bet), Some(10));

    type_keys(&mut app, "2");
    assert_eq!(app.session.turn().map(|t| t.bet), Some(5));
    assert!(app.action_error().is_none());
}
