use in_between::cards::Rank;
use in_between::rules::Outcome;
use in_between::session::{HistoryEvent, Session, SessionConfig};

#[test]
fn history_records_antes_deals_and_results() {
    let mut s = Session::new(SessionConfig::with_player_count(2, 3)).unwrap();
    let history = s.history_recent(10);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].event, HistoryEvent::Ante { amount: 6 });
    assert_eq!(history[0].player, None);

    for r in [Rank::Two, Rank::Ten, Rank::Four, Rank::Four] {
        s.deal(r).unwrap();
    }
    s.set_bet(2).unwrap();
    s.bet().unwrap();
    s.draw(Rank::Ten).unwrap();
    s.next_turn().unwrap();
    s.pass().unwrap();

    let recent = s.history_recent(3);
    assert_eq!(recent[0].event, HistoryEvent::Bet { amount: 2 });
    assert_eq!(recent[0].player, Some(0));
    assert_eq!(
        recent[1].event,
        HistoryEvent::Draw { rank: Rank::Ten, outcome: Outcome::Post, delta: 4 }
    );
    assert_eq!(recent[2].event, HistoryEvent::Pass { mandatory: true });
    assert_eq!(recent[2].player, Some(1));
    assert_eq!(recent[2].round, 1);
}

#[test]
fn history_events_render_for_display() {
    let draw = HistoryEvent::Draw { rank: Rank::Seven, outcome: Outcome::Win, delta: -5 };
    assert_eq!(draw.to_string(), "Drew 7: WIN (-5)");
    assert_eq!(HistoryEvent::Pass { mandatory: false }.to_string(), "Pass +1");
    assert_eq!(HistoryEvent::Ante { amount: 4 }.to_string(), "Ante +4");
}

#[test]
fn history_offset_pages_from_the_end() {
    let mut s = Session::new(SessionConfig::with_player_count(3, 1)).unwrap();
    for r in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
        s.deal(r).unwrap();
    }
    assert_eq!(s.history_len(), 7);
    let window = s.history_recent_offset(3, 0);
    assert_eq!(window.len(), 3);
    let older = s.history_recent_offset(3, 2);
    assert_eq!(older.len(), 3);
    assert_ne!(window[0], older[0]);
}
