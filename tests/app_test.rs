use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use car_counter::core::{GameConfig, MemoryStore, RandomSource, RoundController};
use car_counter::input::{AnswerEdit, InputEvent};
use car_counter::term::ScreenState;
use car_counter::types::{OutcomeEvent, Phase};
use car_counter::App;

struct Fixed(u32);

impl RandomSource for Fixed {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

fn app() -> App<Fixed> {
    App::new(RoundController::new(
        GameConfig::default(),
        Box::new(MemoryStore::new()),
        Fixed(7),
        ScreenState::new(),
    ))
}

fn press(app: &mut App<Fixed>, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn ctrl(app: &mut App<Fixed>, ch: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_str(app: &mut App<Fixed>, s: &str) {
    for ch in s.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn menu_to_correct_answer_to_next_round() {
    let mut app = app();
    assert_eq!(app.phase(), Phase::Idle);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.phase(), Phase::Idle);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::RoundActive);
    assert_eq!(app.screen().item_count(), 10);

    type_str(&mut app, "10");
    assert_eq!(app.answer(), "10");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::RoundResolved);
    assert_eq!(app.controller().score(), 1);
    assert_eq!(app.screen().outcome(), Some(OutcomeEvent::Correct));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::RoundActive);
    assert_eq!(app.controller().round(), 2);
    assert_eq!(app.answer(), "");
    assert_eq!(app.screen().outcome(), None);
}

#[test]
fn invalid_answer_keeps_text_and_round() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);

    type_str(&mut app, "ab");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::RoundActive);
    assert_eq!(app.answer(), "ab");
    assert_eq!(app.screen().outcome(), Some(OutcomeEvent::ValidationError));

    ctrl(&mut app, 'u');
    assert_eq!(app.answer(), "");
    type_str(&mut app, "3");
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "4");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.screen().outcome(),
        Some(OutcomeEvent::Incorrect { correct: 10 })
    );
}

#[test]
fn answer_field_is_locked_after_resolution() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "9");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::RoundResolved);

    app.handle_input(InputEvent::Edit(AnswerEdit::Push('5')));
    app.handle_input(InputEvent::Edit(AnswerEdit::Clear));
    assert_eq!(app.answer(), "9");
}

#[test]
fn q_types_during_round_but_quits_elsewhere() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.answer(), "q");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.phase(), Phase::Idle);
    assert!(!app.controller().is_timer_running());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_mid_round() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'c');
    assert!(app.should_quit());
}

#[test]
fn ctrl_r_restarts_from_round_one() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "10");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.controller().round(), 2);

    type_str(&mut app, "77");
    ctrl(&mut app, 'r');
    assert_eq!(app.controller().round(), 1);
    assert_eq!(app.controller().score(), 0);
    assert_eq!(app.controller().best(), 1);
    assert_eq!(app.answer(), "");
    assert_eq!(app.phase(), Phase::RoundActive);
}

#[test]
fn key_release_is_ignored() {
    let mut app = app();
    app.handle_key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(app.phase(), Phase::Idle);
}

#[test]
fn ticking_through_the_limit_times_out() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "10");
    for _ in 0..14 {
        app.tick(1000);
    }
    assert_eq!(app.phase(), Phase::RoundResolved);
    assert_eq!(
        app.screen().outcome(),
        Some(OutcomeEvent::TimedOut { correct: 10 })
    );

    // Too late: Enter now advances instead of submitting.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().score(), 0);
    assert_eq!(app.controller().round(), 2);
}
