//! Key mapping from terminal events to game input, per phase.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::answer::AnswerEdit;
use crate::types::{Phase, PlayerAction};

/// What a key press means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(PlayerAction),
    Edit(AnswerEdit),
}

/// Map keyboard input to game input for the given phase.
///
/// While a round is active, letters go into the answer field, so the only
/// shortcuts are Enter, Esc and Ctrl-R.
pub fn map_key(key: KeyEvent, phase: Phase) -> Option<InputEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match phase {
        Phase::Idle => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(InputEvent::Action(PlayerAction::StartGame))
            }
            _ => None,
        },
        Phase::RoundActive => match key.code {
            KeyCode::Enter => Some(InputEvent::Action(PlayerAction::Submit)),
            KeyCode::Esc => Some(InputEvent::Action(PlayerAction::ReturnToMenu)),
            KeyCode::Char('r') | KeyCode::Char('R') if ctrl => {
                Some(InputEvent::Action(PlayerAction::ResetGame))
            }
            KeyCode::Char('u') if ctrl => Some(InputEvent::Edit(AnswerEdit::Clear)),
            KeyCode::Backspace => Some(InputEvent::Edit(AnswerEdit::Backspace)),
            KeyCode::Char(ch) if !ctrl => Some(InputEvent::Edit(AnswerEdit::Push(ch))),
            _ => None,
        },
        Phase::RoundResolved => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(InputEvent::Action(PlayerAction::AdvanceRound))
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(InputEvent::Action(PlayerAction::ResetGame))
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                Some(InputEvent::Action(PlayerAction::ReturnToMenu))
            }
            _ => None,
        },
    }
}

/// Check if key should quit the game.
///
/// `q` only quits when it cannot be part of an answer.
pub fn should_quit(key: KeyEvent, phase: Phase) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    phase != Phase::RoundActive && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
