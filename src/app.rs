//! App: routes player input to the round controller.
//!
//! Owns the controller (with the terminal [`ScreenState`] as its presenter) and
//! the answer field. Input locking lives here: typing and submitting only work
//! while the round accepts answers, advancing only after it is resolved.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::{RandomSource, RoundController, SimpleRng, Submission};
use crate::input::{map_key, should_quit, AnswerField, InputEvent};
use crate::term::{FrameInput, ScreenState};
use crate::types::{Phase, PlayerAction};

pub struct App<R: RandomSource = SimpleRng> {
    controller: RoundController<ScreenState, R>,
    answer: AnswerField,
    quit: bool,
}

impl<R: RandomSource> App<R> {
    pub fn new(controller: RoundController<ScreenState, R>) -> Self {
        Self {
            controller,
            answer: AnswerField::new(),
            quit: false,
        }
    }

    pub fn controller(&self) -> &RoundController<ScreenState, R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RoundController<ScreenState, R> {
        &mut self.controller
    }

    pub fn screen(&self) -> &ScreenState {
        self.controller.presenter()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn frame_input(&self) -> FrameInput<'_> {
        FrameInput {
            phase: self.phase(),
            screen: self.screen(),
            answer: self.answer.as_str(),
        }
    }

    /// Feed elapsed frame time to the countdown.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.controller.tick(elapsed_ms);
    }

    /// Handle a terminal key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let phase = self.phase();
        if should_quit(key, phase) {
            self.quit = true;
            return;
        }
        if let Some(event) = map_key(key, phase) {
            self.handle_input(event);
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Action(action) => self.apply_action(action),
            InputEvent::Edit(edit) => {
                if self.controller.can_submit() {
                    self.answer.apply(edit);
                }
            }
        }
    }

    pub fn apply_action(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::StartGame => {
                if self.phase() == Phase::Idle {
                    self.answer.clear();
                    self.controller.start_game();
                }
            }
            PlayerAction::Submit => {
                if let Submission::Rejected(err) = self.controller.submit_answer(self.answer.as_str())
                {
                    tracing::debug!(%err, answer = self.answer.as_str(), "submission rejected");
                }
            }
            PlayerAction::AdvanceRound => {
                if self.controller.advance_round() {
                    self.answer.clear();
                }
            }
            PlayerAction::ResetGame => {
                self.answer.clear();
                self.controller.reset_game();
            }
            PlayerAction::ReturnToMenu => self.controller.return_to_menu(),
        }
    }
}
