//! ScreenState: the terminal side of the core's presentation boundary.
//!
//! The controller pushes item counts, outcomes and HUD snapshots in through
//! [`Presenter`]; the view reads them back out when drawing a frame.

use crate::core::Presenter;
use crate::types::{HudSnapshot, OutcomeEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    item_count: u32,
    outcome: Option<OutcomeEvent>,
    hud: HudSnapshot,
    /// Incremented on every presenter call; a cheap "needs redraw" fingerprint.
    version: u64,
    /// Rounds displayed so far, used to vary the car palette between rounds.
    rounds_shown: u32,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn outcome(&self) -> Option<OutcomeEvent> {
        self.outcome
    }

    pub fn hud(&self) -> HudSnapshot {
        self.hud
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn rounds_shown(&self) -> u32 {
        self.rounds_shown
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl Presenter for ScreenState {
    fn display_item_count(&mut self, count: u32) {
        self.item_count = count;
        self.rounds_shown = self.rounds_shown.wrapping_add(1);
        self.bump();
    }

    fn show_outcome(&mut self, event: OutcomeEvent) {
        self.outcome = Some(event);
        self.bump();
    }

    fn clear_outcome(&mut self) {
        self.outcome = None;
        self.bump();
    }

    fn update_hud(&mut self, hud: HudSnapshot) {
        self.hud = hud;
        self.bump();
    }
}

/// Player-facing text for an outcome.
pub fn outcome_message(event: OutcomeEvent) -> String {
    match event {
        OutcomeEvent::Correct => "Great! That's the right answer.".to_string(),
        OutcomeEvent::Incorrect { correct } => {
            format!("Not quite! There were {correct} cars.")
        }
        OutcomeEvent::TimedOut { correct } => {
            format!("Time's up! There were {correct} cars.")
        }
        OutcomeEvent::ValidationError => "Enter a valid whole number.".to_string(),
    }
}
