//! Answer entry field.
//!
//! A fixed-capacity buffer so typing never allocates. Any printable character is
//! accepted: judging the text is the core's job, which is what makes
//! "not a number" reachable as a validation error.

use arrayvec::ArrayString;

use crate::types::MAX_ANSWER_LEN;

/// Edit applied to the answer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerEdit {
    Push(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerField {
    text: ArrayString<MAX_ANSWER_LEN>,
}

impl AnswerField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Apply an edit. Returns whether the text changed.
    ///
    /// Control characters are ignored, as is input past capacity.
    pub fn apply(&mut self, edit: AnswerEdit) -> bool {
        match edit {
            AnswerEdit::Push(ch) => {
                if ch.is_control() {
                    return false;
                }
                self.text.try_push(ch).is_ok()
            }
            AnswerEdit::Backspace => self.text.pop().is_some(),
            AnswerEdit::Clear => {
                let changed = !self.text.is_empty();
                self.text.clear();
                changed
            }
        }
    }
}
