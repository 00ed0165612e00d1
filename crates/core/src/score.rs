//! Score tracking - current score plus the durable best score.

use crate::store::BestScoreStore;

/// Holds the session score and the best score, persisting the latter.
pub struct ScoreTracker {
    score: u32,
    best: u32,
    store: Box<dyn BestScoreStore>,
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("score", &self.score)
            .field("best", &self.best)
            .finish_non_exhaustive()
    }
}

impl ScoreTracker {
    /// Start a session: score 0, best loaded from `store`.
    pub fn load(store: Box<dyn BestScoreStore>) -> Self {
        let best = store.load_best();
        Self {
            score: 0,
            best,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Count a resolved round. Only correct answers score.
    pub fn record_round_result(&mut self, correct: bool) {
        if correct {
            self.score = self.score.saturating_add(1);
        }
    }

    /// Raise and persist the best score if the current score beats it.
    ///
    /// A failed write keeps the in-memory best and is not retried.
    pub fn maybe_update_best(&mut self) -> bool {
        if self.score <= self.best {
            return false;
        }
        self.best = self.score;
        match self.store.save_best(self.best) {
            Ok(()) => tracing::info!(best = self.best, "new best score"),
            Err(err) => {
                tracing::warn!(best = self.best, %err, "new best score not persisted")
            }
        }
        true
    }

    /// Back to 0 for a new game. The best score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
