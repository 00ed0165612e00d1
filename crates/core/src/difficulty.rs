//! Difficulty scaling - linear growth of the car ceiling and linear shrink of the
//! time limit, each clamped.

use crate::config::GameConfig;

/// Parameters for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundParams {
    /// Inclusive upper bound for the car count.
    pub max_items: u32,
    /// Seconds on the countdown.
    pub time_limit: u32,
}

/// Compute the parameters for `round` (1-based).
///
/// `round` of 0 is treated like round 1.
pub fn params_for_round(round: u32, config: &GameConfig) -> RoundParams {
    RoundParams {
        max_items: max_items_for_round(round, config),
        time_limit: time_limit_for_round(round, config),
    }
}

/// `min(start_max_items + (round - 1) * increment, cap)`
pub fn max_items_for_round(round: u32, config: &GameConfig) -> u32 {
    let steps = round.saturating_sub(1);
    config
        .start_max_items
        .saturating_add(steps.saturating_mul(config.max_items_increment))
        .min(config.max_items_cap)
}

/// `max(start_time_limit - (round - 1) * decrement, min_time_limit)`
pub fn time_limit_for_round(round: u32, config: &GameConfig) -> u32 {
    let steps = round.saturating_sub(1);
    config
        .start_time_limit
        .saturating_sub(steps.saturating_mul(config.time_decrement))
        .max(config.min_time_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_one_uses_start_values() {
        let config = GameConfig::default();
        assert_eq!(
            params_for_round(1, &config),
            RoundParams {
                max_items: 18,
                time_limit: 14
            }
        );
    }

    #[test]
    fn scales_linearly_then_clamps() {
        let config = GameConfig::default();
        assert_eq!(max_items_for_round(2, &config), 20);
        assert_eq!(max_items_for_round(10, &config), 36);
        assert_eq!(max_items_for_round(22, &config), 60);
        assert_eq!(max_items_for_round(23, &config), 60);
        assert_eq!(max_items_for_round(500, &config), 60);

        assert_eq!(time_limit_for_round(2, &config), 13);
        assert_eq!(time_limit_for_round(9, &config), 6);
        assert_eq!(time_limit_for_round(10, &config), 6);
        assert_eq!(time_limit_for_round(u32::MAX, &config), 6);
    }

    #[test]
    fn huge_rounds_do_not_overflow() {
        let config = GameConfig {
            max_items_increment: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(max_items_for_round(u32::MAX, &config), config.max_items_cap);
    }
}
