use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::{primary_target, SECONDARY_LOOT};

/// Smallest cut a crew member can be pushed down to.
pub const SPLIT_MIN: u32 = 15;
/// Cuts move in steps of this size.
pub const SPLIT_STEP: u32 = 5;
/// Upper bound on the office safe find.
pub const OFFICE_SAFE_MAX: u32 = 99_000;

/// Canonical split for a crew size. Always sums to exactly 100.
pub fn default_splits(player_count: u8) -> Vec<u32> {
    match player_count {
        1 => vec![100],
        2 => vec![50, 50],
        3 => vec![35, 35, 30],
        _ => vec![25, 25, 25, 25],
    }
}

/// The full input snapshot the calculator runs over. Mutated by the UI,
/// consumed read-only by `payout::calculate_heist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeistState {
    pub primary_target_id: String,
    pub player_count: u8,
    pub player_splits: Vec<u32>,
    pub hard_mode: bool,
    pub within_cooldown: bool,
    pub first_time: bool,
    pub elite_challenge: bool,
    pub office_safe: u32,
    /// Piles found per loot id.
    pub loot_stacks: HashMap<String, u32>,
}

impl Default for HeistState {
    fn default() -> Self {
        Self {
            primary_target_id: "pink-diamond".to_string(),
            player_count: 1,
            player_splits: vec![100],
            hard_mode: false,
            within_cooldown: false,
            first_time: false,
            elite_challenge: false,
            office_safe: 0,
            loot_stacks: SECONDARY_LOOT
                .iter()
                .map(|loot| (loot.id.to_string(), 0))
                .collect(),
        }
    }
}

impl HeistState {
    pub fn stacks(&self, loot_id: &str) -> u32 {
        self.loot_stacks.get(loot_id).copied().unwrap_or(0)
    }

    pub fn set_stacks(&mut self, loot_id: &str, piles: u32) {
        self.loot_stacks.insert(loot_id.to_string(), piles);
    }

    /// Changing the crew size resets the cuts to the canonical split and
    /// drops any team-only loot when going solo.
    pub fn set_player_count(&mut self, count: u8) {
        self.player_count = count.clamp(1, 4);
        self.player_splits = default_splits(self.player_count);
        if self.player_count == 1 {
            for loot in SECONDARY_LOOT {
                if loot.team_only {
                    self.loot_stacks.insert(loot.id.to_string(), 0);
                }
            }
        }
    }

    pub fn raise_split(&mut self, index: usize) {
        if let Some(split) = self.player_splits.get_mut(index) {
            *split = (*split + SPLIT_STEP).min(100);
        }
    }

    pub fn lower_split(&mut self, index: usize) {
        if let Some(split) = self.player_splits.get_mut(index) {
            if *split > SPLIT_MIN {
                *split -= SPLIT_STEP;
            }
        }
    }

    /// Turning the first-time flag off deselects a first-time-only target.
    pub fn set_first_time(&mut self, first_time: bool) {
        self.first_time = first_time;
        if !first_time {
            let restricted = primary_target(&self.primary_target_id)
                .map(|target| target.first_time_only)
                .unwrap_or(false);
            if restricted {
                self.primary_target_id = "pink-diamond".to_string();
            }
        }
    }

    pub fn set_office_safe(&mut self, amount: u32) {
        self.office_safe = amount.min(OFFICE_SAFE_MAX);
    }

    pub fn active_splits(&self) -> &[u32] {
        let count = (self.player_count as usize).min(self.player_splits.len());
        &self.player_splits[..count]
    }

    pub fn split_total(&self) -> u32 {
        self.active_splits().iter().sum()
    }

    pub fn has_any_loot(&self) -> bool {
        self.loot_stacks.values().any(|&piles| piles > 0)
    }
}

/// UI color scheme. Dark is the default, matching the in-game phone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub heist: HeistState,
    pub theme: Theme,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.heist = persisted.heist;
        self.theme = persisted.theme;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            heist: self.heist.clone(),
            theme: self.theme,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub heist: HeistState,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn going_solo_resets_splits_and_drops_team_only_loot() {
        let mut state = HeistState::default();
        state.set_player_count(3);
        state.set_stacks("gold", 2);
        state.set_stacks("cash", 1);
        state.set_player_count(1);
        assert_eq!(state.player_splits, vec![100]);
        assert_eq!(state.stacks("gold"), 0);
        assert_eq!(state.stacks("cash"), 1);
    }

    #[test]
    fn player_count_is_clamped_to_the_crew_range() {
        let mut state = HeistState::default();
        state.set_player_count(9);
        assert_eq!(state.player_count, 4);
        assert_eq!(state.player_splits, vec![25, 25, 25, 25]);
        state.set_player_count(0);
        assert_eq!(state.player_count, 1);
    }

    #[test]
    fn splits_move_in_steps_and_respect_the_floor_and_ceiling() {
        let mut state = HeistState::default();
        state.set_player_count(2);
        state.lower_split(0);
        assert_eq!(state.player_splits[0], 45);
        for _ in 0..20 {
            state.lower_split(0);
        }
        assert_eq!(state.player_splits[0], SPLIT_MIN);
        for _ in 0..30 {
            state.raise_split(1);
        }
        assert_eq!(state.player_splits[1], 100);
    }

    #[test]
    fn clearing_first_time_deselects_the_restricted_target() {
        let mut state = HeistState::default();
        state.set_first_time(true);
        state.primary_target_id = "madrazo".to_string();
        state.set_first_time(false);
        assert_eq!(state.primary_target_id, "pink-diamond");

        state.primary_target_id = "tequila".to_string();
        state.set_first_time(false);
        assert_eq!(state.primary_target_id, "tequila");
    }

    #[test]
    fn office_safe_is_clamped_to_its_ceiling() {
        let mut state = HeistState::default();
        state.set_office_safe(150_000);
        assert_eq!(state.office_safe, OFFICE_SAFE_MAX);
    }

    #[test]
    fn split_total_only_counts_active_players() {
        let mut state = HeistState::default();
        state.set_player_count(4);
        state.player_count = 2;
        assert_eq!(state.active_splits(), &[25, 25]);
        assert_eq!(state.split_total(), 50);
    }

    #[test]
    fn persisted_round_trip_preserves_the_snapshot() {
        let mut state = AppState::default();
        state.heist.set_player_count(3);
        state.heist.set_stacks("weed", 4);
        state.theme = Theme::Light;
        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();
        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.heist, state.heist);
        assert_eq!(fresh.theme, Theme::Light);
    }
}
