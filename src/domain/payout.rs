//! Earnings aggregation: fee cascade, bonuses and crew split.

use std::collections::HashMap;

use super::app_state::{default_splits, HeistState};
use super::catalog::{primary_target, BAG_TOTAL_UNITS, SECONDARY_LOOT};
use super::planner::{plan_collection, LootPlanEntry};

/// Fence fee, taken from the gross total.
const FENCE_FEE: f64 = 0.10;
/// Pavel's cut, also taken from the gross total (not from the post-fence
/// amount; the two deductions share the same base).
const PAVEL_CUT: f64 = 0.02;
/// Flat setup cost charged on a first-time run.
const SETUP_COST: f64 = 25_000.0;
const ELITE_BONUS_HARD: f64 = 100_000.0;
const ELITE_BONUS_NORMAL: f64 = 50_000.0;

/// One crew member's slice of the net total.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerShare {
    pub split: u32,
    pub amount: f64,
}

/// Full earnings breakdown for one input snapshot. Values are exact; rounding
/// to whole dollars happens in the formatting layer.
#[derive(Clone, Debug, PartialEq)]
pub struct HeistCalculation {
    pub primary_value: f64,
    pub hard_mode_bonus: f64,
    pub secondary_value: f64,
    pub secondary_multiplier: f64,
    pub gross_total: f64,
    pub fence_fee: f64,
    pub after_fence: f64,
    pub pavel_cut: f64,
    pub after_pavel: f64,
    pub setup_cost: f64,
    pub elite_bonus: f64,
    pub office_safe_amount: f64,
    pub net_total: f64,
    pub per_player_net: f64,
    pub per_player_breakdown: Vec<PlayerShare>,
    pub bag_used_units: f64,
    pub bag_capacity_units: f64,
    pub bag_used_percent: f64,
    pub bag_capacity_percent: f64,
    pub bags_used: f64,
    pub bags_total: u8,
    pub is_over_capacity: bool,
    pub optimal_collection: Vec<LootPlanEntry>,
}

/// Computes the full breakdown for a snapshot.
///
/// Total over any input: an unknown target id resolves to zero payouts and a
/// mismatched split list falls back to the default split for the crew size.
pub fn calculate_heist(state: &HeistState) -> HeistCalculation {
    let player_count = state.player_count.clamp(1, 4);

    let target = primary_target(&state.primary_target_id);
    let standard_value = target.map(|t| t.standard_value).unwrap_or(0.0);
    let hard_value = target.map(|t| t.hard_value).unwrap_or(standard_value);
    let primary_value = if state.hard_mode { hard_value } else { standard_value };
    let hard_mode_bonus = if state.hard_mode {
        hard_value - standard_value
    } else {
        0.0
    };

    let secondary_multiplier = if state.within_cooldown {
        target.map(|t| t.bonus_multiplier).unwrap_or(1.0)
    } else {
        1.0
    };

    let bag_capacity_units = player_count as f64 * BAG_TOTAL_UNITS;

    let mut available_grabs = HashMap::new();
    for loot in SECONDARY_LOOT {
        let piles = state.loot_stacks.get(loot.id).copied().unwrap_or(0);
        available_grabs.insert(loot.id.to_string(), piles * loot.grabs_per_pile as u32);
    }

    let optimal_collection = plan_collection(player_count, &available_grabs, secondary_multiplier);

    let mut bag_used_units = 0.0;
    let mut secondary_value = 0.0;
    for entry in &optimal_collection {
        bag_used_units += entry.weight_units;
        secondary_value += entry.value;
    }

    let gross_total = primary_value + secondary_value;
    let fence_fee = gross_total * FENCE_FEE;
    let pavel_cut = gross_total * PAVEL_CUT;
    let after_fence = gross_total - fence_fee;
    let after_pavel = gross_total - fence_fee - pavel_cut;
    let setup_cost = if state.first_time { SETUP_COST } else { 0.0 };
    let elite_bonus = if state.elite_challenge {
        if state.hard_mode {
            ELITE_BONUS_HARD
        } else {
            ELITE_BONUS_NORMAL
        }
    } else {
        0.0
    };
    let office_safe_amount = state.office_safe as f64;
    let net_total = after_pavel - setup_cost + elite_bonus + office_safe_amount;

    let splits = if state.player_splits.len() == player_count as usize {
        state.player_splits.clone()
    } else {
        default_splits(player_count)
    };
    let per_player_breakdown = splits
        .into_iter()
        .map(|split| PlayerShare {
            split,
            amount: net_total * (split as f64 / 100.0),
        })
        .collect();
    let per_player_net = net_total / player_count as f64;

    HeistCalculation {
        primary_value,
        hard_mode_bonus,
        secondary_value,
        secondary_multiplier,
        gross_total,
        fence_fee,
        after_fence,
        pavel_cut,
        after_pavel,
        setup_cost,
        elite_bonus,
        office_safe_amount,
        net_total,
        per_player_net,
        per_player_breakdown,
        bag_used_units,
        bag_capacity_units,
        bag_used_percent: bag_used_units / bag_capacity_units * 100.0,
        bag_capacity_percent: player_count as f64 * 100.0,
        bags_used: bag_used_units / BAG_TOTAL_UNITS,
        bags_total: player_count,
        is_over_capacity: bag_used_units > bag_capacity_units,
        optimal_collection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> HeistState {
        HeistState::default()
    }

    #[test]
    fn pink_diamond_solo_baseline() {
        let calc = calculate_heist(&snapshot());
        assert_eq!(calc.primary_value, 1_300_000.0);
        assert_eq!(calc.gross_total, 1_300_000.0);
        assert_eq!(calc.fence_fee, 130_000.0);
        assert_eq!(calc.pavel_cut, 26_000.0);
        assert_eq!(calc.net_total, 1_144_000.0);
        assert!(calc.optimal_collection.is_empty());
        assert_eq!(calc.bag_used_units, 0.0);
    }

    #[test]
    fn first_time_run_pays_the_setup_cost() {
        let mut state = snapshot();
        state.first_time = true;
        let calc = calculate_heist(&state);
        assert_eq!(calc.setup_cost, 25_000.0);
        assert_eq!(calc.net_total, 1_119_000.0);
    }

    #[test]
    fn both_fees_are_taken_from_gross_not_compounded() {
        let calc = calculate_heist(&snapshot());
        // 2% of the post-fence amount would be 23,400, not 26,000.
        assert_eq!(calc.pavel_cut, calc.gross_total * 0.02);
        assert_eq!(calc.after_pavel, calc.gross_total - calc.fence_fee - calc.pavel_cut);
    }

    #[test]
    fn elite_bonus_tiers_follow_the_difficulty_flag() {
        let mut state = snapshot();
        state.elite_challenge = true;
        assert_eq!(calculate_heist(&state).elite_bonus, 50_000.0);
        state.hard_mode = true;
        assert_eq!(calculate_heist(&state).elite_bonus, 100_000.0);
    }

    #[test]
    fn hard_mode_bonus_is_the_payout_delta() {
        let mut state = snapshot();
        state.hard_mode = true;
        let calc = calculate_heist(&state);
        assert_eq!(calc.primary_value, 1_430_000.0);
        assert_eq!(calc.hard_mode_bonus, 130_000.0);
    }

    #[test]
    fn unknown_target_degrades_to_zero_payout() {
        let mut state = snapshot();
        state.primary_target_id = "golden-fleece".to_string();
        state.office_safe = 40_000;
        let calc = calculate_heist(&state);
        assert_eq!(calc.primary_value, 0.0);
        assert_eq!(calc.gross_total, 0.0);
        assert_eq!(calc.net_total, 40_000.0);
    }

    #[test]
    fn cooldown_multiplier_applies_only_when_flagged() {
        let mut state = snapshot();
        state.primary_target_id = "tequila".to_string();
        state.player_count = 2;
        state.player_splits = vec![50, 50];
        state.loot_stacks.insert("cocaine".to_string(), 1);
        let flat = calculate_heist(&state);
        assert_eq!(flat.secondary_multiplier, 1.0);
        state.within_cooldown = true;
        let boosted = calculate_heist(&state);
        assert_eq!(boosted.secondary_multiplier, 1.2);
        assert!((boosted.secondary_value - flat.secondary_value * 1.2).abs() < 1e-6);
    }

    #[test]
    fn even_split_of_a_round_net_is_exact() {
        let mut state = snapshot();
        state.primary_target_id = "golden-fleece".to_string();
        state.player_count = 2;
        state.player_splits = vec![50, 50];
        state.office_safe = 0;
        // Zero-value target plus a synthetic bonus keeps the net round.
        state.elite_challenge = true;
        state.hard_mode = true;
        // net = 100,000 elite bonus only
        let calc = calculate_heist(&state);
        assert_eq!(calc.net_total, 100_000.0);
        assert_eq!(calc.per_player_breakdown[0].amount, 50_000.0);
        assert_eq!(calc.per_player_breakdown[1].amount, 50_000.0);
    }

    #[test]
    fn default_splits_sum_to_one_hundred_for_all_crew_sizes() {
        for players in 1..=4u8 {
            let total: u32 = default_splits(players).iter().sum();
            assert_eq!(total, 100, "{players} players");
        }
    }

    #[test]
    fn distributed_amounts_sum_back_to_the_net_total() {
        for players in 1..=4u8 {
            let mut state = snapshot();
            state.player_count = players;
            state.player_splits = default_splits(players);
            state.loot_stacks.insert("weed".to_string(), 3);
            let calc = calculate_heist(&state);
            let distributed: f64 = calc
                .per_player_breakdown
                .iter()
                .map(|share| share.amount)
                .sum();
            assert!(
                (distributed - calc.net_total).abs() < 1e-6,
                "{players} players: {distributed} vs {}",
                calc.net_total
            );
        }
    }

    #[test]
    fn mismatched_split_list_falls_back_to_the_default_split() {
        let mut state = snapshot();
        state.player_count = 3;
        state.player_splits = vec![60, 40];
        let calc = calculate_heist(&state);
        let splits: Vec<u32> = calc
            .per_player_breakdown
            .iter()
            .map(|share| share.split)
            .collect();
        assert_eq!(splits, vec![35, 35, 30]);
    }

    #[test]
    fn solo_crew_cannot_carry_gold() {
        let mut state = snapshot();
        state.loot_stacks.insert("gold".to_string(), 1);
        let calc = calculate_heist(&state);
        assert!(calc.optimal_collection.is_empty());
        assert_eq!(calc.secondary_value, 0.0);
        assert_eq!(calc.bag_used_units, 0.0);
    }

    #[test]
    fn recomputing_the_same_snapshot_is_bit_identical() {
        let mut state = snapshot();
        state.player_count = 3;
        state.player_splits = vec![40, 35, 25];
        state.hard_mode = true;
        state.within_cooldown = true;
        state.primary_target_id = "ruby-necklace".to_string();
        state.loot_stacks.insert("cocaine".to_string(), 2);
        state.loot_stacks.insert("cash".to_string(), 5);
        assert_eq!(calculate_heist(&state), calculate_heist(&state));
    }

    #[test]
    fn bag_figures_track_the_collection_plan() {
        let mut state = snapshot();
        state.player_count = 2;
        state.player_splits = vec![50, 50];
        state.loot_stacks.insert("artwork".to_string(), 2);
        let calc = calculate_heist(&state);
        assert_eq!(calc.bag_used_units, 1800.0);
        assert_eq!(calc.bag_capacity_units, 3600.0);
        assert_eq!(calc.bag_used_percent, 50.0);
        assert_eq!(calc.bag_capacity_percent, 200.0);
        assert_eq!(calc.bags_used, 1.0);
        assert_eq!(calc.bags_total, 2);
        assert!(!calc.is_over_capacity);
    }
}
