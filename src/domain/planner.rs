//! Greedy loot collection planner.
//!
//! Allocates the crew's shared bag capacity across loot categories in the
//! fixed value-density order. This is a single-pass allocator, not a full
//! knapsack solver; in this domain the fixed order is already optimal except
//! for artwork, which the order places after the divisible categories on
//! purpose.

use std::collections::HashMap;

use super::catalog::{secondary_loot, SecondaryLoot, BAG_TOTAL_UNITS, VALUE_PRIORITY};

/// One line of the collection plan. Entries come out in pickup priority
/// order, which doubles as the user-facing "grab it in this order" guide.
#[derive(Clone, Debug, PartialEq)]
pub struct LootPlanEntry {
    pub loot_id: &'static str,
    pub name: &'static str,
    pub grabs: u32,
    pub weight_units: f64,
    pub bags: f64,
    pub value: f64,
}

#[derive(Default)]
struct LootTake {
    grabs: u32,
    units: f64,
    value: f64,
}

/// Plans the optimal pickup given the available grabs per loot id.
///
/// Capacity is `player_count` bags. Team-only loot is skipped when solo.
/// The plan never exceeds capacity: the only partial grab ever taken (cash,
/// the lowest-priority category) stops exactly at the capacity boundary.
pub fn plan_collection(
    player_count: u8,
    available_grabs: &HashMap<String, u32>,
    value_multiplier: f64,
) -> Vec<LootPlanEntry> {
    let capacity_units = player_count as f64 * BAG_TOTAL_UNITS;
    let mut remaining_units = capacity_units;
    let mut plan = Vec::new();

    for id in VALUE_PRIORITY {
        if remaining_units <= 0.0 {
            break;
        }

        let Some(loot) = secondary_loot(id) else {
            continue;
        };

        if loot.team_only && player_count == 1 {
            continue;
        }

        let available = available_grabs.get(id).copied().unwrap_or(0);
        if available == 0 {
            continue;
        }

        let allow_overfill = id == "cash";
        let take = collect_loot(loot, available, remaining_units, value_multiplier, allow_overfill);

        if take.grabs > 0 {
            plan.push(LootPlanEntry {
                loot_id: loot.id,
                name: loot.name,
                grabs: take.grabs,
                weight_units: take.units,
                bags: take.units / BAG_TOTAL_UNITS,
                value: take.value,
            });
            remaining_units -= take.units;
        }
    }

    plan
}

/// Walks one category's grabs against the remaining capacity.
///
/// No-overfill loot moves in whole piles only. Everything else takes grabs
/// one at a time in the pile's fixed weight order, cycling the sequence when
/// more than one pile is available. `allow_overfill` permits one final
/// partial grab that fills the bag exactly.
fn collect_loot(
    loot: &SecondaryLoot,
    available_grabs: u32,
    remaining_units: f64,
    value_multiplier: f64,
    allow_overfill: bool,
) -> LootTake {
    if available_grabs == 0 || remaining_units <= 0.0 {
        return LootTake::default();
    }

    let value_per_unit = loot.value_per_pile * value_multiplier / loot.pile_units();

    if loot.no_overfill {
        let full_pile_units = loot.pile_units();
        if remaining_units < full_pile_units {
            return LootTake::default();
        }
        let piles_fit = (remaining_units / full_pile_units).floor() as u32;
        let piles_available = available_grabs / loot.grabs_per_pile as u32;
        let piles = piles_fit.min(piles_available);
        let units = piles as f64 * full_pile_units;
        return LootTake {
            grabs: piles * loot.grabs_per_pile as u32,
            units,
            value: units * value_per_unit,
        };
    }

    let mut take = LootTake::default();
    for grab in 0..available_grabs {
        let weight = loot.grab_weight_units[grab as usize % loot.grabs_per_pile];
        if take.units + weight <= remaining_units {
            take.grabs += 1;
            take.units += weight;
            take.value += weight * value_per_unit;
        } else if allow_overfill && take.units < remaining_units {
            let partial = remaining_units - take.units;
            take.grabs += 1;
            take.units += partial;
            take.value += partial * value_per_unit;
            break;
        } else {
            break;
        }
    }

    take
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grabs(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(id, piles)| {
                let loot = secondary_loot(id).unwrap();
                (id.to_string(), piles * loot.grabs_per_pile as u32)
            })
            .collect()
    }

    fn total_units(plan: &[LootPlanEntry]) -> f64 {
        plan.iter().map(|entry| entry.weight_units).sum()
    }

    #[test]
    fn empty_availability_yields_empty_plan() {
        let plan = plan_collection(2, &HashMap::new(), 1.0);
        assert!(plan.is_empty());
    }

    #[test]
    fn team_only_gold_is_skipped_when_solo() {
        let available = grabs(&[("gold", 1), ("cash", 1)]);
        let plan = plan_collection(1, &available, 1.0);
        assert!(plan.iter().all(|entry| entry.loot_id != "gold"));
        assert_eq!(plan[0].loot_id, "cash");
    }

    #[test]
    fn gold_is_collected_with_a_crew() {
        let available = grabs(&[("gold", 1)]);
        let plan = plan_collection(2, &available, 1.0);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].loot_id, "gold");
        assert_eq!(plan[0].grabs, 7);
        assert_eq!(plan[0].weight_units, 1200.0);
        assert!((plan[0].value - 330_833.0).abs() < 1e-6);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let available = grabs(&[
            ("gold", 4),
            ("cocaine", 6),
            ("artwork", 3),
            ("weed", 5),
            ("cash", 8),
        ]);
        for players in 1..=4u8 {
            let plan = plan_collection(players, &available, 1.0);
            let capacity = players as f64 * BAG_TOTAL_UNITS;
            assert!(
                total_units(&plan) <= capacity + 1e-9,
                "{players} players: {} > {capacity}",
                total_units(&plan)
            );
        }
    }

    #[test]
    fn artwork_only_moves_in_whole_piles() {
        let artwork = secondary_loot("artwork").unwrap();
        let available = grabs(&[("cocaine", 2), ("artwork", 3), ("cash", 2)]);
        let plan = plan_collection(2, &available, 1.0);
        let entry = plan.iter().find(|entry| entry.loot_id == "artwork").unwrap();
        let piles = entry.weight_units / artwork.pile_units();
        assert_eq!(piles.fract(), 0.0, "artwork units {}", entry.weight_units);
    }

    #[test]
    fn artwork_that_does_not_fit_is_left_behind() {
        // Solo bag (1800) minus two cocaine piles (2 x 900) leaves no room
        // for a 900-unit artwork pile, and artwork never goes partial.
        let available = grabs(&[("cocaine", 2), ("artwork", 1)]);
        let plan = plan_collection(1, &available, 1.0);
        assert!(plan.iter().all(|entry| entry.loot_id != "artwork"));
        assert_eq!(total_units(&plan), 1800.0);
    }

    #[test]
    fn cash_tops_the_bag_off_with_a_partial_grab() {
        // Cocaine (900) plus weed (675) leave 225 units. Five whole cash
        // grabs weigh 190; the sixth (40) no longer fits, so the partial
        // branch takes the remaining 35 and fills the bag exactly.
        let available = grabs(&[("cocaine", 1), ("weed", 1), ("cash", 1)]);
        let plan = plan_collection(1, &available, 1.0);
        assert_eq!(total_units(&plan), 1800.0);
        let cash = plan.iter().find(|entry| entry.loot_id == "cash").unwrap();
        assert_eq!(cash.weight_units, 225.0);
        assert_eq!(cash.grabs, 6);
    }

    #[test]
    fn cash_never_overfills_even_when_it_lands_on_the_boundary() {
        // One artwork pile leaves 900 units and two cash piles weigh exactly
        // 900, so everything fits whole and no partial grab is recorded.
        let available = grabs(&[("artwork", 1), ("cash", 4)]);
        let plan = plan_collection(1, &available, 1.0);
        assert_eq!(total_units(&plan), 1800.0);
        let cash = plan.iter().find(|entry| entry.loot_id == "cash").unwrap();
        assert_eq!(cash.weight_units, 900.0);
        assert_eq!(cash.grabs, 20);
    }

    #[test]
    fn entries_follow_the_fixed_priority_order() {
        let available = grabs(&[
            ("cash", 1),
            ("weed", 1),
            ("gold", 1),
            ("artwork", 1),
            ("cocaine", 1),
        ]);
        let plan = plan_collection(4, &available, 1.0);
        let order: Vec<&str> = plan.iter().map(|entry| entry.loot_id).collect();
        let expected: Vec<&str> = VALUE_PRIORITY
            .iter()
            .copied()
            .filter(|id| order.contains(id))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn multiplier_scales_value_but_not_weight() {
        let available = grabs(&[("cocaine", 1)]);
        let flat = plan_collection(2, &available, 1.0);
        let boosted = plan_collection(2, &available, 1.2);
        assert_eq!(flat[0].weight_units, boosted[0].weight_units);
        assert!((boosted[0].value - flat[0].value * 1.2).abs() < 1e-6);
    }

    #[test]
    fn grab_sequence_cycles_past_one_pile() {
        // Two weed piles = 20 grabs totalling 1350 units; all fit in one bag
        // with room to spare.
        let available = grabs(&[("weed", 2)]);
        let plan = plan_collection(1, &available, 1.0);
        assert_eq!(plan[0].grabs, 20);
        assert_eq!(plan[0].weight_units, 1350.0);
    }
}
