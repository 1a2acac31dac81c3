//! Static reference tables for primary targets and secondary loot.
//!
//! These are fixed game facts: payout values, pile compositions and the
//! collection priority order. Nothing here is mutable at runtime.

/// Weight budget of one loot bag, per player.
pub const BAG_TOTAL_UNITS: f64 = 1800.0;

/// A primary vault target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryTarget {
    pub id: &'static str,
    pub name: &'static str,
    pub standard_value: f64,
    pub hard_value: f64,
    /// Multiplier applied to secondary loot while within the cooldown window.
    pub bonus_multiplier: f64,
    /// Only offered on a first-time run.
    pub first_time_only: bool,
    /// Event-limited target.
    pub rare: bool,
}

/// A secondary loot category. One "pile" found in the world is picked up as
/// `grabs_per_pile` discrete grabs whose weights follow `grab_weight_units`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondaryLoot {
    pub id: &'static str,
    pub name: &'static str,
    pub value_per_pile: f64,
    pub grabs_per_pile: usize,
    pub grab_weight_units: &'static [f64],
    /// Cannot be carried out solo.
    pub team_only: bool,
    /// Only moves in whole piles; a pile that does not fit is left behind.
    pub no_overfill: bool,
}

pub const PRIMARY_TARGETS: &[PrimaryTarget] = &[
    PrimaryTarget {
        id: "panther",
        name: "Panther Statue",
        standard_value: 1_900_000.0,
        hard_value: 2_090_000.0,
        bonus_multiplier: 1.0,
        first_time_only: false,
        rare: true,
    },
    PrimaryTarget {
        id: "pink-diamond",
        name: "Pink Diamond",
        standard_value: 1_300_000.0,
        hard_value: 1_430_000.0,
        bonus_multiplier: 1.0,
        first_time_only: false,
        rare: false,
    },
    PrimaryTarget {
        id: "madrazo",
        name: "Madrazo Files",
        standard_value: 1_100_000.0,
        hard_value: 1_100_000.0,
        bonus_multiplier: 1.0,
        first_time_only: true,
        rare: false,
    },
    PrimaryTarget {
        id: "bearer-bonds",
        name: "Bearer Bonds",
        standard_value: 770_000.0,
        hard_value: 850_000.0,
        bonus_multiplier: 1.05,
        first_time_only: false,
        rare: false,
    },
    PrimaryTarget {
        id: "ruby-necklace",
        name: "Ruby Necklace",
        standard_value: 700_000.0,
        hard_value: 770_000.0,
        bonus_multiplier: 1.1,
        first_time_only: false,
        rare: false,
    },
    PrimaryTarget {
        id: "tequila",
        name: "Sinsimito Tequila",
        standard_value: 630_000.0,
        hard_value: 690_000.0,
        bonus_multiplier: 1.2,
        first_time_only: false,
        rare: false,
    },
];

pub const SECONDARY_LOOT: &[SecondaryLoot] = &[
    SecondaryLoot {
        id: "gold",
        name: "Gold",
        value_per_pile: 330_833.0,
        grabs_per_pile: 7,
        grab_weight_units: &[100.0, 200.0, 100.0, 200.0, 200.0, 200.0, 200.0],
        team_only: true,
        no_overfill: false,
    },
    SecondaryLoot {
        id: "cocaine",
        name: "Cocaine",
        value_per_pile: 200_250.0,
        grabs_per_pile: 10,
        grab_weight_units: &[100.0, 100.0, 80.0, 60.0, 40.0, 80.0, 120.0, 120.0, 160.0, 40.0],
        team_only: false,
        no_overfill: false,
    },
    SecondaryLoot {
        id: "artwork",
        name: "Artwork",
        value_per_pile: 168_750.0,
        grabs_per_pile: 1,
        grab_weight_units: &[900.0],
        team_only: false,
        no_overfill: true,
    },
    SecondaryLoot {
        id: "weed",
        name: "Weed",
        value_per_pile: 132_750.0,
        grabs_per_pile: 10,
        grab_weight_units: &[75.0, 75.0, 60.0, 45.0, 30.0, 60.0, 90.0, 90.0, 120.0, 30.0],
        team_only: false,
        no_overfill: false,
    },
    SecondaryLoot {
        id: "cash",
        name: "Cash",
        value_per_pile: 81_000.0,
        grabs_per_pile: 10,
        grab_weight_units: &[50.0, 50.0, 40.0, 30.0, 20.0, 40.0, 60.0, 60.0, 80.0, 20.0],
        team_only: false,
        no_overfill: false,
    },
];

/// Collection priority, best value per bag unit first. Artwork sits after the
/// freely divisible piles because it only moves in whole-pile units; cash is
/// last and is the one category that tops the bag off with a partial grab.
pub const VALUE_PRIORITY: [&str; 5] = ["gold", "cocaine", "weed", "artwork", "cash"];

impl SecondaryLoot {
    /// Total weight of one full pile.
    pub fn pile_units(&self) -> f64 {
        self.grab_weight_units.iter().sum()
    }

    /// Share of one bag taken up by one full pile, in percent.
    pub fn pile_bag_percent(&self) -> f64 {
        self.pile_units() / BAG_TOTAL_UNITS * 100.0
    }
}

pub fn primary_target(id: &str) -> Option<&'static PrimaryTarget> {
    PRIMARY_TARGETS.iter().find(|target| target.id == id)
}

pub fn secondary_loot(id: &str) -> Option<&'static SecondaryLoot> {
    SECONDARY_LOOT.iter().find(|loot| loot.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_sequences_match_declared_pile_shape() {
        for loot in SECONDARY_LOOT {
            assert_eq!(
                loot.grab_weight_units.len(),
                loot.grabs_per_pile,
                "{} grab count",
                loot.id
            );
            assert!(loot.pile_units() > 0.0, "{} pile weight", loot.id);
        }
    }

    #[test]
    fn gold_pile_weighs_1200_units() {
        let gold = secondary_loot("gold").unwrap();
        assert_eq!(gold.pile_units(), 1200.0);
        assert!((gold.pile_bag_percent() - 66.666_666_666_666_66).abs() < 1e-9);
    }

    #[test]
    fn hard_value_never_below_standard_value() {
        for target in PRIMARY_TARGETS {
            assert!(
                target.hard_value >= target.standard_value,
                "{} hard value",
                target.id
            );
        }
    }

    #[test]
    fn priority_order_covers_every_loot_category_once() {
        assert_eq!(VALUE_PRIORITY.len(), SECONDARY_LOOT.len());
        for id in VALUE_PRIORITY {
            assert!(secondary_loot(id).is_some(), "unknown priority id {id}");
        }
    }

    #[test]
    fn lookups_resolve_known_ids_and_reject_unknown_ones() {
        assert_eq!(primary_target("pink-diamond").unwrap().standard_value, 1_300_000.0);
        assert!(primary_target("golden-fleece").is_none());
        assert!(secondary_loot("paintings").is_none());
    }
}
