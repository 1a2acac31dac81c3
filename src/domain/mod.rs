//! Pure calculation logic for heist earnings lives here. No I/O.

pub mod app_state;
pub mod catalog;
pub mod payout;
pub mod planner;

#[allow(unused_imports)]
pub use app_state::{
    default_splits, AppState, HeistState, PersistedState, Theme, OFFICE_SAFE_MAX, SPLIT_MIN,
    SPLIT_STEP,
};
#[allow(unused_imports)]
pub use catalog::{
    primary_target, secondary_loot, PrimaryTarget, SecondaryLoot, BAG_TOTAL_UNITS,
    PRIMARY_TARGETS, SECONDARY_LOOT, VALUE_PRIORITY,
};
#[allow(unused_imports)]
pub use payout::{calculate_heist, HeistCalculation, PlayerShare};
#[allow(unused_imports)]
pub use planner::{plan_collection, LootPlanEntry};
