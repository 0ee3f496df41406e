mod dashboard;
pub mod filter;
pub mod nutrition;
pub mod plan;
pub mod rank;

pub use dashboard::*;
pub use filter::filter_candidates;
pub use nutrition::{NutritionGoals, NutritionRollup, percent_of_goal, today_key};
pub use plan::{DayPlan, WeeklyPlan};
pub use rank::rank_candidates;

use nutrithali_catalog::Catalog;
use nutrithali_shared::meal::MealRecord;
use nutrithali_shared::profile::UserProfile;

/// Filtered and ranked candidate pool for a profile.
pub fn candidates<'a>(catalog: &'a Catalog, profile: &UserProfile) -> Vec<&'a MealRecord> {
    let mut candidates = filter_candidates(catalog.meals(), profile);
    rank_candidates(&mut candidates, profile.goal);

    candidates
}

/// Fresh weekly plan for a profile. Identical inputs give an identical plan.
pub fn weekly_plan<'a>(catalog: &'a Catalog, profile: &UserProfile) -> WeeklyPlan<'a> {
    let candidates = candidates(catalog, profile);

    if candidates.is_empty() {
        tracing::warn!(
            diet = %profile.diet,
            culture = %profile.culture,
            "no meal satisfies the profile, plan left empty"
        );
    }

    WeeklyPlan::distribute(&candidates)
}
