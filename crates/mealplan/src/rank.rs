use nutrithali_shared::meal::MealRecord;
use nutrithali_shared::profile::Goal;

/// Orders candidates for the user's goal with a stable sort, so meals with
/// equal keys keep their filtered order.
///
/// `Build Muscle` moves high-protein meals to the front; every other goal sorts
/// by ascending calories.
pub fn rank_candidates(candidates: &mut [&MealRecord], goal: Goal) {
    match goal {
        Goal::BuildMuscle => candidates.sort_by_key(|meal| !meal.is_high_protein()),
        Goal::LoseFat
        | Goal::MaintainWeight
        | Goal::ManageCondition
        | Goal::AddressDeficiency => candidates.sort_by_key(|meal| meal.macros.calories),
    }
}
