use nutrithali_shared::meal::{MealRecord, MealTag};
use nutrithali_shared::profile::{Allergy, Culture, Diet, UserProfile};

/// Keeps the meals compatible with the profile's hard constraints.
///
/// # Business Rules
/// - **AND Logic**: diet, every allergy and culture must all be satisfied
/// - **Order**: survivors keep their catalog order
/// - **Gluten-free**: the `gluten_free` key *requires* the `Gluten-Free` tag,
///   unlike `nuts` and `seafood` which exclude their tag
///
/// May return an empty list.
pub fn filter_candidates<'a>(meals: &'a [MealRecord], profile: &UserProfile) -> Vec<&'a MealRecord> {
    let candidates = meals
        .iter()
        .filter(|meal| satisfies_diet(meal, profile.diet))
        .filter(|meal| {
            profile
                .allergies
                .iter()
                .all(|allergy| satisfies_allergy(meal, *allergy))
        })
        .filter(|meal| satisfies_culture(meal, profile.culture))
        .collect::<Vec<_>>();

    tracing::debug!(
        catalog = meals.len(),
        candidates = candidates.len(),
        diet = %profile.diet,
        culture = %profile.culture,
        "filtered meal candidates"
    );

    candidates
}

fn satisfies_diet(meal: &MealRecord, diet: Diet) -> bool {
    match diet {
        Diet::Vegetarian => meal.has_tag(MealTag::Vegetarian) || meal.has_tag(MealTag::Vegan),
        Diet::Vegan => meal.has_tag(MealTag::Vegan),
        Diet::NonVegetarian => true,
    }
}

fn satisfies_allergy(meal: &MealRecord, allergy: Allergy) -> bool {
    match allergy {
        Allergy::Seafood => !meal.has_tag(MealTag::Seafood),
        Allergy::GlutenFree => meal.has_tag(MealTag::GlutenFree),
        Allergy::Nuts => !meal.has_tag(MealTag::ContainsNuts),
        // No lactose tag in the vocabulary.
        Allergy::LactoseIntolerant => true,
    }
}

fn satisfies_culture(meal: &MealRecord, culture: Culture) -> bool {
    match culture {
        Culture::Jain => !meal.has_tag(MealTag::RootVeg) && !meal.has_tag(MealTag::OnionGarlic),
        Culture::Sattvic => !meal.has_tag(MealTag::OnionGarlic),
        Culture::NoRestrictions => true,
    }
}
