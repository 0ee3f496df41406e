use chrono::NaiveDate;
use nutrithali_catalog::Catalog;
use nutrithali_mealplan::{Dashboard, WeeklyPlan, candidates, filter_candidates, weekly_plan};
use nutrithali_shared::meal::{Macros, MealRecord, MealTag};
use nutrithali_shared::mealplan::{MealSlot, Weekday};
use nutrithali_shared::profile::{
    Activity, Allergy, Culture, Diet, Goal, ProfileState, UserProfile,
};

fn profile(diet: Diet, culture: Culture, allergies: &[Allergy], goal: Goal) -> UserProfile {
    UserProfile {
        name: "Priya Sharma".to_owned(),
        goal,
        diet,
        culture,
        allergies: allergies.iter().copied().collect(),
        allergy_other: None,
        activity: Activity::Light,
    }
}

fn ids(meals: &[&MealRecord]) -> Vec<String> {
    meals.iter().map(|m| m.id.to_owned()).collect()
}

fn all_profiles() -> Vec<UserProfile> {
    let allergy_sets: [&[Allergy]; 5] = [
        &[],
        &[Allergy::Seafood],
        &[Allergy::GlutenFree],
        &[Allergy::Nuts, Allergy::LactoseIntolerant],
        &[Allergy::Seafood, Allergy::Nuts],
    ];

    let mut profiles = vec![];
    for diet in [Diet::Vegetarian, Diet::NonVegetarian, Diet::Vegan] {
        for culture in [Culture::NoRestrictions, Culture::Jain, Culture::Sattvic] {
            for allergies in allergy_sets {
                for goal in [Goal::BuildMuscle, Goal::LoseFat] {
                    profiles.push(profile(diet, culture, allergies, goal));
                }
            }
        }
    }

    profiles
}

/// Menu with the tags the reference catalog never uses.
fn restricted_catalog() -> Catalog {
    Catalog::new(vec![
        MealRecord::new(
            "aloo_paratha",
            "Aloo Paratha",
            [MealTag::Vegetarian, MealTag::RootVeg],
            Macros::new(450, 10, 16, 62),
        ),
        MealRecord::new(
            "chole",
            "Chole",
            [MealTag::Vegan, MealTag::OnionGarlic, MealTag::HighProtein],
            Macros::new(410, 19, 11, 58),
        ),
        MealRecord::new(
            "kaju_curry",
            "Kaju Curry",
            [MealTag::Vegetarian, MealTag::ContainsNuts],
            Macros::new(520, 14, 32, 30),
        ),
        MealRecord::new(
            "moong_dal",
            "Moong Dal",
            [MealTag::Vegan, MealTag::GlutenFree, MealTag::HighProtein],
            Macros::new(280, 18, 4, 40),
        ),
        MealRecord::new(
            "prawn_curry",
            "Prawn Curry",
            [MealTag::NonVegetarian, MealTag::Seafood],
            Macros::new(390, 30, 18, 12),
        ),
    ])
    .expect("valid catalog")
}

#[test]
fn vegetarian_default_scenario() {
    let catalog = Catalog::reference();
    let profile = profile(Diet::Vegetarian, Culture::NoRestrictions, &[], Goal::MaintainWeight);

    let ranked = candidates(catalog, &profile);

    assert_eq!(
        ids(&ranked),
        vec![
            "quinoa_salad",
            "poha",
            "upma",
            "tofu_stir_fry",
            "paneer_tikka",
            "dal_makhani",
            "rajma_chawal",
        ]
    );

    let plan = weekly_plan(catalog, &profile);
    let entries = plan.entries().collect::<Vec<_>>();
    assert_eq!(entries.len(), 21);
    assert!(entries.iter().all(|(_, _, meal)| meal.is_some()));
    assert_eq!(
        plan.meal(Weekday::Monday, MealSlot::Breakfast).map(|m| m.name.as_str()),
        Some("Quinoa Salad")
    );
    // Slot 7 wraps back to the first candidate.
    assert_eq!(
        plan.meal(Weekday::Wednesday, MealSlot::Lunch).map(|m| m.name.as_str()),
        Some("Quinoa Salad")
    );
}

#[test]
fn gluten_free_non_vegetarian_scenario() {
    let catalog = Catalog::reference();
    let profile = profile(
        Diet::NonVegetarian,
        Culture::NoRestrictions,
        &[Allergy::GlutenFree],
        Goal::MaintainWeight,
    );

    let ranked = candidates(catalog, &profile);
    assert_eq!(ids(&ranked), vec!["quinoa_salad"]);

    let plan = weekly_plan(catalog, &profile);
    assert_eq!(plan.entries().count(), 21);
    assert!(
        plan.entries()
            .all(|(_, _, meal)| meal.map(|m| m.name.as_str()) == Some("Quinoa Salad"))
    );
}

#[test]
fn build_muscle_ranks_high_protein_first_in_catalog_order() {
    let catalog = Catalog::reference();
    let profile = profile(Diet::NonVegetarian, Culture::NoRestrictions, &[], Goal::BuildMuscle);

    let ranked = candidates(catalog, &profile);

    assert_eq!(
        ids(&ranked),
        vec![
            "dal_makhani",
            "paneer_tikka",
            "chicken_curry",
            "grilled_fish",
            "tofu_stir_fry",
            "poha",
            "rajma_chawal",
            "quinoa_salad",
            "upma",
        ]
    );
}

#[test]
fn vegan_gluten_free_build_muscle_has_single_candidate() {
    let catalog = Catalog::reference();
    let profile = profile(
        Diet::Vegan,
        Culture::NoRestrictions,
        &[Allergy::GlutenFree],
        Goal::BuildMuscle,
    );

    assert_eq!(ids(&candidates(catalog, &profile)), vec!["quinoa_salad"]);
}

#[test]
fn empty_candidates_give_an_all_absent_plan() {
    let catalog = restricted_catalog();
    let no_vegan = Catalog::new(
        catalog
            .iter()
            .filter(|m| !m.has_tag(MealTag::Vegan))
            .cloned()
            .collect(),
    )
    .expect("valid catalog");
    let profile = profile(Diet::Vegan, Culture::NoRestrictions, &[], Goal::LoseFat);

    let plan = weekly_plan(&no_vegan, &profile);

    assert_eq!(plan.entries().count(), 21);
    assert!(plan.entries().all(|(_, _, meal)| meal.is_none()));

    let dashboard = Dashboard::build(
        ProfileState::Completed(profile),
        &no_vegan,
        NaiveDate::from_ymd_opt(2025, 10, 21).unwrap(),
    );
    assert_eq!(dashboard.rollup.totals, Macros::default());
    assert!(dashboard.progress.iter().all(|row| row.percent == 0));
}

#[test]
fn vegan_profiles_only_get_vegan_meals() {
    for catalog in [Catalog::reference().clone(), restricted_catalog()] {
        for profile in all_profiles().into_iter().filter(|p| p.diet == Diet::Vegan) {
            let filtered = filter_candidates(catalog.meals(), &profile);
            assert!(filtered.iter().all(|m| m.has_tag(MealTag::Vegan)), "{profile:?}");
        }
    }
}

#[test]
fn jain_profiles_never_get_root_veg_or_onion_garlic() {
    let catalog = restricted_catalog();

    for profile in all_profiles().into_iter().filter(|p| p.culture == Culture::Jain) {
        let filtered = filter_candidates(catalog.meals(), &profile);
        assert!(
            filtered
                .iter()
                .all(|m| !m.has_tag(MealTag::RootVeg) && !m.has_tag(MealTag::OnionGarlic)),
            "{profile:?}"
        );
    }
}

#[test]
fn restricted_catalog_culture_and_allergy_rules() {
    let catalog = restricted_catalog();

    let sattvic = profile(Diet::Vegetarian, Culture::Sattvic, &[Allergy::Nuts], Goal::LoseFat);
    assert_eq!(
        ids(&filter_candidates(catalog.meals(), &sattvic)),
        vec!["aloo_paratha", "moong_dal"]
    );

    let jain = profile(Diet::NonVegetarian, Culture::Jain, &[Allergy::Seafood], Goal::LoseFat);
    assert_eq!(
        ids(&filter_candidates(catalog.meals(), &jain)),
        vec!["kaju_curry", "moong_dal"]
    );
}

#[test]
fn filtering_preserves_catalog_order() {
    for catalog in [Catalog::reference().clone(), restricted_catalog()] {
        let positions = catalog
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.to_owned(), i))
            .collect::<std::collections::HashMap<_, _>>();

        for profile in all_profiles() {
            let filtered = filter_candidates(catalog.meals(), &profile);
            let order = filtered.iter().map(|m| positions[&m.id]).collect::<Vec<_>>();
            assert!(order.windows(2).all(|w| w[0] < w[1]), "{profile:?}");
        }
    }
}

#[test]
fn build_muscle_ranking_is_stable() {
    let catalog = Catalog::reference();

    for profile in all_profiles().into_iter().filter(|p| p.goal == Goal::BuildMuscle) {
        let filtered = filter_candidates(catalog.meals(), &profile);
        let ranked = candidates(catalog, &profile);

        let expected = filtered
            .iter()
            .filter(|m| m.is_high_protein())
            .chain(filtered.iter().filter(|m| !m.is_high_protein()))
            .map(|m| m.id.to_owned())
            .collect::<Vec<_>>();

        assert_eq!(ids(&ranked), expected, "{profile:?}");
    }
}

#[test]
fn every_plan_has_21_entries_drawn_round_robin() {
    let catalog = Catalog::reference();

    for profile in all_profiles() {
        let ranked = candidates(catalog, &profile);
        let plan = WeeklyPlan::distribute(&ranked);
        let entries = plan.entries().collect::<Vec<_>>();

        assert_eq!(entries.len(), 21);
        for (counter, (_, _, meal)) in entries.into_iter().enumerate() {
            let expected = (!ranked.is_empty()).then(|| ranked[counter % ranked.len()]);
            assert_eq!(meal, expected);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let catalog = Catalog::reference();

    for profile in all_profiles() {
        assert_eq!(weekly_plan(catalog, &profile), weekly_plan(catalog, &profile));
    }
}

#[test]
fn guest_dashboard_on_a_sunday_uses_monday() {
    let catalog = Catalog::reference();
    let sunday = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();

    let dashboard = Dashboard::build(ProfileState::NoProfile, catalog, sunday);

    assert_eq!(dashboard.greeting, "Guest");
    assert_eq!(dashboard.today.weekday, Weekday::Monday);
    assert_eq!(dashboard.rollup.day, Weekday::Monday);

    // Monday: Quinoa Salad, Poha, Upma.
    assert_eq!(dashboard.rollup.totals, Macros::new(950, 27, 21, 166));
    assert_eq!(dashboard.rollup.goals.calories, 2000);
    assert_eq!(dashboard.rollup.goals.protein_grams, 80);

    let labels = dashboard
        .progress
        .iter()
        .map(|row| (row.label.as_str(), row.percent))
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            ("Calories 950 / 2000 kcal", 48),
            ("Protein 27 / 80 g", 34),
            ("Fats 21 g", 35),
            ("Carbs 166 g", 66),
        ]
    );
    assert_eq!(dashboard.delivery.to_string(), "On the way");
}

#[test]
fn dashboard_today_matches_weekday_of_date() {
    let catalog = Catalog::reference();
    let profile = profile(Diet::NonVegetarian, Culture::NoRestrictions, &[], Goal::BuildMuscle);
    // 2025-10-24 is a Friday.
    let friday = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();

    let dashboard = Dashboard::build(ProfileState::Completed(profile), catalog, friday);

    assert_eq!(dashboard.greeting, "Priya Sharma");
    assert_eq!(dashboard.today, *dashboard.plan.day(Weekday::Friday));
    assert_eq!(dashboard.rollup.goals.protein_grams, 110);
}

#[test]
fn empty_name_is_greeted_as_friend() {
    let profile = UserProfile {
        name: String::new(),
        ..UserProfile::guest()
    };

    let dashboard = Dashboard::build(
        ProfileState::Completed(profile),
        Catalog::reference(),
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
    );

    assert_eq!(dashboard.greeting, "Friend");
}

#[test]
fn huge_custom_macros_saturate_in_the_rollup() -> anyhow::Result<()> {
    let menu = br#"[
        { "id": "feast_a", "name": "Feast A", "tags": ["Vegetarian"],
          "macros": { "calories": 2000000000, "protein_grams": 10, "fat_grams": 5, "carb_grams": 40 } },
        { "id": "feast_b", "name": "Feast B", "tags": ["Vegetarian"],
          "macros": { "calories": 2000000000, "protein_grams": 10, "fat_grams": 5, "carb_grams": 40 } },
        { "id": "feast_c", "name": "Feast C", "tags": ["Vegetarian"],
          "macros": { "calories": 2000000000, "protein_grams": 10, "fat_grams": 5, "carb_grams": 40 } }
    ]"#;
    let catalog = Catalog::from_reader(&menu[..])?;

    let dashboard = Dashboard::build(
        ProfileState::NoProfile,
        &catalog,
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
    );

    assert_eq!(dashboard.rollup.totals.calories, u32::MAX);
    assert_eq!(dashboard.rollup.totals.protein_grams, 30);
    assert_eq!(dashboard.rollup.calorie_percent(), 100);
    assert_eq!(dashboard.progress[0].percent, 100);

    Ok(())
}

#[test]
fn dashboard_serializes_for_presentation() -> anyhow::Result<()> {
    let dashboard = Dashboard::build(
        ProfileState::NoProfile,
        Catalog::reference(),
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
    );

    let json = serde_json::to_value(&dashboard)?;

    assert_eq!(json["plan"]["days"].as_array().map(Vec::len), Some(7));
    assert_eq!(json["today"]["weekday"], "Monday");
    assert_eq!(json["today"]["breakfast"]["name"], "Quinoa Salad");
    assert_eq!(json["delivery"], "On the way");
    assert_eq!(json["profile"]["diet"], "Vegetarian");

    Ok(())
}
