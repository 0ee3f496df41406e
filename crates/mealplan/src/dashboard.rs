use chrono::NaiveDate;
use nutrithali_catalog::Catalog;
use nutrithali_shared::mealplan::DeliveryStatus;
use nutrithali_shared::profile::{ProfileState, UserProfile};
use serde::Serialize;

use crate::nutrition::{NutritionRollup, today_key};
use crate::plan::{DayPlan, WeeklyPlan};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressRow {
    pub label: String,
    pub value: u32,
    pub goal: u32,
    pub percent: u8,
}

impl ProgressRow {
    fn new(label: String, value: u32, goal: u32, percent: u8) -> Self {
        Self {
            label,
            value,
            goal,
            percent,
        }
    }
}

/// Everything a presentation layer needs for one profile on one date.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard<'a> {
    pub greeting: String,
    pub profile: UserProfile,
    pub plan: WeeklyPlan<'a>,
    pub today: DayPlan<'a>,
    pub delivery: DeliveryStatus,
    pub rollup: NutritionRollup,
    pub progress: Vec<ProgressRow>,
}

impl<'a> Dashboard<'a> {
    /// Resolves the profile, builds the week and rolls up the day `date`
    /// falls on.
    #[tracing::instrument(skip_all, fields(completed = state.is_completed(), date = %date))]
    pub fn build(state: ProfileState, catalog: &'a Catalog, date: NaiveDate) -> Self {
        let profile = state.into_profile();
        let plan = crate::weekly_plan(catalog, &profile);
        let today = *plan.day(today_key(date));
        let rollup = NutritionRollup::for_day(&today, &profile);

        let greeting = match profile.name.as_str() {
            "" => "Friend".to_owned(),
            name => name.to_owned(),
        };

        let totals = rollup.totals;
        let goals = rollup.goals;
        let progress = vec![
            ProgressRow::new(
                format!("Calories {} / {} kcal", totals.calories, goals.calories),
                totals.calories,
                goals.calories,
                rollup.calorie_percent(),
            ),
            ProgressRow::new(
                format!("Protein {} / {} g", totals.protein_grams, goals.protein_grams),
                totals.protein_grams,
                goals.protein_grams,
                rollup.protein_percent(),
            ),
            ProgressRow::new(
                format!("Fats {} g", totals.fat_grams),
                totals.fat_grams,
                goals.fat_grams,
                rollup.fat_percent(),
            ),
            ProgressRow::new(
                format!("Carbs {} g", totals.carb_grams),
                totals.carb_grams,
                goals.carb_grams,
                rollup.carb_percent(),
            ),
        ];

        tracing::info!(day = %today.weekday, calories = totals.calories, "dashboard built");

        Self {
            greeting,
            profile,
            plan,
            today,
            delivery: DeliveryStatus::default(),
            rollup,
            progress,
        }
    }
}
