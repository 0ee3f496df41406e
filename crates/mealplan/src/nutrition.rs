use chrono::{Datelike, NaiveDate};
use nutrithali_shared::meal::Macros;
use nutrithali_shared::mealplan::Weekday;
use nutrithali_shared::profile::{Activity, Goal, UserProfile};
use serde::Serialize;
use strum::VariantArray;

use crate::plan::DayPlan;

/// Progress-bar reference for fat, not a goal.
pub const FAT_REFERENCE_GRAMS: u32 = 60;
/// Progress-bar reference for carbohydrates, not a goal.
pub const CARB_REFERENCE_GRAMS: u32 = 250;

/// Picks the plan day shown for a calendar date.
///
/// The date's weekday is counted from Sunday = 0 and shifted by one into the
/// Monday-first week. Sunday falls outside that range and maps to Monday.
pub fn today_key(date: NaiveDate) -> Weekday {
    (date.weekday().num_days_from_sunday() as usize)
        .checked_sub(1)
        .and_then(|index| Weekday::VARIANTS.get(index).copied())
        .unwrap_or(Weekday::Monday)
}

/// `round(100 * value / goal)` with halves rounding up, capped at 100.
///
/// A zero goal reads as complete once anything was eaten.
pub fn percent_of_goal(value: u32, goal: u32) -> u8 {
    if goal == 0 {
        return if value > 0 { 100 } else { 0 };
    }

    let (value, goal) = (u64::from(value), u64::from(goal));
    let percent = (value * 200 + goal) / (goal * 2);

    percent.min(100) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NutritionGoals {
    pub calories: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
    pub carb_grams: u32,
}

impl NutritionGoals {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let calories = match profile.activity {
            Activity::Active => 2200,
            Activity::Light => 2000,
            Activity::Sedentary => 1800,
        };

        let protein_grams = match profile.goal {
            Goal::BuildMuscle => 110,
            Goal::LoseFat
            | Goal::MaintainWeight
            | Goal::ManageCondition
            | Goal::AddressDeficiency => 80,
        };

        Self {
            calories,
            protein_grams,
            fat_grams: FAT_REFERENCE_GRAMS,
            carb_grams: CARB_REFERENCE_GRAMS,
        }
    }
}

/// Sum of one day's assigned meals against the profile's goals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NutritionRollup {
    pub day: Weekday,
    pub totals: Macros,
    pub goals: NutritionGoals,
}

impl NutritionRollup {
    /// Absent slots are skipped.
    pub fn for_day(day: &DayPlan<'_>, profile: &UserProfile) -> Self {
        let totals = day
            .meals()
            .filter_map(|(_, meal)| meal)
            .map(|meal| &meal.macros)
            .sum();

        Self {
            day: day.weekday,
            totals,
            goals: NutritionGoals::for_profile(profile),
        }
    }

    pub fn calorie_percent(&self) -> u8 {
        percent_of_goal(self.totals.calories, self.goals.calories)
    }

    pub fn protein_percent(&self) -> u8 {
        percent_of_goal(self.totals.protein_grams, self.goals.protein_grams)
    }

    pub fn fat_percent(&self) -> u8 {
        percent_of_goal(self.totals.fat_grams, self.goals.fat_grams)
    }

    pub fn carb_percent(&self) -> u8 {
        percent_of_goal(self.totals.carb_grams, self.goals.carb_grams)
    }
}
