use nutrithali_shared::meal::MealRecord;
use nutrithali_shared::mealplan::{MealSlot, Weekday};
use serde::Serialize;
use strum::VariantArray;

pub const SLOTS_PER_DAY: usize = 3;
pub const DAYS_PER_WEEK: usize = 7;

/// One weekday's three meals. An absent slot means no candidate was available.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DayPlan<'a> {
    pub weekday: Weekday,
    pub breakfast: Option<&'a MealRecord>,
    pub lunch: Option<&'a MealRecord>,
    pub dinner: Option<&'a MealRecord>,
}

impl<'a> DayPlan<'a> {
    pub fn meal(&self, slot: MealSlot) -> Option<&'a MealRecord> {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, Option<&'a MealRecord>)> + '_ {
        MealSlot::VARIANTS
            .iter()
            .map(move |slot| (*slot, self.meal(*slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.meals().all(|(_, meal)| meal.is_none())
    }
}

/// Seven days of three slots, Monday first. Derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeeklyPlan<'a> {
    pub days: [DayPlan<'a>; DAYS_PER_WEEK],
}

impl<'a> WeeklyPlan<'a> {
    /// Round-robin assignment of the ranked candidates over the 21 slots.
    ///
    /// The running slot counter walks Monday..Sunday and Breakfast, Lunch,
    /// Dinner inside each day; slot `n` receives `candidates[n % len]`. With no
    /// candidates every slot stays empty.
    pub fn distribute(candidates: &[&'a MealRecord]) -> Self {
        let pick = |counter: usize| {
            counter
                .checked_rem(candidates.len())
                .map(|index| candidates[index])
        };

        let days = std::array::from_fn(|day| {
            let counter = day * SLOTS_PER_DAY;

            DayPlan {
                weekday: Weekday::VARIANTS[day],
                breakfast: pick(counter),
                lunch: pick(counter + 1),
                dinner: pick(counter + 2),
            }
        });

        tracing::debug!(
            candidates = candidates.len(),
            slots = DAYS_PER_WEEK * SLOTS_PER_DAY,
            "distributed weekly plan"
        );

        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> &DayPlan<'a> {
        &self.days[weekday.index()]
    }

    pub fn meal(&self, weekday: Weekday, slot: MealSlot) -> Option<&'a MealRecord> {
        self.day(weekday).meal(slot)
    }

    /// All 21 slot entries in assignment order.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (Weekday, MealSlot, Option<&'a MealRecord>)> + '_ {
        self.days
            .iter()
            .flat_map(|day| day.meals().map(move |(slot, meal)| (day.weekday, slot, meal)))
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayPlan::is_empty)
    }
}
