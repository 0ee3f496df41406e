use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Days of the plan week, Monday first. `VARIANTS` order is the iteration
/// order used when distributing meals.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Zero-based position in the Monday-first week.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum DeliveryStatus {
    #[default]
    #[strum(to_string = "On the way")]
    #[serde(rename = "On the way")]
    OnTheWay,
}
