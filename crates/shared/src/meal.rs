use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category labels a meal can carry. Diet, allergy and culture filters all
/// match against these.
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
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum MealTag {
    Vegetarian,
    Vegan,
    #[strum(to_string = "Non-Vegetarian")]
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    #[strum(to_string = "High-Protein")]
    #[serde(rename = "High-Protein")]
    HighProtein,
    Seafood,
    #[strum(to_string = "Gluten-Free")]
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[strum(to_string = "Root Veg")]
    #[serde(rename = "Root Veg")]
    RootVeg,
    #[strum(to_string = "Onion/Garlic")]
    #[serde(rename = "Onion/Garlic")]
    OnionGarlic,
    #[strum(to_string = "Contains Nuts")]
    #[serde(rename = "Contains Nuts")]
    ContainsNuts,
}

impl MealTag {
    pub fn exists_in<'a>(&self, iterator: impl IntoIterator<Item = &'a MealTag>) -> bool {
        iterator.into_iter().any(|t| t == self)
    }
}

/// Macro-nutrient profile of a single serving.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
    pub carb_grams: u32,
}

impl Macros {
    pub const fn new(calories: u32, protein_grams: u32, fat_grams: u32, carb_grams: u32) -> Self {
        Self {
            calories,
            protein_grams,
            fat_grams,
            carb_grams,
        }
    }
}

/// Saturates at `u32::MAX` per field.
impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Macros {
            calories: self.calories.saturating_add(rhs.calories),
            protein_grams: self.protein_grams.saturating_add(rhs.protein_grams),
            fat_grams: self.fat_grams.saturating_add(rhs.fat_grams),
            carb_grams: self.carb_grams.saturating_add(rhs.carb_grams),
        }
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Self {
        iter.fold(Macros::default(), |acc, m| acc + *m)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    pub tags: Vec<MealTag>,
    pub macros: Macros,
}

impl MealRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tags: impl Into<Vec<MealTag>>,
        macros: Macros,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: tags.into(),
            macros,
        }
    }

    pub fn has_tag(&self, tag: MealTag) -> bool {
        tag.exists_in(&self.tags)
    }

    pub fn is_high_protein(&self) -> bool {
        self.has_tag(MealTag::HighProtein)
    }
}
