use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Goal {
    #[strum(to_string = "Lose Fat")]
    #[serde(rename = "Lose Fat")]
    LoseFat,
    #[strum(to_string = "Build Muscle")]
    #[serde(rename = "Build Muscle")]
    BuildMuscle,
    #[default]
    #[strum(to_string = "Maintain Weight")]
    #[serde(rename = "Maintain Weight")]
    MaintainWeight,
    #[strum(to_string = "Manage a Condition")]
    #[serde(rename = "Manage a Condition")]
    ManageCondition,
    #[strum(to_string = "Address a Deficiency")]
    #[serde(rename = "Address a Deficiency")]
    AddressDeficiency,
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
    Serialize,
    Deserialize,
)]
pub enum Diet {
    Vegetarian,
    #[strum(to_string = "Non-Vegetarian")]
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Culture {
    #[default]
    #[strum(to_string = "No Restrictions")]
    #[serde(rename = "No Restrictions")]
    NoRestrictions,
    Jain,
    Sattvic,
}

/// Allergy keys as the onboarding form submits them.
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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Allergy {
    GlutenFree,
    LactoseIntolerant,
    Nuts,
    Seafood,
}

impl Allergy {
    pub fn label(&self) -> &'static str {
        match self {
            Allergy::GlutenFree => "Gluten-Free",
            Allergy::LactoseIntolerant => "Lactose-Intolerant",
            Allergy::Nuts => "Nuts Allergy",
            Allergy::Seafood => "Seafood Allergy",
        }
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
    Serialize,
    Deserialize,
)]
pub enum Activity {
    Sedentary,
    Light,
    Active,
}

/// A completed onboarding profile. Consumed read-only by plan generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub goal: Goal,
    pub diet: Diet,
    pub culture: Culture,
    pub allergies: BTreeSet<Allergy>,
    /// Informational only, never used for filtering.
    pub allergy_other: Option<String>,
    pub activity: Activity,
}

impl UserProfile {
    pub fn guest() -> Self {
        Self {
            name: "Guest".to_owned(),
            goal: Goal::MaintainWeight,
            diet: Diet::Vegetarian,
            culture: Culture::NoRestrictions,
            allergies: BTreeSet::new(),
            allergy_other: None,
            activity: Activity::Light,
        }
    }

    pub fn has_allergy(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::guest()
    }
}

/// Whether the visitor finished onboarding. Resolved once at the boundary so
/// plan generation only ever sees a concrete [`UserProfile`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    NoProfile,
    Completed(UserProfile),
}

impl ProfileState {
    pub fn into_profile(self) -> UserProfile {
        match self {
            ProfileState::NoProfile => UserProfile::guest(),
            ProfileState::Completed(profile) => profile,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ProfileState::Completed(_))
    }
}

impl From<Option<UserProfile>> for ProfileState {
    fn from(value: Option<UserProfile>) -> Self {
        value.map(ProfileState::Completed).unwrap_or_default()
    }
}
