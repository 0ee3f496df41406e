use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use nutrithali_shared::profile::{Activity, Allergy, Culture, Diet, Goal, UserProfile};
use nutrithali_shared::{Error, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

const GUEST_NAME: &str = "Guest";

fn validate_name(name: &str) -> std::result::Result<(), validator::ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(validator::ValidationError::new("name_length")
            .with_message("Name must be at least 2 characters".into()));
    }

    Ok(())
}

/// Answers collected by the onboarding questionnaire, as submitted.
///
/// Enumerated answers stay strings until the draft is resolved so a form or a
/// JSON file can carry anything. [`ProfileDraft::complete`] rejects what it
/// cannot parse, [`ProfileDraft::resolve_lenient`] falls back instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileDraft {
    #[validate(
        required(message = "Name is required"),
        custom(function = "validate_name")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Pick a goal"))]
    pub goal: Option<String>,
    #[validate(required(message = "Pick a diet"))]
    pub diet: Option<String>,
    #[validate(required(message = "Pick a cultural preference"))]
    pub culture: Option<String>,
    pub allergies: Vec<String>,
    pub allergy_other: Option<String>,
    #[validate(required(message = "Pick an activity level"))]
    pub activity: Option<String>,
}

impl ProfileDraft {
    /// Strict resolution used when onboarding finishes.
    pub fn complete(&self) -> Result<UserProfile> {
        self.validate()?;

        let allergies = self
            .allergies
            .iter()
            .map(|key| {
                Allergy::from_str(key.trim()).map_err(|_| Error::invalid_value("allergy", key))
            })
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(UserProfile {
            name: self.name.as_deref().unwrap_or_default().trim().to_owned(),
            goal: parse_required("goal", self.goal.as_deref())?,
            diet: parse_required("diet", self.diet.as_deref())?,
            culture: parse_required("culture", self.culture.as_deref())?,
            allergies,
            allergy_other: self.allergy_other(),
            activity: parse_required("activity", self.activity.as_deref())?,
        })
    }

    /// Permissive resolution for partial input.
    ///
    /// Anything missing or unknown falls back to the answer that constrains the
    /// plan the least: `Non-Vegetarian`, `No Restrictions`, `Maintain Weight`,
    /// `Sedentary`. Unknown allergy keys are dropped and a short name becomes
    /// `Guest`.
    pub fn resolve_lenient(&self) -> UserProfile {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if name.chars().count() >= 2 => name.to_owned(),
            name => {
                tracing::warn!(name = ?name, fallback = GUEST_NAME, "name missing or too short");
                GUEST_NAME.to_owned()
            }
        };

        let allergies = self
            .allergies
            .iter()
            .filter_map(|key| match Allergy::from_str(key.trim()) {
                Ok(allergy) => Some(allergy),
                Err(_) => {
                    tracing::warn!(allergy = %key, "unknown allergy key dropped");
                    None
                }
            })
            .collect();

        UserProfile {
            name,
            goal: parse_or("goal", self.goal.as_deref(), Goal::MaintainWeight),
            diet: parse_or("diet", self.diet.as_deref(), Diet::NonVegetarian),
            culture: parse_or("culture", self.culture.as_deref(), Culture::NoRestrictions),
            allergies,
            allergy_other: self.allergy_other(),
            activity: parse_or("activity", self.activity.as_deref(), Activity::Sedentary),
        }
    }

    fn allergy_other(&self) -> Option<String> {
        self.allergy_other
            .as_deref()
            .map(str::trim)
            .filter(|other| !other.is_empty())
            .map(ToOwned::to_owned)
    }
}

fn parse_required<T: FromStr>(field: &'static str, value: Option<&str>) -> Result<T> {
    let value = value.unwrap_or_default().trim();

    T::from_str(value).map_err(|_| Error::invalid_value(field, value))
}

fn parse_or<T: FromStr + Display>(field: &'static str, value: Option<&str>, fallback: T) -> T {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        tracing::warn!(field, fallback = %fallback, "missing value");
        return fallback;
    };

    match T::from_str(value) {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(field, value, fallback = %fallback, "unknown value");
            fallback
        }
    }
}
