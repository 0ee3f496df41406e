use nutrithali_shared::profile::{Activity, Allergy, Culture, Diet, Goal, UserProfile};
use nutrithali_shared::{Result, bail};
use serde::Serialize;
use strum::{Display, VariantArray};

use crate::ProfileDraft;

#[derive(Display, VariantArray, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Step {
    #[default]
    Intro,
    Name,
    Goal,
    Diet,
    Culture,
    Allergies,
    Activity,
    Review,
}

impl Step {
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn offset(&self, delta: isize) -> Self {
        let last = Self::VARIANTS.len() - 1;
        let index = self.index().saturating_add_signed(delta).min(last);

        Self::VARIANTS[index]
    }
}

fn is_selected(answer: &Option<String>) -> bool {
    answer
        .as_deref()
        .is_some_and(|answer| !answer.trim().is_empty())
}

/// Linear questionnaire that fills a [`ProfileDraft`] one step at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Onboarding {
    pub step: Step,
    pub draft: ProfileDraft,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current step has what it needs to move on.
    pub fn can_next(&self) -> bool {
        match self.step {
            Step::Intro | Step::Allergies | Step::Review => true,
            Step::Name => self
                .draft
                .name
                .as_deref()
                .is_some_and(|name| name.trim().chars().count() >= 2),
            Step::Goal => is_selected(&self.draft.goal),
            Step::Diet => is_selected(&self.draft.diet),
            Step::Culture => is_selected(&self.draft.culture),
            Step::Activity => is_selected(&self.draft.activity),
        }
    }

    /// Advances one step when allowed. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }

        let step = self.step.offset(1);
        let moved = step != self.step;
        self.step = step;

        moved
    }

    pub fn prev(&mut self) -> bool {
        let step = self.step.offset(-1);
        let moved = step != self.step;
        self.step = step;

        moved
    }

    /// 1-based position and step count, as shown in the progress header.
    pub fn position(&self) -> (usize, usize) {
        (self.step.index() + 1, Step::VARIANTS.len())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = Some(name.into());
    }

    pub fn select_goal(&mut self, goal: Goal) {
        self.draft.goal = Some(goal.to_string());
    }

    pub fn select_diet(&mut self, diet: Diet) {
        self.draft.diet = Some(diet.to_string());
    }

    pub fn select_culture(&mut self, culture: Culture) {
        self.draft.culture = Some(culture.to_string());
    }

    pub fn select_activity(&mut self, activity: Activity) {
        self.draft.activity = Some(activity.to_string());
    }

    /// Adds the allergy when absent, removes it when present.
    pub fn toggle_allergy(&mut self, allergy: Allergy) {
        let key = allergy.to_string();

        match self.draft.allergies.iter().position(|k| *k == key) {
            Some(index) => {
                self.draft.allergies.remove(index);
            }
            None => self.draft.allergies.push(key),
        }
    }

    pub fn set_allergy_other(&mut self, other: impl Into<String>) {
        self.draft.allergy_other = Some(other.into());
    }

    pub fn finish(&self) -> Result<UserProfile> {
        if self.step != Step::Review {
            bail!("onboarding can only finish on review, currently on {}", self.step);
        }

        let profile = self.draft.complete()?;
        tracing::info!(diet = %profile.diet, goal = %profile.goal, "onboarding completed");

        Ok(profile)
    }
}
