use nutrithali_shared::Error;
use nutrithali_shared::profile::{Activity, Allergy, Culture, Diet, Goal};
use nutrithali_user::{Onboarding, Step};

fn walk_to_review(onboarding: &mut Onboarding) {
    assert!(onboarding.next());
    onboarding.set_name("Meera");
    assert!(onboarding.next());
    onboarding.select_goal(Goal::LoseFat);
    assert!(onboarding.next());
    onboarding.select_diet(Diet::Vegetarian);
    assert!(onboarding.next());
    onboarding.select_culture(Culture::Sattvic);
    assert!(onboarding.next());
    onboarding.toggle_allergy(Allergy::LactoseIntolerant);
    assert!(onboarding.next());
    onboarding.select_activity(Activity::Light);
    assert!(onboarding.next());
}

#[test]
fn test_full_walkthrough_completes_profile() -> anyhow::Result<()> {
    let mut onboarding = Onboarding::new();
    assert_eq!(onboarding.position(), (1, 8));

    walk_to_review(&mut onboarding);
    assert_eq!(onboarding.step, Step::Review);
    assert_eq!(onboarding.position(), (8, 8));

    let profile = onboarding.finish()?;
    assert_eq!(profile.name, "Meera");
    assert_eq!(profile.goal, Goal::LoseFat);
    assert_eq!(profile.diet, Diet::Vegetarian);
    assert_eq!(profile.culture, Culture::Sattvic);
    assert!(profile.has_allergy(Allergy::LactoseIntolerant));
    assert_eq!(profile.activity, Activity::Light);

    Ok(())
}

#[test]
fn test_next_is_blocked_until_answered() {
    let mut onboarding = Onboarding::new();
    assert!(onboarding.next());
    assert_eq!(onboarding.step, Step::Name);

    assert!(!onboarding.can_next());
    onboarding.set_name(" A ");
    assert!(!onboarding.next());
    assert_eq!(onboarding.step, Step::Name);

    onboarding.set_name("Al");
    assert!(onboarding.next());
    assert_eq!(onboarding.step, Step::Goal);
    assert!(!onboarding.next());
}

#[test]
fn test_allergies_step_needs_no_selection() {
    let mut onboarding = Onboarding::new();
    onboarding.step = Step::Allergies;

    assert!(onboarding.can_next());
    assert!(onboarding.next());
    assert_eq!(onboarding.step, Step::Activity);
}

#[test]
fn test_steps_are_clamped_at_both_ends() {
    let mut onboarding = Onboarding::new();
    assert!(!onboarding.prev());
    assert_eq!(onboarding.step, Step::Intro);

    walk_to_review(&mut onboarding);
    assert!(!onboarding.next());
    assert_eq!(onboarding.step, Step::Review);

    assert!(onboarding.prev());
    assert_eq!(onboarding.step, Step::Activity);
}

#[test]
fn test_toggle_allergy_adds_then_removes() {
    let mut onboarding = Onboarding::new();

    onboarding.toggle_allergy(Allergy::Nuts);
    onboarding.toggle_allergy(Allergy::Seafood);
    assert_eq!(onboarding.draft.allergies, vec!["nuts", "seafood"]);

    onboarding.toggle_allergy(Allergy::Nuts);
    assert_eq!(onboarding.draft.allergies, vec!["seafood"]);
}

#[test]
fn test_finish_before_review_is_rejected() {
    let mut onboarding = Onboarding::new();
    onboarding.set_name("Meera");
    onboarding.select_goal(Goal::LoseFat);
    onboarding.select_diet(Diet::Vegan);
    onboarding.select_culture(Culture::Jain);
    onboarding.select_activity(Activity::Active);

    assert!(matches!(onboarding.finish(), Err(Error::Rejected(_))));
}

#[test]
fn test_finish_validates_the_draft() {
    let mut onboarding = Onboarding::new();
    onboarding.step = Step::Review;
    onboarding.set_name("Meera");

    assert!(matches!(onboarding.finish(), Err(Error::Validate(_))));
}

#[test]
fn test_blank_selection_does_not_advance() {
    let mut onboarding = Onboarding::new();
    onboarding.step = Step::Goal;
    onboarding.draft.goal = Some(String::new());
    assert!(!onboarding.next());

    onboarding.step = Step::Activity;
    onboarding.draft.activity = Some("  ".to_owned());
    assert!(!onboarding.can_next());
    assert_eq!(onboarding.step, Step::Activity);
}
