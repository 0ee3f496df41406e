use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use nutrithali_catalog::Catalog;
use nutrithali_mealplan::Dashboard;
use nutrithali_shared::meal::MealRecord;
use nutrithali_shared::profile::ProfileState;
use nutrithali_user::ProfileDraft;

use crate::config::{Config, OutputFormat};

#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Onboarding answers as a JSON file
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    /// e.g. "Build Muscle"
    #[arg(long)]
    pub goal: Option<String>,

    /// Vegetarian, Non-Vegetarian or Vegan
    #[arg(long)]
    pub diet: Option<String>,

    /// No Restrictions, Jain or Sattvic
    #[arg(long)]
    pub culture: Option<String>,

    /// Allergy key (gluten_free, lactose_intolerant, nuts, seafood), repeatable
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    #[arg(long)]
    pub allergy_other: Option<String>,

    /// Sedentary, Light or Active
    #[arg(long)]
    pub activity: Option<String>,

    /// Reject incomplete or unknown answers instead of falling back
    #[arg(long)]
    pub strict: bool,

    /// Day to show as today (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl PlanArgs {
    /// Profile file first, flags on top. `None` when nothing was given.
    pub fn draft(&self) -> anyhow::Result<Option<ProfileDraft>> {
        let mut draft = match &self.profile {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open profile {}", path.display()))?;
                let draft: ProfileDraft = serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("failed to read profile {}", path.display()))?;

                draft
            }
            None if self.has_answers() => ProfileDraft::default(),
            None => return Ok(None),
        };

        let overrides = [
            (&mut draft.name, &self.name),
            (&mut draft.goal, &self.goal),
            (&mut draft.diet, &self.diet),
            (&mut draft.culture, &self.culture),
            (&mut draft.allergy_other, &self.allergy_other),
            (&mut draft.activity, &self.activity),
        ];
        for (field, value) in overrides {
            if value.is_some() {
                field.clone_from(value);
            }
        }

        if !self.allergies.is_empty() {
            draft.allergies.clone_from(&self.allergies);
        }

        Ok(Some(draft))
    }

    pub fn profile_state(&self) -> anyhow::Result<ProfileState> {
        let Some(draft) = self.draft()? else {
            return Ok(ProfileState::NoProfile);
        };

        let profile = if self.strict {
            draft.complete()?
        } else {
            draft.resolve_lenient()
        };

        Ok(ProfileState::Completed(profile))
    }

    fn has_answers(&self) -> bool {
        [
            &self.name,
            &self.goal,
            &self.diet,
            &self.culture,
            &self.allergy_other,
            &self.activity,
        ]
        .iter()
        .any(|value| value.is_some())
            || !self.allergies.is_empty()
    }
}

#[tracing::instrument(skip_all, fields(strict = args.strict))]
pub fn show_plan(
    config: &Config,
    catalog: &Catalog,
    args: &PlanArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let state = args.profile_state()?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let format = args.format.unwrap_or(config.output.format);

    let dashboard = Dashboard::build(state, catalog, date);

    render_dashboard(&dashboard, format, out)
}

pub fn render_dashboard(
    dashboard: &Dashboard<'_>,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, dashboard)?;
        writeln!(out)?;

        return Ok(());
    }

    let profile = &dashboard.profile;
    writeln!(out, "Hello, {}!", dashboard.greeting)?;
    writeln!(
        out,
        "{} | {} | {} | {}",
        profile.goal, profile.diet, profile.culture, profile.activity
    )?;
    if !profile.allergies.is_empty() {
        let allergies = profile
            .allergies
            .iter()
            .map(|allergy| allergy.label())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "Avoiding: {allergies}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Today's Delivery ({}): {}",
        dashboard.today.weekday, dashboard.delivery
    )?;
    for (slot, meal) in dashboard.today.meals() {
        writeln!(out, "  {:<10} {}", slot.as_ref(), meal_name(meal))?;
    }

    writeln!(out)?;
    writeln!(out, "Nutrition")?;
    for row in &dashboard.progress {
        writeln!(out, "  {:<28} {:>3}%", row.label, row.percent)?;
    }

    writeln!(out)?;
    writeln!(out, "Weekly Plan")?;
    for day in &dashboard.plan.days {
        let meals = day
            .meals()
            .map(|(_, meal)| meal_name(meal))
            .collect::<Vec<_>>()
            .join(" / ");
        writeln!(out, "  {:<10} {}", day.weekday.as_ref(), meals)?;
    }

    Ok(())
}

fn meal_name(meal: Option<&MealRecord>) -> &str {
    meal.map_or("-", |meal| meal.name.as_str())
}
