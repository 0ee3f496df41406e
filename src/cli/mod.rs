mod catalog;
mod plan;

pub use catalog::list_catalog;
pub use plan::{PlanArgs, render_dashboard, show_plan};

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use nutrithali_catalog::Catalog;

/// The menu to plan from: a JSON file when one is configured, otherwise the
/// built-in reference menu.
pub fn load_catalog(path: Option<&str>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::reference().clone());
    };

    let file = File::open(path).with_context(|| format!("failed to open catalog {path}"))?;
    let catalog = Catalog::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load catalog {path}"))?;

    tracing::info!(path, meals = catalog.len(), "custom catalog loaded");

    Ok(catalog)
}
