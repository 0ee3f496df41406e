use std::io::Write;

use nutrithali_catalog::Catalog;

use crate::config::OutputFormat;

/// Prints every meal in catalog order.
pub fn list_catalog(
    catalog: &Catalog,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, catalog.meals())?;
        writeln!(out)?;

        return Ok(());
    }

    for meal in catalog {
        let tags = meal
            .tags
            .iter()
            .map(|tag| tag.as_ref())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            out,
            "{:<16} {:<16} {:>4} kcal  P {:>3} g  F {:>3} g  C {:>3} g  [{}]",
            meal.id,
            meal.name,
            meal.macros.calories,
            meal.macros.protein_grams,
            meal.macros.fat_grams,
            meal.macros.carb_grams,
            tags
        )?;
    }

    Ok(())
}
