mod reference;

use std::collections::HashSet;
use std::io::Read;
use std::sync::LazyLock;

use nutrithali_shared::meal::MealRecord;

static REFERENCE: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    meals: reference::meals(),
});

/// Ordered, immutable set of meals. The order is the input order for every
/// downstream filter, sort and distribution step.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    meals: Vec<MealRecord>,
}

impl Catalog {
    /// Builds a catalog from arbitrary records.
    ///
    /// Rejects empty ids or names and duplicate ids. Order is kept as given.
    pub fn new(meals: Vec<MealRecord>) -> nutrithali_shared::Result<Self> {
        let mut seen = HashSet::with_capacity(meals.len());

        for meal in &meals {
            if meal.id.trim().is_empty() {
                nutrithali_shared::bail!("meal id must not be empty");
            }

            if meal.name.trim().is_empty() {
                nutrithali_shared::bail!("meal {} has no name", meal.id);
            }

            if !seen.insert(meal.id.as_str()) {
                return Err(nutrithali_shared::Error::DuplicateMeal(meal.id.to_owned()));
            }
        }

        tracing::debug!(meals = meals.len(), "catalog loaded");

        Ok(Self { meals })
    }

    /// Reads a JSON array of meal records.
    pub fn from_reader(reader: impl Read) -> nutrithali_shared::Result<Self> {
        let meals: Vec<MealRecord> = serde_json::from_reader(reader)?;

        Self::new(meals)
    }

    /// The nine-meal demo menu.
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn get(&self, id: &str) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MealRecord> {
        self.meals.iter()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MealRecord;
    type IntoIter = std::slice::Iter<'a, MealRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}
