mod command;
pub mod meal;
pub mod mealplan;
pub mod profile;

pub use command::*;
