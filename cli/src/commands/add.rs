use anyhow::Result;
use std::io::Write;
use tracing::debug;

use mealplan_core::service::Planner;

pub(crate) fn cmd_add<W: Write>(
    planner: &mut Planner,
    out: &mut W,
    name: &str,
    date: &str,
    ingredients: &str,
) -> Result<()> {
    match planner.add_meal(name, date, ingredients) {
        Ok(meal) => {
            let id = meal.id;
            let name = &meal.name;
            let date = meal.date;
            let count = meal.ingredients.len();
            writeln!(
                out,
                "Meal #{id} added: \"{name}\" on {date} with {count} ingredient(s)."
            )?;
        }
        Err(e) if e.is_validation() => {
            debug!(error = %e, "rejected meal");
            writeln!(out, "{e}")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
