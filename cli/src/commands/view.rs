use anyhow::Result;
use std::io::Write;

use mealplan_core::service::Planner;

pub(crate) fn cmd_view<W: Write>(planner: &Planner, out: &mut W) -> Result<()> {
    let meals = planner.list_meals();

    if meals.is_empty() {
        writeln!(out, "No meals scheduled yet.")?;
        return Ok(());
    }

    writeln!(out, "\nScheduled meals:")?;
    for meal in meals {
        let id = meal.id;
        let name = &meal.name;
        let date = meal.date;
        let ingredients = meal.ingredient_list();
        writeln!(out, "  {id}: {name} — {date} — Ingredients: {ingredients}")?;
    }
    writeln!(out)?;

    Ok(())
}
