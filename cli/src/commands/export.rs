use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use mealplan_core::PlannerError;
use mealplan_core::service::Planner;

pub(crate) fn cmd_export<W: Write>(planner: &Planner, out: &mut W, path: &Path) -> Result<()> {
    match planner.export_ingredients(path) {
        Ok(summary) => {
            let rows = summary.rows;
            let path = summary.path.display();
            writeln!(out, "Exported {rows} ingredients to {path}")?;
        }
        Err(PlannerError::EmptyReport) => {
            writeln!(out, "No ingredients to export.")?;
        }
        Err(e @ PlannerError::Io { .. }) => {
            debug!(error = %e, "export failed");
            writeln!(out, "Export failed. {e}")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
