//! Ingredient-frequency report: aggregation and CSV export.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{IngredientCount, Meal};

/// Count every ingredient occurrence across `meals`, sorted by ingredient text.
///
/// Matching is exact: "Egg" and "egg" are separate rows.
#[must_use]
pub fn aggregate_ingredients(meals: &[Meal]) -> Vec<IngredientCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ingredient in meals.iter().flat_map(|m| &m.ingredients) {
        *counts.entry(ingredient.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(ingredient, count)| IngredientCount {
            ingredient: ingredient.to_string(),
            count,
        })
        .collect()
}

/// Write `rows` as CSV with an `ingredient,count` header.
///
/// The file is written next to `path` under a temporary name and renamed into
/// place, so a failed export never leaves a truncated report behind.
pub fn export_csv(rows: &[IngredientCount], path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(PlannerError::EmptyReport);
    }
    write_atomically(rows, path).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(rows = rows.len(), path = %path.display(), "ingredient report written");
    Ok(())
}

fn write_atomically(rows: &[IngredientCount], path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut wtr = csv::Writer::from_writer(&mut tmp);
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
    }
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Parse a report produced by [`export_csv`].
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<IngredientCount>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<IngredientCount>, _>>()?;
    Ok(rows)
}
