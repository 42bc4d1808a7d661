use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{ExportSummary, IngredientCount, Meal, NewMeal};
use crate::report;
use crate::store::MealStore;
use crate::validate::{parse_ingredients, validate_date, validate_name};

/// Owns a meal store and wires raw user input through validation, storage
/// and reporting.
#[derive(Debug, Default)]
pub struct Planner {
    store: MealStore,
}

impl Planner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn store(&self) -> &MealStore {
        &self.store
    }

    /// Validate name, date and ingredients (in that order) and store the meal.
    pub fn add_meal(&mut self, name: &str, date: &str, ingredients: &str) -> Result<Meal> {
        let name = validate_name(name)?;
        let date = validate_date(date)?;
        let ingredients = parse_ingredients(ingredients)?;

        let meal = self.store.insert(NewMeal {
            name,
            date,
            ingredients,
        })?;
        Ok(meal.clone())
    }

    #[must_use]
    pub fn list_meals(&self) -> Vec<&Meal> {
        self.store.list_meals()
    }

    #[must_use]
    pub fn ingredient_report(&self) -> Vec<IngredientCount> {
        report::aggregate_ingredients(self.store.meals())
    }

    pub fn export_ingredients(&self, path: &Path) -> Result<ExportSummary> {
        let rows = self.ingredient_report();
        report::export_csv(&rows, path)?;
        info!(rows = rows.len(), path = %path.display(), "exported ingredient report");
        Ok(ExportSummary {
            rows: rows.len(),
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn test_add_meal_from_raw_input() {
        let mut planner = Planner::new();
        let meal = planner
            .add_meal("  Pancakes ", " 2099-03-01 ", "flour, egg , ,milk")
            .unwrap();
        assert_eq!(meal.id, 1);
        assert_eq!(meal.name, "Pancakes");
        assert_eq!(meal.date.to_string(), "2099-03-01");
        assert_eq!(meal.ingredients, vec!["flour", "egg", "milk"]);

        let second = planner.add_meal("Soup", "2099-03-02", "leek").unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_add_meal_reports_name_error_first() {
        let mut planner = Planner::new();
        assert!(matches!(
            planner.add_meal("", "not a date", ""),
            Err(PlannerError::EmptyName)
        ));
        assert!(matches!(
            planner.add_meal("Soup", "not a date", ""),
            Err(PlannerError::InvalidFormat(_))
        ));
        assert!(matches!(
            planner.add_meal("Soup", "2020-01-01", ""),
            Err(PlannerError::PastDate { .. })
        ));
        assert!(matches!(
            planner.add_meal("Soup", "2099-01-01", " , "),
            Err(PlannerError::EmptyIngredientList)
        ));
        assert!(planner.store().is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_id() {
        let mut planner = Planner::new();
        assert!(planner.add_meal("Soup", "2099-02-30", "leek").is_err());
        assert_eq!(planner.add_meal("Soup", "2099-02-28", "leek").unwrap().id, 1);
    }

    #[test]
    fn test_ingredient_report_reflects_current_store() {
        let mut planner = Planner::new();
        assert!(planner.ingredient_report().is_empty());

        planner.add_meal("Omelette", "2099-01-01", "egg, milk").unwrap();
        planner.add_meal("Boiled egg", "2099-01-02", "egg").unwrap();

        let report = planner.ingredient_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].ingredient, "egg");
        assert_eq!(report[0].count, 2);
        assert_eq!(report[1].ingredient, "milk");
        assert_eq!(report[1].count, 1);

        planner.add_meal("Custard", "2099-01-03", "milk, egg").unwrap();
        assert_eq!(planner.ingredient_report()[1].count, 2);
    }

    #[test]
    fn test_export_ingredients() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.csv");
        let mut planner = Planner::new();

        assert!(matches!(
            planner.export_ingredients(&path),
            Err(PlannerError::EmptyReport)
        ));
        assert!(!path.exists());

        planner.add_meal("Omelette", "2099-01-01", "egg, milk").unwrap();
        let summary = planner.export_ingredients(&path).unwrap();
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.path, path);

        let back = report::read_csv(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(back, planner.ingredient_report());
    }
}
