use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: u64,
    pub name: String,
    pub date: NaiveDate,
    pub ingredients: Vec<String>,
}

impl Meal {
    /// Ingredients joined for display, e.g. `rice, beans, rice`.
    #[must_use]
    pub fn ingredient_list(&self) -> String {
        self.ingredients.join(", ")
    }
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub date: NaiveDate,
    pub ingredients: Vec<String>,
}

/// One row of the ingredient report. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCount {
    pub ingredient: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub rows: usize,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_list_keeps_order_and_duplicates() {
        let meal = Meal {
            id: 1,
            name: "Burrito".to_string(),
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            ingredients: vec!["rice".into(), "beans".into(), "rice".into()],
        };
        assert_eq!(meal.ingredient_list(), "rice, beans, rice");
    }
}
