use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Meal, NewMeal};

/// Append-only, in-memory collection of meals.
///
/// Each store allocates its own ids starting at 1. Meals are never removed,
/// so the meal with id `n` always sits at index `n - 1`.
#[derive(Debug)]
pub struct MealStore {
    meals: Vec<Meal>,
    next_id: u64,
}

impl Default for MealStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MealStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            meals: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a meal and return its id. Nothing is stored on error.
    pub fn add_meal(&mut self, meal: NewMeal) -> Result<u64> {
        self.insert(meal).map(|m| m.id)
    }

    /// Like [`MealStore::add_meal`], returning the stored record.
    pub fn insert(&mut self, meal: NewMeal) -> Result<&Meal> {
        let name = meal.name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyName);
        }
        if meal.ingredients.is_empty() {
            return Err(PlannerError::EmptyIngredientList);
        }

        let id = self.next_id;
        self.next_id += 1;
        debug!(id, name, date = %meal.date, ingredients = meal.ingredients.len(), "meal added");
        self.meals.push(Meal {
            id,
            name: name.to_string(),
            date: meal.date,
            ingredients: meal.ingredients,
        });
        Ok(self.meals.last().expect("meal was just pushed"))
    }

    /// All meals ascending by date; meals on the same date keep insertion order.
    #[must_use]
    pub fn list_meals(&self) -> Vec<&Meal> {
        let mut meals: Vec<&Meal> = self.meals.iter().collect();
        meals.sort_by_key(|m| m.date);
        meals
    }

    /// Meals in insertion order.
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Meal> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.meals.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
