//! Static exercise catalog.
//!
//! The catalog is the read-only descriptor source for the timer engine:
//! presentation layers look exercises up by id and hand the resulting
//! [`ExerciseParameters`] to the engine. Unknown ids surface as
//! [`CatalogError::NotFound`] and never start a session.

mod exercise;

pub use exercise::{Category, Exercise, ExerciseParameters};

use crate::error::CatalogError;

/// The built-in exercise library.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// The default exercise library shipped with the application.
    pub fn builtin() -> Self {
        let ex = |id: &str,
                  name: &str,
                  category: Category,
                  sets: u32,
                  reps: &str,
                  muscles: &[&str],
                  warmup_min: u64,
                  work_min: u64,
                  rest_min: u64,
                  description: &str| Exercise {
            id: id.into(),
            name: name.into(),
            category,
            sets,
            reps: reps.into(),
            muscles: muscles.iter().map(|m| (*m).into()).collect(),
            warmup_min,
            work_min,
            rest_min,
            description: description.into(),
        };

        Self {
            exercises: vec![
                ex(
                    "bench-press",
                    "Bench Press",
                    Category::Chest,
                    4,
                    "8-10",
                    &["Pectorals", "Triceps", "Front Deltoids"],
                    10,
                    15,
                    3,
                    "Barbell press from a flat bench. Keep shoulder blades retracted and feet planted.",
                ),
                ex(
                    "push-ups",
                    "Push-Ups",
                    Category::Chest,
                    3,
                    "12-15",
                    &["Pectorals", "Triceps", "Core"],
                    5,
                    10,
                    2,
                    "Bodyweight press. Maintain a straight line from head to heels.",
                ),
                ex(
                    "deadlift",
                    "Deadlift",
                    Category::Back,
                    4,
                    "6-8",
                    &["Erector Spinae", "Glutes", "Hamstrings", "Traps"],
                    10,
                    15,
                    4,
                    "Hip hinge off the floor with a neutral spine. Brace before every pull.",
                ),
                ex(
                    "pull-ups",
                    "Pull-Ups",
                    Category::Back,
                    3,
                    "8-12",
                    &["Lats", "Biceps", "Rear Deltoids"],
                    5,
                    10,
                    3,
                    "Dead-hang to chin over bar. Control the descent.",
                ),
                ex(
                    "squats",
                    "Barbell Squats",
                    Category::Legs,
                    4,
                    "10-12",
                    &["Quadriceps", "Glutes", "Hamstrings"],
                    10,
                    15,
                    3,
                    "High-bar back squat to parallel or below. Drive through the mid-foot.",
                ),
                ex(
                    "lunges",
                    "Walking Lunges",
                    Category::Legs,
                    3,
                    "12 each leg",
                    &["Quadriceps", "Glutes", "Calves"],
                    5,
                    10,
                    2,
                    "Alternating forward lunges. Keep the front knee over the ankle.",
                ),
                ex(
                    "bicep-curls",
                    "Dumbbell Bicep Curls",
                    Category::Arms,
                    3,
                    "10-12",
                    &["Biceps", "Forearms"],
                    5,
                    8,
                    2,
                    "Strict curls, elbows pinned to the sides. No swinging.",
                ),
                ex(
                    "tricep-dips",
                    "Tricep Dips",
                    Category::Arms,
                    3,
                    "10-15",
                    &["Triceps", "Chest", "Front Deltoids"],
                    5,
                    8,
                    2,
                    "Parallel-bar or bench dips. Lower until upper arms are parallel to the floor.",
                ),
                ex(
                    "plank",
                    "Plank Circuit",
                    Category::Core,
                    3,
                    "60 sec hold",
                    &["Abdominals", "Obliques", "Lower Back"],
                    3,
                    5,
                    1,
                    "Front plank holds. Squeeze glutes and keep hips level.",
                ),
                ex(
                    "jump-rope",
                    "Jump Rope Intervals",
                    Category::Cardio,
                    5,
                    "continuous",
                    &["Calves", "Shoulders", "Cardiovascular"],
                    5,
                    4,
                    1,
                    "Steady-pace skipping intervals. Land softly on the balls of the feet.",
                ),
                ex(
                    "treadmill-run",
                    "Treadmill Run",
                    Category::Cardio,
                    1,
                    "continuous",
                    &["Quadriceps", "Hamstrings", "Cardiovascular"],
                    5,
                    20,
                    0,
                    "Single continuous run at a conversational pace.",
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no exercise has the given id.
    pub fn lookup(&self, id: &str) -> Result<&Exercise, CatalogError> {
        self.exercises
            .iter()
            .find(|ex| ex.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn by_category(&self, category: Category) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|ex| ex.category == category)
            .collect()
    }

    /// Categories with at least one exercise, in catalog order.
    pub fn categories(&self) -> Vec<Category> {
        let mut cats = Vec::new();
        for ex in &self.exercises {
            if !cats.contains(&ex.category) {
                cats.push(ex.category);
            }
        }
        cats
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_category() {
        let catalog = Catalog::builtin();
        for cat in Category::ALL {
            assert!(
                !catalog.by_category(cat).is_empty(),
                "no exercises in category {cat}"
            );
        }
        assert_eq!(catalog.categories().len(), Category::ALL.len());
    }

    #[test]
    fn lookup_known_id() {
        let catalog = Catalog::builtin();
        let ex = catalog.lookup("squats").unwrap();
        assert_eq!(ex.name, "Barbell Squats");
        assert_eq!(ex.sets, 4);
    }

    #[test]
    fn lookup_unknown_id() {
        let catalog = Catalog::builtin();
        let err = catalog.lookup("underwater-basket-weaving").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn set_counts_are_valid() {
        for ex in Catalog::builtin().all() {
            assert!(ex.sets >= 1, "{} has zero sets", ex.id);
        }
    }
}
