use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Muscle-group category an exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chest,
    Back,
    Legs,
    Arms,
    Core,
    Cardio,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Chest,
        Category::Back,
        Category::Legs,
        Category::Arms,
        Category::Core,
        Category::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chest => "chest",
            Category::Back => "back",
            Category::Legs => "legs",
            Category::Arms => "arms",
            Category::Core => "core",
            Category::Cardio => "cardio",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chest" => Ok(Category::Chest),
            "back" => Ok(Category::Back),
            "legs" => Ok(Category::Legs),
            "arms" => Ok(Category::Arms),
            "core" => Ok(Category::Core),
            "cardio" => Ok(Category::Cardio),
            _ => Err(CatalogError::UnknownCategory { name: s.to_string() }),
        }
    }
}

/// Immutable timing parameters handed to the timer engine.
///
/// All durations are in seconds. `set_count` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseParameters {
    pub id: String,
    pub set_count: u32,
    pub warmup_secs: u64,
    pub work_secs: u64,
    pub rest_secs: u64,
}

/// A catalog exercise descriptor.
///
/// Durations are configured in whole minutes; [`Exercise::params`] converts
/// them to the second-granular parameters the timer engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub sets: u32,
    pub reps: String,
    pub muscles: Vec<String>,
    /// Warm-up duration in minutes.
    pub warmup_min: u64,
    /// Working duration per set, in minutes.
    pub work_min: u64,
    /// Rest between sets, in minutes.
    pub rest_min: u64,
    #[serde(default)]
    pub description: String,
}

impl Exercise {
    /// Timing parameters for a session of this exercise.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn params(&self) -> ExerciseParameters {
        ExerciseParameters {
            id: self.id.clone(),
            set_count: self.sets,
            warmup_secs: self.warmup_min.saturating_mul(60),
            work_secs: self.work_min.saturating_mul(60),
            rest_secs: self.rest_min.saturating_mul(60),
        }
    }
}
