//! User profile: body metrics and the saved-workout list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(format!("unknown fitness level: {s}")),
        }
    }
}

/// Standard BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn for_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: u32,
    /// Body weight in kilograms.
    #[serde(default = "default_weight")]
    pub weight_kg: f64,
    /// Height in centimeters.
    #[serde(default = "default_height")]
    pub height_cm: f64,
    #[serde(default = "default_level")]
    pub fitness_level: FitnessLevel,
    /// Exercise ids the user has bookmarked.
    #[serde(default)]
    pub saved_workouts: Vec<String>,
}

fn default_name() -> String {
    "Fitness Enthusiast".into()
}
fn default_age() -> u32 {
    25
}
fn default_weight() -> f64 {
    75.0
}
fn default_height() -> f64 {
    175.0
}
fn default_level() -> FitnessLevel {
    FitnessLevel::Intermediate
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
            weight_kg: default_weight(),
            height_cm: default_height(),
            fitness_level: default_level(),
            saved_workouts: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Body mass index rounded to one decimal place.
    ///
    /// Returns 0.0 when height is not set, to keep the value displayable.
    pub fn bmi(&self) -> f64 {
        if self.height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = self.height_cm / 100.0;
        let raw = self.weight_kg / (height_m * height_m);
        (raw * 10.0).round() / 10.0
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::for_bmi(self.bmi())
    }

    /// Bookmark an exercise. Duplicate saves are ignored.
    pub fn save_workout(&mut self, exercise_id: &str) {
        if !self.saved_workouts.iter().any(|id| id == exercise_id) {
            self.saved_workouts.push(exercise_id.to_string());
        }
    }

    /// Remove a bookmark. Unsaving an absent id is a no-op.
    pub fn unsave_workout(&mut self, exercise_id: &str) {
        self.saved_workouts.retain(|id| id != exercise_id);
    }

    pub fn is_saved(&self, exercise_id: &str) -> bool {
        self.saved_workouts.iter().any(|id| id == exercise_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_bmi() {
        // 75 kg at 1.75 m
        let profile = UserProfile::default();
        assert_eq!(profile.bmi(), 24.5);
        assert_eq!(profile.bmi_category(), BmiCategory::Normal);
    }

    #[test]
    fn bmi_category_bands() {
        assert_eq!(BmiCategory::for_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::for_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::for_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::for_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::for_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn zero_height_does_not_divide() {
        let profile = UserProfile {
            height_cm: 0.0,
            ..UserProfile::default()
        };
        assert_eq!(profile.bmi(), 0.0);
    }

    #[test]
    fn save_and_unsave_workouts() {
        let mut profile = UserProfile::default();
        profile.save_workout("squats");
        profile.save_workout("squats");
        assert_eq!(profile.saved_workouts, vec!["squats"]);
        assert!(profile.is_saved("squats"));

        profile.unsave_workout("squats");
        profile.unsave_workout("squats");
        assert!(profile.saved_workouts.is_empty());
    }
}
