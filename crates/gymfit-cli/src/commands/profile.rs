use clap::Subcommand;
use gymfit_core::{Config, FitnessLevel};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        /// Body weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,
        /// beginner, intermediate, or advanced
        #[arg(long)]
        level: Option<FitnessLevel>,
    },
    /// Body mass index from the stored weight and height
    Bmi,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config.profile)?);
        }
        ProfileAction::Set {
            name,
            age,
            weight,
            height,
            level,
        } => {
            let mut config = Config::load()?;
            if let Some(name) = name {
                config.profile.name = name;
            }
            if let Some(age) = age {
                config.profile.age = age;
            }
            if let Some(weight) = weight {
                config.profile.weight_kg = weight;
            }
            if let Some(height) = height {
                config.profile.height_cm = height;
            }
            if let Some(level) = level {
                config.profile.fitness_level = level;
            }
            config.save()?;
            println!("{}", serde_json::to_string_pretty(&config.profile)?);
        }
        ProfileAction::Bmi => {
            let config = Config::load()?;
            let bmi = config.profile.bmi();
            println!("{bmi} ({})", config.profile.bmi_category());
        }
    }
    Ok(())
}
