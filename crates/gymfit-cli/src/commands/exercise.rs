use clap::Subcommand;
use gymfit_core::{planned_total_secs, Catalog, Category, Config, Exercise};

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List catalog exercises
    List {
        /// Filter by category (chest, back, legs, arms, core, cardio)
        #[arg(long)]
        category: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one exercise with its full timing breakdown
    Show {
        /// Exercise id
        id: String,
    },
    /// Bookmark an exercise
    Save {
        /// Exercise id
        id: String,
    },
    /// Remove a bookmark
    Unsave {
        /// Exercise id
        id: String,
    },
}

fn print_line(ex: &Exercise, saved: bool) {
    let total_min = planned_total_secs(&ex.params()) / 60;
    let marker = if saved { "*" } else { " " };
    println!(
        "{marker} {:<16} {:<22} {:<8} {} sets x {:<14} {} min",
        ex.id, ex.name, ex.category, ex.sets, ex.reps, total_min
    );
}

pub fn run(action: ExerciseAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();

    match action {
        ExerciseAction::List { category, json } => {
            let exercises: Vec<&Exercise> = match category {
                Some(name) => {
                    let category: Category = name.parse()?;
                    catalog.by_category(category)
                }
                None => catalog.all().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&exercises)?);
            } else {
                let config = Config::load()?;
                for ex in exercises {
                    print_line(ex, config.profile.is_saved(&ex.id));
                }
                let cats: Vec<String> =
                    catalog.categories().iter().map(|c| c.to_string()).collect();
                println!("\ncategories: {}", cats.join(", "));
            }
        }
        ExerciseAction::Show { id } => {
            let ex = catalog.lookup(&id)?;
            let params = ex.params();
            let detail = serde_json::json!({
                "exercise": ex,
                "planned_total_secs": planned_total_secs(&params),
                "params": params,
            });
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        ExerciseAction::Save { id } => {
            let ex = catalog.lookup(&id)?;
            let mut config = Config::load()?;
            config.profile.save_workout(&ex.id);
            config.save()?;
            println!("saved {}", ex.id);
        }
        ExerciseAction::Unsave { id } => {
            let mut config = Config::load()?;
            config.profile.unsave_workout(&id);
            config.save()?;
            println!("unsaved {id}");
        }
    }
    Ok(())
}
