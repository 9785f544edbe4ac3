use clap::Subcommand;
use gymfit_core::storage::Database;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Recent completed workouts, newest first
    List {
        /// Maximum number of entries
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Workout statistics
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's totals
    Today,
    /// All-time totals
    All,
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        HistoryAction::List { limit } => {
            let history = db.history(limit)?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        HistoryAction::Stats { action } => {
            let stats = match action {
                StatsAction::Today => db.stats_today()?,
                StatsAction::All => db.stats_all()?,
            };
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
