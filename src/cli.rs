use clap::{Args, Parser, Subcommand};

/// NutriPlan — recommends a 30-day meal plan from biometric inputs.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "dataset/diet_catalog.csv")]
    pub catalog: String,

    /// Path to the plan cache JSON file.
    #[arg(long, default_value = "plan_cache.json")]
    pub cache: String,

    /// Seed for the plan generator.
    #[arg(long, default_value_t = crate::recommender::DEFAULT_SEED)]
    pub seed: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate (or reuse a cached) 30-day meal plan.
    Plan(ProfileArgs),

    /// Generate the plan and export it as CSV.
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<String>,

        /// Also write daily totals next to the plan file.
        #[arg(long)]
        totals: bool,
    },

    /// Fuzzy-search the food-facts database.
    Search {
        /// Search text.
        query: String,

        /// Path to the food-facts JSON database.
        #[arg(long, default_value = "dataset/food_facts.json")]
        db: String,

        /// Maximum results (clamped to 1..=100).
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Return only diabetes-safe foods.
        #[arg(long)]
        diabetes_only: bool,

        /// Return only weight-loss-friendly foods.
        #[arg(long)]
        weight_only: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(ProfileArgs::default())
    }
}

/// Profile fields; anything omitted is prompted for interactively.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// User identity for the plan cache.
    #[arg(long)]
    pub user: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters.
    #[arg(long)]
    pub height: Option<f64>,

    /// Gender ("male" or anything else).
    #[arg(long)]
    pub gender: Option<String>,

    /// Activity level: sedentary, light, moderate, active, very_active.
    #[arg(long)]
    pub activity: Option<String>,

    /// Goal: weight_loss or diabetes.
    #[arg(long)]
    pub goal: Option<String>,

    /// Ignore any cached plan and regenerate.
    #[arg(long)]
    pub fresh: bool,
}
