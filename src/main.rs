use std::io;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nutri_plan_rs::catalog::load_catalog;
use nutri_plan_rs::cli::{Cli, Command, ProfileArgs};
use nutri_plan_rs::error::Result;
use nutri_plan_rs::export::{write_plan_csv, write_totals_csv};
use nutri_plan_rs::interface::{collect_profile, display_needs, display_plan, display_search_hits};
use nutri_plan_rs::models::{Condition, Profile};
use nutri_plan_rs::recommender::{generate_plan, needs_for_profile};
use nutri_plan_rs::search::FactsIndex;
use nutri_plan_rs::state::{load_cache, save_cache, CachedPlan};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::Plan(profile) => cmd_plan(&cli, &profile),
        Command::Export {
            profile,
            output,
            totals,
        } => cmd_export(&cli, &profile, output.as_deref(), totals),
        Command::Search {
            query,
            db,
            limit,
            diabetes_only,
            weight_only,
        } => cmd_search(&query, &db, limit, diabetes_only, weight_only),
    }
}

/// Return the cached plan when the profile is unchanged, otherwise
/// regenerate and refresh the cache.
fn resolve_plan(cli: &Cli, profile: Profile, fresh: bool) -> Result<CachedPlan> {
    let condition = Condition::from_goal(&profile.goal);
    let needs = needs_for_profile(&profile, condition.calorie_goal());

    if !fresh {
        if let Some(cached) = load_cache(&cli.cache)? {
            if cached.matches(&profile) {
                println!("Reusing cached plan for user '{}'.", profile.user_id);
                return Ok(cached);
            }
        }
    }

    let catalog = load_catalog(&cli.catalog)?;
    println!("Loaded {} usable foods from {}", catalog.len(), cli.catalog);

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let (plan, totals) = generate_plan(&catalog, &needs, condition, &mut rng)?;

    let cached = CachedPlan {
        profile,
        needs,
        condition,
        plan,
        totals,
    };

    // Cache write failures are not fatal; the plan is still returned.
    if let Err(e) = save_cache(&cli.cache, &cached) {
        eprintln!("Warning: failed to save plan cache: {}", e);
    }

    Ok(cached)
}

/// Generate a plan (or reuse the cached one) and display it.
fn cmd_plan(cli: &Cli, args: &ProfileArgs) -> Result<()> {
    let profile = collect_profile(args)?;
    let cached = resolve_plan(cli, profile, args.fresh)?;

    display_needs(&cached.needs);
    display_plan(&cached.plan, &cached.totals);
    Ok(())
}

/// Generate a plan and write it out as CSV.
fn cmd_export(cli: &Cli, args: &ProfileArgs, output: Option<&str>, totals: bool) -> Result<()> {
    let profile = collect_profile(args)?;
    let cached = resolve_plan(cli, profile, args.fresh)?;

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_plan_csv(file, &cached.plan)?;
            println!("Plan written to {}", path);

            if totals {
                let totals_path = Path::new(path).with_extension("totals.csv");
                let file = std::fs::File::create(&totals_path)?;
                write_totals_csv(file, &cached.totals)?;
                println!("Totals written to {}", totals_path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            write_plan_csv(stdout.lock(), &cached.plan)?;
            if totals {
                write_totals_csv(io::stdout().lock(), &cached.totals)?;
            }
        }
    }

    Ok(())
}

/// Fuzzy-search the food-facts database.
fn cmd_search(
    query: &str,
    db: &str,
    limit: usize,
    diabetes_only: bool,
    weight_only: bool,
) -> Result<()> {
    let index = FactsIndex::load(db)?;
    let hits = index.search(query, limit, diabetes_only, weight_only);
    display_search_hits(query, &hits);
    Ok(())
}
