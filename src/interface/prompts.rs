use dialoguer::{Input, Select};

use crate::cli::ProfileArgs;
use crate::error::{PlanError, Result};
use crate::models::Profile;

const ACTIVITY_LEVELS: [&str; 5] = ["sedentary", "light", "moderate", "active", "very_active"];
const GOALS: [&str; 2] = ["weight_loss", "diabetes"];

/// Prompt for the user identity used as the cache key.
pub fn prompt_user_id() -> Result<String> {
    Ok(Input::new()
        .with_prompt("User id")
        .default("local".to_string())
        .interact_text()?)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age (years)").interact_text()?;
    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid age".to_string()))?;
    if age == 0 {
        return Err(PlanError::InvalidInput("Age must be positive".to_string()));
    }
    Ok(age)
}

/// Prompt for a positive measurement (weight or height).
fn prompt_positive(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;
    if value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{prompt} must be positive"
        )));
    }
    Ok(value)
}

/// Prompt for gender; free-form, "male" vs anything else downstream.
pub fn prompt_gender() -> Result<String> {
    Ok(Input::new().with_prompt("Gender").interact_text()?)
}

/// Prompt for activity level from the fixed table.
pub fn prompt_activity() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&ACTIVITY_LEVELS)
        .default(0)
        .interact()?;
    Ok(ACTIVITY_LEVELS[selection].to_string())
}

/// Prompt for the dietary goal.
pub fn prompt_goal() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&GOALS)
        .default(0)
        .interact()?;
    Ok(GOALS[selection].to_string())
}

/// Build a full profile from CLI flags, prompting for whatever is missing.
pub fn collect_profile(args: &ProfileArgs) -> Result<Profile> {
    let user_id = match &args.user {
        Some(u) => u.clone(),
        None => prompt_user_id()?,
    };
    let age = match args.age {
        Some(a) if a > 0 => a,
        Some(_) => return Err(PlanError::InvalidInput("Age must be positive".to_string())),
        None => prompt_age()?,
    };
    let weight = match args.weight {
        Some(w) if w > 0.0 => w,
        Some(_) => {
            return Err(PlanError::InvalidInput(
                "Weight must be positive".to_string(),
            ));
        }
        None => prompt_positive("Weight (kg)")?,
    };
    let height = match args.height {
        Some(h) if h > 0.0 => h,
        Some(_) => {
            return Err(PlanError::InvalidInput(
                "Height must be positive".to_string(),
            ));
        }
        None => prompt_positive("Height (cm)")?,
    };
    let gender = match &args.gender {
        Some(g) => g.clone(),
        None => prompt_gender()?,
    };
    let activity_level = match &args.activity {
        Some(a) => a.clone(),
        None => prompt_activity()?,
    };
    let goal = match &args.goal {
        Some(g) => g.clone(),
        None => prompt_goal()?,
    };

    Ok(Profile {
        user_id,
        age,
        weight,
        height,
        gender,
        activity_level,
        goal,
    })
}
