pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, prompt_activity, prompt_age, prompt_gender, prompt_goal};
pub use render::{display_needs, display_plan, display_search_hits};
