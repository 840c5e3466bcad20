mod cache;

pub use cache::{load_cache, save_cache, CachedPlan};
