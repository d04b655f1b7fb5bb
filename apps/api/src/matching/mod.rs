pub mod experience;
pub mod filters;

pub use filters::{filter_candidates, filter_jobs, FilterCriteria};
