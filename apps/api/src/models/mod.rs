pub mod job;
pub mod profile;

pub use job::{JobPosting, MatchResult};
pub use profile::ResumeProfile;
