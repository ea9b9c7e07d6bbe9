/// Events from a search job: `search/jobs/{sid}/events`
pub mod job_events;

pub use job_events::{JobEvents, JobEventsArgs, OutputMode, TruncationMode};
