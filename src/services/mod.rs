//! Application services
//!
//! Provider selection, the meeting summarizer, and the summary service that
//! ties them together for callers.

pub mod selector;
pub mod summarizer;
pub mod summary;

pub use selector::ProviderSelector;
pub use summarizer::MeetingSummarizer;
pub use summary::SummaryService;
