pub mod builder;
pub mod features;
pub mod format;
pub mod model;
pub mod orchestrator;
pub mod summary;

pub use builder::build_report;
pub use model::{PlanetReport, SystemReport};
pub use orchestrator::generate_system_report;
pub use summary::{SUMMARY_FALLBACK, summarize};
