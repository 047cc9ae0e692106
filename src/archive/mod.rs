pub mod client;
pub mod row;

pub use client::{ArchiveClient, TCE_TABLE};
pub use row::TceRow;
