pub mod cli;
pub mod error;
pub mod index;
pub mod utils;
pub mod record;
pub mod ranking;
pub mod progress;
pub mod extractor;
pub mod csv_processor;
pub mod file_processing;

pub use error::ExtractError;
pub use extractor::Extractor;
pub use ranking::RankDeltaCalculator;
pub use record::{BabyRecord, Gender, NameRankEntry};
