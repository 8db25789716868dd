pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{cli::LocalFileSource, CliConfig};

pub use core::{engine::ProbeEngine, pipeline::DumpPipeline};
pub use domain::model::{DumpFormat, DumpReport, RenderedDump};
pub use utils::error::{ProbeError, Result};
