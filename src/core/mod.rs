pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{DumpFormat, DumpReport, RenderedDump};
pub use crate::domain::ports::{ByteSource, ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
