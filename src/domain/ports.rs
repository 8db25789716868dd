use crate::domain::model::{DumpFormat, DumpReport, RenderedDump};
use crate::utils::error::Result;

pub trait ByteSource: Send + Sync {
    /// Read up to `limit` bytes from the start of `path`. Stops at EOF.
    fn read_prefix(&self, path: &str, limit: usize) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn byte_count(&self) -> usize;
    fn format(&self) -> DumpFormat;
    fn json(&self) -> bool;
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline: Send + Sync {
    fn read(&self) -> Result<DumpReport>;
    fn render(&self, report: DumpReport) -> Result<RenderedDump>;
    fn emit(&self, dump: RenderedDump) -> Result<String>;
}
