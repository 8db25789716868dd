use crate::core::render;
use crate::core::{ByteSource, ConfigProvider, DumpReport, Pipeline, RenderedDump};
use crate::utils::error::Result;

pub struct DumpPipeline<S: ByteSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: ByteSource, C: ConfigProvider> DumpPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: ByteSource, C: ConfigProvider> Pipeline for DumpPipeline<S, C> {
    fn read(&self) -> Result<DumpReport> {
        let path = self.config.input_path();
        let requested = self.config.byte_count();

        tracing::debug!("Reading up to {} bytes from: {}", requested, path);
        let bytes = self.source.read_prefix(path, requested)?;

        // 檔案比要求的短就讀到 EOF 為止，不印垃圾值
        let truncated = bytes.len() < requested;
        if truncated {
            tracing::warn!(
                "File is shorter than requested: got {} of {} bytes",
                bytes.len(),
                requested
            );
        }

        Ok(DumpReport {
            path: path.to_string(),
            requested,
            bytes,
            truncated,
            format: self.config.format(),
        })
    }

    fn render(&self, report: DumpReport) -> Result<RenderedDump> {
        let text = render::render_bytes(&report.bytes, report.format);
        Ok(RenderedDump { report, text })
    }

    fn emit(&self, dump: RenderedDump) -> Result<String> {
        let output = if self.config.json() {
            serde_json::to_string_pretty(&dump.report)?
        } else {
            dump.text
        };

        println!("{}", output);

        if let Some(path) = self.config.output_path() {
            tracing::debug!("Writing dump to: {}", path);
            self.source.write_file(path, output.as_bytes())?;
        }

        Ok(output)
    }
}
