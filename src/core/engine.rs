use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ProbeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ProbeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting byte probe...");

        tracing::info!("Reading bytes...");
        let report = self.pipeline.read()?;
        tracing::info!("Read {} bytes", report.bytes.len());
        self.monitor.log_stats("Read");

        tracing::info!("Rendering dump...");
        let dump = self.pipeline.render(report)?;
        self.monitor.log_stats("Render");

        tracing::info!("Emitting output...");
        let output = self.pipeline.emit(dump)?;
        self.monitor.log_stats("Emit");

        self.monitor.log_final_stats();

        Ok(output)
    }
}
