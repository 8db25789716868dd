use byteprobe::utils::error::{ErrorCategory, ErrorSeverity};
use byteprobe::{CliConfig, DumpFormat, DumpPipeline, LocalFileSource, ProbeEngine};
use tempfile::TempDir;

fn config(input_path: &str) -> CliConfig {
    CliConfig {
        input_path: input_path.to_string(),
        byte_count: 200,
        format: DumpFormat::Decimal,
        json: false,
        output: None,
        verbose: false,
        monitor: false,
    }
}

fn write_sample(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_dump_is_first_200_bytes_space_separated() {
    let temp_dir = TempDir::new().unwrap();

    // 300-byte file covering the full byte range
    let bytes: Vec<u8> = (0..300u16).map(|i| (i % 256) as u8).collect();
    let path = write_sample(&temp_dir, "sample.tif", &bytes);

    let pipeline = DumpPipeline::new(LocalFileSource::new(), config(&path));
    let engine = ProbeEngine::new_with_monitoring(pipeline, false);
    let output = engine.run().unwrap();

    let expected = bytes[..200]
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(output, expected);
    assert_eq!(output.split(' ').count(), 200);
}

#[test]
fn test_short_file_stops_at_eof() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample(&temp_dir, "tiny.bin", &[10, 20, 30]);

    let pipeline = DumpPipeline::new(LocalFileSource::new(), config(&path));
    let engine = ProbeEngine::new(pipeline);
    let output = engine.run().unwrap();

    // Only the bytes that exist, never padding or garbage
    assert_eq!(output, "10 20 30");
}

#[test]
fn test_missing_file_is_surfaced_as_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.tif");

    let pipeline = DumpPipeline::new(
        LocalFileSource::new(),
        config(path.to_str().unwrap()),
    );
    let engine = ProbeEngine::new(pipeline);
    let err = engine.run().unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Io);
    assert_eq!(err.severity(), ErrorSeverity::High);
}

#[test]
fn test_output_flag_writes_dump_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample(&temp_dir, "sample.bin", &[1, 2, 3, 4]);
    let output_path = temp_dir.path().join("dump.txt");

    let mut cfg = config(&path);
    cfg.output = Some(output_path.to_str().unwrap().to_string());

    let pipeline = DumpPipeline::new(LocalFileSource::new(), cfg);
    let engine = ProbeEngine::new(pipeline);
    let output = engine.run().unwrap();

    assert_eq!(output, "1 2 3 4");
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), output);
}

#[test]
fn test_json_report_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample(&temp_dir, "short.bin", &[0x49, 0x49, 0x2A, 0x00]);

    let mut cfg = config(&path);
    cfg.json = true;

    let pipeline = DumpPipeline::new(LocalFileSource::new(), cfg);
    let engine = ProbeEngine::new(pipeline);
    let output = engine.run().unwrap();

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["path"], path.as_str());
    assert_eq!(report["requested"], 200);
    assert_eq!(report["truncated"], true);
    assert_eq!(report["format"], "decimal");
    assert_eq!(report["bytes"].as_array().unwrap().len(), 4);
    assert_eq!(report["bytes"][2], 0x2A);
}

#[test]
fn test_custom_byte_count() {
    let temp_dir = TempDir::new().unwrap();
    let bytes: Vec<u8> = (0..64).collect();
    let path = write_sample(&temp_dir, "counted.bin", &bytes);

    let mut cfg = config(&path);
    cfg.byte_count = 8;

    let pipeline = DumpPipeline::new(LocalFileSource::new(), cfg);
    let engine = ProbeEngine::new(pipeline);
    let output = engine.run().unwrap();

    assert_eq!(output, "0 1 2 3 4 5 6 7");
}
