use gnomix_logger::{LevelFilter, Logger};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn json_file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("nested").join("logs");

    let logger = Logger::builder("integration-file-logging")
        .console(false)
        .directory(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(downloads = 8548_u64, "hello from integration test");
    tracing::debug!("filtered out below info");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let files = log_files(&log_dir);
    assert_eq!(files.len(), 1, "one rolling log file expected");
    assert!(
        files[0]
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("integration-file-logging"))
    );

    let contents = fs::read_to_string(&files[0])?;
    let first = contents.lines().next().expect("log file should not be empty");
    let line: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(line["level"], "INFO");
    assert!(contents.contains("hello from integration test"));
    assert!(!contents.contains("filtered out below info"));

    Ok(())
}
