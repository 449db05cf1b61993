use fhub_domain::config::LogConfig;
use fhub_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_directory_receives_log_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LogConfig { directory: Some(log_dir.clone()), ..LogConfig::default() };

    let logger = Logger::builder("fhub-file-logging").console(false).with_config(&config)?.init()?;
    assert!(logger.writes_files());

    tracing::info!(modules = 8, "Module registry initialized");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("Module registry initialized"), "unexpected log contents: {contents}");

    Ok(())
}
