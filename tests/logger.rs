use datecalc::config::LoggingConfig;
use datecalc::logger;
use log::LevelFilter;

#[test]
fn test_verbosity_levels() {
    assert_eq!(logger::verbosity_level(0), LevelFilter::Warn);
    assert_eq!(logger::verbosity_level(1), LevelFilter::Info);
    assert_eq!(logger::verbosity_level(2), LevelFilter::Debug);
    assert_eq!(logger::verbosity_level(3), LevelFilter::Trace);
    assert_eq!(logger::verbosity_level(9), LevelFilter::Trace);
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("datecalc/datecalc.log"));
    }
}

#[test]
fn test_logging_config_levels() {
    let mut config = LoggingConfig::default();
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);

    config.level = "DEBUG".to_string();
    assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);

    config.level = "verbose".to_string();
    assert!(config.level_filter().is_err());
}

#[test]
fn test_dispatch_without_file() {
    let config = LoggingConfig::default();
    assert!(logger::build_dispatch(1, &config).is_ok());
}
