use contactdash::config::LoggingConfig;
use contactdash::logger::Logger;

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_capacity_drops_oldest() {
    let logger = Logger::with_capacity(3);
    for i in 0..5 {
        logger.log(format!("entry {i}"));
    }

    let logs = logger.get_logs();
    assert_eq!(logger.len(), 3);
    assert!(logs[0].ends_with("entry 4"));
    assert!(logs[2].ends_with("entry 2"));
}

#[test]
fn test_clear() {
    let logger = Logger::new();
    logger.log("something".to_string());
    assert!(!logger.is_empty());

    logger.clear();
    assert!(logger.is_empty());
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let other = logger.clone();
    other.log("from clone".to_string());
    assert_eq!(logger.len(), 1);
}

#[test]
fn test_install_routes_log_macros_into_buffer() {
    let logger = Logger::new();
    let config = LoggingConfig {
        enabled: false,
        level: "debug".to_string(),
    };

    let path = logger.install(&config).unwrap();
    assert!(path.is_none());

    log::warn!("contact 7 rejected");
    log::trace!("below the threshold");

    let logs = logger.get_logs();
    assert!(logs.iter().any(|line| line.contains("WARN") && line.contains("contact 7 rejected")));
    assert!(!logs.iter().any(|line| line.contains("below the threshold")));
}
