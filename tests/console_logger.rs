use coin_stats_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use coin_stats_wasm::infrastructure::{BrowserTimeProvider, ConsoleLogger};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider::new();
    let now = clock.current_timestamp();
    assert!(now > 1_500_000_000_000);

    let text = clock.format_timestamp(now);
    let parts: Vec<&str> = text.split([':', '.']).collect();
    assert_eq!(parts.len(), 4, "unexpected clock format {text}");
    assert_eq!(parts[3].len(), 3);
}

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new(LogLevel::Trace);
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        assert!(logger.accepts(level));
        let component = LogComponent::Infrastructure("Test");
        logger.log(LogEntry::new(level, component, "console smoke test"));
    }
}
