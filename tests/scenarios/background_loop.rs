//! Scenario: Background Loop
//!
//! Journey: `run` polls on its own while another thread edits the file,
//! then a stop request (as sent by Ctrl+C) ends the session.

use std::time::{Duration, Instant};

use keymirror::{
    CodeGenerator, FileMonitor, GeneratorOptions, KeyExtractor, LocalFile, MonitorEvent,
    MonitorOptions,
};

use crate::common::*;

fn wait_for(what: &str, mut done: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !done() {
        assert!(Instant::now() < deadline, "timed out waiting for {}", what);
        std::thread::sleep(Duration::from_millis(10));
    }
}

/// SCENARIO: edits are picked up by the running loop and stop is honoured
#[test]
fn scenario_running_loop_regenerates_and_stops() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("AppSettings.cs");
    write_at(&input, &settings(&[("A", "1")]), 1);

    let mut monitor: FileMonitor<LocalFile, LocalFile> = FileMonitor::new(
        MonitorOptions::default().with_interval_ms(20),
        KeyExtractor::new(),
        CodeGenerator::new(GeneratorOptions::default()),
    );
    monitor.attach_source(LocalFile::new(&input));
    monitor.attach_sink(LocalFile::new(&output));
    let stop = monitor.stop_handle();

    let worker = std::thread::spawn(move || {
        let mut events = Vec::new();
        monitor.run(|n| events.push(n.event)).unwrap();
        events
    });

    wait_for("initial class", || output.exists());
    write_at(&input, &settings(&[("A", "1"), ("Z", "26")]), 2);
    wait_for("regenerated class", || {
        std::fs::read_to_string(&output)
            .map(|c| c.contains("public const string Z"))
            .unwrap_or(false)
    });

    stop.stop();
    let events = worker.join().unwrap();

    assert!(matches!(
        events.first(),
        Some(MonitorEvent::MonitorStarted { interval_ms: 20, .. })
    ));
    assert!(matches!(events.get(1), Some(MonitorEvent::Generated { keys: 1, .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        MonitorEvent::KeysChanged { added, .. } if added == &["Z"]
    )));
    assert_eq!(events.last(), Some(&MonitorEvent::Shutdown));
}
