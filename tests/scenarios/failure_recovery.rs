//! Scenario: Failure Recovery
//!
//! Journey: Things go wrong mid-session and the monitor keeps going.
//!
//! Success Criteria:
//! - Failures are reported as error events, never panics or exits
//! - A pending key change survives a failed write and lands on the next tick
//! - A broken document never replaces the generated class

use keymirror::{
    CodeGenerator, FileMonitor, GeneratorOptions, KeyExtractor, LocalFile, MonitorEvent,
    MonitorOptions, MonitorState, TickOutcome,
};

use crate::common::*;

fn monitor() -> FileMonitor<LocalFile, LocalFile> {
    FileMonitor::new(
        MonitorOptions::default(),
        KeyExtractor::new(),
        CodeGenerator::new(GeneratorOptions::default()),
    )
}

fn error_kinds(events: &[MonitorEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            MonitorEvent::Error { kind, .. } => Some(kind.as_str()),
            _ => None,
        })
        .collect()
}

/// SCENARIO: output path blocked by a directory, then unblocked
#[test]
fn scenario_write_failure_is_retried() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("AppSettings.cs");
    write_at(&input, &settings(&[("A", "1")]), 1);

    let mut m = monitor();
    m.attach_source(LocalFile::new(&input));
    m.attach_sink(LocalFile::new(&output));
    let mut events = Vec::new();
    assert!(matches!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Initialized { .. }
    ));

    // Replace the output file with a directory so the write fails
    std::fs::remove_file(&output).unwrap();
    std::fs::create_dir(&output).unwrap();
    write_at(&input, &settings(&[("A", "1"), ("B", "2")]), 2);

    assert_eq!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Failed {
            kind: "write_failure"
        }
    );
    assert_eq!(m.baseline().map(|b| b.len()), Some(1));

    std::fs::remove_dir(&output).unwrap();
    let TickOutcome::Regenerated(diff) = m.tick(&mut |n| events.push(n.event)) else {
        panic!("expected the pending change to be written");
    };
    assert_eq!(diff.added_keys(), vec!["B"]);
    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("public const string B = \"B\";"));
    assert_eq!(error_kinds(&events), vec!["write_failure"]);
}

/// SCENARIO: a save that leaves the document half-written
#[test]
fn scenario_truncated_document_keeps_previous_class() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("AppSettings.cs");
    write_at(&input, &settings(&[("A", "1"), ("B", "2")]), 1);

    let mut m = monitor();
    m.attach_source(LocalFile::new(&input));
    m.attach_sink(LocalFile::new(&output));
    let mut events = Vec::new();
    m.tick(&mut |n| events.push(n.event));
    let good = std::fs::read_to_string(&output).unwrap();

    write_at(&input, TRUNCATED_CONFIG, 2);
    assert_eq!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Failed {
            kind: "parse_failure"
        }
    );
    assert_eq!(std::fs::read_to_string(&output).unwrap(), good);

    // Save completes with the same keys
    write_at(&input, &settings(&[("A", "1"), ("B", "3")]), 3);
    assert_eq!(m.tick(&mut |n| events.push(n.event)), TickOutcome::Touched);
    assert_eq!(error_kinds(&events), vec!["parse_failure"]);
}

/// SCENARIO: the watched file disappears and comes back
#[test]
fn scenario_deleted_input_is_reported_and_recovered() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("AppSettings.cs");
    write_at(&input, &settings(&[("A", "1")]), 1);

    let mut m = monitor();
    m.attach_source(LocalFile::new(&input));
    m.attach_sink(LocalFile::new(&output));
    let mut events = Vec::new();
    m.tick(&mut |n| events.push(n.event));

    std::fs::remove_file(&input).unwrap();
    assert_eq!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Failed {
            kind: "tick_failure"
        }
    );
    assert_eq!(m.state(), MonitorState::Monitoring);

    write_at(&input, &settings(&[("C", "3")]), 2);
    let TickOutcome::Regenerated(diff) = m.tick(&mut |n| events.push(n.event)) else {
        panic!("expected regeneration after the file returned");
    };
    assert_eq!(diff.added_keys(), vec!["C"]);
    assert_eq!(diff.removed_keys(), vec!["A"]);
}

/// SCENARIO: input missing before the first tick
#[test]
fn scenario_missing_input_stays_ready() {
    let env = TestEnv::new();
    let input = env.path("web.config");

    let mut m = monitor();
    m.attach_source(LocalFile::new(&input));
    m.attach_sink(LocalFile::new(env.path("AppSettings.cs")));

    let mut events = Vec::new();
    assert!(matches!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Failed { .. }
    ));
    assert_eq!(m.state(), MonitorState::Ready);
    assert!(matches!(
        &events[0],
        MonitorEvent::Error { message, .. } if message.contains("file not found")
    ));

    write_at(&input, &settings(&[("A", "1")]), 1);
    assert_eq!(
        m.tick(&mut |n| events.push(n.event)),
        TickOutcome::Initialized { keys: 1 }
    );
}
