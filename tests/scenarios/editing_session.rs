//! Scenario: Editing Session
//!
//! Journey: A developer points keymirror at web.config and keeps editing it.
//!
//! Steps:
//! 1. First tick writes the class with one field
//! 2. A key is added: the class is regenerated with two fields
//! 3. Only a value changes: the class is left alone
//! 4. A key is removed: the class is regenerated without it
//!
//! Success Criteria:
//! - Every regeneration reports exactly the keys that changed
//! - The output file is only rewritten when the key set changes

use keymirror::config::Config;
use keymirror::{
    CodeGenerator, FileMonitor, KeyExtractor, LocalFile, MonitorEvent, MonitorState,
    TargetLanguage, TickOutcome,
};

use crate::common::*;

fn monitor_for(config: &Config) -> FileMonitor<LocalFile, LocalFile> {
    FileMonitor::new(
        config.monitor_options(),
        KeyExtractor::new().with_rules(config.extract_rules()),
        CodeGenerator::new(config.generator_options()),
    )
}

/// SCENARIO: add, edit and remove keys over one session
#[test]
fn scenario_editing_session_tracks_key_set() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("Generated/AppSettings.cs");
    write_at(&input, &settings(&[("A", "1")]), 1);

    let mut monitor = monitor_for(&Config::default());
    monitor.attach_source(LocalFile::new(&input));
    monitor.attach_sink(LocalFile::new(&output));
    let mut events = Vec::new();

    // Step 1: initial class
    assert_eq!(
        monitor.tick(&mut |n| events.push(n.event)),
        TickOutcome::Initialized { keys: 1 }
    );
    assert_eq!(monitor.state(), MonitorState::Monitoring);
    let first = std::fs::read_to_string(&output).unwrap();
    assert!(first.contains("public const string A = \"A\";"));

    // Nothing changed on disk
    assert_eq!(monitor.tick(&mut |n| events.push(n.event)), TickOutcome::Unchanged);

    // Step 2: add B
    write_at(&input, &settings(&[("A", "1"), ("B", "2")]), 2);
    let TickOutcome::Regenerated(diff) = monitor.tick(&mut |n| events.push(n.event)) else {
        panic!("expected regeneration after adding B");
    };
    assert_eq!(diff.added_keys(), vec!["B"]);
    assert!(diff.removed.is_empty());
    let second = std::fs::read_to_string(&output).unwrap();
    assert_eq!(second.matches("public const string").count(), 2);

    // Step 3: value-only edit
    write_at(&input, &settings(&[("A", "changed"), ("B", "2")]), 3);
    assert_eq!(monitor.tick(&mut |n| events.push(n.event)), TickOutcome::Touched);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), second);

    // Step 4: remove A
    write_at(&input, &settings(&[("B", "2")]), 4);
    let TickOutcome::Regenerated(diff) = monitor.tick(&mut |n| events.push(n.event)) else {
        panic!("expected regeneration after removing A");
    };
    assert_eq!(diff.removed_keys(), vec!["A"]);
    let third = std::fs::read_to_string(&output).unwrap();
    assert!(!third.contains("public const string A "));
    assert!(third.contains("public const string B = \"B\";"));

    let changes: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, MonitorEvent::KeysChanged { .. }))
        .collect();
    assert_eq!(changes.len(), 2);
}

/// SCENARIO: a realistic web.config rendered as Rust
#[test]
fn scenario_web_config_to_rust() {
    let env = TestEnv::new();
    let input = env.path("web.config");
    let output = env.path("src/settings.rs");
    write_at(&input, WEB_CONFIG, 1);

    let mut config = Config::default();
    config.generate.language = TargetLanguage::Rust;
    config.generate.class_name = "Settings".to_string();

    let mut monitor = monitor_for(&config);
    monitor.attach_source(LocalFile::new(&input));
    monitor.attach_sink(LocalFile::new(&output));

    assert_eq!(monitor.tick(&mut |_| {}), TickOutcome::Initialized { keys: 3 });

    let class = std::fs::read_to_string(&output).unwrap();
    assert!(class.contains("pub struct Settings;"));
    assert!(class.contains("    pub const ApiUrl: &str = \"ApiUrl\";"));
    assert!(class.contains("    pub const Feature_Search_Enabled: &str = \"Feature.Search-Enabled\";"));
    assert!(class.contains("    /// Welcome & hello\n    pub const _1stRunBanner: &str = \"1stRunBanner\";"));
    assert!(!class.contains("no key here"));
    assert!(!class.contains("debug"));
}

/// SCENARIO: a document without the container generates an empty class
#[test]
fn scenario_missing_container_generates_empty_class() {
    let env = TestEnv::new();
    let input = env.path("app.config");
    let output = env.path("AppSettings.cs");
    write_at(&input, "<configuration><startup /></configuration>", 1);

    let mut monitor = monitor_for(&Config::default());
    monitor.attach_source(LocalFile::new(&input));
    monitor.attach_sink(LocalFile::new(&output));

    assert_eq!(monitor.tick(&mut |_| {}), TickOutcome::Initialized { keys: 0 });
    let class = std::fs::read_to_string(&output).unwrap();
    assert!(class.contains("public static class AppSettings\n{\n}\n"));

    // The container appears later: every key is new
    write_at(&input, &settings(&[("A", "1")]), 2);
    let TickOutcome::Regenerated(diff) = monitor.tick(&mut |_| {}) else {
        panic!("expected regeneration once keys appear");
    };
    assert_eq!(diff.added_keys(), vec!["A"]);
}
