//! Monitor Use Case implementation

use std::time::{Duration, Instant, SystemTime};

use crate::domain::entities::KeySnapshot;
use crate::domain::ports::{DocumentQuery, OutputSink, WatchedSource};
use crate::domain::services::{CodeGenerator, DiffResult, Differ, KeyExtractor};
use crate::error::{KeymirrorError, KeymirrorResult};
use crate::infrastructure::xml::QuickXmlQuery;

use super::event::{MonitorEvent, MonitorOptions, Notification, POLL_SLICE_MS};
use super::state::{MonitorState, StopHandle, TickOutcome};

/// Result of a poll that got past the timestamp check
enum PollResult {
    Unchanged,
    Touched,
    Regenerated { diff: DiffResult, keys: usize },
}

/// File Monitor
///
/// Owns the watched source, the output sink and the last accepted snapshot
/// for one watch session. Ticks are strictly sequential; nothing here is
/// shared across threads except the stop flag.
pub struct FileMonitor<S, K, Q = QuickXmlQuery> {
    options: MonitorOptions,
    extractor: KeyExtractor<Q>,
    generator: CodeGenerator,
    differ: Differ,
    source: Option<S>,
    sink: Option<K>,
    baseline: Option<KeySnapshot>,
    last_modified: Option<SystemTime>,
    stop: StopHandle,
}

impl<S, K, Q> FileMonitor<S, K, Q>
where
    S: WatchedSource,
    K: OutputSink,
    Q: DocumentQuery,
{
    /// Create an `Idle` monitor
    pub fn new(options: MonitorOptions, extractor: KeyExtractor<Q>, generator: CodeGenerator) -> Self {
        Self {
            options,
            extractor,
            generator,
            differ: Differ::new(),
            source: None,
            sink: None,
            baseline: None,
            last_modified: None,
            stop: StopHandle::new(),
        }
    }

    /// Attach the watched document, starting a fresh session
    pub fn attach_source(&mut self, source: S) {
        self.source = Some(source);
        self.reset_session();
    }

    /// Attach the output destination, starting a fresh session
    pub fn attach_sink(&mut self, sink: K) {
        self.sink = Some(sink);
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.baseline = None;
        self.last_modified = None;
    }

    pub fn state(&self) -> MonitorState {
        match (&self.source, &self.sink, &self.baseline) {
            (Some(_), Some(_), Some(_)) => MonitorState::Monitoring,
            (Some(_), Some(_), None) => MonitorState::Ready,
            _ => MonitorState::Idle,
        }
    }

    /// The last snapshot that was written to the sink
    pub fn baseline(&self) -> Option<&KeySnapshot> {
        self.baseline.as_ref()
    }

    pub fn options(&self) -> &MonitorOptions {
        &self.options
    }

    /// Handle that cancels `run` between ticks
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Poll until the stop handle fires (blocking)
    ///
    /// Emits `MonitorStarted` first and `Shutdown` last. Failures inside a
    /// tick are reported as events and never end the loop.
    pub fn run<F>(&mut self, mut on_event: F) -> KeymirrorResult<()>
    where
        F: FnMut(Notification),
    {
        let (source_name, sink_name) = match (&self.source, &self.sink) {
            (Some(source), Some(sink)) => (source.describe(), sink.describe()),
            (None, _) => return Err(KeymirrorError::NotReady { missing: "input file" }),
            (_, None) => return Err(KeymirrorError::NotReady { missing: "output file" }),
        };

        on_event(Notification::now(MonitorEvent::MonitorStarted {
            source: source_name,
            output: sink_name,
            interval_ms: self.options.interval.as_millis() as u64,
        }));

        while self.stop.is_running() {
            self.tick(&mut on_event);
            self.sleep_until_next_tick();
        }

        on_event(Notification::now(MonitorEvent::Shutdown));
        Ok(())
    }

    fn sleep_until_next_tick(&self) {
        let deadline = Instant::now() + self.options.interval;
        let slice = Duration::from_millis(POLL_SLICE_MS);
        while self.stop.is_running() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(slice.min(deadline - now));
        }
    }

    /// Run exactly one cycle
    pub fn tick<F>(&mut self, on_event: &mut F) -> TickOutcome
    where
        F: FnMut(Notification),
    {
        match self.state() {
            MonitorState::Idle => TickOutcome::NotReady,
            MonitorState::Ready => match self.try_initialize() {
                Ok(keys) => {
                    tracing::debug!(keys, "initial class written");
                    on_event(Notification::now(MonitorEvent::Generated {
                        output: self.sink_name(),
                        keys,
                    }));
                    TickOutcome::Initialized { keys }
                }
                Err(e) => report(on_event, e),
            },
            MonitorState::Monitoring => match self.try_poll() {
                Ok(PollResult::Unchanged) => TickOutcome::Unchanged,
                Ok(PollResult::Touched) => {
                    tracing::debug!("modified without key changes; output left alone");
                    TickOutcome::Touched
                }
                Ok(PollResult::Regenerated { diff, keys }) => {
                    tracing::info!(summary = %diff.summary(), "keys changed");
                    on_event(Notification::now(MonitorEvent::KeysChanged {
                        added: diff.added_keys(),
                        removed: diff.removed_keys(),
                        output: self.sink_name(),
                        keys,
                    }));
                    TickOutcome::Regenerated(diff)
                }
                Err(e) => report(on_event, e),
            },
        }
    }

    fn sink_name(&self) -> String {
        self.sink.as_ref().map(|s| s.describe()).unwrap_or_default()
    }

    fn try_initialize(&mut self) -> KeymirrorResult<usize> {
        let Self {
            extractor,
            generator,
            source,
            sink,
            baseline,
            last_modified,
            ..
        } = self;
        let source = source.as_ref().ok_or(KeymirrorError::NotReady { missing: "input file" })?;
        let sink = sink.as_mut().ok_or(KeymirrorError::NotReady { missing: "output file" })?;

        let modified = read_modified(source)?;
        let snapshot = read_snapshot(source, extractor)?;

        write_output(sink, &generator.generate(&snapshot))?;

        let keys = snapshot.len();
        *baseline = Some(snapshot);
        *last_modified = Some(modified);
        Ok(keys)
    }

    fn try_poll(&mut self) -> KeymirrorResult<PollResult> {
        let Self {
            extractor,
            generator,
            differ,
            source,
            sink,
            baseline,
            last_modified,
            ..
        } = self;
        let source = source.as_ref().ok_or(KeymirrorError::NotReady { missing: "input file" })?;
        let sink = sink.as_mut().ok_or(KeymirrorError::NotReady { missing: "output file" })?;

        let modified = read_modified(source)?;
        if *last_modified == Some(modified) {
            return Ok(PollResult::Unchanged);
        }

        let snapshot = read_snapshot(source, extractor)?;
        let diff = match baseline.as_ref() {
            Some(previous) => differ.diff(previous, &snapshot),
            None => differ.diff(&KeySnapshot::empty(), &snapshot),
        };

        if diff.is_empty() {
            *last_modified = Some(modified);
            return Ok(PollResult::Touched);
        }

        // Baseline and marker only move once the sink accepted the write,
        // so a failed write is retried against the same diff next tick.
        write_output(sink, &generator.generate(&snapshot))?;

        let keys = snapshot.len();
        *baseline = Some(snapshot);
        *last_modified = Some(modified);
        Ok(PollResult::Regenerated { diff, keys })
    }
}

fn read_modified<S: WatchedSource>(source: &S) -> KeymirrorResult<SystemTime> {
    source
        .modified_time()
        .map_err(|cause| KeymirrorError::TickFailure {
            source_name: source.describe(),
            cause,
        })
}

fn read_snapshot<S: WatchedSource, Q: DocumentQuery>(
    source: &S,
    extractor: &KeyExtractor<Q>,
) -> KeymirrorResult<KeySnapshot> {
    let name = source.describe();
    let content = source
        .read_content()
        .map_err(|cause| KeymirrorError::TickFailure {
            source_name: name.clone(),
            cause,
        })?;
    extractor.try_extract(&content, &name)
}

fn write_output<K: OutputSink>(sink: &mut K, content: &str) -> KeymirrorResult<()> {
    sink.write(content)
        .map_err(|cause| KeymirrorError::WriteFailure {
            sink: sink.describe(),
            cause,
        })
}

fn report<F: FnMut(Notification)>(on_event: &mut F, err: KeymirrorError) -> TickOutcome {
    tracing::warn!(error = %err, "poll cycle failed");
    let kind = err.kind();
    on_event(Notification::now(MonitorEvent::Error {
        kind: kind.to_string(),
        message: err.to_string(),
    }));
    TickOutcome::Failed { kind }
}
