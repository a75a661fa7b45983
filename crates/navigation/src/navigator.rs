//! The navigator — pure next/previous resolution over a flow and a
//! snapshot.

use tracing::debug;

use intake_core::IntakeSnapshot;

use crate::flow::Flow;
use crate::step::Step;

/// Stateless navigation service. Every call re-evaluates predicates
/// against the snapshot it is handed; nothing is cached between calls, so
/// one instance may serve any number of concurrent sessions.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    log_transitions: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            log_transitions: true,
        }
    }

    /// Toggle the debug log line emitted per next/previous decision.
    /// Observational only; never affects which step is resolved.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }

    /// The entry step of the flow, shown unconditionally.
    pub fn first<'a>(&self, flow: &'a Flow) -> &'a Step {
        flow.first()
    }

    /// First visible step strictly after the current one. `None` when the
    /// current step is not part of this flow (the caller may have switched
    /// flows mid-session) or when no later step is visible (flow complete).
    pub fn next<'a>(
        &self,
        flow: &'a Flow,
        current_step: &str,
        state: &IntakeSnapshot,
    ) -> Option<&'a Step> {
        let index = flow.position_of(current_step)?;
        let found = flow.steps()[index + 1..]
            .iter()
            .find(|step| step.is_visible(state));
        if self.log_transitions {
            debug!(
                flow = flow.name(),
                from = current_step,
                to = found.map(Step::id),
                "Resolved next step"
            );
        }
        found
    }

    /// First visible step strictly before the current one, scanning in
    /// reverse. `None` when the current step is unknown to this flow or is
    /// the first reachable one.
    pub fn previous<'a>(
        &self,
        flow: &'a Flow,
        current_step: &str,
        state: &IntakeSnapshot,
    ) -> Option<&'a Step> {
        let index = flow.position_of(current_step)?;
        let found = flow.steps()[..index]
            .iter()
            .rev()
            .find(|step| step.is_visible(state));
        if self.log_transitions {
            debug!(
                flow = flow.name(),
                from = current_step,
                to = found.map(Step::id),
                "Resolved previous step"
            );
        }
        found
    }

    /// Every step a user would see under a fixed snapshot: the entry step
    /// followed by each later visible step, in flow order. Advances by
    /// position (not id), so a duplicated step id cannot make the walk
    /// revisit earlier positions; the result has at most `flow.len()`
    /// entries.
    pub fn walk<'a>(&self, flow: &'a Flow, state: &IntakeSnapshot) -> Vec<&'a Step> {
        let mut path = vec![flow.first()];
        path.extend(
            flow.steps()[1..]
                .iter()
                .filter(|step| step.is_visible(state)),
        );
        path
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{always, StepRegistry};
    use intake_core::TriState;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Captures formatted log output so tests can assert on it.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn married_yes(state: &IntakeSnapshot) -> bool {
        state.married.is_yes()
    }

    fn registry() -> StepRegistry {
        StepRegistry::from_steps([
            Step::question("a", "Test", always),
            Step::question("b", "Test", married_yes),
            Step::question("c", "Test", always),
        ])
        .unwrap()
    }

    fn married(answer: TriState) -> IntakeSnapshot {
        IntakeSnapshot {
            married: answer,
            ..IntakeSnapshot::default()
        }
    }

    #[test]
    fn test_skips_invisible_step() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let next = Navigator::new().next(&flow, "a", &married(TriState::Unanswered));
        assert_eq!(next.unwrap().id(), "c");
    }

    #[test]
    fn test_returns_visible_step() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let next = Navigator::new().next(&flow, "a", &married(TriState::Yes));
        assert_eq!(next.unwrap().id(), "b");
    }

    #[test]
    fn test_unknown_current_step_returns_none() {
        let flow = Flow::new("test", &registry(), &["a", "b"]).unwrap();
        let navigator = Navigator::new();
        assert!(navigator.next(&flow, "c", &married(TriState::Yes)).is_none());
        assert!(navigator
            .previous(&flow, "c", &married(TriState::Yes))
            .is_none());
    }

    #[test]
    fn test_last_step_has_no_next() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let navigator = Navigator::new();
        assert!(navigator
            .next(&flow, "c", &married(TriState::Yes))
            .is_none());
        assert!(navigator
            .next(&flow, "c", &married(TriState::No))
            .is_none());
    }

    #[test]
    fn test_previous_is_symmetric() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let navigator = Navigator::new();

        let previous = navigator.previous(&flow, "c", &married(TriState::Unanswered));
        assert_eq!(previous.unwrap().id(), "a");

        let previous = navigator.previous(&flow, "c", &married(TriState::Yes));
        assert_eq!(previous.unwrap().id(), "b");

        assert!(navigator
            .previous(&flow, "a", &married(TriState::Yes))
            .is_none());
    }

    #[test]
    fn test_next_is_idempotent() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let navigator = Navigator::new();
        let state = married(TriState::Yes);
        let once = navigator.next(&flow, "a", &state).map(Step::id);
        let twice = navigator.next(&flow, "a", &state).map(Step::id);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_next_advances_strictly_forward() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let navigator = Navigator::new();
        let state = married(TriState::Yes);
        for current in ["a", "b", "c"] {
            let from = flow.position_of(current).unwrap();
            if let Some(next) = navigator.next(&flow, current, &state) {
                assert!(flow.position_of(next.id()).unwrap() > from);
            }
        }
    }

    #[test]
    fn test_duplicate_id_resolved_by_position() {
        // "b" appears twice; from the first occurrence the scan continues
        // past invisible steps and can land on the later occurrence once
        // the answer changes.
        let flow = Flow::new("dup", &registry(), &["a", "b", "c", "b"]).unwrap();
        let navigator = Navigator::new();

        let next = navigator.next(&flow, "b", &married(TriState::Unanswered));
        assert_eq!(next.unwrap().id(), "c");

        let next = navigator.next(&flow, "c", &married(TriState::Yes));
        assert_eq!(next.unwrap().id(), "b");
    }

    #[test]
    fn test_walk_terminates_and_respects_visibility() {
        let flow = Flow::new("test", &registry(), &["a", "b", "c"]).unwrap();
        let navigator = Navigator::new();

        let path = navigator.walk(&flow, &married(TriState::Unanswered));
        let ids: Vec<_> = path.iter().map(|step| step.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let path = navigator.walk(&flow, &married(TriState::Yes));
        assert_eq!(path.len(), 3);
        assert!(path.len() <= flow.len());
    }

    fn capture_transition_logs(navigator: Navigator) -> String {
        let registry = registry();
        let flow = Flow::new("test", &registry, &["a", "b", "c"]).unwrap();
        let state = married(TriState::Yes);

        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(buffer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            navigator.next(&flow, "a", &state);
            navigator.previous(&flow, "c", &state);
        });
        buffer.contents()
    }

    #[test]
    fn test_transitions_are_logged_by_default() {
        let output = capture_transition_logs(Navigator::new());
        assert!(output.contains("Resolved next step"));
        assert!(output.contains("Resolved previous step"));
    }

    #[test]
    fn test_transition_logging_can_be_disabled() {
        let output = capture_transition_logs(Navigator::new().with_logging(false));
        assert!(!output.contains("Resolved next step"));
        assert!(!output.contains("Resolved previous step"));
    }

    #[test]
    fn test_logging_toggle_does_not_affect_resolution() {
        let registry = registry();
        let flow = Flow::new("test", &registry, &["a", "b", "c"]).unwrap();
        let state = married(TriState::Unanswered);

        let logged = Navigator::new().next(&flow, "a", &state).map(Step::id);
        let quiet = Navigator::new()
            .with_logging(false)
            .next(&flow, "a", &state)
            .map(Step::id);
        assert_eq!(logged, quiet);
    }

    #[test]
    fn test_walk_with_duplicates_visits_each_position_once() {
        let flow = Flow::new("dup", &registry(), &["a", "c", "a"]).unwrap();
        let path = Navigator::new().walk(&flow, &IntakeSnapshot::new());
        let ids: Vec<_> = path.iter().map(|step| step.id()).collect();
        assert_eq!(ids, vec!["a", "c", "a"]);
    }
}
