//! Flow definitions — ordered, validated, immutable step sequences.

use intake_core::{IntakeError, IntakeResult};

use crate::step::{Step, StepRegistry};

/// One complete questionnaire journey. Resolved against the registry and
/// frozen at construction; the same step id may appear at several
/// positions, which the navigator resolves by position.
#[derive(Debug, Clone)]
pub struct Flow {
    name: &'static str,
    steps: Vec<Step>,
}

impl Flow {
    /// Resolves the ordered id list against the registry. Fails on an empty
    /// list or an id the registry does not know; duplicates are allowed.
    pub fn new(
        name: &'static str,
        registry: &StepRegistry,
        step_ids: &[&'static str],
    ) -> IntakeResult<Self> {
        if step_ids.is_empty() {
            return Err(IntakeError::EmptyFlow(name.to_string()));
        }

        let mut steps = Vec::with_capacity(step_ids.len());
        for id in step_ids {
            let step = registry.get(id).ok_or_else(|| IntakeError::UnknownStep {
                flow: name.to_string(),
                step: (*id).to_string(),
            })?;
            steps.push(*step);
        }

        Ok(Self { name, steps })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The entry point of the journey. Construction guarantees at least
    /// one step.
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// First position holding the given step id, mirroring how the
    /// controller layer reports its current step back to the engine.
    pub fn position_of(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id() == step_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::always;

    fn registry() -> StepRegistry {
        StepRegistry::from_steps([
            Step::question("welcome", "Overview", always),
            Step::question("married", "Marital Status", always),
            Step::question("wages", "Income", always),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_is_index_zero() {
        let flow = Flow::new("test", &registry(), &["married", "welcome"]).unwrap();
        assert_eq!(flow.first().id(), "married");
        assert_eq!(flow.len(), 2);
    }

    #[test]
    fn test_empty_flow_rejected_at_construction() {
        let result = Flow::new("empty", &registry(), &[]);
        assert!(matches!(result, Err(IntakeError::EmptyFlow(name)) if name == "empty"));
    }

    #[test]
    fn test_unknown_step_rejected_at_construction() {
        let result = Flow::new("bad", &registry(), &["welcome", "no-such-step"]);
        assert!(matches!(
            result,
            Err(IntakeError::UnknownStep { flow, step }) if flow == "bad" && step == "no-such-step"
        ));
    }

    #[test]
    fn test_duplicate_positions_are_allowed() {
        let flow =
            Flow::new("dup", &registry(), &["welcome", "married", "welcome"]).unwrap();
        assert_eq!(flow.len(), 3);
        // position_of resolves the first occurrence.
        assert_eq!(flow.position_of("welcome"), Some(0));
    }

    #[test]
    fn test_position_of_missing_step() {
        let flow = Flow::new("test", &registry(), &["welcome", "wages"]).unwrap();
        assert_eq!(flow.position_of("married"), None);
    }
}
