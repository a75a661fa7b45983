//! Step definitions and the validated registry they live in.

use std::collections::HashMap;

use serde::Serialize;

use intake_core::{IntakeError, IntakeResult, IntakeSnapshot};

/// Visibility predicate over one snapshot. Must be total: an unanswered
/// topic takes the `Unanswered` branch, it never errors.
pub type Visibility = fn(&IntakeSnapshot) -> bool;

/// Predicate for steps every intake passes through.
pub fn always(_: &IntakeSnapshot) -> bool {
    true
}

/// One question or document-upload unit of the questionnaire. Identity and
/// metadata are static; the engine treats metadata as opaque and only ever
/// calls the visibility predicate.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    id: &'static str,
    section: &'static str,
    visible: Visibility,
    illustration: Option<&'static str>,
    document_type: Option<&'static str>,
}

impl Step {
    /// A question step under the given section heading.
    pub fn question(id: &'static str, section: &'static str, visible: Visibility) -> Self {
        Self {
            id,
            section,
            visible,
            illustration: None,
            document_type: None,
        }
    }

    /// A document-upload step requesting the given document type.
    pub fn document(id: &'static str, document_type: &'static str, visible: Visibility) -> Self {
        Self {
            id,
            section: "Documents",
            visible,
            illustration: None,
            document_type: Some(document_type),
        }
    }

    pub fn with_illustration(mut self, asset: &'static str) -> Self {
        self.illustration = Some(asset);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn section(&self) -> &'static str {
        self.section
    }

    pub fn illustration(&self) -> Option<&'static str> {
        self.illustration
    }

    pub fn document_type(&self) -> Option<&'static str> {
        self.document_type
    }

    /// Evaluates the visibility predicate against the given snapshot.
    /// Re-evaluated on every navigation call; results are never cached.
    pub fn is_visible(&self, state: &IntakeSnapshot) -> bool {
        (self.visible)(state)
    }

    /// Serializable view of the step for the rendering/controller layer.
    pub fn descriptor(&self) -> StepDescriptor {
        StepDescriptor {
            id: self.id,
            section: self.section,
            illustration: self.illustration,
            document_type: self.document_type,
        }
    }
}

/// Steps are interchangeable by identifier; two references to the same
/// catalog entry compare equal.
impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Step {}

/// Display metadata passed through to the rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub section: &'static str,
    pub illustration: Option<&'static str>,
    pub document_type: Option<&'static str>,
}

/// Maps step identifiers to their definitions. Built once at startup;
/// flows resolve their entries against it at construction time.
#[derive(Debug, Clone, Default)]
pub struct StepRegistry {
    steps: HashMap<&'static str, Step>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of definitions, rejecting duplicates.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> IntakeResult<Self> {
        let mut registry = Self::new();
        for step in steps {
            registry.register(step)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, step: Step) -> IntakeResult<()> {
        if self.steps.contains_key(step.id) {
            return Err(IntakeError::DuplicateStep(step.id.to_string()));
        }
        self.steps.insert(step.id, step);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Step> {
        self.steps.get(id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
