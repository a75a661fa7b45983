//! Questionnaire navigation — ordered step flows with per-step visibility
//! predicates evaluated against an intake snapshot.

pub mod flow;
pub mod navigator;
pub mod step;

pub use flow::Flow;
pub use navigator::Navigator;
pub use step::{always, Step, StepDescriptor, StepRegistry, Visibility};
