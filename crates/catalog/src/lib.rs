//! Declarative step catalog and the production flow definitions.
//!
//! Everything here is data: step identifiers, section headings, document
//! types, and visibility predicates over the intake snapshot. The
//! navigation engine supplies the semantics.

pub mod flows;
pub mod steps;

pub use flows::{catalog, intake_2019, intake_2020};
pub use steps::registry;
