//! Point-in-time view of one intake record.
//!
//! The surrounding application owns the persisted intake and rebuilds a
//! snapshot from it before every navigation call. The engine never mutates
//! a snapshot; visibility predicates only read the derived tri-state
//! booleans, never the storage representation.

use serde::{Deserialize, Serialize};

use crate::answer::TriState;

/// One topic answer per field. Every field defaults to `Unanswered`, so a
/// brand-new intake (or a partial JSON document) is a valid snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeSnapshot {
    // Primary filer
    pub was_student: TriState,
    pub on_visa: TriState,
    pub had_disability: TriState,
    pub was_blind: TriState,
    pub issued_identity_pin: TriState,

    // Marital status
    pub ever_married: TriState,
    pub married: TriState,
    pub lived_with_spouse: TriState,
    pub separated: TriState,
    pub divorced: TriState,
    pub widowed: TriState,
    pub filing_joint: TriState,

    // Alimony
    pub received_alimony: TriState,
    pub paid_alimony: TriState,

    // Spouse
    pub spouse_was_student: TriState,

    // Dependents
    pub had_dependents: TriState,
    pub paid_dependent_care: TriState,
    pub adopted_child: TriState,

    // Student expenses
    pub paid_student_loan_interest: TriState,

    // Income from working
    pub job_count: Option<u32>,
    pub worked_in_other_states: TriState,
    pub had_wages: TriState,
    pub had_self_employment_income: TriState,
    pub had_tips: TriState,

    // Income from benefits
    pub had_unemployment_income: TriState,
    pub had_disability_income: TriState,

    // Investment income/loss
    pub had_interest_income: TriState,
    pub had_asset_sale_income: TriState,
    pub reported_asset_sale_loss: TriState,

    // Retirement
    pub had_social_security_income: TriState,
    pub had_retirement_income: TriState,
    pub paid_retirement_contributions: TriState,

    // Other income
    pub had_other_income: TriState,
    pub had_rental_income: TriState,
    pub had_farm_income: TriState,
    pub had_gambling_income: TriState,
    pub had_local_tax_refund: TriState,

    // Health
    pub bought_health_insurance: TriState,
    pub had_hsa: TriState,

    // Itemizing
    pub paid_medical_expenses: TriState,
    pub paid_charitable_contributions: TriState,
    pub paid_school_supplies: TriState,
    pub paid_local_tax: TriState,

    // Home ownership
    pub sold_home: TriState,
    pub paid_mortgage_interest: TriState,
    pub received_homebuyer_credit: TriState,

    // Life events
    pub had_disaster_loss: TriState,
    pub had_debt_forgiven: TriState,
    pub received_irs_letter: TriState,
    pub had_tax_credit_disallowed: TriState,
    pub made_estimated_tax_payments: TriState,
    pub reported_self_employment_loss: TriState,
    pub bought_energy_efficient_items: TriState,

    // Payment preferences
    pub wants_direct_deposit: TriState,

    // Optional demographics
    pub demographic_questions_opt_in: TriState,
}

impl IntakeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the filer reported at least one job this year.
    pub fn has_jobs(&self) -> bool {
        self.job_count.map_or(false, |count| count > 0)
    }
}
