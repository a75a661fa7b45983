//! The two production journeys. Order is the product definition; the
//! navigation engine only skips entries whose predicate is false.

use intake_core::IntakeResult;
use intake_navigation::{Flow, StepRegistry};

use crate::steps;

/// Current full-service journey.
pub fn intake_2020(registry: &StepRegistry) -> IntakeResult<Flow> {
    Flow::new(
        "intake-2020",
        registry,
        &[
            // Triage
            "welcome",
            "file-with-help",
            "backtaxes",
            "environment-warning",
            "start-with-current-year",
            // Eligibility checks
            "eligibility",
            // Overview
            "overview",
            // Contact information
            "personal-info",
            "at-capacity",
            "chat-with-us",
            "phone-number",
            "email-address",
            "returning-client",
            "notification-preference",
            // Consent
            "consent",
            // Primary filer personal information
            "was-student",
            "on-visa",
            "had-disability",
            "was-blind",
            "issued-identity-pin",
            // Marital status
            "ever-married",
            "married",
            "lived-with-spouse",
            "separated",
            "separated-year",
            "divorced",
            "divorced-year",
            "widowed",
            "widowed-year",
            // Filing status
            "filing-joint",
            // Alimony
            "received-alimony",
            "paid-alimony",
            // Spouse email
            "spouse-email-address",
            // Spouse personal information
            "spouse-consent",
            "spouse-was-student",
            "spouse-on-visa",
            "spouse-had-disability",
            "spouse-was-blind",
            "spouse-issued-identity-pin",
            // Dependents
            "had-dependents",
            "dependent-care",
            "adopted-child",
            // Student questions
            "student",
            "student-loan-interest",
            // Income from working
            "job-count",
            "other-states",
            "wages",
            "self-employment",
            "tips",
            // Income from benefits
            "unemployment-income",
            "disability-income",
            // Investment income/loss
            "interest-income",
            "asset-sale-income",
            "asset-sale-loss",
            // Retirement income/contributions
            "social-security-income",
            "retirement-income",
            "retirement-contributions",
            // Other income
            "other-income",
            "other-income-types",
            // Health insurance
            "health-insurance",
            "hsa",
            // Itemizing
            "medical-expenses",
            "charitable-contributions",
            "gambling-income",
            "school-supplies",
            "local-tax",
            "local-tax-refund",
            // Related to home ownership
            "sold-home",
            "mortgage-interest",
            "homebuyer-credit",
            // Miscellaneous
            "disaster-loss",
            "debt-forgiven",
            "irs-letter",
            "tax-credit-disallowed",
            "estimated-tax-payments",
            "self-employment-loss",
            "energy-efficient-purchases",
            // Additional information
            "additional-info",
            // Documents
            "documents-overview",
            // Interview time preferences
            "interview-scheduling",
            // Payment info
            "refund-payment",
            "savings-options",
            "balance-payment",
            "bank-details",
            "mailing-address",
            // Optional demographic questions
            "demographic-questions",
            "demographic-english-conversation",
            "demographic-english-reading",
            "demographic-disability",
            "demographic-veteran",
            "demographic-primary-race",
            "demographic-spouse-race",
            "demographic-primary-ethnicity",
            "demographic-spouse-ethnicity",
            // Final steps
            "final-info",
            "successfully-submitted",
            "feedback",
        ],
    )
}

/// Legacy journey, kept for intakes opened against the previous product.
pub fn intake_2019(registry: &StepRegistry) -> IntakeResult<Flow> {
    Flow::new(
        "intake-2019",
        registry,
        &[
            // Personal information
            "identity",
            "consent",
            "welcome",
            "mailing-address",
            "notification-preference",
            // Marital status
            "ever-married",
            "married",
            "lived-with-spouse",
            "separated",
            "separated-year",
            "divorced",
            "divorced-year",
            "widowed",
            "widowed-year",
            "filing-joint",
            // Spouse authentication
            "spouse-identity",
            "welcome-spouse",
            // Dependents
            "had-dependents",
            // Income
            "job-count",
            "wages",
            "tips",
            "self-employment",
            "self-employment-loss",
            "retirement-income",
            "social-security-income",
            "unemployment-income",
            "disability-income",
            "interest-income",
            "asset-sale-income",
            "asset-sale-loss",
            "received-alimony",
            "rental-income",
            "farm-income",
            "gambling-income",
            "local-tax-refund",
            "other-income",
            "other-income-types",
            // Expenses
            "mortgage-interest",
            "local-tax",
            "medical-expenses",
            "charitable-contributions",
            "student-loan-interest",
            "dependent-care",
            "retirement-contributions",
            "school-supplies",
            "paid-alimony",
            "student",
            "sold-home",
            "hsa",
            "health-insurance",
            // Life events
            "homebuyer-credit",
            "debt-forgiven",
            "disaster-loss",
            "adopted-child",
            "tax-credit-disallowed",
            "irs-letter",
            "estimated-tax-payments",
            // Additional questions
            "additional-info",
            // Documents
            "w2s",
            "form-1095as",
            "form-1098s",
            "form-1098es",
            "form-1098ts",
            "form-1099as",
            "form-1099bs",
            "form-1099cs",
            "form-1099divs",
            "form-1099ints",
            "form-1099ks",
            "form-1099miscs",
            "form-1099rs",
            "form-1099ss",
            "form-1099sas",
            "form-1099ssdis",
            "form-1099gs",
            "form-5498sas",
            "ira-statements",
            "rrb-1099s",
            "ssn-itins",
            "ssa-1099s",
            "student-account-statements",
            "w2gs",
            "prior-tax-returns",
            // Not part of the 2019 shipped ordering; these statements were
            // collected under additional-documents until the type got its
            // own step.
            "property-tax-statements",
            "additional-documents",
            "documents-overview",
            // Interview time preferences
            "interview-scheduling",
            // TODO: drop the trailing duplicate once the legacy flow retires
            "welcome",
        ],
    )
}

/// Builds the registry and every production flow against it.
pub fn catalog() -> IntakeResult<Vec<Flow>> {
    let registry = steps::registry()?;
    Ok(vec![intake_2020(&registry)?, intake_2019(&registry)?])
}
