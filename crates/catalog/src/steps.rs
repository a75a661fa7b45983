//! Every step the intake product ships, registered once and shared by all
//! flows. Predicates read only the snapshot's derived tri-state booleans.

use intake_core::IntakeResult;
use intake_navigation::{always, Step, StepRegistry};

const TRIAGE: &str = "Triage";
const ELIGIBILITY: &str = "Eligibility";
const OVERVIEW: &str = "Overview";
const CONTACT: &str = "Contact Information";
const CONSENT: &str = "Consent";
const PERSONAL: &str = "Personal Information";
const MARITAL: &str = "Marital Status";
const FILING: &str = "Filing Status";
const ALIMONY: &str = "Alimony";
const SPOUSE: &str = "Spouse Information";
const DEPENDENTS: &str = "Dependents";
const STUDENT: &str = "Student Questions";
const INCOME: &str = "Income";
const HEALTH: &str = "Health Insurance";
const ITEMIZING: &str = "Itemizing";
const HOME: &str = "Home Ownership";
const MISC: &str = "Miscellaneous";
const ADDITIONAL: &str = "Additional Information";
const INTERVIEW: &str = "Interview Scheduling";
const PAYMENT: &str = "Payment Information";
const DEMOGRAPHICS: &str = "Demographic Questions";
const FINAL: &str = "Final Steps";

/// Builds the full production step registry.
pub fn registry() -> IntakeResult<StepRegistry> {
    StepRegistry::from_steps(vec![
        // Triage
        Step::question("welcome", TRIAGE, always),
        Step::question("file-with-help", TRIAGE, always),
        Step::question("backtaxes", TRIAGE, always),
        Step::question("environment-warning", TRIAGE, always),
        Step::question("start-with-current-year", TRIAGE, always),
        // Eligibility
        Step::question("eligibility", ELIGIBILITY, always),
        // Overview
        Step::question("overview", OVERVIEW, always),
        // Contact information
        Step::question("identity", PERSONAL, always),
        Step::question("personal-info", CONTACT, always),
        Step::question("at-capacity", CONTACT, always),
        Step::question("chat-with-us", CONTACT, always),
        Step::question("phone-number", CONTACT, always),
        Step::question("email-address", CONTACT, always),
        Step::question("returning-client", CONTACT, always),
        Step::question("notification-preference", CONTACT, always),
        Step::question("mailing-address", CONTACT, always),
        // Consent
        Step::question("consent", CONSENT, always),
        // Primary filer personal information
        Step::question("was-student", PERSONAL, always),
        Step::question("on-visa", PERSONAL, always).with_illustration("on-visa.svg"),
        Step::question("had-disability", PERSONAL, always),
        Step::question("was-blind", PERSONAL, always),
        Step::question("issued-identity-pin", PERSONAL, always),
        // Marital status
        Step::question("ever-married", MARITAL, always).with_illustration("marriage.svg"),
        Step::question("married", MARITAL, |s| s.ever_married.is_yes()),
        Step::question("lived-with-spouse", MARITAL, |s| s.married.is_yes()),
        Step::question("separated", MARITAL, |s| {
            s.married.is_yes() && s.lived_with_spouse.is_no()
        }),
        Step::question("separated-year", MARITAL, |s| s.separated.is_yes()),
        Step::question("divorced", MARITAL, |s| {
            s.ever_married.is_yes() && s.married.is_no()
        }),
        Step::question("divorced-year", MARITAL, |s| s.divorced.is_yes()),
        Step::question("widowed", MARITAL, |s| {
            s.ever_married.is_yes() && s.married.is_no()
        }),
        Step::question("widowed-year", MARITAL, |s| s.widowed.is_yes()),
        // Filing status
        Step::question("filing-joint", FILING, |s| s.married.is_yes()),
        // Alimony
        Step::question("received-alimony", ALIMONY, |s| s.ever_married.is_yes()),
        Step::question("paid-alimony", ALIMONY, |s| s.ever_married.is_yes()),
        // Spouse
        Step::question("spouse-email-address", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-consent", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-identity", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("welcome-spouse", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-was-student", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-on-visa", SPOUSE, |s| s.filing_joint.is_yes())
            .with_illustration("on-visa.svg"),
        Step::question("spouse-had-disability", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-was-blind", SPOUSE, |s| s.filing_joint.is_yes()),
        Step::question("spouse-issued-identity-pin", SPOUSE, |s| {
            s.filing_joint.is_yes()
        }),
        // Dependents
        Step::question("had-dependents", DEPENDENTS, always),
        Step::question("dependent-care", DEPENDENTS, |s| s.had_dependents.is_yes()),
        Step::question("adopted-child", DEPENDENTS, |s| s.had_dependents.is_yes()),
        // Student questions
        Step::question("student", STUDENT, |s| {
            s.was_student.is_yes() || s.spouse_was_student.is_yes()
        }),
        Step::question("student-loan-interest", STUDENT, always),
        // Income from working
        Step::question("job-count", INCOME, always),
        Step::question("other-states", INCOME, |s| s.has_jobs()),
        Step::question("wages", INCOME, |s| s.has_jobs()),
        Step::question("self-employment", INCOME, always),
        Step::question("tips", INCOME, |s| s.has_jobs()),
        // Income from benefits
        Step::question("unemployment-income", INCOME, always),
        Step::question("disability-income", INCOME, always),
        // Investment income/loss
        Step::question("interest-income", INCOME, always),
        Step::question("asset-sale-income", INCOME, always),
        Step::question("asset-sale-loss", INCOME, |s| {
            s.had_asset_sale_income.is_yes()
        }),
        // Retirement income/contributions
        Step::question("social-security-income", INCOME, always),
        Step::question("retirement-income", INCOME, always),
        Step::question("retirement-contributions", INCOME, always),
        // Other income
        Step::question("other-income", INCOME, always),
        Step::question("other-income-types", INCOME, |s| s.had_other_income.is_yes()),
        Step::question("rental-income", INCOME, always),
        Step::question("farm-income", INCOME, always),
        Step::question("gambling-income", INCOME, always),
        // Shown until the filer rules out a local tax payment.
        Step::question("local-tax-refund", INCOME, |s| {
            s.paid_local_tax.is_yes_or_unanswered()
        }),
        // Health insurance
        Step::question("health-insurance", HEALTH, always),
        Step::question("hsa", HEALTH, always),
        // Itemizing
        Step::question("medical-expenses", ITEMIZING, always),
        Step::question("charitable-contributions", ITEMIZING, always),
        Step::question("school-supplies", ITEMIZING, always),
        Step::question("local-tax", ITEMIZING, always),
        // Home ownership
        Step::question("sold-home", HOME, always),
        Step::question("mortgage-interest", HOME, always),
        Step::question("homebuyer-credit", HOME, always),
        // Miscellaneous
        Step::question("disaster-loss", MISC, always),
        Step::question("debt-forgiven", MISC, always),
        Step::question("irs-letter", MISC, always),
        Step::question("tax-credit-disallowed", MISC, always),
        Step::question("estimated-tax-payments", MISC, always),
        Step::question("self-employment-loss", MISC, |s| {
            s.had_self_employment_income.is_yes()
        }),
        Step::question("energy-efficient-purchases", MISC, always),
        // Additional information
        Step::question("additional-info", ADDITIONAL, always),
        // Documents
        Step::document("w2s", "W-2", |s| s.has_jobs() || s.had_wages.is_yes()),
        Step::document("form-1095as", "1095-A", |s| {
            s.bought_health_insurance.is_yes()
        }),
        Step::document("form-1098s", "1098", |s| s.paid_mortgage_interest.is_yes()),
        Step::document("form-1098es", "1098-E", |s| {
            s.paid_student_loan_interest.is_yes()
        }),
        Step::document("form-1098ts", "1098-T", |s| {
            s.was_student.is_yes() || s.spouse_was_student.is_yes()
        }),
        Step::document("form-1099as", "1099-A", |s| s.had_debt_forgiven.is_yes()),
        Step::document("form-1099bs", "1099-B", |s| s.had_asset_sale_income.is_yes()),
        Step::document("form-1099cs", "1099-C", |s| s.had_debt_forgiven.is_yes()),
        Step::document("form-1099divs", "1099-DIV", |s| {
            s.had_interest_income.is_yes()
        }),
        Step::document("form-1099ints", "1099-INT", |s| {
            s.had_interest_income.is_yes()
        }),
        Step::document("form-1099ks", "1099-K", |s| {
            s.had_self_employment_income.is_yes()
        }),
        Step::document("form-1099miscs", "1099-MISC", |s| {
            s.had_self_employment_income.is_yes()
        }),
        Step::document("form-1099rs", "1099-R", |s| s.had_retirement_income.is_yes()),
        Step::document("form-1099ss", "1099-S", |s| s.sold_home.is_yes()),
        Step::document("form-1099sas", "1099-SA", |s| s.had_hsa.is_yes()),
        Step::document("form-1099ssdis", "1099-SSDI", |s| {
            s.had_disability_income.is_yes()
        }),
        Step::document("form-1099gs", "1099-G", |s| {
            s.had_unemployment_income.is_yes() || s.had_local_tax_refund.is_yes()
        }),
        Step::document("form-5498sas", "5498-SA", |s| s.had_hsa.is_yes()),
        Step::document("ira-statements", "IRA Statement", |s| {
            s.paid_retirement_contributions.is_yes() || s.had_retirement_income.is_yes()
        }),
        Step::document("rrb-1099s", "RRB-1099", |s| s.had_retirement_income.is_yes()),
        Step::document("ssn-itins", "SSN or ITIN", always),
        Step::document("ssa-1099s", "SSA-1099", |s| {
            s.had_social_security_income.is_yes()
        }),
        Step::document("student-account-statements", "Student Account Statement", |s| {
            s.was_student.is_yes() || s.spouse_was_student.is_yes()
        }),
        Step::document("w2gs", "W-2G", |s| s.had_gambling_income.is_yes()),
        Step::document("prior-tax-returns", "Prior Year Tax Return", |s| {
            s.had_local_tax_refund.is_yes() || s.reported_asset_sale_loss.is_yes()
        }),
        Step::document("property-tax-statements", "Property Tax Statement", |s| {
            s.paid_local_tax.is_yes()
        }),
        Step::document("additional-documents", "Other", always),
        Step::question("documents-overview", "Documents", always),
        // Interview time preferences
        Step::question("interview-scheduling", INTERVIEW, always),
        // Payment info
        Step::question("refund-payment", PAYMENT, always),
        Step::question("savings-options", PAYMENT, |s| s.wants_direct_deposit.is_yes()),
        Step::question("balance-payment", PAYMENT, always),
        Step::question("bank-details", PAYMENT, |s| s.wants_direct_deposit.is_yes()),
        // Optional demographic questions
        Step::question("demographic-questions", DEMOGRAPHICS, always),
        Step::question("demographic-english-conversation", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-english-reading", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-disability", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-veteran", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-primary-race", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-spouse-race", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes() && s.filing_joint.is_yes()
        }),
        Step::question("demographic-primary-ethnicity", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes()
        }),
        Step::question("demographic-spouse-ethnicity", DEMOGRAPHICS, |s| {
            s.demographic_questions_opt_in.is_yes() && s.filing_joint.is_yes()
        }),
        // Final steps
        Step::question("final-info", FINAL, always),
        Step::question("successfully-submitted", FINAL, always),
        Step::question("feedback", FINAL, always),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::{IntakeSnapshot, TriState};

    #[test]
    fn test_registry_builds() {
        let registry = registry().unwrap();
        assert!(registry.len() > 100);
    }

    #[test]
    fn test_spouse_steps_require_joint_filing() {
        let registry = registry().unwrap();
        let step = registry.get("spouse-on-visa").unwrap();
        assert!(!step.is_visible(&IntakeSnapshot::new()));

        let joint = IntakeSnapshot {
            filing_joint: TriState::Yes,
            ..IntakeSnapshot::default()
        };
        assert!(step.is_visible(&joint));
    }

    #[test]
    fn test_prior_tax_returns_visible_on_either_topic() {
        let registry = registry().unwrap();
        let step = registry.get("prior-tax-returns").unwrap();
        assert_eq!(step.document_type(), Some("Prior Year Tax Return"));

        assert!(!step.is_visible(&IntakeSnapshot::new()));
        assert!(step.is_visible(&IntakeSnapshot {
            had_local_tax_refund: TriState::Yes,
            ..IntakeSnapshot::default()
        }));
        assert!(step.is_visible(&IntakeSnapshot {
            reported_asset_sale_loss: TriState::Yes,
            ..IntakeSnapshot::default()
        }));
    }

    #[test]
    fn test_local_tax_refund_shown_until_ruled_out() {
        let registry = registry().unwrap();
        let step = registry.get("local-tax-refund").unwrap();

        assert!(step.is_visible(&IntakeSnapshot::new()));
        assert!(!step.is_visible(&IntakeSnapshot {
            paid_local_tax: TriState::No,
            ..IntakeSnapshot::default()
        }));
    }
}
