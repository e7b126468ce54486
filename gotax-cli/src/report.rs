//! Plain-text rendering of calculator results.

use std::fmt::Display;

use gotax_core::{
    AgeCategory, ContactEmail, GratuityResult, ItrFormRecommendation, LeaveEncashmentResult,
    RegimeComparison, TaxBreakdown, TdsResult,
};

use crate::utils::{format_inr, format_percent};

/// Accumulates report lines; `row` pads each label to a shared column.
struct Report {
    out: String,
    width: usize,
}

impl Report {
    fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
        }
    }

    fn align(
        &mut self,
        width: usize,
    ) -> &mut Self {
        self.width = width;
        self
    }

    fn line(
        &mut self,
        text: impl Display,
    ) -> &mut Self {
        self.out.push_str(&text.to_string());
        self.out.push('\n');
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    fn row(
        &mut self,
        label: &str,
        value: impl Display,
    ) -> &mut Self {
        let label = format!("{label}:");
        let text = format!("{label:<width$}{value}", width = self.width);
        self.line(text)
    }

    fn finish(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

fn age_label(age: AgeCategory) -> &'static str {
    match age {
        AgeCategory::Below60 => "Below 60 years",
        AgeCategory::From60To80 => "60 to 80 years",
        AgeCategory::Above80 => "Above 80 years",
    }
}

/// Detailed ITR breakdown. The rebate line is shown only when one applies.
pub fn render_breakdown(b: &TaxBreakdown) -> String {
    let mut report = Report::new(26);
    report
        .line(format!("Detailed Tax Calculation - {}", b.assessment_year))
        .blank()
        .row("Gross Total Income", format_inr(b.total_income))
        .row("Standard Deduction", format_inr(b.standard_deduction))
        .row("Total Deductions", format_inr(b.total_deductions))
        .row("Taxable Income", format_inr(b.taxable_income))
        .blank()
        .row("Income Tax", format_inr(b.income_tax))
        .row("Surcharge", format_inr(b.surcharge))
        .row("Health & Education Cess", format_inr(b.cess));
    if !b.rebate.is_zero() {
        report.row("Rebate u/s 87A", format_inr(b.rebate));
    }
    report
        .row("Total Tax Liability", format_inr(b.total_tax))
        .blank()
        .align(20)
        .row("Tax Regime", b.regime.display_name())
        .row(
            "Taxpayer Category",
            b.taxpayer_category.as_str().to_uppercase(),
        )
        .row("Age Category", age_label(b.age_category))
        .row("Effective Tax Rate", format_percent(b.effective_tax_rate()))
        .blank()
        .line(format!("Tax Planning Tip: {}", b.planning_tip()))
        .finish()
}

pub fn render_tds(r: &TdsResult) -> String {
    let mut report = Report::new(20);
    report
        .line("TDS Calculation Result")
        .blank()
        .row("Section", &r.section)
        .row("TDS Rate", r.rate)
        .row("Threshold Limit", format_inr(r.threshold))
        .row("Annual Income", format_inr(r.annual_income));
    if r.below_threshold {
        return report
            .line("No TDS applicable: annual income does not exceed the threshold.")
            .finish();
    }
    report
        .row("Applicable Income", format_inr(r.applicable_income))
        .row("Annual TDS", format_inr(r.tds_amount))
        .row("Monthly TDS", format_inr(r.monthly_amount))
        .finish()
}

pub fn render_gratuity(r: &GratuityResult) -> String {
    Report::new(23)
        .line("Gratuity Calculation Result")
        .blank()
        .row("Employee Type", r.employee_type.display_name())
        .row("Years Counted", r.years_counted.normalize())
        .row("Gratuity Amount", format_inr(r.gratuity))
        .row("Exemption Limit", format_inr(r.exemption_limit))
        .row("10 Months Salary Cap", format_inr(r.ten_months_salary))
        .row("Exempt Amount", format_inr(r.exempt_amount))
        .row("Taxable Amount", format_inr(r.taxable_amount))
        .finish()
}

pub fn render_leave_encashment(r: &LeaveEncashmentResult) -> String {
    let mut report = Report::new(23);
    report
        .line("Leave Encashment Calculation Result")
        .blank()
        .row("Employee Type", r.employee_type.display_name())
        .row("Daily Salary", format_inr(r.daily_salary))
        .row("Total Encashment", format_inr(r.total_encashment));
    match r.exemption_limit {
        Some(limit) => report
            .row("30 Days per Year", format_inr(r.thirty_days_per_year))
            .row("10 Months Salary", format_inr(r.ten_months_salary))
            .row("Exemption Limit", format_inr(limit)),
        None => report.row("Exemption Limit", "Fully exempt"),
    };
    report
        .row("Exempt Amount", format_inr(r.exempt_amount))
        .row("Taxable Amount", format_inr(r.taxable_amount))
        .finish()
}

pub fn render_comparison(r: &RegimeComparison) -> String {
    Report::new(17)
        .line("Tax Regime Comparison")
        .blank()
        .row("New Regime Tax", format_inr(r.new_regime_tax))
        .row("Old Regime Tax", format_inr(r.old_regime_tax))
        .blank()
        .row("Recommended", r.recommended_regime.display_name())
        .row("You Save", format_inr(r.savings))
        .finish()
}

pub fn render_itr_form(r: &ItrFormRecommendation) -> String {
    Report::new(15)
        .line(format!("Recommended Form: {}", r.form))
        .blank()
        .row("Description", r.description)
        .row("Applicability", r.applicability)
        .finish()
}

/// The relay e-mail as it would be handed to the mail transport.
pub fn render_contact_email(email: &ContactEmail) -> String {
    let mut out = Report::new(0)
        .line(format!("From: {}", email.from))
        .line(format!("To: {}", email.to))
        .line(format!("Reply-To: {}", email.reply_to))
        .line(format!("Subject: {}", email.subject))
        .blank()
        .finish();
    out.push_str(&email.body);
    out
}

#[cfg(test)]
mod tests {
    use gotax_core::{
        EmployeeType, IncomeType, PaymentFrequency, TaxInput, TaxRegime, TdsCategory,
        compare_regimes, compute_gratuity, compute_itr, compute_leave_encashment, compute_tds,
        recommend_itr_form,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn breakdown_lists_every_step() {
        let breakdown =
            compute_itr(&TaxInput::individual(dec!(1000000), TaxRegime::New)).unwrap();

        let text = render_breakdown(&breakdown);

        assert!(text.starts_with("Detailed Tax Calculation - AY 2025-26\n"));
        assert!(text.contains("Taxable Income:           ₹9,25,000\n"));
        assert!(text.contains("Health & Education Cess:  ₹1,700\n"));
        assert!(text.contains("Total Tax Liability:      ₹44,200\n"));
        assert!(text.contains("Taxpayer Category:  INDIVIDUAL\n"));
        assert!(text.contains("Age Category:       Below 60 years\n"));
        assert!(text.contains("Effective Tax Rate: 4.42%\n"));
        assert!(!text.contains("Rebate u/s 87A"));
    }

    #[test]
    fn breakdown_shows_rebate_when_applied() {
        let breakdown = compute_itr(&TaxInput::individual(dec!(775000), TaxRegime::New)).unwrap();

        let text = render_breakdown(&breakdown);

        assert!(text.contains("Rebate u/s 87A:           ₹20,000\n"));
        assert!(text.contains("Total Tax Liability:      ₹800\n"));
    }

    #[test]
    fn tds_below_threshold_omits_amounts() {
        let result =
            compute_tds(dec!(30000), PaymentFrequency::Annual, TdsCategory::Interest).unwrap();

        let text = render_tds(&result);

        assert!(text.contains("Section:            Section 194A\n"));
        assert!(text.contains("TDS Rate:           10%\n"));
        assert!(text.contains("No TDS applicable"));
        assert!(!text.contains("Annual TDS"));
    }

    #[test]
    fn tds_rent_shows_monthly_amount() {
        let result = compute_tds(dec!(25000), PaymentFrequency::Monthly, TdsCategory::Rent).unwrap();

        let text = render_tds(&result);

        assert!(text.contains("Annual TDS:         ₹6,000\n"));
        assert!(text.contains("Monthly TDS:        ₹500\n"));
    }

    #[test]
    fn gratuity_report() {
        let result = compute_gratuity(dec!(50000), dec!(6), EmployeeType::Private).unwrap();

        let text = render_gratuity(&result);

        assert!(text.contains("Employee Type:         Private Sector Employee\n"));
        assert!(text.contains("Gratuity Amount:       ₹1,73,076.92\n"));
        assert!(text.contains("Taxable Amount:        ₹0\n"));
    }

    #[test]
    fn government_leave_encashment_is_fully_exempt() {
        let result =
            compute_leave_encashment(dec!(90000), dec!(300), dec!(30), EmployeeType::Government)
                .unwrap();

        let text = render_leave_encashment(&result);

        assert!(text.contains("Exemption Limit:       Fully exempt\n"));
        assert!(!text.contains("30 Days per Year"));
    }

    #[test]
    fn comparison_report() {
        let result = compare_regimes(dec!(1200000), dec!(150000)).unwrap();

        let text = render_comparison(&result);

        assert_eq!(
            text,
            "Tax Regime Comparison\n\
             \n\
             New Regime Tax:  ₹83,200\n\
             Old Regime Tax:  ₹1,17,000\n\
             \n\
             Recommended:     New Tax Regime (Section 115BAC)\n\
             You Save:        ₹33,800\n"
        );
    }

    #[test]
    fn itr_form_report() {
        let text = render_itr_form(&recommend_itr_form(IncomeType::Company));

        assert!(text.starts_with("Recommended Form: ITR-6\n"));
    }
}
