use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::TaxRegime;

/// One-line planning advice shown beneath an ITR computation.
pub fn planning_tip(
    regime: TaxRegime,
    deductions: Decimal,
    income: Decimal,
) -> &'static str {
    match regime {
        TaxRegime::New if income <= dec!(700000) => {
            "You're eligible for full tax rebate under new regime. Consider maximizing your income within ₹7 lakhs limit."
        }
        TaxRegime::New => {
            "Compare with old regime calculations. You might benefit from old regime if you have significant deductions."
        }
        TaxRegime::Old if deductions < dec!(150000) => {
            "You can save more tax by maximizing Section 80C deductions up to ₹1.5 lakhs."
        }
        TaxRegime::Old => {
            "Great! You're utilizing maximum 80C deductions. Consider other sections like 80D for additional savings."
        }
    }
}
