//! Progressive bracket tax calculation.
//!
//! Both payroll taxes are evaluated with the same machinery: a table of
//! tiers ordered by upper bound, where the first tier whose bound is not
//! exceeded by the base applies. The 2025 tables are fixed constants.
//!
//! ## INSS (employee contribution)
//!
//! | Gross up to | Rate  | Deduction |
//! |-------------|-------|-----------|
//! | 1.518,00    | 7,5%  | -         |
//! | 2.793,88    | 9%    | 22,77     |
//! | 4.190,83    | 12%   | 106,59    |
//! | 8.157,41    | 14%   | 190,40    |
//! | above       | flat 951,62 (ceiling) |
//!
//! ## IRRF (income tax withholding)
//!
//! | Base up to  | Rate  | Deduction |
//! |-------------|-------|-----------|
//! | 2.428,80    | exempt | -        |
//! | 2.826,65    | 7,5%  | 182,16    |
//! | 3.751,05    | 15%   | 394,16    |
//! | 4.664,68    | 22,5% | 675,49    |
//! | above       | 27,5% | 908,73    |

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::format::{format_currency, format_rate};
use crate::models::{AuditStep, TaxAssessment};

/// Legal reference for the 2025 INSS table.
pub const INSS_CLAUSE: &str = "Portaria Interministerial MPS/MF nº 6/2025";

/// Legal reference for the IRRF table in force from May 2025.
pub const IRRF_CLAUSE: &str = "MP nº 1.294/2025";

/// What a tier charges on the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketCharge {
    /// No tax.
    Exempt,
    /// `base * rate - deduction`.
    Progressive {
        /// Marginal rate as a fraction (0.075 for 7.5%).
        rate: Decimal,
        /// Fixed amount subtracted after applying the rate.
        deduction: Decimal,
    },
    /// A fixed amount regardless of base.
    Ceiling {
        /// The capped tax amount.
        amount: Decimal,
    },
}

/// One tier of a bracket table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTier {
    /// Inclusive upper bound; `None` for the open-ended top tier.
    pub upper_bound: Option<Decimal>,
    /// The charge applied within this tier.
    pub charge: BracketCharge,
    /// Display label for the tier.
    pub label: String,
}

/// An ordered set of tiers defining a progressive tax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    rule_id: &'static str,
    rule_name: &'static str,
    clause_ref: &'static str,
    tiers: Vec<BracketTier>,
    clamp_negative: bool,
}

/// The tier chosen for a base and the tax it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketOutcome {
    /// Zero-based index of the tier that applied.
    pub tier: usize,
    /// The tax amount.
    pub amount: Decimal,
    /// The label of the tier that applied.
    pub label: String,
    /// True when a negative amount was raised to zero.
    pub clamped: bool,
}

impl BracketTable {
    /// Creates a table. Tiers must have strictly increasing bounds and only
    /// the last may be open-ended.
    pub fn new(
        rule_id: &'static str,
        rule_name: &'static str,
        clause_ref: &'static str,
        tiers: Vec<BracketTier>,
        clamp_negative: bool,
    ) -> Self {
        debug_assert!(!tiers.is_empty(), "bracket table needs at least one tier");
        debug_assert!(
            tiers.windows(2).all(|w| match (w[0].upper_bound, w[1].upper_bound) {
                (Some(lower), Some(upper)) => lower < upper,
                (Some(_), None) => true,
                (None, _) => false,
            }),
            "bracket bounds must be strictly increasing"
        );

        Self {
            rule_id,
            rule_name,
            clause_ref,
            tiers,
            clamp_negative,
        }
    }

    /// Returns the tiers in evaluation order.
    pub fn tiers(&self) -> &[BracketTier] {
        &self.tiers
    }

    /// Evaluates the table for a base.
    ///
    /// # Examples
    ///
    /// ```
    /// use folha_engine::calculation::contribution_table;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome = contribution_table().evaluate(Decimal::new(151800, 2));
    /// assert_eq!(outcome.amount, Decimal::new(11385, 2));
    /// assert_eq!(outcome.label, "Faixa 1: 7,5%");
    /// ```
    pub fn evaluate(&self, base: Decimal) -> BracketOutcome {
        let index = self
            .tiers
            .iter()
            .position(|tier| tier.upper_bound.is_none_or(|bound| base <= bound))
            .unwrap_or(self.tiers.len().saturating_sub(1));

        let Some(tier) = self.tiers.get(index) else {
            return BracketOutcome {
                tier: 0,
                amount: Decimal::ZERO,
                label: String::new(),
                clamped: false,
            };
        };

        let raw = match tier.charge {
            BracketCharge::Exempt => Decimal::ZERO,
            BracketCharge::Progressive { rate, deduction } => base * rate - deduction,
            BracketCharge::Ceiling { amount } => amount,
        };
        let clamped = self.clamp_negative && raw < Decimal::ZERO;

        BracketOutcome {
            tier: index,
            amount: if clamped { Decimal::ZERO } else { raw },
            label: tier.label.clone(),
            clamped,
        }
    }
}

fn contribution_tier(
    number: usize,
    bound: Option<Decimal>,
    rate: Decimal,
    deduction: Decimal,
) -> BracketTier {
    BracketTier {
        upper_bound: bound,
        charge: BracketCharge::Progressive { rate, deduction },
        label: format!("Faixa {}: {}%", number, format_rate(rate)),
    }
}

fn withholding_tier(bound: Option<Decimal>, rate: Decimal, deduction: Decimal) -> BracketTier {
    BracketTier {
        upper_bound: bound,
        charge: BracketCharge::Progressive { rate, deduction },
        label: format!(
            "{}% (Deduzir {})",
            format_rate(rate),
            format_currency(deduction)
        ),
    }
}

static CONTRIBUTION_TABLE: LazyLock<BracketTable> = LazyLock::new(|| {
    BracketTable::new(
        "inss_contribution",
        "INSS Contribution",
        INSS_CLAUSE,
        vec![
            contribution_tier(1, Some(Decimal::new(151800, 2)), Decimal::new(75, 3), Decimal::ZERO),
            contribution_tier(
                2,
                Some(Decimal::new(279388, 2)),
                Decimal::new(9, 2),
                Decimal::new(2277, 2),
            ),
            contribution_tier(
                3,
                Some(Decimal::new(419083, 2)),
                Decimal::new(12, 2),
                Decimal::new(10659, 2),
            ),
            contribution_tier(
                4,
                Some(Decimal::new(815741, 2)),
                Decimal::new(14, 2),
                Decimal::new(19040, 2),
            ),
            BracketTier {
                upper_bound: None,
                charge: BracketCharge::Ceiling {
                    amount: Decimal::new(95162, 2),
                },
                label: "Teto de Contribuição".to_string(),
            },
        ],
        false,
    )
});

static WITHHOLDING_TABLE: LazyLock<BracketTable> = LazyLock::new(|| {
    BracketTable::new(
        "irrf_withholding",
        "IRRF Withholding",
        IRRF_CLAUSE,
        vec![
            BracketTier {
                upper_bound: Some(Decimal::new(242880, 2)),
                charge: BracketCharge::Exempt,
                label: "Isento".to_string(),
            },
            withholding_tier(
                Some(Decimal::new(282665, 2)),
                Decimal::new(75, 3),
                Decimal::new(18216, 2),
            ),
            withholding_tier(
                Some(Decimal::new(375105, 2)),
                Decimal::new(15, 2),
                Decimal::new(39416, 2),
            ),
            withholding_tier(
                Some(Decimal::new(466468, 2)),
                Decimal::new(225, 3),
                Decimal::new(67549, 2),
            ),
            withholding_tier(None, Decimal::new(275, 3), Decimal::new(90873, 2)),
        ],
        true,
    )
});

/// The 2025 INSS contribution table.
pub fn contribution_table() -> &'static BracketTable {
    &CONTRIBUTION_TABLE
}

/// The 2025 IRRF withholding table.
pub fn withholding_table() -> &'static BracketTable {
    &WITHHOLDING_TABLE
}

/// The result of applying one bracket table, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxBracketResult {
    /// The tax assessed on the base.
    pub assessment: TaxAssessment,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies a bracket table to a base and records the decision.
pub fn apply_bracket_table(
    base: Decimal,
    table: &BracketTable,
    step_number: u32,
) -> TaxBracketResult {
    let outcome = table.evaluate(base);
    let charge = table
        .tiers
        .get(outcome.tier)
        .map_or(BracketCharge::Exempt, |tier| tier.charge);

    let reasoning = match charge {
        BracketCharge::Exempt => format!(
            "{} falls in the exempt bracket ({})",
            base.normalize(),
            outcome.label
        ),
        BracketCharge::Ceiling { amount } => format!(
            "{} is above every bracket; capped at {}",
            base.normalize(),
            amount.normalize()
        ),
        BracketCharge::Progressive { rate, deduction } if outcome.clamped => format!(
            "{} x {} - {} is negative; clamped to 0",
            base.normalize(),
            rate.normalize(),
            deduction.normalize()
        ),
        BracketCharge::Progressive { rate, deduction } => format!(
            "{} x {} - {} = {}",
            base.normalize(),
            rate.normalize(),
            deduction.normalize(),
            outcome.amount.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: table.rule_id.to_string(),
        rule_name: table.rule_name.to_string(),
        clause_ref: table.clause_ref.to_string(),
        input: serde_json::json!({
            "base": base.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier": outcome.tier + 1,
            "bracket": outcome.label,
            "amount": outcome.amount.normalize().to_string(),
            "clamped": outcome.clamped
        }),
        reasoning,
    };

    TaxBracketResult {
        assessment: TaxAssessment {
            base,
            amount: outcome.amount,
            bracket: outcome.label,
        },
        audit_step,
    }
}

/// INSS and IRRF assessed together on one base.
#[derive(Debug, Clone)]
pub struct PayrollTaxes {
    /// INSS on the base.
    pub contribution: TaxAssessment,
    /// IRRF on the base less the contribution.
    pub withholding: TaxAssessment,
    /// Audit steps for both taxes, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollTaxes {
    /// Contribution plus withholding.
    pub fn total(&self) -> Decimal {
        self.contribution.amount + self.withholding.amount
    }
}

/// Applies the contribution table to `base`, then the withholding table to
/// what remains. Uses two audit steps starting at `step_number`.
pub fn assess_payroll_taxes(base: Decimal, step_number: u32) -> PayrollTaxes {
    let contribution = apply_bracket_table(base, contribution_table(), step_number);
    let withholding_base = base - contribution.assessment.amount;
    let withholding = apply_bracket_table(withholding_base, withholding_table(), step_number + 1);

    PayrollTaxes {
        contribution: contribution.assessment,
        withholding: withholding.assessment,
        audit_steps: vec![contribution.audit_step, withholding.audit_step],
    }
}
