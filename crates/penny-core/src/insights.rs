//! Insight generator
//!
//! A fixed table of threshold rules that turn a summary, budget results and a
//! spending trend into short human-readable messages. Rules run in
//! registration order and each contributes at most one message.

use crate::models::{BudgetResult, BudgetStatus, FinancialSummary, SpendingTrend, TrendDirection};

/// Savings rate below this is flagged as low
pub const LOW_SAVINGS_RATE: f64 = 10.0;
/// Savings rate above this is praised
pub const HIGH_SAVINGS_RATE: f64 = 20.0;
/// Period-over-period increase that triggers a warning
pub const SPENDING_INCREASE_ALERT: f64 = 15.0;
/// Period-over-period decrease that earns a commendation
pub const SPENDING_DECREASE_PRAISE: f64 = -10.0;
/// Share of spending in one category that triggers a concentration note
pub const CATEGORY_CONCENTRATION: f64 = 30.0;

/// Inputs shared by every rule
pub struct InsightContext<'a> {
    pub summary: &'a FinancialSummary,
    pub budgets: &'a [BudgetResult],
    pub trend: &'a SpendingTrend,
}

/// A single threshold rule
pub trait InsightRule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Message for this rule, if its condition holds
    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<String>;
}

/// Low or excellent savings rate. The 10-20% band says nothing.
pub struct SavingsRule;

impl InsightRule for SavingsRule {
    fn name(&self) -> &'static str {
        "savings"
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<String> {
        let rate = ctx.summary.savings_rate;
        if rate < LOW_SAVINGS_RATE {
            Some(format!(
                "Your savings rate is {:.1}%. Try to save at least {}% of your income.",
                rate, LOW_SAVINGS_RATE
            ))
        } else if rate > HIGH_SAVINGS_RATE {
            Some(format!(
                "Excellent savings! You are saving {:.1}% of your income.",
                rate
            ))
        } else {
            None
        }
    }
}

/// Every budget that has been exceeded, in one message
pub struct OverBudgetRule;

impl InsightRule for OverBudgetRule {
    fn name(&self) -> &'static str {
        "over_budget"
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<String> {
        let over: Vec<&str> = ctx
            .budgets
            .iter()
            .filter(|b| b.status == BudgetStatus::Over)
            .map(|b| b.category.as_str())
            .collect();

        if over.is_empty() {
            return None;
        }

        let noun = if over.len() == 1 {
            "category"
        } else {
            "categories"
        };
        Some(format!(
            "You are over budget in {} {}: {}.",
            over.len(),
            noun,
            over.join(", ")
        ))
    }
}

/// Sharp increases or decreases in spending
pub struct TrendRule;

impl InsightRule for TrendRule {
    fn name(&self) -> &'static str {
        "trend"
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<String> {
        let trend = ctx.trend;
        match trend.trending {
            TrendDirection::Up if trend.change_percent > SPENDING_INCREASE_ALERT => Some(format!(
                "Your spending is up {:.1}% compared to the previous period.",
                trend.change_percent
            )),
            TrendDirection::Down if trend.change_percent < SPENDING_DECREASE_PRAISE => {
                Some(format!(
                    "Nice work! Your spending is down {:.1}% compared to the previous period.",
                    trend.change_percent.abs()
                ))
            }
            _ => None,
        }
    }
}

/// One category taking a large share of spending
pub struct ConcentrationRule;

impl InsightRule for ConcentrationRule {
    fn name(&self) -> &'static str {
        "concentration"
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<String> {
        let top = ctx.summary.top_categories.first()?;
        if top.percentage > CATEGORY_CONCENTRATION {
            Some(format!(
                "{} makes up {:.1}% of your spending.",
                top.category, top.percentage
            ))
        } else {
            None
        }
    }
}

/// Ordered collection of insight rules
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(SavingsRule));
        engine.register(Box::new(OverBudgetRule));
        engine.register(Box::new(TrendRule));
        engine.register(Box::new(ConcentrationRule));

        engine
    }

    /// Engine with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule in order and collect the messages that fired
    pub fn generate(&self, ctx: &InsightContext<'_>) -> Vec<String> {
        let mut insights = vec![];

        for rule in &self.rules {
            if let Some(message) = rule.evaluate(ctx) {
                tracing::debug!(rule = rule.name(), "Insight rule fired");
                insights.push(message);
            }
        }

        insights
    }
}

/// Messages from the built-in rules
pub fn generate_insights(
    summary: &FinancialSummary,
    budgets: &[BudgetResult],
    trend: &SpendingTrend,
) -> Vec<String> {
    InsightEngine::new().generate(&InsightContext {
        summary,
        budgets,
        trend,
    })
}
