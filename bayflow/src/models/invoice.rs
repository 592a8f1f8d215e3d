//! Cost aggregation: derives a job's invoice from its tasks and decisions.
//!
//! Nothing here is stored. An invoice is recomputed from the job on every
//! read, and identical inputs always produce identical amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::constants::{MAX_DISCOUNT_PERCENT, MONEY_SCALE, TAX_RATE};
use super::decision::DecisionCost;
use super::error::WorkflowError;
use super::job::Job;
use super::stage::StageKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Completed checklist task with a price
    Service,
    /// Approved flat-priced decision, e.g. a detailing package
    Package,
    /// Approved parts-and-labour decision
    Repair,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub stage: StageKind,
    pub source_id: String,
    pub description: String,
    pub kind: LineKind,
    pub parts: Decimal,
    pub labour: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Invoice {
    pub line_items: Vec<LineItem>,
    /// Priced tasks and flat-priced decisions
    pub services_total: Decimal,
    pub parts_total: Decimal,
    pub labour_total: Decimal,
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Accept a discount percent in `[0, 100]`.
pub fn validate_discount(percent: Decimal) -> Result<Decimal, WorkflowError> {
    if percent < Decimal::ZERO || percent > MAX_DISCOUNT_PERCENT {
        return Err(WorkflowError::InvalidDiscount(percent));
    }
    Ok(percent)
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the invoice for `job` at `discount_percent`.
///
/// ```text
/// subtotal = completed task prices + approved decision costs
/// discount = subtotal * discount_percent / 100
/// taxable  = subtotal - discount
/// tax      = taxable * 0.15
/// total    = taxable + tax
/// ```
///
/// Discount and tax are rounded half away from zero to cents.
///
/// # Errors
/// `InvalidDiscount` when `discount_percent` is outside `[0, 100]`; the
/// value is never clamped.
pub fn compute_invoice(job: &Job, discount_percent: Decimal) -> Result<Invoice, WorkflowError> {
    let discount_percent = validate_discount(discount_percent)?;

    let mut line_items = Vec::new();
    for stage in job.stages() {
        for task in stage.tasks().iter().filter(|t| t.completed) {
            if let Some(price) = task.price {
                line_items.push(LineItem {
                    stage: stage.kind(),
                    source_id: task.id.clone(),
                    description: task.name.clone(),
                    kind: LineKind::Service,
                    parts: Decimal::ZERO,
                    labour: Decimal::ZERO,
                    amount: price,
                });
            }
        }
        for decision in stage.approved_decisions() {
            let (kind, parts, labour) = match decision.cost {
                DecisionCost::PartsLabour { parts, labour } => (LineKind::Repair, parts, labour),
                DecisionCost::Flat { .. } => (LineKind::Package, Decimal::ZERO, Decimal::ZERO),
            };
            line_items.push(LineItem {
                stage: stage.kind(),
                source_id: decision.id.clone(),
                description: decision.description.clone(),
                kind,
                parts,
                labour,
                amount: decision.cost.amount(),
            });
        }
    }

    let services_total: Decimal = line_items
        .iter()
        .filter(|item| item.kind != LineKind::Repair)
        .map(|item| item.amount)
        .sum();
    let parts_total: Decimal = line_items.iter().map(|item| item.parts).sum();
    let labour_total: Decimal = line_items.iter().map(|item| item.labour).sum();
    let subtotal = services_total + parts_total + labour_total;

    let discount_amount = round_money(subtotal * discount_percent / Decimal::ONE_HUNDRED);
    let taxable_amount = subtotal - discount_amount;
    let tax = round_money(taxable_amount * TAX_RATE);
    let total = taxable_amount + tax;

    Ok(Invoice {
        line_items,
        services_total,
        parts_total,
        labour_total,
        subtotal,
        discount_percent,
        discount_amount,
        taxable_amount,
        tax_rate: TAX_RATE,
        tax,
        total,
    })
}
