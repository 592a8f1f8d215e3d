use anyhow::{Context, Result};
use colored::Colorize;
use rust_decimal::Decimal;

use crate::models::{Invoice, LineKind};

use super::common::ShopContext;

pub fn show(ctx: &ShopContext, job_id: &str, json: bool) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let invoice = ctx.workshop.invoice(&id)?;

    if json {
        let body = serde_json::to_string_pretty(&invoice).context("Failed to serialize invoice")?;
        println!("{body}");
        return Ok(());
    }

    println!("{}", ctx.config.shop.name.bold().blue());
    println!(
        "Invoice {}",
        ctx.config.invoice_number(id.as_str()).bold()
    );
    print!("{}", render(ctx, &invoice));
    Ok(())
}

pub fn discount(ctx: &ShopContext, job_id: &str, percent: Decimal) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    ctx.workshop.set_discount(&id, percent)?;
    let invoice = ctx.workshop.invoice(&id)?;
    println!(
        "  {} Discount {percent}% applied, total now {}",
        "✓".green().bold(),
        ctx.money(invoice.total).bold()
    );
    Ok(())
}

/// Line items and the totals block as plain lines.
pub fn render(ctx: &ShopContext, invoice: &Invoice) -> String {
    let mut out = String::new();
    let line = |label: &str, amount: Decimal| format!("  {label:<28} {:>12}\n", ctx.money(amount));

    if invoice.line_items.is_empty() {
        out.push_str("  No billable work yet\n");
    }
    for (kind, title) in [
        (LineKind::Service, "Services"),
        (LineKind::Package, "Packages"),
        (LineKind::Repair, "Repairs"),
    ] {
        let items: Vec<_> = invoice.line_items.iter().filter(|i| i.kind == kind).collect();
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n  {title}\n"));
        for item in items {
            out.push_str(&line(&item.description, item.amount));
        }
    }

    out.push_str(&format!("  {}\n", "─".repeat(41)));
    out.push_str(&line("Services", invoice.services_total));
    out.push_str(&line("Parts", invoice.parts_total));
    out.push_str(&line("Labour", invoice.labour_total));
    out.push_str(&line("Subtotal", invoice.subtotal));
    if !invoice.discount_percent.is_zero() {
        out.push_str(&line(
            &format!("Discount ({}%)", invoice.discount_percent.normalize()),
            -invoice.discount_amount,
        ));
    }
    out.push_str(&line(
        &format!("Tax ({}%)", (invoice.tax_rate * Decimal::ONE_HUNDRED).normalize()),
        invoice.tax,
    ));
    out.push_str(&line("Total", invoice.total));
    out
}
