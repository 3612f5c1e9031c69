//! Output layer: human tables or the raw JSON envelope.
//!
//! JSON mode always prints the full envelope (including its error field) and
//! exits zero — machine consumers branch on `error`, not on exit codes.
//! Human mode turns an envelope error into a nonzero exit.

use anyhow::{Result, bail};
use serde::Serialize;
use winedrops_core::query::catalog::{OrderRow, ProductRow, WineRow};
use winedrops_core::{Envelope, WineStat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn render_best_sellers(envelope: &Envelope<WineStat>, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(envelope),
        OutputMode::Human => {
            let items = human_items(envelope)?;
            println!(
                "{:<6} {:<36} {:>10} {:>8} {:>7}",
                "ID", "WINE", "REVENUE", "BOTTLES", "ORDERS"
            );
            for stat in items {
                println!(
                    "{:<6} {:<36} {:>10.2} {:>8} {:>7}",
                    stat.id, stat.full_name, stat.revenue, stat.sold_bottles, stat.order_count
                );
            }
            println!("{} wines", envelope.total);
            Ok(())
        }
    }
}

pub fn render_wines(envelope: &Envelope<WineRow>, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(envelope),
        OutputMode::Human => {
            let items = human_items(envelope)?;
            println!("{:<6} {:<36} {:>7}", "ID", "NAME", "VINTAGE");
            for wine in items {
                println!("{:<6} {:<36} {:>7}", wine.id, wine.name, wine.vintage);
            }
            println!("{} wines", envelope.total);
            Ok(())
        }
    }
}

pub fn render_products(envelope: &Envelope<ProductRow>, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(envelope),
        OutputMode::Human => {
            let items = human_items(envelope)?;
            println!("{:<6} {:<8} {:<36} {:>8}", "ID", "WINE", "NAME", "PRICE");
            for product in items {
                println!(
                    "{:<6} {:<8} {:<36} {:>8.2}",
                    product.id, product.master_wine_id, product.name, product.price
                );
            }
            println!("{} products", envelope.total);
            Ok(())
        }
    }
}

pub fn render_orders(envelope: &Envelope<OrderRow>, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => print_json(envelope),
        OutputMode::Human => {
            let items = human_items(envelope)?;
            println!(
                "{:<6} {:<8} {:<12} {:>10} {:>8}",
                "ID", "PRODUCT", "STATUS", "AMOUNT", "BOTTLES"
            );
            for order in items {
                println!(
                    "{:<6} {:<8} {:<12} {:>10.2} {:>8}",
                    order.id, order.wine_product_id, order.status, order.total_amount, order.quantity
                );
            }
            println!("{} orders", envelope.total);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(envelope: &Envelope<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

/// Unwrap the item list for human rendering, turning an envelope error into
/// a command failure.
fn human_items<T>(envelope: &Envelope<T>) -> Result<&[T]> {
    if let Some(error) = &envelope.error {
        bail!("{} ({})", error.message, error.code);
    }
    Ok(&envelope.items)
}
