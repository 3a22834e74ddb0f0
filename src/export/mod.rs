//! CSV export
//!
//! Renders all saved orders into a fixed-format CSV: a Spanish header row
//! followed by one row per line item, saved-order then item order, joined
//! by `\n` with no trailing newline. Field values are written verbatim
//! with no quoting or escaping, so an embedded comma shifts the columns.
//! That limitation is part of the format. Numbers render through `f64`
//! Display, so whole values print without a decimal point and a failed
//! parse prints the literal text `NaN`.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::order::Order;

pub const CSV_HEADER: &str =
    "Número de Pedido,Cliente,Referencia,Descripción,Cantidad,Descuento Especial";

/// Default file name for exports.
pub const DEFAULT_EXPORT_FILE: &str = "orders.csv";

/// What an export wrote, for the confirmation message.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub orders: usize,
    pub rows: usize,
}

/// Render saved orders as CSV text.
pub fn render_csv(orders: &[Order]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];

    for order in orders {
        for item in &order.items {
            lines.push(format!(
                "{},{},{},{},{},{}",
                order.order_number,
                order.customer,
                item.reference,
                item.description,
                item.quantity,
                item.discount,
            ));
        }
    }

    lines.join("\n")
}

/// Write the CSV for `orders` to `path`, creating or truncating the file.
/// Read-only over the orders; the file handle is released before return.
pub fn export_csv(orders: &[Order], path: &Path) -> Result<ExportStats> {
    let content = render_csv(orders);
    fs::write(path, &content)?;

    let stats = ExportStats {
        orders: orders.len(),
        rows: orders.iter().map(|o| o.items.len()).sum(),
    };
    info!(
        orders = stats.orders,
        rows = stats.rows,
        path = %path.display(),
        "exported CSV"
    );
    Ok(stats)
}
