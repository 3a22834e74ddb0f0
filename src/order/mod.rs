//! Order data model
//!
//! A draft order is a plain value: order number, customer id, and a list
//! of line items. Numeric fields hold `f64` so a failed parse can be kept
//! as `NaN` instead of being rejected; the value flows unchanged into
//! display and CSV output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of reference/description/quantity/discount data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub reference: String,
    pub description: String,
    pub quantity: f64,
    pub discount: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            reference: String::new(),
            description: String::new(),
            quantity: 0.0,
            discount: 0.0,
        }
    }
}

/// A saved order: an immutable snapshot of a draft at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub customer: String,
    pub items: Vec<LineItem>,
    pub saved_at: DateTime<Utc>,
}

/// Selects which line-item field an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Reference,
    Description,
    Quantity,
    Discount,
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemField::Reference => write!(f, "reference"),
            ItemField::Description => write!(f, "description"),
            ItemField::Quantity => write!(f, "quantity"),
            ItemField::Discount => write!(f, "discount"),
        }
    }
}

impl std::str::FromStr for ItemField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Spanish names accepted alongside the field identifiers, same as
        // the column headers users see.
        match s.to_lowercase().as_str() {
            "reference" | "ref" | "referencia" => Ok(ItemField::Reference),
            "description" | "desc" | "descripcion" | "descripción" => Ok(ItemField::Description),
            "quantity" | "qty" | "cantidad" => Ok(ItemField::Quantity),
            "discount" | "descuento" => Ok(ItemField::Discount),
            _ => Err(format!("Invalid item field: {}", s)),
        }
    }
}

/// Parse a quantity as a base-10 integer. Anything that is not a whole
/// integer token yields `NaN`, which is stored and rendered as-is.
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<i64>().map(|n| n as f64).unwrap_or(f64::NAN)
}

/// Parse a discount as a floating-point value, `NaN` on failure.
pub fn parse_discount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
