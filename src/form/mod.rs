//! Order form state
//!
//! [`OrderForm`] owns the draft being edited and the list of orders saved
//! so far. All mutation goes through its methods; nothing else in the
//! crate holds order state. Saved orders are append-only and never touched
//! again after [`OrderForm::save_order`] snapshots them.

use chrono::Utc;
use tracing::debug;

use crate::error::{PedidosError, Result};
use crate::order::{parse_discount, parse_quantity, ItemField, LineItem, Order};

/// The order currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub order_number: String,
    pub customer: String,
    pub items: Vec<LineItem>,
}

impl Draft {
    /// A fresh draft: empty header fields and exactly one empty line item.
    pub fn new() -> Self {
        Self {
            order_number: String::new(),
            customer: String::new(),
            items: vec![LineItem::default()],
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrderForm {
    draft: Draft,
    saved: Vec<Order>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            draft: Draft::new(),
            saved: Vec::new(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn saved(&self) -> &[Order] {
        &self.saved
    }

    /// Replace the draft order number. No format or uniqueness checks.
    pub fn set_order_number(&mut self, value: impl Into<String>) {
        self.draft.order_number = value.into();
    }

    /// Replace the draft customer id. The id is not checked against the
    /// customer directory.
    pub fn set_customer(&mut self, id: impl Into<String>) {
        self.draft.customer = id.into();
    }

    /// Append one empty line item and return its index.
    pub fn add_item(&mut self) -> usize {
        self.draft.items.push(LineItem::default());
        let index = self.draft.items.len() - 1;
        debug!(index, "added draft line item");
        index
    }

    /// Update one field of the line item at `index`. Text fields store the
    /// raw value as-is; numeric fields parse it, keeping `NaN` on failure.
    pub fn update_item(&mut self, index: usize, field: ItemField, raw: &str) -> Result<()> {
        let count = self.draft.items.len();
        let item = self
            .draft
            .items
            .get_mut(index)
            .ok_or(PedidosError::ItemIndexOutOfRange { index, count })?;

        match field {
            ItemField::Reference => item.reference = raw.to_string(),
            ItemField::Description => item.description = raw.to_string(),
            ItemField::Quantity => item.quantity = parse_quantity(raw),
            ItemField::Discount => item.discount = parse_discount(raw),
        }

        debug!(index, field = %field, "updated draft line item");
        Ok(())
    }

    /// Snapshot the draft into the saved list and reset the draft to its
    /// initial state. Accepts anything, including a fully empty draft.
    pub fn save_order(&mut self) -> &Order {
        let draft = std::mem::take(&mut self.draft);
        self.saved.push(Order {
            order_number: draft.order_number,
            customer: draft.customer,
            items: draft.items,
            saved_at: Utc::now(),
        });

        let order = self.saved.last().expect("just pushed");
        debug!(
            order_number = %order.order_number,
            items = order.items.len(),
            total_saved = self.saved.len(),
            "saved order"
        );
        order
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_one_empty_item() {
        let form = OrderForm::new();
        assert_eq!(form.draft().order_number, "");
        assert_eq!(form.draft().customer, "");
        assert_eq!(form.draft().items, vec![LineItem::default()]);
        assert!(form.saved().is_empty());
    }

    #[test]
    fn test_add_item_grows_by_one_per_call() {
        let mut form = OrderForm::new();
        for n in 1..=5 {
            let index = form.add_item();
            assert_eq!(index, n);
            assert_eq!(form.draft().items.len(), n + 1);
        }
    }

    #[test]
    fn test_update_item_read_back() {
        let mut form = OrderForm::new();
        form.update_item(0, ItemField::Reference, "R1").unwrap();
        form.update_item(0, ItemField::Description, "Widget, large").unwrap();
        form.update_item(0, ItemField::Quantity, "5").unwrap();
        form.update_item(0, ItemField::Discount, "1.5").unwrap();

        let item = &form.draft().items[0];
        assert_eq!(item.reference, "R1");
        assert_eq!(item.description, "Widget, large");
        assert_eq!(item.quantity, 5.0);
        assert_eq!(item.discount, 1.5);
    }

    #[test]
    fn test_update_item_invalid_number_stores_nan() {
        let mut form = OrderForm::new();
        form.update_item(0, ItemField::Quantity, "abc").unwrap();
        form.update_item(0, ItemField::Discount, "uno").unwrap();

        assert!(form.draft().items[0].quantity.is_nan());
        assert!(form.draft().items[0].discount.is_nan());
    }

    #[test]
    fn test_update_item_out_of_range_fails() {
        let mut form = OrderForm::new();
        let result = form.update_item(3, ItemField::Reference, "R1");
        assert!(matches!(
            result,
            Err(PedidosError::ItemIndexOutOfRange { index: 3, count: 1 })
        ));
    }

    #[test]
    fn test_save_order_appends_and_resets() {
        let mut form = OrderForm::new();
        form.set_order_number("PO1");
        form.set_customer("cliente1");
        form.update_item(0, ItemField::Quantity, "2").unwrap();

        form.save_order();

        assert_eq!(form.saved().len(), 1);
        assert_eq!(form.saved()[0].order_number, "PO1");
        assert_eq!(form.saved()[0].customer, "cliente1");
        assert_eq!(form.saved()[0].items[0].quantity, 2.0);

        // Draft is back to its initial state.
        assert_eq!(*form.draft(), Draft::new());
    }

    #[test]
    fn test_save_order_accepts_empty_draft() {
        let mut form = OrderForm::new();
        form.save_order();

        assert_eq!(form.saved().len(), 1);
        assert_eq!(form.saved()[0].order_number, "");
        assert_eq!(form.saved()[0].items.len(), 1);
    }

    #[test]
    fn test_saved_orders_unaffected_by_later_edits() {
        let mut form = OrderForm::new();
        form.set_order_number("PO1");
        form.save_order();

        form.set_order_number("PO2");
        form.update_item(0, ItemField::Reference, "R9").unwrap();

        assert_eq!(form.saved()[0].order_number, "PO1");
        assert_eq!(form.saved()[0].items[0].reference, "");
    }

    #[test]
    fn test_save_order_keeps_save_order_sequence() {
        let mut form = OrderForm::new();
        for number in ["A", "B", "C"] {
            form.set_order_number(number);
            form.save_order();
        }

        let numbers: Vec<_> = form.saved().iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["A", "B", "C"]);
    }
}
