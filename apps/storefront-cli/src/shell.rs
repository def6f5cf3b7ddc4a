//! # Interactive Shell
//!
//! The text menu a customer uses to browse the catalog and place orders.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === Welcome to Best Buy ===                                            │
//! │                                                                         │
//! │  1 ──► store.render_catalog()                                          │
//! │  2 ──► store.total_quantity()                                          │
//! │  3 ──► snapshot active_products()                                      │
//! │          ├── read "number" / "quantity" pairs until "done"              │
//! │          ├── store.preview_order()   ← nothing committed on failure    │
//! │          └── store.place_order()     ← stock debited                   │
//! │  4 ──► goodbye                                                         │
//! │                                                                         │
//! │  End of input behaves like 4.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input and output so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use storefront_core::{Money, OrderLine, ProductId, Store};
use tracing::{info, warn};

use crate::error::ShellError;

/// A product as it was listed to the customer when an order started.
struct Listed {
    id: ProductId,
    name: String,
}

pub struct Shell<'a, R, W> {
    store: &'a mut Store,
    store_name: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut Store, store_name: impl Into<String>, input: R, output: W) -> Self {
        Shell {
            store,
            store_name: store_name.into(),
            input,
            output,
        }
    }

    /// Runs the menu until the customer quits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            writeln!(self.output, "\n=== Welcome to {} ===", self.store_name)?;
            writeln!(self.output, "1. List all products in store")?;
            writeln!(self.output, "2. Show total amount in store")?;
            writeln!(self.output, "3. Make an order")?;
            writeln!(self.output, "4. Quit")?;

            let Some(choice) = self.prompt("Enter your choice (1-4): ")? else {
                self.quit()?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.list_products()?,
                "2" => self.show_total_quantity()?,
                "3" => self.make_order()?,
                "4" => {
                    self.quit()?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 4."
                )?,
            }
        }
    }

    fn list_products(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\n{}", self.store.render_catalog())?;
        Ok(())
    }

    fn show_total_quantity(&mut self) -> Result<(), ShellError> {
        writeln!(
            self.output,
            "Total quantity in store: {}",
            self.store.total_quantity()
        )?;
        Ok(())
    }

    fn make_order(&mut self) -> Result<(), ShellError> {
        let active = self.store.active_products();
        if active.is_empty() {
            writeln!(self.output, "No active products available to order.")?;
            return Ok(());
        }

        writeln!(self.output, "\nActive Products:")?;
        for (index, product) in active.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (Available: {})",
                index + 1,
                product.describe(),
                product.quantity()
            )?;
        }

        let listed: Vec<Listed> = active
            .iter()
            .map(|product| Listed {
                id: product.id(),
                name: product.name().to_string(),
            })
            .collect();

        let lines = self.build_shopping_list(&listed)?;
        if lines.is_empty() {
            writeln!(self.output, "No items ordered.")?;
            return Ok(());
        }

        self.process_order(&lines)
    }

    fn build_shopping_list(&mut self, listed: &[Listed]) -> Result<Vec<OrderLine>, ShellError> {
        let mut lines = Vec::new();

        loop {
            let Some(entry) =
                self.prompt("Enter product number to order (or 'done' to finish): ")?
            else {
                break;
            };

            if entry.eq_ignore_ascii_case("done") {
                break;
            }

            let Ok(number) = entry.parse::<usize>() else {
                writeln!(self.output, "Please enter a valid number or 'done'.")?;
                continue;
            };

            let Some(product) = number.checked_sub(1).and_then(|index| listed.get(index)) else {
                writeln!(self.output, "Invalid product number.")?;
                continue;
            };

            let prompt = format!("Enter quantity for {}: ", product.name);
            let Some(raw_quantity) = self.prompt(&prompt)? else {
                break;
            };

            let Ok(quantity) = raw_quantity.parse::<i64>() else {
                writeln!(self.output, "Please enter a valid number or 'done'.")?;
                continue;
            };

            lines.push(OrderLine::new(product.id, quantity));
            writeln!(self.output, "Product added to list!")?;
        }

        Ok(lines)
    }

    fn process_order(&mut self, lines: &[OrderLine]) -> Result<(), ShellError> {
        let result = self
            .store
            .preview_order(lines, true)
            .and_then(|_| self.store.place_order(lines, true));

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, lines = lines.len(), "Order rejected");
                writeln!(self.output, "Order failed: {err}")?;
                return Ok(());
            }
        };

        info!(total = %receipt.total, lines = lines.len(), "Order completed");

        writeln!(
            self.output,
            "Order completed! Total cost: {} (includes {} shipping fee)",
            receipt.total,
            receipt.shipping_fee().unwrap_or_else(Money::zero)
        )?;
        writeln!(self.output, "\nShopping List:")?;
        for detail in &receipt.details {
            writeln!(
                self.output,
                "- {}: {} x {} = {}",
                detail.label(),
                detail.quantity(),
                detail.unit_price(),
                detail.cost()
            )?;
        }
        Ok(())
    }

    fn quit(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "Thank you, have a nice day!")?;
        Ok(())
    }

    /// Prints `message` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
