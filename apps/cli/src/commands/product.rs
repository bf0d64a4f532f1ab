//! # Products Menu

use std::io::{self, BufRead, Write};

use shopkeep_core::Product;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn products_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Products: 1) Create  2) List  3) Restock  4) Change price  0) Back"
            )?;

            match self.prompt_line("> ")?.as_str() {
                "1" => self.create_product()?,
                "2" => self.list_products()?,
                "3" => self.restock_product()?,
                "4" => self.change_price()?,
                "0" => return Ok(()),
                other => writeln!(self.output, "Unknown option: {}", other)?,
            }
        }
    }

    fn create_product(&mut self) -> io::Result<()> {
        let id = self.prompt_i64("Product ID: ")?;
        let name = self.prompt_line("Name: ")?;
        let price = self.prompt_money("Price: ")?;
        let stock = self.prompt_i64("Stock: ")?;

        match self
            .state
            .catalog()
            .create_product(Product::new(id, name, price, stock))
        {
            Ok(product) => writeln!(self.output, "Product {} created.", product.id),
            Err(e) => self.print_error(&e),
        }
    }

    fn list_products(&mut self) -> io::Result<()> {
        let products = self.state.catalog().list_products();
        if products.is_empty() {
            return writeln!(self.output, "No products.");
        }

        for product in products {
            let price = self.money(product.price);
            writeln!(
                self.output,
                "  #{:<5} {:<24} {:>10}  stock {}",
                product.id, product.name, price, product.stock
            )?;
        }
        Ok(())
    }

    fn restock_product(&mut self) -> io::Result<()> {
        let id = self.prompt_i64("Product ID: ")?;
        let quantity = self.prompt_i64("Units to add: ")?;

        match self.state.catalog().restock_product(id, quantity) {
            Ok(product) => writeln!(self.output, "Stock for {} is now {}.", product.name, product.stock),
            Err(e) => self.print_error(&e),
        }
    }

    fn change_price(&mut self) -> io::Result<()> {
        let id = self.prompt_i64("Product ID: ")?;
        let price = self.prompt_money("New price: ")?;

        match self.state.catalog().update_price(id, price) {
            Ok(product) => {
                let price = self.money(product.price);
                writeln!(self.output, "{} now costs {}.", product.name, price)
            }
            Err(e) => self.print_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{empty_state, run_session};
    use shopkeep_core::Money;

    #[test]
    fn test_create_and_list() {
        let (state, out) = run_session(empty_state(), "1\n1\n1\nWidget\n9.99\n5\n2\n0\n0\n");

        assert!(out.contains("Product 1 created."));
        assert!(out.contains("Widget"));
        assert!(out.contains("$9.99"));
        assert_eq!(
            state.store().products().get_by_id(1).unwrap().price,
            Money::from_cents(999)
        );
    }

    #[test]
    fn test_create_rejected() {
        // zero price parses, then fails validation
        let (state, out) = run_session(empty_state(), "1\n1\n1\nWidget\n0\n5\n0\n0\n");

        assert!(out.contains("Error: Validation error: price must be greater than zero"));
        assert!(state.catalog().list_products().is_empty());
    }

    #[test]
    fn test_price_prompt_reasks() {
        let (_, out) = run_session(empty_state(), "1\n1\n1\nWidget\n9.999\n9.99\n5\n0\n0\n");

        assert!(out.contains("at most two decimal places"));
        assert!(out.contains("Product 1 created."));
    }

    #[test]
    fn test_restock_and_reprice() {
        let input = "1\n1\n1\nWidget\n9.99\n5\n3\n1\n10\n4\n1\n12.50\n0\n0\n";
        let (state, out) = run_session(empty_state(), input);

        assert!(out.contains("Stock for Widget is now 15."));
        assert!(out.contains("Widget now costs $12.50."));
        let product = state.store().products().get_by_id(1).unwrap();
        assert_eq!(product.stock, 15);
        assert_eq!(product.price, Money::from_cents(1250));
    }

    #[test]
    fn test_empty_list() {
        let (_, out) = run_session(empty_state(), "1\n2\n0\n0\n");
        assert!(out.contains("No products."));
    }
}
