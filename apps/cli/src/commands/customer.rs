//! # Customers Menu

use std::io::{self, BufRead, Write};

use shopkeep_core::Customer;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn customers_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Customers: 1) Create  2) List  0) Back")?;

            match self.prompt_line("> ")?.as_str() {
                "1" => self.create_customer()?,
                "2" => self.list_customers()?,
                "0" => return Ok(()),
                other => writeln!(self.output, "Unknown option: {}", other)?,
            }
        }
    }

    fn create_customer(&mut self) -> io::Result<()> {
        let id = self.prompt_i64("Customer ID: ")?;
        let name = self.prompt_line("Name: ")?;
        let email = self.prompt_line("Email: ")?;

        match self
            .state
            .catalog()
            .create_customer(Customer::new(id, name, email))
        {
            Ok(customer) => writeln!(self.output, "Customer {} created.", customer.id),
            Err(e) => self.print_error(&e),
        }
    }

    fn list_customers(&mut self) -> io::Result<()> {
        let customers = self.state.catalog().list_customers();
        if customers.is_empty() {
            return writeln!(self.output, "No customers.");
        }

        for customer in customers {
            writeln!(
                self.output,
                "  #{:<5} {:<24} {}",
                customer.id, customer.name, customer.email
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{empty_state, run_session};

    #[test]
    fn test_create_and_list() {
        let input = "2\n1\n7\nAda\nada@example.com\n2\n0\n0\n";
        let (state, out) = run_session(empty_state(), input);

        assert!(out.contains("Customer 7 created."));
        assert!(out.contains("ada@example.com"));
        assert_eq!(state.catalog().list_customers().len(), 1);
    }

    #[test]
    fn test_duplicate_and_bad_email() {
        let input = "2\n1\n7\nAda\nada@example.com\n1\n7\nAda\nada@example.com\n1\n8\nBob\nbob\n0\n0\n";
        let (state, out) = run_session(empty_state(), input);

        assert!(out.contains("Error: Customer with id 7 already exists"));
        assert!(out.contains("Error: Validation error: email has invalid format"));
        assert_eq!(state.catalog().list_customers().len(), 1);
    }
}
