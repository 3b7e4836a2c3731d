//! Menu loop and report rendering.

use std::io::{self, BufRead, Write};

use salesbook_ledger::{SalesEntry, SalesLedger};

use crate::input::{self, InputError};
use crate::menu::MenuOption;

/// Interactive session over a line-based input and a text output.
///
/// Generic over the reader/writer pair so sessions can run against in-memory
/// buffers in tests; `main` wires the locked stdio handles.
pub struct Console<R, W> {
    ledger: SalesLedger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            ledger: SalesLedger::new(),
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("session started");
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match MenuOption::from_code(line.trim()) {
                Some(MenuOption::RecordSale) => self.record_sale()?,
                Some(MenuOption::TotalAndAverage) => self.show_total_and_average()?,
                Some(MenuOption::DepartmentTotals) => self.show_department_totals()?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                None => {
                    writeln!(self.output, "Unknown selection. Please try again.")?;
                }
            }
        }
        tracing::info!(entries = self.ledger.entries().len(), "session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Menu ---")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.code(), option.label())?;
        }
        write!(self.output, "Select an option: ")?;
        self.output.flush()
    }

    /// Prompt for one field and validate it. A rejected value is reported to
    /// the user and abandons the current flow (`None`), as does end of input.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let Some(raw) = self.read_line()? else {
            return Ok(None);
        };
        match parse(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::debug!(error = %err, "input rejected");
                writeln!(self.output, "{err}")?;
                Ok(None)
            }
        }
    }

    fn record_sale(&mut self) -> io::Result<()> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ", input::parse_date)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Amount: ", input::parse_amount)? else {
            return Ok(());
        };
        let Some(department) = self.prompt("Department: ", input::parse_department)? else {
            return Ok(());
        };

        match SalesEntry::new(date, amount, department) {
            Ok(entry) => {
                tracing::debug!(
                    date = %entry.date(),
                    amount = entry.amount(),
                    department = %entry.department(),
                    "sale recorded"
                );
                self.ledger.add(entry);
                writeln!(self.output, "Sale recorded.")?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "entry rejected");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(())
    }

    fn show_total_and_average(&mut self) -> io::Result<()> {
        if !self.ledger.has_data() {
            writeln!(self.output, "No sales data recorded.")?;
            return Ok(());
        }
        writeln!(self.output, "--- Total and average ---")?;
        writeln!(self.output, "Total: {}", self.ledger.total_sales())?;
        writeln!(self.output, "Average: {:.2}", self.ledger.average_sales())
    }

    fn show_department_totals(&mut self) -> io::Result<()> {
        if !self.ledger.has_data() {
            writeln!(self.output, "No sales data recorded.")?;
            return Ok(());
        }
        // The mapping itself is unordered; sort by label for stable display.
        let mut totals: Vec<_> = self.ledger.department_totals().into_iter().collect();
        totals.sort_by(|a, b| a.0.cmp(&b.0));

        writeln!(self.output, "--- Department totals ---")?;
        for (department, total) in totals {
            writeln!(self.output, "{department}: {total}")?;
        }
        Ok(())
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(script.to_string()), &mut output);
        console.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn menu_lists_all_options() {
        let output = run_session("4\n");
        assert!(output.contains("--- Menu ---"));
        assert!(output.contains("1. Record a sale"));
        assert!(output.contains("2. Show total and average"));
        assert!(output.contains("3. Show department totals"));
        assert!(output.contains("4. Exit"));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn unknown_selection_reprompts() {
        let output = run_session("9\n4\n");
        assert!(output.contains("Unknown selection. Please try again."));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn reports_gate_on_empty_ledger() {
        let output = run_session("2\n3\n4\n");
        assert_eq!(output.matches("No sales data recorded.").count(), 2);
        assert!(!output.contains("--- Total and average ---"));
        assert!(!output.contains("--- Department totals ---"));
    }

    #[test]
    fn recorded_sales_produce_the_reports() {
        let output = run_session(
            "1\n2025-01-01\n100\nSales\n\
             1\n2025-01-02\n200\nSales\n\
             1\n2025-01-03\n50\nHR\n\
             2\n3\n4\n",
        );

        assert_eq!(output.matches("Sale recorded.").count(), 3);
        assert!(output.contains("Total: 350"));
        assert!(output.contains("Average: 116.67"));

        // Sorted by label for stable display.
        let hr = output.find("HR: 50").unwrap();
        let sales = output.find("Sales: 300").unwrap();
        assert!(hr < sales);
    }

    #[test]
    fn invalid_date_abandons_the_entry() {
        let output = run_session("1\n2025-13-40\n2\n4\n");
        assert!(output.contains("date must be a valid calendar date"));
        assert!(!output.contains("Sale recorded."));
        assert!(output.contains("No sales data recorded."));
    }

    #[test]
    fn invalid_amount_abandons_the_entry() {
        let output = run_session("1\n2025-01-01\n12345678901\n4\n");
        assert!(output.contains("amount must be a whole number of at most 10 digits"));
        assert!(!output.contains("Sale recorded."));
    }

    #[test]
    fn invalid_department_abandons_the_entry() {
        let output = run_session("1\n2025-01-01\n100\nEngineering\n4\n");
        assert!(output.contains("label exceeds 10 characters"));
        assert!(!output.contains("Sale recorded."));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let output = run_session("1\n2025-01-01\n");
        assert!(output.contains("Amount: "));
        assert!(!output.contains("Goodbye."));
    }
}
