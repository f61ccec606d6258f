use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::domain::types::Customer;

/// Reads customers interactively. The stream ends on EOF or on an empty name or distance.
pub struct CustomerSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CustomerSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn next_customer(&mut self) -> io::Result<Option<Customer>> {
        let name = match self.prompt("Customer Name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };

        loop {
            let raw = match self.prompt("Customer distance: ")? {
                Some(raw) => raw,
                None => return Ok(None),
            };

            match parse_distance(&raw) {
                Some(distance) => {
                    debug!("Read customer {} at distance {}", name, distance);
                    return Ok(Some(Customer::new(name, distance)));
                }
                None => {
                    warn!("Rejected distance input {:?}", raw);
                    writeln!(
                        self.output,
                        "Distance must be a non-negative number, got '{}'",
                        raw
                    )?;
                }
            }
        }
    }

    /// Returns `None` on EOF or an empty line. Whitespace counts as input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(line.to_string()))
        }
    }
}

impl<R: BufRead, W: Write> Iterator for CustomerSource<R, W> {
    type Item = Customer;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_customer() {
            Ok(customer) => customer,
            Err(e) => {
                warn!("Stopped reading customers: {}", e);
                None
            }
        }
    }
}

pub fn parse_distance(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
}
