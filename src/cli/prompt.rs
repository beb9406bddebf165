//! Line-oriented console prompts
//!
//! Generic over reader and writer so menu flows can be driven from tests.

use std::io::{BufRead, Write};

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::ContactRecord;

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> AddressBookResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| AddressBookError::Io(e.to_string()))
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// Fails with `InputClosed` at end of input.
    pub fn ask(&mut self, prompt: &str) -> AddressBookResult<String> {
        write!(self.output, "{}", prompt).map_err(|e| AddressBookError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| AddressBookError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| AddressBookError::Io(e.to_string()))?;
        if read == 0 {
            return Err(AddressBookError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Ask for a non-negative count
    pub fn ask_count(&mut self, prompt: &str) -> AddressBookResult<usize> {
        let answer = self.ask(prompt)?;
        answer.parse::<usize>().map_err(|_| {
            AddressBookError::InvalidInput(format!("'{}' is not a valid number", answer))
        })
    }

    /// Ask for a first and last name
    pub fn ask_name(&mut self, action: &str) -> AddressBookResult<(String, String)> {
        let first = self.ask(&format!("Enter the first name of the contact to {}: ", action))?;
        let last = self.ask(&format!("Enter the last name of the contact to {}: ", action))?;
        Ok((first, last))
    }

    /// Ask for every field of a new contact
    pub fn ask_contact(&mut self) -> AddressBookResult<ContactRecord> {
        let contact = ContactRecord {
            first_name: self.ask("Enter first name: ")?,
            last_name: self.ask("Enter last name: ")?,
            address: self.ask("Enter address: ")?,
            city: self.ask("Enter city: ")?,
            state: self.ask("Enter state: ")?,
            zip_code: self.ask("Enter ZIP code: ")?,
            phone: self.ask("Enter phone number: ")?,
            email: self.ask("Enter email address: ")?,
        };

        // Every answer is consumed before validating
        if contact.first_name.is_empty() || contact.last_name.is_empty() {
            return Err(AddressBookError::InvalidInput(
                "A contact needs both a first and a last name".into(),
            ));
        }
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_trims_and_echoes_prompt() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask("Say: ").unwrap(), "hello");
        assert_eq!(String::from_utf8(p.output).unwrap(), "Say: ");
    }

    #[test]
    fn test_ask_at_eof() {
        let mut p = prompter("");
        assert!(matches!(p.ask("> "), Err(AddressBookError::InputClosed)));
    }

    #[test]
    fn test_ask_count() {
        let mut p = prompter("3\nthree\n-1\n");
        assert_eq!(p.ask_count("> ").unwrap(), 3);
        assert!(p.ask_count("> ").unwrap_err().is_invalid_input());
        assert!(p.ask_count("> ").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_ask_contact() {
        let mut p = prompter("Jane\nDoe\n12 MG Road\nPune\nMH\n411001\n98765\njane@example.com\n");
        let contact = p.ask_contact().unwrap();
        assert_eq!(contact.full_name(), "Jane Doe");
        assert_eq!(contact.zip_code, "411001");
        assert_eq!(contact.email, "jane@example.com");
    }

    #[test]
    fn test_ask_contact_requires_a_name() {
        let mut p = prompter("\n\n\n\n\n\n\n\n");
        assert!(p.ask_contact().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_ask_contact_rejects_one_blank_name() {
        let mut p = prompter("\nDoe\n\n\n\n\n\n\nJane\n  \n\n\n\n\n\n\nJane\nDoe\n\n\n\n\n\n\n");
        assert!(p.ask_contact().unwrap_err().is_invalid_input());
        assert!(p.ask_contact().unwrap_err().is_invalid_input());
        // Both answers were consumed, so the next contact reads cleanly
        assert_eq!(p.ask_contact().unwrap().full_name(), "Jane Doe");
    }
}
