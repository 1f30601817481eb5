//! # Input Module
//!
//! Prompting and validation for everything the user types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Format (this module)                                          │
//! │  ├── empty?               → "Error: Input cannot be empty!"             │
//! │  └── wrong characters?    → "Error: Invalid input format!"              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Range (this module)                                           │
//! │  ├── below min            → "Error: Value must be at least N"           │
//! │  └── above max            → "Error: Value must be at most N"            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: stockroom-core                                                │
//! │  └── receives u32 / f64 / &str only, never raw text                    │
//! │                                                                         │
//! │  Every failure re-prompts. Only end-of-input escapes the loop.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

/// Signature shared by the format validators.
pub type Validator = fn(&str) -> bool;

// =============================================================================
// Validators
// =============================================================================

/// Non-empty and made only of ASCII letters and spaces.
///
/// ## Example
/// ```rust
/// use stockroom_console::input::is_valid_name;
///
/// assert!(is_valid_name("Brown Rice"));
/// assert!(!is_valid_name("Rice 5kg"));
/// ```
pub fn is_valid_name(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Non-empty and made only of ASCII digits.
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// Digits with at most one decimal point, and at least one digit.
///
/// No sign and no exponent, so anything accepted is non-negative.
pub fn is_decimal(input: &str) -> bool {
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in input.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

// =============================================================================
// Console
// =============================================================================

/// Line-oriented terminal: reads answers from `R`, writes prompts to `W`.
///
/// `run()` wires this to locked stdin/stdout; tests use a `Cursor` and a
/// `Vec<u8>`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Everything written so far (useful with an in-memory writer).
    pub fn output(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `text` as-is.
    pub fn print(&mut self, text: &str) -> AppResult<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn println(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Reads one line with the line terminator removed.
    fn read_line(&mut self) -> AppResult<String> {
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompts until the answer is non-empty and passes `validator`.
    pub fn prompt_text(&mut self, prompt: &str, validator: Option<Validator>) -> AppResult<String> {
        loop {
            self.print(prompt)?;
            let input = self.read_line()?;

            if input.is_empty() {
                self.println("Error: Input cannot be empty!")?;
            } else if validator.is_some_and(|valid| !valid(&input)) {
                self.println("Error: Invalid input format!")?;
            } else {
                return Ok(input);
            }
        }
    }

    /// Prompts for a whole number in `min..=max`.
    ///
    /// Numbers too large for `u32` are reported as exceeding `max`.
    pub fn prompt_int(&mut self, prompt: &str, min: u32, max: u32) -> AppResult<u32> {
        loop {
            let input = self.prompt_text(prompt, Some(is_digits))?;

            match input.parse::<u32>() {
                Ok(value) if value < min => {
                    self.println(&format!("Error: Value must be at least {}", min))?;
                }
                Ok(value) if value <= max => return Ok(value),
                _ => {
                    self.println(&format!("Error: Value must be at most {}", max))?;
                }
            }
        }
    }

    /// Prompts for a non-negative decimal amount.
    pub fn prompt_price(&mut self, prompt: &str) -> AppResult<f64> {
        loop {
            let input = self.prompt_text(prompt, Some(is_decimal))?;

            match input.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.println("Error: Invalid input format!")?,
            }
        }
    }

    /// Prompts for a yes/no answer; only an exact `y` counts as yes.
    pub fn prompt_confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self.prompt_text(prompt, None)? == "y")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Rice"));
        assert!(is_valid_name("brown rice"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("rice2"));
        assert!(!is_valid_name("rice-cake"));
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0"));
        assert!(is_digits("0042"));
        assert!(!is_digits(""));
        assert!(!is_digits("-1"));
        assert!(!is_digits("1.0"));
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("9.99"));
        assert!(is_decimal("10"));
        assert!(is_decimal("5."));
        assert!(is_decimal(".5"));
        assert!(!is_decimal("."));
        assert!(!is_decimal(""));
        assert!(!is_decimal("1.2.3"));
        assert!(!is_decimal("-1"));
        assert!(!is_decimal("1e3"));
    }

    #[test]
    fn test_prompt_text_reprompts_on_empty_and_invalid() {
        let mut c = console("\nrice9\nbrown rice\n");
        let name = c.prompt_text("Name: ", Some(is_valid_name)).unwrap();
        assert_eq!(name, "brown rice");

        let out = written(&c);
        assert_eq!(out.matches("Name: ").count(), 3);
        assert!(out.contains("Error: Input cannot be empty!"));
        assert!(out.contains("Error: Invalid input format!"));
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let mut c = console("tea\r\n");
        assert_eq!(c.prompt_text("> ", None).unwrap(), "tea");
    }

    #[test]
    fn test_prompt_int_range_checks() {
        let mut c = console("0\n9\nabc\n99999999999\n3\n");
        assert_eq!(c.prompt_int("Choice: ", 1, 8).unwrap(), 3);

        let out = written(&c);
        assert!(out.contains("Error: Value must be at least 1"));
        assert_eq!(out.matches("Error: Value must be at most 8").count(), 2);
        assert!(out.contains("Error: Invalid input format!"));
    }

    #[test]
    fn test_prompt_price() {
        let mut c = console("free\n.\n12.50\n");
        assert_eq!(c.prompt_price("Price: ").unwrap(), 12.5);
        assert_eq!(written(&c).matches("Error: Invalid input format!").count(), 2);

        let mut c = console("7\n");
        assert_eq!(c.prompt_price("Price: ").unwrap(), 7.0);
    }

    #[test]
    fn test_prompt_confirm() {
        assert!(console("y\n").prompt_confirm("? ").unwrap());
        assert!(!console("Y\n").prompt_confirm("? ").unwrap());
        assert!(!console("yes\n").prompt_confirm("? ").unwrap());
    }

    #[test]
    fn test_end_of_input() {
        let mut c = console("");
        assert!(matches!(c.prompt_text("> ", None), Err(AppError::InputClosed)));

        let mut c = console("abc\n");
        assert!(matches!(c.prompt_int("> ", 0, 5), Err(AppError::InputClosed)));
    }
}
