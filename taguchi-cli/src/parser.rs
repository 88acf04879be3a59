//! Definition file parser: turns a `.tgu` text file into a
//! [`taguchi::Definition`].
//!
//! The format is a handful of line-oriented rules, so this is a hand-rolled
//! line scanner rather than a grammar-driven parser — the same choice the
//! `taguchi` crate itself makes for small textual formats (see
//! `Order::from_str` in the core crate's own style notes).

use std::fmt;

use taguchi::{Definition, Factor};

/// A line-numbered parse failure in a `.tgu` file.
#[derive(Debug)]
pub struct ParseError {
    line: usize,
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

fn err(line: usize, message: impl Into<String>) -> ParseError {
    ParseError {
        line,
        message: message.into(),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses the text of a `.tgu` file into a [`Definition`].
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending source line for malformed
/// syntax, or wrapping a [`taguchi::Error::Validation`] if the resulting
/// factor set itself is invalid (zero factors, over-long names, etc.).
pub fn parse(text: &str) -> Result<Definition, ParseError> {
    let mut factors: Vec<Factor> = Vec::new();
    let mut array: Option<String> = None;
    let mut in_factors_block = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        let indented = line.starts_with(' ') || line.starts_with('\t');

        if !indented {
            let trimmed = line.trim();
            if trimmed == "factors:" {
                in_factors_block = true;
                continue;
            }
            if let Some(name) = trimmed.strip_prefix("array:") {
                let name = name.trim().to_owned();
                if !is_valid_array_name(&name) {
                    return Err(err(
                        line_no,
                        format!("array name '{name}' does not match ^L[0-9]+$"),
                    ));
                }
                array = Some(name);
                in_factors_block = false;
                continue;
            }
            return Err(err(line_no, format!("unrecognized line: '{trimmed}'")));
        }

        if !in_factors_block {
            return Err(err(
                line_no,
                "indented line outside of a 'factors:' block",
            ));
        }

        let trimmed = line.trim();
        let Some((name, values)) = trimmed.split_once(':') else {
            return Err(err(line_no, format!("expected '<name>: <values>', got '{trimmed}'")));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(err(line_no, "factor name must not be empty"));
        }
        if name.len() > taguchi::factor::MAX_NAME_LEN {
            return Err(err(
                line_no,
                format!("factor name '{name}' exceeds {} bytes", taguchi::factor::MAX_NAME_LEN),
            ));
        }

        let levels: Vec<String> = values.split(',').map(|v| v.trim().to_owned()).collect();
        if levels.iter().any(String::is_empty) {
            return Err(err(line_no, format!("factor '{name}' has an empty level value")));
        }
        for value in &levels {
            if value.len() > taguchi::factor::MAX_VALUE_LEN {
                return Err(err(
                    line_no,
                    format!(
                        "level value '{value}' of factor '{name}' exceeds {} bytes",
                        taguchi::factor::MAX_VALUE_LEN
                    ),
                ));
            }
        }

        let factor = Factor::new(name, levels).map_err(|e| err(line_no, e.to_string()))?;
        factors.push(factor);
    }

    Definition::new(factors, array).map_err(|e| err(text.lines().count().max(1), e.to_string()))
}

fn is_valid_array_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('L') else {
        return false;
    };
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parses_factors_and_explicit_array() {
        let text = "factors:\n  speed: low, medium, high\n  feed: slow, fast\narray: L9\n";
        let def = parse(text).unwrap();
        assert_eq!(def.factors().len(), 2);
        assert_eq!(def.array_name(), Some("L9"));
        assert_eq!(def.factors()[0].name(), "speed");
        assert_eq!(def.factors()[0].levels(), ["low", "medium", "high"]);
    }

    #[test]
    fn array_is_optional() {
        let text = "factors:\n  a: 1, 2\n";
        let def = parse(text).unwrap();
        assert_eq!(def.array_name(), None);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "# a comment\nfactors:\n  a: 1, 2  # trailing comment\n\narray: L4\n";
        let def = parse(text).unwrap();
        assert_eq!(def.factors()[0].levels(), ["1", "2"]);
        assert_eq!(def.array_name(), Some("L4"));
    }

    #[test]
    fn rejects_malformed_array_name() {
        let text = "factors:\n  a: 1, 2\narray: nine\n";
        assert!(parse(text).is_err());
    }

    #[test]
    fn rejects_unindented_factor_line() {
        let text = "factors:\na: 1, 2\n";
        assert!(parse(text).is_err());
    }

    #[test]
    fn rejects_empty_factor_set() {
        let text = "array: L9\n";
        assert!(parse(text).is_err());
    }
}
