//! Instruction decoder.
//!
//! One text line becomes one [`Instruction`]. All whitespace is stripped
//! before parsing (inner spaces included), and blank lines decode to
//! nothing. The first remaining character selects the instruction kind:
//!
//! - `N,user,symbol,price,qty,side,userOrderId` — submit, side `B` or `S`
//! - `C,user,userOrderId` — cancel
//! - `F` — flush

use std::num::ParseIntError;

use book_core::{Cancel, Instruction, Side, Submit};
use thiserror::Error;

/// Decode failure; fatal for the current run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown instruction type in {0:?}")]
    UnknownKind(String),

    #[error("expected {expected} fields in {line:?}, found {found}")]
    FieldCount {
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("bad {field} in {line:?}: {source}")]
    BadInt {
        line: String,
        field: &'static str,
        source: ParseIntError,
    },

    #[error("unknown side {side:?} in {line:?}")]
    BadSide { line: String, side: String },

    #[error("{field} must be positive in {line:?}")]
    NotPositive { line: String, field: &'static str },
}

/// Parse one input line. Blank lines (after whitespace stripping) decode
/// to `Ok(None)`.
pub fn parse_instruction(line: &str) -> Result<Option<Instruction>, ParseError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = stripped.split(',').collect();
    let instruction = match stripped.as_bytes()[0] {
        b'N' => parse_submit(&stripped, &fields)?,
        b'C' => parse_cancel(&stripped, &fields)?,
        b'F' => {
            expect_fields(&stripped, &fields, 1)?;
            Instruction::Flush
        }
        _ => return Err(ParseError::UnknownKind(stripped.clone())),
    };

    Ok(Some(instruction))
}

fn parse_submit(line: &str, fields: &[&str]) -> Result<Instruction, ParseError> {
    expect_fields(line, fields, 7)?;

    let user = int_field(line, fields[1], "user")?;
    let symbol = fields[2].to_string();
    let price = positive_field(line, fields[3], "price")?;
    let quantity = positive_field(line, fields[4], "quantity")?;
    let side = fields[5]
        .chars()
        .next()
        .filter(|_| fields[5].len() == 1)
        .and_then(Side::from_char)
        .ok_or_else(|| ParseError::BadSide {
            line: line.to_string(),
            side: fields[5].to_string(),
        })?;
    let user_order_id = int_field(line, fields[6], "user order id")?;

    Ok(Instruction::Submit(Submit {
        user,
        symbol,
        price,
        quantity,
        side,
        user_order_id,
    }))
}

fn parse_cancel(line: &str, fields: &[&str]) -> Result<Instruction, ParseError> {
    expect_fields(line, fields, 3)?;

    let user = int_field(line, fields[1], "user")?;
    let user_order_id = int_field(line, fields[2], "user order id")?;

    Ok(Instruction::Cancel(Cancel {
        user,
        user_order_id,
    }))
}

fn expect_fields(line: &str, fields: &[&str], expected: usize) -> Result<(), ParseError> {
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            line: line.to_string(),
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn int_field(line: &str, raw: &str, field: &'static str) -> Result<u32, ParseError> {
    raw.parse::<u32>().map_err(|source| ParseError::BadInt {
        line: line.to_string(),
        field,
        source,
    })
}

fn positive_field(line: &str, raw: &str, field: &'static str) -> Result<u32, ParseError> {
    let value = int_field(line, raw, field)?;
    if value == 0 {
        return Err(ParseError::NotPositive {
            line: line.to_string(),
            field,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_with_spacing() {
        let parsed = parse_instruction("N, 1, IBM, 10, 100, B, 1").unwrap().unwrap();
        assert_eq!(
            parsed,
            Instruction::Submit(Submit {
                user: 1,
                symbol: "IBM".to_string(),
                price: 10,
                quantity: 100,
                side: Side::Buy,
                user_order_id: 1,
            })
        );
    }

    #[test]
    fn parses_cancel_and_flush() {
        assert_eq!(
            parse_instruction("C,1,2").unwrap(),
            Some(Instruction::Cancel(Cancel {
                user: 1,
                user_order_id: 2,
            }))
        );
        assert_eq!(parse_instruction(" F ").unwrap(), Some(Instruction::Flush));
    }

    #[test]
    fn blank_lines_decode_to_nothing() {
        assert_eq!(parse_instruction("").unwrap(), None);
        assert_eq!(parse_instruction("   \t").unwrap(), None);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(matches!(
            parse_instruction("X, 1, 2"),
            Err(ParseError::UnknownKind(_))
        ));
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        assert!(matches!(
            parse_instruction("C, 2"),
            Err(ParseError::FieldCount { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            parse_instruction("N, 2"),
            Err(ParseError::FieldCount { expected: 7, .. })
        ));
        assert!(matches!(
            parse_instruction("F, 1"),
            Err(ParseError::FieldCount { expected: 1, .. })
        ));
    }

    #[test]
    fn bad_integers_are_an_error() {
        assert!(matches!(
            parse_instruction("N, x, IBM, 10, 100, B, 1"),
            Err(ParseError::BadInt { field: "user", .. })
        ));
        assert!(matches!(
            parse_instruction("C, 1, x"),
            Err(ParseError::BadInt { field: "user order id", .. })
        ));
    }

    #[test]
    fn bad_side_is_an_error() {
        assert!(matches!(
            parse_instruction("N, 1, IBM, 10, 100, Q, 1"),
            Err(ParseError::BadSide { .. })
        ));
    }

    #[test]
    fn price_and_quantity_must_be_positive() {
        assert!(matches!(
            parse_instruction("N, 1, IBM, 0, 100, B, 1"),
            Err(ParseError::NotPositive { field: "price", .. })
        ));
        assert!(matches!(
            parse_instruction("N, 1, IBM, 10, 0, B, 1"),
            Err(ParseError::NotPositive { field: "quantity", .. })
        ));
    }
}
