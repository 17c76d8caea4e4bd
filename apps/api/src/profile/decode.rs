//! Serialized-Value Decoder — unpacks PHP `serialize()` payloads stored in postmeta.
//!
//! The job-board plugin packs every repeating sub-field (all job titles, all
//! start dates, ...) into one array blob per key. Only the array VALUES matter:
//! their order is what lines up entry *i* across sub-fields, so keys are dropped.
//!
//! Anything that is not a well-formed array degrades to `Decoded::Fallback`
//! holding the untouched input. One bad field never aborts a profile build.

use thiserror::Error;
use tracing::warn;

/// Outcome of decoding one raw `meta_value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A serialized array, values in payload order.
    Values(Vec<String>),
    /// A scalar payload, a plain unserialized value, or a malformed blob.
    Fallback(String),
}

impl Decoded {
    /// Positional view used by the assembler and skills capture.
    /// A fallback counts as a single value: a plain value is one entry.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Decoded::Values(values) => values,
            Decoded::Fallback(raw) => vec![raw],
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),

    #[error("unexpected byte '{found}' at byte {pos}")]
    UnexpectedByte { pos: usize, found: char },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("string value is not valid UTF-8")]
    InvalidUtf8,

    #[error("array key must be an integer or string")]
    InvalidKey,

    #[error("nested arrays cannot be flattened into field values")]
    NestedArray,
}

#[derive(Debug, Clone, PartialEq)]
enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<(PhpValue, PhpValue)>),
}

/// Decodes a raw postmeta value. Never fails; see `Decoded`.
pub fn decode(raw: &str) -> Decoded {
    let parsed = unserialize(raw).and_then(|value| match value {
        PhpValue::Array(pairs) => array_values(pairs).map(Some),
        _ => Ok(None),
    });

    match parsed {
        Ok(Some(values)) => Decoded::Values(values),
        Ok(None) => Decoded::Fallback(raw.to_string()),
        Err(e) => {
            warn!(
                error = %e,
                raw_len = raw.len(),
                "Malformed serialized field, keeping raw value"
            );
            Decoded::Fallback(raw.to_string())
        }
    }
}

fn unserialize(raw: &str) -> Result<PhpValue, DecodeError> {
    let mut parser = Parser {
        input: raw.as_bytes(),
        pos: 0,
    };
    // Bytes after the first complete value are ignored, as PHP's own reader does.
    parser.parse_value(false)
}

fn array_values(pairs: Vec<(PhpValue, PhpValue)>) -> Result<Vec<String>, DecodeError> {
    pairs
        .into_iter()
        .map(|(_, value)| match value {
            PhpValue::Null => Ok(String::new()),
            PhpValue::Bool(true) => Ok("1".to_string()),
            PhpValue::Bool(false) => Ok(String::new()),
            PhpValue::Int(i) => Ok(i.to_string()),
            PhpValue::Float(f) => Ok(f.to_string()),
            PhpValue::Str(s) => Ok(s),
            PhpValue::Array(_) => Err(DecodeError::NestedArray),
        })
        .collect()
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Arrays are rejected as soon as they appear inside another array, so
    /// recursion never goes deeper than one level regardless of the input.
    fn parse_value(&mut self, in_array: bool) -> Result<PhpValue, DecodeError> {
        match self.next_byte()? {
            b'N' => {
                self.expect(b';')?;
                Ok(PhpValue::Null)
            }
            b'b' => {
                self.expect(b':')?;
                match self.read_until(b';')? {
                    b"0" => Ok(PhpValue::Bool(false)),
                    b"1" => Ok(PhpValue::Bool(true)),
                    other => Err(DecodeError::InvalidNumber(lossy(other))),
                }
            }
            b'i' => {
                self.expect(b':')?;
                let text = self.read_until(b';')?;
                parse_number::<i64>(text).map(PhpValue::Int)
            }
            b'd' => {
                self.expect(b':')?;
                let text = self.read_until(b';')?;
                parse_number::<f64>(text).map(PhpValue::Float)
            }
            b's' => {
                self.expect(b':')?;
                let len = parse_number::<usize>(self.read_until(b':')?)?;
                self.expect(b'"')?;
                let bytes = self.take(len)?;
                self.expect(b'"')?;
                self.expect(b';')?;
                let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
                Ok(PhpValue::Str(text.to_string()))
            }
            b'a' if in_array => Err(DecodeError::NestedArray),
            b'a' => {
                self.expect(b':')?;
                let count = parse_number::<usize>(self.read_until(b':')?)?;
                self.expect(b'{')?;
                // Cap the preallocation: the count comes from untrusted input.
                let mut pairs = Vec::with_capacity(count.min(64));
                for _ in 0..count {
                    let key = self.parse_value(true)?;
                    if !matches!(key, PhpValue::Int(_) | PhpValue::Str(_)) {
                        return Err(DecodeError::InvalidKey);
                    }
                    let value = self.parse_value(true)?;
                    pairs.push((key, value));
                }
                self.expect(b'}')?;
                Ok(PhpValue::Array(pairs))
            }
            found => Err(DecodeError::UnexpectedByte {
                pos: self.pos - 1,
                found: found as char,
            }),
        }
    }

    fn next_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEnd(self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn expect(&mut self, wanted: u8) -> Result<(), DecodeError> {
        let found = self.next_byte()?;
        if found != wanted {
            return Err(DecodeError::UnexpectedByte {
                pos: self.pos - 1,
                found: found as char,
            });
        }
        Ok(())
    }

    /// Returns the bytes up to `delimiter` and consumes the delimiter.
    fn read_until(&mut self, delimiter: u8) -> Result<&'a [u8], DecodeError> {
        let input: &'a [u8] = self.input;
        let start = self.pos;
        let offset = input[start..]
            .iter()
            .position(|&b| b == delimiter)
            .ok_or(DecodeError::UnexpectedEnd(input.len()))?;
        self.pos = start + offset + 1;
        Ok(&input[start..start + offset])
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let input: &'a [u8] = self.input;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= input.len())
            .ok_or(DecodeError::UnexpectedEnd(input.len()))?;
        let bytes = &input[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }
}

fn parse_number<T: std::str::FromStr>(text: &[u8]) -> Result<T, DecodeError> {
    std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .ok_or_else(|| DecodeError::InvalidNumber(lossy(text)))
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
