use serde_json::Value;

use crate::client::ResponseSnapshot;
use crate::error::HarnessError;

/// A predicate over a [`ResponseSnapshot`]. Pointers follow RFC 6901.
#[derive(Debug, Clone, PartialEq)]
pub enum Assertion {
    Status(u16),
    FieldEquals { pointer: String, expected: Value },
    ArrayLength { pointer: String, len: usize },
    EmptyBody,
}

impl Assertion {
    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn field(pointer: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::FieldEquals {
            pointer: pointer.into(),
            expected: expected.into(),
        }
    }

    pub fn array_len(pointer: impl Into<String>, len: usize) -> Self {
        Self::ArrayLength {
            pointer: pointer.into(),
            len,
        }
    }

    /// One top-level `FieldEquals` per form pair: the response must echo the
    /// submitted values unchanged.
    pub fn echoes<K, V>(form: &[(K, V)]) -> Vec<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        form.iter()
            .map(|(k, v)| Self::field(format!("/{}", escape_token(k.as_ref())), v.as_ref()))
            .collect()
    }

    pub fn check(&self, snapshot: &ResponseSnapshot) -> Result<(), HarnessError> {
        match self {
            Self::Status(expected) => {
                if snapshot.status() == *expected {
                    Ok(())
                } else {
                    Err(HarnessError::UnexpectedStatus {
                        expected: *expected,
                        actual: snapshot.status(),
                    })
                }
            }

            Self::FieldEquals { pointer, expected } => match snapshot.field(pointer) {
                Some(actual) if actual == expected => Ok(()),
                actual => Err(HarnessError::FieldMismatch {
                    pointer: pointer.clone(),
                    expected: expected.to_string(),
                    actual: describe(actual),
                }),
            },

            Self::ArrayLength { pointer, len } => match snapshot.field(pointer) {
                Some(Value::Array(items)) if items.len() == *len => Ok(()),
                Some(Value::Array(items)) => Err(HarnessError::FieldMismatch {
                    pointer: pointer.clone(),
                    expected: format!("array of length {len}"),
                    actual: format!("array of length {}", items.len()),
                }),
                other => Err(HarnessError::FieldMismatch {
                    pointer: pointer.clone(),
                    expected: format!("array of length {len}"),
                    actual: describe(other),
                }),
            },

            Self::EmptyBody => match snapshot.body() {
                None => Ok(()),
                Some(body) => Err(HarnessError::FieldMismatch {
                    pointer: String::new(),
                    expected: "empty body".to_string(),
                    actual: body.to_string(),
                }),
            },
        }
    }
}

/// Evaluate assertions in order, stopping at the first failure.
pub fn check_all(assertions: &[Assertion], snapshot: &ResponseSnapshot) -> Result<(), HarnessError> {
    assertions.iter().try_for_each(|a| a.check(snapshot))
}

fn describe(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<missing>".to_string(),
    }
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
