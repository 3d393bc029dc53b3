use serde_json::Value;

use crate::core::error::ParseError;

/// One user record, validated from a single JSON object in the API response.
/// Immutable after construction; a failed validation never yields a
/// partially populated record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique user ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Contact address, loosely validated (must contain `@`)
    pub email: String,
    /// `company.name` from the payload, "N/A" when absent
    pub company_name: String,
    /// `address.city` from the payload, "N/A" when absent
    pub city: String,
}

const OPTIONAL_PLACEHOLDER: &str = "N/A";

impl UserRecord {
    /// Validate one decoded JSON object into a record.
    ///
    /// `index` is the zero-based position of the object within the response
    /// array and is carried in every error so the offending entry can be
    /// located upstream.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, ParseError> {
        let obj = value
            .as_object()
            .ok_or(ParseError::NotAnObject { index })?;

        let id = match obj.get("id") {
            None => return Err(ParseError::MissingField { index, field: "id" }),
            Some(v) => v.as_u64().ok_or(ParseError::WrongType {
                index,
                field: "id",
                expected: "integer",
            })?,
        };

        let name = required_string(obj, index, "name")?;
        let username = required_string(obj, index, "username")?;

        let email = required_string(obj, index, "email")?;
        if !email.contains('@') {
            return Err(ParseError::InvalidEmail {
                index,
                value: email,
            });
        }

        // Nested company/address info is optional in the payload
        let company_name = nested_string(obj.get("company"), "name");
        let city = nested_string(obj.get("address"), "city");

        Ok(Self {
            id,
            name,
            username,
            email,
            company_name,
            city,
        })
    }
}

fn required_string(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ParseError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { index, field }),
        Some(v) => v
            .as_str()
            .map(str::to_owned)
            .ok_or(ParseError::WrongType {
                index,
                field,
                expected: "string",
            }),
    }
}

fn nested_string(parent: Option<&Value>, key: &str) -> String {
    parent
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or(OPTIONAL_PLACEHOLDER)
        .to_owned()
}

/// Parse the whole batch in response order. Aborts on the first malformed
/// record rather than skipping it; the returned error names the record
/// index and field.
pub fn parse_records(values: &[Value]) -> Result<Vec<UserRecord>, ParseError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| UserRecord::from_json(index, value))
        .collect()
}
