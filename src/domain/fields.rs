use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;

/// The four inputs a contact card collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    MobileNumber,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::MobileNumber,
        Field::Email,
    ];

    /// Fixed key the field is stored under. Stored data written by older
    /// builds keeps working as long as these never change.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::MobileNumber => "mobileNumber",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::MobileNumber => "Mobile number",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "mobileNumber" => Ok(Field::MobileNumber),
            "email" => Ok(Field::Email),
            other => Err(AppError::Validation(format!(
                "Unrecognized field name: '{}'",
                other
            ))),
        }
    }
}

/// Current values of the four fields. Empty string means "not filled in".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::MobileNumber => &self.mobile_number,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::MobileNumber => self.mobile_number = value,
            Field::Email => self.email = value,
        }
    }
}

/// Per-field validation messages. An entry is present only when the field
/// failed its rule.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::MobileNumber => self.mobile_number.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: String) {
        match field {
            Field::FirstName => self.first_name = Some(message),
            Field::LastName => self.last_name = Some(message),
            Field::MobileNumber => self.mobile_number = Some(message),
            Field::Email => self.email = Some(message),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn len(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    /// Present entries in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }
}
