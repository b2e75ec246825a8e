use std::cmp::Ordering;
use std::fmt;

use crate::dataset::EmployeeRecord;
use crate::utils;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Department,
    Role,
    Email,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::FirstName,
        SortField::LastName,
        SortField::Department,
        SortField::Role,
        SortField::Email,
    ];

    /// Accepts a column label (`First name`) or a field key (`first_name`).
    /// Anything unrecognized, `Office ext` included, sorts by id.
    pub fn from_label(label: &str) -> Self {
        match utils::normalize_field_label(label).as_str() {
            "first_name" => Self::FirstName,
            "last_name" => Self::LastName,
            "department" => Self::Department,
            "role" => Self::Role,
            "email" => Self::Email,
            _ => Self::Id,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Department => "department",
            Self::Role => "role",
            Self::Email => "email",
        }
    }

    pub fn label(self) -> String {
        utils::humanize_field_name(self.key())
    }

    pub fn compare(self, a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FirstName => a.first_name.cmp(&b.first_name),
            Self::LastName => a.last_name.cmp(&b.last_name),
            Self::Department => a.department.cmp(&b.department),
            Self::Role => a.role.cmp(&b.role),
            Self::Email => a.email.cmp(&b.email),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    pub fn value(self, record: &EmployeeRecord) -> &str {
        match self {
            Self::First => &record.first_name,
            Self::Last => &record.last_name,
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first name"),
            Self::Last => f.write_str("last name"),
        }
    }
}
