//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! admin input, percentages and tree levels are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Cashback percentage must be in [0, 100].
    #[error("cashback percentage must be between 0 and 100")]
    CashbackOutOfRange,
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

non_empty_string_newtype!(
    AdminName,
    "Name of the administrator performing a mutation.",
    "admin name"
);
non_empty_string_newtype!(
    AuditReason,
    "Mandatory free-text justification recorded with every mutation.",
    "reason"
);

impl AdminName {
    /// Name recorded when neither the command nor the config names an admin.
    pub fn placeholder() -> Self {
        Self(crate::DEFAULT_ADMIN_NAME.to_string())
    }

    /// Uses `value` when it has visible characters, otherwise `fallback`.
    pub fn or_default(value: &str, fallback: &AdminName) -> Self {
        Self::new(value).unwrap_or_else(|_| fallback.clone())
    }
}

/// Cashback percentage in the inclusive range [0, 100].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct CashbackPercentage(f64);

impl CashbackPercentage {
    /// Zero cashback, used when no tree level configures a value.
    pub const ZERO: Self = Self(0.0);

    /// Constructs a validated cashback percentage.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::CashbackOutOfRange)
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for CashbackPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<f64> for CashbackPercentage {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CashbackPercentage> for f64 {
    fn from(value: CashbackPercentage) -> Self {
        value.0
    }
}

impl PartialEq<f64> for CashbackPercentage {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

/// Logistics class of a category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryType {
    Physical,
    Digital,
}

impl CategoryType {
    /// Display representation used in snapshots and admin forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Digital => "Digital",
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Depth of a node in the Main → Sub → Sub-Sub tree.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryLevel {
    Main,
    Sub,
    #[serde(rename = "Sub-Sub")]
    SubSub,
}

impl CategoryLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Sub => "Sub",
            Self::SubSub => "Sub-Sub",
        }
    }
}

impl Display for CategoryLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tree level or policy that supplied an effective rule value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RuleSource {
    Main,
    Sub,
    #[serde(rename = "Sub-Sub")]
    SubSub,
    #[serde(rename = "Digital Override")]
    DigitalOverride,
}

impl RuleSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Sub => "Sub",
            Self::SubSub => "Sub-Sub",
            Self::DigitalOverride => "Digital Override",
        }
    }
}

impl From<CategoryLevel> for RuleSource {
    fn from(value: CategoryLevel) -> Self {
        match value {
            CategoryLevel::Main => Self::Main,
            CategoryLevel::Sub => Self::Sub,
            CategoryLevel::SubSub => Self::SubSub,
        }
    }
}

impl Display for RuleSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of administrative mutation recorded in the audit log.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AuditAction {
    #[serde(rename = "Category Status Updated")]
    CategoryStatusUpdated,
    #[serde(rename = "Category Rules Updated")]
    CategoryRulesUpdated,
}

impl AuditAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CategoryStatusUpdated => "Category Status Updated",
            Self::CategoryRulesUpdated => "Category Rules Updated",
        }
    }
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monotonic identifier of an audit entry, unique within a store.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AuditEntryId(u64);

impl AuditEntryId {
    /// Identifier handed to the first entry of a fresh log.
    pub const FIRST: Self = Self(1);

    /// Returns the identifier following `self`.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw `u64` backing this identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for AuditEntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AUD-{:05}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_reasons() {
        let value = AuditReason::new("  seasonal pause  ").unwrap();
        assert_eq!(value.as_str(), "seasonal pause");
    }

    #[test]
    fn rejects_whitespace_reason() {
        let err = AuditReason::new(" \t ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("reason"));
    }

    #[test]
    fn blank_admin_name_falls_back() {
        let fallback = AdminName::new("Ops").unwrap();
        assert_eq!(AdminName::or_default("   ", &fallback), "Ops");
        assert_eq!(AdminName::or_default(" Olga ", &fallback), "Olga");
    }

    #[test]
    fn placeholder_is_a_valid_admin_name() {
        let placeholder = AdminName::placeholder();
        assert_eq!(AdminName::new(placeholder.as_str()), Ok(placeholder));
    }

    #[test]
    fn validates_cashback_range() {
        assert!(CashbackPercentage::new(0.0).is_ok());
        assert!(CashbackPercentage::new(100.0).is_ok());
        assert_eq!(
            CashbackPercentage::new(150.0).unwrap_err(),
            TypeConstraintError::CashbackOutOfRange
        );
        assert!(CashbackPercentage::new(-0.5).is_err());
        assert!(CashbackPercentage::new(f64::NAN).is_err());
    }

    #[test]
    fn cashback_deserialization_is_checked() {
        let ok: CashbackPercentage = serde_json::from_str("12.5").unwrap();
        assert_eq!(ok, 12.5);
        assert!(serde_json::from_str::<CashbackPercentage>("101").is_err());
    }

    #[test]
    fn enums_serialize_to_display_strings() {
        assert_eq!(
            serde_json::to_value(CategoryLevel::SubSub).unwrap(),
            serde_json::json!("Sub-Sub")
        );
        assert_eq!(
            serde_json::to_value(RuleSource::DigitalOverride).unwrap(),
            serde_json::json!("Digital Override")
        );
        assert_eq!(
            serde_json::to_value(AuditAction::CategoryRulesUpdated).unwrap(),
            serde_json::json!("Category Rules Updated")
        );
    }

    #[test]
    fn audit_ids_increase() {
        let second = AuditEntryId::FIRST.next();
        assert!(second > AuditEntryId::FIRST);
        assert_eq!(second.to_string(), "AUD-00002");
    }
}
