use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::path::CategoryPath;
use crate::domain::rules::RuleOverride;
use crate::domain::types::{
    AdminName, AuditReason, CashbackPercentage, CategoryType, TypeConstraintError,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCategoryEnabledForm {
    pub main_code: String,
    #[serde(default)]
    pub sub_code: Option<String>,
    #[serde(default)]
    pub sub_sub_code: Option<String>,
    pub is_enabled: bool,
    pub reason: String,
    #[serde(default)]
    pub admin_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetCategoryEnabledPayload {
    pub path: CategoryPath,
    pub is_enabled: bool,
    pub reason: AuditReason,
    /// `None` when the form carried a blank name.
    pub admin_name: Option<AdminName>,
}

#[derive(Debug, Error)]
pub enum SetCategoryEnabledFormError {
    #[error("Category status form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for SetCategoryEnabledFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SetCategoryEnabledForm> for SetCategoryEnabledPayload {
    type Error = SetCategoryEnabledFormError;

    fn try_from(value: SetCategoryEnabledForm) -> Result<Self, Self::Error> {
        let reason = AuditReason::new(value.reason)?;

        Ok(Self {
            path: CategoryPath::from_segments(
                &value.main_code,
                value.sub_code.as_deref(),
                value.sub_sub_code.as_deref(),
            ),
            is_enabled: value.is_enabled,
            reason,
            admin_name: AdminName::new(value.admin_name).ok(),
        })
    }
}

/// Sparse rule patch as submitted by the admin UI.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RuleOverrideForm {
    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "cashback percentage must be between 0 and 100"
    ))]
    #[serde(default)]
    pub cashback_percentage: Option<f64>,
    #[serde(default)]
    pub cod_eligible: Option<bool>,
    #[serde(default)]
    pub return_eligible: Option<bool>,
    #[serde(default)]
    pub category_type: Option<CategoryType>,
}

impl TryFrom<RuleOverrideForm> for RuleOverride {
    type Error = TypeConstraintError;

    fn try_from(value: RuleOverrideForm) -> Result<Self, Self::Error> {
        Ok(Self {
            cashback_percentage: value
                .cashback_percentage
                .map(CashbackPercentage::new)
                .transpose()?,
            cod_eligible: value.cod_eligible,
            return_eligible: value.return_eligible,
            category_type: value.category_type,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetCategoryRuleConfigForm {
    pub main_code: String,
    #[serde(default)]
    pub sub_code: Option<String>,
    #[serde(default)]
    pub sub_sub_code: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub rule_override: RuleOverrideForm,
    pub reason: String,
    #[serde(default)]
    pub admin_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetCategoryRuleConfigPayload {
    pub path: CategoryPath,
    pub rule_override: RuleOverride,
    pub reason: AuditReason,
    /// `None` when the form carried a blank name.
    pub admin_name: Option<AdminName>,
}

#[derive(Debug, Error)]
pub enum SetCategoryRuleConfigFormError {
    #[error("Category rules form validation failed: {0}")]
    Validation(String),
    #[error("Category rules form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SetCategoryRuleConfigFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SetCategoryRuleConfigFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SetCategoryRuleConfigForm> for SetCategoryRuleConfigPayload {
    type Error = SetCategoryRuleConfigFormError;

    fn try_from(value: SetCategoryRuleConfigForm) -> Result<Self, Self::Error> {
        // The reason is checked before the rule values.
        let reason = AuditReason::new(value.reason.as_str())?;
        value.validate()?;

        Ok(Self {
            path: CategoryPath::from_segments(
                &value.main_code,
                value.sub_code.as_deref(),
                value.sub_sub_code.as_deref(),
            ),
            rule_override: value.rule_override.try_into()?,
            reason,
            admin_name: AdminName::new(value.admin_name).ok(),
        })
    }
}
