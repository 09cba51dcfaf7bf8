use serde::{Deserialize, Serialize};

use crate::domain::types::{CashbackPercentage, CategoryType, RuleSource};

/// Sparse rule patch configured on a single node.
///
/// Every field is independent: `None` means "inherit from the parent", so an
/// explicit `Some(false)` is distinct from an unset value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleOverride {
    pub cashback_percentage: Option<CashbackPercentage>,
    pub cod_eligible: Option<bool>,
    pub return_eligible: Option<bool>,
    pub category_type: Option<CategoryType>,
}

/// Fully resolved rule bundle for a node. Derived, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRules {
    pub cashback_percentage: CashbackPercentage,
    pub cod_eligible: bool,
    pub return_eligible: bool,
    pub shipping_required: bool,
    pub is_physical: bool,
    pub category_type: CategoryType,
}

/// Level or policy that supplied each field of [`EffectiveRules`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRuleSources {
    pub cashback_percentage: RuleSource,
    pub cod_eligible: RuleSource,
    pub return_eligible: RuleSource,
    pub shipping_required: RuleSource,
    pub is_physical: RuleSource,
    pub category_type: RuleSource,
}

/// Effective rules together with their provenance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRuleResolution {
    pub rules: EffectiveRules,
    pub sources: EffectiveRuleSources,
}
