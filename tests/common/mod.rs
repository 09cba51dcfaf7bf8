//! Helpers for integration tests.

use pushkind_taxonomy::Taxonomy;
use pushkind_taxonomy::forms::categories::{
    RuleOverrideForm, SetCategoryEnabledForm, SetCategoryRuleConfigForm,
};

/// Fresh engine over the reference tree, isolated from other tests.
pub fn taxonomy() -> Taxonomy {
    Taxonomy::seeded()
}

fn segment(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn status_form(path: [&str; 3], is_enabled: bool, reason: &str) -> SetCategoryEnabledForm {
    SetCategoryEnabledForm {
        main_code: path[0].to_string(),
        sub_code: segment(path[1]),
        sub_sub_code: segment(path[2]),
        is_enabled,
        reason: reason.to_string(),
        admin_name: "Test Admin".to_string(),
    }
}

pub fn rules_form(
    path: [&str; 3],
    rule_override: RuleOverrideForm,
    reason: &str,
) -> SetCategoryRuleConfigForm {
    SetCategoryRuleConfigForm {
        main_code: path[0].to_string(),
        sub_code: segment(path[1]),
        sub_sub_code: segment(path[2]),
        rule_override,
        reason: reason.to_string(),
        admin_name: String::new(),
    }
}
