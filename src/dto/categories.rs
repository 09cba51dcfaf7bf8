use serde::{Deserialize, Serialize};

use crate::domain::audit::AuditEntry;
use crate::domain::category::CategoryChain;
use crate::domain::path::CategoryPath;
use crate::domain::rules::{EffectiveRuleSources, EffectiveRules, RuleOverride};
use crate::domain::types::CategoryLevel;
use crate::resolver::{resolve_availability, resolve_chain};

/// Read-only view of one node with its computed rules and availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySnapshot {
    pub code: String,
    pub full_code: String,
    pub name: String,
    pub level: CategoryLevel,
    pub category_path: String,
    /// The node's own flag.
    pub is_enabled: bool,
    /// The node and all of its ancestors are enabled.
    pub is_available: bool,
    pub disabled_reason: Option<String>,
    pub rule_override: RuleOverride,
    pub effective_rules: EffectiveRules,
    pub effective_rule_sources: EffectiveRuleSources,
    pub children: Vec<CategorySnapshot>,
}

/// The whole tree plus the audit log, newest entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomySnapshot {
    pub categories: Vec<CategorySnapshot>,
    pub audit_log: Vec<AuditEntry>,
}

impl TaxonomySnapshot {
    /// Finds the projected node addressed by `path`.
    pub fn find(&self, path: &CategoryPath) -> Option<&CategorySnapshot> {
        path.level()?;
        let mut nodes = &self.categories;
        let mut found = None;
        for code in path.codes() {
            let node = nodes.iter().find(|n| n.code == code)?;
            nodes = &node.children;
            found = Some(node);
        }
        found
    }
}

/// Fully specified leaf selection as consumed by storefront and cart screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    pub main_code: String,
    pub main_name: String,
    pub sub_code: String,
    pub sub_name: String,
    pub sub_sub_code: String,
    pub sub_sub_name: String,
    /// Dash-joined leaf code, e.g. `GL-MOB-SM-AN`.
    pub category_code: String,
    pub category_path: String,
    pub effective_rules: EffectiveRules,
    pub effective_rule_sources: EffectiveRuleSources,
    pub is_enabled: bool,
    pub disabled_reason: Option<String>,
}

impl ResolvedSelection {
    /// Builds a selection from a chain that reaches the Sub-Sub level.
    pub fn from_leaf_chain(chain: &CategoryChain) -> Option<Self> {
        let (sub, sub_sub) = (chain.sub.as_ref()?, chain.sub_sub.as_ref()?);
        let resolution = resolve_chain(chain);
        let availability = resolve_availability(chain);

        Some(Self {
            main_code: chain.main.code.clone(),
            main_name: chain.main.name.clone(),
            sub_code: sub.code.clone(),
            sub_name: sub.name.clone(),
            sub_sub_code: sub_sub.code.clone(),
            sub_sub_name: sub_sub.name.clone(),
            category_code: chain.full_code(),
            category_path: chain.path_label(),
            effective_rules: resolution.rules,
            effective_rule_sources: resolution.sources,
            is_enabled: availability.is_enabled,
            disabled_reason: availability.disabled_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::project;
    use crate::seed::reference_tree;

    #[test]
    fn find_walks_every_level() {
        let snapshot = project(&reference_tree(), &[]);

        let leaf = snapshot
            .find(&CategoryPath::leaf("GL-MOB", "SM", "AN"))
            .unwrap();
        assert_eq!(leaf.full_code, "GL-MOB-SM-AN");
        let sub = snapshot.find(&CategoryPath::sub("GL-MOB", "SM")).unwrap();
        assert_eq!(sub.level, CategoryLevel::Sub);
        assert!(snapshot.find(&CategoryPath::main("GL-XXX")).is_none());
    }

    #[test]
    fn find_rejects_sub_sub_code_without_sub() {
        let snapshot = project(&reference_tree(), &[]);

        let orphan = CategoryPath::from_segments("GL-MOB", None, Some("SM"));

        assert!(snapshot.find(&orphan).is_none());
    }
}
