use serde::{Deserialize, Serialize};

use crate::domain::path::{CategoryPath, join_codes, join_names};
use crate::domain::rules::RuleOverride;
use crate::domain::types::{AuditReason, CategoryLevel};

/// Prefix stored in [`CategoryNode::disabled_reason`] when an admin disables a node.
pub const DISABLED_BY_ADMIN_PREFIX: &str = "Disabled by Admin: ";

/// Attributes shared by every level of the category tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Short identifier, unique among siblings only.
    pub code: String,
    pub name: String,
    pub is_enabled: bool,
    /// Set exactly when `is_enabled` is false.
    pub disabled_reason: Option<String>,
    pub rule_override: RuleOverride,
}

impl CategoryNode {
    /// Creates an enabled node with the given override.
    pub fn new(code: &str, name: &str, rule_override: RuleOverride) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            is_enabled: true,
            disabled_reason: None,
            rule_override,
        }
    }

    /// Re-enables the node and clears its disabled reason.
    pub fn enable(&mut self) {
        self.is_enabled = true;
        self.disabled_reason = None;
    }

    /// Disables the node recording the admin-supplied reason.
    pub fn disable(&mut self, reason: &AuditReason) {
        self.is_enabled = false;
        self.disabled_reason = Some(format!("{DISABLED_BY_ADMIN_PREFIX}{reason}"));
    }

    /// Applies an enabled/disabled transition.
    pub fn set_enabled(&mut self, is_enabled: bool, reason: &AuditReason) {
        if is_enabled {
            self.enable();
        } else {
            self.disable(reason);
        }
    }
}

/// Third-level (leaf) category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubSubCategory {
    #[serde(flatten)]
    pub node: CategoryNode,
}

/// Second-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubCategory {
    #[serde(flatten)]
    pub node: CategoryNode,
    pub children: Vec<SubSubCategory>,
}

/// Root-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainCategory {
    #[serde(flatten)]
    pub node: CategoryNode,
    pub children: Vec<SubCategory>,
}

impl MainCategory {
    pub fn child(&self, code: &str) -> Option<&SubCategory> {
        self.children.iter().find(|c| c.node.code == code)
    }

    fn child_mut(&mut self, code: &str) -> Option<&mut SubCategory> {
        self.children.iter_mut().find(|c| c.node.code == code)
    }
}

impl SubCategory {
    pub fn child(&self, code: &str) -> Option<&SubSubCategory> {
        self.children.iter().find(|c| c.node.code == code)
    }

    fn child_mut(&mut self, code: &str) -> Option<&mut SubSubCategory> {
        self.children.iter_mut().find(|c| c.node.code == code)
    }
}

/// The three-level Main → Sub → Sub-Sub tree.
///
/// Depth is fixed by the types: only [`SubCategory`] holds leaves and only
/// [`MainCategory`] holds sub categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryTree {
    pub main_categories: Vec<MainCategory>,
}

impl CategoryTree {
    pub fn new(main_categories: Vec<MainCategory>) -> Self {
        Self { main_categories }
    }

    pub fn main(&self, code: &str) -> Option<&MainCategory> {
        self.main_categories.iter().find(|m| m.node.code == code)
    }

    /// Resolves `path` into the chain of nodes from the root to the target.
    pub fn find_chain(&self, path: &CategoryPath) -> Option<CategoryChain> {
        path.level()?;
        let main = self.main(&path.main_code)?;
        let sub = match path.sub_code.as_deref() {
            Some(code) => Some(main.child(code)?),
            None => None,
        };
        let sub_sub = match (sub, path.sub_sub_code.as_deref()) {
            (Some(sub), Some(code)) => Some(sub.child(code)?),
            _ => None,
        };

        Some(CategoryChain {
            main: main.node.clone(),
            sub: sub.map(|s| s.node.clone()),
            sub_sub: sub_sub.map(|s| s.node.clone()),
        })
    }

    /// Mutable access to exactly the node addressed by `path`.
    pub fn find_node_mut(&mut self, path: &CategoryPath) -> Option<&mut CategoryNode> {
        let level = path.level()?;
        let main = self
            .main_categories
            .iter_mut()
            .find(|m| m.node.code == path.main_code)?;

        match level {
            CategoryLevel::Main => Some(&mut main.node),
            CategoryLevel::Sub => {
                let sub = main.child_mut(path.sub_code.as_deref()?)?;
                Some(&mut sub.node)
            }
            CategoryLevel::SubSub => {
                let sub = main.child_mut(path.sub_code.as_deref()?)?;
                let sub_sub = sub.child_mut(path.sub_sub_code.as_deref()?)?;
                Some(&mut sub_sub.node)
            }
        }
    }

    /// Total number of nodes across all levels.
    pub fn node_count(&self) -> usize {
        self.main_categories
            .iter()
            .map(|m| 1 + m.children.iter().map(|s| 1 + s.children.len()).sum::<usize>())
            .sum()
    }
}

/// Owned copy of the nodes from the root down to a resolved target.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChain {
    pub main: CategoryNode,
    pub sub: Option<CategoryNode>,
    pub sub_sub: Option<CategoryNode>,
}

impl CategoryChain {
    /// Level of the deepest node in the chain.
    pub fn level(&self) -> CategoryLevel {
        match (&self.sub, &self.sub_sub) {
            (_, Some(_)) => CategoryLevel::SubSub,
            (Some(_), None) => CategoryLevel::Sub,
            (None, None) => CategoryLevel::Main,
        }
    }

    /// Nodes from the root down to the target.
    pub fn nodes(&self) -> Vec<&CategoryNode> {
        std::iter::once(&self.main)
            .chain(self.sub.as_ref())
            .chain(self.sub_sub.as_ref())
            .collect()
    }

    /// Dash-joined code, e.g. `GL-MOB-SM-AN`.
    pub fn full_code(&self) -> String {
        let codes: Vec<&str> = self.nodes().iter().map(|n| n.code.as_str()).collect();
        join_codes(&codes)
    }

    /// Human-readable path, e.g. `Mobiles & Tablets > Smartphones`.
    pub fn path_label(&self) -> String {
        let names: Vec<&str> = self.nodes().iter().map(|n| n.name.as_str()).collect();
        join_names(&names)
    }
}
