//! Materializes the tree and audit log into a read-only [`TaxonomySnapshot`].
//!
//! Projection is a pure function of the current state and is recomputed on
//! every read; nothing is cached.

use crate::domain::audit::{AuditEntry, sort_newest_first};
use crate::domain::category::{CategoryNode, CategoryTree};
use crate::domain::path::{join_codes, join_names};
use crate::domain::types::CategoryLevel;
use crate::dto::categories::{CategorySnapshot, TaxonomySnapshot};
use crate::resolver::availability::is_available;
use crate::resolver::resolve_effective_rules;

fn snapshot_node(
    main: &CategoryNode,
    sub: Option<&CategoryNode>,
    sub_sub: Option<&CategoryNode>,
    children: Vec<CategorySnapshot>,
) -> CategorySnapshot {
    let node = sub_sub.or(sub).unwrap_or(main);
    let level = match (sub, sub_sub) {
        (_, Some(_)) => CategoryLevel::SubSub,
        (Some(_), None) => CategoryLevel::Sub,
        (None, None) => CategoryLevel::Main,
    };
    let chain: Vec<&CategoryNode> = std::iter::once(main).chain(sub).chain(sub_sub).collect();
    let codes: Vec<&str> = chain.iter().map(|n| n.code.as_str()).collect();
    let names: Vec<&str> = chain.iter().map(|n| n.name.as_str()).collect();
    let resolution = resolve_effective_rules(main, sub, sub_sub);

    CategorySnapshot {
        code: node.code.clone(),
        full_code: join_codes(&codes),
        name: node.name.clone(),
        level,
        category_path: join_names(&names),
        is_enabled: node.is_enabled,
        is_available: is_available(main, sub, sub_sub),
        disabled_reason: node.disabled_reason.clone(),
        rule_override: node.rule_override,
        effective_rules: resolution.rules,
        effective_rule_sources: resolution.sources,
        children,
    }
}

/// Projects every node of `tree` and sorts `audit_log` newest first.
pub fn project(tree: &CategoryTree, audit_log: &[AuditEntry]) -> TaxonomySnapshot {
    let categories = tree
        .main_categories
        .iter()
        .map(|main| {
            let subs = main
                .children
                .iter()
                .map(|sub| {
                    let leaves = sub
                        .children
                        .iter()
                        .map(|leaf| {
                            snapshot_node(&main.node, Some(&sub.node), Some(&leaf.node), vec![])
                        })
                        .collect();
                    snapshot_node(&main.node, Some(&sub.node), None, leaves)
                })
                .collect();
            snapshot_node(&main.node, None, None, subs)
        })
        .collect();

    let mut audit_log = audit_log.to_vec();
    sort_newest_first(&mut audit_log);

    TaxonomySnapshot {
        categories,
        audit_log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::path::CategoryPath;
    use crate::domain::types::{AuditReason, CategoryType, RuleSource};
    use crate::seed::reference_tree;

    #[test]
    fn projects_every_node_with_codes_and_paths() {
        let snapshot = project(&reference_tree(), &[]);

        assert_eq!(snapshot.categories.len(), 5);
        let leaf = snapshot
            .find(&CategoryPath::leaf("GL-MOB", "SM", "AN"))
            .unwrap();
        assert_eq!(leaf.full_code, "GL-MOB-SM-AN");
        assert_eq!(
            leaf.category_path,
            "Mobiles & Tablets > Smartphones > Android Phones"
        );
        assert_eq!(leaf.level, CategoryLevel::SubSub);
        assert!(leaf.children.is_empty());
        assert_eq!(leaf.effective_rules.cashback_percentage, 5.0);
        assert_eq!(
            leaf.effective_rule_sources.cashback_percentage,
            RuleSource::SubSub
        );
    }

    #[test]
    fn sub_and_main_nodes_resolve_their_own_rules() {
        let snapshot = project(&reference_tree(), &[]);

        let sub = snapshot.find(&CategoryPath::sub("GL-MOB", "SM")).unwrap();
        assert_eq!(sub.effective_rules.cashback_percentage, 4.0);
        assert_eq!(sub.effective_rule_sources.cashback_percentage, RuleSource::Sub);

        let digital = snapshot.find(&CategoryPath::main("GL-DIG")).unwrap();
        assert_eq!(digital.effective_rules.category_type, CategoryType::Digital);
        assert!(!digital.effective_rules.shipping_required);
    }

    #[test]
    fn descendants_of_disabled_main_are_unavailable() {
        let mut tree = reference_tree();
        if let Some(node) = tree.find_node_mut(&CategoryPath::main("GL-HOM")) {
            node.disable(&AuditReason::new("inventory").unwrap());
        }

        let snapshot = project(&tree, &[]);
        let leaf = snapshot
            .find(&CategoryPath::leaf("GL-HOM", "KT", "CW"))
            .unwrap();

        assert!(leaf.is_enabled);
        assert!(!leaf.is_available);
        assert!(leaf.disabled_reason.is_none());
    }
}
