use serde::{Deserialize, Serialize};

use crate::domain::category::{CategoryChain, CategoryNode};

/// Whether a node can be used and, if not, why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub is_enabled: bool,
    pub disabled_reason: Option<String>,
}

/// A node is usable only when it and every ancestor are enabled.
pub fn is_available(
    main: &CategoryNode,
    sub: Option<&CategoryNode>,
    sub_sub: Option<&CategoryNode>,
) -> bool {
    main.is_enabled && sub.is_none_or(|n| n.is_enabled) && sub_sub.is_none_or(|n| n.is_enabled)
}

/// First disabled reason walking from the node itself up to the root.
pub fn disabled_reason(
    main: &CategoryNode,
    sub: Option<&CategoryNode>,
    sub_sub: Option<&CategoryNode>,
) -> Option<String> {
    sub_sub
        .into_iter()
        .chain(sub)
        .chain(std::iter::once(main))
        .find_map(|n| n.disabled_reason.clone())
}

/// Availability of the deepest node in `chain`.
pub fn resolve_availability(chain: &CategoryChain) -> Availability {
    let (main, sub, sub_sub) = (&chain.main, chain.sub.as_ref(), chain.sub_sub.as_ref());
    let is_enabled = is_available(main, sub, sub_sub);
    Availability {
        is_enabled,
        disabled_reason: if is_enabled {
            None
        } else {
            disabled_reason(main, sub, sub_sub)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::RuleOverride;
    use crate::domain::types::AuditReason;

    fn chain() -> CategoryChain {
        CategoryChain {
            main: CategoryNode::new("GL-MOB", "Mobiles", RuleOverride::default()),
            sub: Some(CategoryNode::new("SM", "Smartphones", RuleOverride::default())),
            sub_sub: Some(CategoryNode::new("AN", "Android", RuleOverride::default())),
        }
    }

    #[test]
    fn enabled_chain_is_available() {
        let availability = resolve_availability(&chain());
        assert!(availability.is_enabled);
        assert!(availability.disabled_reason.is_none());
    }

    #[test]
    fn disabled_ancestor_blocks_descendants() {
        let mut chain = chain();
        chain.main.disable(&AuditReason::new("seasonal pause").unwrap());

        let availability = resolve_availability(&chain);

        assert!(!availability.is_enabled);
        assert!(chain.sub_sub.as_ref().unwrap().is_enabled);
        assert_eq!(
            availability.disabled_reason.as_deref(),
            Some("Disabled by Admin: seasonal pause")
        );
    }

    #[test]
    fn own_reason_takes_priority() {
        let mut chain = chain();
        chain.main.disable(&AuditReason::new("main").unwrap());
        if let Some(leaf) = chain.sub_sub.as_mut() {
            leaf.disable(&AuditReason::new("leaf").unwrap());
        }

        let availability = resolve_availability(&chain);

        assert_eq!(
            availability.disabled_reason.as_deref(),
            Some("Disabled by Admin: leaf")
        );
    }

    #[test]
    fn main_availability_is_its_own_flag() {
        let mut chain = chain();
        if let Some(sub) = chain.sub.as_mut() {
            sub.disable(&AuditReason::new("sub").unwrap());
        }
        assert!(is_available(&chain.main, None, None));
        assert!(!is_available(&chain.main, chain.sub.as_ref(), None));
    }
}
