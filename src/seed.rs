//! Compiled-in reference taxonomy loaded at startup.

use crate::domain::category::{
    CategoryNode, CategoryTree, MainCategory, SubCategory, SubSubCategory,
};
use crate::domain::path::CategoryPath;
use crate::domain::rules::RuleOverride;
use crate::domain::types::{CashbackPercentage, CategoryType};
use crate::resolver::DIGITAL_MAIN_CODE;

/// Leaf returned when no other selection applies.
pub fn default_selection_path() -> CategoryPath {
    CategoryPath::leaf("GL-MOB", "SM", "AN")
}

fn cashback(value: f64) -> Option<CashbackPercentage> {
    CashbackPercentage::new(value).ok()
}

fn rules(
    cashback_percentage: Option<f64>,
    cod_eligible: Option<bool>,
    return_eligible: Option<bool>,
    category_type: Option<CategoryType>,
) -> RuleOverride {
    RuleOverride {
        cashback_percentage: cashback_percentage.and_then(cashback),
        cod_eligible,
        return_eligible,
        category_type,
    }
}

fn inherit() -> RuleOverride {
    RuleOverride::default()
}

fn main_category(
    code: &str,
    name: &str,
    rule_override: RuleOverride,
    children: Vec<SubCategory>,
) -> MainCategory {
    MainCategory {
        node: CategoryNode::new(code, name, rule_override),
        children,
    }
}

fn sub_category(
    code: &str,
    name: &str,
    rule_override: RuleOverride,
    children: Vec<SubSubCategory>,
) -> SubCategory {
    SubCategory {
        node: CategoryNode::new(code, name, rule_override),
        children,
    }
}

fn leaf(code: &str, name: &str, rule_override: RuleOverride) -> SubSubCategory {
    SubSubCategory {
        node: CategoryNode::new(code, name, rule_override),
    }
}

/// Five main categories with two sub and two sub-sub categories each.
pub fn reference_tree() -> CategoryTree {
    use CategoryType::{Digital, Physical};

    CategoryTree::new(vec![
        main_category(
            "GL-MOB",
            "Mobiles & Tablets",
            rules(Some(5.0), Some(true), None, None),
            vec![
                sub_category(
                    "SM",
                    "Smartphones",
                    rules(Some(4.0), None, None, None),
                    vec![
                        leaf("AN", "Android Phones", rules(Some(5.0), None, None, None)),
                        leaf("IO", "iOS Phones", rules(Some(3.0), None, Some(false), None)),
                    ],
                ),
                sub_category(
                    "TB",
                    "Tablets",
                    inherit(),
                    vec![
                        leaf("AT", "Android Tablets", inherit()),
                        leaf("IP", "iPads", rules(Some(2.5), None, None, None)),
                    ],
                ),
            ],
        ),
        main_category(
            "GL-ELE",
            "Electronics",
            rules(Some(3.0), Some(true), Some(true), Some(Physical)),
            vec![
                sub_category(
                    "AU",
                    "Audio",
                    inherit(),
                    vec![
                        leaf("HP", "Headphones", rules(Some(6.0), None, None, None)),
                        leaf("SP", "Speakers", inherit()),
                    ],
                ),
                sub_category(
                    "CM",
                    "Computers",
                    rules(Some(2.0), Some(false), None, None),
                    vec![
                        leaf("LT", "Laptops", inherit()),
                        leaf("AC", "Computer Accessories", rules(None, Some(true), None, None)),
                    ],
                ),
            ],
        ),
        main_category(
            "GL-FAS",
            "Fashion",
            rules(Some(8.0), Some(true), Some(true), None),
            vec![
                sub_category(
                    "MN",
                    "Men",
                    inherit(),
                    vec![
                        leaf("SH", "Shirts", inherit()),
                        leaf("FW", "Footwear", rules(Some(10.0), None, None, None)),
                    ],
                ),
                sub_category(
                    "WM",
                    "Women",
                    rules(Some(9.0), None, None, None),
                    vec![
                        leaf("DR", "Dresses", inherit()),
                        leaf("IW", "Innerwear", rules(None, None, Some(false), None)),
                    ],
                ),
            ],
        ),
        main_category(
            "GL-HOM",
            "Home & Kitchen",
            inherit(),
            vec![
                sub_category(
                    "KT",
                    "Kitchen",
                    rules(Some(4.0), None, None, None),
                    vec![
                        leaf("CW", "Cookware", inherit()),
                        leaf("AP", "Small Appliances", rules(None, Some(false), None, None)),
                    ],
                ),
                sub_category(
                    "FR",
                    "Furniture",
                    rules(None, Some(false), Some(false), None),
                    vec![
                        leaf("LR", "Living Room", inherit()),
                        leaf("BD", "Bedroom", rules(Some(1.5), None, None, None)),
                    ],
                ),
            ],
        ),
        main_category(
            DIGITAL_MAIN_CODE,
            "Digital Products",
            rules(Some(2.0), Some(false), Some(false), Some(Digital)),
            vec![
                sub_category(
                    "GC",
                    "Gift Cards",
                    inherit(),
                    vec![
                        leaf("EC", "E-Gift Cards", rules(Some(1.0), None, None, None)),
                        leaf("GM", "Gaming Cards", inherit()),
                    ],
                ),
                sub_category(
                    "SW",
                    "Software",
                    rules(Some(3.0), None, None, None),
                    vec![
                        leaf("OS", "Operating Systems", inherit()),
                        leaf("AV", "Antivirus", inherit()),
                    ],
                ),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tree_is_five_by_two_by_two() {
        let tree = reference_tree();
        assert_eq!(tree.main_categories.len(), 5);
        for main in &tree.main_categories {
            assert_eq!(main.children.len(), 2, "{}", main.node.code);
            for sub in &main.children {
                assert_eq!(sub.children.len(), 2, "{}", sub.node.code);
            }
        }
        assert_eq!(tree.node_count(), 35);
    }

    #[test]
    fn seed_overrides_are_kept() {
        let tree = reference_tree();
        let chain = tree
            .find_chain(&CategoryPath::leaf("GL-MOB", "SM", "AN"))
            .unwrap();
        assert_eq!(
            chain.main.rule_override.cashback_percentage.map(|c| c.get()),
            Some(5.0)
        );
        assert_eq!(chain.main.rule_override.cod_eligible, Some(true));
        assert_eq!(
            chain.sub.unwrap().rule_override.cashback_percentage.map(|c| c.get()),
            Some(4.0)
        );
        let leaf = chain.sub_sub.unwrap().rule_override;
        assert_eq!(leaf.cashback_percentage.map(|c| c.get()), Some(5.0));
        assert!(leaf.cod_eligible.is_none());
        assert!(leaf.return_eligible.is_none());
        assert!(leaf.category_type.is_none());
    }

    #[test]
    fn default_selection_exists() {
        assert!(reference_tree().find_chain(&default_selection_path()).is_some());
    }
}
