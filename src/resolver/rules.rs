//! Effective rule resolution with upward inheritance and the Digital override.

use crate::domain::category::{CategoryChain, CategoryNode};
use crate::domain::rules::{
    EffectiveRuleResolution, EffectiveRuleSources, EffectiveRules, RuleOverride,
};
use crate::domain::types::{CashbackPercentage, CategoryLevel, CategoryType, RuleSource};

/// Main category code reserved for digital products.
pub const DIGITAL_MAIN_CODE: &str = "GL-DIG";

const DEFAULT_COD_ELIGIBLE: bool = true;
const DEFAULT_RETURN_ELIGIBLE: bool = true;
const DEFAULT_CATEGORY_TYPE: CategoryType = CategoryType::Physical;

/// Returns the first configured value walking from the most specific level
/// up. Unset everywhere yields `default` attributed to the last level
/// examined, which is always Main.
fn inherit<T>(
    levels: &[(CategoryLevel, &RuleOverride)],
    field: impl Fn(&RuleOverride) -> Option<T>,
    default: T,
) -> (T, RuleSource) {
    levels
        .iter()
        .find_map(|(level, rule_override)| {
            field(rule_override).map(|value| (value, RuleSource::from(*level)))
        })
        .unwrap_or((default, RuleSource::Main))
}

/// Computes the effective rules of the deepest supplied node.
///
/// Digital categories (anything under [`DIGITAL_MAIN_CODE`] or resolving to
/// [`CategoryType::Digital`]) lose COD, return and shipping eligibility no
/// matter what the lower levels configure. Cashback is never forced.
pub fn resolve_effective_rules(
    main: &CategoryNode,
    sub: Option<&CategoryNode>,
    sub_sub: Option<&CategoryNode>,
) -> EffectiveRuleResolution {
    let mut levels = Vec::with_capacity(3);
    if let Some(node) = sub_sub {
        levels.push((CategoryLevel::SubSub, &node.rule_override));
    }
    if let Some(node) = sub {
        levels.push((CategoryLevel::Sub, &node.rule_override));
    }
    levels.push((CategoryLevel::Main, &main.rule_override));

    let (cashback_percentage, cashback_source) =
        inherit(&levels, |o| o.cashback_percentage, CashbackPercentage::ZERO);
    let (cod_eligible, cod_source) = inherit(&levels, |o| o.cod_eligible, DEFAULT_COD_ELIGIBLE);
    let (return_eligible, return_source) =
        inherit(&levels, |o| o.return_eligible, DEFAULT_RETURN_ELIGIBLE);
    let (category_type, type_source) =
        inherit(&levels, |o| o.category_type, DEFAULT_CATEGORY_TYPE);

    if main.code == DIGITAL_MAIN_CODE || category_type == CategoryType::Digital {
        return EffectiveRuleResolution {
            rules: EffectiveRules {
                cashback_percentage,
                cod_eligible: false,
                return_eligible: false,
                shipping_required: false,
                is_physical: false,
                category_type: CategoryType::Digital,
            },
            sources: EffectiveRuleSources {
                cashback_percentage: cashback_source,
                cod_eligible: RuleSource::DigitalOverride,
                return_eligible: RuleSource::DigitalOverride,
                shipping_required: RuleSource::DigitalOverride,
                is_physical: RuleSource::DigitalOverride,
                category_type: RuleSource::DigitalOverride,
            },
        };
    }

    EffectiveRuleResolution {
        rules: EffectiveRules {
            cashback_percentage,
            cod_eligible,
            return_eligible,
            shipping_required: true,
            is_physical: true,
            category_type: CategoryType::Physical,
        },
        sources: EffectiveRuleSources {
            cashback_percentage: cashback_source,
            cod_eligible: cod_source,
            return_eligible: return_source,
            shipping_required: type_source,
            is_physical: type_source,
            category_type: type_source,
        },
    }
}

/// [`resolve_effective_rules`] for an already resolved chain.
pub fn resolve_chain(chain: &CategoryChain) -> EffectiveRuleResolution {
    resolve_effective_rules(&chain.main, chain.sub.as_ref(), chain.sub_sub.as_ref())
}
