use crate::domain::audit::NewAuditEntry;
use crate::domain::types::{AdminName, AuditAction};
use crate::forms::categories::{SetCategoryEnabledPayload, SetCategoryRuleConfigPayload};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Summary recorded for every rule replacement.
pub const RULES_UPDATED_SUMMARY: &str =
    "Updated cashback percentage, COD eligibility, return eligibility and category type.";

/// Enables or disables exactly one node.
///
/// Descendants keep their own flags; their availability follows from the
/// ancestor flags at read time.
pub fn set_category_enabled<R>(
    payload: SetCategoryEnabledPayload,
    default_admin: &AdminName,
    repo: &R,
) -> ServiceResult<String>
where
    R: CategoryReader + CategoryWriter,
{
    let chain = match repo.get_category_chain(&payload.path)? {
        Some(chain) => chain,
        None => {
            log::warn!("Category status update for unknown path {}", payload.path);
            return Err(ServiceError::NotFound(payload.path.full_code()));
        }
    };

    let state = if payload.is_enabled {
        "enabled"
    } else {
        "disabled"
    };
    let audit = NewAuditEntry {
        admin_name: payload
            .admin_name
            .unwrap_or_else(|| default_admin.clone()),
        reason: payload.reason,
        action: AuditAction::CategoryStatusUpdated,
        summary: format!("Category {state}: {}", chain.path_label()),
    };

    let entry = repo.set_category_enabled(&payload.path, payload.is_enabled, audit)?;
    log::info!(
        "{} {} {} by {}: {}",
        entry.id,
        entry.category_code,
        state,
        entry.admin_name,
        entry.reason
    );

    Ok(format!("Category {} {state}.", entry.category_code))
}

/// Replaces the whole rule override of exactly one node.
pub fn set_category_rule_config<R>(
    payload: SetCategoryRuleConfigPayload,
    default_admin: &AdminName,
    repo: &R,
) -> ServiceResult<String>
where
    R: CategoryReader + CategoryWriter,
{
    if repo.get_category_chain(&payload.path)?.is_none() {
        log::warn!("Category rules update for unknown path {}", payload.path);
        return Err(ServiceError::NotFound(payload.path.full_code()));
    }

    let audit = NewAuditEntry {
        admin_name: payload
            .admin_name
            .unwrap_or_else(|| default_admin.clone()),
        reason: payload.reason,
        action: AuditAction::CategoryRulesUpdated,
        summary: RULES_UPDATED_SUMMARY.to_string(),
    };

    let entry = repo.set_category_rule_override(&payload.path, payload.rule_override, audit)?;
    log::info!(
        "{} rules of {} replaced by {}: {:?}",
        entry.id,
        entry.category_code,
        entry.admin_name,
        payload.rule_override
    );

    Ok(format!("Category rules updated for {}.", entry.category_code))
}
