use crate::domain::audit::{AuditEntry, NewAuditEntry};
use crate::domain::category::{CategoryChain, CategoryTree};
use crate::domain::path::CategoryPath;
use crate::domain::rules::RuleOverride;
use crate::repository::{CategoryReader, CategoryWriter, InMemoryRepository, RepositoryResult};

impl CategoryReader for InMemoryRepository {
    fn get_category_tree(&self) -> RepositoryResult<CategoryTree> {
        Ok(self.read().tree.clone())
    }

    fn get_category_chain(&self, path: &CategoryPath) -> RepositoryResult<Option<CategoryChain>> {
        Ok(self.read().tree.find_chain(path))
    }
}

impl CategoryWriter for InMemoryRepository {
    fn set_category_enabled(
        &self,
        path: &CategoryPath,
        is_enabled: bool,
        audit: NewAuditEntry,
    ) -> RepositoryResult<AuditEntry> {
        let reason = audit.reason.clone();
        self.mutate_node(path, audit, |node| node.set_enabled(is_enabled, &reason))
    }

    fn set_category_rule_override(
        &self,
        path: &CategoryPath,
        rule_override: RuleOverride,
        audit: NewAuditEntry,
    ) -> RepositoryResult<AuditEntry> {
        self.mutate_node(path, audit, |node| node.rule_override = rule_override)
    }
}
