use crate::domain::audit::AuditEntry;
use crate::domain::category::CategoryTree;
use crate::repository::{AuditReader, InMemoryRepository, RepositoryResult};

impl AuditReader for InMemoryRepository {
    fn list_audit_entries(&self) -> RepositoryResult<Vec<AuditEntry>> {
        Ok(self.read().audit_log.clone())
    }

    fn get_tree_and_audit_log(&self) -> RepositoryResult<(CategoryTree, Vec<AuditEntry>)> {
        let state = self.read();
        Ok((state.tree.clone(), state.audit_log.clone()))
    }
}
