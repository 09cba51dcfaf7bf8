use crate::dto::categories::TaxonomySnapshot;
use crate::projector::project;
use crate::repository::AuditReader;

use super::ServiceResult;

/// Projects the current tree and audit log.
pub fn show_snapshot<R>(repo: &R) -> ServiceResult<TaxonomySnapshot>
where
    R: AuditReader,
{
    let (tree, audit_log) = repo.get_tree_and_audit_log()?;
    Ok(project(&tree, &audit_log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    #[test]
    fn fresh_store_has_empty_audit_log() {
        let repo = InMemoryRepository::seeded();

        let snapshot = show_snapshot(&repo).unwrap();

        assert_eq!(snapshot.categories.len(), 5);
        assert!(snapshot.audit_log.is_empty());
    }
}
