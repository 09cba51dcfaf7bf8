use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::domain::audit::{AuditEntry, NewAuditEntry};
use crate::domain::category::{CategoryChain, CategoryNode, CategoryTree};
use crate::domain::path::CategoryPath;
use crate::domain::rules::RuleOverride;
use crate::domain::types::AuditEntryId;
use crate::seed;

pub mod audit;
pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Mutable state guarded by the repository lock.
#[derive(Debug)]
struct TaxonomyState {
    tree: CategoryTree,
    audit_log: Vec<AuditEntry>,
    next_audit_id: AuditEntryId,
}

/// In-memory category tree store and audit log.
///
/// Clones share the same state, so one instance can be handed to every
/// consumer. Each write holds the lock for the whole node mutation plus audit
/// append.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    state: Arc<RwLock<TaxonomyState>>,
}

impl InMemoryRepository {
    /// Create a repository owning `tree` and an empty audit log.
    pub fn new(tree: CategoryTree) -> Self {
        log::debug!("Category store created with {} nodes", tree.node_count());
        Self {
            state: Arc::new(RwLock::new(TaxonomyState {
                tree,
                audit_log: Vec::new(),
                next_audit_id: AuditEntryId::FIRST,
            })),
        }
    }

    /// Create a repository holding the compiled-in reference tree.
    pub fn seeded() -> Self {
        Self::new(seed::reference_tree())
    }

    // Writers never leave the state half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, TaxonomyState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TaxonomyState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutates exactly the node at `path` and appends the audit entry under a
    /// single write guard.
    fn mutate_node<F>(
        &self,
        path: &CategoryPath,
        audit: NewAuditEntry,
        mutate: F,
    ) -> RepositoryResult<AuditEntry>
    where
        F: FnOnce(&mut CategoryNode),
    {
        let mut state = self.write();

        let chain = state
            .tree
            .find_chain(path)
            .ok_or_else(|| RepositoryError::NotFound(path.full_code()))?;
        let node = state
            .tree
            .find_node_mut(path)
            .ok_or_else(|| RepositoryError::NotFound(path.full_code()))?;
        mutate(node);

        // Stamped under the guard so newer ids never carry older timestamps.
        let now = Utc::now();
        let created_at = state
            .audit_log
            .last()
            .map_or(now, |last| now.max(last.created_at));
        let id = state.next_audit_id;
        state.next_audit_id = id.next();
        let entry = audit.into_entry(
            id,
            created_at,
            chain.level(),
            chain.full_code(),
            chain.path_label(),
        );
        state.audit_log.push(entry.clone());

        Ok(entry)
    }
}

/// Read-only operations over the category tree.
pub trait CategoryReader {
    /// Return a copy of the whole tree.
    fn get_category_tree(&self) -> RepositoryResult<CategoryTree>;
    /// Resolve a path into the chain of nodes from the root to the target.
    fn get_category_chain(&self, path: &CategoryPath) -> RepositoryResult<Option<CategoryChain>>;
}

/// Single-node mutations. Every write appends exactly one audit entry.
pub trait CategoryWriter {
    /// Set the enabled flag of the node at `path`.
    fn set_category_enabled(
        &self,
        path: &CategoryPath,
        is_enabled: bool,
        audit: NewAuditEntry,
    ) -> RepositoryResult<AuditEntry>;
    /// Replace the whole rule override of the node at `path`.
    fn set_category_rule_override(
        &self,
        path: &CategoryPath,
        rule_override: RuleOverride,
        audit: NewAuditEntry,
    ) -> RepositoryResult<AuditEntry>;
}

/// Read access to the append-only audit log.
pub trait AuditReader {
    /// All entries in insertion order.
    fn list_audit_entries(&self) -> RepositoryResult<Vec<AuditEntry>>;
    /// Copies of the tree and the audit log taken under one read guard, so
    /// every node change is paired with its audit entry.
    fn get_tree_and_audit_log(&self) -> RepositoryResult<(CategoryTree, Vec<AuditEntry>)>;
}
