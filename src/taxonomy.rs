//! Query and command interface consumed by UI and admin layers.

use crate::config::TaxonomyConfig;
use crate::domain::path::CategoryPath;
use crate::domain::types::AdminName;
use crate::dto::categories::{ResolvedSelection, TaxonomySnapshot};
use crate::dto::command::CommandResult;
use crate::forms::categories::{
    SetCategoryEnabledForm, SetCategoryEnabledPayload, SetCategoryRuleConfigForm,
    SetCategoryRuleConfigPayload,
};
use crate::repository::{AuditReader, CategoryReader, CategoryWriter, InMemoryRepository};
use crate::services::{ServiceError, ServiceResult, categories, selection, snapshot};
use crate::subscriptions::{Subscribers, Subscription};

/// Category rule engine over an injected store.
///
/// Commands run to completion before subscribers are notified. Callers on
/// several threads share one store through cloned repositories; each command
/// is applied under the store's write lock.
pub struct Taxonomy<R = InMemoryRepository> {
    repo: R,
    subscribers: Subscribers,
    default_admin: AdminName,
    default_selection: CategoryPath,
}

impl Taxonomy<InMemoryRepository> {
    /// Engine over the compiled-in reference tree with default settings.
    pub fn seeded() -> Self {
        Self::new(InMemoryRepository::seeded(), &TaxonomyConfig::default())
    }
}

impl<R> Taxonomy<R>
where
    R: CategoryReader + CategoryWriter + AuditReader,
{
    pub fn new(repo: R, config: &TaxonomyConfig) -> Self {
        Self {
            repo,
            subscribers: Subscribers::new(),
            default_admin: config.default_admin(),
            default_selection: config.default_selection_path(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Full tree with effective rules plus the audit log, newest first.
    pub fn get_snapshot(&self) -> ServiceResult<TaxonomySnapshot> {
        snapshot::show_snapshot(&self.repo)
    }

    /// Calls `listener` after every successful command.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn resolve_selection(
        &self,
        main_code: &str,
        sub_code: &str,
        sub_sub_code: &str,
    ) -> ServiceResult<ResolvedSelection> {
        selection::resolve_selection(
            &CategoryPath::leaf(main_code, sub_code, sub_sub_code),
            &self.repo,
        )
    }

    pub fn resolve_selection_by_category_code(
        &self,
        code: &str,
    ) -> ServiceResult<ResolvedSelection> {
        selection::resolve_selection_by_category_code(code, &self.repo)
    }

    pub fn resolve_selection_from_legacy_category(
        &self,
        name: &str,
    ) -> ServiceResult<ResolvedSelection> {
        selection::resolve_selection_from_legacy_category(
            name,
            &self.default_selection,
            &self.repo,
        )
    }

    pub fn get_default_selection(&self) -> ServiceResult<ResolvedSelection> {
        selection::resolve_selection(&self.default_selection, &self.repo)
    }

    /// Availability of a fully specified leaf; unknown leaves are unavailable.
    pub fn is_selection_enabled(
        &self,
        main_code: &str,
        sub_code: &str,
        sub_sub_code: &str,
    ) -> bool {
        let path = CategoryPath::leaf(main_code, sub_code, sub_sub_code);
        selection::is_selection_enabled(&path, &self.repo).unwrap_or(false)
    }

    pub fn set_category_enabled(&self, form: SetCategoryEnabledForm) -> CommandResult {
        let result = SetCategoryEnabledPayload::try_from(form)
            .map_err(ServiceError::from)
            .and_then(|payload| {
                categories::set_category_enabled(payload, &self.default_admin, &self.repo)
            });
        self.complete(result)
    }

    pub fn set_category_rule_config(&self, form: SetCategoryRuleConfigForm) -> CommandResult {
        let result = SetCategoryRuleConfigPayload::try_from(form)
            .map_err(ServiceError::from)
            .and_then(|payload| {
                categories::set_category_rule_config(payload, &self.default_admin, &self.repo)
            });
        self.complete(result)
    }

    fn complete(&self, result: ServiceResult<String>) -> CommandResult {
        match &result {
            Ok(_) => self.subscribers.notify(),
            Err(err) => log::warn!("Category command rejected: {err}"),
        }
        result.into()
    }
}
