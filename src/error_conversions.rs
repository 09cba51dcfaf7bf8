//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls that let `?` cross layer boundaries live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{SetCategoryEnabledFormError, SetCategoryRuleConfigFormError};
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<SetCategoryEnabledFormError> for ServiceError {
    fn from(val: SetCategoryEnabledFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<SetCategoryRuleConfigFormError> for ServiceError {
    fn from(val: SetCategoryRuleConfigFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound(code) => ServiceError::NotFound(code),
        }
    }
}
