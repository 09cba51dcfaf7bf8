use crate::domain::path::CategoryPath;
use crate::dto::categories::ResolvedSelection;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Flat category names used before the three-level taxonomy, mapped to the
/// leaf that replaced them.
const LEGACY_CATEGORIES: &[(&str, [&str; 3])] = &[
    ("mobiles", ["GL-MOB", "SM", "AN"]),
    ("smartphones", ["GL-MOB", "SM", "AN"]),
    ("tablets", ["GL-MOB", "TB", "AT"]),
    ("electronics", ["GL-ELE", "CM", "LT"]),
    ("audio", ["GL-ELE", "AU", "HP"]),
    ("fashion", ["GL-FAS", "MN", "SH"]),
    ("clothing", ["GL-FAS", "MN", "SH"]),
    ("home", ["GL-HOM", "KT", "CW"]),
    ("kitchen", ["GL-HOM", "KT", "CW"]),
    ("furniture", ["GL-HOM", "FR", "LR"]),
    ("digital", ["GL-DIG", "GC", "EC"]),
    ("gift cards", ["GL-DIG", "GC", "EC"]),
    ("software", ["GL-DIG", "SW", "OS"]),
];

/// Maps a legacy flat category name onto a leaf path, if it is known.
pub fn legacy_category_path(name: &str) -> Option<CategoryPath> {
    let name = name.trim().to_lowercase();
    LEGACY_CATEGORIES
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, [main, sub, sub_sub])| CategoryPath::leaf(main, sub, sub_sub))
}

/// Resolves a fully specified leaf with its effective rules and availability.
pub fn resolve_selection<R>(path: &CategoryPath, repo: &R) -> ServiceResult<ResolvedSelection>
where
    R: CategoryReader,
{
    let selection = repo
        .get_category_chain(path)?
        .as_ref()
        .and_then(ResolvedSelection::from_leaf_chain);

    match selection {
        Some(selection) => Ok(selection),
        None => {
            log::debug!("Selection {path} does not resolve to a leaf");
            Err(ServiceError::NotFound(path.full_code()))
        }
    }
}

/// Resolves a dash-joined leaf code such as `GL-MOB-SM-AN`.
pub fn resolve_selection_by_category_code<R>(
    code: &str,
    repo: &R,
) -> ServiceResult<ResolvedSelection>
where
    R: CategoryReader,
{
    match CategoryPath::parse_leaf_code(code) {
        Some(path) => resolve_selection(&path, repo),
        None => {
            log::debug!("Malformed category code {code:?}");
            Err(ServiceError::NotFound(code.trim().to_string()))
        }
    }
}

/// Resolves a legacy flat name, falling back to `default_path` when the name
/// is unknown.
pub fn resolve_selection_from_legacy_category<R>(
    name: &str,
    default_path: &CategoryPath,
    repo: &R,
) -> ServiceResult<ResolvedSelection>
where
    R: CategoryReader,
{
    let path = legacy_category_path(name).unwrap_or_else(|| {
        log::debug!("Unknown legacy category {name:?}, using {default_path}");
        default_path.clone()
    });
    resolve_selection(&path, repo)
}

/// Whether the leaf exists and it and all its ancestors are enabled.
pub fn is_selection_enabled<R>(path: &CategoryPath, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader,
{
    match resolve_selection(path, repo) {
        Ok(selection) => Ok(selection.is_enabled),
        Err(ServiceError::NotFound(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryType, RuleSource};
    use crate::repository::InMemoryRepository;
    use crate::seed::default_selection_path;

    #[test]
    fn resolves_reference_leaf() {
        let repo = InMemoryRepository::seeded();

        let selection =
            resolve_selection(&CategoryPath::leaf("GL-MOB", "SM", "AN"), &repo).unwrap();

        assert_eq!(selection.category_code, "GL-MOB-SM-AN");
        assert_eq!(selection.main_name, "Mobiles & Tablets");
        assert_eq!(selection.sub_sub_name, "Android Phones");
        assert_eq!(selection.effective_rules.cashback_percentage, 5.0);
        assert_eq!(
            selection.effective_rule_sources.cod_eligible,
            RuleSource::Main
        );
        assert!(selection.is_enabled);
        assert!(selection.disabled_reason.is_none());
    }

    #[test]
    fn partial_paths_are_not_selections() {
        let repo = InMemoryRepository::seeded();

        let err = resolve_selection(&CategoryPath::sub("GL-MOB", "SM"), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound("GL-MOB-SM".to_string()));
    }

    #[test]
    fn resolves_by_category_code() {
        let repo = InMemoryRepository::seeded();

        let selection = resolve_selection_by_category_code("GL-DIG-SW-OS", &repo).unwrap();

        assert_eq!(selection.sub_name, "Software");
        assert_eq!(selection.effective_rules.category_type, CategoryType::Digital);
        assert!(resolve_selection_by_category_code("GL-DIG-SW", &repo).is_err());
        assert!(resolve_selection_by_category_code("GLDIG-SW-OS", &repo).is_err());
    }

    #[test]
    fn legacy_names_map_case_insensitively() {
        assert_eq!(
            legacy_category_path("  Gift Cards "),
            Some(CategoryPath::leaf("GL-DIG", "GC", "EC"))
        );
        assert!(legacy_category_path("Books").is_none());
    }

    #[test]
    fn unknown_legacy_name_uses_default_path() {
        let repo = InMemoryRepository::seeded();

        let selection =
            resolve_selection_from_legacy_category("Books", &default_selection_path(), &repo)
                .unwrap();

        assert_eq!(selection.category_code, "GL-MOB-SM-AN");
    }

    #[test]
    fn every_legacy_target_exists_in_seed() {
        let repo = InMemoryRepository::seeded();
        for (name, _) in LEGACY_CATEGORIES {
            let path = legacy_category_path(name).unwrap();
            assert!(resolve_selection(&path, &repo).is_ok(), "{name}");
        }
    }

    #[test]
    fn missing_leaf_is_not_enabled() {
        let repo = InMemoryRepository::seeded();
        assert!(!is_selection_enabled(&CategoryPath::leaf("GL-MOB", "SM", "ZZ"), &repo).unwrap());
        assert!(is_selection_enabled(&CategoryPath::leaf("GL-MOB", "SM", "AN"), &repo).unwrap());
    }
}
