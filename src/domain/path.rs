//! Structured identifiers for nodes of the category tree.
//!
//! [`CategoryPath`] is the primary way to address a node. Dash-joined codes
//! such as `GL-MOB-SM-AN` are derived from it for external consumers and can
//! be parsed back only for fully specified leaves.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::CategoryLevel;

/// Separator used when joining node codes into a full code.
pub const CODE_SEPARATOR: &str = "-";

/// Separator used when joining node names into a readable path.
pub const NAME_SEPARATOR: &str = " > ";

/// Main codes are themselves hyphenated (`GL-MOB`), so a leaf code always has
/// two segments for the main code plus one each for Sub and Sub-Sub.
const LEAF_CODE_SEGMENTS: usize = 4;

/// Address of a node: a main code plus optional sub and sub-sub codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPath {
    pub main_code: String,
    pub sub_code: Option<String>,
    pub sub_sub_code: Option<String>,
}

fn normalize_segment(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

impl CategoryPath {
    /// Builds a path from raw segments, treating blank segments as absent.
    pub fn from_segments(
        main_code: &str,
        sub_code: Option<&str>,
        sub_sub_code: Option<&str>,
    ) -> Self {
        Self {
            main_code: main_code.trim().to_string(),
            sub_code: normalize_segment(sub_code),
            sub_sub_code: normalize_segment(sub_sub_code),
        }
    }

    /// Path to a main category.
    pub fn main(main_code: &str) -> Self {
        Self::from_segments(main_code, None, None)
    }

    /// Path to a sub category.
    pub fn sub(main_code: &str, sub_code: &str) -> Self {
        Self::from_segments(main_code, Some(sub_code), None)
    }

    /// Path to a sub-sub (leaf) category.
    pub fn leaf(main_code: &str, sub_code: &str, sub_sub_code: &str) -> Self {
        Self::from_segments(main_code, Some(sub_code), Some(sub_sub_code))
    }

    /// Parses a dash-joined leaf code such as `GL-MOB-SM-AN`.
    ///
    /// Returns `None` unless the code splits into exactly four non-empty
    /// segments; partial matches are never produced.
    pub fn parse_leaf_code(code: &str) -> Option<Self> {
        let segments: Vec<&str> = code.trim().split(CODE_SEPARATOR).map(str::trim).collect();
        if segments.len() != LEAF_CODE_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        let main_code = format!("{}{CODE_SEPARATOR}{}", segments[0], segments[1]);
        Some(Self::leaf(&main_code, segments[2], segments[3]))
    }

    /// Level addressed by this path, or `None` for a sub-sub code without a
    /// sub code, which can never resolve.
    pub fn level(&self) -> Option<CategoryLevel> {
        match (&self.sub_code, &self.sub_sub_code) {
            (None, None) => Some(CategoryLevel::Main),
            (Some(_), None) => Some(CategoryLevel::Sub),
            (Some(_), Some(_)) => Some(CategoryLevel::SubSub),
            (None, Some(_)) => None,
        }
    }

    /// Codes from the root down to the addressed node.
    pub fn codes(&self) -> Vec<&str> {
        std::iter::once(self.main_code.as_str())
            .chain(self.sub_code.as_deref())
            .chain(self.sub_sub_code.as_deref())
            .collect()
    }

    /// Dash-joined code of the addressed node, e.g. `GL-MOB-SM`.
    pub fn full_code(&self) -> String {
        join_codes(&self.codes())
    }
}

impl Display for CategoryPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_code())
    }
}

/// Joins node codes with [`CODE_SEPARATOR`].
pub fn join_codes(codes: &[&str]) -> String {
    codes.join(CODE_SEPARATOR)
}

/// Joins node names with [`NAME_SEPARATOR`].
pub fn join_names(names: &[&str]) -> String {
    names.join(NAME_SEPARATOR)
}
