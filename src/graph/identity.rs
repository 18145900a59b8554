// SPDX-License-Identifier: MIT

//! Node identifiers for one graph build
//!
//! Ids are unique within a build and consist of ASCII alphanumerics and
//! underscores only, so every rendering engine accepts them as node keys.

use std::collections::HashSet;
use uuid::Uuid;

use super::types::NodeCategory;

/// Fixed id of the first node of every build
pub const ROOT_ID: &str = "root";

/// Registry of ids issued during one build. Never shared across builds.
#[derive(Debug, Default)]
pub struct NodeIdentity {
    issued: HashSet<String>,
}

impl NodeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    ///
    /// The first id is always `root` (or `root_<name>`). Later ids are
    /// `<category>_<name>` with a numeric suffix on collision, or
    /// `<category>_<random>` when no name is suggested.
    pub fn next_id(&mut self, category: NodeCategory, suggested_name: Option<&str>) -> String {
        let sanitized = suggested_name.map(sanitize).unwrap_or_default();

        if self.issued.is_empty() {
            let id = if sanitized.is_empty() {
                ROOT_ID.to_string()
            } else {
                format!("{}_{}", ROOT_ID, sanitized)
            };
            self.issued.insert(id.clone());
            return id;
        }

        if suggested_name.is_some() {
            let base = if sanitized.is_empty() {
                category.as_str().to_string()
            } else {
                format!("{}_{}", category.as_str(), sanitized)
            };
            let mut candidate = base.clone();
            let mut suffix = 2;
            while self.issued.contains(&candidate) {
                candidate = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            self.issued.insert(candidate.clone());
            return candidate;
        }

        loop {
            let opaque = Uuid::new_v4().simple().to_string();
            let candidate = format!("{}_{}", category.as_str(), &opaque[..8]);
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

/// Keep only ASCII alphanumerics and underscores
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_key_safe(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    #[test]
    fn test_first_id_is_root() {
        let mut identity = NodeIdentity::new();
        assert_eq!(identity.next_id(NodeCategory::ConditionalRoot, None), "root");
    }

    #[test]
    fn test_first_id_with_name() {
        let mut identity = NodeIdentity::new();
        assert_eq!(
            identity.next_id(NodeCategory::Function, Some("concat")),
            "root_concat"
        );
    }

    #[test]
    fn test_sanitize_strips_quotes_and_whitespace() {
        assert_eq!(sanitize("' from '"), "from");
        assert_eq!(sanitize("\"New York\""), "NewYork");
        assert_eq!(sanitize("to_date"), "to_date");
        assert_eq!(sanitize(">="), "");
    }

    #[test]
    fn test_collisions_get_numeric_suffix() {
        let mut identity = NodeIdentity::new();
        identity.next_id(NodeCategory::Function, Some("concat"));
        let a = identity.next_id(NodeCategory::ColumnReference, Some("city"));
        let b = identity.next_id(NodeCategory::ColumnReference, Some("city"));
        let c = identity.next_id(NodeCategory::ColumnReference, Some("city"));
        assert_eq!(a, "column_reference_city");
        assert_eq!(b, "column_reference_city_2");
        assert_eq!(c, "column_reference_city_3");
    }

    #[test]
    fn test_name_that_sanitizes_to_nothing_uses_category() {
        let mut identity = NodeIdentity::new();
        identity.next_id(NodeCategory::ConditionalRoot, None);
        assert_eq!(identity.next_id(NodeCategory::Function, Some(">")), "function");
        assert_eq!(identity.next_id(NodeCategory::Function, Some("<")), "function_2");
    }

    #[test]
    fn test_unnamed_ids_are_opaque_and_unique() {
        let mut identity = NodeIdentity::new();
        identity.next_id(NodeCategory::ConditionalRoot, None);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let id = identity.next_id(NodeCategory::SubExpression, None);
            assert!(id.starts_with("sub_expression_"));
            assert_eq!(id.len(), "sub_expression_".len() + 8);
            assert!(is_key_safe(&id));
            assert!(seen.insert(id));
        }
        assert_eq!(identity.issued_count(), 201);
    }

    #[test]
    fn test_fresh_registry_per_build() {
        let mut first = NodeIdentity::new();
        let mut second = NodeIdentity::new();
        assert_eq!(first.next_id(NodeCategory::Literal, Some("40")), "root_40");
        assert_eq!(second.next_id(NodeCategory::Literal, Some("40")), "root_40");
    }
}
