//! Prompt filtering
//!
//! Filters select prompts by folder scope, variant labels, and title
//! search. Folder scope means "this folder and everything under it": the
//! criterion is resolved through the hierarchy's descendant query, so it
//! inherits the same cycle-safety guarantees.

use promptstash_common::{Folder, FolderId, Prompt, VariantId};
use promptstash_hierarchy::descendant_ids;
use std::collections::HashSet;

/// Filter criteria for selecting prompts
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Scope to this folder and all its descendants
    folder: Option<FolderId>,
    /// Variant labels the prompt must carry (any match)
    variants: Vec<VariantId>,
    /// Case-insensitive substring match on the title
    query: Option<String>,
}

impl PromptFilter {
    /// Create an empty filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter scoped to a folder subtree
    pub fn by_folder(folder: impl Into<FolderId>) -> Self {
        Self {
            folder: Some(folder.into()),
            ..Self::default()
        }
    }

    /// Create a filter for prompts carrying any of the given variants
    pub fn by_variants(variants: Vec<VariantId>) -> Self {
        Self {
            variants,
            ..Self::default()
        }
    }

    /// Scope the filter to a folder subtree
    pub fn with_folder(mut self, folder: impl Into<FolderId>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Require any of the given variant labels
    pub fn with_variants(mut self, variants: Vec<VariantId>) -> Self {
        self.variants = variants;
        self
    }

    /// Require a case-insensitive title substring
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether the filter matches everything
    pub fn is_empty(&self) -> bool {
        self.folder.is_none() && self.variants.is_empty() && self.query.is_none()
    }

    /// Apply the filter to a prompt list, preserving storage order.
    ///
    /// The folder scope's descendant set is computed once per call.
    pub fn apply<'a>(&self, prompts: &'a [Prompt], folders: &[Folder]) -> Vec<&'a Prompt> {
        let scope = self.descendant_scope(folders);
        prompts
            .iter()
            .filter(|prompt| self.matches_in_scope(prompt, scope.as_ref()))
            .collect()
    }

    /// Check a single prompt against the filter criteria
    pub fn matches(&self, prompt: &Prompt, folders: &[Folder]) -> bool {
        self.matches_in_scope(prompt, self.descendant_scope(folders).as_ref())
    }

    fn descendant_scope(&self, folders: &[Folder]) -> Option<HashSet<FolderId>> {
        self.folder
            .as_ref()
            .map(|folder| descendant_ids(folders, folder).into_iter().collect())
    }

    fn matches_in_scope(&self, prompt: &Prompt, scope: Option<&HashSet<FolderId>>) -> bool {
        if let Some(scope) = scope {
            match &prompt.folder_id {
                Some(folder) if scope.contains(folder) => {}
                _ => return false,
            }
        }

        if !self.variants.is_empty()
            && !self.variants.iter().any(|variant| prompt.has_variant(*variant))
        {
            return false;
        }

        if let Some(query) = &self.query {
            if !prompt
                .title
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: u8) -> VariantId {
        VariantId::new(id).unwrap()
    }

    fn fixture() -> (Vec<Folder>, Vec<Prompt>) {
        let folders = vec![
            Folder::new("root", "Root"),
            Folder::new("sub", "Sub").with_parent("root"),
            Folder::new("deep", "Deep").with_parent("sub"),
            Folder::new("other", "Other"),
        ];
        let prompts = vec![
            Prompt::new("p-1", "Logo sketch").in_folder("root"),
            Prompt::new("p-2", "Moodboard").in_folder("deep"),
            Prompt::new("p-3", "Logo brief")
                .in_folder("other")
                .with_variants(vec![variant(2)]),
            Prompt::new("p-4", "Loose note").with_variants(vec![variant(2), variant(5)]),
        ];
        (folders, prompts)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&prompts, &folders).len(), prompts.len());
    }

    #[test]
    fn test_folder_scope_includes_descendants() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::by_folder("root");
        let found = filter.apply(&prompts, &folders);
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2"]);
    }

    #[test]
    fn test_folder_scope_excludes_rootless_prompts() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::by_folder("other");
        let found = filter.apply(&prompts, &folders);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "p-3");
    }

    #[test]
    fn test_variant_any_match() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::by_variants(vec![variant(5), variant(9)]);
        let found = filter.apply(&prompts, &folders);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "p-4");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::new().with_query("logo");
        let found = filter.apply(&prompts, &folders);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_criteria_combine() {
        let (folders, prompts) = fixture();
        let filter = PromptFilter::by_folder("other").with_variants(vec![variant(2)]);
        let found = filter.apply(&prompts, &folders);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "p-3");

        let none = PromptFilter::by_folder("sub").with_query("logo");
        assert!(none.apply(&prompts, &folders).is_empty());
    }

    #[test]
    fn test_filter_survives_cyclic_folders() {
        let folders = vec![
            Folder::new("a", "A").with_parent("b"),
            Folder::new("b", "B").with_parent("a"),
        ];
        let prompts = vec![Prompt::new("p-1", "Caught").in_folder("b")];
        let filter = PromptFilter::by_folder("a");
        // terminates, and still sees through the cycle to the member folders
        assert_eq!(filter.apply(&prompts, &folders).len(), 1);
    }
}
