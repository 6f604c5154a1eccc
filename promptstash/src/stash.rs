//! The in-memory prompt collection
//!
//! [`Stash`] owns the flat record lists the storage collaborator loads at
//! session start, together with the folder hierarchy cache. Every folder
//! mutator invalidates the cache, so the "editor MUST invalidate after
//! every mutation" contract lives in exactly one place. Prompt and variant
//! edits leave the cache alone; the cached view derives from folders only.

use promptstash_common::{Folder, FolderId, Prompt, PromptId, Result, StashError, Variant, VariantId};
use promptstash_hierarchy::{FolderHierarchy, FolderTreeNode, SelectOption};
use std::sync::Arc;

use crate::filter::PromptFilter;

/// The prompt collection: flat records plus the derived-view cache
#[derive(Debug, Default)]
pub struct Stash {
    folders: Vec<Folder>,
    prompts: Vec<Prompt>,
    variants: Vec<Variant>,
    hierarchy: FolderHierarchy,
}

impl Stash {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every record wholesale, as on session load or import.
    ///
    /// There is no partial or incremental load contract; imported data may
    /// be malformed (dangling parents, cycles) and is accepted as-is. The
    /// hierarchy engine absorbs structural anomalies, and
    /// [`cleanup`](Self::cleanup) can drop dangling prompt references
    /// afterwards.
    pub fn replace_all(
        &mut self,
        folders: Vec<Folder>,
        prompts: Vec<Prompt>,
        variants: Vec<Variant>,
    ) {
        tracing::debug!(
            folders = folders.len(),
            prompts = prompts.len(),
            variants = variants.len(),
            "replacing collection records"
        );
        self.folders = folders;
        self.prompts = prompts;
        self.variants = variants;
        self.hierarchy.invalidate();
    }

    /// The folder records, in storage order
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The prompt records, in storage order
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// The variant records, in storage order
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Look up a folder by id
    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    /// Look up a prompt by id
    pub fn prompt(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// Look up a variant by id
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// The folder forest, built on demand and cached until a mutation
    pub fn tree(&mut self) -> Arc<[FolderTreeNode]> {
        self.hierarchy.tree(&self.folders)
    }

    /// The indented folder picker view
    pub fn indented_options(&mut self) -> Vec<SelectOption> {
        self.hierarchy.indented_options(&self.folders)
    }

    /// A folder id plus all its transitive children
    pub fn descendant_ids(&self, id: &FolderId) -> Vec<FolderId> {
        self.hierarchy.descendant_ids(&self.folders, id)
    }

    /// Whether the derived tree is currently cached
    pub fn is_tree_cached(&self) -> bool {
        self.hierarchy.is_cached()
    }

    /// Create a folder.
    ///
    /// The id must be fresh and a named parent must exist; unlike import,
    /// editor-driven creation has no excuse for dangling references.
    pub fn add_folder(&mut self, folder: Folder) -> Result<()> {
        if self.folder(&folder.id).is_some() {
            return Err(StashError::duplicate_id("folder", folder.id.as_str()));
        }
        if let Some(parent) = &folder.parent_id {
            self.folder(parent)
                .ok_or_else(|| StashError::folder_not_found(parent.as_str()))?;
        }
        self.folders.push(folder);
        self.hierarchy.invalidate();
        Ok(())
    }

    /// Rename a folder
    pub fn rename_folder(&mut self, id: &FolderId, name: impl Into<String>) -> Result<()> {
        let folder = self
            .folders
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| StashError::folder_not_found(id.as_str()))?;
        folder.name = name.into();
        self.hierarchy.invalidate();
        Ok(())
    }

    /// Reparent a folder; `None` moves it to the root.
    ///
    /// Moving a folder under itself or one of its own descendants would
    /// introduce a cycle, which the editing layer refuses up front; the
    /// hierarchy engine only *absorbs* cycles that arrive via import.
    pub fn move_folder(&mut self, id: &FolderId, new_parent: Option<FolderId>) -> Result<()> {
        self.folder(id)
            .ok_or_else(|| StashError::folder_not_found(id.as_str()))?;
        if let Some(parent) = &new_parent {
            self.folder(parent)
                .ok_or_else(|| StashError::folder_not_found(parent.as_str()))?;
            if self.descendant_ids(id).contains(parent) {
                return Err(StashError::invalid_value(
                    "parent_id",
                    "cannot move a folder under itself or its own descendant",
                ));
            }
        }
        if let Some(folder) = self.folders.iter_mut().find(|f| &f.id == id) {
            folder.parent_id = new_parent;
        }
        self.hierarchy.invalidate();
        Ok(())
    }

    /// Delete a folder.
    ///
    /// Direct children are reparented to the removed folder's parent, and
    /// prompts in the folder are detached to the collection root. No
    /// cascading delete.
    pub fn remove_folder(&mut self, id: &FolderId) -> Result<Folder> {
        let position = self
            .folders
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| StashError::folder_not_found(id.as_str()))?;
        let removed = self.folders.remove(position);

        for folder in &mut self.folders {
            if folder.parent_id.as_ref() == Some(id) {
                folder.parent_id = removed.parent_id.clone();
            }
        }
        for prompt in &mut self.prompts {
            if prompt.folder_id.as_ref() == Some(id) {
                prompt.folder_id = None;
            }
        }

        self.hierarchy.invalidate();
        Ok(removed)
    }

    /// Create a prompt; its folder and variant references must exist
    pub fn add_prompt(&mut self, prompt: Prompt) -> Result<()> {
        if self.prompt(&prompt.id).is_some() {
            return Err(StashError::duplicate_id("prompt", prompt.id.as_str()));
        }
        if let Some(folder) = &prompt.folder_id {
            self.folder(folder)
                .ok_or_else(|| StashError::folder_not_found(folder.as_str()))?;
        }
        for variant in &prompt.variants {
            self.variant(*variant)
                .ok_or(StashError::VariantNotFound { id: variant.get() })?;
        }
        self.prompts.push(prompt);
        Ok(())
    }

    /// Replace a prompt record by id
    pub fn update_prompt(&mut self, prompt: Prompt) -> Result<()> {
        let existing = self
            .prompts
            .iter_mut()
            .find(|p| p.id == prompt.id)
            .ok_or_else(|| StashError::prompt_not_found(prompt.id.as_str()))?;
        *existing = prompt;
        Ok(())
    }

    /// Delete a prompt
    pub fn remove_prompt(&mut self, id: &PromptId) -> Result<Prompt> {
        let position = self
            .prompts
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StashError::prompt_not_found(id.as_str()))?;
        Ok(self.prompts.remove(position))
    }

    /// Register a variant label; ids are unique per collection
    pub fn add_variant(&mut self, variant: Variant) -> Result<()> {
        if self.variant(variant.id).is_some() {
            return Err(StashError::duplicate_id("variant", variant.id.to_string()));
        }
        self.variants.push(variant);
        Ok(())
    }

    /// Delete a variant label and strip it from every prompt
    pub fn remove_variant(&mut self, id: VariantId) -> Result<Variant> {
        let position = self
            .variants
            .iter()
            .position(|v| v.id == id)
            .ok_or(StashError::VariantNotFound { id: id.get() })?;
        let removed = self.variants.remove(position);
        for prompt in &mut self.prompts {
            prompt.variants.retain(|v| *v != id);
        }
        Ok(removed)
    }

    /// Drop prompt references whose targets no longer exist.
    ///
    /// Imports can carry prompts pointing at folders or variants that were
    /// never loaded; after cleanup every reference resolves. Folder records
    /// themselves are left alone: dangling parents are the hierarchy
    /// engine's business.
    pub fn cleanup(&mut self) {
        let folder_ids: std::collections::HashSet<&FolderId> =
            self.folders.iter().map(|f| &f.id).collect();
        let variant_ids: std::collections::HashSet<VariantId> =
            self.variants.iter().map(|v| v.id).collect();

        let mut dropped = 0usize;
        for prompt in &mut self.prompts {
            if let Some(folder) = &prompt.folder_id {
                if !folder_ids.contains(folder) {
                    prompt.folder_id = None;
                    dropped += 1;
                }
            }
            let before = prompt.variants.len();
            prompt.variants.retain(|v| variant_ids.contains(v));
            dropped += before - prompt.variants.len();
        }
        tracing::debug!(dropped, "cleanup dropped dangling prompt references");
        self.hierarchy.invalidate();
    }

    /// Prompts matching a filter, in storage order
    pub fn filtered_prompts(&self, filter: &PromptFilter) -> Vec<&Prompt> {
        filter.apply(&self.prompts, &self.folders)
    }
}
