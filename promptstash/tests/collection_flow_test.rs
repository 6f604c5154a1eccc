//! End-to-end collection session: import records wholesale, read derived
//! views, mutate folders, filter prompts, checking cache coherence along
//! the way.

use promptstash::{
    Folder, FolderId, Prompt, PromptFilter, Stash, Variant, VariantId,
};
use std::sync::Arc;

fn variant(id: u8) -> VariantId {
    VariantId::new(id).unwrap()
}

fn session() -> Stash {
    let mut stash = Stash::new();
    stash.replace_all(
        vec![
            Folder::new("art", "Art"),
            Folder::new("portraits", "Portraits").with_parent("art"),
            Folder::new("landscapes", "Landscapes").with_parent("art"),
            Folder::new("writing", "Writing"),
        ],
        vec![
            Prompt::new("p-1", "Oil portrait")
                .in_folder("portraits")
                .with_variants(vec![variant(1)]),
            Prompt::new("p-2", "Misty valley").in_folder("landscapes"),
            Prompt::new("p-3", "Cover letter")
                .in_folder("writing")
                .with_variants(vec![variant(2)]),
        ],
        vec![
            Variant::new(variant(1), "midjourney").with_url("https://midjourney.example"),
            Variant::new(variant(2), "chat"),
        ],
    );
    stash
}

#[test]
fn test_session_views_and_descendant_filtering() {
    let mut stash = session();

    let tree = stash.tree();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].children.len(), 2);

    let labels: Vec<String> = stash
        .indented_options()
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Art", "  Portraits", "  Landscapes", "Writing"]);

    // "Art and everything under it"
    let filter = PromptFilter::by_folder("art");
    let found = stash.filtered_prompts(&filter);
    let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p-1", "p-2"]);
}

#[test]
fn test_cache_stays_coherent_across_edits() {
    let mut stash = session();
    let before = stash.tree();

    // repeat read without mutation hits the cache
    assert!(Arc::ptr_eq(&before, &stash.tree()));

    stash
        .move_folder(
            &FolderId::from("landscapes"),
            Some(FolderId::from("portraits")),
        )
        .unwrap();

    let after = stash.tree();
    assert!(!Arc::ptr_eq(&before, &after));

    // the subtree filter follows the new shape
    let found = stash.filtered_prompts(&PromptFilter::by_folder("portraits"));
    let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p-1", "p-2"]);
}

#[test]
fn test_corrupt_import_degrades_gracefully() {
    let mut stash = Stash::new();
    stash.replace_all(
        vec![
            Folder::new("a", "A").with_parent("b"),
            Folder::new("b", "B").with_parent("a"),
            Folder::new("orphan", "Orphan").with_parent("gone"),
        ],
        vec![Prompt::new("p-1", "Trapped").in_folder("a")],
        vec![],
    );

    // dangling parent promotes to root; the cycle pair is absent from the
    // forest but descendant queries still terminate over it
    let tree = stash.tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id.as_str(), "orphan");

    let descendants = stash.descendant_ids(&FolderId::from("a"));
    assert_eq!(descendants.len(), 2);

    let found = stash.filtered_prompts(&PromptFilter::by_folder("b"));
    assert_eq!(found.len(), 1);
}

#[test]
fn test_variant_lifecycle_reaches_prompts() {
    let mut stash = session();
    assert_eq!(stash.variant(variant(1)).unwrap().name, "midjourney");

    // colors derive from the id, so renames keep the pill stable
    let color = stash.variant(variant(1)).unwrap().color();
    stash.remove_variant(variant(1)).unwrap();
    assert!(stash.prompt(&"p-1".into()).unwrap().variants.is_empty());

    let replacement = Variant::new(variant(1), "sora");
    assert_eq!(replacement.color(), color);
    stash.add_variant(replacement).unwrap();

    let found = stash.filtered_prompts(&PromptFilter::by_variants(vec![variant(2)]));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id.as_str(), "p-3");
}
