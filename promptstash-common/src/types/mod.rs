//! Core record types consumed by the engines

mod folder;
mod prompt;
mod variant;

pub use folder::Folder;
pub use prompt::Prompt;
pub use variant::Variant;
