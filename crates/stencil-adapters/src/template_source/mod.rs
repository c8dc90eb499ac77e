//! Template sources: where the raw template text comes from.
//!
//! | Source               | Use                                      |
//! |----------------------|------------------------------------------|
//! | [`EmbeddedTemplates`]  | default; compiled into the binary       |
//! | [`DirectoryTemplates`] | user override directory                 |
//! | [`InMemoryTemplates`]  | tests and programmatic overrides        |

mod directory;
mod embedded;
mod memory;

pub use directory::{DirectoryTemplates, TEMPLATES_DIR_ENV};
pub use embedded::EmbeddedTemplates;
pub use memory::InMemoryTemplates;
