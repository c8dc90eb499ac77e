//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file writes, listing
//!   - `TemplateSource`: template identifier → raw text
//!   - `TemplateRenderer`: templates + context → component structure

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateSource};
