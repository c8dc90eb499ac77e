//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stencil
//! component generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateSource, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (LocalFilesystem, EmbeddedTemplates...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationRequest, RenderContext, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::prelude::*;
//!
//! let request = GenerationRequest::builder("my button")
//!     .file_format("paramCase")
//!     .component_format("pascalCase")
//!     .build()?;
//!
//! let service = GenerateService::new(templates, renderer, filesystem);
//! let report = service.generate(&request, &std::env::current_dir()?)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        CaseKind, ComponentNames, ComponentStructure, CssExtension, GenerationRequest,
        RenderContext, TemplateFile, TemplateId, TestFramework, TypeCheck,
    };
    pub use crate::error::{StencilError, StencilResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
