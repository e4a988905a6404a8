//! Domain Layer
//!
//! The key-mirroring core: extraction, diffing and class generation.
//!
//! ## Structure
//!
//! - `entities/` - Key entries and immutable snapshots
//! - `value_objects/` - Identifiers and target languages
//! - `services/` - Extractor, Differ, CodeGenerator
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Parsing, rendering and file access go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
