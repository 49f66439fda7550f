//! Infrastructure layer for the designer.
//!
//! Contains the outward-facing adapters: TOML configuration storage and the
//! generated-code observer.
//!
//! **Dependency rule**: this layer may depend on `application` and `grid_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod export;
pub mod storage;
