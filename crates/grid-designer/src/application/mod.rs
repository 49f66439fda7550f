//! Application layer for the designer.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure layout rules in `grid-core`) and the infrastructure (files, stdout).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain objects to fulfil a user goal (e.g., "drop the
//!   dragged module here, then record an undo step").
//! - **Depends on abstractions** ([`observer::LayoutObserver`]) rather than
//!   concrete renderers or exporters.
//! - **Contains no file system access and no printing**.
//!
//! # Sub-modules
//!
//! - **`commands`**   – The serialisable [`commands::Command`] enum plus the
//!   per-command checkpoint policy.
//!
//! - **`controller`** – [`controller::LayoutController`], the single owner of
//!   the layout state and its undo history.  Every user action goes through it.
//!
//! - **`observer`**   – The trait through which renderers and exporters hear
//!   about applied commands.
//!
//! - **`script`**     – Parses newline-delimited JSON command scripts.

pub mod commands;
pub mod controller;
pub mod observer;
pub mod script;
