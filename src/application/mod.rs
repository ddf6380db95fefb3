// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the locale store and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The [`i18n`](crate::i18n) services consume ports, never adapters

pub mod port;
