//! Core library components.
//!
//! This module contains the resolution pipeline: secret sources, the
//! network registry, secret resolution, network building, artifact path
//! resolution, and the assembler that ties them together.

pub mod artifact;
pub mod assembler;
pub mod builder;
pub mod config;
pub mod constants;
pub mod domain;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod types;
pub mod validation;
