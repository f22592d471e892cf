//! Foundation types for RetroWeb.
//!
//! This crate contains the platform-agnostic types shared by the
//! interaction engine and its hosts: screen geometry, key codes and
//! pointer state, cursor shapes, configuration, and error types.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
