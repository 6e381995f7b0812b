//! UI-facing bridge crate for shotlog.

pub mod api;
