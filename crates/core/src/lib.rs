//! Core for the itemstash project.
//!
//! Pure domain types and storage contracts shared by the server binary.
//! This crate performs no I/O: the repository trait is implemented by
//! backends in the `itemstash` crate.

pub mod item;
pub mod storage;
