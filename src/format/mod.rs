//! SWC codec: conversion between morphologies and SWC text.
//!
//! SWC is the plain-text tabular format used across neuroscience for skeleton
//! reconstructions: one sample per line as
//! `id type x y z radius parent`, with `#` comments and blank lines ignored and
//! `-1` marking the root's missing parent.
//!
//! # Key Components
//!
//! - [`parse_swc`] - Strict, all-or-nothing text parsing
//! - [`write_swc`] - Lossless serialization in node insertion order
//! - [`load`] / [`save`] - File persistence wrappers that always name the path
//!   on failure
//!
//! The parser does not care where the text came from: files, in-memory strings,
//! and downloads from a remote morphology catalog all go through [`parse_swc`].

mod file;
mod reader;
mod writer;

pub use file::{load, save};
pub use reader::parse_swc;
pub use writer::write_swc;
