//! Data models for parsed Kindle clippings.
//!
//! This module defines the value types used throughout the application:
//!
//! - [`Document`], [`Location`], [`Category`], [`Metadata`] - the typed fields
//!   of one entry
//! - [`Clipping`] - one highlight, note, or bookmark with its document and
//!   metadata
//! - [`BookGroup`] / [`Library`] - the derived per-title aggregate built for
//!   rendering
//!
//! All types compare structurally (derived `PartialEq`) and serialize with
//! serde; timestamps encode as ISO-8601 strings via chrono's serde support.

pub mod book;
pub mod clipping;

pub use book::{BookGroup, Library};
pub use clipping::{
    Category, Clipping, DEVICE_DATETIME_FORMAT, Document, Location, Metadata, UNKNOWN_AUTHORS,
};
