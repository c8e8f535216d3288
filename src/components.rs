//! Reusable HTML components for page generation
//!
//! This module provides Maud components composing a page shell: header and
//! footer chrome, SEO head metadata, and the layouts that mount them against
//! the document.

pub mod blog;
pub mod footer;
pub mod header;
pub mod layout;
pub mod metadata;
