//! HIR layer tests
//!
//! - Semantic diagnostics of both flavors
//! - Quick fixes applied to real documents
//! - Symbol catalog and reference classification

pub mod tests_quick_fixes;
pub mod tests_symbols;
