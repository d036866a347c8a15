//! Foundation types for the EO+ analyzer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Flavor`] - The grammar dialect of a document
//! - [`Position`], [`Span`] - 0-based line/column ranges for editor output
//! - [`Caret`] - A cursor location in token coordinates (1-based line)
//! - [`TextEdit`] - A range replacement produced by quick fixes and renames
//!
//! This module has NO dependencies on other eoplus modules.

mod edit;
mod flavor;
mod position;

pub use edit::TextEdit;
pub use flavor::{Flavor, FlavorError};
pub use position::{Caret, Position, Span};
