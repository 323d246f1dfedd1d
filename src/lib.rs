//! Labeled attribute-value tables for machine-learning algorithms.
//!
//! ```
//! use labeltable::{Label, TableBuilder};
//!
//! # fn main() -> Result<(), labeltable::BuildError> {
//! let table = TableBuilder::new()
//!     .numeric("x", vec![1.0, 2.0, 3.0])
//!     .categorical("color", ["red", "blue", "red"])
//!     .label(Label::categorical(["yes", "no", "yes"]))
//!     .build("train")?;
//! assert_eq!(table.target_index(), Some(2));
//! # Ok(())
//! # }
//! ```
pub use attribute::{Attribute, AttributeKind, Domain, DomainOrder};
pub use builder::{BuildError, Label, TableBuilder, TableOptions, DEFAULT_CLASS_NAME};
pub use stats::AttributeSummary;
pub use table::{Row, Table, Value};

pub mod export;

mod attribute;
mod builder;
mod stats;
mod table;
