//! mmCIF text output.
//!
//! This crate knows nothing about CETS categories. It provides the pieces
//! every category shares:
//!
//! - [`CifValue`]: a single data token (`?`, bare, or single-quoted)
//! - [`LoopBlock`]: one `loop_` table with fixed columns
//! - [`MmcifDocument`]: a `data_` block holding loop tables in order
//!
//! # Example
//!
//! ```
//! use cets_mmcif::{CifValue, LoopBlock, MmcifDocument};
//!
//! let mut block = LoopBlock::new("em_software", &["id", "name"]);
//! block
//!     .push_row(vec![CifValue::from("r1_software_1"), CifValue::Unknown])
//!     .unwrap();
//!
//! let document = MmcifDocument::new("t1", vec![block]);
//! assert!(document.render().starts_with("data_t1\n#\n#\nloop_\n"));
//! ```

mod block;
mod document;
mod error;
mod value;

pub use block::LoopBlock;
pub use document::MmcifDocument;
pub use error::{MmcifError, Result};
pub use value::{CifValue, format_value};

/// Line delimiting the header and every category block.
pub const SEPARATOR: &str = "#";

/// Keyword opening a looped table.
pub const LOOP_KEYWORD: &str = "loop_";

/// Token for a value that is not available.
pub const UNKNOWN: &str = "?";
