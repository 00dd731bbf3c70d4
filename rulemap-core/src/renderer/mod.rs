//! Renderers turn the extracted rule list into an output document.
//!
//! - `pagination.rs`: fixed-size grouping of rules into numbered sections
//! - `markmap.rs`: the sectioned markdown outline consumed by Markmap
//! - `serialization.rs`: format dispatch and the JSON record dump

pub mod markmap;
pub mod pagination;
pub mod serialization;

pub use markmap::{render_markmap, render_to_string, DOCUMENT_TITLE};
pub use pagination::{paginate, Section};
pub use serialization::{render_with_format, save_with_format};
