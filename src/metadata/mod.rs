//! Node metadata
//!
//! Attribute containers and the metadata stamping routine.

pub mod store;
pub mod value;
pub mod writer;

pub use store::{AttrMap, AttrTree, AttributeStore};
pub use value::AttrValue;
pub use writer::{METADATA_VERSION, ROOT_NODE, write_metadata, write_root_metadata};
