//! Metadata writer
//!
//! Stamps a timestamp, the metadata format version, and caller-supplied
//! attributes onto a node of an open attribute container.

use chrono::Local;
use log::debug;

use crate::error::MetadataError;
use crate::metadata::store::{AttrMap, AttributeStore};
use crate::metadata::value::AttrValue;

/// Version stamped under the caller's version key
pub const METADATA_VERSION: i64 = 2;

/// Node path addressing the container root
pub const ROOT_NODE: &str = "/";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Write metadata into the attribute store of the node at `node`.
///
/// Sets `date_key` to the current local time rendered as a string and
/// `version_key` to [`METADATA_VERSION`], then copies every entry of
/// `meta` in insertion order. Caller entries are applied after the
/// reserved keys, so a caller key named like `date_key` or `version_key`
/// replaces the stamped value.
pub fn write_metadata<S: AttributeStore + ?Sized>(
    store: &mut S,
    meta: &AttrMap,
    date_key: &str,
    version_key: &str,
    node: &str,
) -> Result<(), MetadataError> {
    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    store.set_attr(node, date_key, AttrValue::Str(stamp))?;
    store.set_attr(node, version_key, AttrValue::Int(METADATA_VERSION))?;
    for (key, value) in meta.iter() {
        store.set_attr(node, key, value.clone())?;
    }
    debug!("Wrote {} metadata attributes to node {}", meta.len() + 2, node);
    Ok(())
}

/// [`write_metadata`] against the container root
pub fn write_root_metadata<S: AttributeStore + ?Sized>(
    store: &mut S,
    meta: &AttrMap,
    date_key: &str,
    version_key: &str,
) -> Result<(), MetadataError> {
    write_metadata(store, meta, date_key, version_key, ROOT_NODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::store::AttrTree;
    use chrono::NaiveDateTime;

    fn subject_meta() -> AttrMap {
        [("subject", "A01")].into_iter().collect()
    }

    #[test]
    fn test_write_stamps_reserved_keys_and_caller_entries() {
        let mut tree = AttrTree::new();
        let before = Local::now().naive_local();
        write_root_metadata(&mut tree, &subject_meta(), "date", "version").unwrap();
        let after = Local::now().naive_local();

        assert_eq!(
            tree.get_attr("/", "version").unwrap(),
            Some(AttrValue::Int(2))
        );
        assert_eq!(
            tree.get_attr("/", "subject").unwrap(),
            Some(AttrValue::from("A01"))
        );

        let date = tree.get_attr("/", "date").unwrap().unwrap();
        let stamp = NaiveDateTime::parse_from_str(date.as_str().unwrap(), TIMESTAMP_FORMAT)
            .expect("date attribute parses back as a timestamp");
        assert!(stamp >= before - chrono::Duration::seconds(1));
        assert!(stamp <= after + chrono::Duration::seconds(1));
    }

    #[test]
    fn test_write_to_child_node() {
        let mut tree = AttrTree::new();
        tree.create_node("/session").unwrap();
        write_metadata(&mut tree, &subject_meta(), "date", "version", "/session").unwrap();
        assert_eq!(
            tree.get_attr("/session", "version").unwrap(),
            Some(AttrValue::Int(2))
        );
        // The root stays untouched
        assert_eq!(tree.get_attr("/", "version").unwrap(), None);
    }

    #[test]
    fn test_missing_node_propagates() {
        let mut tree = AttrTree::new();
        let err = write_metadata(&mut tree, &AttrMap::new(), "date", "version", "/absent");
        assert!(matches!(err, Err(MetadataError::NodeNotFound(_))));
    }

    #[test]
    fn test_caller_key_overrides_reserved_key() {
        let mut tree = AttrTree::new();
        let meta: AttrMap = [("version", AttrValue::Int(7))].into_iter().collect();
        write_root_metadata(&mut tree, &meta, "date", "version").unwrap();
        assert_eq!(
            tree.get_attr("/", "version").unwrap(),
            Some(AttrValue::Int(7))
        );
    }

    #[test]
    fn test_caller_entries_written_in_insertion_order() {
        let mut tree = AttrTree::new();
        let mut meta = AttrMap::new();
        meta.set("zeta", 1i64);
        meta.set("alpha", 2i64);
        write_root_metadata(&mut tree, &meta, "date", "version").unwrap();
        let keys: Vec<String> = tree
            .attrs("/")
            .unwrap()
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(keys, vec!["date", "version", "zeta", "alpha"]);
    }
}
