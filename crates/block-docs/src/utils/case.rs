//! Block naming helpers
//!
//! Block directories are named `<prefix>-<name>`, e.g. `block-hero-banner`.
//! The block id drops the prefix and is camelCased (`heroBanner`); the
//! interface file is found through the PascalCase form of the whole
//! directory name (`BlockHeroBanner`).

use convert_case::{Case, Casing};
use std::path::Path;

/// Block id for a block directory name: `block-dummy` -> `dummy`
pub fn block_id_from_dir(dir_name: &str) -> String {
    let rest = dir_name.split('-').skip(1).collect::<Vec<_>>().join("-");
    rest.to_case(Case::Camel)
}

/// PascalCase form of a directory name: `block-dummy` -> `BlockDummy`
pub fn pascal_case(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Entry name of an explicitly listed file: its base name without extension
pub fn file_entry_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_from_dir() {
        assert_eq!(block_id_from_dir("block-dummy"), "dummy");
        assert_eq!(block_id_from_dir("block-hero-banner"), "heroBanner");
        assert_eq!(block_id_from_dir("dummy"), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("block-dummy"), "BlockDummy");
        assert_eq!(pascal_case("block-hero-banner"), "BlockHeroBanner");
    }

    #[test]
    fn test_file_entry_name() {
        assert_eq!(file_entry_name(Path::new("./input/IDummyFile.ts")), "IDummyFile");
        assert_eq!(file_entry_name(Path::new("types.d.ts")), "types.d");
    }
}
