//! Structural fingerprint of a column tree.
//!
//! The fingerprint depends only on each node's position, identity hint, data
//! path and title, so freshly built but equal column trees hash the same while
//! renaming, reordering, adding or removing a column changes the result.

use crate::table::Column;
use crate::table::column::join_index_path;

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over UTF-16 code units, rendered in base 36.
pub fn hash_string(input: &str) -> String {
    let mut h = FNV_OFFSET;
    for unit in input.encode_utf16() {
        h ^= u32::from(unit);
        h = h.wrapping_mul(FNV_PRIME);
    }
    to_base36(h)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::with_capacity(7);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// The raw structural signature hashed by [`fingerprint`].
///
/// One `path:identity:dataPath:title` part per node in pre-order, joined
/// with `|`. An empty tree yields `"empty"`.
pub fn signature(columns: &[Column]) -> String {
    let mut parts = Vec::new();
    walk(columns, &mut Vec::new(), &mut parts);
    if parts.is_empty() {
        return "empty".to_string();
    }
    parts.join("|")
}

fn walk(columns: &[Column], path: &mut Vec<usize>, parts: &mut Vec<String>) {
    for (i, column) in columns.iter().enumerate() {
        path.push(i);
        parts.push(format!(
            "{}:{}:{}:{}",
            join_index_path(path),
            column.identity_hint().unwrap_or_default(),
            column.data_path_text(),
            column.title
        ));
        walk(&column.children, path, parts);
        path.pop();
    }
}

/// Short, deterministic fingerprint of a column tree.
pub fn fingerprint(columns: &[Column]) -> String {
    hash_string(&signature(columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_known_values() {
        // FNV-1a 32 of "" is the offset basis; of "a" is 0xe40c292c.
        assert_eq!(hash_string(""), to_base36(FNV_OFFSET));
        assert_eq!(hash_string("a"), to_base36(0xe40c_292c));
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
    }

    #[test]
    fn test_signature_shape() {
        let columns = vec![
            Column::new("a", "A"),
            Column::group("G", vec![Column::field("x.y", "XY")]),
        ];
        assert_eq!(signature(&columns), "0:a::A|1:::G|1.0:x.y:x.y:XY");
        assert_eq!(signature(&[]), "empty");
    }
}
