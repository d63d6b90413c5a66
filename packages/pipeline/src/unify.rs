//! Column unification: map heterogeneous source headers onto the
//! canonical schema.

use crate::schema::{CANONICAL_TEXT_COLUMNS, COL_ADDRESS, COL_NAME, COL_PLACE_URL};
use crate::types::RawTable;

/// Source-native header spellings and their canonical names.
const RENAME_TABLE: [(&str, &str); 8] = [
    ("업체명", COL_NAME),
    ("매장명", COL_NAME),
    ("상호", COL_NAME),
    ("주소", COL_ADDRESS),
    ("도로명주소", COL_ADDRESS),
    ("소재지", COL_ADDRESS),
    ("네이버플레이스URL", COL_PLACE_URL),
    ("플레이스URL", COL_PLACE_URL),
];

/// Apply the rename table, then guarantee every canonical text column is
/// present (inserted empty when missing). Unrecognized columns are kept;
/// the export projection drops them at the end.
pub fn unify_columns(table: &mut RawTable) {
    for (from, to) in RENAME_TABLE {
        table.rename_column(from, to);
    }
    for column in CANONICAL_TEXT_COLUMNS {
        table.ensure_column(column, "");
    }
}
