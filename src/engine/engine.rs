// src/engine/engine.rs
// Positional table lookup and row filtering shared by every page spec.
use crate::config::options::PageKind;
use crate::core::html::{Document, Table};
use crate::error::{Error, Result};
use crate::record::ChannelMap;

use super::types::*;

/// Table at `spec.index`. Missing → error, or `None` if the policy omits.
pub fn locate<'d>(
    doc: &'d Document,
    page: PageKind,
    spec: &TableSpec,
    policy: &Policy,
) -> Result<Option<&'d Table>> {
    match doc.table(spec.index) {
        Some(t) => Ok(Some(t)),
        None if policy.aborts(Irregularity::MissingTable) => Err(Error::MissingTable {
            page: page.key(),
            index: spec.index,
            found: doc.len(),
        }),
        None => Ok(None),
    }
}

/// Data cells of every row past the header region whose `<td>` count is
/// exactly `spec.cells`. Other rows are dropped (or abort, per policy).
pub fn data_rows<'t>(table: &'t Table, spec: &TableSpec, policy: &Policy) -> Result<Vec<Vec<&'t str>>> {
    let mut out = Vec::new();
    for (i, row) in table.rows.iter().enumerate().skip(spec.header_rows) {
        let cells = row.data_cells();
        if cells.len() == spec.cells {
            out.push(cells);
        } else if policy.aborts(Irregularity::ShapeMismatch) {
            return Err(Error::RowShape {
                table: spec.name,
                row: i,
                expected: spec.cells,
                found: cells.len(),
            });
        }
    }
    Ok(out)
}

/// Channel table → map keyed by `T::KEY_COLUMN`, in page order.
pub fn channels<T: ChannelRow>(doc: &Document, page: PageKind, policy: &Policy) -> Result<ChannelMap<T>> {
    let mut out = ChannelMap::new();
    let Some(table) = locate(doc, page, &T::SPEC, policy)? else {
        return Ok(out);
    };
    for cells in data_rows(table, &T::SPEC, policy)? {
        out.insert(s!(cells[T::KEY_COLUMN]), T::from_cells(&cells));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: TableSpec = TableSpec { name: "test", index: 0, header_rows: 1, cells: 2 };

    #[derive(Debug, PartialEq)]
    struct Pair(String);

    impl ChannelRow for Pair {
        const SPEC: TableSpec = SPEC;
        const KEY_COLUMN: usize = 1;
        fn from_cells(cells: &[&str]) -> Self {
            Pair(s!(cells[0]))
        }
    }

    fn doc() -> Document {
        Document::parse(
            "<table>\
             <tr><td>a</td><td>b</td></tr>\
             <tr><td>1</td><td>x</td></tr>\
             <tr><td>2</td></tr>\
             <tr><td>3</td><td>y</td><td>extra</td></tr>\
             <tr><td>4</td><td>z</td></tr>\
             </table>",
        )
    }

    #[test]
    fn only_exact_shape_rows_survive() {
        let d = doc();
        let rows = data_rows(d.table(0).unwrap(), &SPEC, &Policy::default()).unwrap();
        assert_eq!(rows, vec![vec!["1", "x"], vec!["4", "z"]]);
    }

    #[test]
    fn header_rows_never_count() {
        let d = doc();
        let rows = data_rows(d.table(0).unwrap(), &SPEC, &Policy::default()).unwrap();
        assert!(!rows.contains(&vec!["a", "b"]));
    }

    #[test]
    fn strict_policy_aborts_on_bad_row() {
        let d = doc();
        let strict = Policy { shape_mismatch: Disposition::Abort, ..Policy::default() };
        let err = data_rows(d.table(0).unwrap(), &SPEC, &strict).unwrap_err();
        assert!(matches!(err, Error::RowShape { row: 2, expected: 2, found: 1, .. }));
    }

    #[test]
    fn missing_table_is_fatal_by_default() {
        let d = Document::parse("<p>no tables</p>");
        let spec = TableSpec { index: 2, ..SPEC };
        let err = locate(&d, PageKind::ConnectionStatus, &spec, &Policy::default()).unwrap_err();
        assert!(matches!(err, Error::MissingTable { page: "connectionstatus", index: 2, found: 0 }));
    }

    #[test]
    fn missing_table_can_be_omitted() {
        let d = Document::parse("");
        let lax = Policy { missing_table: Disposition::Omit, ..Policy::default() };
        let map = channels::<Pair>(&d, PageKind::SoftwareInfo, &lax).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn channels_keyed_by_key_column() {
        let map = channels::<Pair>(&doc(), PageKind::ConnectionStatus, &Policy::default()).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "z"]);
        assert_eq!(map["x"], Pair(s!("1")));
    }
}
