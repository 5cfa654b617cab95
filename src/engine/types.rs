// src/engine/types.rs

/* Table layout by position */

/// Where a table sits in its page and what its data rows look like.
/// Modem pages carry no usable ids/classes, so everything is positional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    /// Index among the page's tables, document order.
    pub index: usize,
    /// Leading rows that are headings/captions, never data.
    pub header_rows: usize,
    /// Exact `<td>` count of a data row.
    pub cells: usize,
}

/// Column layout of one channel table: which column is the map key, and a
/// positional constructor for the record.
pub trait ChannelRow: Sized {
    const SPEC: TableSpec;
    const KEY_COLUMN: usize;

    /// `cells.len() == Self::SPEC.cells` is guaranteed by the caller.
    fn from_cells(cells: &[&str]) -> Self;
}

/* Failure policy */

/// Things that can go wrong while reading a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Irregularity {
    /// Row cell count differs from `TableSpec::cells`.
    ShapeMismatch,
    /// First cell of a status row isn't in the label table.
    UnknownLabel,
    /// Page has no table at `TableSpec::index`.
    MissingTable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Leave it out of the record, keep going.
    Omit,
    /// Fail the whole run.
    Abort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub shape_mismatch: Disposition,
    pub unknown_label: Disposition,
    pub missing_table: Disposition,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            shape_mismatch: Disposition::Omit,
            unknown_label: Disposition::Omit,
            missing_table: Disposition::Abort,
        }
    }
}

impl Policy {
    pub fn disposition(&self, what: Irregularity) -> Disposition {
        match what {
            Irregularity::ShapeMismatch => self.shape_mismatch,
            Irregularity::UnknownLabel => self.unknown_label,
            Irregularity::MissingTable => self.missing_table,
        }
    }

    pub fn aborts(&self, what: Irregularity) -> bool {
        self.disposition(what) == Disposition::Abort
    }
}
