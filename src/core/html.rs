// src/core/html.rs
// Tolerant table reader for firmware-generated pages.
// Keeps only table structure: tables in document order (nested ones included),
// their rows, and each row's cells as plain text. Tag names match ASCII
// case-insensitively; missing end tags are implied the way browsers do for
// rows and cells.

use super::sanitize::decode_entities;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Header, // <th>
    Data,   // <td>
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// All descendant text, entities decoded, outer ASCII whitespace trimmed.
    /// A decoded `&nbsp;` is U+00A0 and is kept.
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// `<td>` texts in column order. Header cells are not data.
    pub fn data_cells(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter(|c| c.kind == CellKind::Data)
            .map(|c| c.text.as_str())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    tables: Vec<Table>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let mut b = Builder::default();
        for tok in Tokens::new(html) {
            match tok {
                Token::Open(name) => b.open(name),
                Token::Close(name) => b.close(name),
                Token::Text(t) => b.text(t),
            }
        }
        Self { tables: b.finish() }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/* ---------------- tree building ---------------- */

struct OpenTable {
    index: usize,
    in_row: bool,
    in_cell: bool,
}

#[derive(Default)]
struct Builder {
    tables: Vec<Table>,
    open: Vec<OpenTable>,
}

fn cell_kind(name: &str) -> Option<CellKind> {
    if name.eq_ignore_ascii_case("td") {
        Some(CellKind::Data)
    } else if name.eq_ignore_ascii_case("th") {
        Some(CellKind::Header)
    } else {
        None
    }
}

impl Builder {
    fn open(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("table") {
            self.tables.push(Table::default());
            self.open.push(OpenTable { index: self.tables.len() - 1, in_row: false, in_cell: false });
            return;
        }
        let Some(top) = self.open.last_mut() else { return };
        let table = &mut self.tables[top.index];

        if name.eq_ignore_ascii_case("tr") {
            // <tr> implies </tr> for a row left open
            table.rows.push(Row::default());
            top.in_row = true;
            top.in_cell = false;
        } else if let Some(kind) = cell_kind(name) {
            // cell with no row: open one
            if !top.in_row {
                table.rows.push(Row::default());
                top.in_row = true;
            }
            if let Some(row) = table.rows.last_mut() {
                row.cells.push(Cell { kind, text: s!() });
            }
            top.in_cell = true;
        }
    }

    fn close(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("table") {
            self.open.pop();
            return;
        }
        let Some(top) = self.open.last_mut() else { return };
        if name.eq_ignore_ascii_case("tr") {
            top.in_row = false;
            top.in_cell = false;
        } else if cell_kind(name).is_some() {
            top.in_cell = false;
        }
    }

    fn text(&mut self, t: &str) {
        let Some(top) = self.open.last() else { return };
        if !top.in_cell {
            return;
        }
        let cell = self.tables[top.index]
            .rows
            .last_mut()
            .and_then(|r| r.cells.last_mut());
        if let Some(cell) = cell {
            cell.text.push_str(t);
        }
    }

    fn finish(mut self) -> Vec<Table> {
        for cell in self
            .tables
            .iter_mut()
            .flat_map(|t| t.rows.iter_mut())
            .flat_map(|r| r.cells.iter_mut())
        {
            let text = decode_entities(&cell.text);
            cell.text = s!(text.trim_matches(|c: char| c.is_ascii_whitespace()));
        }
        self.tables
    }
}

/* ---------------- tokenizer ---------------- */

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Text(&'a str),
}

// Byte walker in the spirit of a visible-text iterator: tags are skipped
// quote-aware, comments/doctype dropped, <script>/<style> bodies jumped over.
struct Tokens<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len() }
    }

    fn starts_with_ci(&self, at: usize, pat: &str) -> bool {
        self.b
            .get(at..at + pat.len())
            .is_some_and(|w| w.eq_ignore_ascii_case(pat.as_bytes()))
    }

    fn find_ci(&self, from: usize, pat: &str) -> Option<usize> {
        (from..self.n).find(|&k| self.starts_with_ci(k, pat))
    }

    fn tag_name(&self, from: usize) -> &'a str {
        let end = (from..self.n)
            .find(|&k| !self.b[k].is_ascii_alphanumeric())
            .unwrap_or(self.n);
        &self.s[from..end]
    }

    /// Called with `self.i` on '<'; leaves it just past the closing '>'.
    /// Quotes only count when they open an attribute value (after '='), so a
    /// stray apostrophe in sloppy markup can't swallow the rest of the page.
    #[inline]
    fn skip_tag(&mut self) {
        self.i += 1;
        let mut quote: Option<u8> = None;
        let mut prev = b'<';
        while self.i < self.n {
            let c = self.b[self.i];
            self.i += 1;
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    b'"' | b'\'' if prev == b'=' => quote = Some(c),
                    b'>' => return,
                    _ => {}
                },
            }
            if !c.is_ascii_whitespace() {
                prev = c;
            }
        }
    }

    fn text_until_tag(&mut self, start: usize, from: usize) -> Token<'a> {
        let end = self.s[from..].find('<').map_or(self.n, |k| from + k);
        self.i = end;
        Token::Text(&self.s[start..end])
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            let start = self.i;
            if self.b[start] != b'<' {
                return Some(self.text_until_tag(start, start));
            }
            match self.b.get(start + 1) {
                Some(b'!') if self.starts_with_ci(start, "<!--") => {
                    self.i = self.s[start + 4..]
                        .find("-->")
                        .map_or(self.n, |k| start + 4 + k + 3);
                }
                Some(b'!') | Some(b'?') => self.skip_tag(),
                Some(b'/') if self.b.get(start + 2).is_some_and(u8::is_ascii_alphabetic) => {
                    let name = self.tag_name(start + 2);
                    self.skip_tag();
                    return Some(Token::Close(name));
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    let name = self.tag_name(start + 1);
                    self.skip_tag();
                    if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                        match self.find_ci(self.i, &join!("</", name)) {
                            Some(k) => {
                                self.i = k;
                                self.skip_tag();
                            }
                            None => self.i = self.n,
                        }
                        continue;
                    }
                    return Some(Token::Open(name));
                }
                // lone '<' is just text
                _ => return Some(self.text_until_tag(start, start + 1)),
            }
        }
        None
    }
}
