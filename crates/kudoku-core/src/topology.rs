//! Precomputed topology of the 9x9 grid.
//!
//! Everything here is derived once from the fixed geometry and built in
//! `const` context: the 27 structural groups, each cell's group membership,
//! each cell's peer set, and the 54 line/box intersections used by the
//! locked-candidates technique. The tables are immutable and shared
//! read-only by all concurrent solves.

use crate::cell::Cell;

/// The kind of a structural group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// One of the nine rows.
    Row,
    /// One of the nine columns.
    Column,
    /// One of the nine 3x3 boxes.
    Box,
}

/// One of the 27 structural groups: 9 rows, 9 columns, 9 boxes.
///
/// Groups are indexed 0-26 in [`GROUPS`]: rows 0-8, columns 9-17,
/// boxes 18-26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    cells: [Cell; 9],
}

impl Group {
    /// Returns the group's kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the group's nine member cells.
    #[must_use]
    #[inline]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Index of the group holding row `row` in [`GROUPS`].
#[must_use]
#[inline]
pub const fn row_group(row: u8) -> usize {
    assert!(row < 9);
    row as usize
}

/// Index of the group holding column `col` in [`GROUPS`].
#[must_use]
#[inline]
pub const fn col_group(col: u8) -> usize {
    assert!(col < 9);
    9 + col as usize
}

/// Index of the group holding box `box_index` in [`GROUPS`].
#[must_use]
#[inline]
pub const fn box_group(box_index: u8) -> usize {
    assert!(box_index < 9);
    18 + box_index as usize
}

/// The 27 structural groups: rows 0-8, columns 9-17, boxes 18-26.
pub static GROUPS: [Group; 27] = build_groups();

/// For each cell, the indices of its row, column, and box groups in
/// [`GROUPS`].
pub static CELL_GROUPS: [[usize; 3]; 81] = build_cell_groups();

/// For each cell, its 20 peers in index order.
pub static PEERS: [[Cell; 20]; 81] = build_peers();

/// The 54 line/box intersections (each box crossed with its 3 rows and
/// 3 columns), used by locked-candidates analysis.
pub static INTERSECTIONS: [Intersection; 54] = build_intersections();

/// A line/box intersection and its two complements.
///
/// If a digit's candidates within the box are confined to `shared`, the
/// digit can be eliminated from `rest_of_line`; if its candidates within
/// the line are confined to `shared`, it can be eliminated from
/// `rest_of_box`.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Index of the row or column group in [`GROUPS`].
    pub line: usize,
    /// Index of the box group in [`GROUPS`].
    pub bx: usize,
    /// The three cells common to the line and the box.
    pub shared: [Cell; 3],
    /// The six cells of the line outside the box.
    pub rest_of_line: [Cell; 6],
    /// The six cells of the box outside the line.
    pub rest_of_box: [Cell; 6],
}

const fn build_groups() -> [Group; 27] {
    let mut groups = [Group {
        kind: GroupKind::Row,
        cells: [Cell::new(0); 9],
    }; 27];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 9 {
        groups[9 + i].kind = GroupKind::Column;
        groups[18 + i].kind = GroupKind::Box;
        let mut j = 0;
        while j < 9 {
            groups[i].cells[j] = Cell::new((i * 9 + j) as u8);
            groups[9 + i].cells[j] = Cell::new((j * 9 + i) as u8);
            let row = (i / 3) * 3 + j / 3;
            let col = (i % 3) * 3 + j % 3;
            groups[18 + i].cells[j] = Cell::new((row * 9 + col) as u8);
            j += 1;
        }
        i += 1;
    }
    groups
}

const fn build_cell_groups() -> [[usize; 3]; 81] {
    let mut table = [[0; 3]; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        let cell = Cell::new(i as u8);
        table[i] = [
            row_group(cell.row()),
            col_group(cell.col()),
            box_group(cell.box_index()),
        ];
        i += 1;
    }
    table
}

const fn build_peers() -> [[Cell; 20]; 81] {
    let mut peers = [[Cell::new(0); 20]; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        let cell = Cell::new(i as u8);
        let mut n = 0;
        let mut j = 0;
        while j < 81 {
            if j != i {
                let other = Cell::new(j as u8);
                if other.row() == cell.row()
                    || other.col() == cell.col()
                    || other.box_index() == cell.box_index()
                {
                    peers[i][n] = other;
                    n += 1;
                }
            }
            j += 1;
        }
        assert!(n == 20);
        i += 1;
    }
    peers
}

const fn contains(cells: &[Cell; 9], target: Cell) -> bool {
    let mut i = 0;
    while i < 9 {
        if cells[i].index() == target.index() {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_intersections() -> [Intersection; 54] {
    // Statics cannot be read in const context, so rebuild the group table
    // locally; the evaluation happens once at compile time either way.
    let groups = build_groups();
    let mut table = [Intersection {
        line: 0,
        bx: 0,
        shared: [Cell::new(0); 3],
        rest_of_line: [Cell::new(0); 6],
        rest_of_box: [Cell::new(0); 6],
    }; 54];

    let mut b = 0;
    #[expect(clippy::cast_possible_truncation)]
    while b < 9 {
        let mut k = 0;
        while k < 6 {
            // k 0-2: the box's three rows; k 3-5: its three columns.
            let line = if k < 3 {
                row_group(((b / 3) * 3 + k) as u8)
            } else {
                col_group(((b % 3) * 3 + (k - 3)) as u8)
            };
            let bx = box_group(b as u8);
            let line_cells = &groups[line].cells;
            let box_cells = &groups[bx].cells;

            let entry = &mut table[b * 6 + k];
            entry.line = line;
            entry.bx = bx;

            let mut shared = 0;
            let mut rest_line = 0;
            let mut i = 0;
            while i < 9 {
                if contains(box_cells, line_cells[i]) {
                    entry.shared[shared] = line_cells[i];
                    shared += 1;
                } else {
                    entry.rest_of_line[rest_line] = line_cells[i];
                    rest_line += 1;
                }
                i += 1;
            }
            let mut rest_box = 0;
            let mut i = 0;
            while i < 9 {
                if !contains(line_cells, box_cells[i]) {
                    entry.rest_of_box[rest_box] = box_cells[i];
                    rest_box += 1;
                }
                i += 1;
            }
            assert!(shared == 3 && rest_line == 6 && rest_box == 6);

            k += 1;
        }
        b += 1;
    }
    table
}
