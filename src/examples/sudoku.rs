//! Square grid puzzles ("sudoku") encoded as a binary CSP: one variable per
//! cell keyed by its coordinates, domains `1..=n`, and symmetric inequality
//! arcs between every pair of cells sharing a row, column, or block.

use serde::Serialize;

use crate::solver::{
    constraints::not_equal::NotEqual,
    engine::Assignment,
    problem::Csp,
};

/// A cell coordinate, used as the variable key.
///
/// A proper composite key: two cells collide only if both coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

fn peers(a: Cell, b: Cell, block: usize) -> bool {
    a.row == b.row
        || a.col == b.col
        || (a.row / block == b.row / block && a.col / block == b.col / block)
}

/// Builds the CSP for a grid with the given block size (the grid is
/// `block² × block²`). Cells listed in `givens` get singleton domains.
pub fn puzzle(block: usize, givens: &[(Cell, i64)]) -> Csp<Cell, i64> {
    let size = block * block;
    let given: std::collections::HashMap<Cell, i64> = givens.iter().copied().collect();

    let mut builder = Csp::builder();
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            builder = match given.get(&cell) {
                Some(&value) => builder.variable(cell, [value]),
                None => builder.variable(cell, 1..=size as i64),
            };
        }
    }

    // One symmetric arc pair per peer pair; enumerating ordered cell pairs
    // once avoids duplicate arcs for cells sharing both a row/col and block.
    let cells: Vec<Cell> = (0..size)
        .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
        .collect();
    for (i, &a) in cells.iter().enumerate() {
        for &b in &cells[i + 1..] {
            if peers(a, b, block) {
                builder = builder.symmetric(a, b, NotEqual);
            }
        }
    }

    builder.build()
}

/// Lays a complete assignment back out as a row-major grid.
pub fn to_grid(solution: &Assignment<Cell, i64>, block: usize) -> Vec<Vec<i64>> {
    let size = block * block;
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    solution
                        .get(&Cell::new(row, col))
                        .copied()
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}
