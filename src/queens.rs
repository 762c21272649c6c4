use crate::metadata::QueensMetadata;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

fn shares_line(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
    col_a == col_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}

/// True if a queen at (`row`, `col`) is not attacked by the queens in rows
/// `0..row` of `board`.
pub fn is_safe(board: &[usize], row: usize, col: usize) -> bool {
    board
        .iter()
        .take(row)
        .enumerate()
        .all(|(i, &placed)| !shares_line(i, placed, row, col))
}

/// Number of queen pairs sharing a column or diagonal.
pub fn count_conflicts(board: &[usize]) -> usize {
    let mut conflicts = 0;
    for (i, &a) in board.iter().enumerate() {
        for (j, &b) in board.iter().enumerate().skip(i + 1) {
            if shares_line(i, a, j, b) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Queens placed one per row; `columns()[row]` is the column of the queen
/// in that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.columns.len();
        for &queen in self.columns.iter() {
            for col in 0..n {
                if col == queen {
                    write!(f, "Q ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PartialPlacement {
    columns: Vec<usize>,
    conflicts: usize,
}

// Fewest conflicts first, then the deepest placement, then the
// lexicographically smallest one.
impl Ord for PartialPlacement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .conflicts
            .cmp(&self.conflicts)
            .then_with(|| self.columns.len().cmp(&other.columns.len()))
            .then_with(|| other.columns.cmp(&self.columns))
    }
}

impl PartialOrd for PartialPlacement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn solve(n: usize) -> Option<Placement> {
    solve_with_metadata(n).0
}

pub fn solve_with_metadata(n: usize) -> (Option<Placement>, QueensMetadata) {
    let mut metadata = QueensMetadata::default();
    let mut frontier = BinaryHeap::new();
    frontier.push(PartialPlacement {
        columns: Vec::new(),
        conflicts: 0,
    });

    debug!("placing {} queens", n);

    while let Some(current) = frontier.pop() {
        let row = current.columns.len();
        if row == n {
            debug!(
                "placed {} queens after expanding {} states",
                n, metadata.num_states_expanded
            );
            return (
                Some(Placement {
                    columns: current.columns,
                }),
                metadata,
            );
        }

        metadata.num_states_expanded += 1;

        for col in 0..n {
            if is_safe(&current.columns, row, col) {
                let mut columns = current.columns.clone();
                columns.push(col);
                let conflicts = count_conflicts(&columns);
                frontier.push(PartialPlacement { columns, conflicts });
            }
        }
    }

    debug!(
        "no placement of {} queens after expanding {} states",
        n, metadata.num_states_expanded
    );

    (None, metadata)
}
