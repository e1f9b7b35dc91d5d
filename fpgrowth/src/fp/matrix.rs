use super::error::{MiningError, MiningResult};
use ndarray::ArrayView2;

/// Convert a binary transaction matrix to lists of column indices.
///
/// Rows are transactions and columns are items; a cell of 1 means the item
/// is present. Any other value than 0 or 1 is rejected.
pub fn transactions_from_matrix(transactions: ArrayView2<i32>) -> MiningResult<Vec<Vec<usize>>> {
    transactions
        .outer_iter()
        .enumerate()
        .map(|(row, cells)| {
            let mut items = Vec::new();
            for (column, &cell) in cells.iter().enumerate() {
                match cell {
                    0 => {}
                    1 => items.push(column),
                    other => {
                        return Err(MiningError::InvalidMatrix {
                            reason: format!("cell ({row}, {column}) holds {other}, expected 0 or 1"),
                        })
                    }
                }
            }
            Ok(items)
        })
        .collect()
}
