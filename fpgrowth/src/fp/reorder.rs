use super::frequency::ItemFrequencyTable;
use super::Item;
use std::collections::HashSet;

/// Rewrites a transaction to its supported items in global order.
///
/// The walk is over the ordering, not the transaction, so unsupported items
/// and repeats fall out without a separate pass.
pub fn order_transaction<T: Item>(transaction: &[T], table: &ItemFrequencyTable<T>) -> Vec<T> {
    let present: HashSet<&T> = transaction.iter().collect();

    table
        .ordering()
        .filter(|item| present.contains(item))
        .cloned()
        .collect()
}

pub fn order_transactions<T: Item, S: AsRef<[T]>>(
    transactions: &[S],
    table: &ItemFrequencyTable<T>,
) -> Vec<Vec<T>> {
    transactions
        .iter()
        .map(|transaction| order_transaction(transaction.as_ref(), table))
        .collect()
}
