//! Transaction encoding: raw labels into a boolean transaction matrix.
//!
//! `encode` builds the sorted item universe and one bitset row per input
//! transaction. Encoding is total and deterministic: the same transaction
//! slice always produces the same universe and the same matrix, bit for bit.

pub mod bitset;

use affinity_core::errors::EncodeError;
use affinity_core::types::collections::FxHashMap;
use affinity_core::types::ItemId;

pub use bitset::TransactionBitset;

/// One basket of raw item labels.
///
/// Labels are treated as a presence set: duplicates within a transaction
/// collapse to a single membership bit during encoding.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    pub items: Vec<String>,
}

impl Transaction {
    /// Create a transaction from any iterable of labels.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable sorted universe of distinct item labels.
///
/// `ItemId`s are dense indices into the sorted label list, so the universe
/// doubles as the label arena: every id minted here resolves back to its
/// label in O(1).
#[derive(Debug, Clone)]
pub struct ItemUniverse {
    labels: Vec<String>,
    index: FxHashMap<String, ItemId>,
}

impl ItemUniverse {
    fn from_labels(mut labels: Vec<String>) -> Self {
        labels.sort_unstable();
        labels.dedup();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), ItemId::new(i as u32)))
            .collect();
        Self { labels, index }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the universe has no items.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label for `id`. Ids minted by this universe are always valid.
    pub fn label(&self, id: ItemId) -> &str {
        &self.labels[id.as_usize()]
    }

    /// Look up the id for a label, if present.
    pub fn id(&self, label: &str) -> Option<ItemId> {
        self.index.get(label).copied()
    }

    /// All labels in id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Boolean transaction matrix: one bitset row per input transaction.
///
/// Row count and order match the input slice, so support denominators
/// stay aligned with the original transaction count.
#[derive(Debug, Clone)]
pub struct TransactionMatrix {
    rows: Vec<TransactionBitset>,
    universe_size: usize,
}

impl TransactionMatrix {
    /// Number of transaction rows.
    pub fn transaction_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of items in the universe this matrix was encoded against.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// The bitset rows in input order.
    pub fn rows(&self) -> &[TransactionBitset] {
        &self.rows
    }

    /// Count of rows containing every bit of `mask`.
    pub fn support_count(&self, mask: &TransactionBitset) -> usize {
        self.rows.iter().filter(|row| row.contains_all(mask)).count()
    }
}

/// Encode transactions into a sorted universe and a boolean matrix.
///
/// Labels are used verbatim; normalization happens upstream where the
/// data is loaded. A transaction whose labels all collapse away still
/// occupies an all-zero row.
///
/// Errors with `EncodeError::EmptyInput` when there are zero transactions
/// or zero distinct items.
pub fn encode(
    transactions: &[Transaction],
) -> Result<(ItemUniverse, TransactionMatrix), EncodeError> {
    if transactions.is_empty() {
        return Err(EncodeError::EmptyInput {
            transaction_count: 0,
            distinct_items: 0,
        });
    }

    let all_labels: Vec<String> = transactions
        .iter()
        .flat_map(|t| t.items.iter().cloned())
        .collect();
    let universe = ItemUniverse::from_labels(all_labels);

    if universe.is_empty() {
        return Err(EncodeError::EmptyInput {
            transaction_count: transactions.len(),
            distinct_items: 0,
        });
    }

    let rows = transactions
        .iter()
        .map(|transaction| {
            let mut row = TransactionBitset::new(universe.len());
            for label in &transaction.items {
                if let Some(id) = universe.id(label) {
                    row.set(id);
                }
            }
            row
        })
        .collect();

    let matrix = TransactionMatrix {
        rows,
        universe_size: universe.len(),
    };

    tracing::debug!(
        transactions = matrix.transaction_count(),
        distinct_items = universe.len(),
        "encoded transaction matrix"
    );

    Ok((universe, matrix))
}
