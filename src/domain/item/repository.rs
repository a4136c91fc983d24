//! Item repository interface

use super::model::Item;

/// Read-only access to the backing item sequence.
///
/// Implementations return items in insertion order (ascending id) and never
/// change the sequence after construction.
pub trait ItemRepository: Send + Sync {
    fn all(&self) -> &[Item];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
