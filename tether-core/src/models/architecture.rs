//! Architecture model items as extracted from component diagrams.

use serde::{Deserialize, Serialize};

/// Index of an architecture item within its model.
///
/// Item order inside [`ArchitectureModel`] defines the index space; indices
/// stay valid because models are append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchIndex(pub u32);

/// Kind of an architecture item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureItemKind {
    Component,
    Interface,
}

/// A named element of the architecture model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureItem {
    /// Stable identifier from the source model.
    pub id: String,
    /// Human-readable name, used for similarity comparison.
    pub name: String,
    pub kind: ArchitectureItemKind,
}

impl ArchitectureItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ArchitectureItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// An append-only collection of architecture items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureModel {
    /// Identifier of the source model.
    pub id: String,
    items: Vec<ArchitectureItem>,
}

impl ArchitectureModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item and returns its index.
    pub fn push(&mut self, item: ArchitectureItem) -> ArchIndex {
        let index = ArchIndex(self.items.len() as u32);
        self.items.push(item);
        index
    }

    pub fn item(&self, index: ArchIndex) -> Option<&ArchitectureItem> {
        self.items.get(index.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArchIndex, &ArchitectureItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ArchIndex(i as u32), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_sequential_indices() {
        let mut model = ArchitectureModel::new("arch");
        let a = model.push(ArchitectureItem::new(
            "c1",
            "UserService",
            ArchitectureItemKind::Component,
        ));
        let b = model.push(ArchitectureItem::new(
            "i1",
            "UserApi",
            ArchitectureItemKind::Interface,
        ));
        assert_eq!(a, ArchIndex(0));
        assert_eq!(b, ArchIndex(1));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_item_lookup_out_of_range() {
        let model = ArchitectureModel::new("arch");
        assert!(model.item(ArchIndex(0)).is_none());
        assert!(model.is_empty());
    }

    #[test]
    fn test_iter_pairs_indices_with_items() {
        let mut model = ArchitectureModel::new("arch");
        model.push(ArchitectureItem::new(
            "c1",
            "Storage",
            ArchitectureItemKind::Component,
        ));
        let collected: Vec<_> = model.iter().collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].0, ArchIndex(0));
        assert_eq!(collected[0].1.name, "Storage");
    }
}
