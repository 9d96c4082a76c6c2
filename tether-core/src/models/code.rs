//! Code model items as extracted from the analyzed codebase.

use serde::{Deserialize, Serialize};

/// Index of a code item within its model.
///
/// Item order inside [`CodeModel`] defines the index space; indices stay
/// valid because models are append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodeIndex(pub u32);

/// Kind of a code item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeItemKind {
    /// A compilation unit, e.g. a single source file or class.
    Unit,
    Module,
    Package,
}

/// A named element of the code model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeItem {
    /// Stable identifier from the source model.
    pub id: String,
    /// Simple name, used for similarity comparison.
    pub name: String,
    /// Slash-separated path within the codebase.
    pub path: String,
    pub kind: CodeItemKind,
}

impl CodeItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        kind: CodeItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Final path segment with any extension removed.
    pub fn path_stem(&self) -> &str {
        let base = self.path.rsplit('/').next().unwrap_or(&self.path);
        match base.rfind('.') {
            Some(0) | None => base,
            Some(i) => &base[..i],
        }
    }
}

/// An append-only collection of code items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeModel {
    /// Identifier of the source model.
    pub id: String,
    items: Vec<CodeItem>,
}

impl CodeModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item and returns its index.
    pub fn push(&mut self, item: CodeItem) -> CodeIndex {
        let index = CodeIndex(self.items.len() as u32);
        self.items.push(item);
        index
    }

    pub fn item(&self, index: CodeIndex) -> Option<&CodeItem> {
        self.items.get(index.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CodeIndex, &CodeItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (CodeIndex(i as u32), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_stem_strips_extension() {
        let item = CodeItem::new("u1", "UserServiceImpl", "src/user/UserServiceImpl.java", CodeItemKind::Unit);
        assert_eq!(item.path_stem(), "UserServiceImpl");
    }

    #[test]
    fn test_path_stem_without_extension() {
        let item = CodeItem::new("m1", "user", "src/user", CodeItemKind::Module);
        assert_eq!(item.path_stem(), "user");
    }

    #[test]
    fn test_path_stem_hidden_file() {
        let item = CodeItem::new("u2", "env", ".env", CodeItemKind::Unit);
        assert_eq!(item.path_stem(), ".env");
    }

    #[test]
    fn test_push_and_lookup() {
        let mut model = CodeModel::new("code");
        let idx = model.push(CodeItem::new("u1", "Parser", "src/parser.rs", CodeItemKind::Unit));
        assert_eq!(idx, CodeIndex(0));
        let item = model.item(idx).unwrap();
        assert_eq!(item.name, "Parser");
    }
}
