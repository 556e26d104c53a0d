//! Addressing objects relative to a focused Block
//!
//! The editor never holds "the current block" itself; callers pass the id of
//! the Block they are focused inside plus child indices down to the target.

use boxlevel_parser::ast::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPath {
    /// Id of the Block the path starts from
    pub scope: BlockId,
    /// Child indices from `scope` down to the target; empty = `scope` itself
    pub indices: Vec<usize>,
}

/// Borrowed view of whatever a path resolves to
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Block(&'a Block),
    Wall(&'a Wall),
    Floor(&'a Floor),
    Ref(&'a Ref),
}

#[derive(Debug)]
pub enum NodeMut<'a> {
    Block(&'a mut Block),
    Wall(&'a mut Wall),
    Floor(&'a mut Floor),
    Ref(&'a mut Ref),
}

impl<'a> From<&'a LevelObject> for Node<'a> {
    fn from(object: &'a LevelObject) -> Self {
        match object {
            LevelObject::Block(block) => Node::Block(block),
            LevelObject::Wall(wall) => Node::Wall(wall),
            LevelObject::Floor(floor) => Node::Floor(floor),
            LevelObject::Ref(reference) => Node::Ref(reference),
        }
    }
}

impl<'a> From<&'a mut LevelObject> for NodeMut<'a> {
    fn from(object: &'a mut LevelObject) -> Self {
        match object {
            LevelObject::Block(block) => NodeMut::Block(block),
            LevelObject::Wall(wall) => NodeMut::Wall(wall),
            LevelObject::Floor(floor) => NodeMut::Floor(floor),
            LevelObject::Ref(reference) => NodeMut::Ref(reference),
        }
    }
}

impl Node<'_> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Node::Block(_) => ObjectKind::Block,
            Node::Wall(_) => ObjectKind::Wall,
            Node::Floor(_) => ObjectKind::Floor,
            Node::Ref(_) => ObjectKind::Ref,
        }
    }
}

impl NodeMut<'_> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            NodeMut::Block(_) => ObjectKind::Block,
            NodeMut::Wall(_) => ObjectKind::Wall,
            NodeMut::Floor(_) => ObjectKind::Floor,
            NodeMut::Ref(_) => ObjectKind::Ref,
        }
    }
}

impl ObjectPath {
    pub fn new(scope: BlockId, indices: impl Into<Vec<usize>>) -> Self {
        Self {
            scope,
            indices: indices.into(),
        }
    }

    /// Path addressing the Block `scope` itself
    pub fn block(scope: BlockId) -> Self {
        Self::new(scope, Vec::new())
    }

    /// Path starting at the document root
    pub fn from_root(doc: &Document, indices: impl Into<Vec<usize>>) -> Self {
        Self::new(doc.root.id, indices)
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self::new(self.scope, indices)
    }

    /// Path of the containing Block and the target's index within it
    pub fn split_last(&self) -> Option<(ObjectPath, usize)> {
        let (last, init) = self.indices.split_last()?;
        Some((Self::new(self.scope, init), *last))
    }

    pub fn resolve<'a>(&self, doc: &'a Document) -> Option<Node<'a>> {
        let mut current = doc.find_block(self.scope)?;
        let Some((last, init)) = self.indices.split_last() else {
            return Some(Node::Block(current));
        };
        for index in init {
            current = current.children.get(*index)?.as_block()?;
        }
        current.children.get(*last).map(Node::from)
    }

    pub fn resolve_mut<'a>(&self, doc: &'a mut Document) -> Option<NodeMut<'a>> {
        let mut current = doc.find_block_mut(self.scope)?;
        let Some((last, init)) = self.indices.split_last() else {
            return Some(NodeMut::Block(current));
        };
        for index in init {
            current = current.children.get_mut(*index)?.as_block_mut()?;
        }
        current.children.get_mut(*last).map(NodeMut::from)
    }

    /// The Block this path lands on, if it lands on one
    pub fn resolve_block<'a>(&self, doc: &'a Document) -> Option<&'a Block> {
        match self.resolve(doc)? {
            Node::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn resolve_block_mut<'a>(&self, doc: &'a mut Document) -> Option<&'a mut Block> {
        match self.resolve_mut(doc)? {
            NodeMut::Block(block) => Some(block),
            _ => None,
        }
    }

    /// The child object addressed by a non-empty path
    pub fn resolve_object<'a>(&self, doc: &'a Document) -> Option<&'a LevelObject> {
        let (parent, index) = self.split_last()?;
        parent.resolve_block(doc)?.children.get(index)
    }

    pub fn resolve_object_mut<'a>(&self, doc: &'a mut Document) -> Option<&'a mut LevelObject> {
        let (parent, index) = self.split_last()?;
        parent.resolve_block_mut(doc)?.children.get_mut(index)
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}", self.scope)?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut inner = Block::new(4, 3, 3);
        inner.children.push(LevelObject::Wall(Wall::new(2, 2)));
        let mut doc = boxlevel_parser::new_document();
        doc.root.children.push(LevelObject::Block(inner));
        doc
    }

    #[test]
    fn test_empty_path_is_scope_block() {
        let doc = sample();
        let node = ObjectPath::block(4).resolve(&doc).unwrap();
        assert!(matches!(node, Node::Block(b) if b.id == 4));
    }

    #[test]
    fn test_resolve_from_root() {
        let doc = sample();
        let path = ObjectPath::from_root(&doc, vec![2, 0]);
        assert!(matches!(path.resolve(&doc), Some(Node::Wall(w)) if (w.x, w.y) == (2, 2)));
    }

    #[test]
    fn test_resolve_from_inner_scope() {
        let doc = sample();
        let path = ObjectPath::new(4, vec![0]);
        assert_eq!(path.resolve(&doc).map(|n| n.kind()), Some(ObjectKind::Wall));
    }

    #[test]
    fn test_bad_paths_resolve_to_nothing() {
        let doc = sample();
        assert!(ObjectPath::new(99, vec![]).resolve(&doc).is_none());
        assert!(ObjectPath::new(0, vec![7]).resolve(&doc).is_none());
        // Floor cannot be descended into
        assert!(ObjectPath::new(0, vec![1, 0]).resolve(&doc).is_none());
        assert!(ObjectPath::block(0).resolve_object(&doc).is_none());
    }

    #[test]
    fn test_resolve_mut_edits_in_place() {
        let mut doc = sample();
        if let Some(NodeMut::Wall(wall)) = ObjectPath::new(4, vec![0]).resolve_mut(&mut doc) {
            wall.player_order = 9;
        }
        let LevelObject::Wall(wall) = &doc.find_block(4).unwrap().children[0] else {
            panic!("Expected wall");
        };
        assert_eq!(wall.player_order, 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectPath::new(3, vec![1, 0]).to_string(), "block 3/1/0");
    }
}
