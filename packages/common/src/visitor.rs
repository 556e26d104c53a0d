use boxlevel_parser::ast::*;

/// Visitor pattern for traversing the level tree immutably
///
/// This trait provides default implementations that walk the entire tree
/// in pre-order (file order). Override specific visit_* methods to act on
/// nodes; call the matching walk_* function to keep descending.
pub trait Visitor: Sized {
    fn visit_document(&mut self, doc: &Document) {
        walk_document(self, doc);
    }

    fn visit_header(&mut self, _header: &Header) {
        // Leaf node, no children to walk
    }

    fn visit_object(&mut self, object: &LevelObject) {
        walk_object(self, object);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_wall(&mut self, _wall: &Wall) {}

    fn visit_floor(&mut self, _floor: &Floor) {}

    fn visit_ref(&mut self, _reference: &Ref) {}
}

/// Mutable visitor pattern for rewriting the level tree in place
pub trait VisitorMut: Sized {
    fn visit_document_mut(&mut self, doc: &mut Document) {
        walk_document_mut(self, doc);
    }

    fn visit_header_mut(&mut self, _header: &mut Header) {}

    fn visit_object_mut(&mut self, object: &mut LevelObject) {
        walk_object_mut(self, object);
    }

    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }

    fn visit_wall_mut(&mut self, _wall: &mut Wall) {}

    fn visit_floor_mut(&mut self, _floor: &mut Floor) {}

    fn visit_ref_mut(&mut self, _reference: &mut Ref) {}
}

// Default walk implementations for immutable visitor

pub fn walk_document<V: Visitor>(visitor: &mut V, doc: &Document) {
    visitor.visit_header(&doc.header);
    visitor.visit_block(&doc.root);
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    for child in &block.children {
        visitor.visit_object(child);
    }
}

pub fn walk_object<V: Visitor>(visitor: &mut V, object: &LevelObject) {
    match object {
        LevelObject::Block(block) => visitor.visit_block(block),
        LevelObject::Wall(wall) => visitor.visit_wall(wall),
        LevelObject::Floor(floor) => visitor.visit_floor(floor),
        LevelObject::Ref(reference) => visitor.visit_ref(reference),
    }
}

// Default walk implementations for mutable visitor

pub fn walk_document_mut<V: VisitorMut>(visitor: &mut V, doc: &mut Document) {
    visitor.visit_header_mut(&mut doc.header);
    visitor.visit_block_mut(&mut doc.root);
}

pub fn walk_block_mut<V: VisitorMut>(visitor: &mut V, block: &mut Block) {
    for child in &mut block.children {
        visitor.visit_object_mut(child);
    }
}

pub fn walk_object_mut<V: VisitorMut>(visitor: &mut V, object: &mut LevelObject) {
    match object {
        LevelObject::Block(block) => visitor.visit_block_mut(block),
        LevelObject::Wall(wall) => visitor.visit_wall_mut(wall),
        LevelObject::Floor(floor) => visitor.visit_floor_mut(floor),
        LevelObject::Ref(reference) => visitor.visit_ref_mut(reference),
    }
}

/// Every Block id in pre-order, duplicates included
pub fn collect_block_ids(doc: &Document) -> Vec<BlockId> {
    struct Ids(Vec<BlockId>);

    impl Visitor for Ids {
        fn visit_block(&mut self, block: &Block) {
            self.0.push(block.id);
            walk_block(self, block);
        }
    }

    let mut ids = Ids(Vec::new());
    ids.visit_document(doc);
    ids.0
}
