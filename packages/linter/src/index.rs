//! One pass over a document collecting everything the rules look at

use boxlevel_common::{cell_conflicts, CellConflict, ObjectPath, Visitor};
use boxlevel_parser::ast::*;
use std::collections::BTreeMap;

/// A Ref and where it sits
#[derive(Debug, Clone, PartialEq)]
pub struct RefSite {
    pub target_id: BlockId,
    pub exit_block: bool,
    /// Id of the Block directly containing the Ref
    pub parent_id: BlockId,
    pub x: i32,
    pub y: i32,
    pub path: ObjectPath,
}

/// A child object and the extent of the Block holding it
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: ObjectKind,
    pub x: i32,
    pub y: i32,
    pub parent_id: BlockId,
    pub parent_width: u32,
    pub parent_height: u32,
    pub path: ObjectPath,
}

impl Placement {
    pub fn in_bounds(&self) -> bool {
        (0..self.parent_width as i64).contains(&(self.x as i64))
            && (0..self.parent_height as i64).contains(&(self.y as i64))
    }
}

/// Facts gathered from a document in a single pre-order walk
#[derive(Debug, Clone, Default)]
pub struct LevelIndex {
    /// Every Block id with the paths where it occurs
    pub block_ids: BTreeMap<BlockId, Vec<ObjectPath>>,
    pub refs: Vec<RefSite>,
    pub has_player: bool,
    pub has_player_button: bool,
    /// Boxes (`fillWithWalls`) that have children: id, path, child count
    pub filled_with_children: Vec<(BlockId, ObjectPath, usize)>,
    /// Every non-root object with its parent's extent
    pub placements: Vec<Placement>,
    /// Occupancy violations per containing Block
    pub conflicts: Vec<(BlockId, ObjectPath, CellConflict)>,
}

impl LevelIndex {
    pub fn build(doc: &Document) -> Self {
        let mut collector = Collector {
            index: LevelIndex::default(),
            root: doc.root.id,
            path: Vec::new(),
        };
        collector.visit_document(doc);
        collector.index
    }

    pub fn contains_block(&self, id: BlockId) -> bool {
        self.block_ids.contains_key(&id)
    }
}

struct Collector {
    index: LevelIndex,
    root: BlockId,
    /// Child indices from the root to the object being visited
    path: Vec<usize>,
}

impl Collector {
    fn current_path(&self) -> ObjectPath {
        ObjectPath::new(self.root, self.path.clone())
    }
}

impl Visitor for Collector {
    fn visit_block(&mut self, block: &Block) {
        let path = self.current_path();
        self.index
            .block_ids
            .entry(block.id)
            .or_default()
            .push(path.clone());

        if block.player {
            self.index.has_player = true;
        }
        if block.fill_with_walls && !block.children.is_empty() {
            self.index
                .filled_with_children
                .push((block.id, path.clone(), block.children.len()));
        }
        for conflict in cell_conflicts(block) {
            self.index.conflicts.push((block.id, path.clone(), conflict));
        }

        for (i, child) in block.children.iter().enumerate() {
            self.path.push(i);
            let (x, y) = child.position();
            self.index.placements.push(Placement {
                kind: child.kind(),
                x,
                y,
                parent_id: block.id,
                parent_width: block.width,
                parent_height: block.height,
                path: self.current_path(),
            });
            if let LevelObject::Ref(reference) = child {
                self.index.refs.push(RefSite {
                    target_id: reference.target_id,
                    exit_block: reference.exit_block,
                    parent_id: block.id,
                    x,
                    y,
                    path: self.current_path(),
                });
            }
            self.visit_object(child);
            self.path.pop();
        }
    }

    fn visit_floor(&mut self, floor: &Floor) {
        if floor.floor_type == FloorType::PlayerButton {
            self.index.has_player_button = true;
        }
    }
}
