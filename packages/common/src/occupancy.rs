use boxlevel_parser::ast::*;
use std::collections::BTreeMap;

/// Whether a new object of `kind` may be placed at `(x, y)` inside `parent`.
///
/// A cell holds at most one non-Floor object and at most one Floor.
pub fn cell_accepts(parent: &Block, kind: ObjectKind, x: i32, y: i32) -> bool {
    let incoming_floor = kind == ObjectKind::Floor;
    !occupants(parent, x, y).any(|object| object.is_floor() == incoming_floor)
}

/// Children of `parent` sitting at `(x, y)`, in file order
pub fn occupants(parent: &Block, x: i32, y: i32) -> impl Iterator<Item = &LevelObject> {
    parent
        .children
        .iter()
        .filter(move |object| object.position() == (x, y))
}

/// A cell of one Block that breaks the occupancy rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellConflict {
    pub x: i32,
    pub y: i32,
    pub solids: usize,
    pub floors: usize,
}

/// Cells of `parent` holding two solids or two Floors, sorted by position
pub fn cell_conflicts(parent: &Block) -> Vec<CellConflict> {
    let mut cells: BTreeMap<(i32, i32), (usize, usize)> = BTreeMap::new();
    for object in &parent.children {
        let entry = cells.entry(object.position()).or_default();
        if object.is_floor() {
            entry.1 += 1;
        } else {
            entry.0 += 1;
        }
    }

    cells
        .into_iter()
        .filter(|(_, (solids, floors))| *solids > 1 || *floors > 1)
        .map(|((x, y), (solids, floors))| CellConflict {
            x,
            y,
            solids,
            floors,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent() -> Block {
        let mut block = Block::new(0, 5, 5);
        block.children.push(LevelObject::Wall(Wall::new(1, 1)));
        block.children.push(LevelObject::Floor(Floor::new(2, 2, FloorType::Button)));
        block
    }

    #[test]
    fn test_solid_blocks_solid() {
        let block = parent();
        assert!(!cell_accepts(&block, ObjectKind::Wall, 1, 1));
        assert!(!cell_accepts(&block, ObjectKind::Block, 1, 1));
        assert!(cell_accepts(&block, ObjectKind::Floor, 1, 1));
    }

    #[test]
    fn test_floor_blocks_floor_only() {
        let block = parent();
        assert!(!cell_accepts(&block, ObjectKind::Floor, 2, 2));
        assert!(cell_accepts(&block, ObjectKind::Ref, 2, 2));
    }

    #[test]
    fn test_cell_conflicts() {
        let mut block = parent();
        assert!(cell_conflicts(&block).is_empty());

        block.children.push(LevelObject::Ref(Ref::new(1, 1, 0)));
        assert_eq!(
            cell_conflicts(&block),
            vec![CellConflict {
                x: 1,
                y: 1,
                solids: 2,
                floors: 0
            }]
        );
    }
}
