use crate::search::{key, BestCost};
use direction::Direction;
use grid_2d::Coord;
use std::collections::HashMap;
use std::slice;

/// Follows `from_parent` links back from the goal, writing the moves
/// from start to goal into `path`.
pub(crate) fn make_path<Cost>(
    best_costs: &HashMap<(i32, i32), BestCost<Cost>>,
    goal: Coord,
    path: &mut Vec<Direction>,
) {
    path.clear();
    let mut coord = goal;
    while let Some(from_parent) = best_costs
        .get(&key(coord))
        .and_then(|entry| entry.from_parent)
    {
        path.push(from_parent);
        coord = coord - from_parent.coord();
    }
    path.reverse();
}

pub struct PathWalk<'a> {
    current_coord: Coord,
    directions: slice::Iter<'a, Direction>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, path: &'a [Direction]) -> Self {
        Self {
            current_coord: start,
            directions: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Direction);
    fn next(&mut self) -> Option<Self::Item> {
        let &direction = self.directions.next()?;
        self.current_coord = self.current_coord + direction.coord();
        Some((self.current_coord, direction))
    }
}
