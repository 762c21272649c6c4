use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::search::*;
use direction::*;
use grid_2d::*;
use num_traits::{NumCast, One, Zero};
use std::ops::Add;

/// Straight-line distance between `a` and `b`, truncated towards zero.
pub fn euclidean_distance(a: Coord, b: Coord) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt() as i32
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + NumCast + Zero + One,
{
    /// Best-first search over cardinal moves of unit cost, ordered by cost
    /// so far plus the truncated euclidean distance to the goal.
    pub fn astar_euclidean_distance_heuristic(
        &mut self,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Direction>,
    ) -> Result<SearchMetadata<Cost>, Error> {
        let heuristic_fn =
            |a, b| NumCast::from(euclidean_distance(a, b)).expect("Failed to cast to Cost");

        self.search_general(start, goal, heuristic_fn, config, path)
    }
}

/// Searches a `rows` by `cols` grid, where valid cells satisfy
/// `0 <= x < rows` and `0 <= y < cols`. Dimensions past `MAX_DIMENSION`
/// are clamped, as no coordinate can reach them.
pub fn search(
    start: Coord,
    goal: Coord,
    rows: u32,
    cols: u32,
    config: SearchConfig,
) -> Result<SearchMetadata<u32>, Error> {
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyGrid);
    }
    let size = Size::new(rows.min(MAX_DIMENSION), cols.min(MAX_DIMENSION));
    let mut ctx = SearchContext::new(size);
    let mut path = Vec::new();
    ctx.astar_euclidean_distance_heuristic(start, goal, config, &mut path)
}
