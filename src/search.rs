use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::path;
use direction::*;
use grid_2d::*;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::ops::Add;

/// Largest usable grid dimension; coordinates are `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Neighbours are visited in this order: +x, -x, +y, -y.
pub(crate) const NEIGHBOUR_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::East,
    CardinalDirection::West,
    CardinalDirection::South,
    CardinalDirection::North,
];

/// Entry in the best cost table, keyed by the cell's `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BestCost<Cost> {
    pub(crate) from_parent: Option<Direction>,
    pub(crate) cost: Cost,
}

pub(crate) fn key(coord: Coord) -> (i32, i32) {
    (coord.x, coord.y)
}

#[derive(Debug, Clone)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) coord: Coord,
    pub(crate) cost_so_far: Cost,
    pub(crate) heuristic: Cost,
}

impl<Cost: Copy + Add<Cost, Output = Cost>> SearchNode<Cost> {
    fn new(coord: Coord, cost_so_far: Cost, heuristic: Cost) -> Self {
        Self {
            coord,
            cost_so_far,
            heuristic,
        }
    }

    pub(crate) fn priority(&self) -> Cost {
        self.cost_so_far + self.heuristic
    }
}
impl<Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost>> PartialEq for SearchNode<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost>> PartialOrd for SearchNode<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost>> Eq for SearchNode<Cost> {}

// Reversed so the max-heap pops the lowest priority first. Equal
// priorities pop in ascending (x, y) order.
impl<Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost>> Ord for SearchNode<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority()
            .partial_cmp(&self.priority())
            .unwrap_or(Ordering::Equal)
            .then_with(|| (other.coord.x, other.coord.y).cmp(&(self.coord.x, self.coord.y)))
            .then_with(|| {
                other
                    .cost_so_far
                    .partial_cmp(&self.cost_so_far)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

/// Search state for a grid of a fixed size. The table only holds cells
/// discovered by the most recent search.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost> {
    pub(crate) size: Size,
    pub(crate) frontier: BinaryHeap<SearchNode<Cost>>,
    pub(crate) best_costs: HashMap<(i32, i32), BestCost<Cost>>,
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + Zero,
{
    pub fn new(size: Size) -> Self {
        Self {
            size,
            best_costs: HashMap::new(),
            frontier: BinaryHeap::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.size.width()
            && (coord.y as u32) < self.size.height()
    }

    /// Lowest cost found for `coord` by the most recent search.
    pub fn best_cost(&self, coord: Coord) -> Option<Cost> {
        self.best_costs.get(&key(coord)).map(|entry| entry.cost)
    }

    /// Number of cells discovered by the most recent search.
    pub fn num_cells_discovered(&self) -> usize {
        self.best_costs.len()
    }

    fn neighbour(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let offset = direction.coord();
        let neighbour = Coord::new(
            coord.x.checked_add(offset.x)?,
            coord.y.checked_add(offset.y)?,
        );
        if self.contains(neighbour) {
            Some(neighbour)
        } else {
            None
        }
    }
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Add<Cost, Output = Cost> + PartialOrd<Cost> + Zero + One,
{
    pub(crate) fn init<H>(
        &mut self,
        start: Coord,
        goal: Coord,
        heuristic_fn: &H,
    ) -> Result<SearchNode<Cost>, Error>
    where
        H: Fn(Coord, Coord) -> Cost,
    {
        if !self.contains(start) {
            return Err(Error::StartOutsideGrid);
        }
        if !self.contains(goal) {
            return Err(Error::GoalOutsideGrid);
        }

        self.frontier.clear();
        self.best_costs.clear();
        self.best_costs.insert(
            key(start),
            BestCost {
                from_parent: None,
                cost: Zero::zero(),
            },
        );

        Ok(SearchNode::new(start, Zero::zero(), heuristic_fn(start, goal)))
    }

    pub(crate) fn search_general<H>(
        &mut self,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        path: &mut Vec<Direction>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        H: Fn(Coord, Coord) -> Cost,
    {
        let initial_node = self.init(start, goal, &heuristic_fn)?;

        debug!(
            "searching from {:?} to {:?} in {}x{} grid",
            start,
            goal,
            self.size.width(),
            self.size.height()
        );

        self.frontier.push(initial_node);

        let mut num_nodes_visited = 0;

        while let Some(current) = self.frontier.pop() {
            if config.frontier_policy == FrontierPolicy::DiscardStale
                && self
                    .best_cost(current.coord)
                    .map_or(false, |best| current.cost_so_far > best)
            {
                trace!("discarding stale node at {:?}", current.coord);
                continue;
            }

            num_nodes_visited += 1;

            if current.coord == goal {
                path::make_path(&self.best_costs, goal, path);
                debug!(
                    "reached {:?} after visiting {} nodes",
                    goal, num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: current.cost_so_far,
                    length: path.len(),
                });
            }

            let candidate_cost = current.cost_so_far + One::one();

            for &cardinal in NEIGHBOUR_ORDER.iter() {
                let direction: Direction = cardinal.into();
                let neighbour_coord = match self.neighbour(current.coord, direction) {
                    Some(coord) => coord,
                    None => continue,
                };

                self.see_successor(
                    candidate_cost,
                    neighbour_coord,
                    direction,
                    &heuristic_fn,
                    goal,
                );
            }
        }

        debug!(
            "frontier exhausted after visiting {} nodes",
            num_nodes_visited
        );

        Err(Error::NoPath)
    }

    /// Records `cost` for `successor_coord` and pushes it onto the frontier
    /// if it beats the best known cost for that cell. Returns whether it did.
    pub(crate) fn see_successor<H>(
        &mut self,
        cost: Cost,
        successor_coord: Coord,
        direction: Direction,
        heuristic_fn: H,
        goal: Coord,
    ) -> bool
    where
        H: Fn(Coord, Coord) -> Cost,
    {
        let improved = match self.best_costs.get(&key(successor_coord)) {
            Some(entry) => cost < entry.cost,
            None => true,
        };

        if improved {
            self.best_costs.insert(
                key(successor_coord),
                BestCost {
                    from_parent: Some(direction),
                    cost,
                },
            );

            trace!("pushing {:?}", successor_coord);

            let heuristic = heuristic_fn(successor_coord, goal);
            self.frontier.push(SearchNode::new(successor_coord, cost, heuristic));
        }

        improved
    }
}
