use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::config::SearchConfig;
use crate::engine::SearchCore;
use crate::error::SearchError;
use crate::location::Location;
use crate::ring_queue::RingQueue;
use crate::solver::MazeSolver;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the start as having no parent.
const NO_PARENT: usize = usize::MAX;

/// Level-order search returning a shortest path under 4-directional movement.
///
/// Discovered locations are kept in insertion order in an [IndexMap] whose values hold the index
/// of the parent and the discovery level. Membership doubles as the visited flag. Each discovered
/// cell is stamped with its level, the start with 1. The frontier is a bounded [RingQueue].
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> BreadthFirst {
        BreadthFirst
    }
}

/// Walks parent links from `goal_index` back to the start, yielding at most `limit` locations in
/// goal-to-start order.
fn unwind_parents(
    parents: &FxIndexMap<Location, (usize, i32)>,
    goal_index: usize,
    limit: usize,
) -> Vec<Location> {
    itertools::unfold(goal_index, |i| {
        parents.get_index(*i).map(|(node, &(parent, _))| {
            *i = parent;
            *node
        })
    })
    .take(limit)
    .collect()
}

impl MazeSolver for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn solve(&self, core: &mut SearchCore, config: &SearchConfig) -> Result<(), SearchError> {
        let start = core.maze().start_location();
        let goal = core.maze().goal_location();
        core.reset_path();
        if start == goal {
            core.record_path_at(0, start)?;
            core.set_path_len(1);
            info!("Start {} is the goal", start);
            return Ok(());
        }

        let mut parents: FxIndexMap<Location, (usize, i32)> = FxIndexMap::default();
        parents.insert(start, (NO_PARENT, 1));
        core.maze_mut().set_location(start, 1);
        let mut queue = RingQueue::with_capacity(config.queue_capacity);
        queue.push_back((start, 0))?;

        let mut goal_index = None;
        'search: while let Some(&(head, head_index)) = queue.front() {
            let level = parents
                .get_index(head_index)
                .map_or(1, |(_, &(_, level))| level);
            for candidate in core.possible_moves(head) {
                let n = match parents.entry(candidate) {
                    Vacant(e) => {
                        let n = e.index();
                        e.insert((head_index, level + 1));
                        n
                    }
                    _ => continue,
                };
                if candidate == goal {
                    goal_index = Some(n);
                    break 'search;
                }
                core.maze_mut().set_location(candidate, level + 1);
                if let Err(err) = queue.push_back((candidate, n)) {
                    warn!("Frontier outgrew the queue while expanding {}", head);
                    return Err(err);
                }
            }
            queue.pop_front();
            debug!("Expanded {}, {} locations queued", head, queue.len());
        }

        let Some(goal_index) = goal_index else {
            info!("Goal {} is not reachable from {}", goal, start);
            return Err(SearchError::NoPathFound);
        };
        let capacity = core.path_capacity();
        let mut path = unwind_parents(&parents, goal_index, capacity + 1);
        if path.len() > capacity || path.last() != Some(&start) {
            warn!("Path from {} to {} does not fit {} slots", start, goal, capacity);
            return Err(SearchError::PathBufferExhausted { capacity });
        }
        path.reverse();
        for (i, location) in path.iter().enumerate() {
            core.record_path_at(i, *location)?;
        }
        core.set_path_len(path.len());
        info!("Found the goal at {} after {} steps", goal, path.len() - 1);
        Ok(())
    }
}
