use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::config::SearchConfig;
use crate::engine::SearchCore;
use crate::error::SearchError;
use crate::location::Location;
use crate::solver::MazeSolver;
use crate::N_MOVES;

/// Exhaustive backtracking search.
///
/// Each entered cell is stamped with its depth, which both labels it for display and removes it
/// from [possible_moves](SearchCore::possible_moves), so no cell is entered twice. Instead of
/// recursing, pending siblings live on an explicit stack of frames. The path slot of a depth is
/// overwritten by every sibling tried at that depth, which is all the backtracking needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

struct Frame {
    depth: usize,
    moves: SmallVec<[Location; N_MOVES]>,
    next: usize,
}

impl DepthFirst {
    pub fn new() -> DepthFirst {
        DepthFirst
    }

    fn enter(
        core: &mut SearchCore,
        stack: &mut Vec<Frame>,
        location: Location,
        depth: usize,
        budget: usize,
    ) -> Result<(), SearchError> {
        if depth > budget {
            warn!("Depth budget of {} exceeded at {}", budget, location);
            return Err(SearchError::DepthBudgetExceeded { budget });
        }
        debug!("Entering {} at depth {}", location, depth);
        let stamp = i32::try_from(depth).unwrap_or(i32::MAX);
        core.maze_mut().set_location(location, stamp);
        let moves = core.possible_moves(location);
        stack.push(Frame {
            depth,
            moves,
            next: 0,
        });
        Ok(())
    }
}

impl MazeSolver for DepthFirst {
    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn solve(&self, core: &mut SearchCore, config: &SearchConfig) -> Result<(), SearchError> {
        let start = core.maze().start_location();
        let goal = core.maze().goal_location();
        let budget = config.depth_budget(core.maze().rows(), core.maze().columns());
        core.reset_path();
        core.record_path_at(0, start)?;
        if start == goal {
            core.set_path_len(1);
            info!("Start {} is the goal", start);
            return Ok(());
        }

        let mut stack = Vec::new();
        DepthFirst::enter(core, &mut stack, start, 1, budget)?;
        while let Some(frame) = stack.last_mut() {
            let next = frame.moves.get(frame.next).copied();
            let depth = frame.depth;
            let candidate = match next {
                Some(candidate) => {
                    frame.next += 1;
                    candidate
                }
                None => {
                    stack.pop();
                    continue;
                }
            };
            // A deeper branch may have stamped this sibling after the moves were generated.
            if !core.maze().is_open(candidate) {
                continue;
            }
            core.record_path_at(depth, candidate)?;
            if candidate == goal {
                core.set_path_len(depth + 1);
                info!("Found the goal at {} after {} steps", goal, depth);
                return Ok(());
            }
            DepthFirst::enter(core, &mut stack, candidate, depth + 1, budget)?;
        }
        info!("Goal {} is not reachable from {}", goal, start);
        Err(SearchError::NoPathFound)
    }
}
