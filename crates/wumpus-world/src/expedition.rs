//! A cave and the agent exploring it, kept in step.

use std::sync::Arc;

use tracing::info;
use wumpus_space::Direction;

use crate::agent::{Agent, AgentStatus};
use crate::cave::Cave;
use crate::error::WorldError;

/// How an expedition stands after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The agent is alive and has not escaped yet.
    Exploring,
    /// The agent died.
    Dead,
    /// The agent is back at the start with the gold.
    Escaped,
}

/// One game: the agent moves through the cave and the cave's explorer
/// marker follows it.
#[derive(Clone, Debug)]
pub struct Expedition {
    cave: Cave,
    agent: Agent,
}

impl Expedition {
    /// Put a fresh agent at the start of `cave` and let it perceive and
    /// deduce there.
    pub fn new(mut cave: Cave) -> Self {
        let mut agent = Agent::new(Arc::clone(cave.adjacency()));
        cave.reset_explorer();
        agent.perceive(&cave);
        if agent.is_alive() {
            agent.deduce();
        }
        Self { cave, agent }
    }

    /// Take one step. See [`Agent::step`].
    pub fn step(&mut self, direction: Direction) -> Result<Outcome, WorldError> {
        self.agent.step(direction, &self.cave)?;
        self.cave.set_explorer(self.agent.position())?;
        let outcome = self.outcome();
        if outcome == Outcome::Escaped {
            info!(turns = self.agent.turns(), "climbed out with the gold");
        }
        Ok(outcome)
    }

    /// Where things stand.
    pub fn outcome(&self) -> Outcome {
        match self.agent.status() {
            AgentStatus::Dead { .. } => Outcome::Dead,
            AgentStatus::Alive if self.agent.can_climb() => Outcome::Escaped,
            AgentStatus::Alive => Outcome::Exploring,
        }
    }

    /// The cave, explorer marker included.
    pub fn cave(&self) -> &Cave {
        &self.cave
    }

    /// The agent.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::Cell;

    #[test]
    fn explorer_marker_follows_the_agent() {
        let mut exp = Expedition::new(Cave::classic());
        assert_eq!(exp.step(Direction::North), Ok(Outcome::Exploring));
        assert_eq!(exp.cave().explorer(), Cell::new(1, 2));
        assert_eq!(exp.agent().position(), Cell::new(1, 2));
    }

    #[test]
    fn classic_run_to_the_gold_and_back() {
        let mut exp = Expedition::new(Cave::classic());
        let path = [
            Direction::East,
            Direction::North,
            Direction::North,
            Direction::South,
            Direction::South,
        ];
        for dir in path {
            assert_eq!(exp.step(dir), Ok(Outcome::Exploring));
        }
        assert!(exp.agent().has_gold());
        assert_eq!(exp.step(Direction::West), Ok(Outcome::Escaped));
    }

    #[test]
    fn death_ends_the_expedition() {
        let mut exp = Expedition::new(Cave::classic());
        exp.step(Direction::North).unwrap();
        assert_eq!(exp.step(Direction::North), Ok(Outcome::Dead));
        assert_eq!(exp.step(Direction::South), Err(WorldError::AgentDead));
    }
}
