//! The Q-learning agent: action selection, updates, and persistence.

use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    action::Action,
    adapters::JsonRepository,
    app::{AgentConfig, Mode},
    error::{Error, Result},
    ports::TableRepository,
    q_learning::{
        abstraction::{StateKey, reward},
        q_table::QTable,
    },
    state::GameState,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent (off-policy TD control).
///
/// The agent owns its value table and a one-step transition record (the
/// previous state key and action), and is driven cooperatively by the game
/// loop: one `choose_action` call per tick, no background work.
///
/// In [`Mode::Train`] the table is updated after every transition and
/// written through to the repository immediately, so an interrupted run
/// loses at most the in-flight step. In [`Mode::Play`] the table is
/// read-only and must already exist in the repository.
pub struct QLearningAgent {
    table: QTable,
    prev: Option<(StateKey, Action)>,
    mode: Mode,
    name: String,
    path: PathBuf,
    learning_rate: f64,
    discount_factor: f64,
    exploration_rate: f64,
    rng: StdRng,
    repository: Box<dyn TableRepository>,
}

impl std::fmt::Debug for QLearningAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QLearningAgent")
            .field("table", &self.table)
            .field("prev", &self.prev)
            .field("mode", &self.mode)
            .field("name", &self.name)
            .field("path", &self.path)
            .field("learning_rate", &self.learning_rate)
            .field("discount_factor", &self.discount_factor)
            .field("exploration_rate", &self.exploration_rate)
            .finish_non_exhaustive()
    }
}

impl QLearningAgent {
    /// Create an agent backed by the JSON table repository on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTable`] when `config.mode` is [`Mode::Play`]
    /// and no table can be loaded for the configured name. In training mode
    /// a failed load is treated as "no prior knowledge" and the agent starts
    /// from an empty table.
    pub fn new(config: AgentConfig) -> Result<Self> {
        Self::with_repository(config, Box::new(JsonRepository::new()))
    }

    /// Create an agent backed by an arbitrary table repository.
    pub fn with_repository(
        config: AgentConfig,
        repository: Box<dyn TableRepository>,
    ) -> Result<Self> {
        let path = config.table_path();
        let table = match repository.load(&path) {
            Ok(table) => table,
            Err(_) if config.mode == Mode::Train => QTable::new(),
            Err(_) => {
                return Err(Error::MissingTable {
                    name: config.name,
                    path,
                });
            }
        };

        Ok(Self {
            table,
            prev: None,
            mode: config.mode,
            name: config.name,
            path,
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            exploration_rate: config.exploration_rate,
            rng: build_rng(config.seed),
            repository,
        })
    }

    /// Choose the action to take in `state`; the one operation the game
    /// loop calls, once per tick.
    ///
    /// Selection is ε-greedy on the current state's key. The very first call
    /// after construction (or after [`end_episode`](Self::end_episode)) has
    /// no recorded transition to learn from, so it just picks a uniformly
    /// random action. On every later call in training mode the previous
    /// key is lazily initialized, the Q-learning update is applied to the
    /// previous (key, action) pair using this state's reward, and the table
    /// is saved before the transition record is advanced.
    ///
    /// # Errors
    ///
    /// Propagates repository failures from the write-through save.
    pub fn choose_action(&mut self, state: &GameState) -> Result<Action> {
        let key = StateKey::derive(state);

        let chosen = if self.prev.is_none() || self.rng.random::<f64>() < self.exploration_rate {
            self.random_action()
        } else {
            match self.table.greedy(&key) {
                Some(action) => action,
                // Unseen state: there is no greedy choice yet.
                None => self.random_action(),
            }
        };

        if self.mode == Mode::Train {
            if let Some((prev_key, prev_action)) = self.prev.clone() {
                let rng = &mut self.rng;
                self.table
                    .initialize_with(prev_key.clone(), prev_action, || rng.random::<f64>());
                self.table.update(
                    &prev_key,
                    prev_action,
                    reward(state),
                    &key,
                    self.learning_rate,
                    self.discount_factor,
                );
                self.repository.save(&self.table, &self.path)?;
            }
        }

        self.prev = Some((key, chosen));
        Ok(chosen)
    }

    /// Clear the transition record at an episode boundary.
    ///
    /// Without this, the first action of a new episode would treat the
    /// previous episode's terminal state as its predecessor and learn from
    /// a transition that never happened. The game loop should call this
    /// whenever it restarts the board.
    pub fn end_episode(&mut self) {
        self.prev = None;
    }

    fn random_action(&mut self) -> Action {
        *Action::ALL
            .choose(&mut self.rng)
            .expect("action set is non-empty")
    }

    /// The learned value table.
    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The training-session name identifying the persisted table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the table is persisted.
    pub fn table_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRepository;

    fn train_agent(seed: u64) -> QLearningAgent {
        let config = AgentConfig::new(Mode::Train).with_seed(seed);
        QLearningAgent::with_repository(config, Box::new(InMemoryRepository::new()))
            .expect("training agent construction cannot fail")
    }

    fn state(text: &str) -> GameState {
        text.parse().expect("test state should parse")
    }

    #[test]
    fn test_first_call_performs_no_update() {
        let mut agent = train_agent(7);
        let action = agent
            .choose_action(&state("1 1 0 0 0\nABC\nD_E\nGHI"))
            .unwrap();
        assert!(Action::ALL.contains(&action));
        assert!(agent.table().is_empty(), "no transition yet, no update");
    }

    #[test]
    fn test_second_call_updates_previous_key() {
        let mut agent = train_agent(7);
        let first = state("1 1 0 0 0\nABC\nD_E\nGHI");
        let prev_key = StateKey::derive(&first);

        agent.choose_action(&first).unwrap();
        agent.choose_action(&state("1 0 0 0 0\n___\n___\n___")).unwrap();

        assert!(agent.table().entry(&prev_key).is_some());
    }

    #[test]
    fn test_end_episode_clears_transition_record() {
        let mut agent = train_agent(7);
        agent.choose_action(&state("1 1 0 0 0\nABC\nD_E\nGHI")).unwrap();
        agent.end_episode();

        // With the record cleared, the next call is a "first call" again.
        let before = agent.table().len();
        agent.choose_action(&state("1 1 0 0 0\nXYZ\nW_V\nUTS")).unwrap();
        assert_eq!(agent.table().len(), before);
    }

    #[test]
    fn test_seeded_agents_are_reproducible() {
        let states = [
            "1 1 0 0 0\nABC\nD_E\nGHI",
            "1 0 0 0 0\nC__\n___\n___",
            "2 1 1 0 0\n_T_\n__C\n___",
            "2 0 1 0 0\n___\nT__\n___",
        ];

        let mut a = train_agent(42);
        let mut b = train_agent(42);
        for text in states {
            let s = state(text);
            assert_eq!(a.choose_action(&s).unwrap(), b.choose_action(&s).unwrap());
        }
        assert_eq!(a.table(), b.table());
    }
}
