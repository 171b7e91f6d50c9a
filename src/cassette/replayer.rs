//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::format::{Cassette, Interaction};

/// Replays a cassette, one queue per `port::method` pair.
///
/// Queues are independent, so interleaving calls to different methods does
/// not need to match the recording exactly.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Creates a replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Loads the cassette at `path` and creates a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read cassette {}: {e}", path.display()))?;
        let cassette = Cassette::from_yaml(&content)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Returns the next interaction recorded for `port::method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette holds no (more) interactions for the pair,
    /// listing what is still available.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return interaction;
        }

        let mut available: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), queue)| format!("{p}::{m} ({})", queue.len()))
            .collect();
        available.sort();
        panic!(
            "Cassette exhausted: no interactions left for port={port:?} method={method:?}. \
             Remaining: [{}]",
            available.join(", ")
        );
    }
}
