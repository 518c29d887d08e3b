// Input configuration and remapping system

use super::action::{default_bindings, Action, InputSource};
use super::player::PlayerSlot;
use std::collections::HashMap;

/// Key bindings for a single player
/// Maps input sources (keys) to fighter actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player this config is for
    slot: PlayerSlot,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new(slot: PlayerSlot) -> Self {
        Self {
            slot,
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration holding the slot's default bindings
    pub fn with_defaults(slot: PlayerSlot) -> Self {
        let mut config = Self::new(slot);
        config.reset_to_defaults();
        config
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(slot: PlayerSlot, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new(slot);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        // A source drives at most one action
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to any action
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to default bindings for this player
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in default_bindings(self.slot) {
            self.bind(source, action);
        }
    }
}
