use crate::prelude::*;

use std::collections::HashMap;

/// On/off state per marker id. Lights default to off and only change on an
/// explicit toggle, never because the player walked away.
#[derive(Resource, Debug, Default, Clone)]
pub struct LightState {
    states: HashMap<String, bool>,
}

impl LightState {
    pub fn is_on(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(false)
    }

    /// Flip a light, returning its new state
    pub fn toggle_light(&mut self, id: &str) -> bool {
        let state = self.states.entry(id.to_string()).or_insert(false);
        *state = !*state;
        *state
    }

    pub fn set_light_on(&mut self, id: &str, on: bool) {
        self.states.insert(id.to_string(), on);
    }
}

/// Marker whose phone UI is showing, if any. Last writer wins when radii overlap.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveMarker(pub Option<String>);

impl ActiveMarker {
    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
