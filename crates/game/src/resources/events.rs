use crate::prelude::*;

/// Notifications for the UI built around the walkthrough
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkthroughEvent {
    ProximityEnter(String),
    ProximityExit(String),
    ToggleLight { id: String, on: bool },
}

/// Events raised this frame, drained by the layer once the schedule ran
#[derive(Resource, Debug, Default)]
pub struct EventQueue(Vec<WalkthroughEvent>);

impl EventQueue {
    pub fn push(&mut self, event: WalkthroughEvent) {
        self.0.push(event);
    }

    pub fn drain(&mut self) -> Vec<WalkthroughEvent> {
        std::mem::take(&mut self.0)
    }
}
