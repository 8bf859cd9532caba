use crate::prelude::*;

/// Coarse mode of the experience
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Orbiting overview of the model
    #[default]
    Setup,
    /// First-person walk
    Explore,
}

/// Identity of one camera transition run.
///
/// Only the holder of the current token can end the movement gate, so a
/// preempted transition finishing late cannot reopen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionToken {
    generation: u64,
    gates_movement: bool,
}

impl TransitionToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn gates_movement(&self) -> bool {
        self.gates_movement
    }
}

/// Single owner of the phase and of the "transition in progress" gate.
///
/// The transition driver opens and closes the gate through tokens, the
/// movement controller only ever reads it.
#[derive(Resource, Debug)]
pub struct PhaseCoordinator {
    phase: Phase,
    /// Phase change not yet picked up by the transition driver
    pending: Option<Phase>,
    next_generation: u64,
    /// Generation of the transition currently holding movement closed
    gate: Option<u64>,
    /// The transition driver wrote the camera pose this frame
    pose_claimed: bool,
}

impl Default for PhaseCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseCoordinator {
    /// Starts in setup with the initial-mount transition pending
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            pending: Some(Phase::Setup),
            next_generation: 0,
            gate: None,
            pose_claimed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_exploring(&self) -> bool {
        self.phase == Phase::Explore
    }

    /// Set the phase. Setting the current phase again changes nothing.
    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.pending = Some(phase);
    }

    pub fn start_experience(&mut self) {
        self.set_phase(Phase::Explore);
    }

    /// The phase change the transition driver has not picked up yet
    pub fn pending_phase_change(&self) -> Option<Phase> {
        self.pending
    }

    /// Hand the latest unobserved phase change to the transition driver
    pub fn take_phase_change(&mut self) -> Option<Phase> {
        self.pending.take()
    }

    /// Register a new transition run, superseding any earlier one.
    pub fn begin_transition(&mut self, gates_movement: bool) -> TransitionToken {
        self.next_generation += 1;
        let token = TransitionToken {
            generation: self.next_generation,
            gates_movement,
        };
        self.gate = gates_movement.then_some(token.generation);
        token
    }

    /// Close out a transition run. Returns false for a stale token, which leaves
    /// the gate untouched.
    pub fn finish_transition(&mut self, token: TransitionToken) -> bool {
        if token.generation != self.next_generation {
            log::debug!(
                "Ignoring completion of superseded transition {}",
                token.generation
            );
            return false;
        }
        if self.gate == Some(token.generation) {
            self.gate = None;
        }
        true
    }

    pub fn is_transitioning(&self) -> bool {
        self.gate.is_some()
    }

    /// Mark the camera pose as written by the transition driver this frame
    pub fn claim_pose(&mut self) {
        self.pose_claimed = true;
    }

    pub fn is_pose_claimed(&self) -> bool {
        self.pose_claimed
    }

    /// Start of the driver's turn; the previous frame's claim no longer holds
    pub fn release_pose(&mut self) {
        self.pose_claimed = false;
    }

    /// Whether the movement controller may touch the camera this frame
    pub fn movement_allowed(&self) -> bool {
        self.is_exploring() && !self.is_transitioning() && !self.pose_claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mount_has_setup_pending() {
        let mut coordinator = PhaseCoordinator::new();
        assert_eq!(coordinator.take_phase_change(), Some(Phase::Setup));
        assert_eq!(coordinator.take_phase_change(), None);
    }

    #[test]
    fn test_set_phase_is_idempotent() {
        let mut coordinator = PhaseCoordinator::new();
        coordinator.take_phase_change();

        coordinator.start_experience();
        assert_eq!(coordinator.take_phase_change(), Some(Phase::Explore));

        coordinator.start_experience();
        coordinator.set_phase(Phase::Explore);
        assert_eq!(coordinator.take_phase_change(), None);
    }

    #[test]
    fn test_movement_gated_until_transition_finishes() {
        let mut coordinator = PhaseCoordinator::new();
        coordinator.start_experience();
        let token = coordinator.begin_transition(true);

        assert!(coordinator.is_transitioning());
        assert!(!coordinator.movement_allowed());

        assert!(coordinator.finish_transition(token));
        assert!(coordinator.movement_allowed());
    }

    #[test]
    fn test_claimed_pose_holds_movement_for_the_frame() {
        let mut coordinator = PhaseCoordinator::new();
        coordinator.start_experience();
        let token = coordinator.begin_transition(true);

        coordinator.release_pose();
        coordinator.claim_pose();
        assert!(coordinator.finish_transition(token));
        assert!(!coordinator.is_transitioning());
        assert!(!coordinator.movement_allowed());

        coordinator.release_pose();
        assert!(coordinator.movement_allowed());
    }

    #[test]
    fn test_stale_completion_keeps_new_gate_closed() {
        let mut coordinator = PhaseCoordinator::new();
        coordinator.start_experience();
        let first = coordinator.begin_transition(true);
        let second = coordinator.begin_transition(true);

        assert!(!coordinator.finish_transition(first));
        assert!(coordinator.is_transitioning());

        assert!(coordinator.finish_transition(second));
        assert!(!coordinator.is_transitioning());
    }

    #[test]
    fn test_non_gating_transition_releases_previous_gate() {
        let mut coordinator = PhaseCoordinator::new();
        coordinator.start_experience();
        let explore = coordinator.begin_transition(true);

        coordinator.set_phase(Phase::Setup);
        let setup = coordinator.begin_transition(false);
        assert!(!coordinator.is_transitioning());

        assert!(!coordinator.finish_transition(explore));
        assert!(coordinator.finish_transition(setup));
        assert!(!coordinator.movement_allowed());
    }
}
