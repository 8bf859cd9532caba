use crate::prelude::*;

/// Movement intent for the current frame, identical for both input modes
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct InputIntent {
    /// Forward (+) / backward (-), in [-1, 1]
    pub move_forward: f32,
    /// Right (+) / left (-), in [-1, 1]
    pub move_strafe: f32,
    pub sprint: bool,
    /// Swipe look in radians, consumed by the movement controller
    pub look_delta: (f32, f32),
}

impl InputIntent {
    pub fn is_moving(&self, dead_zone: f32) -> bool {
        self.move_forward.abs() > dead_zone || self.move_strafe.abs() > dead_zone
    }

    /// Read the look delta and reset it so it is applied once
    pub fn take_look_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }

    pub fn set_joystick(&mut self, x: f32, y: f32) {
        self.move_strafe = x.clamp(-1.0, 1.0);
        self.move_forward = y.clamp(-1.0, 1.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedTouch {
    id: u64,
    /// Joystick: where the drag started. Look: last seen position.
    anchor: (f32, f32),
}

/// Virtual joystick (left half of the window) and swipe look (right half).
///
/// Exactly one touch identifier is tracked for each; other touches are dropped.
#[derive(Resource, Debug, Default)]
pub struct TouchControls {
    joystick: Option<TrackedTouch>,
    look: Option<TrackedTouch>,
}

impl TouchControls {
    pub fn is_tracking(&self) -> bool {
        self.joystick.is_some() || self.look.is_some()
    }

    pub fn handle(
        &mut self,
        touch: &TouchInput,
        window_width: f32,
        settings: &TouchSettings,
        intent: &mut InputIntent,
    ) {
        let (x, y) = touch.position;

        match touch.phase {
            TouchPhase::Started => {
                let slot = if x < window_width * 0.5 {
                    &mut self.joystick
                } else {
                    &mut self.look
                };
                if slot.is_none() {
                    *slot = Some(TrackedTouch {
                        id: touch.id,
                        anchor: (x, y),
                    });
                } else {
                    log::debug!("Ignoring extra touch {}", touch.id);
                }
            }
            TouchPhase::Moved => {
                if let Some(joystick) = self.joystick.filter(|t| t.id == touch.id) {
                    let (mut dx, mut dy) = (x - joystick.anchor.0, y - joystick.anchor.1);
                    let distance = (dx * dx + dy * dy).sqrt();
                    let radius = settings.joystick_radius;
                    if distance > radius {
                        dx = dx / distance * radius;
                        dy = dy / distance * radius;
                    }
                    // Screen y grows downwards; dragging up walks forward
                    intent.set_joystick(dx / radius, -dy / radius);
                } else if let Some(look) = self.look.as_mut().filter(|t| t.id == touch.id) {
                    let (dx, dy) = (x - look.anchor.0, y - look.anchor.1);
                    look.anchor = (x, y);
                    intent.look_delta.0 += dx * settings.look_sensitivity;
                    intent.look_delta.1 += dy * settings.look_sensitivity;
                } else {
                    log::debug!("Ignoring move of untracked touch {}", touch.id);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.joystick.is_some_and(|t| t.id == touch.id) {
                    self.joystick = None;
                    intent.set_joystick(0.0, 0.0);
                } else if self.look.is_some_and(|t| t.id == touch.id) {
                    self.look = None;
                    intent.look_delta = (0.0, 0.0);
                }
            }
        }
    }

    /// Forget every tracked touch and zero what they produced
    pub fn release_all(&mut self, intent: &mut InputIntent) {
        self.joystick = None;
        self.look = None;
        intent.set_joystick(0.0, 0.0);
        intent.look_delta = (0.0, 0.0);
    }
}
