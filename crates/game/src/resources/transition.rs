use crate::prelude::*;

/// One timed camera interpolation, advanced explicitly every frame
#[derive(Clone, Debug)]
pub struct Tween {
    pub token: TransitionToken,
    pub elapsed: f32,
    pub duration: f32,
    pub ease: Ease,
    pub from: Point3<f32>,
    pub to: Point3<f32>,
    /// Re-aim at this point on every step
    pub look_at: Option<Point3<f32>>,
    /// Orbit rig target, start and end
    pub orbit_target: Option<(Point3<f32>, Point3<f32>)>,
    /// Camera focus distance, start and end
    pub focus_distance: Option<(f32, f32)>,
}

/// Interpolated values for one step of a tween
#[derive(Clone, Copy, Debug)]
pub struct TweenStep {
    pub position: Point3<f32>,
    pub orbit_target: Option<Point3<f32>>,
    pub focus_distance: Option<f32>,
    pub finished: bool,
}

impl Tween {
    pub fn new(token: TransitionToken, from: Point3<f32>, target: &PoseTarget) -> Self {
        Self {
            token,
            elapsed: 0.0,
            duration: target.duration,
            ease: target.ease,
            from,
            to: target.position,
            look_at: None,
            orbit_target: None,
            focus_distance: None,
        }
    }

    pub fn looking_at(mut self, point: Point3<f32>) -> Self {
        self.look_at = Some(point);
        self
    }

    pub fn with_orbit_target(mut self, from: Point3<f32>, to: Point3<f32>) -> Self {
        self.orbit_target = Some((from, to));
        self
    }

    pub fn with_focus_distance(mut self, from: f32, to: f32) -> Self {
        self.focus_distance = Some((from, to));
        self
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Move `dt` seconds forward and sample the curve
    pub fn advance(&mut self, dt: f32) -> TweenStep {
        self.elapsed += dt.max(0.0);
        let progress = self.progress();
        let t = self.ease.apply(progress);

        TweenStep {
            position: lerp_point(&self.from, &self.to, t),
            orbit_target: self
                .orbit_target
                .map(|(from, to)| lerp_point(&from, &to, t)),
            focus_distance: self.focus_distance.map(|(from, to)| from + (to - from) * t),
            finished: progress >= 1.0,
        }
    }
}

/// Camera transition driver state
#[derive(Resource, Clone, Debug, Default)]
pub enum CameraTransition {
    #[default]
    Idle,
    Running(Tween),
    Done,
}

impl CameraTransition {
    /// Replace whatever is running. Returns the token of a preempted run.
    pub fn start(&mut self, tween: Tween) -> Option<TransitionToken> {
        match std::mem::replace(self, CameraTransition::Running(tween)) {
            CameraTransition::Running(previous) => Some(previous.token),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, CameraTransition::Running(_))
    }
}
