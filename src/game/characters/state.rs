// Fighter facing and attack state machine

use crate::core::math::has_elapsed;

/// Direction a fighter is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal sign of this facing (-1.0 or 1.0)
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Phase of a fighter's attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackState {
    /// Not attacking, a new attack may start
    #[default]
    Idle,
    /// Attack committed, hitbox not yet live
    WindUp,
    /// Hitbox is live and can register a hit
    Active,
    /// Hitbox closed, attack still winding down
    Recovering,
}

impl AttackState {
    /// Check if the hitbox takes part in overlap tests
    pub fn hitbox_enabled(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if an attack is in progress
    pub fn is_attacking(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The state that follows this one once its window closes
    pub fn next(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::WindUp => Self::Active,
            Self::Active => Self::Recovering,
            Self::Recovering => Self::Idle,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::WindUp => "wind_up",
            Self::Active => "active",
            Self::Recovering => "recovering",
        }
    }
}

/// Attack phase boundaries in milliseconds since the attack was triggered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackWindows {
    /// WindUp covers [0, wind_up_end)
    pub wind_up_end: f32,
    /// Active covers [wind_up_end, active_end)
    pub active_end: f32,
    /// Recovering covers [active_end, attack_end), Idle afterwards
    pub attack_end: f32,
}

impl AttackWindows {
    /// Derive the windows from the three attack durations.
    ///
    /// The hitbox opens after `wind_up` and stays open for `active`, but never
    /// past `total`, which bounds how long the attack counts as live. The attack
    /// returns to Idle once both the total duration and the hitbox window have
    /// run out.
    pub fn new(wind_up: f32, active: f32, total: f32) -> Self {
        let hitbox_close = wind_up + active;
        let active_end = hitbox_close.min(total).max(wind_up);
        Self {
            wind_up_end: wind_up,
            active_end,
            attack_end: hitbox_close.max(total),
        }
    }

    /// End of the window belonging to `state` (None for Idle)
    fn end_of(&self, state: AttackState) -> Option<f32> {
        match state {
            AttackState::Idle => None,
            AttackState::WindUp => Some(self.wind_up_end),
            AttackState::Active => Some(self.active_end),
            AttackState::Recovering => Some(self.attack_end),
        }
    }
}

/// Single clock attack state machine.
///
/// All phases are keyed off the time elapsed since the trigger, so windows
/// cannot drift against each other when the tick length varies.
#[derive(Debug, Clone)]
pub struct AttackStateMachine {
    state: AttackState,
    elapsed_ms: f32,
    timer_ms: f32,
}

impl Default for AttackStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackStateMachine {
    pub fn new() -> Self {
        Self {
            state: AttackState::Idle,
            elapsed_ms: 0.0,
            timer_ms: 0.0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> AttackState {
        self.state
    }

    /// Milliseconds left in the current state (0 when Idle)
    pub fn timer_ms(&self) -> f32 {
        self.timer_ms
    }

    /// Milliseconds since the current attack was triggered
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Start a new attack. Returns false if one is already in progress.
    pub fn trigger(&mut self, windows: &AttackWindows) -> bool {
        if self.state.is_attacking() {
            return false;
        }
        self.state = AttackState::WindUp;
        self.elapsed_ms = 0.0;
        self.settle(windows);
        true
    }

    /// Advance the attack clock by `dt_ms`.
    ///
    /// A long tick may cross several boundaries; each state is still entered in
    /// order, so Active is never skipped without passing through WindUp first.
    pub fn advance(&mut self, dt_ms: f32, windows: &AttackWindows) {
        if !self.state.is_attacking() {
            return;
        }
        self.elapsed_ms += dt_ms;
        self.settle(windows);
    }

    fn settle(&mut self, windows: &AttackWindows) {
        while let Some(end) = windows.end_of(self.state) {
            if !has_elapsed(self.elapsed_ms as f64, end as f64) {
                self.timer_ms = (end - self.elapsed_ms).max(0.0);
                return;
            }
            let next = self.state.next();
            log::trace!("attack {} -> {}", self.state.name(), next.name());
            self.state = next;
        }
        self.elapsed_ms = 0.0;
        self.timer_ms = 0.0;
    }
}
