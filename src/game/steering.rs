use super::direction::Direction;
use std::num::NonZeroU32;

/// The snake's heading together with the input cooldown.
///
/// This is a plain value: each turn request and each tick produce a new
/// `Steering` that the caller stores for the next one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Steering {
    direction: Direction,

    /// Ticks left before another turn will be accepted
    cooldown: u32,

    /// What `cooldown` is reset to after an accepted turn
    period: NonZeroU32,
}

impl Steering {
    pub(crate) fn new(direction: Direction, period: NonZeroU32) -> Steering {
        Steering {
            direction,
            cooldown: 0,
            period,
        }
    }

    pub(crate) fn direction(self) -> Direction {
        self.direction
    }

    /// Returns `true` if a turn requested now could be accepted
    pub(crate) fn ready(self) -> bool {
        self.cooldown == 0
    }

    /// Request a turn towards `requested`.  The request is ignored (and
    /// `self` returned unchanged) while cooling down, or if `requested` is
    /// the current heading or its reverse.
    pub(crate) fn turn(self, requested: Direction) -> Steering {
        if !self.ready() || requested == self.direction || requested == self.direction.reverse() {
            return self;
        }
        Steering {
            direction: requested,
            cooldown: self.period.get(),
            ..self
        }
    }

    /// Account for one tick having passed
    pub(crate) fn cool_down(self) -> Steering {
        Steering {
            cooldown: self.cooldown.saturating_sub(1),
            ..self
        }
    }
}
