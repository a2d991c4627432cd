//! Trapezoidal opacity envelope: ramp up over `attack` ticks, hold, then
//! ramp down over `decay` ticks.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub attack: u32,
    pub hold: u32,
    pub decay: u32,
    pub init_value: f32,
    pub hold_value: f32,
    pub last_value: f32,
}

impl Envelope {
    /// Envelope that starts and ends fully transparent and peaks at `hold_value`.
    pub fn new(attack: u32, hold: u32, decay: u32, hold_value: f32) -> Self {
        Self {
            attack,
            hold,
            decay,
            init_value: 0.0,
            hold_value,
            last_value: 0.0,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.attack + self.hold + self.decay
    }

    #[inline]
    pub fn is_finished(&self, age: u32) -> bool {
        age >= self.total()
    }

    /// Opacity at `age` ticks. Past the end of the envelope this is `last_value`.
    pub fn value(&self, age: u32) -> f32 {
        let raw = if age < self.attack {
            lerp(
                self.init_value,
                self.hold_value,
                age as f32 / self.attack as f32,
            )
        } else if age < self.attack + self.hold {
            self.hold_value
        } else if age < self.total() {
            let into_decay = age - self.attack - self.hold;
            lerp(
                self.hold_value,
                self.last_value,
                into_decay as f32 / self.decay as f32,
            )
        } else {
            self.last_value
        };
        let floor = self.init_value.min(self.last_value);
        raw.clamp(floor, self.hold_value.max(floor))
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
