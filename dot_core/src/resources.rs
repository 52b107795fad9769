/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,    // Delta time reported for the last tick
    pub now: f32,   // Total elapsed time
    pub ticks: u64, // Update ticks run so far
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now, ticks: 0 }
    }

    /// Record one update tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
        self.ticks += 1;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
