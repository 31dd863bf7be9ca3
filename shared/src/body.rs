/// Downward velocities slower than this are left alone by
/// [`FlightBody::reset_fall_state`].
pub const FALL_VELOCITY_EPSILON: f32 = 0.1;

/// The slice of an entity's physics state the flight protocol reads and
/// writes. Implemented by the host for its player entity on both endpoints.
pub trait FlightBody {
    fn free_move(&self) -> bool;
    fn set_free_move(&mut self, free_move: bool);

    fn no_clip(&self) -> bool;
    fn set_no_clip(&mut self, no_clip: bool);

    fn fall_damage_multiplier(&self) -> f32;
    fn set_fall_damage_multiplier(&mut self, multiplier: f32);

    fn fall_distance(&self) -> f32;
    fn set_fall_distance(&mut self, distance: f32);

    fn vertical_velocity(&self) -> f32;
    fn set_vertical_velocity(&mut self, velocity: f32);

    /// Free movement follows `flying`; no-clip is never granted.
    fn set_flight_flags(&mut self, flying: bool) {
        self.set_free_move(flying);
        self.set_no_clip(false);
    }

    /// Forgets accumulated fall distance and stops any downward momentum so
    /// the next physics step cannot apply fall damage.
    fn reset_fall_state(&mut self) {
        self.set_fall_distance(0.0);
        if self.vertical_velocity() < -FALL_VELOCITY_EPSILON {
            self.set_vertical_velocity(0.0);
        }
    }
}
