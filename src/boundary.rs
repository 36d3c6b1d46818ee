/// Fixed wall values imposed on the fields after every interior update.
///
/// The bottom wall (node 0) is stationary and the top wall (node N−1) moves
/// at `top_speed`; both walls are held at `wall_temperature` (isothermal
/// Dirichlet conditions).
#[derive(Debug, Clone, Copy)]
pub struct Walls {
    /// Speed of the moving top wall [m/s].
    pub top_speed: f64,
    /// Temperature of both walls [K].
    pub wall_temperature: f64,
}

impl Walls {
    /// Overwrite the four wall values exactly, regardless of what the
    /// interior formula would have produced there.
    pub fn impose(&self, velocity: &mut [f64], temperature: &mut [f64]) {
        let last = velocity.len() - 1;
        velocity[0] = 0.0;
        velocity[last] = self.top_speed;
        temperature[0] = self.wall_temperature;
        temperature[last] = self.wall_temperature;
    }
}
