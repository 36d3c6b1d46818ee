use crate::error::SimError;

/// Physical properties of the working fluid.
///
/// All four coefficients must be positive; `validate()` is called before any
/// stepping begins. The derived diffusivities govern both the physics and
/// the stability time-step bound.
#[derive(Debug, Clone)]
pub struct Fluid {
    /// Dynamic viscosity μ [Pa·s].
    pub viscosity: f64,
    /// Density ρ [kg/m³].
    pub density: f64,
    /// Thermal conductivity k [W/(m·K)].
    pub conductivity: f64,
    /// Specific heat capacity c_p [J/(kg·K)].
    pub specific_heat: f64,
}

impl Fluid {
    pub fn new(viscosity: f64, density: f64, conductivity: f64, specific_heat: f64) -> Self {
        Self {
            viscosity,
            density,
            conductivity,
            specific_heat,
        }
    }

    /// SAE-30-like engine oil at room temperature.
    pub fn engine_oil() -> Self {
        Self::new(0.8, 900.0, 0.145, 1880.0)
    }

    /// Water at 20 °C.
    pub fn water() -> Self {
        Self::new(1.0e-3, 998.0, 0.60, 4182.0)
    }

    /// Synthetic fluid with ν = α = 1e-5 m²/s (Prandtl number 1).
    ///
    /// Momentum and heat then relax on the same time scale, which keeps
    /// thermal steady-state runs short. Used by the verification tests and
    /// the demo.
    pub fn unit_prandtl() -> Self {
        Self::new(0.01, 1000.0, 1.0, 100.0)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let checks = [
            ("viscosity", self.viscosity),
            ("density", self.density),
            ("conductivity", self.conductivity),
            ("specific heat", self.specific_heat),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::Configuration(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Momentum diffusivity ν = μ/ρ [m²/s].
    pub fn momentum_diffusivity(&self) -> f64 {
        self.viscosity / self.density
    }

    /// Thermal diffusivity α = k/(ρ·c_p) [m²/s].
    pub fn thermal_diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// Viscous heating coefficient μ/(ρ·c_p) [K·m²/s per (1/s)²].
    ///
    /// Multiplies the squared shear rate in the energy equation.
    pub fn heating_coefficient(&self) -> f64 {
        self.viscosity / (self.density * self.specific_heat)
    }
}
