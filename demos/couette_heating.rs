use anyhow::Result;
use couette::{Fluid, FnObserver, Simulation, SimulationConfig, Snapshot};

/// Demonstrate the Couette solver and verify against analytical solutions.
///
/// Part 1: Steady velocity field — compare against the linear profile
///         u(y) = U·y/H.
/// Part 2: Steady temperature field with viscous heating — compare against
///         the Brinkman parabola ΔT(y) = (μU²/2k)·(y/H)(1 − y/H).
fn main() -> Result<()> {
    env_logger::init();

    let config = SimulationConfig {
        fluid: Fluid::unit_prandtl(),
        num_nodes: 21,
        duration: 20.0,
        ..SimulationConfig::new()
    };

    println!("Plane Couette Flow with Viscous Heating");
    println!("{:=<60}", "");
    println!();
    println!("  Gap:            {:.4} m", config.gap_height);
    println!("  Wall speed:     {:.2} m/s", config.wall_speed);
    println!("  Wall temp:      {:.2} K", config.wall_temperature);
    println!("  Nodes:          {}", config.num_nodes);
    println!(
        "  Fluid:          mu = {} Pa*s, rho = {} kg/m3, k = {} W/(m*K), c_p = {} J/(kg*K)",
        config.fluid.viscosity,
        config.fluid.density,
        config.fluid.conductivity,
        config.fluid.specific_heat
    );

    let sim = Simulation::new(&config)?;
    let y = sim.grid().coordinates();
    println!("  Time step:      {:.4e} s", sim.time_step());
    println!("  Steps:          {}", sim.num_steps());
    println!();

    let mut next_report = 0.0;
    let result = sim.run_with_observer(&mut FnObserver(|s: &Snapshot| {
        if s.progress >= next_report {
            println!(
                "  t = {:7.3} s  ({:5.1}%)  T_max = {:.4} K",
                s.time,
                s.progress * 100.0,
                s.temperature.iter().cloned().fold(f64::MIN, f64::max)
            );
            next_report += 0.25;
        }
    }))?;
    println!();

    // =====================================================================
    // PART 1: Velocity profile
    // =====================================================================
    println!("PART 1: Steady Velocity Profile");
    println!("{:-<60}", "");
    println!();
    println!(
        "    {:>10}  {:>12}  {:>12}  {:>10}",
        "y [mm]", "u [m/s]", "Exact [m/s]", "Err [m/s]"
    );
    println!("    {:-<50}", "");

    let mut max_u_err = 0.0_f64;
    for (i, &u) in result.velocity.iter().enumerate() {
        let exact = config.wall_speed * y[i] / config.gap_height;
        let err = (u - exact).abs();
        max_u_err = max_u_err.max(err);
        println!(
            "    {:>10.4}  {:>12.6}  {:>12.6}  {:>10.2e}",
            y[i] * 1000.0,
            u,
            exact,
            err
        );
    }
    println!("    {:-<50}", "");
    println!("  Max velocity error: {max_u_err:.2e} m/s");

    let pass_u = max_u_err < 0.01 * config.wall_speed;
    println!();
    if pass_u {
        println!("  PASS: velocity within 1% of the linear Couette profile");
    } else {
        println!("  FAIL: max velocity error = {max_u_err:.4} m/s");
    }
    println!();

    // =====================================================================
    // PART 2: Temperature profile
    // =====================================================================
    println!("PART 2: Viscous Heating Temperature Profile");
    println!("{:-<60}", "");
    println!();

    let peak = config.fluid.viscosity * config.wall_speed * config.wall_speed
        / (8.0 * config.fluid.conductivity);
    println!("  Analytical peak rise (mid-gap): {peak:.5} K");
    println!();
    println!(
        "    {:>10}  {:>12}  {:>12}  {:>10}",
        "y [mm]", "T [K]", "Exact [K]", "Err [K]"
    );
    println!("    {:-<50}", "");

    let mut max_t_err = 0.0_f64;
    for (i, &t) in result.temperature.iter().enumerate() {
        let eta = y[i] / config.gap_height;
        let exact = config.wall_temperature
            + config.fluid.viscosity * config.wall_speed * config.wall_speed
                / (2.0 * config.fluid.conductivity)
                * eta
                * (1.0 - eta);
        let err = (t - exact).abs();
        max_t_err = max_t_err.max(err);
        println!(
            "    {:>10.4}  {:>12.5}  {:>12.5}  {:>10.2e}",
            y[i] * 1000.0,
            t,
            exact,
            err
        );
    }
    println!("    {:-<50}", "");
    println!("  Max temperature error: {max_t_err:.2e} K");

    let pass_t = max_t_err < 0.01 * peak;
    println!();
    if pass_t {
        println!("  PASS: temperature within 1% of the Brinkman profile");
    } else {
        println!("  FAIL: max temperature error = {max_t_err:.5} K");
    }

    Ok(())
}
