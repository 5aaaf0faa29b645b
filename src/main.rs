//! Pool Sim entry point
//!
//! Runs the demo table and prints the recorded trajectory as JSON, ready to
//! be fed to a replay viewer.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pool Sim (native) starting...");

    if let Err(e) = run() {
        log::error!("Simulation failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; nothing to run here
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> pool_sim::Result<()> {
    use pool_sim::consts::MAX_RECORDED_STEPS;
    use pool_sim::{MotionModel, Simulation, Trajectory};

    let mut sim = Simulation::new(400, 400, MotionModel::ConstantDecrement)?;
    sim.start(100, 100, 20, 60, 1.1, -2.0)?;
    log::info!("{}", sim.status());

    let trajectory = Trajectory::record(&mut sim, MAX_RECORDED_STEPS)?;
    if let Some(rest) = trajectory.rest() {
        log::info!(
            "{} at ({:.2}, {:.2}) after {} waypoints, path length {:.2}",
            trajectory.status,
            rest.x,
            rest.y,
            trajectory.len(),
            trajectory.path_length()
        );
    }

    println!("{}", trajectory.to_json()?);
    Ok(())
}
