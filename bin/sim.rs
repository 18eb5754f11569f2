use std::fs;

use episim::{prelude::*, utils::plot_vbars};
use serde::{Deserialize, Serialize};

/// Headless run configuration read from `conf.toml`. The `sim` table is the
/// same record the form layer submits; the remaining fields only control
/// this binary.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    num_iter: usize,
    verbose: bool,
    width: Real,
    height: Real,
    output: String,
    sim: Config,
}

impl Default for RunConfig {
    fn default() -> Self {
        let (width, height) = Viewport::Desktop.size();
        RunConfig {
            num_iter: 1_000,
            verbose: true,
            width,
            height,
            output: "epicurve.csv".to_string(),
            sim: Config::default(),
        }
    }
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let cfg: RunConfig = match fs::read_to_string("conf.toml") {
        Ok(data) => toml::from_str(&data).unwrap(),
        Err(_) => {
            log::warn!("conf.toml not found, running with defaults");
            RunConfig::default()
        }
    };

    if cfg.verbose {
        println!("{:#?}", cfg);
    }

    let mut sim = AgentSimulation::new(&cfg.sim, cfg.width, cfg.height);
    sim.run(cfg.num_iter);

    println!("after {} ticks: {}", sim.ticks(), sim.status_line());

    if cfg.verbose {
        let infected: Vec<Real> = sim
            .epicurve()
            .curve(Compartment::Infected)
            .iter()
            .map(|&x| x as Real)
            .collect();
        println!("infected per tick:");
        print!("{}", plot_vbars(&infected, 12));
    }

    let file = fs::File::create(&cfg.output).unwrap();
    sim.epicurve().write_csv(file).unwrap();
    log::info!("wrote {} rows to {}", sim.epicurve().len(), cfg.output);
}
