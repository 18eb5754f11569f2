use crate::epidemic::ModelKind;
use crate::prelude::Real;
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Epidemiological rates governing the stochastic transitions of agents.
/// All rates are per-tick probabilities in `[0, 1]`. An absent optional
/// rate disables the corresponding transition entirely.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, CopyGetters, Setters, Serialize, Deserialize,
)]
#[getset(get_copy = "pub", set = "pub")]
#[serde(default, rename_all = "camelCase")]
pub struct Params {
    /// Transmission probability per close contact.
    beta: Real,
    /// Recovery probability once the recovery timer has elapsed.
    gamma: Real,
    /// Incubation transition probability (Exposed -> Infected).
    #[serde(skip_serializing_if = "Option::is_none")]
    sigma: Option<Real>,
    /// Quarantine diversion probability for infected agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    delta: Option<Real>,
    /// Hospitalization diversion probability for infected agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    h_rate: Option<Real>,
    /// Discharge probability for isolated agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    mu: Option<Real>,
    /// Vaccination probability for susceptible agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    v_rate: Option<Real>,
}

impl Params {
    pub fn new(beta: Real, gamma: Real) -> Self {
        Params {
            beta,
            gamma,
            ..Params::default()
        }
    }
}

/// Full run configuration, the record exchanged with the form layer and
/// sent unchanged to the history backend for the complementary
/// deterministic curve. Fields serialize in camelCase so the wire shape
/// matches both collaborators.
#[derive(Debug, Clone, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    model: ModelKind,
    beta: Real,
    gamma: Real,
    /// Population size. Constant for the whole run.
    n: usize,
    /// Number of agents seeded Exposed/Infected at construction.
    initial_i: usize,
    /// Horizon requested from the deterministic backend, in days.
    days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sigma: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delta: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    h_rate: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mu: Option<Real>,
    #[serde(skip_serializing_if = "Option::is_none")]
    v_rate: Option<Real>,
    /// Seed for the run's random number generator; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelKind::Sir,
            beta: 0.3,
            gamma: 0.1,
            n: 100,
            initial_i: 1,
            days: 100,
            sigma: None,
            delta: None,
            h_rate: None,
            mu: None,
            v_rate: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn new(model: ModelKind, beta: Real, gamma: Real, n: usize, initial_i: usize) -> Self {
        Config {
            model,
            beta,
            gamma,
            n,
            initial_i,
            ..Config::default()
        }
    }

    /// Extract the rate parameters consumed by agent updates.
    pub fn params(&self) -> Params {
        Params {
            beta: self.beta,
            gamma: self.gamma,
            sigma: self.sigma,
            delta: self.delta,
            h_rate: self.h_rate,
            mu: self.mu,
            v_rate: self.v_rate,
        }
    }

    /// Builder-style setters used by tests and embedding hosts.
    pub fn with_sigma(mut self, sigma: Real) -> Self {
        self.sigma = Some(sigma);
        return self;
    }

    pub fn with_delta(mut self, delta: Real) -> Self {
        self.delta = Some(delta);
        return self;
    }

    pub fn with_h_rate(mut self, h_rate: Real) -> Self {
        self.h_rate = Some(h_rate);
        return self;
    }

    pub fn with_mu(mut self, mu: Real) -> Self {
        self.mu = Some(mu);
        return self;
    }

    pub fn with_v_rate(mut self, v_rate: Real) -> Self {
        self.v_rate = Some(v_rate);
        return self;
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        return self;
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        return self;
    }
}
