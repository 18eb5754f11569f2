use crate::{
    epidemic::{Compartment, Params},
    geometry::Rect,
    prelude::{Real, Time},
    render::{compartment_color, Surface},
};
use getset::CopyGetters;
use rand::Rng;

/// Rendering and collision radius of an agent, in surface units.
pub const AGENT_RADIUS: Real = 5.0;

/// Ticks an infected agent waits before recovery draws can succeed.
pub const RECOVERY_TICKS: Time = 500;

/// Ticks an exposed agent incubates before infection draws can succeed.
pub const EXPOSURE_TICKS: Time = 200;

/// Velocity scale of free agents; components are uniform in `[-scale/2, scale/2]`.
const FREE_SPEED: Real = 2.0;

/// Velocity scale of agents confined to an isolation zone.
const CONFINED_SPEED: Real = 1.0;

/// One individual of the simulated population: a moving particle with an
/// epidemiological compartment and the countdown timers gating its
/// stochastic transitions.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Agent {
    x: Real,
    y: Real,
    dx: Real,
    dy: Real,
    radius: Real,
    compartment: Compartment,
    recovery_timer: Time,
    exposure_timer: Time,
}

impl Agent {
    /// Create a susceptible agent at the given position with a random
    /// starting velocity.
    pub fn new<R: Rng>(x: Real, y: Real, rng: &mut R) -> Self {
        Agent {
            x,
            y,
            dx: (rng.gen::<Real>() - 0.5) * FREE_SPEED,
            dy: (rng.gen::<Real>() - 0.5) * FREE_SPEED,
            radius: AGENT_RADIUS,
            compartment: Compartment::Susceptible,
            recovery_timer: RECOVERY_TICKS,
            exposure_timer: EXPOSURE_TICKS,
        }
    }

    /// Relocate the agent. Exposed for hosts that lay populations out in
    /// custom patterns before a run.
    pub fn set_position(&mut self, x: Real, y: Real) -> &mut Self {
        self.x = x;
        self.y = y;
        return self;
    }

    /// Advance one tick of movement. Free agents drift with their current
    /// velocity and reflect off the surface boundary; confined agents draw
    /// a new, slower velocity every tick and are clamped to their zone.
    pub fn advance<R: Rng>(
        &mut self,
        width: Real,
        height: Real,
        confined_to: Option<&Rect>,
        rng: &mut R,
    ) {
        match confined_to {
            Some(area) => {
                self.dx = (rng.gen::<Real>() - 0.5) * CONFINED_SPEED;
                self.dy = (rng.gen::<Real>() - 0.5) * CONFINED_SPEED;
                self.x += self.dx;
                self.y += self.dy;
                area.clamp_circle(&mut self.x, &mut self.y, self.radius);
            }
            None => {
                self.x += self.dx;
                self.y += self.dy;
                if self.x - self.radius <= 0.0 || self.x + self.radius >= width {
                    self.dx = -self.dx;
                }
                if self.y - self.radius <= 0.0 || self.y + self.radius >= height {
                    self.dy = -self.dy;
                }
            }
        }
    }

    /// Susceptible -> Exposed. No-op from any other compartment.
    pub fn expose(&mut self) {
        if self.compartment.is_susceptible() {
            self.compartment = Compartment::Exposed;
        }
    }

    /// Susceptible/Exposed -> Infected. No-op from any other compartment.
    pub fn infect(&mut self) {
        if matches!(
            self.compartment,
            Compartment::Susceptible | Compartment::Exposed
        ) {
            self.compartment = Compartment::Infected;
        }
    }

    /// Infected/Quarantined/Hospitalized -> Recovered.
    pub fn recover(&mut self) {
        if matches!(
            self.compartment,
            Compartment::Infected | Compartment::Quarantined | Compartment::Hospitalized
        ) {
            self.compartment = Compartment::Recovered;
        }
    }

    /// Infected -> Quarantined, relocating to a random point of the zone.
    pub fn quarantine<R: Rng>(&mut self, area: &Rect, rng: &mut R) {
        if self.compartment.is_infected() {
            self.compartment = Compartment::Quarantined;
            let (x, y) = area.random_point(rng);
            self.set_position(x, y);
        }
    }

    /// Infected -> Hospitalized, relocating to a random point of the zone.
    pub fn hospitalize<R: Rng>(&mut self, area: &Rect, rng: &mut R) {
        if self.compartment.is_infected() {
            self.compartment = Compartment::Hospitalized;
            let (x, y) = area.random_point(rng);
            self.set_position(x, y);
        }
    }

    /// Susceptible -> Vaccinated.
    pub fn vaccinate(&mut self) {
        if self.compartment.is_susceptible() {
            self.compartment = Compartment::Vaccinated;
        }
    }

    /// Resolve the stochastic transitions for one tick. Dispatch happens on
    /// the compartment held at tick entry, so at most one transition fires
    /// per agent per tick. Inside the infected branch the precedence is
    /// recovery, then quarantine, then hospitalization.
    pub fn update<R: Rng>(
        &mut self,
        params: &Params,
        quarantine_area: Option<&Rect>,
        hospital_area: Option<&Rect>,
        rng: &mut R,
    ) {
        match self.compartment {
            Compartment::Susceptible => {
                if let Some(v_rate) = params.v_rate() {
                    if rng.gen_bool(v_rate) {
                        self.vaccinate();
                    }
                }
            }
            Compartment::Exposed => {
                if let Some(sigma) = params.sigma() {
                    self.exposure_timer -= 1;
                    if self.exposure_timer <= 0 && rng.gen_bool(sigma) {
                        self.infect();
                    }
                }
            }
            Compartment::Infected => {
                self.recovery_timer -= 1;
                if self.recovery_timer <= 0 && rng.gen_bool(params.gamma()) {
                    self.recover();
                } else {
                    let _ = self.try_quarantine(params.delta(), quarantine_area, rng)
                        || self.try_hospitalize(params.h_rate(), hospital_area, rng);
                }
            }
            Compartment::Quarantined | Compartment::Hospitalized => {
                if let Some(mu) = params.mu() {
                    self.recovery_timer -= 1;
                    if self.recovery_timer <= 0 && rng.gen_bool(mu) {
                        self.recover();
                    }
                }
            }
            Compartment::Recovered | Compartment::Vaccinated => {}
        }
    }

    /// Quarantine diversion: fires only when the rate is set, the zone was
    /// prepared and the draw succeeds. A missing zone falls through.
    fn try_quarantine<R: Rng>(
        &mut self,
        rate: Option<Real>,
        area: Option<&Rect>,
        rng: &mut R,
    ) -> bool {
        match (rate, area) {
            (Some(p), Some(area)) if rng.gen_bool(p) => {
                self.quarantine(area, rng);
                return true;
            }
            _ => false,
        }
    }

    /// Hospitalization diversion, same guards as `try_quarantine`.
    fn try_hospitalize<R: Rng>(
        &mut self,
        rate: Option<Real>,
        area: Option<&Rect>,
        rng: &mut R,
    ) -> bool {
        match (rate, area) {
            (Some(p), Some(area)) if rng.gen_bool(p) => {
                self.hospitalize(area, rng);
                return true;
            }
            _ => false,
        }
    }

    /// Draw the agent as a filled circle colored by compartment.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, self.radius, compartment_color(self.compartment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::{SeedableRng, SmallRng};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(17)
    }

    fn agent_at(x: Real, y: Real, compartment: Compartment) -> Agent {
        let mut agent = Agent::new(x, y, &mut rng());
        agent.compartment = compartment;
        return agent;
    }

    #[test]
    fn new_agent_defaults() {
        let agent = Agent::new(10.0, 20.0, &mut rng());
        assert_eq!(agent.compartment(), Compartment::Susceptible);
        assert_eq!(agent.radius(), AGENT_RADIUS);
        assert_eq!(agent.recovery_timer(), RECOVERY_TICKS);
        assert_eq!(agent.exposure_timer(), EXPOSURE_TICKS);
        assert!(agent.dx().abs() <= 1.0);
        assert!(agent.dy().abs() <= 1.0);
    }

    #[test]
    fn free_movement_reflects_at_boundary() {
        let mut agent = agent_at(6.0, 50.0, Compartment::Susceptible);
        agent.dx = -2.0;
        agent.dy = 0.0;
        agent.advance(100.0, 100.0, None, &mut rng());
        // 6 - 2 = 4; 4 - radius <= 0 flips the velocity sign.
        assert_eq!(agent.x(), 4.0);
        assert_eq!(agent.dx(), 2.0);
    }

    #[test]
    fn confined_movement_stays_in_zone() {
        let area = Rect::new(490.0, 350.0, 175.0, 125.0);
        let mut agent = agent_at(500.0, 360.0, Compartment::Quarantined);
        let mut rng = rng();
        for _ in 0..500 {
            agent.advance(700.0, 500.0, Some(&area), &mut rng);
            assert!(area.contains(agent.x(), agent.y()));
            assert!(agent.dx().abs() <= 0.5);
        }
    }

    #[test]
    fn guarded_setters_ignore_wrong_sources() {
        let mut agent = agent_at(0.0, 0.0, Compartment::Recovered);
        agent.expose();
        agent.infect();
        agent.vaccinate();
        assert_eq!(agent.compartment(), Compartment::Recovered);

        let mut agent = agent_at(0.0, 0.0, Compartment::Susceptible);
        agent.recover();
        assert_eq!(agent.compartment(), Compartment::Susceptible);
    }

    #[test]
    fn exposed_incubates_then_infects() {
        let params = Params::new(0.5, 0.0).set_sigma(Some(1.0)).clone();
        let mut agent = agent_at(0.0, 0.0, Compartment::Exposed);
        let mut rng = rng();

        // The timer gates the transition for EXPOSURE_TICKS updates.
        for tick in 0..EXPOSURE_TICKS {
            assert_eq!(agent.exposure_timer(), EXPOSURE_TICKS - tick);
            agent.update(&params, None, None, &mut rng);
        }
        assert_eq!(agent.compartment(), Compartment::Infected);
    }

    #[test]
    fn exposed_without_sigma_never_progresses() {
        let params = Params::new(0.5, 1.0);
        let mut agent = agent_at(0.0, 0.0, Compartment::Exposed);
        let mut rng = rng();
        for _ in 0..1000 {
            agent.update(&params, None, None, &mut rng);
        }
        assert_eq!(agent.compartment(), Compartment::Exposed);
        assert_eq!(agent.exposure_timer(), EXPOSURE_TICKS);
    }

    #[test]
    fn infected_recovers_once_timer_elapses() {
        let params = Params::new(0.5, 1.0);
        let mut agent = agent_at(0.0, 0.0, Compartment::Infected);
        let mut rng = rng();

        for tick in 0..RECOVERY_TICKS {
            assert_eq!(agent.recovery_timer(), RECOVERY_TICKS - tick);
            agent.update(&params, None, None, &mut rng);
        }
        assert_eq!(agent.compartment(), Compartment::Recovered);
    }

    #[test]
    fn recovery_timer_decrements_once_per_tick() {
        let params = Params::new(0.5, 0.0);
        let mut agent = agent_at(0.0, 0.0, Compartment::Infected);
        let mut rng = rng();
        for tick in 1..=100 {
            agent.update(&params, None, None, &mut rng);
            assert_eq!(agent.recovery_timer(), RECOVERY_TICKS - tick);
            assert_eq!(agent.exposure_timer(), EXPOSURE_TICKS);
        }
    }

    #[test]
    fn quarantine_fires_before_timer_elapses() {
        let params = Params::new(0.5, 0.0).set_delta(Some(1.0)).clone();
        let area = Rect::new(490.0, 350.0, 175.0, 125.0);
        let mut agent = agent_at(10.0, 10.0, Compartment::Infected);
        agent.update(&params, Some(&area), None, &mut rng());
        assert_eq!(agent.compartment(), Compartment::Quarantined);
        assert!(area.contains(agent.x(), agent.y()));
    }

    #[test]
    fn quarantine_takes_precedence_over_hospitalization() {
        let params = Params::new(0.5, 0.0)
            .set_delta(Some(1.0))
            .set_h_rate(Some(1.0))
            .clone();
        let quarantine = Rect::new(490.0, 350.0, 175.0, 125.0);
        let hospital = Rect::new(35.0, 350.0, 175.0, 125.0);
        let mut agent = agent_at(10.0, 10.0, Compartment::Infected);
        agent.update(&params, Some(&quarantine), Some(&hospital), &mut rng());
        assert_eq!(agent.compartment(), Compartment::Quarantined);
    }

    #[test]
    fn hospitalization_is_the_fallback() {
        let params = Params::new(0.5, 0.0).set_h_rate(Some(1.0)).clone();
        let hospital = Rect::new(35.0, 350.0, 175.0, 125.0);
        let mut agent = agent_at(10.0, 10.0, Compartment::Infected);
        agent.update(&params, None, Some(&hospital), &mut rng());
        assert_eq!(agent.compartment(), Compartment::Hospitalized);
        assert!(hospital.contains(agent.x(), agent.y()));
    }

    #[test]
    fn missing_zone_disables_diversion() {
        let params = Params::new(0.5, 0.0).set_delta(Some(1.0)).clone();
        let mut agent = agent_at(10.0, 10.0, Compartment::Infected);
        agent.update(&params, None, None, &mut rng());
        assert_eq!(agent.compartment(), Compartment::Infected);
    }

    #[test]
    fn isolated_agents_discharge_with_mu() {
        let params = Params::new(0.5, 0.0).set_mu(Some(1.0)).clone();
        let mut rng = rng();
        for &start in &[Compartment::Quarantined, Compartment::Hospitalized] {
            let mut agent = agent_at(0.0, 0.0, start);
            agent.recovery_timer = 1;
            agent.update(&params, None, None, &mut rng);
            assert_eq!(agent.compartment(), Compartment::Recovered);
        }
    }

    #[test]
    fn susceptible_vaccinates_with_v_rate() {
        let params = Params::new(0.5, 0.0).set_v_rate(Some(1.0)).clone();
        let mut agent = agent_at(0.0, 0.0, Compartment::Susceptible);
        agent.update(&params, None, None, &mut rng());
        assert_eq!(agent.compartment(), Compartment::Vaccinated);
    }

    #[test]
    fn terminal_states_are_stable() {
        let params = Params::new(1.0, 1.0)
            .set_sigma(Some(1.0))
            .set_delta(Some(1.0))
            .set_h_rate(Some(1.0))
            .set_mu(Some(1.0))
            .set_v_rate(Some(1.0))
            .clone();
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut rng = rng();
        for &terminal in &[Compartment::Recovered, Compartment::Vaccinated] {
            let mut agent = agent_at(50.0, 50.0, terminal);
            for _ in 0..200 {
                agent.update(&params, Some(&area), Some(&area), &mut rng);
                assert_eq!(agent.compartment(), terminal);
            }
        }
    }
}
