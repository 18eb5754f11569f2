use crate::{
    epidemic::{Compartment, Config, ModelKind, Params},
    geometry::Rect,
    prelude::Real,
    render::{Color, Surface},
    sim::{Agent, CompartmentCounts, EpicurveTracker, Id},
};
use getset::{CopyGetters, Getters};
use paste::paste;
use rand::prelude::{Rng, SeedableRng, SmallRng};

/// Distance under which an infected agent may transmit to a susceptible
/// one.
pub const SPREAD_RADIUS: Real = 10.0;

/// Zone rectangles reserved for the isolation compartments. Immutable after
/// construction; a zone the model variant never uses stays `None` and the
/// corresponding diversion silently never fires.
#[derive(Debug, Clone, Copy, PartialEq, Default, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct IsolationZones {
    quarantine: Option<Rect>,
    hospital: Option<Rect>,
}

impl IsolationZones {
    /// Reserve zones as sub-regions of the main surface: quarantine in the
    /// bottom-right corner, hospital in the bottom-left.
    pub fn inset(model: ModelKind, width: Real, height: Real) -> Self {
        let mut zones = IsolationZones::default();
        if model.uses_quarantine() {
            zones.quarantine = Some(Rect::new(
                width * 0.7,
                height * 0.7,
                width * 0.25,
                height * 0.25,
            ));
        }
        if model.uses_hospital() {
            zones.hospital = Some(Rect::new(
                width * 0.05,
                height * 0.7,
                width * 0.25,
                height * 0.25,
            ));
        }
        return zones;
    }

    /// Derive zones from dedicated per-zone surfaces; each zone spans the
    /// whole surface assigned to it.
    pub fn dedicated(
        model: ModelKind,
        quarantine: Option<(Real, Real)>,
        hospital: Option<(Real, Real)>,
    ) -> Self {
        let mut zones = IsolationZones::default();
        if model.uses_quarantine() {
            zones.quarantine = quarantine.map(|(w, h)| Rect::new(0.0, 0.0, w, h));
        }
        if model.uses_hospital() {
            zones.hospital = hospital.map(|(w, h)| Rect::new(0.0, 0.0, w, h));
        }
        return zones;
    }

    /// Zone confining the given compartment, if it was prepared.
    pub fn confinement(&self, state: Compartment) -> Option<Rect> {
        match state {
            Compartment::Quarantined => self.quarantine,
            Compartment::Hospitalized => self.hospital,
            _ => None,
        }
    }
}

macro_rules! compartment_count {
    ($($name:ident => $variant:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = "Number of agents currently in the `" $variant "` compartment."]
                pub fn [<n_ $name>](&self) -> usize {
                    self.agents
                        .iter()
                        .filter(|a| a.compartment() == Compartment::$variant)
                        .count()
                }
            )*
        }
    };
}

/// AgentSimulation owns a population of moving agents together with the
/// parameters, zone geometry and random number generator that advance it
/// one tick at a time. New parameters mean a new simulation; a running
/// instance is never re-parameterized.
#[derive(Getters, CopyGetters)]
pub struct AgentSimulation {
    #[getset(get = "pub")]
    agents: Vec<Agent>,
    #[getset(get = "pub")]
    params: Params,
    #[getset(get_copy = "pub")]
    model: ModelKind,
    #[getset(get_copy = "pub")]
    width: Real,
    #[getset(get_copy = "pub")]
    height: Real,
    #[getset(get_copy = "pub")]
    days: u32,
    #[getset(get_copy = "pub")]
    zones: IsolationZones,
    #[getset(get = "pub")]
    epicurve: EpicurveTracker,
    #[getset(get_copy = "pub")]
    ticks: u64,
    rng: SmallRng,
}

impl AgentSimulation {
    /// Build a simulation for the given configuration on a surface of the
    /// given dimensions, with zones carved out of that surface.
    pub fn new(config: &Config, width: Real, height: Real) -> Self {
        let zones = IsolationZones::inset(config.model(), width, height);
        Self::with_zones(config, width, height, zones)
    }

    /// Build a simulation with explicitly prepared zones. Used by hosts
    /// that render isolation zones on dedicated surfaces.
    pub fn with_zones(config: &Config, width: Real, height: Real, zones: IsolationZones) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut agents = Vec::with_capacity(config.n());
        for i in 0..config.n() {
            let x = rng.gen_range(0.0..width);
            let y = rng.gen_range(0.0..height);
            let mut agent = Agent::new(x, y, &mut rng);
            if i < config.initial_i() {
                match config.model().seed_compartment() {
                    Compartment::Exposed => agent.expose(),
                    _ => agent.infect(),
                }
            }
            agents.push(agent);
        }
        log::debug!(
            "initialized {} population: {} agents, {} seeded",
            config.model(),
            config.n(),
            config.initial_i()
        );

        AgentSimulation {
            agents,
            params: config.params(),
            model: config.model(),
            width,
            height,
            days: config.days(),
            zones,
            epicurve: EpicurveTracker::new(),
            ticks: 0,
            rng,
        }
    }

    /// Population size.
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    /// Replace the random number generator with a seeded one.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = SmallRng::seed_from_u64(seed);
        return self;
    }

    /// Advance the whole population one tick. Each agent, in index order,
    /// moves (confined to its zone when isolated), resolves its stochastic
    /// transitions, and, when infected, is scanned against every other
    /// agent for proximity transmission. The finished tick's counts are
    /// appended to the epicurve.
    pub fn step(&mut self) {
        let quarantine = self.zones.quarantine();
        let hospital = self.zones.hospital();

        for i in 0..self.agents.len() {
            let confined = self.zones.confinement(self.agents[i].compartment());
            self.agents[i].advance(self.width, self.height, confined.as_ref(), &mut self.rng);
            self.agents[i].update(
                &self.params,
                quarantine.as_ref(),
                hospital.as_ref(),
                &mut self.rng,
            );
            if self.agents[i].compartment().is_infected() {
                self.spread_from(i);
            }
        }

        self.ticks += 1;
        let counts = self.counts();
        self.epicurve.push(counts);
    }

    /// All-pairs proximity scan from one infected agent: susceptible agents
    /// within `SPREAD_RADIUS` catch the infection with probability beta.
    /// O(N^2) per tick across all infected sources, which is fine at the
    /// population sizes this engine animates.
    fn spread_from(&mut self, i: Id) {
        let (x, y) = (self.agents[i].x(), self.agents[i].y());
        let beta = self.params.beta();
        let incubates = self.model.has_incubation();

        for j in 0..self.agents.len() {
            if i == j || !self.agents[j].compartment().is_susceptible() {
                continue;
            }
            let distance = (x - self.agents[j].x()).hypot(y - self.agents[j].y());
            if distance < SPREAD_RADIUS && self.rng.gen_bool(beta) {
                if incubates {
                    self.agents[j].expose();
                } else {
                    self.agents[j].infect();
                }
            }
        }
    }

    /// Advance `n_steps` ticks without rendering.
    pub fn run(&mut self, n_steps: usize) -> &mut Self {
        for _ in 0..n_steps {
            self.step();
        }
        return self;
    }

    /// Count agents per compartment by scanning the population. Computed on
    /// demand; no incremental counters are maintained.
    pub fn counts(&self) -> CompartmentCounts {
        let mut counts = CompartmentCounts::default();
        for agent in &self.agents {
            counts.bump(agent.compartment());
        }
        return counts;
    }

    compartment_count!(
        susceptible => Susceptible,
        exposed => Exposed,
        infected => Infected,
        recovered => Recovered,
        quarantined => Quarantined,
        hospitalized => Hospitalized,
        vaccinated => Vaccinated,
    );

    /// One-line population summary for the statistics overlay. Compartments
    /// the model variant never populates are omitted.
    pub fn status_line(&self) -> String {
        let counts = self.counts();
        let parts: Vec<String> = Compartment::ALL
            .iter()
            .filter(|&&state| self.overlay_shows(state))
            .map(|&state| format!("{}: {}", state.label(), counts.get(state)))
            .collect();
        return parts.join(" | ");
    }

    fn overlay_shows(&self, state: Compartment) -> bool {
        match state {
            Compartment::Susceptible | Compartment::Infected | Compartment::Recovered => true,
            Compartment::Exposed => self.model.has_incubation(),
            Compartment::Quarantined => self.model.uses_quarantine(),
            Compartment::Hospitalized => self.model.uses_hospital(),
            Compartment::Vaccinated => self.model.uses_vaccination(),
        }
    }

    /// Render one frame: zones first, then every agent, then the statistics
    /// overlay. Pure output; the population is not touched.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        self.render_zones(surface);
        for agent in &self.agents {
            agent.render(surface);
        }
        self.render_statistics(surface);
    }

    fn render_zones(&self, surface: &mut impl Surface) {
        if let Some(area) = self.zones.quarantine() {
            surface.fill_rect(area, Color::PURPLE.with_alpha(25));
            surface.stroke_rect(area, Color::PURPLE);
            surface.text("Quarantine", area.x + 10.0, area.y + 20.0, Color::PURPLE);
        }
        if let Some(area) = self.zones.hospital() {
            surface.fill_rect(area, Color::BROWN.with_alpha(25));
            surface.stroke_rect(area, Color::BROWN);
            surface.text("Hospital", area.x + 10.0, area.y + 20.0, Color::BROWN);
        }
    }

    fn render_statistics(&self, surface: &mut impl Surface) {
        surface.text(&format!("Model: {}", self.model), 10.0, 20.0, Color::BLACK);
        surface.text(&self.status_line(), 10.0, 40.0, Color::BLACK);
    }
}
