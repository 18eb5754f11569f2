use crate::epidemic::Compartment;
use serde::Serialize;
use std::io;

/// Live number of agents per compartment. This is the aggregate record the
/// statistics overlay consumes every tick; it also doubles as one row of
/// the epicurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompartmentCounts {
    pub susceptible: usize,
    pub exposed: usize,
    pub infected: usize,
    pub recovered: usize,
    pub quarantined: usize,
    pub hospitalized: usize,
    pub vaccinated: usize,
}

impl CompartmentCounts {
    /// Total population accounted for. The population is closed, so this
    /// always equals the simulation's `n`.
    pub fn total(&self) -> usize {
        self.susceptible
            + self.exposed
            + self.infected
            + self.recovered
            + self.quarantined
            + self.hospitalized
            + self.vaccinated
    }

    /// Count for a single compartment.
    pub fn get(&self, state: Compartment) -> usize {
        match state {
            Compartment::Susceptible => self.susceptible,
            Compartment::Exposed => self.exposed,
            Compartment::Infected => self.infected,
            Compartment::Recovered => self.recovered,
            Compartment::Quarantined => self.quarantined,
            Compartment::Hospitalized => self.hospitalized,
            Compartment::Vaccinated => self.vaccinated,
        }
    }

    /// Increment the count for one compartment.
    pub(crate) fn bump(&mut self, state: Compartment) {
        match state {
            Compartment::Susceptible => self.susceptible += 1,
            Compartment::Exposed => self.exposed += 1,
            Compartment::Infected => self.infected += 1,
            Compartment::Recovered => self.recovered += 1,
            Compartment::Quarantined => self.quarantined += 1,
            Compartment::Hospitalized => self.hospitalized += 1,
            Compartment::Vaccinated => self.vaccinated += 1,
        }
    }
}

/// Per-tick history of compartment counts, one row per finished tick.
/// This is the series the chart layer plots next to the deterministic
/// curve fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct EpicurveTracker {
    rows: Vec<CompartmentCounts>,
}

impl EpicurveTracker {
    pub fn new() -> Self {
        EpicurveTracker { rows: vec![] }
    }

    /// Append the counts for a finished tick.
    pub fn push(&mut self, counts: CompartmentCounts) {
        self.rows.push(counts);
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts recorded after tick `i`.
    pub fn row(&self, i: usize) -> Option<CompartmentCounts> {
        self.rows.get(i).copied()
    }

    /// Latest counts, or all zeros before the first tick.
    pub fn tip(&self) -> CompartmentCounts {
        self.rows.last().copied().unwrap_or_default()
    }

    /// Full series for one compartment.
    pub fn curve(&self, state: Compartment) -> Vec<usize> {
        self.rows.iter().map(|row| row.get(state)).collect()
    }

    /// Write the whole series as CSV, one row per tick with a header line
    /// naming the compartments.
    pub fn write_csv<W: io::Write>(&self, out: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        return Ok(());
    }
}
