use paste::paste;

macro_rules! is_state {
    ($name:ident, $variant:ident) => {
        paste! {
            #[doc = "Return true if the agent is in the `" $variant "` compartment."]
            pub fn [<is_ $name>](self) -> bool {
                self == Compartment::$variant
            }
        }
    };
}

/// Epidemiological compartment of a single agent. An agent occupies exactly
/// one compartment at any time and transitions are monotone: no compartment
/// upstream of the current one is ever re-entered.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Recovered,
    Quarantined,
    Hospitalized,
    Vaccinated,
}

impl Compartment {
    /// Number of distinct compartments.
    pub const CARDINALITY: usize = 7;

    /// All compartments, in `index()` order.
    pub const ALL: [Compartment; Self::CARDINALITY] = [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infected,
        Compartment::Recovered,
        Compartment::Quarantined,
        Compartment::Hospitalized,
        Compartment::Vaccinated,
    ];

    /// Integer representation of the compartment. `ALL` lists the
    /// compartments in this order, which is also the column order of
    /// epicurve output and overlays.
    pub fn index(self) -> usize {
        match self {
            Compartment::Susceptible => 0,
            Compartment::Exposed => 1,
            Compartment::Infected => 2,
            Compartment::Recovered => 3,
            Compartment::Quarantined => 4,
            Compartment::Hospitalized => 5,
            Compartment::Vaccinated => 6,
        }
    }

    /// Single-letter label used by status overlays.
    pub fn label(self) -> &'static str {
        match self {
            Compartment::Susceptible => "S",
            Compartment::Exposed => "E",
            Compartment::Infected => "I",
            Compartment::Recovered => "R",
            Compartment::Quarantined => "Q",
            Compartment::Hospitalized => "H",
            Compartment::Vaccinated => "V",
        }
    }

    /// Terminal compartments have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Compartment::Recovered | Compartment::Vaccinated)
    }

    /// Query if agents in this compartment can pass the infection on.
    pub fn is_contagious(self) -> bool {
        self == Compartment::Infected
    }

    is_state!(susceptible, Susceptible);
    is_state!(exposed, Exposed);
    is_state!(infected, Infected);
    is_state!(recovered, Recovered);
    is_state!(quarantined, Quarantined);
    is_state!(hospitalized, Hospitalized);
    is_state!(vaccinated, Vaccinated);
}

impl Default for Compartment {
    fn default() -> Self {
        Compartment::Susceptible
    }
}
