use rand::{Rng, RngCore};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl Die {
    pub const ALL: [Die; 6] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12, Die::D20];

    pub fn sides(self) -> u32 {
        match self {
            Die::D4 => 4,
            Die::D6 => 6,
            Die::D8 => 8,
            Die::D10 => 10,
            Die::D12 => 12,
            Die::D20 => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Die::D4 => "d4",
            Die::D6 => "d6",
            Die::D8 => "d8",
            Die::D10 => "d10",
            Die::D12 => "d12",
            Die::D20 => "d20",
        }
    }

    pub fn parse(label: &str) -> Option<Die> {
        Die::ALL.into_iter().find(|d| d.label() == label)
    }

    /// Uniform roll in `1..=sides`.
    pub fn roll(self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(1..=self.sides())
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Roll a die given by its label ("d20"). Unknown labels yield `None`.
pub fn roll_die(rng: &mut dyn RngCore, label: &str) -> Option<u32> {
    Die::parse(label).map(|die| die.roll(rng))
}
