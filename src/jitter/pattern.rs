use crate::foundation::error::{AccrueError, AccrueResult};
use std::str::FromStr;

/// Sub-pixel jitter strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterPattern {
    /// No jitter; every offset is `(0, 0)`.
    #[serde(alias = "grid_aligned", alias = "none", alias = "off")]
    Grid,
    /// Sine-hash white noise.
    #[serde(alias = "white")]
    Random,
    /// Halton (2, 3) low-discrepancy pairs.
    Halton,
    /// 32-tap Poisson disk with per-pixel rotation.
    #[serde(alias = "poisson")]
    PoissonDisk,
    /// Scrambled Sobol with a 1024-frame period.
    #[default]
    Sobol,
}

impl JitterPattern {
    /// All patterns in selector order.
    pub const ALL: [JitterPattern; 5] = [
        Self::Grid,
        Self::Random,
        Self::Halton,
        Self::PoissonDisk,
        Self::Sobol,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Random => "random",
            Self::Halton => "halton",
            Self::PoissonDisk => "poisson_disk",
            Self::Sobol => "sobol",
        }
    }
}

impl FromStr for JitterPattern {
    type Err = AccrueError;

    fn from_str(s: &str) -> AccrueResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "grid" | "grid_aligned" | "gridaligned" | "none" | "off" => Ok(Self::Grid),
            "random" | "white" => Ok(Self::Random),
            "halton" => Ok(Self::Halton),
            "poisson" | "poisson_disk" | "poissondisk" => Ok(Self::PoissonDisk),
            "sobol" => Ok(Self::Sobol),
            "" => Err(AccrueError::validation("jitter pattern must be non-empty")),
            other => Err(AccrueError::validation(format!(
                "unknown jitter pattern '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for JitterPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jitter/pattern.rs"]
mod tests;
