use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;

/// Dispatch policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Scan,
    Look,
    Mylift,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Scan => write!(f, "SCAN"),
            Algorithm::Look => write!(f, "LOOK"),
            Algorithm::Mylift => write!(f, "MYLIFT"),
        }
    }
}

/// Simulation run description: the building, the fleet size, the floor
/// requests, and the step budget.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub num_floors: u8,
    pub num_lifts: usize,
    /// Origin floor mapped to the destinations requested from it. Ordered by
    /// origin so request assignment is deterministic.
    pub requests: BTreeMap<u8, Vec<u8>>,
    pub algorithm: Algorithm,
    /// Advisory step budget for a run; one step ticks every lift once.
    pub simulation_time: u64,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            num_floors: 5,
            num_lifts: 2,
            requests: BTreeMap::from([(1, vec![3, 5]), (2, vec![4]), (4, vec![1])]),
            algorithm: Algorithm::Scan,
            simulation_time: 100,
        }
    }
}

impl SimConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<SimConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?;
        SimConfig::parse(&text)
            .with_context(|| format!("error parsing input file '{}'", path.display()))
    }

    /// Parse the line-based input format: `#` comment lines, a header line
    /// `num_floors, num_lifts`, then one `origin: dest, dest, ...` line per
    /// requesting floor (an empty destination list is allowed).
    pub fn parse(text: &str) -> anyhow::Result<SimConfig> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .context("input is empty or contains only comments")?;
        let parts: Vec<&str> = header.split(',').collect();
        if parts.len() != 2 {
            anyhow::bail!("first line must be 'num_floors, num_lifts', got '{header}'");
        }
        let num_floors: u8 = parts[0]
            .trim()
            .parse()
            .with_context(|| format!("failed to parse '{}' as floor count", parts[0].trim()))?;
        let num_lifts: usize = parts[1]
            .trim()
            .parse()
            .with_context(|| format!("failed to parse '{}' as lift count", parts[1].trim()))?;
        if num_floors < 1 {
            anyhow::bail!("building must have at least one floor");
        }
        if num_lifts < 1 {
            anyhow::bail!("fleet must have at least one lift");
        }

        let mut requests: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
        for line in lines {
            let Some((floor_part, dest_part)) = line.split_once(':') else {
                continue;
            };
            let origin: u8 = floor_part
                .trim()
                .parse()
                .with_context(|| format!("failed to parse origin floor in '{line}'"))?;
            let dest_part = dest_part.trim();
            let destinations = if dest_part.is_empty() {
                Vec::new()
            } else {
                dest_part
                    .split(',')
                    .map(|d| {
                        d.trim().parse::<u8>().with_context(|| {
                            format!("failed to parse destination '{}' in '{line}'", d.trim())
                        })
                    })
                    .collect::<anyhow::Result<Vec<u8>>>()?
            };
            requests.insert(origin, destinations);
        }

        Ok(SimConfig {
            num_floors,
            num_lifts,
            requests,
            ..SimConfig::default()
        })
    }
}
