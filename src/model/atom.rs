use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized element symbol: '{0}'")]
pub struct ParseElementError(String);

/// Elements the loader partitions by. Everything else in a coordinate file
/// is counted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    C,
    H,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::C => "C",
            Element::H => "H",
        }
    }

    /// Covalent radius in angstroms, used to scale radius markers.
    pub fn covalent_radius(&self) -> f32 {
        match self {
            Element::C => 0.69,
            Element::H => 0.31,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Element::C),
            "H" => Ok(Element::H),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

/// A single parsed atom: element plus Cartesian position. Immutable once
/// produced by the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomCoordinate {
    pub element: Element,
    pub position: Vector3<f32>,
}

impl AtomCoordinate {
    pub fn new(element: Element, position: Vector3<f32>) -> Self {
        Self { element, position }
    }
}

/// Output of the XYZ reader: atom coordinates partitioned by element, plus
/// a count of data lines whose element symbol was not recognized.
///
/// Invariant: `carbons.len() + hydrogens.len() + skipped` equals the number
/// of non-blank data lines in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub carbons: Vec<AtomCoordinate>,
    pub hydrogens: Vec<AtomCoordinate>,
    pub skipped: usize,
}

impl Molecule {
    /// Number of atoms the loader recognized.
    pub fn atom_count(&self) -> usize {
        self.carbons.len() + self.hydrogens.len()
    }
}
