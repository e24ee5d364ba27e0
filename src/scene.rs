//! Scene facade for a rendering collaborator.
//!
//! Owns the static molecule markers, the animated [`FieldSampler`], and the
//! rotation toggle. The host event loop is expected to call [`Scene::tick`]
//! every [`TICK_INTERVAL`] while rotation is running; everything here is
//! synchronous and completes before the renderer reads the sample slice.

use std::time::Duration;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::field::{self, FieldSampler};
use crate::model::atom::{Element, Molecule};
use crate::model::sample::FieldSample;

/// Cadence the external timer should drive [`Scene::tick`] at.
pub const TICK_INTERVAL: Duration = Duration::from_millis(15);

const CARBON_SCALE: f32 = 0.01;
const CARBON_RADIUS_SCALE: f32 = 0.025;
const CARBON_COLOR: [u8; 3] = [0, 0, 0];
const CARBON_RADIUS_COLOR: [u8; 3] = [5, 5, 5];

const HYDROGEN_SCALE: f32 = 0.005;
const HYDROGEN_RADIUS_SCALE: f32 = 0.015;
const HYDROGEN_COLOR: [u8; 3] = [220, 220, 220];
const HYDROGEN_RADIUS_COLOR: [u8; 3] = [225, 225, 225];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// The atom sphere itself.
    Atom,
    /// The translucent covalent-radius shell, hidden until toggled on.
    Radius,
}

/// A static visual item handed to the renderer once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Vector3<f32>,
    pub scale: f32,
    pub color: [u8; 3],
    pub kind: MarkerKind,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Stopped,
    Running,
}

/// The two subsystems wired together behind the configuration surface the
/// host UI sees.
#[derive(Debug, Clone)]
pub struct Scene {
    markers: Vec<Marker>,
    sampler: FieldSampler,
    rotation: RotationState,
}

impl Scene {
    /// Builds a scene from an already-loaded molecule. Rotation starts
    /// running with a freshly generated sample set.
    pub fn new(
        molecule: &Molecule,
        field_lines: usize,
        arrows_per_line: usize,
    ) -> Result<Self, field::Error> {
        Ok(Self {
            markers: build_markers(molecule),
            sampler: FieldSampler::new(field_lines, arrows_per_line)?,
            rotation: RotationState::Running,
        })
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn samples(&self) -> &[FieldSample] {
        self.sampler.samples()
    }

    pub fn sampler(&self) -> &FieldSampler {
        &self.sampler
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn set_field_lines(&mut self, field_lines: usize) -> Result<(), field::Error> {
        self.sampler.set_field_lines(field_lines)
    }

    pub fn set_arrows_per_line(&mut self, arrows_per_line: usize) -> Result<(), field::Error> {
        self.sampler.set_arrows_per_line(arrows_per_line)
    }

    /// Flips between running and stopped. Stopping takes effect before the
    /// next tick; there is never an in-flight pass to cancel.
    pub fn toggle_rotation(&mut self) {
        self.rotation = match self.rotation {
            RotationState::Stopped => RotationState::Running,
            RotationState::Running => RotationState::Stopped,
        };
    }

    /// Flips visibility of every covalent-radius marker.
    pub fn toggle_radii(&mut self) {
        for marker in &mut self.markers {
            if marker.kind == MarkerKind::Radius {
                marker.visible = !marker.visible;
            }
        }
    }

    /// One animation tick: advances the sampler and hands back the fresh
    /// sample set, or `None` while rotation is stopped.
    pub fn tick(&mut self) -> Option<&[FieldSample]> {
        match self.rotation {
            RotationState::Running => {
                self.sampler.advance();
                Some(self.sampler.samples())
            }
            RotationState::Stopped => None,
        }
    }
}

/// Produces the static marker list: an atom sphere plus a hidden radius
/// shell per recognized atom, carbons first.
pub fn build_markers(molecule: &Molecule) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(2 * molecule.atom_count());
    for atom in molecule.carbons.iter().chain(&molecule.hydrogens) {
        let (scale, radius_scale, color, radius_color) = match atom.element {
            Element::C => (
                CARBON_SCALE,
                CARBON_RADIUS_SCALE,
                CARBON_COLOR,
                CARBON_RADIUS_COLOR,
            ),
            Element::H => (
                HYDROGEN_SCALE,
                HYDROGEN_RADIUS_SCALE,
                HYDROGEN_COLOR,
                HYDROGEN_RADIUS_COLOR,
            ),
        };
        markers.push(Marker {
            position: atom.position,
            scale,
            color,
            kind: MarkerKind::Atom,
            visible: true,
        });
        markers.push(Marker {
            position: atom.position,
            scale: radius_scale,
            color: radius_color,
            kind: MarkerKind::Radius,
            visible: false,
        });
    }
    markers
}
