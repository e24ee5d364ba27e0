use std::f32::consts::TAU;

use nalgebra::{UnitQuaternion, Vector3};

use crate::field::error::Error;
use crate::field::{ANIMATION_FRAMES, ELLIPSE_A, ELLIPSE_B};
use crate::model::sample::FieldSample;

/// Generates the full set of field-line arrow samples, one pass per tick.
///
/// Samples are laid out flat, line-major: the arrow at `(line i, arrow j)`
/// sits at index `i * arrows_per_line + j`. The backing buffer is reused
/// across passes and only reallocated when the sample count changes, since
/// regeneration happens on every animation tick.
#[derive(Debug, Clone)]
pub struct FieldSampler {
    field_lines: usize,
    arrows_per_line: usize,
    phase: f32,
    step: f32,
    samples: Vec<FieldSample>,
}

impl FieldSampler {
    /// Creates a sampler and generates its initial sample set.
    pub fn new(field_lines: usize, arrows_per_line: usize) -> Result<Self, Error> {
        validate(field_lines, arrows_per_line)?;
        let mut sampler = Self {
            field_lines,
            arrows_per_line,
            phase: 0.0,
            step: phase_step(arrows_per_line),
            samples: Vec::new(),
        };
        sampler.regenerate();
        Ok(sampler)
    }

    pub fn field_lines(&self) -> usize {
        self.field_lines
    }

    pub fn arrows_per_line(&self) -> usize {
        self.arrows_per_line
    }

    /// Current animation phase. Grows without bound; only `sin`/`cos`
    /// consume it.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Phase increment applied per tick.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// The current sample set, `field_lines * arrows_per_line` long.
    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    /// Changes the number of field lines, resetting the animation phase and
    /// regenerating the full sample set.
    pub fn set_field_lines(&mut self, field_lines: usize) -> Result<(), Error> {
        validate(field_lines, self.arrows_per_line)?;
        self.field_lines = field_lines;
        self.reset_phase();
        self.regenerate();
        Ok(())
    }

    /// Changes the number of arrows per line, resetting the animation phase,
    /// recomputing the per-tick step, and regenerating the full sample set.
    pub fn set_arrows_per_line(&mut self, arrows_per_line: usize) -> Result<(), Error> {
        validate(self.field_lines, arrows_per_line)?;
        self.arrows_per_line = arrows_per_line;
        self.reset_phase();
        self.regenerate();
        Ok(())
    }

    /// Advances the animation by one tick and regenerates all samples.
    pub fn advance(&mut self) {
        self.phase += self.step;
        self.regenerate();
    }

    fn reset_phase(&mut self) {
        self.phase = 0.0;
        self.step = phase_step(self.arrows_per_line);
    }

    /// Recomputes every sample in place for the current configuration and
    /// phase. Deterministic for a fixed `(field_lines, arrows_per_line,
    /// phase)` triple.
    pub fn regenerate(&mut self) {
        let count = self.field_lines * self.arrows_per_line;
        if self.samples.len() != count {
            self.samples.resize_with(count, FieldSample::default);
        }

        for i in 0..self.field_lines {
            let horizontal_angle = TAU * i as f32 / self.field_lines as f32;
            let x_center = ELLIPSE_A * horizontal_angle.cos();
            let z_center = ELLIPSE_A * horizontal_angle.sin();

            // Global placement: the whole ellipse swung around the vertical axis.
            let y_rotation =
                UnitQuaternion::from_axis_angle(&Vector3::y_axis(), horizontal_angle);

            for j in 0..self.arrows_per_line {
                let vertical_angle =
                    TAU * j as f32 / self.arrows_per_line as f32 + self.phase;

                // Point on an ellipse centered at the origin, parallel to the x axis.
                let x_unrotated = ELLIPSE_A * vertical_angle.cos();
                let y = ELLIPSE_B * vertical_angle.sin();

                let x_rotated = x_unrotated * horizontal_angle.cos();
                let z_rotated = x_unrotated * horizontal_angle.sin();

                // Local tangent rotation, then global placement.
                let z_rotation =
                    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), vertical_angle);
                let orientation = y_rotation * z_rotation;

                self.samples[i * self.arrows_per_line + j] = FieldSample::new(
                    Vector3::new(x_center + x_rotated, y, z_center + z_rotated),
                    orientation,
                );
            }
        }
    }
}

fn phase_step(arrows_per_line: usize) -> f32 {
    TAU / arrows_per_line as f32 / ANIMATION_FRAMES
}

fn validate(field_lines: usize, arrows_per_line: usize) -> Result<(), Error> {
    if field_lines == 0 {
        return Err(Error::ZeroFieldLines);
    }
    if arrows_per_line == 0 {
        return Err(Error::ZeroArrowsPerLine);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_count_is_lines_times_arrows() {
        let sampler = FieldSampler::new(12, 16).unwrap();
        assert_eq!(sampler.samples().len(), 192);

        let sampler = FieldSampler::new(3, 5).unwrap();
        assert_eq!(sampler.samples().len(), 15);
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(FieldSampler::new(0, 16).unwrap_err(), Error::ZeroFieldLines);
        assert_eq!(
            FieldSampler::new(12, 0).unwrap_err(),
            Error::ZeroArrowsPerLine
        );

        let mut sampler = FieldSampler::new(12, 16).unwrap();
        assert_eq!(sampler.set_field_lines(0).unwrap_err(), Error::ZeroFieldLines);
        assert_eq!(
            sampler.set_arrows_per_line(0).unwrap_err(),
            Error::ZeroArrowsPerLine
        );
        // A failed reconfiguration leaves the sampler untouched.
        assert_eq!(sampler.samples().len(), 192);
    }

    #[test]
    fn first_sample_at_zero_phase() {
        let sampler = FieldSampler::new(12, 16).unwrap();
        let first = &sampler.samples()[0];
        assert_relative_eq!(first.position.x, ELLIPSE_A, epsilon = 1e-5);
        assert_relative_eq!(first.position.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(first.position.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(
            first.orientation.angle(),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn quarter_turn_arrow_sits_at_ellipse_top() {
        // Line 0, arrow A/4: vertical angle is pi/2, so the arrow sits at
        // the top of the ellipse, offset by the ellipse center on x.
        let sampler = FieldSampler::new(12, 16).unwrap();
        let sample = &sampler.samples()[4];
        assert_relative_eq!(sample.position.x, ELLIPSE_A, epsilon = 1e-5);
        assert_relative_eq!(sample.position.y, ELLIPSE_B, epsilon = 1e-5);
        assert_relative_eq!(sample.position.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(
            sample.orientation.angle(),
            std::f32::consts::FRAC_PI_2,
            epsilon = 1e-4
        );
    }

    #[test]
    fn regeneration_is_deterministic() {
        let mut a = FieldSampler::new(7, 9).unwrap();
        let before = a.samples().to_vec();
        a.regenerate();
        assert_eq!(a.samples(), &before[..]);

        let b = FieldSampler::new(7, 9).unwrap();
        assert_eq!(b.samples(), &before[..]);
    }

    #[test]
    fn advance_moves_phase_by_step() {
        let mut sampler = FieldSampler::new(12, 16).unwrap();
        let step = sampler.step();
        sampler.advance();
        assert_relative_eq!(sampler.phase(), step, epsilon = 1e-7);
        sampler.advance();
        assert_relative_eq!(sampler.phase(), 2.0 * step, epsilon = 1e-7);
    }

    #[test]
    fn changing_arrows_resets_phase_and_step() {
        let mut sampler = FieldSampler::new(12, 16).unwrap();
        sampler.advance();
        assert!(sampler.phase() > 0.0);

        sampler.set_arrows_per_line(8).unwrap();
        assert_eq!(sampler.phase(), 0.0);
        assert_relative_eq!(sampler.step(), TAU / 8.0 / ANIMATION_FRAMES, epsilon = 1e-7);
        assert_eq!(sampler.samples().len(), 96);
    }

    #[test]
    fn changing_lines_resets_phase_and_resizes() {
        let mut sampler = FieldSampler::new(12, 16).unwrap();
        sampler.advance();
        sampler.set_field_lines(6).unwrap();
        assert_eq!(sampler.phase(), 0.0);
        assert_eq!(sampler.samples().len(), 96);
    }

    #[test]
    fn buffer_is_reused_when_count_is_unchanged() {
        let mut sampler = FieldSampler::new(12, 16).unwrap();
        let ptr = sampler.samples().as_ptr();
        for _ in 0..10 {
            sampler.advance();
        }
        assert_eq!(sampler.samples().as_ptr(), ptr);
    }

    #[test]
    fn phase_grows_without_wrapping() {
        let mut sampler = FieldSampler::new(2, 2).unwrap();
        for _ in 0..200 {
            sampler.advance();
        }
        assert!(sampler.phase() > TAU);
    }
}
