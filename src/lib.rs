//! Data generation for a rotating molecule / magnetic-field 3D scatter
//! visualization.
//!
//! The crate supplies the two data-producing subsystems of the
//! visualization; rendering, camera work, and the timer loop belong to the
//! host toolkit.
//!
//! # Features
//!
//! - **Molecule loading** — Parse XYZ coordinate files into per-element
//!   atom lists (carbon and hydrogen)
//! - **Field sampling** — Regenerate a full set of arrow position/rotation
//!   samples along tilted ellipses on every animation tick
//! - **Scene facade** — Markers, rotation toggling, and radius-shell
//!   visibility behind the configuration surface the host UI calls
//!
//! # Quick Start
//!
//! ```
//! use fieldline::{FieldSampler, field::ELLIPSE_A};
//!
//! let mut sampler = FieldSampler::new(12, 16)?;
//! assert_eq!(sampler.samples().len(), 192);
//!
//! // At phase zero the first arrow sits on the x axis.
//! let first = sampler.samples()[0];
//! assert!((first.position.x - ELLIPSE_A).abs() < 1e-5);
//!
//! // One tick later every sample has moved along its field line.
//! sampler.advance();
//! assert_ne!(sampler.samples()[0], first);
//! # Ok::<(), fieldline::field::Error>(())
//! ```

pub mod field;
pub mod io;
pub mod model;
pub mod scene;

pub use field::FieldSampler;
pub use model::atom::{AtomCoordinate, Element, Molecule, ParseElementError};
pub use model::sample::FieldSample;
pub use scene::{Marker, MarkerKind, RotationState, Scene, TICK_INTERVAL};

pub use field::Error as FieldError;
pub use io::Error as IoError;
