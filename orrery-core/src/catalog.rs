//! Body catalogs: declarative specs, validation, and the builtin solar
//! system.

use crate::body::Body;
use crate::forces::G;
use glam::DVec2;
use std::collections::HashSet;
use thiserror::Error;

/// One astronomical unit in metres.
pub const AU: f64 = 1.496e11;

/// How a catalog entry's starting velocity is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Velocity {
    /// Explicit velocity in m/s.
    Fixed(DVec2),
    /// Circular-orbit velocity about the catalog's dominant mass, assumed
    /// to sit at the origin.
    Circular,
}

/// A declarative body entry: what scenario files parse into and what a
/// reset rebuilds from.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    /// kg
    pub mass: f64,
    /// metres
    pub position: DVec2,
    pub velocity: Velocity,
    /// Display diameter in metres.
    pub size: f64,
    pub color: [u8; 3],
    pub show_trace: bool,
}

/// Presentation decoration for one body, kept apart from the physics
/// record and joined by shared ordering at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub name: String,
    pub color: [u8; 3],
    /// Display diameter in metres.
    pub size: f64,
    pub show_trace: bool,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog contains no bodies")]
    Empty,
    #[error("duplicate body name '{0}'")]
    DuplicateName(String),
    #[error("mass of body '{name}' must be positive and finite, got {mass}")]
    InvalidMass { name: String, mass: f64 },
    #[error("size of body '{name}' must be positive and finite, got {size}")]
    InvalidSize { name: String, size: f64 },
    #[error("body '{0}' requests a circular orbit at the origin")]
    CircularAtOrigin(String),
}

/// Velocity for a circular orbit about `central_mass` at the origin:
/// speed sqrt(G * M / r), direction the counter-clockwise tangent.
///
/// Callers guarantee `position` is not the origin; `build` validates this
/// for catalog entries.
pub fn circular_velocity(position: DVec2, central_mass: f64) -> DVec2 {
    let r = position.length();
    let speed = (G * central_mass / r).sqrt();
    position.perp() / r * speed
}

/// Instantiate a validated catalog: physics bodies plus their parallel
/// appearance records, traces seeded with the starting positions.
pub fn build(specs: &[BodySpec]) -> Result<(Vec<Body>, Vec<Appearance>), CatalogError> {
    if specs.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for spec in specs {
        if !seen.insert(spec.name.as_str()) {
            return Err(CatalogError::DuplicateName(spec.name.clone()));
        }
        // NaN compares false against zero, so test finiteness explicitly.
        if !spec.mass.is_finite() || spec.mass <= 0.0 {
            return Err(CatalogError::InvalidMass {
                name: spec.name.clone(),
                mass: spec.mass,
            });
        }
        if !spec.size.is_finite() || spec.size <= 0.0 {
            return Err(CatalogError::InvalidSize {
                name: spec.name.clone(),
                size: spec.size,
            });
        }
    }

    // The heaviest body anchors every circular-orbit derivation.
    let central_mass = specs.iter().map(|s| s.mass).fold(0.0, f64::max);

    let mut bodies = Vec::with_capacity(specs.len());
    let mut appearances = Vec::with_capacity(specs.len());
    for spec in specs {
        let velocity = match spec.velocity {
            Velocity::Fixed(v) => v,
            Velocity::Circular => {
                if spec.position == DVec2::ZERO {
                    return Err(CatalogError::CircularAtOrigin(spec.name.clone()));
                }
                circular_velocity(spec.position, central_mass)
            }
        };
        bodies.push(Body::new(
            spec.name.clone(),
            spec.mass,
            spec.position,
            velocity,
        ));
        appearances.push(Appearance {
            name: spec.name.clone(),
            color: spec.color,
            size: spec.size,
            show_trace: spec.show_trace,
        });
    }

    Ok((bodies, appearances))
}

/// The builtin nine-body catalog: the Sun at rest at the origin and the
/// eight planets at scattered positions on circular orbits.
pub fn solar_system() -> Vec<BodySpec> {
    fn planet(name: &str, mass: f64, x_au: f64, y_au: f64, size: f64, color: [u8; 3]) -> BodySpec {
        BodySpec {
            name: name.to_string(),
            mass,
            position: DVec2::new(x_au * AU, y_au * AU),
            velocity: Velocity::Circular,
            size,
            color,
            show_trace: true,
        }
    }

    vec![
        BodySpec {
            name: "Sun".to_string(),
            mass: 1.989e30,
            position: DVec2::ZERO,
            velocity: Velocity::Fixed(DVec2::ZERO),
            size: 1_391_000_000.0,
            color: [255, 255, 0],
            show_trace: true,
        },
        planet("Mercury", 3.285e23, -0.388481, -0.157692, 4_880_000.0, [128, 128, 128]),
        planet("Venus", 4.867e24, 0.453472, 0.523121, 12_104_000.0, [255, 165, 0]),
        planet("Earth", 5.972e24, -0.178600, 0.887224, 12_742_000.0, [0, 0, 255]),
        planet("Mars", 6.39e23, -0.521577, 1.381600, 6_779_000.0, [255, 0, 0]),
        planet("Jupiter", 1.898e27, 1.056247, 4.578783, 139_820_000.0, [165, 42, 42]),
        planet("Saturn", 5.683e26, 9.463669, -1.482112, 116_460_000.0, [218, 165, 32]),
        planet("Uranus", 8.681e25, 11.103997, 14.799690, 50_724_000.0, [0, 255, 255]),
        planet("Neptune", 1.024e26, 29.892156, -0.313781, 49_244_000.0, [138, 43, 226]),
    ]
}
