//! Energy-momentum four-vectors under the (+,-,-,-) metric.

use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

/// Four-momentum `(E, px, py, pz)`.
///
/// Units are whatever the caller uses consistently (MeV throughout the
/// toolkit). No physical constraint is enforced here; use
/// [`FourMomentum::is_physical`] when `E² ≥ |p|²` matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FourMomentum {
    energy: f64,
    px: f64,
    py: f64,
    pz: f64,
}

impl FourMomentum {
    /// The zero vector.
    pub const ZERO: FourMomentum = FourMomentum::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a four-momentum from its components.
    pub const fn new(energy: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { energy, px, py, pz }
    }

    /// Four-momentum of a body of the given mass at rest.
    pub const fn at_rest(mass: f64) -> Self {
        Self::new(mass, 0.0, 0.0, 0.0)
    }

    /// Energy component.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// x component of the three-momentum.
    pub fn px(&self) -> f64 {
        self.px
    }

    /// y component of the three-momentum.
    pub fn py(&self) -> f64 {
        self.py
    }

    /// z component of the three-momentum.
    pub fn pz(&self) -> f64 {
        self.pz
    }

    /// Returns a copy with the energy replaced.
    pub fn with_energy(self, energy: f64) -> Self {
        Self { energy, ..self }
    }

    /// Returns a copy with the three-momentum replaced.
    pub fn with_momentum(self, px: f64, py: f64, pz: f64) -> Self {
        Self { px, py, pz, ..self }
    }

    /// Componentwise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &FourMomentum) -> FourMomentum {
        *self + *other
    }

    /// Componentwise difference.
    pub fn subtract(&self, other: &FourMomentum) -> FourMomentum {
        *self - *other
    }

    /// Minkowski inner product `E·E' − p·p'`.
    pub fn dot(&self, other: &FourMomentum) -> f64 {
        self.energy * other.energy - (self.px * other.px + self.py * other.py + self.pz * other.pz)
    }

    /// Squared three-momentum `|p|²`.
    pub fn momentum_squared(&self) -> f64 {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Invariant mass squared, `E² − |p|²`. Negative for spacelike vectors.
    pub fn mass_squared(&self) -> f64 {
        self.energy * self.energy - self.momentum_squared()
    }

    /// Invariant mass `sqrt(E² − |p|²)`.
    ///
    /// A spacelike vector has no real invariant mass and yields `NaN`; callers
    /// must check for it rather than clamp.
    pub fn invariant_mass(&self) -> f64 {
        self.mass_squared().sqrt()
    }

    /// True when `E² ≥ |p|²`, i.e. the invariant mass is real.
    pub fn is_physical(&self) -> bool {
        self.mass_squared() >= 0.0
    }

    /// Component array `[E, px, py, pz]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.energy, self.px, self.py, self.pz]
    }
}

impl From<[f64; 4]> for FourMomentum {
    fn from(components: [f64; 4]) -> Self {
        let [energy, px, py, pz] = components;
        Self::new(energy, px, py, pz)
    }
}

impl ops::Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.energy + rhs.energy,
            self.px + rhs.px,
            self.py + rhs.py,
            self.pz + rhs.pz,
        )
    }
}

impl ops::Sub for FourMomentum {
    type Output = FourMomentum;

    fn sub(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.energy - rhs.energy,
            self.px - rhs.px,
            self.py - rhs.py,
            self.pz - rhs.pz,
        )
    }
}

impl ops::Neg for FourMomentum {
    type Output = FourMomentum;

    fn neg(self) -> FourMomentum {
        FourMomentum::new(-self.energy, -self.px, -self.py, -self.pz)
    }
}

impl std::iter::Sum for FourMomentum {
    fn sum<I: Iterator<Item = FourMomentum>>(iter: I) -> Self {
        iter.fold(FourMomentum::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for FourMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E: {}, px: {}, py: {}, pz: {}",
            self.energy, self.px, self.py, self.pz
        )
    }
}
