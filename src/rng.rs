#![warn(clippy::all, clippy::pedantic)]

//! Random piece and colour selection.
//!
//! Shape and colour are two separate draws with their own generators, so a
//! test can pin one while leaving the other random.

use crate::components::{PieceColor, TetrominoType};

// Mixed into the seed so the colour stream differs from the shape stream
const COLOR_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

pub trait ShapeSource {
    fn next_shape(&mut self) -> TetrominoType;
}

pub trait ColorSource {
    fn next_color(&mut self) -> PieceColor;
}

impl ShapeSource for fastrand::Rng {
    fn next_shape(&mut self) -> TetrominoType {
        TetrominoType::ALL[self.usize(..TetrominoType::ALL.len())]
    }
}

impl ColorSource for fastrand::Rng {
    fn next_color(&mut self) -> PieceColor {
        PieceColor::ALL[self.usize(..PieceColor::ALL.len())]
    }
}

/// The pair of sources a session draws new pieces from.
pub struct Spawner {
    pub shapes: Box<dyn ShapeSource>,
    pub colors: Box<dyn ColorSource>,
}

impl Spawner {
    #[must_use]
    pub fn new(shapes: Box<dyn ShapeSource>, colors: Box<dyn ColorSource>) -> Self {
        Self { shapes, colors }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Box::new(fastrand::Rng::with_seed(seed)),
            Box::new(fastrand::Rng::with_seed(seed ^ COLOR_SEED_SALT)),
        )
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Box::new(fastrand::Rng::new()), Box::new(fastrand::Rng::new()))
    }

    pub fn draw(&mut self) -> (TetrominoType, PieceColor) {
        (self.shapes.next_shape(), self.colors.next_color())
    }
}

impl std::fmt::Debug for Spawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spawner").finish_non_exhaustive()
    }
}
