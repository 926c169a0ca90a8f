use colored::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// One of the four letters a dreidel can land on.
///
/// - `Nun`: nothing happens
/// - `Gimel`: the spinner takes the whole pot
/// - `Hey`: the spinner takes the larger half of the pot
/// - `Shin`: the spinner pays the penalty into the pot
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Face {
    Nun,
    Gimel,
    Hey,
    Shin,
}

impl Face {
    pub const fn all() -> [Self; 4] {
        [Self::Nun, Self::Gimel, Self::Hey, Self::Shin]
    }
}

/// Uniform over the four faces, reading the top two bits of a `u32`.
impl Distribution<Face> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        Face::from((rng.next_u32() >> 30) as u8)
    }
}

impl From<u8> for Face {
    fn from(n: u8) -> Self {
        match n & 0b11 {
            0 => Face::Nun,
            1 => Face::Gimel,
            2 => Face::Hey,
            3 => Face::Shin,
            _ => unreachable!(),
        }
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face as u8
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Face::Nun => write!(f, "{}", "Nun".white()),
            Face::Gimel => write!(f, "{}", "Gimel".green()),
            Face::Hey => write!(f, "{}", "Hey".yellow()),
            Face::Shin => write!(f, "{}", "Shin".red()),
        }
    }
}

/// Replays a fixed sequence of faces, one per sample.
#[cfg(test)]
pub struct Script(std::collections::VecDeque<Face>);

#[cfg(test)]
impl<const N: usize> From<[Face; N]> for Script {
    fn from(faces: [Face; N]) -> Self {
        Self(faces.into_iter().collect())
    }
}

#[cfg(test)]
impl rand::RngCore for Script {
    fn next_u32(&mut self) -> u32 {
        let face = self.0.pop_front().expect("script has faces left");
        (u8::from(face) as u32) << 30
    }
    fn next_u64(&mut self) -> u64 {
        (self.next_u32() as u64) << 32
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0)
    }
}
