//! Password strength score shown next to a generated password.
//!
//! This is a display hint, not an entropy estimate: it only looks at
//! which classes are enabled and how long the password is.

use std::fmt;

use super::charset::CharClasses;

/// Points each enabled class contributes at the reference length.
const CLASS_WEIGHT: u32 = 25;

/// Length at which the class weights apply unscaled.
const REFERENCE_LENGTH: u32 = 12;

const MAX_SCORE: u32 = 100;

/// Score a class set and length on a 0..=100 scale.
///
/// Each enabled class adds 25, the sum is scaled by `length / 12`, and the
/// result is capped at 100 and rounded down.
pub fn strength(classes: CharClasses, length: usize) -> u8 {
    let weight = CLASS_WEIGHT * classes.len() as u32;
    let length = u32::try_from(length).unwrap_or(u32::MAX);
    let scaled = u64::from(weight) * u64::from(length) / u64::from(REFERENCE_LENGTH);
    // Capped at MAX_SCORE, which fits in a u8.
    scaled.min(u64::from(MAX_SCORE)) as u8
}

/// Coarse label for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Rating::Weak,
            40..=69 => Rating::Fair,
            70..=99 => Rating::Good,
            _ => Rating::Strong,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Weak => "weak",
            Rating::Fair => "fair",
            Rating::Good => "good",
            Rating::Strong => "strong",
        };
        f.write_str(label)
    }
}
