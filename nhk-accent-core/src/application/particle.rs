//! Particle detection on expressions and readings
//!
//! A particle is marked with a separator: `箸-が` with reading `はし-が`. Either
//! side may omit the separator, in which case the particle is inferred from
//! the trailing characters of that side.

use crate::error::{AccentError, Result};

/// An expression and reading with any trailing particle removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticleSplit {
    pub expr: String,
    pub reading: Option<String>,
    pub particle: Option<String>,
}

impl ParticleSplit {
    fn unchanged(expr: &str, reading: Option<&str>) -> Self {
        Self {
            expr: expr.to_string(),
            reading: reading.map(str::to_string),
            particle: None,
        }
    }
}

/// Split once from the right on any separator, returning (word, particle)
fn split_particle<'a>(text: &'a str, separators: &[char]) -> Option<(&'a str, &'a str)> {
    let (word, particle) = text.rsplit_once(|c: char| separators.contains(&c))?;
    Some((word.trim(), particle.trim()))
}

/// Split `text` into its head and a tail of `tail_len` characters
fn split_tail(text: &str, tail_len: usize) -> Option<(&str, &str)> {
    let count = text.chars().count();
    if tail_len > count {
        return None;
    }
    let at = text
        .char_indices()
        .nth(count - tail_len)
        .map_or(text.len(), |(i, _)| i);
    Some(text.split_at(at))
}

fn mismatch(expression: &str, reading: &str) -> AccentError {
    AccentError::AmbiguousParticle {
        expression: expression.to_string(),
        reading: reading.to_string(),
    }
}

/// Reconcile the particles found on the expression and reading sides.
///
/// Fails with [`AccentError::AmbiguousParticle`] when the two sides disagree.
pub fn reconcile(expr: &str, reading: Option<&str>, separators: &[char]) -> Result<ParticleSplit> {
    let expr_split = split_particle(expr, separators);
    let reading_split = reading.and_then(|r| split_particle(r, separators));

    match (expr_split, reading, reading_split) {
        (None, _, None) => Ok(ParticleSplit::unchanged(expr, reading)),

        (Some((word, particle)), _, Some((reading_word, reading_particle))) => {
            if particle != reading_particle {
                return Err(mismatch(particle, reading_particle));
            }
            Ok(ParticleSplit {
                expr: word.to_string(),
                reading: Some(reading_word.to_string()),
                particle: Some(particle.to_string()),
            })
        }

        (Some((word, particle)), None, None) => Ok(ParticleSplit {
            expr: word.to_string(),
            reading: None,
            particle: Some(particle.to_string()),
        }),

        (Some((word, particle)), Some(reading), None) => {
            let (reading_word, tail) = split_tail(reading, particle.chars().count())
                .ok_or_else(|| mismatch(particle, reading))?;
            if tail != particle {
                return Err(mismatch(particle, tail));
            }
            Ok(ParticleSplit {
                expr: word.to_string(),
                reading: Some(reading_word.to_string()),
                particle: Some(particle.to_string()),
            })
        }

        (None, _, Some((reading_word, reading_particle))) => {
            let (word, tail) = split_tail(expr, reading_particle.chars().count())
                .ok_or_else(|| mismatch(expr, reading_particle))?;
            if tail != reading_particle {
                return Err(mismatch(tail, reading_particle));
            }
            Ok(ParticleSplit {
                expr: word.to_string(),
                reading: Some(reading_word.to_string()),
                particle: Some(reading_particle.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEPARATORS: &[char] = &['-'];

    #[test]
    fn test_no_particle() {
        let split = reconcile("箸", Some("はし"), SEPARATORS).unwrap();
        assert_eq!(split, ParticleSplit::unchanged("箸", Some("はし")));
    }

    #[test]
    fn test_both_sides_agree() {
        let split = reconcile("箸-が", Some("はし-が"), SEPARATORS).unwrap();
        assert_eq!(split.expr, "箸");
        assert_eq!(split.reading.as_deref(), Some("はし"));
        assert_eq!(split.particle.as_deref(), Some("が"));
    }

    #[test]
    fn test_both_sides_disagree() {
        let err = reconcile("箸-が", Some("はし-を"), SEPARATORS).unwrap_err();
        assert!(matches!(err, AccentError::AmbiguousParticle { .. }));
    }

    #[test]
    fn test_expression_only() {
        let split = reconcile("箸-が", None, SEPARATORS).unwrap();
        assert_eq!(split.expr, "箸");
        assert_eq!(split.reading, None);
        assert_eq!(split.particle.as_deref(), Some("が"));
    }

    #[test]
    fn test_particle_inferred_from_reading_tail() {
        let split = reconcile("箸-が", Some("はしが"), SEPARATORS).unwrap();
        assert_eq!(split.reading.as_deref(), Some("はし"));

        let err = reconcile("箸-が", Some("はしを"), SEPARATORS).unwrap_err();
        assert!(matches!(err, AccentError::AmbiguousParticle { .. }));
    }

    #[test]
    fn test_particle_inferred_from_expression_tail() {
        let split = reconcile("箸から", Some("はし-から"), SEPARATORS).unwrap();
        assert_eq!(split.expr, "箸");
        assert_eq!(split.particle.as_deref(), Some("から"));

        assert!(reconcile("箸へ", Some("はし-から"), SEPARATORS).is_err());
    }

    #[test]
    fn test_split_happens_once_from_the_right() {
        let split = reconcile("行っ-て-は", None, SEPARATORS).unwrap();
        assert_eq!(split.expr, "行っ-て");
        assert_eq!(split.particle.as_deref(), Some("は"));
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(split_tail("はしが", 1), Some(("はし", "が")));
        assert_eq!(split_tail("が", 1), Some(("", "が")));
        assert_eq!(split_tail("が", 2), None);
        assert_eq!(split_tail("はし", 0), Some(("はし", "")));
    }
}
