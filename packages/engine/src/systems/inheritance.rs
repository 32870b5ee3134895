//! Color inheritance at birth
//!
//! Parents' channels are averaged, then ranked: the weakest channel recedes,
//! the strongest dominates and the middle one mutates by a random amount.

use crate::core::EngineError;
use crate::domain::color::{Channel, Rgb};
use crate::domain::config::Intensities;
use crate::systems::rng::RandomSource;

/// Cap on mid-channel re-draws before clamping.
pub const MID_RETRY_LIMIT: u32 = 64;

const CHANNEL_MAX: f64 = 255.0;

/// A channel average tagged with the channel it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ranked {
    channel: Channel,
    value: f64,
}

pub struct ColorInheritance {
    intensities: Intensities,
}

impl ColorInheritance {
    pub fn new(intensities: Intensities) -> Self {
        Self { intensities }
    }

    /// Offspring color for a non-empty set of parents.
    pub fn inherit(&self, parents: &[Rgb], rng: &mut RandomSource) -> Result<Rgb, EngineError> {
        if parents.is_empty() {
            return Err(EngineError::NoParents);
        }
        Ok(self.blend(parents, rng))
    }

    /// Same as `inherit` for callers that already hold parents.
    pub(crate) fn inherit_trio(&self, parents: &[Rgb; 3], rng: &mut RandomSource) -> Rgb {
        self.blend(parents, rng)
    }

    fn blend(&self, parents: &[Rgb], rng: &mut RandomSource) -> Rgb {
        let [recessive, mid, dominant] = rank(parents);

        let mut child = Rgb::default();
        child.set_channel(recessive.channel, to_channel(self.recede(recessive.value)));
        child.set_channel(mid.channel, to_channel(self.mutate(mid.value, rng)));
        child.set_channel(dominant.channel, to_channel(self.dominate(dominant.value)));
        child
    }

    fn recede(&self, value: f64) -> f64 {
        let intensity = self.intensities.recessive as f64;
        if value > intensity {
            value - intensity
        } else {
            0.0
        }
    }

    fn dominate(&self, value: f64) -> f64 {
        let intensity = self.intensities.dominant as f64;
        if value < CHANNEL_MAX - intensity {
            value + intensity
        } else {
            CHANNEL_MAX
        }
    }

    fn mutate(&self, value: f64, rng: &mut RandomSource) -> f64 {
        let mut shifted = value;
        for _ in 0..MID_RETRY_LIMIT {
            let change = rng.below(self.intensities.mid) as f64;
            shifted = if rng.coin() { value + change } else { value - change };
            if (0.0..=CHANNEL_MAX).contains(&shifted) {
                return shifted;
            }
        }
        tracing::warn!(value, mid = self.intensities.mid, "mid channel retry cap reached, clamping");
        shifted.clamp(0.0, CHANNEL_MAX)
    }
}

/// Channel averages, ascending; equal averages keep red < green < blue.
fn rank(parents: &[Rgb]) -> [Ranked; 3] {
    let n = parents.len() as f64;
    let mut ranked = Channel::ALL.map(|channel| {
        let sum: u32 = parents.iter().map(|p| p.channel(channel) as u32).sum();
        Ranked { channel, value: sum as f64 / n }
    });
    // stable sort keeps declaration order on ties
    ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
    ranked
}

#[inline]
fn to_channel(value: f64) -> u8 {
    value.floor().clamp(0.0, CHANNEL_MAX) as u8
}
