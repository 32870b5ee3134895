//! Cell colors
//!
//! Channels are whole numbers in [0,255]. Packed form is ABGR little-endian
//! (0xAABBGGRR -> bytes [RR,GG,BB,AA]) so a canvas `ImageData` can copy the
//! render buffer directly.

use serde::{Deserialize, Serialize};

use crate::systems::rng::RandomSource;

/// Background for dead cells in ABGR: RGB(10,10,10), alpha 255.
pub const DEAD_COLOR: u32 = 0xFF0A0A0A;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    #[inline]
    pub fn to_abgr(&self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// Random seeding color, each channel in [1,255].
    pub fn random(rng: &mut RandomSource) -> Self {
        let r = rng.below(255) as u8 + 1;
        let g = rng.below(255) as u8 + 1;
        let b = rng.below(255) as u8 + 1;
        Self { r, g, b }
    }
}

/// Channel identity. Declaration order is the tie-break order when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}
