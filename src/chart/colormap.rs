//! Named color maps and the providers that pick one per chart.
//!
//! Bar segment colors are fixed per column; the picked map tints the
//! alternating row bands behind the bars.

use crate::utils::error::ChartError;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GRAY: Rgb = Rgb(128, 128, 128);

    /// Linear blend, `t = 0` is `self` and `t = 1` is `other`
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(lerp(self.0, other.0), lerp(self.1, other.1), lerp(self.2, other.2))
    }
}

/// A named gradient sampled on `[0, 1]`
#[derive(Debug, PartialEq, Eq)]
pub struct ColorMap {
    pub name: &'static str,
    stops: &'static [Rgb],
}

impl ColorMap {
    /// Color at position `t`, clamped to `[0, 1]`
    pub fn sample(&self, t: f64) -> Rgb {
        match self.stops {
            [] => Rgb::WHITE,
            [only] => *only,
            stops => {
                let pos = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
                let lower = (pos.floor() as usize).min(stops.len() - 2);
                stops[lower].mix(stops[lower + 1], pos - lower as f64)
            }
        }
    }
}

/// Every color map a chart can be drawn with
pub static COLOR_MAPS: &[ColorMap] = &[
    ColorMap {
        name: "viridis",
        stops: &[
            Rgb(0x44, 0x01, 0x54),
            Rgb(0x3b, 0x52, 0x8b),
            Rgb(0x21, 0x91, 0x8c),
            Rgb(0x5e, 0xc9, 0x62),
            Rgb(0xfd, 0xe7, 0x25),
        ],
    },
    ColorMap {
        name: "plasma",
        stops: &[
            Rgb(0x0d, 0x08, 0x87),
            Rgb(0x7e, 0x03, 0xa8),
            Rgb(0xcc, 0x47, 0x78),
            Rgb(0xf8, 0x95, 0x40),
            Rgb(0xf0, 0xf9, 0x21),
        ],
    },
    ColorMap {
        name: "inferno",
        stops: &[
            Rgb(0x00, 0x00, 0x04),
            Rgb(0x57, 0x10, 0x6e),
            Rgb(0xbc, 0x37, 0x54),
            Rgb(0xf9, 0x8e, 0x09),
            Rgb(0xfc, 0xff, 0xa4),
        ],
    },
    ColorMap {
        name: "magma",
        stops: &[
            Rgb(0x00, 0x00, 0x04),
            Rgb(0x51, 0x12, 0x7c),
            Rgb(0xb7, 0x37, 0x79),
            Rgb(0xfc, 0x89, 0x61),
            Rgb(0xfc, 0xfd, 0xbf),
        ],
    },
    ColorMap {
        name: "cividis",
        stops: &[
            Rgb(0x00, 0x22, 0x4e),
            Rgb(0x57, 0x5d, 0x6d),
            Rgb(0xa5, 0x9c, 0x74),
            Rgb(0xfe, 0xe8, 0x38),
        ],
    },
    ColorMap {
        name: "Greys",
        stops: &[Rgb(0xff, 0xff, 0xff), Rgb(0x00, 0x00, 0x00)],
    },
    ColorMap {
        name: "Blues",
        stops: &[Rgb(0xf7, 0xfb, 0xff), Rgb(0x6b, 0xae, 0xd6), Rgb(0x08, 0x30, 0x6b)],
    },
    ColorMap {
        name: "Greens",
        stops: &[Rgb(0xf7, 0xfc, 0xf5), Rgb(0x74, 0xc4, 0x76), Rgb(0x00, 0x44, 0x1b)],
    },
    ColorMap {
        name: "Oranges",
        stops: &[Rgb(0xff, 0xf5, 0xeb), Rgb(0xfd, 0x8d, 0x3c), Rgb(0x7f, 0x27, 0x04)],
    },
    ColorMap {
        name: "Reds",
        stops: &[Rgb(0xff, 0xf5, 0xf0), Rgb(0xfb, 0x6a, 0x4a), Rgb(0x67, 0x00, 0x0d)],
    },
    ColorMap {
        name: "Purples",
        stops: &[Rgb(0xfc, 0xfb, 0xfd), Rgb(0x9e, 0x9a, 0xc8), Rgb(0x3f, 0x00, 0x7d)],
    },
    ColorMap {
        name: "YlGnBu",
        stops: &[Rgb(0xff, 0xff, 0xd9), Rgb(0x41, 0xb6, 0xc4), Rgb(0x08, 0x1d, 0x58)],
    },
    ColorMap {
        name: "Spectral",
        stops: &[
            Rgb(0x9e, 0x01, 0x42),
            Rgb(0xf4, 0x6d, 0x43),
            Rgb(0xff, 0xff, 0xbf),
            Rgb(0x66, 0xc2, 0xa5),
            Rgb(0x5e, 0x4f, 0xa2),
        ],
    },
    ColorMap {
        name: "coolwarm",
        stops: &[Rgb(0x3b, 0x4c, 0xc0), Rgb(0xdd, 0xdd, 0xdd), Rgb(0xb4, 0x04, 0x26)],
    },
    ColorMap {
        name: "twilight",
        stops: &[
            Rgb(0xe2, 0xd9, 0xe2),
            Rgb(0x5e, 0x43, 0xa5),
            Rgb(0x2f, 0x14, 0x36),
            Rgb(0xb2, 0x50, 0x4d),
            Rgb(0xe2, 0xd9, 0xe2),
        ],
    },
    ColorMap {
        name: "cool",
        stops: &[Rgb(0x00, 0xff, 0xff), Rgb(0xff, 0x00, 0xff)],
    },
    ColorMap {
        name: "hot",
        stops: &[
            Rgb(0x0b, 0x00, 0x00),
            Rgb(0xff, 0x00, 0x00),
            Rgb(0xff, 0xff, 0x00),
            Rgb(0xff, 0xff, 0xff),
        ],
    },
];

/// Look up a color map by name (case-sensitive, as listed in `COLOR_MAPS`)
pub fn find_color_map(name: &str) -> Result<&'static ColorMap, ChartError> {
    COLOR_MAPS
        .iter()
        .find(|map| map.name == name)
        .ok_or_else(|| ChartError::UnknownColorMap(name.to_string()))
}

/// Source of the color map used for one chart
pub trait ColorMapProvider {
    fn color_map(&mut self) -> &'static ColorMap;
}

/// Picks uniformly at random from `COLOR_MAPS`
#[derive(Debug, Clone)]
pub struct RandomColorMap {
    rng: ChaCha20Rng,
}

impl RandomColorMap {
    /// Seeded for reproducible picks, otherwise from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            ChaCha20Rng::seed_from_u64(seed)
        } else {
            ChaCha20Rng::from_entropy()
        };

        Self { rng }
    }
}

impl ColorMapProvider for RandomColorMap {
    fn color_map(&mut self) -> &'static ColorMap {
        let map = &COLOR_MAPS[self.rng.gen_range(0..COLOR_MAPS.len())];
        debug!("Picked color map: {}", map.name);
        map
    }
}

/// Always returns the same map
#[derive(Debug, Clone, Copy)]
pub struct FixedColorMap {
    map: &'static ColorMap,
}

impl FixedColorMap {
    pub fn new(map: &'static ColorMap) -> Self {
        Self { map }
    }

    pub fn named(name: &str) -> Result<Self, ChartError> {
        find_color_map(name).map(Self::new)
    }
}

impl ColorMapProvider for FixedColorMap {
    fn color_map(&mut self) -> &'static ColorMap {
        self.map
    }
}
