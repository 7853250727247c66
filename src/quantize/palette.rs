use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixelatorError, PixelatorResult};

/// Smallest supported per-channel level count.
pub const MIN_LEVELS: u32 = 2;
/// Largest supported per-channel level count (one level per byte value).
pub const MAX_LEVELS: u32 = 256;

/// Per-channel bucket indices of a quantized color, each in `[0, levels)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantKey {
    /// Red bucket.
    pub r: u8,
    /// Green bucket.
    pub g: u8,
    /// Blue bucket.
    pub b: u8,
}

impl QuantKey {
    /// The all-zero key. Cells that quantize to it are never drawn.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a key from its bucket indices.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `true` for [`QuantKey::BLACK`].
    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }
}

/// Lookup table from every [`QuantKey`] to its representative color.
///
/// Stored flat, indexed by `(r * L + g) * L + b`. Read-only once built.
#[derive(Clone, Debug)]
pub struct Palette {
    levels: u32,
    step: u32,
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Number of levels per channel (`L`).
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Quantization step (`S = 256 / L`).
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Number of entries, always `L^3`.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a palette holds at least `2^3` entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Representative color of `key`, or `None` if any channel is `>= L`.
    pub fn get(&self, key: QuantKey) -> Option<Rgb8> {
        self.index_of(key).map(|i| self.colors[i])
    }

    /// `true` when `key` has an entry.
    pub fn contains(&self, key: QuantKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Iterate `(key, color)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (QuantKey, Rgb8)> + '_ {
        let l = self.levels as usize;
        self.colors.iter().enumerate().map(move |(i, c)| {
            let key = QuantKey::new((i / (l * l)) as u8, ((i / l) % l) as u8, (i % l) as u8);
            (key, *c)
        })
    }

    fn index_of(&self, key: QuantKey) -> Option<usize> {
        let l = self.levels as usize;
        let (r, g, b) = (key.r as usize, key.g as usize, key.b as usize);
        if r >= l || g >= l || b >= l {
            return None;
        }
        Some((r * l + g) * l + b)
    }
}

/// Validate a per-channel level count.
pub fn validate_levels(levels: u32) -> PixelatorResult<()> {
    if !(MIN_LEVELS..=MAX_LEVELS).contains(&levels) {
        return Err(PixelatorError::config(format!(
            "levels must be in [{MIN_LEVELS}, {MAX_LEVELS}], got {levels}"
        )));
    }
    Ok(())
}

/// Quantization step for `levels`: `256 / levels`, rounded down.
pub fn quant_step(levels: u32) -> PixelatorResult<u32> {
    validate_levels(levels)?;
    Ok(256 / levels)
}

/// Build the full palette for `levels` per channel and return it with the quantization step.
///
/// Entry `(i, j, k)` maps to `(i*S, j*S, k*S)`. Since `(L-1)*S <= 256 - S`, every channel fits
/// in a byte.
pub fn build_palette(levels: u32) -> PixelatorResult<(Palette, u32)> {
    let step = quant_step(levels)?;
    let l = levels as usize;

    let mut colors = Vec::with_capacity(l * l * l);
    for i in 0..levels {
        for j in 0..levels {
            for k in 0..levels {
                colors.push(Rgb8::new(
                    (i * step) as u8,
                    (j * step) as u8,
                    (k * step) as u8,
                ));
            }
        }
    }

    Ok((
        Palette {
            levels,
            step,
            colors,
        },
        step,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/palette.rs"]
mod tests;
