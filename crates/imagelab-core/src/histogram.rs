//! Single-channel histograms and histogram equalization.
//!
//! Equalization maps the first occupied level to 0 and spreads the rest of
//! the cumulative distribution across 0-255.

/// 256-bin histogram of an 8-bit channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    pub bins: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; 256] }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the values of a single-channel buffer.
    pub fn from_channel(values: &[u8]) -> Self {
        let mut hist = Self::new();
        for &v in values {
            hist.bins[v as usize] += 1;
        }
        hist
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Lowest level with a non-zero count.
    pub fn first_occupied(&self) -> Option<usize> {
        self.bins.iter().position(|&c| c > 0)
    }
}

/// Build the equalization lookup table for a histogram.
///
/// An empty histogram, or one where every sample sits in a single level,
/// yields a LUT that leaves the occupied level unchanged.
pub fn equalization_lut(hist: &Histogram) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = i as u8;
    }

    let first = match hist.first_occupied() {
        Some(i) => i,
        None => return lut,
    };
    let total = hist.total();
    let first_count = hist.bins[first] as u64;
    if first_count == total {
        return lut;
    }

    let scale = 255.0 / (total - first_count) as f64;
    let mut sum = 0u64;
    lut[first] = 0;
    for i in first + 1..256 {
        sum += hist.bins[i] as u64;
        lut[i] = (sum as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Equalize a single-channel buffer, returning the remapped values.
pub fn equalize_channel(values: &[u8]) -> Vec<u8> {
    let lut = equalization_lut(&Histogram::from_channel(values));
    values.iter().map(|&v| lut[v as usize]).collect()
}
