//! Transform selection and parameter schema.
//!
//! A [`Transform`] is a tagged union keyed by [`Mode`]; each variant carries
//! only the parameters that mode understands. Every parameter has a bounded
//! range, and values outside it are clamped rather than rejected.
//!
//! Requests serialize as `{"mode": "<key>", ...fields}`. Missing fields take
//! their defaults, so `{"mode": "gaussian_blur"}` is a valid request.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THRESHOLD_MIN: u8 = 0;
pub const THRESHOLD_MAX: u8 = 255;

pub const GAMMA_MIN: f64 = 0.1;
pub const GAMMA_MAX: f64 = 5.0;
pub const GAMMA_DEFAULT: f64 = 1.0;
pub const GAMMA_STEP: f64 = 0.01;

pub const KERNEL_SIZE_MIN: u32 = 1;
pub const KERNEL_SIZE_MAX: u32 = 15;
pub const KERNEL_SIZE_DEFAULT: u32 = 3;

pub const NOISE_AMOUNT_MIN: f64 = 0.0;
pub const NOISE_AMOUNT_MAX: f64 = 0.1;
pub const NOISE_AMOUNT_DEFAULT: f64 = 0.02;
pub const NOISE_AMOUNT_STEP: f64 = 0.01;

pub const JPEG_QUALITY_MIN: u8 = 0;
pub const JPEG_QUALITY_MAX: u8 = 100;
pub const JPEG_QUALITY_DEFAULT: u8 = 10;

/// Hysteresis thresholds used by the edge detector. Not user-tunable.
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

/// The eight available transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Threshold,
    PowerLaw,
    HistogramEqualization,
    GaussianBlur,
    Canny,
    SaltAndPepper,
    Complement,
    Jpeg,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Mode; 8] = [
        Mode::Threshold,
        Mode::PowerLaw,
        Mode::HistogramEqualization,
        Mode::GaussianBlur,
        Mode::Canny,
        Mode::SaltAndPepper,
        Mode::Complement,
        Mode::Jpeg,
    ];

    /// Stable identifier used in serialized requests.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Threshold => "threshold",
            Mode::PowerLaw => "power_law",
            Mode::HistogramEqualization => "histogram_equalization",
            Mode::GaussianBlur => "gaussian_blur",
            Mode::Canny => "canny",
            Mode::SaltAndPepper => "salt_and_pepper",
            Mode::Complement => "complement",
            Mode::Jpeg => "jpeg",
        }
    }

    /// Menu text shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Threshold => "Thresholding",
            Mode::PowerLaw => "Brightness using Power Law Transformation",
            Mode::HistogramEqualization => "Contrast Enhancement (Histogram Equalization)",
            Mode::GaussianBlur => "Gaussian Blur",
            Mode::Canny => "Edge Detection (Canny)",
            Mode::SaltAndPepper => "Salt & Pepper Noise + Median Denoise",
            Mode::Complement => "Complement Image",
            Mode::Jpeg => "JPEG Compression",
        }
    }

    /// The request for this mode with every parameter at its default.
    pub fn default_transform(self) -> Transform {
        match self {
            Mode::Threshold => Transform::Threshold(ThresholdParams::default()),
            Mode::PowerLaw => Transform::PowerLaw(PowerLawParams::default()),
            Mode::HistogramEqualization => Transform::HistogramEqualization,
            Mode::GaussianBlur => Transform::GaussianBlur(GaussianBlurParams::default()),
            Mode::Canny => Transform::Canny,
            Mode::SaltAndPepper => Transform::SaltAndPepper(SaltAndPepperParams::default()),
            Mode::Complement => Transform::Complement,
            Mode::Jpeg => Transform::Jpeg(JpegParams::default()),
        }
    }

    /// Parameter schema for building the mode's controls.
    pub fn param_specs(self) -> Vec<ParamSpec> {
        match self {
            Mode::Threshold => vec![
                ParamSpec::int(
                    "low",
                    THRESHOLD_MIN as f64,
                    THRESHOLD_MAX as f64,
                    THRESHOLD_MIN as f64,
                    1.0,
                ),
                ParamSpec::int(
                    "high",
                    THRESHOLD_MIN as f64,
                    THRESHOLD_MAX as f64,
                    THRESHOLD_MAX as f64,
                    1.0,
                ),
            ],
            Mode::PowerLaw => vec![ParamSpec::float(
                "gamma",
                GAMMA_MIN,
                GAMMA_MAX,
                GAMMA_DEFAULT,
                GAMMA_STEP,
            )],
            Mode::GaussianBlur => vec![ParamSpec::int(
                "kernel_size",
                KERNEL_SIZE_MIN as f64,
                KERNEL_SIZE_MAX as f64,
                KERNEL_SIZE_DEFAULT as f64,
                2.0,
            )],
            Mode::SaltAndPepper => vec![
                ParamSpec::float(
                    "amount",
                    NOISE_AMOUNT_MIN,
                    NOISE_AMOUNT_MAX,
                    NOISE_AMOUNT_DEFAULT,
                    NOISE_AMOUNT_STEP,
                ),
                ParamSpec::boolean("apply_median", false),
            ],
            Mode::Jpeg => vec![ParamSpec::int(
                "quality",
                JPEG_QUALITY_MIN as f64,
                JPEG_QUALITY_MAX as f64,
                JPEG_QUALITY_DEFAULT as f64,
                1.0,
            )],
            Mode::HistogramEqualization | Mode::Canny | Mode::Complement => Vec::new(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode name matches neither a key nor a label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transform mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Accepts either the snake_case key or the menu label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s || m.label() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Kind of control a parameter is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Int,
    Float,
    Bool,
}

/// Declared range and default of one parameter.
///
/// Booleans use `min = 0`, `max = 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamSpec {
    fn int(name: &'static str, min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
            min,
            max,
            default,
            step,
        }
    }

    fn float(name: &'static str, min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Float,
            min,
            max,
            default,
            step,
        }
    }

    fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: ParamKind::Bool,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
            step: 1.0,
        }
    }
}

/// Luma band that maps to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdParams {
    #[serde(deserialize_with = "saturating::u8")]
    pub low: u8,
    #[serde(deserialize_with = "saturating::u8")]
    pub high: u8,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            low: THRESHOLD_MIN,
            high: THRESHOLD_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerLawParams {
    /// Exponent applied to normalized intensities. Below 1 brightens.
    pub gamma: f64,
}

impl Default for PowerLawParams {
    fn default() -> Self {
        Self {
            gamma: GAMMA_DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianBlurParams {
    /// Square kernel side length. Always odd once clamped.
    #[serde(deserialize_with = "saturating::u32")]
    pub kernel_size: u32,
}

impl Default for GaussianBlurParams {
    fn default() -> Self {
        Self {
            kernel_size: KERNEL_SIZE_DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaltAndPepperParams {
    /// Fraction of pixels replaced by pure black or white.
    pub amount: f64,
    /// Run a 3x3 median filter over the noisy image.
    pub apply_median: bool,
    /// RNG seed; the same seed always yields the same noise.
    pub seed: u64,
}

impl Default for SaltAndPepperParams {
    fn default() -> Self {
        Self {
            amount: NOISE_AMOUNT_DEFAULT,
            apply_median: false,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JpegParams {
    #[serde(deserialize_with = "saturating::u8")]
    pub quality: u8,
}

impl Default for JpegParams {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY_DEFAULT,
        }
    }
}

/// A transformation request: the selected mode and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Transform {
    Threshold(ThresholdParams),
    PowerLaw(PowerLawParams),
    HistogramEqualization,
    GaussianBlur(GaussianBlurParams),
    Canny,
    SaltAndPepper(SaltAndPepperParams),
    Complement,
    Jpeg(JpegParams),
}

impl Default for Transform {
    fn default() -> Self {
        Mode::Threshold.default_transform()
    }
}

impl Transform {
    /// The mode this request selects.
    pub fn mode(&self) -> Mode {
        match self {
            Transform::Threshold(_) => Mode::Threshold,
            Transform::PowerLaw(_) => Mode::PowerLaw,
            Transform::HistogramEqualization => Mode::HistogramEqualization,
            Transform::GaussianBlur(_) => Mode::GaussianBlur,
            Transform::Canny => Mode::Canny,
            Transform::SaltAndPepper(_) => Mode::SaltAndPepper,
            Transform::Complement => Mode::Complement,
            Transform::Jpeg(_) => Mode::Jpeg,
        }
    }

    /// Copy of this request with every parameter inside its declared range.
    ///
    /// Non-finite floats fall back to the parameter's default and even
    /// kernel sizes round up to the next odd size.
    pub fn clamped(&self) -> Transform {
        match *self {
            Transform::Threshold(p) => Transform::Threshold(p),
            Transform::PowerLaw(p) => Transform::PowerLaw(PowerLawParams {
                gamma: clamp_float(p.gamma, GAMMA_MIN, GAMMA_MAX, GAMMA_DEFAULT),
            }),
            Transform::GaussianBlur(p) => Transform::GaussianBlur(GaussianBlurParams {
                kernel_size: p.kernel_size.clamp(KERNEL_SIZE_MIN, KERNEL_SIZE_MAX) | 1,
            }),
            Transform::SaltAndPepper(p) => Transform::SaltAndPepper(SaltAndPepperParams {
                amount: clamp_float(
                    p.amount,
                    NOISE_AMOUNT_MIN,
                    NOISE_AMOUNT_MAX,
                    NOISE_AMOUNT_DEFAULT,
                ),
                ..p
            }),
            Transform::Jpeg(p) => Transform::Jpeg(JpegParams {
                quality: p.quality.clamp(JPEG_QUALITY_MIN, JPEG_QUALITY_MAX),
            }),
            Transform::HistogramEqualization | Transform::Canny | Transform::Complement => *self,
        }
    }

    /// True when clamping would leave the request unchanged.
    pub fn is_within_bounds(&self) -> bool {
        self.clamped() == *self
    }

    /// Clamp, logging a warning when any value had to change.
    pub fn sanitized(&self) -> Transform {
        let clamped = self.clamped();
        if clamped != *self {
            warn!("clamped out-of-range parameters: {:?} -> {:?}", self, clamped);
        }
        clamped
    }
}

fn clamp_float(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

/// Integer fields that accept any JSON number and saturate into the
/// field's type, so `{"quality": 300}` reaches [`Transform::clamped`]
/// instead of failing to parse.
mod saturating {
    use log::warn;
    use serde::{Deserialize, Deserializer};

    fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(if value.is_finite() { value.round() } else { 0.0 })
    }

    pub fn u8<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let value = number(deserializer)?;
        // Float-to-int casts saturate at the type's bounds
        let saturated = value as u8;
        if f64::from(saturated) != value {
            warn!("saturated out-of-range parameter: {} -> {}", value, saturated);
        }
        Ok(saturated)
    }

    pub fn u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = number(deserializer)?;
        let saturated = value as u32;
        if f64::from(saturated) != value {
            warn!("saturated out-of-range parameter: {} -> {}", value, saturated);
        }
        Ok(saturated)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_transform() -> impl Strategy<Value = Transform> {
        prop_oneof![
            (any::<u8>(), any::<u8>())
                .prop_map(|(low, high)| Transform::Threshold(ThresholdParams { low, high })),
            any::<f64>().prop_map(|gamma| Transform::PowerLaw(PowerLawParams { gamma })),
            Just(Transform::HistogramEqualization),
            any::<u32>().prop_map(|kernel_size| {
                Transform::GaussianBlur(GaussianBlurParams { kernel_size })
            }),
            Just(Transform::Canny),
            (any::<f64>(), any::<bool>(), any::<u64>()).prop_map(|(amount, apply_median, seed)| {
                Transform::SaltAndPepper(SaltAndPepperParams {
                    amount,
                    apply_median,
                    seed,
                })
            }),
            Just(Transform::Complement),
            any::<u8>().prop_map(|quality| Transform::Jpeg(JpegParams { quality })),
        ]
    }

    proptest! {
        /// Clamping always lands inside the declared ranges.
        #[test]
        fn prop_clamped_is_within_bounds(t in any_transform()) {
            let c = t.clamped();
            prop_assert!(c.is_within_bounds());
            prop_assert_eq!(c.mode(), t.mode());
            match c {
                Transform::PowerLaw(p) => prop_assert!((GAMMA_MIN..=GAMMA_MAX).contains(&p.gamma)),
                Transform::GaussianBlur(p) => {
                    prop_assert!((KERNEL_SIZE_MIN..=KERNEL_SIZE_MAX).contains(&p.kernel_size));
                    prop_assert_eq!(p.kernel_size % 2, 1);
                }
                Transform::SaltAndPepper(p) => {
                    prop_assert!((NOISE_AMOUNT_MIN..=NOISE_AMOUNT_MAX).contains(&p.amount));
                }
                Transform::Jpeg(p) => prop_assert!(p.quality <= JPEG_QUALITY_MAX),
                _ => {}
            }
        }

        /// Clamping twice is the same as clamping once.
        #[test]
        fn prop_clamp_idempotent(t in any_transform()) {
            let once = t.clamped();
            prop_assert_eq!(once.clamped(), once);
        }
    }
}
