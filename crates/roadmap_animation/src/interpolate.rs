//! Piecewise-linear interpolation
//!
//! Maps an input value (typically a scroll offset) through a list of
//! breakpoints onto an output value (a translation, a scale, an opacity).
//! Between breakpoints the mapping is linear, optionally shaped by an
//! [`Easing`] curve. Outside the breakpoints each side follows its own
//! [`Extrapolate`] mode.
//!
//! ```rust
//! use roadmap_animation::{Extrapolate, Interpolation};
//!
//! let fade = Interpolation::new(&[0.0, 100.0], &[1.0, 0.0])
//!     .unwrap()
//!     .extrapolate(Extrapolate::Clamp);
//!
//! assert_eq!(fade.eval(-20.0), 1.0);
//! assert_eq!(fade.eval(50.0), 0.5);
//! assert_eq!(fade.eval(400.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::easing::Easing;
use crate::error::AnimationError;

/// Behaviour outside the input range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the boundary segment's slope
    #[default]
    Extend,
    /// Hold the boundary output
    Clamp,
    /// Return the input unchanged
    Identity,
}

/// Check that `input`/`output` describe a valid piecewise-linear mapping
pub fn validate_ranges(input: &[f32], output: &[f32]) -> Result<(), AnimationError> {
    if input.len() != output.len() {
        return Err(AnimationError::RangeLengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    if input.len() < 2 {
        return Err(AnimationError::TooFewPoints(input.len()));
    }
    if let Some(index) = input
        .iter()
        .chain(output.iter())
        .position(|v| !v.is_finite())
    {
        return Err(AnimationError::NonFinite {
            index: index % input.len(),
        });
    }
    if let Some(index) = input.windows(2).position(|w| w[1] <= w[0]) {
        return Err(AnimationError::NotIncreasing {
            index: index + 1,
            value: input[index + 1],
        });
    }
    Ok(())
}

/// Interpolate `x` with the same extrapolation on both sides and no easing.
///
/// `input` must be strictly increasing and as long as `output`, with at
/// least two points. Ranges built at runtime belong in
/// [`Interpolation::new`], which checks this and returns an error instead.
///
/// # Panics
///
/// Panics if `input` is empty. Debug builds also panic on any range that
/// [`Interpolation::new`] would reject; release builds may then return an
/// unspecified value or panic on an out-of-bounds index.
pub fn interpolate(x: f32, input: &[f32], output: &[f32], extrapolate: Extrapolate) -> f32 {
    sample(x, input, output, extrapolate, extrapolate, Easing::Linear)
}

fn sample(
    x: f32,
    input: &[f32],
    output: &[f32],
    left: Extrapolate,
    right: Extrapolate,
    easing: Easing,
) -> f32 {
    debug_assert!(validate_ranges(input, output).is_ok());

    let last = input.len() - 1;

    if x < input[0] {
        return match left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Identity => x,
            Extrapolate::Extend => segment(x, input, output, 0, easing),
        };
    }
    if x > input[last] {
        return match right {
            Extrapolate::Clamp => output[last],
            Extrapolate::Identity => x,
            Extrapolate::Extend => segment(x, input, output, last - 1, easing),
        };
    }

    // First breakpoint at or past x closes the bracketing segment
    let index = input[1..]
        .iter()
        .position(|&bound| x <= bound)
        .unwrap_or(last - 1);
    segment(x, input, output, index, easing)
}

fn segment(x: f32, input: &[f32], output: &[f32], index: usize, easing: Easing) -> f32 {
    let (in_start, in_end) = (input[index], input[index + 1]);
    let (out_start, out_end) = (output[index], output[index + 1]);

    let mut t = (x - in_start) / (in_end - in_start);
    if !easing.is_linear() && (0.0..=1.0).contains(&t) {
        t = easing.apply(t);
    }
    out_start + (out_end - out_start) * t
}

/// A validated interpolation with its extrapolation and easing settings.
///
/// Ranges are stored inline for up to four breakpoints, so evaluating and
/// rebuilding small mappings does not touch the heap.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
    easing: Easing,
}

impl Interpolation {
    /// Create a linear mapping that extends past both ends
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self, AnimationError> {
        validate_ranges(input, output)?;
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            easing: Easing::Linear,
        })
    }

    /// Set the extrapolation on both sides
    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_left = mode;
        self.extrapolate_right = mode;
        self
    }

    /// Set the extrapolation below the first breakpoint
    pub fn extrapolate_left(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_left = mode;
        self
    }

    /// Set the extrapolation above the last breakpoint
    pub fn extrapolate_right(mut self, mode: Extrapolate) -> Self {
        self.extrapolate_right = mode;
        self
    }

    /// Shorthand for clamping on both sides
    pub fn clamp(self) -> Self {
        self.extrapolate(Extrapolate::Clamp)
    }

    /// Shape each segment with an easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Evaluate the mapping at `x`
    pub fn eval(&self, x: f32) -> f32 {
        sample(
            x,
            &self.input,
            &self.output,
            self.extrapolate_left,
            self.extrapolate_right,
            self.easing,
        )
    }

    pub fn input_range(&self) -> &[f32] {
        &self.input
    }

    pub fn output_range(&self) -> &[f32] {
        &self.output
    }

    /// Smallest and largest value the mapping can produce, if bounded
    pub fn output_bounds(&self) -> Option<(f32, f32)> {
        if self.extrapolate_left != Extrapolate::Clamp
            || self.extrapolate_right != Extrapolate::Clamp
        {
            return None;
        }
        let min = self.output.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.output.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        Some((min, max))
    }
}
