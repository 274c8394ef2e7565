use crate::error::ModelError;
use crate::{Deserialize, Serialize};

/// Activation function enum, supporting Linear, Sigmoid and Threshold
///
/// One activation is shared by every layer of a network. Each variant provides three
/// scalar operations: `apply` (forward), `derivative` (used by the backward pass) and
/// `antiderivative` (applied to the final layer output during evaluation).
///
/// # Variants
///
/// - `Linear` - identity; derivative 1, antiderivative identity
/// - `Sigmoid` - logistic function `1 / (1 + e^-x)`; derivative `s(1 - s)`, antiderivative `ln(1 + e^x)`
/// - `Threshold` - step function returning `zero` below `threshold` and `one` otherwise; its derivative and antiderivative are the step itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activation {
    Linear,
    Sigmoid,
    Threshold { zero: f32, threshold: f32, one: f32 },
}

impl Activation {
    /// Creates a threshold activation after checking its parameters.
    ///
    /// # Parameters
    ///
    /// - `zero` - Value returned for inputs below `threshold`
    /// - `threshold` - Switching point
    /// - `one` - Value returned for inputs at or above `threshold`
    ///
    /// # Returns
    ///
    /// - `Ok(Activation::Threshold)` - If every parameter is finite
    /// - `Err(ModelError::ConfigurationError)` - If any parameter is NaN or infinite
    pub fn threshold(zero: f32, threshold: f32, one: f32) -> Result<Self, ModelError> {
        let activation = Activation::Threshold {
            zero,
            threshold,
            one,
        };
        activation.validate()?;
        Ok(activation)
    }

    /// Checks that a (possibly deserialized) activation carries usable parameters.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Activation::Threshold {
            zero,
            threshold,
            one,
        } = *self
        {
            if !(zero.is_finite() && threshold.is_finite() && one.is_finite()) {
                return Err(ModelError::ConfigurationError(format!(
                    "threshold parameters must be finite, got zero={}, threshold={}, one={}",
                    zero, threshold, one
                )));
            }
        }
        Ok(())
    }

    /// Forward application of the activation function to a single value
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        match *self {
            Activation::Linear => x,
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Threshold {
                zero,
                threshold,
                one,
            } => {
                if x < threshold {
                    zero
                } else {
                    one
                }
            }
        }
    }

    /// Derivative of the activation function, evaluated at the pre-activation value `x`
    #[inline]
    pub fn derivative(&self, x: f32) -> f32 {
        match *self {
            Activation::Linear => 1.0,
            Activation::Sigmoid => {
                let s = self.apply(x);
                s * (1.0 - s)
            }
            Activation::Threshold { .. } => self.apply(x),
        }
    }

    /// Antiderivative (integral) of the activation function at `x`
    ///
    /// For Sigmoid this is the softplus `ln(1 + e^x)`, computed as
    /// `max(x, 0) + ln(1 + e^-|x|)` so large inputs do not overflow.
    #[inline]
    pub fn antiderivative(&self, x: f32) -> f32 {
        match *self {
            Activation::Linear => x,
            Activation::Sigmoid => x.max(0.0) + (-x.abs()).exp().ln_1p(),
            Activation::Threshold { .. } => self.apply(x),
        }
    }

    /// Returns the name of the activation, used in summaries and logs
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "Linear",
            Activation::Sigmoid => "Sigmoid",
            Activation::Threshold { .. } => "Threshold",
        }
    }
}
