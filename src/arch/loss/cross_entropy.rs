use ndarray::{Array1, ArrayView1, Zip};

use super::LossFn;

const EPS: f32 = 1e-7;

/// Cross entropy loss function, meant for probability outputs such as softmax or sigmoid layers.
///
/// Predictions are clamped to `[EPS, 1]` before taking their logarithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossEntropy;

impl CrossEntropy {
    /// Returns a new `CrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for CrossEntropy {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        -Zip::from(&y_pred)
            .and(&y)
            .fold(0., |acc, &p, &t| acc + t * p.clamp(EPS, 1.).ln())
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        Zip::from(&y_pred)
            .and(&y)
            .map_collect(|&p, &t| -t / p.clamp(EPS, 1.))
    }
}
