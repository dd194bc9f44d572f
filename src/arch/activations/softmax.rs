/// Softmax is not a per neuron function: each neuron forwards its weighted sum untouched and the
/// layer normalizes all of its values at once.
#[derive(Clone, Debug, Default)]
pub struct Softmax;

impl Softmax {
    pub fn f(&self, z: f32) -> f32 {
        z
    }

    pub fn df(&self, _z: f32) -> f32 {
        1.
    }

    /// Normalizes `values` in place into a probability distribution.
    pub fn normalize(&self, values: &mut [f32]) {
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        let mut total = 0.;
        for v in values.iter_mut() {
            *v = (*v - max).exp();
            total += *v;
        }

        for v in values.iter_mut() {
            *v /= total;
        }
    }
}
