/// A single neuron: holds the activation value written by the latest forward pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neuron {
    value: f64,
}

impl Neuron {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}
