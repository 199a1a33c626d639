pub mod perceptron;

pub use perceptron::PerceptronRule;
