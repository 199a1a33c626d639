use perceptron_lab::{Engine, Status};

fn main() {
    let engine = Engine::default();
    let mut run = engine.load("and", 0.5).expect("built-in dataset");

    while !run.status().is_terminal() {
        if let Some(report) = engine.step(&mut run) {
            if let Some(summary) = report.epoch_completed {
                println!(
                    "Epoch {}: errors = {}, weights = {:?}",
                    summary.epoch, summary.total_abs_error, summary.weights
                );
            }
        }
    }

    assert_eq!(run.status(), Status::Converged);
    for s in run.dataset().samples() {
        println!("({}, {}) -> {}", s.x1, s.x2, run.weights().predict(s.x1, s.x2));
    }
}
