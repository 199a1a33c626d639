use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use perceptron_lab::{
    Dataset, Engine, EngineConfig, Status, TickOutcome, TrainingRun, WeightVector,
};

const EPS: f64 = 1e-9;

fn xor() -> Dataset {
    Dataset::new("xor", &[(0.0, 0.0, 0), (0.0, 1.0, 1), (1.0, 0.0, 1), (1.0, 1.0, 0)]).unwrap()
}

fn trajectory(engine: &Engine, run: &mut TrainingRun, steps: usize) -> Vec<WeightVector> {
    (0..steps)
        .map(|_| {
            engine.step(run);
            run.weights()
        })
        .collect()
}

#[test]
fn and_converges_at_epoch_six() {
    let engine = Engine::default();
    let mut run = engine.load("and", 0.5).unwrap();
    assert_eq!(engine.run_to_end(&mut run), Status::Converged);
    assert_eq!(run.epoch(), 6);
    assert_eq!(run.weights(), WeightVector { w1: 1.0, w2: 0.5, bias: -1.5 });
    assert_eq!(run.history().len(), 6);
    assert_eq!(run.history().last().unwrap().total_abs_error, 0);
    assert!(run.history()[..5].iter().all(|e| e.total_abs_error > 0));
}

#[test]
fn single_steps_stop_at_convergence() {
    let engine = Engine::default();
    let mut run = engine.load("and", 0.5).unwrap();
    engine.start(&mut run);

    let mut steps = 0;
    while engine.step(&mut run).is_some() {
        steps += 1;
        if !run.status().is_terminal() {
            assert_eq!(run.status(), Status::Paused);
        }
        assert!(steps <= 24, "stepped past convergence");
    }
    assert_eq!(steps, 24);
    assert_eq!(run.status(), Status::Converged);
    assert_eq!(run.epoch(), 6);
    assert_eq!(run.weights(), WeightVector { w1: 1.0, w2: 0.5, bias: -1.5 });
    assert!(engine.step(&mut run).is_none());
    assert_eq!(run.status(), Status::Converged);
}

#[test]
fn or_converges_at_epoch_four() {
    let engine = Engine::new(EngineConfig::new(100, 1000)).unwrap();
    let mut run = engine.load("or", 1.0).unwrap();
    assert_eq!(engine.run_to_end(&mut run), Status::Converged);
    assert_eq!(run.epoch(), 4);
    assert_eq!(run.weights(), WeightVector { w1: 1.0, w2: 1.0, bias: -1.0 });
    for s in run.dataset().samples() {
        assert_eq!(run.weights().predict(s.x1, s.x2), s.target);
    }
}

#[test]
fn every_builtin_converges() {
    let engine = Engine::default();
    for name in perceptron_lab::list_datasets() {
        let mut run = engine.load(name, 0.1).unwrap();
        assert_eq!(engine.run_to_end(&mut run), Status::Converged, "dataset {name}");
        assert!(engine.export_snapshot(&run).converged);
    }
}

#[test]
fn xor_exhausts_max_epochs() {
    let engine = Engine::new(EngineConfig::new(25, 1000)).unwrap();
    let mut run = engine.load_dataset(xor(), 1.0).unwrap();
    assert_eq!(engine.run_to_end(&mut run), Status::MaxEpochsReached);
    assert_eq!(run.epoch(), 25);
    assert_eq!(run.current_sample_index(), 0);
    assert!(run.dataset().total_abs_error() > 0);
    assert_eq!(run.history().len(), 25);
}

#[test]
fn identical_runs_have_identical_trajectories() {
    let engine = Engine::default();
    let mut a = engine.load("custom", 0.3).unwrap();
    let mut b = engine.load("custom", 0.3).unwrap();
    assert_eq!(trajectory(&engine, &mut a, 11), trajectory(&engine, &mut b, 11));
}

#[test]
fn terminal_steps_change_nothing() {
    let engine = Engine::new(EngineConfig::new(3, 1000)).unwrap();
    for mut run in [engine.load("and", 0.5).unwrap(), engine.load_dataset(xor(), 0.5).unwrap()] {
        let status = engine.run_to_end(&mut run);
        assert!(status.is_terminal());
        let before = (run.weights(), run.epoch(), run.current_sample_index());
        for _ in 0..5 {
            assert!(engine.step(&mut run).is_none());
        }
        let token = engine.start(&mut run);
        assert_eq!(engine.tick(&mut run, token), TickOutcome::Discarded);
        assert_eq!((run.weights(), run.epoch(), run.current_sample_index()), before);
        assert_eq!(run.status(), status);
    }
}

#[test]
fn export_is_idempotent() {
    let engine = Engine::default();
    let mut run = engine.load("or", 1.0).unwrap();
    engine.step(&mut run);
    engine.step(&mut run);
    let first = engine.export_snapshot(&run);
    let second = engine.export_snapshot(&run);
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn export_converged_flag_is_point_in_time() {
    let engine = Engine::default();
    let mut run = engine.load("or", 1.0).unwrap();
    // Nothing evaluated yet: every error reads 0.
    assert!(engine.export_snapshot(&run).converged);
    engine.step(&mut run);
    assert!(!engine.export_snapshot(&run).converged);
}

#[test]
fn weight_update_law_holds_for_random_learning_rates() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = Engine::default();
    for _ in 0..200 {
        let lr = rng.gen_range(0.01..2.0);
        let mut run = engine.load("custom", lr).unwrap();
        let warmup = rng.gen_range(0..12);
        for _ in 0..warmup {
            engine.step(&mut run);
        }
        if run.status().is_terminal() {
            continue;
        }

        let before = run.weights();
        let sample = run.dataset().samples()[run.current_sample_index()].clone();
        let report = engine.step(&mut run).unwrap();
        let after = run.weights();
        let scale = lr * report.error as f64;

        assert!((after.w1 - (before.w1 + scale * sample.x1)).abs() < EPS);
        assert!((after.w2 - (before.w2 + scale * sample.x2)).abs() < EPS);
        assert!((after.bias - (before.bias + scale)).abs() < EPS);
        assert_eq!(report.updated, report.error != 0);
    }
}

#[test]
fn reset_restores_initial_state_from_any_status() {
    let engine = Engine::new(EngineConfig::new(2, 1000)).unwrap();
    let mut runs = vec![
        engine.load("and", 0.5).unwrap(),
        engine.load("and", 0.5).unwrap(),
        engine.load_dataset(xor(), 1.0).unwrap(),
    ];
    engine.start(&mut runs[0]);
    engine.step(&mut runs[1]);
    engine.run_to_end(&mut runs[2]);

    for run in &mut runs {
        engine.reset(run, None).unwrap();
        assert_eq!(run.weights(), WeightVector::zeros());
        assert_eq!(run.epoch(), 0);
        assert_eq!(run.current_sample_index(), 0);
        assert_eq!(run.status(), Status::Ready);
        assert!(run.dataset().samples().iter().all(|s| s.output == 0 && s.error == 0));
    }
}

#[test]
fn paced_session_pauses_midway_and_resumes() {
    let engine = Engine::default();
    let mut run = engine.load("and", 0.5).unwrap();
    let token = engine.start(&mut run);
    for _ in 0..5 {
        assert!(matches!(engine.tick(&mut run, token), TickOutcome::Continue { .. }));
    }
    engine.pause(&mut run);
    let paused_at = (run.epoch(), run.current_sample_index());
    assert_eq!(paused_at, (1, 1));

    assert_eq!(engine.tick(&mut run, token), TickOutcome::Discarded);
    assert_eq!(engine.run_to_end(&mut run), Status::Converged);
    assert_eq!(run.epoch(), 6);
}

#[test]
fn saved_export_has_documented_fields() {
    let engine = Engine::default();
    let mut run = engine.load("and", 0.5).unwrap();
    engine.run_to_end(&mut run);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    engine.export_snapshot(&run).save_json(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["converged", "dataset", "epoch", "learning_rate", "samples", "weights"]);
    assert_eq!(value["dataset"], "and");
    assert_eq!(value["epoch"], 6);
    assert_eq!(value["converged"], true);
    assert_eq!(value["samples"].as_array().unwrap().len(), 4);
    assert_eq!(value["weights"]["bias"], -1.5);
}
