use jumpstart_wasm::geometry::{sample, Rect};
use jumpstart_wasm::sequencer::{Sequencer, Step};
use jumpstart_wasm::spawner::{within_viewport, Spawner};

fn lit_after(step: Step) -> Option<usize> {
    match step {
        Step::Continue { lit } | Step::Threshold { lit } => Some(lit),
        Step::Stopped => None,
    }
}

#[test]
fn lit_count_matches_elapsed_intervals() {
    let interval = 1000.0;
    for start in [0.0, 0.5, 333.0, 86_400_000.0] {
        for fixed in [3usize, 5, 8] {
            for k in 0..4usize {
                for eps in [0.0, 1.0, 500.0, 999.5] {
                    let mut seq = Sequencer::new(start, interval, fixed, 5);
                    let lit = lit_after(seq.frame(start + k as f64 * interval + eps));
                    assert_eq!(lit, Some((k + 1).min(fixed)), "start={start} k={k} eps={eps}");
                }
            }
        }
    }
}

#[test]
fn irregular_frames_stay_monotonic() {
    // A deterministic but uneven frame schedule with occasional stalls and
    // timestamps that step backwards.
    let offsets = [0.0, 16.7, 33.1, 1020.0, 990.0, 1500.0, 3100.0, 2050.0, 3999.0, 4000.0];
    let mut seq = Sequencer::new(10.0, 1000.0, 5, 5);
    let mut last = 0;
    for off in offsets {
        match seq.frame(10.0 + off) {
            Step::Continue { lit } => {
                assert!(lit >= last);
                last = lit;
            }
            Step::Threshold { lit } => {
                assert_eq!(lit, 5);
                assert_eq!(off, 4000.0);
                return;
            }
            Step::Stopped => panic!("stopped before threshold"),
        }
    }
    panic!("threshold never reached");
}

#[test]
fn spawner_cursor_follows_measured_layout() {
    let container = Rect::new(40.0, 500.0);
    let strips: Vec<_> = (0..5).map(|i| Rect::new(52.0 + i as f64 * 70.0, 64.0)).collect();
    let geo = sample(container, &strips, 5.0);
    assert_eq!(geo.gap, 6.0);
    assert_eq!(geo.insertion_origin, 52.0 + 4.0 * 70.0 + 64.0 - 40.0 + 6.0);

    let placed: Vec<_> = Spawner::new(geo).bounded(within_viewport(1280.0)).collect();
    let last = placed.last().map(|p| p.right_edge).unwrap_or_default();
    assert!(last > 1280.0);
    assert!(placed[..placed.len() - 1].iter().all(|p| p.right_edge <= 1280.0));
    for (n, p) in placed.iter().enumerate() {
        assert_eq!(p.left, geo.insertion_origin + n as f64 * 70.0);
        assert_eq!(p.bridge_width, (n + 1) as f64 * 70.0);
    }
}
