criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        comparing_gesture_pairs,
        tallying_small_table,
        tallying_large_table,
        recording_gestures,
}

fn table(n: usize) -> Vec<(Name, Option<Gesture>)> {
    (0..n)
        .map(|i| (Name::from(format!("p{}", i)), Some(Gesture::random())))
        .collect()
}

fn comparing_gesture_pairs(c: &mut criterion::Criterion) {
    c.bench_function("compare every pair of optional gestures", |b| {
        let hands = [None, Some(Gesture::Rock), Some(Gesture::Paper), Some(Gesture::Scissors)];
        b.iter(|| {
            hands
                .iter()
                .flat_map(|a| hands.iter().map(move |b| compare(*a, *b)))
                .filter(|o| *o == Outcome::Win)
                .count()
        })
    });
}

fn tallying_small_table(c: &mut criterion::Criterion) {
    c.bench_function("tally a 2-player round", |b| {
        let throws = table(2);
        b.iter(|| tally(&throws))
    });
}

fn tallying_large_table(c: &mut criterion::Criterion) {
    c.bench_function("tally a 64-player round", |b| {
        let throws = table(64);
        b.iter(|| tally(&throws))
    });
}

fn recording_gestures(c: &mut criterion::Criterion) {
    c.bench_function("record 64 gestures into a fresh round", |b| {
        let throws = table(64);
        b.iter(|| {
            let round = Round::new(RoundConfig::default(), throws.iter().map(|(n, _)| n.clone()));
            round.advance(Phase::Throwing).ok();
            for (name, gesture) in throws.iter() {
                if let Some(gesture) = gesture {
                    round.record_gesture(name, *gesture).ok();
                }
            }
            round.is_ready()
        })
    });
}

use scissors::*;
