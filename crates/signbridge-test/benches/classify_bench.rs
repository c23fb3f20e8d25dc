//! Benchmarks for hand pose classification

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use signbridge_core::{GestureLabel, Handedness};
use signbridge_gesture::{normalize, GestureClassifier};
use signbridge_test::{capture_frames, PoseBuilder, GEOMETRIC_GESTURES};

fn bench_normalize(c: &mut Criterion) {
    let frame = PoseBuilder::fist().in_frame();

    c.bench_function("normalize_hand", |b| b.iter(|| black_box(normalize(black_box(&frame)))));
}

fn bench_classify_each_gesture(c: &mut Criterion) {
    let classifier = GestureClassifier::default();
    let mut group = c.benchmark_group("classify");

    for label in GEOMETRIC_GESTURES {
        let frame = match PoseBuilder::for_gesture(label) {
            Some(pose) => pose.in_frame(),
            None => continue,
        };
        group.bench_function(label.as_str(), |b| {
            b.iter(|| black_box(classifier.classify(black_box(&frame), Handedness::Right)))
        });
    }

    group.finish();
}

fn bench_classify_unusable(c: &mut Criterion) {
    let classifier = GestureClassifier::default();
    let short = PoseBuilder::fist().in_frame()[..10].to_vec();

    c.bench_function("classify_short_input", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&short), Handedness::Right)))
    });
}

fn bench_classify_stream(c: &mut Criterion) {
    let classifier = GestureClassifier::default();
    let mut rng = StdRng::seed_from_u64(42);
    let frames = capture_frames(
        &[GestureLabel::OpenPalm, GestureLabel::PointForward, GestureLabel::Ok],
        30,
        &mut rng,
    );

    c.bench_function("classify_90_frames", |b| {
        b.iter(|| {
            for frame in &frames {
                black_box(classifier.classify(black_box(frame), Handedness::Right));
            }
        })
    });
}

fn bench_explain(c: &mut Criterion) {
    let classifier = GestureClassifier::default();
    let frame = PoseBuilder::for_gesture(GestureLabel::PointForward)
        .unwrap_or_default()
        .in_frame();

    c.bench_function("explain_last_rule", |b| {
        b.iter(|| black_box(classifier.explain(black_box(&frame), Handedness::Right)))
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_classify_each_gesture,
    bench_classify_unusable,
    bench_classify_stream,
    bench_explain,
);

criterion_main!(benches);
