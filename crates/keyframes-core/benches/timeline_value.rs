use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyframes_core::{Keyframe, Timeline};

fn bench_value(c: &mut Criterion) {
    let frames: Vec<Keyframe<f32>> = (0..256)
        .map(|i| Keyframe::new(i as f32, (i * i) as f32))
        .collect();
    let scalar = Timeline::from_sorted(frames);
    c.bench_function("value_scalar_256", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time = (time + 0.37) % 256.0;
            black_box(scalar.value(black_box(time)))
        })
    });

    let frames: Vec<Keyframe<Vec<f32>>> = (0..256)
        .map(|i| Keyframe::new(i as f32, vec![i as f32; 8]))
        .collect();
    let vectors = Timeline::from_sorted(frames);
    c.bench_function("value_into_vec8_256", |b| {
        let mut out = vec![0.0f32; 8];
        let mut time = 0.0f32;
        b.iter(|| {
            time = (time + 0.37) % 256.0;
            vectors.value_into(black_box(time), &mut out);
            black_box(&out);
        })
    });
}

criterion_group!(benches, bench_value);
criterion_main!(benches);
