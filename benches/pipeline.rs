//! Benchmarks for the pxgen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pxgen::output::Printer;
use pxgen::render::to_image;
use pxgen::sprites::{background, player};
use pxgen::{generate, Canvas, Colour, CATALOG};

// -- Primitive benchmarks --

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("fill_rect_clipped", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(64, 32);
            canvas.fill_rect(black_box(-16), black_box(-16), 96, 64, Colour::WHITE);
            canvas
        })
    });

    group.bench_function("draw_outline", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(64, 32);
            canvas.draw_outline(black_box(0), black_box(0), 64, 32, Colour::BLACK);
            canvas
        })
    });

    group.finish();
}

// -- Builder benchmarks --

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("builders");

    group.bench_function("player_sheet", |b| b.iter(player::spritesheet));
    group.bench_function("hill", |b| b.iter(background::hill));

    group.bench_function("all_sprites", |b| {
        b.iter(|| {
            for entry in CATALOG {
                black_box((entry.build)());
            }
        })
    });

    let sheet = player::spritesheet();
    group.bench_function("to_image_player", |b| b.iter(|| to_image(black_box(&sheet)).unwrap()));

    group.finish();
}

// -- Full pipeline --

fn bench_generate(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let printer = Printer::plain();

    c.bench_function("generate_all", |b| {
        b.iter(|| generate(black_box(dir.path()), &printer).unwrap())
    });
}

criterion_group!(benches, bench_primitives, bench_builders, bench_generate);
criterion_main!(benches);
