use glyph_voxel::pattern::supported_characters;
use glyph_voxel::{
    visible_cuboid_faces, GlyphMeshBuilder, UnitQuadBuffer, RIGHT_HANDED_Y_UP_CONFIG,
};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_build_glyph_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_build_glyph_mesh");
    let builder = GlyphMeshBuilder::default();

    for symbol in supported_characters() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{symbol} cuboids={}", builder.build(symbol).len())),
            &symbol,
            |b, &symbol| {
                b.iter(|| builder.build(symbol));
            },
        );
    }
    group.finish();
}

fn bench_visible_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_visible_faces");
    let mesh = GlyphMeshBuilder::default().build('B');

    // Do a single run first to allocate the buffer to the right size.
    let mut buffer = UnitQuadBuffer::new();
    visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer);

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("quads={}", buffer.num_quads())),
        &(),
        |b, _| {
            b.iter(|| visible_cuboid_faces(&mesh, &RIGHT_HANDED_Y_UP_CONFIG.faces, &mut buffer));
        },
    );
    group.finish();
}

fn bench_triangle_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_triangle_mesh");
    let mesh = GlyphMeshBuilder::default().build('A');

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("triangles={}", mesh.to_triangle_mesh().num_triangles())),
        &(),
        |b, _| {
            b.iter(|| mesh.to_triangle_mesh());
        },
    );
    group.finish();
}

criterion_group!(
    benches,
    bench_build_glyph_mesh,
    bench_visible_faces,
    bench_triangle_mesh
);
criterion_main!(benches);
