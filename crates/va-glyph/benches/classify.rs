use criterion::{Criterion, black_box, criterion_group, criterion_main};
use va_core::config::RenderOptions;
use va_core::grid::{Grid, Loc};
use va_glyph::classify;

fn bench_classify(c: &mut Criterion) {
    let art = " _____ \n/     \\\n|  =  |\n\\_____/\n".repeat(64);
    let grid = Grid::load(&art);
    let options = RenderOptions::default();

    c.bench_function("classify_full_grid", |b| {
        b.iter(|| {
            let mut produced = 0usize;
            for y in 0..grid.rows() as i32 {
                for x in 0..grid.cols() as i32 {
                    if classify(Loc::new(x, y), black_box(&grid), &options).is_some() {
                        produced += 1;
                    }
                }
            }
            black_box(produced)
        });
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
