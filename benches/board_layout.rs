use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rust_board::{BoardConfig, BoardLayout, GameStore, Viewport, parse_deck_json};

fn deck_text(distinct: usize) -> String {
    let cards: Vec<String> = (0..distinct).map(|i| format!("\"C{i:04}\":\"{}\"", i % 4 + 1)).collect();
    format!("[{{\"name\":\"Bench\",\"cards\":{{{}}}}}]", cards.join(","))
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_layout");

    for (rows, cols) in [(4, 5), (8, 10)] {
        let config = BoardConfig::default().with_grid(rows, cols);
        group.bench_function(format!("compute({rows}x{cols})"), |b| {
            b.iter(|| BoardLayout::compute(black_box(&config)));
        });
    }

    let board = BoardLayout::compute(&BoardConfig::default());
    let viewport = Viewport::new(1600.0, 900.0, 900.0);
    group.bench_function("resolve_zones", |b| {
        b.iter(|| board.resolve_zones(black_box(&viewport)));
    });
    group.bench_function("zone_css", |b| {
        b.iter(|| {
            board
                .zones
                .iter()
                .map(|zone| zone.rect.width.to_css().len())
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_import");

    for distinct in [15, 60] {
        let text = deck_text(distinct);
        group.bench_function(format!("parse(cards={distinct})"), |b| {
            b.iter(|| parse_deck_json(black_box(&text)));
        });

        let Ok(deck) = parse_deck_json(&text) else {
            continue;
        };
        group.bench_function(format!("dispatch(cards={distinct})"), |b| {
            b.iter_batched(
                || (GameStore::with_seed(7), deck.clone()),
                |(mut store, deck)| {
                    store.dispatch(deck.into());
                    store
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_import);
criterion_main!(benches);
