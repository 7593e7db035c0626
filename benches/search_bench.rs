use criterion::{criterion_group, criterion_main, Criterion, black_box};
use junglebot::search::{Searcher, StrengthProfile};
use junglebot::{Player, State};

fn bench_search(c: &mut Criterion) {
    let s0 = State::new_game();
    c.bench_function("search_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::seeded(StrengthProfile::MASTER, 7);
            let r = s.search_depth(black_box(&s0), Player::Red, 3);
            black_box(r.nodes)
        })
    });
    c.bench_function("search_depth_4_amateur", |ben| {
        ben.iter(|| {
            let mut s = Searcher::seeded(StrengthProfile::AMATEUR, 7);
            let r = s.search_depth(black_box(&s0), Player::Red, 4);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
