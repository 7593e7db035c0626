use criterion::{criterion_group, criterion_main, Criterion, black_box};
use junglebot::perft::perft;
use junglebot::{Player, State};

fn bench_movegen(c: &mut Criterion) {
    let s = State::new_game();
    c.bench_function("legal_moves_startpos", |ben| {
        ben.iter(|| black_box(black_box(&s).legal_moves(Player::Red).len()))
    });
    c.bench_function("perft_3_startpos", |ben| {
        ben.iter(|| black_box(perft(black_box(&s), 3)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
