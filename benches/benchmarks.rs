criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_one_hand,
        ranking_many_hands,
}

use handrank::cards::hand::Hand;
use handrank::evaluation::evaluator::Evaluator;
use handrank::evaluation::showdown::Showdown;

fn classifying_one_hand(c: &mut criterion::Criterion) {
    c.bench_function("classify a 5-card Hand", |b| {
        let hand = Hand::random(0);
        b.iter(|| Evaluator::from(&hand).ranking())
    });
}

fn ranking_many_hands(c: &mut criterion::Criterion) {
    c.bench_function("rank 100 random Hands", |b| {
        let hands = (0..100).map(Hand::random).collect::<Vec<Hand>>();
        b.iter(|| Showdown::rank(hands.clone()))
    });
}
