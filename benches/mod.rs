use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    shell::bench_typing,
    shell::bench_execute,
    shell::bench_recall
);
criterion_main!(benches);
