use criterion::{Criterion, Throughput};
use std::hint::black_box;
use tinyshell::commands::DEFAULT_COMMANDS;
use tinyshell::shell::Shell;
use tinyshell::sink::Sink;

/// Sink that only counts bytes, so the benchmark measures the engine
struct Counter(usize);

impl Sink for Counter {
    fn put_char(&mut self, _byte: u8) {
        self.0 += 1;
    }

    fn put_str(&mut self, text: &str) {
        self.0 += text.len();
    }
}

pub fn bench_typing(c: &mut Criterion) {
    let line = b"led 12 on and some trailing words to fill";
    let mut group = c.benchmark_group("shell");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("type_line", |b| {
        let mut out = Counter(0);
        let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
        b.iter(|| {
            shell.input(black_box(line), &mut out);
            // erase it again so the buffer never fills
            for _ in 0..line.len() {
                shell.process_char(0x7F, &mut out);
            }
        });
    });
    group.finish();
}

pub fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell");
    for (name, line) in [
        ("execute_led", &b"led 1 on\r"[..]),
        ("execute_help", &b"help\r"[..]),
        ("execute_unknown", &b"foobar baz\r"[..]),
    ] {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_function(name, |b| {
            let mut out = Counter(0);
            let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
            b.iter(|| shell.input(black_box(line), &mut out));
        });
    }
    group.finish();
}

pub fn bench_recall(c: &mut Criterion) {
    let mut out = Counter(0);
    let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
    for line in ["status\r", "led 1 on\r", "led 2 off\r", "help\r"] {
        shell.input(line.as_bytes(), &mut out);
    }

    c.bench_function("shell/recall_previous", |b| {
        b.iter(|| {
            shell.input(black_box(b"\x1b[A"), &mut out);
            shell.process_char(b'\r', &mut out);
        });
    });
}
