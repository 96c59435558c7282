extern crate criterion;
extern crate flagset;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flagset::{impl_flags, FlagSet};

#[derive(Clone, Copy)]
#[repr(u32)]
enum Opt {
    A = 1 << 0,
    B = 1 << 3,
    C = 1 << 9,
    D = 1 << 17,
    E = 1 << 31,
}

impl_flags!(Opt => u32);

// The same bit patterns, held raw and held as sets, so that each group
// measures the wrapper against the integer it wraps.
struct Duplex(Vec<u32>, Vec<FlagSet<Opt>>);

impl std::fmt::Display for Duplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.len())
    }
}

impl Duplex {
    fn new(raw: Vec<u32>) -> Self {
        let sets = raw.iter().copied().map(FlagSet::from_bits).collect();
        Duplex(raw, sets)
    }
}

fn do_bench_duplex(c: &mut Criterion, label: &str, i: Duplex) {
    let empty: FlagSet<Opt> = FlagSet::new();
    let mask = Opt::B | Opt::D;
    let raw_mask = mask.bits();

    let mut group = c.benchmark_group(&format!("{}_union", label));
    group.bench_with_input(BenchmarkId::new("Raw", &i), &i, |t, Duplex(raw, _)| {
        t.iter(|| raw.iter().fold(0u32, |acc, x| acc | black_box(*x)))
    });
    group.bench_with_input(BenchmarkId::new("FlagSet", &i), &i, |t, Duplex(_, sets)| {
        t.iter(|| sets.iter().fold(empty, |acc, x| acc | black_box(*x)))
    });
    group.finish();

    let mut group = c.benchmark_group(&format!("{}_difference", label));
    group.bench_with_input(BenchmarkId::new("Raw", &i), &i, |t, Duplex(raw, _)| {
        t.iter(|| {
            raw.iter()
                .map(|x| black_box(*x) & !raw_mask)
                .fold(0u32, |acc, x| acc ^ x)
        })
    });
    group.bench_with_input(BenchmarkId::new("FlagSet", &i), &i, |t, Duplex(_, sets)| {
        t.iter(|| {
            sets.iter()
                .map(|x| black_box(*x) - mask)
                .fold(empty, |acc, x| acc ^ x)
        })
    });
    group.finish();

    let mut group = c.benchmark_group(&format!("{}_contains", label));
    group.bench_with_input(BenchmarkId::new("Raw", &i), &i, |t, Duplex(raw, _)| {
        t.iter(|| {
            raw.iter()
                .filter(|x| (black_box(**x) & raw_mask) == raw_mask)
                .count()
        })
    });
    group.bench_with_input(BenchmarkId::new("FlagSet", &i), &i, |t, Duplex(_, sets)| {
        t.iter(|| sets.iter().filter(|x| black_box(**x).contains(mask)).count())
    });
    group.finish();
}

fn bench_duplex(c: &mut Criterion) {
    let i = Duplex::new(vec![
        Opt::A as u32,
        Opt::B as u32 | Opt::D as u32,
        Opt::C as u32,
        Opt::E as u32 | 0x40,
    ]);
    do_bench_duplex(c, "1_small", i);

    let i = Duplex::new(Vec::from_iter(0..4096));
    do_bench_duplex(c, "2_dense", i);

    let i = Duplex::new((0..65536u32).map(|x| x.wrapping_mul(0x9e37_79b9)).collect());
    do_bench_duplex(c, "3_scattered", i);
}

criterion_group!(flagbenches, bench_duplex);
criterion_main!(flagbenches);
