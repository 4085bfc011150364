//! Pasta field element benchmarks

use criterion::{Criterion, criterion_group, criterion_main};

mod fp {
    use pasta::Fp;

    primefield::bench_field!(
        bench_fp,
        "Fp operations",
        Fp::from_hex_vartime("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        Fp::from_hex_vartime("3e4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9")
    );

    pub(crate) fn run(c: &mut criterion::Criterion) {
        bench_fp(c);
    }
}

mod fq {
    use pasta::Fq;

    primefield::bench_field!(
        bench_fq,
        "Fq operations",
        Fq::from_hex_vartime("2a1a4e6a42e4f2c1a5b5ccd3c0f3e6d2f56e1b7a9c8d0e3f4a5b6c7d8e9f0a1b"),
        Fq::from_hex_vartime("0fe2407d60d40f31037582dddf10062234298353521329f5d907aab765cda30f")
    );

    pub(crate) fn run(c: &mut criterion::Criterion) {
        bench_fq(c);
    }
}

fn bench_fields(c: &mut Criterion) {
    fp::run(c);
    fq::run(c);
}

criterion_group!(benches, bench_fields);
criterion_main!(benches);
