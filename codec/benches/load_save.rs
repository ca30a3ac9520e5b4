//! Load and save throughput for a full city file.
//!
//! Run with: `cargo bench -p cityfile-codec --bench load_save`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use codec::{CityFile, CodecOptions, FILE_SIZE};

fn sample_city() -> CityFile {
    let mut city = CityFile::new();
    for (i, tile) in city.tiles.as_mut_slice().iter_mut().enumerate() {
        *tile = (i % 960) as u16;
    }
    for i in 0..city.money.len() {
        city.money[i] = i as i16 * 10;
    }
    city.header.total_funds = 20_000;
    city
}

fn bench_load_save(c: &mut Criterion) {
    let mut city = sample_city();
    let mut bytes = Vec::with_capacity(FILE_SIZE);
    city.write_to(&mut bytes, &CodecOptions::symmetric())
        .expect("encode sample city");

    let mut group = c.benchmark_group("city_file");
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    group.bench_function("read_from", |b| {
        b.iter(|| CityFile::read_from(black_box(bytes.as_slice())).expect("decode"));
    });

    group.bench_function("write_to", |b| {
        let mut out = Vec::with_capacity(FILE_SIZE);
        b.iter(|| {
            out.clear();
            city.write_to(black_box(&mut out), &CodecOptions::reference())
                .expect("encode");
        });
    });

    group.bench_function("copy_arrays", |b| {
        b.iter(|| black_box(&city).copy_arrays());
    });

    group.finish();
}

criterion_group!(benches, bench_load_save);
criterion_main!(benches);
