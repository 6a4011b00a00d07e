use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;
use zeoran::atom::Atom;
use zeoran::audit::AuditInfo;
use zeoran::connectivity::TSiteGraph;
use zeoran::format::{FileFormat, StructureRecord};
use zeoran::formats::cif::CIFFormat;
use zeoran::structure::Structure;
use zeoran::substitution::random::generate_random;
use zeoran::unit_cell::UnitCell;

/// Ring of `n` Si sites bridged by oxygens along x.
fn framework(n: usize) -> Structure {
    let cell = UnitCell::orthorhombic(3.2 * n as f64, 20.0, 20.0, "orthorhombic").unwrap();
    let mut structure = Structure::new(cell);
    for i in 0..n {
        let x = i as f64 / n as f64;
        structure.add_atom(
            Atom::new(format!("T{}", i + 1), "Si".to_string())
                .with_position(x, 0.5, 0.5)
                .with_charge(1.5),
        );
        structure.add_atom(
            Atom::new(format!("O{}", i + 1), "O".to_string())
                .with_position(x + 0.5 / n as f64, 0.5, 0.5)
                .with_charge(-0.75),
        );
    }
    structure
}

fn render(structure: &Structure, als: &[usize], audit: &AuditInfo) -> usize {
    let record = StructureRecord {
        structure,
        substituted: als,
        name_zeo: "RING",
        name_alg: "random",
        index: 0,
        audit,
    };
    let mut buffer = Vec::new();
    CIFFormat.write_next(&mut buffer, &record).unwrap();
    black_box(buffer.len())
}

fn criterion_benchmark(c: &mut Criterion) {
    let structure = framework(192);
    let audit = AuditInfo::new("2025-07-16", "bench");
    let mut rng = StdRng::seed_from_u64(0);
    let als = generate_random(structure.tatoms(), 48, &mut rng).unwrap();

    let mut group = c.benchmark_group("my_group");
    group.measurement_time(Duration::from_secs(6));
    group.bench_function("write cif", |b| b.iter(|| render(&structure, &als, &audit)));
    group.bench_function("t-site graph", |b| {
        b.iter(|| black_box(TSiteGraph::from_structure(&structure)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
