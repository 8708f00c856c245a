//! Performance benchmarks comparing slot access with standard approaches

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slotref::{unwrap, Cell, Slot};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn bench_get(c: &mut Criterion) {
    c.bench_function("slot_get_direct", |b| {
        let slot = Slot::Direct(black_box(42u64));
        b.iter(|| black_box(unwrap::get(&slot)));
    });

    c.bench_function("slot_get_boxed", |b| {
        let slot = Slot::boxed(black_box(42u64));
        b.iter(|| black_box(unwrap::get(&slot)));
    });

    // Like-for-like foundation
    c.bench_function("rc_refcell_borrow", |b| {
        let cell = Rc::new(RefCell::new(black_box(42u64)));
        b.iter(|| black_box(*cell.borrow()));
    });
}

fn bench_set(c: &mut Criterion) {
    c.bench_function("slot_set_boxed", |b| {
        let mut state = HashMap::from([("a", Slot::boxed(0u64))]);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            unwrap::set(&mut state, "a", black_box(n));
        });
    });

    c.bench_function("slot_set_direct", |b| {
        let mut state = HashMap::from([("a", Slot::Direct(0u64))]);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            unwrap::set(&mut state, "a", black_box(n));
        });
    });

    c.bench_function("hashmap_insert", |b| {
        let mut state = HashMap::from([("a", 0u64)]);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            state.insert("a", black_box(n));
        });
    });

    c.bench_function("cell_write", |b| {
        let cell = Cell::new(0u64);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            cell.write(black_box(n));
        });
    });
}

criterion_group!(benches, bench_get, bench_set);
criterion_main!(benches);
