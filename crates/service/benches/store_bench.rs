use criterion::{criterion_group, criterion_main, Criterion};

use service::storage::memory_store::MemoryStore;

fn bench_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();

    // pre-populate outside of the measured section
    rt.block_on(async {
        for i in 0..1_000 {
            store.put(format!("key{i}"), format!("value{i}")).await;
        }
    });

    c.bench_function("memory_store_put", |b| {
        b.to_async(&rt).iter(|| store.put("bench".to_string(), "value".to_string()));
    });

    c.bench_function("memory_store_get", |b| {
        b.to_async(&rt).iter(|| async { store.get("key500").await.unwrap() });
    });

    c.bench_function("memory_store_list_keys_1k", |b| {
        b.to_async(&rt).iter(|| store.list_keys());
    });
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
