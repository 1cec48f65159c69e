use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;
use storefront_core::cache::{CacheConfig, ProductCache, cache_key};

fn product(id: u64) -> Value {
    json!({"id": id, "name": "Camisa", "urlKey": format!("camisa-{id}")})
}

fn bench_cache_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_operations");

    group.bench_function("cache_hit", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache = ProductCache::new(CacheConfig::new());

        rt.block_on(async {
            cache.set("product/camisa-1", product(1)).await;
        });

        b.iter(|| {
            rt.block_on(async {
                let result = cache.get(black_box("product/camisa-1")).await;
                black_box(result);
            });
        });
    });

    group.bench_function("cache_miss", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache: ProductCache<Value> = ProductCache::new(CacheConfig::new());

        b.iter(|| {
            rt.block_on(async {
                let result = cache.get(black_box("product/missing")).await;
                black_box(result);
            });
        });
    });

    group.bench_function("cache_set", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache = ProductCache::new(CacheConfig::new());
        let mut counter = 0u64;

        b.iter(|| {
            rt.block_on(async {
                cache
                    .set(
                        black_box(&format!("product/camisa-{counter}")),
                        black_box(product(counter)),
                    )
                    .await;
            });
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    // Every insert past the warm-up evicts the least recently used key
    group.bench_function("set_at_capacity", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache = ProductCache::with_capacity(100, 10);
        let mut counter = 0u64;

        rt.block_on(async {
            for i in 0..100 {
                cache.set(&format!("warm-{i}"), product(i)).await;
            }
        });

        b.iter(|| {
            rt.block_on(async {
                cache
                    .set(&format!("product/{counter}"), black_box(product(counter)))
                    .await;
            });
            counter += 1;
        });
    });

    group.bench_function("purge_expired", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache = ProductCache::with_capacity(100, 10);

        rt.block_on(async {
            for i in 0..100 {
                cache.set(&format!("product/{i}"), product(i)).await;
            }
        });

        b.iter(|| {
            rt.block_on(async {
                black_box(cache.purge_expired().await);
            });
        });
    });

    group.finish();
}

fn bench_concurrent_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_access");

    group.bench_function("concurrent_reads", |b| {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let cache = ProductCache::new(CacheConfig::new());

        rt.block_on(async {
            for i in 0..10 {
                cache.set(&format!("product/{i}"), product(i)).await;
            }
        });

        b.iter(|| {
            rt.block_on(async {
                let mut handles = vec![];
                for i in 0..10 {
                    let cache_clone = cache.clone();
                    let handle = tokio::spawn(async move {
                        cache_clone.get(&format!("product/{i}")).await
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    black_box(handle.await.unwrap());
                }
            });
        });
    });

    group.finish();
}

fn bench_cache_key(c: &mut Criterion) {
    c.bench_function("cache_key", |b| {
        b.iter(|| black_box(cache_key(black_box(&["/product/", "camisa-roja", ""]))));
    });
}

criterion_group!(
    benches,
    bench_cache_operations,
    bench_eviction,
    bench_concurrent_access,
    bench_cache_key
);
criterion_main!(benches);
