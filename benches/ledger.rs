use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use shop_ledger::{InventoryLedger, Money};

/// Generates valid restock/sell operation sequences for benchmarking.
///
/// Pattern per product (repeating):
/// 1. Add 10 units at $1.00 / $2.00
/// 2. Sell 5 units
///
/// Sales deposit more than restocks withdraw, so a large starting balance
/// never runs dry.
struct OpGenerator {
    names: Vec<String>,
    total: u32,
    step: u32,
}

enum Op {
    Add { product: usize },
    Sell { product: usize },
}

impl OpGenerator {
    fn new(num_products: usize, total: u32) -> Self {
        Self {
            names: (0..num_products).map(|i| format!("product-{i}")).collect(),
            total,
            step: 0,
        }
    }
}

impl Iterator for OpGenerator {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.total {
            return None;
        }
        let product = (self.step as usize / 2) % self.names.len();
        let op = if self.step % 2 == 0 {
            Op::Add { product }
        } else {
            Op::Sell { product }
        };
        self.step += 1;
        Some(op)
    }
}

fn apply_all(generator: OpGenerator) -> InventoryLedger {
    let mut ledger = InventoryLedger::new(Money::from_cents(1_000_000_00));
    let names = generator.names.clone();
    for op in generator {
        let result = match op {
            Op::Add { product } => ledger.add_stock(
                &names[product],
                10,
                Money::from_cents(100),
                Money::from_cents(200),
            ),
            Op::Sell { product } => ledger.sell_stock(&names[product], 5),
        };
        let _ = black_box(result);
    }
    ledger
}

fn bench_restock_and_sell(c: &mut Criterion) {
    let mut group = c.benchmark_group("restock_and_sell");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| apply_all(OpGenerator::new(50, count)));
        });
    }

    group.finish();
}

fn bench_catalog_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_width");

    // Same op count over catalogs of different sizes; lookups are linear
    // scans, so this tracks how catalog width costs.
    for products in [10usize, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(products),
            &products,
            |b, &products| {
                b.iter(|| apply_all(OpGenerator::new(products, 10_000)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_restock_and_sell, bench_catalog_width);
criterion_main!(benches);
