use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use record_bst::sort::{quick_sort, selection_sort};
use record_bst::{Bid, OrderedTable};

fn bid(i: usize) -> Bid {
    Bid::new(format!("{:06}", i), format!("title {}", i % 97), "General Fund", i as f64)
}

/// Builds a tree by inserting ids in ascending order, which leaves it as one long chain.
fn get_unbalanced_table(num_nodes: usize) -> OrderedTable<Bid> {
    (0..num_nodes).map(bid).collect()
}

/// Builds a tree by inserting ids so that the result is full, without any rebalancing.
fn get_balanced_table(num_nodes: usize) -> OrderedTable<Bid> {
    let xs = (0..num_nodes).collect::<Vec<_>>();
    let mut table = OrderedTable::new();
    fill_balanced_table(&mut table, &xs);
    table
}

/// Recursive helper for [`get_balanced_table`].
fn fill_balanced_table(table: &mut OrderedTable<Bid>, xs: &[usize]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        table.insert(bid(xs[mid]));
        fill_balanced_table(table, &xs[..mid]);
        fill_balanced_table(table, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a table.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of tables before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTable<Bid>, &str)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_id = format!("{:06}", num_nodes - 1);

        let table_tests = [
            ("unbalanced", get_unbalanced_table(num_nodes)),
            ("balanced", get_balanced_table(num_nodes)),
        ];
        for (name, table) in table_tests {
            let id = BenchmarkId::new(name, num_nodes);

            group.bench_function(id, |b| {
                b.iter_batched(
                    || table.clone(),
                    |mut table| f(&mut table, black_box(largest_id.as_str())),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn sort_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut [Bid])) {
    let mut group = c.benchmark_group(name);

    for size in [16, 256, 2048] {
        // Reverse id order with repeating titles, so every sort has ties to deal with.
        let bids: Vec<Bid> = (0..size).rev().map(bid).collect();

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_batched(
                || bids.clone(),
                |mut bids| f(&mut bids),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |table, id| {
        let _node = black_box(table.search(id));
    });
    bench_helper(c, "parent", |table, id| {
        if let Some(node) = table.search(id) {
            let _parent = black_box(table.get_parent(node));
        }
    });
    bench_helper(c, "remove", |table, id| {
        table.remove(id);
    });
    bench_helper(c, "insert", |table, _| {
        table.insert(bid(usize::MAX / 2));
    });
    bench_helper(c, "search-miss", |table, _| {
        let _node = black_box(table.search("missing"));
    });

    sort_helper(c, "selection_sort", |bids| selection_sort(bids));
    sort_helper(c, "quick_sort", |bids| quick_sort(bids));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
