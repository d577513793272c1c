use record_bst::{Bid, OrderedTable};

use std::collections::HashMap;

use quickcheck_macros::quickcheck;

use crate::{bid, id, Op};

/// Applies a set of operations to a table and to a count of each id.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same ids in the table.
fn do_ops(ops: &[Op], table: &mut OrderedTable<Bid>, counts: &mut HashMap<String, usize>) {
    for op in ops {
        match *op {
            Op::Insert(k, t) => {
                table.insert(bid(k, t));
                *counts.entry(id(k)).or_default() += 1;
            }
            Op::Remove(k) => {
                if table.remove(&id(k)).is_some() {
                    if let Some(n) = counts.get_mut(&id(k)) {
                        *n -= 1;
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut table = OrderedTable::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut table, &mut counts);
    counts.iter().all(|(k, n)| table.contains(k) == (*n > 0))
        && table.len() == counts.values().sum::<usize>()
}

#[quickcheck]
fn size_counts_duplicates(keys: Vec<u8>) -> bool {
    let table: OrderedTable<Bid> = keys.iter().map(|k| bid(*k, 0)).collect();
    table.len() == keys.len()
}

#[quickcheck]
fn contains(xs: Vec<u8>) -> bool {
    let table: OrderedTable<Bid> = xs.iter().map(|x| bid(*x, 0)).collect();

    xs.iter().all(|x| table.find(&id(*x)).map(|b| b.id.clone()) == Some(id(*x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut table: OrderedTable<Bid> = xs.iter().map(|x| bid(*x, 0)).collect();
    for delete in &deletes {
        table.remove(&id(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // One node goes per delete, even if the id was inserted more than once.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    still_present.iter().all(|x| table.contains(&id(*x)))
        && table.len() == still_present.len()
}

#[quickcheck]
fn removing_keeps_order(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut table: OrderedTable<Bid> = xs.iter().map(|x| bid(*x, 0)).collect();
    for delete in &deletes {
        table.remove(&id(*delete));
    }

    let ids: Vec<&str> = table.in_order().map(|b| b.id.as_str()).collect();
    ids.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn traversals_visit_everything(xs: Vec<u8>) -> bool {
    let table: OrderedTable<Bid> = xs.iter().map(|x| bid(*x, 0)).collect();

    let mut pre: Vec<&str> = table.pre_order().map(|b| b.id.as_str()).collect();
    let mut post: Vec<&str> = table.post_order().map(|b| b.id.as_str()).collect();
    pre.sort_unstable();
    post.sort_unstable();

    let ordered: Vec<&str> = table.in_order().map(|b| b.id.as_str()).collect();
    pre == ordered && post == ordered
}
