use record_bst::sort::{quick_sort, selection_sort};
use record_bst::Bid;

use quickcheck_macros::quickcheck;

use crate::bid;

fn bids(pairs: &[(u8, u8)]) -> Vec<Bid> {
    pairs.iter().map(|(k, t)| bid(*k, *t)).collect()
}

fn titles_sorted(bids: &[Bid]) -> bool {
    bids.windows(2).all(|w| w[0].title <= w[1].title)
}

#[quickcheck]
fn both_sorts_order_titles(pairs: Vec<(u8, u8)>) -> bool {
    let mut selected = bids(&pairs);
    let mut quick = bids(&pairs);
    selection_sort(&mut selected);
    quick_sort(&mut quick);

    let titles = |bids: &[Bid]| bids.iter().map(|b| b.title.clone()).collect::<Vec<_>>();
    titles_sorted(&selected) && titles_sorted(&quick) && titles(&selected) == titles(&quick)
}

#[quickcheck]
fn selection_sort_ties_by_id(pairs: Vec<(u8, u8)>) -> bool {
    let mut sorted = bids(&pairs);
    selection_sort(&mut sorted);

    sorted
        .windows(2)
        .all(|w| w[0].title < w[1].title || w[0].id <= w[1].id)
}

#[quickcheck]
fn resorting_sorted_input(pairs: Vec<(u8, u8)>) -> bool {
    let mut once = bids(&pairs);
    selection_sort(&mut once);

    let mut again = once.clone();
    selection_sort(&mut again);
    let mut quick_again = once.clone();
    quick_sort(&mut quick_again);

    let titles = |bids: &[Bid]| bids.iter().map(|b| b.title.clone()).collect::<Vec<_>>();
    again == once && titles(&quick_again) == titles(&once)
}
