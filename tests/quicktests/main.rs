use quickcheck::{Arbitrary, Gen};
use record_bst::Bid;

mod ordered_table;
mod sort;

/// An enum for the various kinds of "things" to do to
/// a table in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert a bid with this id and title
    Insert(u8, u8),
    /// Remove a bid with this id
    Remove(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(u8::arbitrary(g), u8::arbitrary(g))
        } else {
            Op::Remove(u8::arbitrary(g))
        }
    }
}

/// Zero-padded so ids compare the same way as the numbers they came from.
pub fn id(key: u8) -> String {
    format!("{:03}", key)
}

/// Builds a bid whose title is one of a few values, so equal titles are common.
pub fn bid(key: u8, title: u8) -> Bid {
    let title = ["Chair", "Desk", "Lamp"][title as usize % 3];
    Bid::new(id(key), title, "General Fund", f64::from(key))
}
