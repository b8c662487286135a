use crate::item::Item;
use crate::list::{Link, SingleList};

/// Sort `list` with a merge sort over its links.
///
/// `in_order(left, right)` tells whether `left` may stay before `right`;
/// on a tie it should return `true` so that the left operand wins.
pub(crate) fn merge_sort<'a, F>(list: &mut SingleList<'a>, mut in_order: F)
where
    F: FnMut(&Item<'a>, &Item<'a>) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let chain = list.first.take();
    list.first = sort_chain(chain, &mut in_order);
}

fn sort_chain<'a, F>(chain: Link<'a>, in_order: &mut F) -> Link<'a>
where
    F: FnMut(&Item<'a>, &Item<'a>) -> bool,
{
    if chain.as_ref().map_or(true, |node| node.next.is_none()) {
        return chain;
    }
    let (even, odd) = split_alternating(chain);
    let even = sort_chain(even, in_order);
    let odd = sort_chain(odd, in_order);
    merge(even, odd, in_order)
}

/// Deal the nodes of `chain` into two chains by position parity: positions
/// 0, 2, 4, ... go left, 1, 3, 5, ... go right. Each side keeps the relative
/// order of its nodes.
fn split_alternating(mut chain: Link<'_>) -> (Link<'_>, Link<'_>) {
    let (mut even, mut odd) = (None, None);
    let (mut even_tail, mut odd_tail) = (&mut even, &mut odd);
    let mut position = 0_usize;
    while let Some(mut node) = chain {
        chain = node.next.take();
        if position % 2 == 0 {
            even_tail = &mut even_tail.insert(node).next;
        } else {
            odd_tail = &mut odd_tail.insert(node).next;
        }
        position += 1;
    }
    (even, odd)
}

/// Merge two sorted chains by relinking their nodes, taking from `left`
/// whenever `in_order(left, right)` holds.
fn merge<'a, F>(mut left: Link<'a>, mut right: Link<'a>, in_order: &mut F) -> Link<'a>
where
    F: FnMut(&Item<'a>, &Item<'a>) -> bool,
{
    let mut merged = None;
    let mut tail = &mut merged;
    loop {
        let take_left = match (&left, &right) {
            (Some(l), Some(r)) => in_order(&l.item, &r.item),
            _ => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        tail = &mut tail.insert(node).next;
    }
    // At most one side is left; it is already sorted.
    *tail = left.or(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::{merge, split_alternating};
    use crate::item::Item;
    use crate::list::tests::{int_list, ints};
    use crate::SingleList;

    #[test]
    fn split_keeps_relative_order() {
        let mut list = int_list(&[0, 1, 2, 3, 4]);
        let (even, odd) = split_alternating(list.first.take());
        list.len = 0;
        let even = SingleList { first: even, len: 3 };
        let odd = SingleList { first: odd, len: 2 };
        assert_eq!(ints(&even), vec![0, 2, 4]);
        assert_eq!(ints(&odd), vec![1, 3]);
    }

    #[test]
    fn merge_takes_left_on_ties() {
        let mut left = int_list(&[1, 3, 5]);
        let mut right = int_list(&[1, 2, 6, 7]);
        let left_first = left.first.as_deref().map(|node| node as *const _);
        let merged = merge(
            left.first.take(),
            right.first.take(),
            &mut |a: &Item<'_>, b: &Item<'_>| a.compare(b.data()).is_le(),
        );
        (left.len, right.len) = (0, 0);
        let merged = SingleList { first: merged, len: 7 };
        assert_eq!(ints(&merged), vec![1, 1, 2, 3, 5, 6, 7]);
        assert_eq!(
            merged.first.as_deref().map(|node| node as *const _),
            left_first
        );
    }
}
