//! Identity-aware indexed iteration.
//!
//! List-diffing structures should key elements by a stable identity plus the
//! element's current index, not by structural equality — otherwise two
//! value-equal elements swap associations when the list reorders.

/// An element paired with its stable identity and current index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Keyed<I, T> {
    pub id: I,
    pub index: usize,
    pub item: T,
}

/// Iterates `items` with each element's identity (from `id_of`) and position.
pub fn keyed_by<'a, T, I, F>(
    items: &'a [T],
    id_of: F,
) -> impl Iterator<Item = Keyed<I, &'a T>> + 'a
where
    F: Fn(&T) -> I + 'a,
{
    items
        .iter()
        .enumerate()
        .map(move |(index, item)| Keyed { id: id_of(item), index, item })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_list_positions() {
        let items = ["a", "b", "c"];
        let keyed: Vec<_> = keyed_by(&items, |s| *s).collect();
        assert_eq!(keyed[0].index, 0);
        assert_eq!(keyed[2].index, 2);
        assert_eq!(keyed[1].item, &"b");
    }

    #[test]
    fn identity_travels_with_the_element() {
        let mut items = [("x", 1), ("y", 2)];
        items.swap(0, 1);
        let keyed: Vec<_> = keyed_by(&items, |e| e.0).collect();
        // "y" moved to index 0 but kept its identity.
        assert_eq!(keyed[0].id, "y");
        assert_eq!(keyed[0].index, 0);
        assert_eq!(keyed[1].id, "x");
    }
}
