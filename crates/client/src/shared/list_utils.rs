use std::collections::HashMap;
use std::hash::Hash;

/// Index a list by key in one pass. Values under each key keep the
/// relative order they had in the input.
pub fn group_by_key<T, K, F>(items: Vec<T>, key_of: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_of(&item)).or_default().push(item);
    }
    groups
}

/// Join related records onto their owners: every primary record is
/// paired with the sublist of `secondary` whose foreign key matches
/// its key, in original relative order. Primary order is preserved;
/// owners without matches get an empty list. O(n + m).
pub fn join_by_foreign_key<P, S, K, KP, KF>(
    primary: Vec<P>,
    secondary: Vec<S>,
    primary_key: KP,
    foreign_key: KF,
) -> Vec<(P, Vec<S>)>
where
    K: Eq + Hash,
    S: Clone,
    KP: Fn(&P) -> K,
    KF: Fn(&S) -> K,
{
    let groups = group_by_key(secondary, foreign_key);
    primary
        .into_iter()
        .map(|record| {
            let related = groups
                .get(&primary_key(&record))
                .cloned()
                .unwrap_or_default();
            (record, related)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_preserves_order_and_sublists() {
        let primary = vec!["P1", "P2", "P3"];
        let secondary = vec![
            ("P2", "f1"),
            ("P1", "f2"),
            ("P2", "f3"),
        ];

        let joined = join_by_foreign_key(primary, secondary, |p| *p, |s| s.0);

        assert_eq!(joined.len(), 3);
        assert_eq!(joined[0].0, "P1");
        assert_eq!(joined[0].1, vec![("P1", "f2")]);
        assert_eq!(joined[1].0, "P2");
        assert_eq!(joined[1].1, vec![("P2", "f1"), ("P2", "f3")]);
        assert_eq!(joined[2].0, "P3");
        assert!(joined[2].1.is_empty());
    }

    #[test]
    fn empty_secondary_gives_every_owner_an_empty_list() {
        let primary = vec![10, 20];
        let secondary: Vec<(i32, &str)> = Vec::new();

        let joined = join_by_foreign_key(primary, secondary, |p| *p, |s| s.0);

        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|(_, related)| related.is_empty()));
    }

    #[test]
    fn duplicate_owners_each_get_the_full_sublist() {
        let primary = vec!["P1", "P1"];
        let secondary = vec![("P1", 1), ("P1", 2)];

        let joined = join_by_foreign_key(primary, secondary, |p| *p, |s| s.0);

        assert_eq!(joined[0].1, vec![("P1", 1), ("P1", 2)]);
        assert_eq!(joined[1].1, vec![("P1", 1), ("P1", 2)]);
    }

    #[test]
    fn group_by_key_keeps_relative_order() {
        let grouped = group_by_key(vec![1, 2, 3, 4, 5], |n| n % 2);
        assert_eq!(grouped[&0], vec![2, 4]);
        assert_eq!(grouped[&1], vec![1, 3, 5]);
    }
}
