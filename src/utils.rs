use std::collections::HashSet;

// Number of distinct strings in `entries`, compared by exact equality.
pub fn count_distinct<S: AsRef<str>>(entries: &[S]) -> usize {
    let set: HashSet<&str> = entries.iter().map(|e| e.as_ref()).collect();
    set.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        assert_eq!(count_distinct(&["Paris", "Paris", "London"]), 2);
    }

    #[test]
    fn empty_is_zero() {
        let entries: Vec<String> = Vec::new();
        assert_eq!(count_distinct(&entries), 0);
    }

    #[test]
    fn no_normalization() {
        // Case and surrounding whitespace both make names distinct
        let entries = ["paris", "Paris", "Paris ", " Paris", "Paris"];
        assert_eq!(count_distinct(&entries), 4);
    }

    #[test]
    fn order_does_not_matter() {
        let a = ["A", "B", "A", "C", "B"];
        let b = ["B", "B", "C", "A", "A"];
        assert_eq!(count_distinct(&a), count_distinct(&b));
    }

    #[test]
    fn never_exceeds_entry_count() {
        let entries = ["x", "y", "z", "", "x y"];
        assert_eq!(count_distinct(&entries), entries.len());
    }
}
