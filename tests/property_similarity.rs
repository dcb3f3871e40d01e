use proptest::prelude::*;
use todolist::SimilarityMatcher;

fn distance(a: &str, b: &str) -> usize {
    SimilarityMatcher::new().distance(a, b)
}

#[test]
fn test_reference_pairs() {
    assert_eq!(distance("kitten", "sitting"), 3);
    assert_eq!(distance("flaw", "lawn"), 2);
    assert_eq!(distance("", "sitting"), 7);
    assert_eq!(distance("kitten", ""), 6);
}

proptest! {
    /// Property: a string is at distance zero from itself
    #[test]
    fn prop_identity(s in ".{0,24}") {
        prop_assert_eq!(distance(&s, &s), 0);
    }

    /// Property: distance is symmetric
    #[test]
    fn prop_symmetry(s in ".{0,16}", t in ".{0,16}") {
        prop_assert_eq!(distance(&s, &t), distance(&t, &s));
    }

    /// Property: distance to the empty string is the length in chars
    #[test]
    fn prop_empty_is_length(s in ".{0,24}") {
        let len = s.chars().count();
        prop_assert_eq!(distance("", &s), len);
        prop_assert_eq!(distance(&s, ""), len);
    }

    /// Property: bounded below by the length difference, above by the longer length
    #[test]
    fn prop_bounds(s in "[a-c]{0,12}", t in "[a-c]{0,12}") {
        let (ls, lt) = (s.chars().count(), t.chars().count());
        let d = distance(&s, &t);
        prop_assert!(d >= ls.abs_diff(lt));
        prop_assert!(d <= ls.max(lt));
    }

    /// Property: triangle inequality
    #[test]
    fn prop_triangle(a in "[a-d]{0,8}", b in "[a-d]{0,8}", c in "[a-d]{0,8}") {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    /// Property: one appended char costs exactly one
    #[test]
    fn prop_single_insertion(s in "[a-z]{0,16}", ch in proptest::char::range('a', 'z')) {
        let mut longer = s.clone();
        longer.push(ch);
        prop_assert_eq!(distance(&s, &longer), 1);
    }
}
