//! Property tests for length bounds, uniqueness and generator determinism.

use cms_schema::prelude::*;
use proptest::prelude::*;

fn keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,7}", 0..6)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn string_min_length_matches_char_count(s in "\\PC{0,12}", min in 0usize..10) {
        let f = field("s", "S").string().min_length(min, None).unwrap();
        let ok = f.validate(&Value::from(s.as_str())).is_ok();
        prop_assert_eq!(ok, s.chars().count() >= min);
    }

    #[test]
    fn string_max_length_matches_char_count(s in "\\PC{0,12}", max in 0usize..10) {
        let f = field("s", "S").string().max_length(max, None).unwrap();
        let ok = f.validate(&Value::from(s.as_str())).is_ok();
        prop_assert_eq!(ok, s.chars().count() <= max);
    }

    #[test]
    fn number_range_is_inclusive(n in -100i64..100, lo in -50i64..0, hi in 0i64..50) {
        let f = field("n", "N")
            .number()
            .min(lo as f64, None)
            .unwrap()
            .max(hi as f64, None)
            .unwrap();
        let ok = f.validate(&Value::from(n)).is_ok();
        prop_assert_eq!(ok, lo <= n && n <= hi);
    }

    #[test]
    fn unique_agrees_with_dedup(items in prop::collection::vec(0i64..5, 0..8)) {
        let f = field("a", "A").array().unique(None).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let ok = f.validate(&Value::from(items.clone())).is_ok();
        prop_assert_eq!(ok, sorted.len() == items.len());
    }

    #[test]
    fn generated_text_is_deterministic(names in keys()) {
        let build = || {
            let shape: Shape = names
                .iter()
                .map(|n| (n.clone(), FieldNode::from(field(n.as_str(), n.as_str()).string())))
                .collect();
            schema(shape! { "doc" => field("doc", "Doc").object(shape) }).unwrap()
        };
        let text = build().type_text();
        prop_assert_eq!(&text, &build().type_text());
        for name in &names {
            let line = format!("  {}: string;\n", name);
            prop_assert!(text.contains(&line));
        }
    }
}
