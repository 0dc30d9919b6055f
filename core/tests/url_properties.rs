use proptest::prelude::*;
use smoke_core::{check_json_well_formed, endpoint::join_url, Endpoint, HttpMethod};

prop_compose! {
    fn arb_base()(
        host in "[a-z]{1,10}",
        port in prop::option::of(1u16..=65535),
        prefix in prop::option::of("[a-z]{1,8}"),
    ) -> String {
        let mut base = format!("http://{host}");
        if let Some(port) = port {
            base.push_str(&format!(":{port}"));
        }
        if let Some(prefix) = prefix {
            base.push('/');
            base.push_str(&prefix);
        }
        base
    }
}

prop_compose! {
    fn arb_path()(segments in prop::collection::vec("[a-z0-9-]{1,8}", 1..4)) -> String {
        segments.join("/")
    }
}

proptest! {
    #[test]
    fn edge_slashes_do_not_change_the_url(
        base in arb_base(),
        path in arb_path(),
        base_slashes in 0usize..3,
        path_slashes in 0usize..3,
    ) {
        let expected = format!("{base}/{path}");
        let decorated_base = format!("{base}{}", "/".repeat(base_slashes));
        let decorated_path = format!("{}{path}", "/".repeat(path_slashes));
        prop_assert_eq!(join_url(&decorated_base, &decorated_path), expected.clone());

        let endpoint = Endpoint::new(&decorated_base, HttpMethod::Post, &decorated_path);
        prop_assert_eq!(endpoint.url(), expected);
    }

    #[test]
    fn joined_url_has_no_double_slash_after_scheme(base in arb_base(), path in arb_path()) {
        let url = join_url(&format!("{base}/"), &format!("/{path}"));
        let after_scheme = url.trim_start_matches("http://");
        prop_assert!(!after_scheme.contains("//"));
    }

    #[test]
    fn serialized_values_are_well_formed(value in any::<i64>(), text in ".{0,40}") {
        let doc = serde_json::json!({ "n": value, "s": text });
        prop_assert!(check_json_well_formed(&doc.to_string()));
    }

    #[test]
    fn truncated_objects_are_malformed(text in "[a-z]{0,20}") {
        let doc = format!("{{\"key\": \"{text}\"");
        prop_assert!(!check_json_well_formed(&doc));
    }

    #[test]
    fn check_is_deterministic(text in ".{0,40}") {
        prop_assert_eq!(check_json_well_formed(&text), check_json_well_formed(&text));
    }
}
