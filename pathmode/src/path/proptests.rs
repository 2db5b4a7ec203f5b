//! Property-based tests for path conversion.

use super::{ConversionContext, ConversionRule, PathConverter, PathSyntax, ProjectAnchor};
use crate::detect::ExecutionMode;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[A-Za-z0-9_-]{1,12}",
        1 => Just("project".to_string()),
        1 => Just("Zen-MCP-Server".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..6)
}

// Any path shape the converter recognizes, with mixed separators.
fn input_strategy() -> impl Strategy<Value = String> {
    (0..6usize, "[a-zA-Z]", segments_strategy(), any::<bool>()).prop_map(
        |(shape, drive, segments, backslash)| {
            let sep = if backslash { "\\" } else { "/" };
            let body = segments.join(sep);
            match shape {
                0 => format!("{drive}:{sep}{body}"),
                1 => format!("\\\\{body}"),
                2 => format!("/mnt/{}/{body}", drive.to_lowercase()),
                3 => format!("/{}", segments.join("/")),
                4 => format!("/app/project/{}", segments.join("/")),
                _ => body,
            }
        },
    )
}

fn container() -> PathConverter {
    let ctx = ConversionContext::new(ExecutionMode::Containerized, "/app/project", "/workspace")
        .with_host_workspace_root(Some(r"C:\Users\dev\external".to_string()));
    PathConverter::new(ctx, ProjectAnchor::default())
}

fn host() -> PathConverter {
    PathConverter::new(ConversionContext::default(), ProjectAnchor::default())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // convert(convert(p)) == convert(p)
    #[test]
    fn container_conversion_idempotent(input in input_strategy()) {
        let converter = container();
        let once = converter.convert(&input);
        prop_assert_eq!(converter.convert(&once), once);
    }

    // Converted paths are canonical and use only forward slashes.
    #[test]
    fn container_output_is_canonical(input in input_strategy()) {
        let converter = container();
        let converted = converter.convert(&input);
        prop_assert!(!converted.contains('\\'));
        prop_assert_eq!(converter.classify(&converted), PathSyntax::AlreadyCanonical);
    }

    // `..` is resolved before rehoming, so output never climbs out of a root.
    #[test]
    fn container_output_has_no_parent_segments(input in input_strategy()) {
        let converted = container().convert(&input);
        prop_assert!(!super::syntax::has_parent_segment(&converted), "{} -> {}", input, converted);
        let under_root = ["/app/project", "/workspace"]
            .iter()
            .any(|root| super::syntax::is_under_root(&converted, root));
        prop_assert!(under_root);
    }

    #[test]
    fn host_conversion_is_identity(input in input_strategy().prop_filter("non-empty", |s| !s.is_empty())) {
        let converted = host().convert_detailed(&input);
        prop_assert_eq!(converted.path, input);
        prop_assert_eq!(converted.rule, ConversionRule::Identity);
    }

    // Classification never depends on which separator was used.
    #[test]
    fn separator_choice_does_not_change_windows_class(drive in "[a-zA-Z]", segments in segments_strategy()) {
        let roots = ["/app/project", "/workspace"];
        let forward = format!("{drive}:/{}", segments.join("/"));
        let backward = format!("{drive}:\\{}", segments.join("\\"));
        prop_assert_eq!(super::classify(&forward, &roots), super::classify(&backward, &roots));
    }
}
