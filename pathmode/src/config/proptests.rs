//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::detect::OverrideMode;
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = OverrideMode> {
    prop_oneof![
        Just(OverrideMode::Auto),
        Just(OverrideMode::Docker),
        Just(OverrideMode::Local),
    ]
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,10}", 1..4).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn anchors_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z-]{1,12}", 0..4)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(mode_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(root_strategy()),
        prop::option::of(root_strategy()),
        prop::option::of(anchors_strategy()),
    )
        .prop_map(|(mode, debug, host_workspace_root, app_root, project_anchors)| Config {
            mode,
            debug,
            host_workspace_root,
            app_root,
            project_anchors,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging preserves non-None values from higher precedence
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.mode, high.mode.or(low.mode));
        prop_assert_eq!(merged.debug, high.debug.or(low.debug));
        prop_assert_eq!(&merged.app_root, if high.app_root.is_some() { &high.app_root } else { &low.app_root });
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Every anchor from either side survives a merge, and none is duplicated
    #[test]
    fn config_merge_anchors_accumulate(low in anchors_strategy(), high in anchors_strategy()) {
        let mut merged = Config { project_anchors: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut merged, &Config { project_anchors: Some(high.clone()), ..Default::default() });

        let result = merged.project_anchors.unwrap_or_default();
        for token in low.iter().chain(high.iter()) {
            prop_assert!(result.contains(token));
        }
        for token in &high {
            prop_assert!(result.iter().filter(|t| *t == token).count() <= low.iter().filter(|t| *t == token).count().max(1));
        }
    }

    // Distinct absolute roots always validate
    #[test]
    fn distinct_absolute_roots_are_valid(project in root_strategy(), workspace in root_strategy()) {
        prop_assume!(project != workspace);
        let config = Config {
            container_project_root: Some(project),
            container_workspace_root: Some(workspace),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
