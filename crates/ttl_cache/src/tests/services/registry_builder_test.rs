#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{
        core::{
            domain::models::{
                CacheExpire, CachedOperation, ConflictPolicy, DEFAULT_EXPIRE_MILLIS, KeyPrefix,
                RegistryError,
            },
            services::RegistryBuilder,
        },
        tests::test_mocks::{component, names},
    };

    fn ttl_of(builder: RegistryBuilder, name: &str) -> Option<Duration> {
        builder.build().get(name).and_then(|cfg| cfg.ttl())
    }

    // ---------- register ----------

    #[test]
    fn default_declaration_uses_default_expire() {
        assert_eq!(CacheExpire::default().expire, 1000 * 60 * 50 * 24);
        assert_eq!(DEFAULT_EXPIRE_MILLIS, 72_000_000);

        let mut builder = RegistryBuilder::default();
        builder.register(&names(&["daily"]), Some(&CacheExpire::default()));

        assert_eq!(
            ttl_of(builder, "daily"),
            Some(Duration::from_millis(72_000_000))
        );
    }

    #[test]
    fn non_positive_ttl_is_not_registered() {
        let mut builder = RegistryBuilder::default();

        assert_eq!(builder.register(&names(&["orders"]), Some(&CacheExpire::millis(0))), 0);
        assert_eq!(builder.register(&names(&["orders"]), Some(&CacheExpire::millis(-5))), 0);

        assert!(!builder.build().contains("orders"));
    }

    #[test]
    fn missing_declaration_is_not_registered() {
        let mut builder = RegistryBuilder::default();
        assert_eq!(builder.register(&names(&["orders"]), None), 0);
        assert!(builder.is_empty());
    }

    #[test]
    fn empty_names_are_skipped() {
        let mut builder = RegistryBuilder::default();
        let registered = builder.register(&names(&["", "valid"]), Some(&CacheExpire::millis(1000)));

        assert_eq!(registered, 1);

        let registry = builder.build();
        assert!(registry.contains("valid"));
        assert!(!registry.contains(""));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_overwrites_previous_entry() {
        let mut builder = RegistryBuilder::default();
        builder.register(&names(&["users"]), Some(&CacheExpire::millis(1000)));
        builder.register(&names(&["users"]), Some(&CacheExpire::millis(5000)));

        let registry = builder.build();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("users").and_then(|c| c.ttl()),
            Some(Duration::from_millis(5000))
        );
    }

    #[test]
    fn names_registered_together_are_independent_entries() {
        let mut builder = RegistryBuilder::default();
        builder.register(&names(&["x", "y"]), Some(&CacheExpire::millis(3000)));
        builder.register(&names(&["y"]), Some(&CacheExpire::millis(9000)));

        let registry = builder.build();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("x").and_then(|c| c.ttl()),
            Some(Duration::from_millis(3000))
        );
        assert_eq!(
            registry.get("y").and_then(|c| c.ttl()),
            Some(Duration::from_millis(9000))
        );
    }

    #[test]
    fn registered_configuration_disables_nulls_and_uses_builder_serializers() {
        let mut builder = RegistryBuilder::default().with_key_prefix(KeyPrefix::Prefixed("app:".into()));
        builder.register(&names(&["users"]), Some(&CacheExpire::millis(1000)));

        let registry = builder.build();
        let cfg = registry.get("users").expect("users registered");

        assert!(!cfg.allow_cache_null_values());
        assert_eq!(cfg.keys().name(), "string");
        assert_eq!(cfg.values().name(), "json");
        assert_eq!(cfg.key_prefix_for("users"), "app:users::");
    }

    #[test]
    fn overwrite_keeps_first_registration_order() {
        let mut builder = RegistryBuilder::default();
        builder.register(&names(&["a", "b", "c"]), Some(&CacheExpire::millis(1)));
        builder.register(&names(&["a"]), Some(&CacheExpire::millis(2)));

        let registry = builder.build();
        let order: Vec<&str> = registry.cache_names().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    // ---------- scan ----------

    #[test]
    fn scan_only_registers_operations_with_both_markers() {
        let components = vec![component(
            "service",
            vec![
                CachedOperation::new("method_a").cacheable(["a"]).expire(2000),
                CachedOperation::new("method_b").cacheable(["b"]),
                CachedOperation::new("method_c").expire(4000),
            ],
        )];

        let mut builder = RegistryBuilder::default();
        builder.scan(&components).expect("scan ok");

        let registry = builder.build();
        assert_eq!(
            registry.get("a").and_then(|c| c.ttl()),
            Some(Duration::from_millis(2000))
        );
        assert!(!registry.contains("b"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn scanning_twice_gives_the_same_registry() {
        let components = vec![
            component(
                "users",
                vec![CachedOperation::new("find").cacheable(["users", "people"]).expire(1500)],
            ),
            component(
                "orders",
                vec![CachedOperation::new("list").cacheable(["orders"]).default_expire()],
            ),
        ];

        let mut once = RegistryBuilder::default();
        once.scan(&components).expect("scan ok");

        let mut twice = RegistryBuilder::default();
        twice.scan(&components).expect("first scan ok");
        twice.scan(&components).expect("second scan ok");

        assert_eq!(once.build(), twice.build());
    }

    #[test]
    fn scan_rejects_conflicting_ttls_by_default() {
        let components = vec![
            component(
                "first",
                vec![CachedOperation::new("load").cacheable(["shared"]).expire(1000)],
            ),
            component(
                "second",
                vec![CachedOperation::new("load").cacheable(["shared"]).expire(2000)],
            ),
        ];

        let mut builder = RegistryBuilder::default();
        let err = builder.scan(&components).unwrap_err();

        assert_eq!(
            err,
            RegistryError::ConflictingTtl {
                cache_name: "shared".into(),
                first_operation: "first::load".into(),
                first_ms: 1000,
                second_operation: "second::load".into(),
                second_ms: 2000,
            }
        );
    }

    #[test]
    fn same_named_operations_with_different_ttls_conflict() {
        let components = vec![component(
            "svc",
            vec![
                CachedOperation::new("load").cacheable(["shared"]).expire(1000),
                CachedOperation::new("load").cacheable(["shared"]).expire(2000),
            ],
        )];

        let mut builder = RegistryBuilder::default();
        assert_eq!(
            builder.scan(&components),
            Err(RegistryError::ConflictingTtl {
                cache_name: "shared".into(),
                first_operation: "svc::load".into(),
                first_ms: 1000,
                second_operation: "svc::load".into(),
                second_ms: 2000,
            })
        );
    }

    #[test]
    fn same_named_operations_last_wins_is_stable_across_rescans() {
        let components = vec![component(
            "svc",
            vec![
                CachedOperation::new("load").cacheable(["shared"]).expire(1000),
                CachedOperation::new("load").cacheable(["shared"]).expire(2000),
            ],
        )];

        let mut once = RegistryBuilder::default().with_conflict_policy(ConflictPolicy::LastWins);
        once.scan(&components).unwrap();

        let mut twice = RegistryBuilder::default().with_conflict_policy(ConflictPolicy::LastWins);
        twice.scan(&components).unwrap();
        twice.scan(&components).unwrap();

        let (once, twice) = (once.build(), twice.build());
        assert_eq!(once, twice);
        assert_eq!(
            once.get("shared").and_then(|c| c.ttl()),
            Some(Duration::from_millis(2000))
        );
    }

    #[test]
    fn disabled_key_prefix_falls_back_to_cache_name_prefix() {
        let mut builder = RegistryBuilder::default().with_key_prefix(KeyPrefix::Disabled);
        builder.register(&names(&["users", "orders"]), Some(&CacheExpire::millis(1000)));

        let registry = builder.build();
        assert_eq!(registry.get("users").unwrap().key_prefix_for("users"), "users::");
        assert_eq!(registry.get("orders").unwrap().key_prefix_for("orders"), "orders::");
    }

    #[test]
    fn scan_accepts_same_ttl_from_different_operations() {
        let components = vec![component(
            "service",
            vec![
                CachedOperation::new("by_id").cacheable(["shared"]).expire(1000),
                CachedOperation::new("by_name").cacheable(["shared"]).expire(1000),
            ],
        )];

        let mut builder = RegistryBuilder::default();
        assert!(builder.scan(&components).is_ok());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn last_wins_policy_keeps_later_declaration() {
        let components = vec![
            component(
                "first",
                vec![CachedOperation::new("load").cacheable(["shared"]).expire(1000)],
            ),
            component(
                "second",
                vec![CachedOperation::new("load").cacheable(["shared"]).expire(2000)],
            ),
        ];

        let mut builder = RegistryBuilder::default().with_conflict_policy(ConflictPolicy::LastWins);
        builder.scan(&components).expect("last wins never fails");

        assert_eq!(ttl_of(builder, "shared"), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn disabled_override_does_not_conflict() {
        let components = vec![component(
            "service",
            vec![
                CachedOperation::new("cached").cacheable(["shared"]).expire(1000),
                CachedOperation::new("disabled").cacheable(["shared"]).expire(0),
            ],
        )];

        let mut builder = RegistryBuilder::default();
        builder.scan(&components).expect("non-positive ttl is ignored");

        assert_eq!(ttl_of(builder, "shared"), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn malformed_component_aborts_scan() {
        let components = vec![component(
            "broken",
            vec![CachedOperation::new("").cacheable(["x"]).expire(1000)],
        )];

        let mut builder = RegistryBuilder::default();
        match builder.scan(&components) {
            Err(RegistryError::MalformedComponent { component, .. }) => {
                assert_eq!(component, "broken")
            }
            other => panic!("expected MalformedComponent, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_component_aborts_scan() {
        let components = vec![component("  ", vec![])];

        let mut builder = RegistryBuilder::default();
        assert!(matches!(
            builder.scan(&components),
            Err(RegistryError::MalformedComponent { .. })
        ));
    }
}
