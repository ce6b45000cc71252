#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use crate::{
        core::{
            domain::models::{ConfigError, DEFAULT_EXPIRE_MILLIS, RegistryError},
            services::{RegistryBuilder, TtlCacheManager},
        },
        infrastructure::config::TtlTable,
        tests::test_mocks::RecordingWriter,
    };

    const TABLE: &str = r#"
        [[operation]]
        component = "user_service"
        name = "find_user"
        cache_names = ["users"]
        expire_ms = 60000

        [[operation]]
        component = "order_service"
        name = "list_orders"
        cache_names = ["orders", ""]
        default_expire = true

        [[operation]]
        component = "user_service"
        name = "find_avatar"
        cache_names = ["avatars"]

        [[operation]]
        component = "user_service"
        name = "find_session"
        cache_names = ["sessions"]
        expire_ms = -1
    "#;

    #[test]
    fn groups_operations_by_component_in_file_order() {
        let components = TtlTable::from_toml_str(TABLE).unwrap().into_components();

        let names: Vec<&str> = components.iter().map(|c| c.component_name()).collect();
        assert_eq!(names, vec!["user_service", "order_service"]);
        assert_eq!(components[0].operations().len(), 3);
    }

    #[test]
    fn repeated_rows_with_different_ttls_are_rejected() {
        let raw = r#"
            [[operation]]
            component = "report_service"
            name = "load"
            cache_names = ["reports"]
            expire_ms = 1000

            [[operation]]
            component = "report_service"
            name = "load"
            cache_names = ["reports"]
            expire_ms = 2000
        "#;
        let components = TtlTable::from_toml_str(raw).unwrap().into_components();
        assert_eq!(components.len(), 1);

        let mut builder = RegistryBuilder::default();
        assert!(matches!(
            builder.scan(&components),
            Err(RegistryError::ConflictingTtl { first_ms: 1000, second_ms: 2000, .. })
        ));
    }

    #[test]
    fn table_feeds_the_registry_scan() {
        let components = TtlTable::from_toml_str(TABLE).unwrap().into_components();

        let mut builder = RegistryBuilder::default();
        builder.scan(&components).unwrap();
        let registry = builder.build();

        assert_eq!(
            registry.get("users").and_then(|c| c.ttl()),
            Some(Duration::from_millis(60_000))
        );
        assert_eq!(
            registry.get("orders").and_then(|c| c.ttl()),
            Some(Duration::from_millis(DEFAULT_EXPIRE_MILLIS as u64))
        );
        assert!(!registry.contains("avatars"));
        assert!(!registry.contains("sessions"));
        assert!(!registry.contains(""));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_table_is_valid() {
        let table = TtlTable::from_toml_str("").unwrap();
        assert!(table.operations.is_empty());

        let manager = TtlCacheManager::builder(Arc::new(RecordingWriter::new()))
            .initialize(&table.into_components())
            .unwrap();
        assert!(manager.registry().is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = TtlTable::from_toml_str(
            r#"
            [[operation]]
            component = "svc"
            name = "op"
            ttl = 10
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::TtlTableFormat(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TtlTable::load("/definitely/not/here/ttl.toml").unwrap_err();
        assert!(matches!(err, ConfigError::TtlTableIo { .. }));
    }
}
