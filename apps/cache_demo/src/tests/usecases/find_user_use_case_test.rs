#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use app_core::{UseCase, UseCaseValidatable};

    use crate::{
        app_common::AppError,
        core::{domain::models::cache_names, usecases::FindUserUseCase},
        tests::test_mocks::{MockCatalog, demo_manager},
    };

    fn use_case(catalog: Arc<MockCatalog>) -> FindUserUseCase {
        let manager = demo_manager();
        FindUserUseCase::new(manager.cache(cache_names::USERS).unwrap(), catalog)
    }

    #[tokio::test]
    async fn validate_fails_when_id_is_zero() {
        let uc = use_case(Arc::new(MockCatalog::new()));

        match uc.validate(&0).await.unwrap_err() {
            AppError::BadRequest(msg) => assert_eq!(msg, "User id must be positive"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let catalog = Arc::new(MockCatalog::with_user(1, "Ada"));
        let uc = use_case(catalog.clone());

        let first = uc.execute(1).await.unwrap();
        let second = uc.execute(1).await.unwrap();

        assert_eq!(first.as_ref().map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(first, second);
        assert_eq!(*catalog.user_loads.lock(), 1);
    }

    #[tokio::test]
    async fn missing_user_is_not_cached() {
        let catalog = Arc::new(MockCatalog::new());
        let uc = use_case(catalog.clone());

        assert_eq!(uc.execute(42).await.unwrap(), None);
        assert_eq!(uc.execute(42).await.unwrap(), None);

        // `users` disallows null values, so every miss goes to the catalog
        assert_eq!(*catalog.user_loads.lock(), 2);
    }

    #[tokio::test]
    async fn repository_errors_surface_as_cache_loader_errors() {
        let catalog = Arc::new(MockCatalog::with_user(1, "Ada"));
        catalog.set_failure("db down");
        let uc = use_case(catalog);

        match uc.execute(1).await.unwrap_err() {
            AppError::Cache(e) => assert!(e.to_string().contains("db down")),
            other => panic!("expected Cache error, got {other:?}"),
        }
    }

    #[test]
    fn users_region_has_declared_ttl() {
        let manager = demo_manager();
        let users = manager.cache(cache_names::USERS).unwrap();
        assert_eq!(users.configuration().ttl(), Some(Duration::from_millis(60_000)));
    }
}
