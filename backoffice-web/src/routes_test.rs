//! Tests for route definitions and path recognition.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, header_routes};
    use crate::session::guard::is_public;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::SignIn.to_path(), "/signin");
        assert_eq!(MainRoute::Categories.to_path(), "/category");
        assert_eq!(MainRoute::Customers.to_path(), "/customer");
        assert_eq!(MainRoute::SaleReport.to_path(), "/sale-report");
        assert_eq!(MainRoute::Settings.to_path(), "/setting");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/sale-report"), Some(MainRoute::SaleReport));
        assert_eq!(MainRoute::recognize("/terms"), Some(MainRoute::Terms));
    }

    #[test]
    fn test_public_routes_skip_layout() {
        for route in MainRoute::iter() {
            assert_eq!(
                route.uses_layout(),
                !is_public(&route.to_path()),
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_header_routes() {
        let routes = header_routes();
        assert_eq!(routes.first(), Some(&MainRoute::Home));
        assert!(routes.contains(&MainRoute::SaleReport));
        assert!(!routes.contains(&MainRoute::SignIn));
        assert!(!routes.contains(&MainRoute::NotFound));
    }

    #[test]
    fn test_translation_keys_are_unique() {
        let mut keys: Vec<_> = MainRoute::iter().map(MainRoute::translation_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MainRoute::iter().count());
    }
}
