macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// REST routes exposed by the user backend.
pub mod users {
    pub const COLLECTION: &str = api_path!("/users");
    pub const ITEM: &str = api_path!("/users/{id}");
}

pub const HEALTH: &str = api_path!("/health");

pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(route: &str, param: &str, value: impl AsRef<str>) -> String {
        route.replace(param, value.as_ref())
    }
}
