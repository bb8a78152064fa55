//! Network URL constants for the GD Matka admin SDK.

/// Default REST API base URL (the `/api/...` paths are appended per endpoint).
pub const DEFAULT_API_URL: &str = "https://backend.gdmatka.site";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GDMATKA_API_URL";

/// Environment variable holding the admin bearer token.
pub const ADMIN_TOKEN_ENV: &str = "GDMATKA_ADMIN_TOKEN";
