// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token verified by jwt_auth_middleware)
pub mod public;    // /, /health, /auth/login, /auth/register
pub mod protected; // /auth/me, /pets, /categories, /tags
