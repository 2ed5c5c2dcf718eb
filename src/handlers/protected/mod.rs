// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route in this tier sits behind jwt_auth_middleware, which rejects the
// request before the handler runs unless the token verifies. Handlers read the
// caller's identity from `Extension<AuthUser>`.

pub mod auth;       // GET /auth/me
pub mod categories; // GET/POST /categories
pub mod pets;       // /pets CRUD and tag association
pub mod tags;       // GET/POST /tags
mod utils;
