// handlers/public/mod.rs - Public handlers (no authentication)
//
// Token acquisition and liveness endpoints. No identity context is available
// here; every input is untrusted.

pub mod auth;   // POST /auth/login, POST /auth/register
pub mod system; // GET /, GET /health
