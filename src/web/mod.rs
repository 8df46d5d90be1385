//! JSON web service over the recipe corpus.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! frigo-match serve
//!
//! # Custom port, custom corpus, and auto-open browser
//! frigo-match serve --port 3000 --recipes corpus.json --open
//!
//! # Bind to all interfaces
//! frigo-match serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Service name, version, and endpoint list
//! - `GET /api/recipes` - All recipes of the served corpus
//! - `POST /api/suggestions` - Rank recipes for `{fridge, expiring?, config?, recipes?}`
//! - `POST /api/match` - Explain one `{fridgeItem, ingredient}` decision
//! - `POST /api/menu` - Weekly menu and shopping list for
//!   `{fridge, weekStart?, servings?, diets?, allergens?}`
//!
//! Errors are returned as `{error, error_type, details}` with a 4xx status.

pub mod server;
