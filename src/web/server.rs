use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::recipe::Recipe;
use crate::corpus::store::RecipeCorpus;
use crate::filter::DietProfile;
use crate::lexicon::resolver::LexicalResolver;
use crate::matching::engine::{RankingEngine, SuggestionConfig};
use crate::matching::matcher::{IngredientMatcher, MatchDecision};
use crate::planning::menu::{plan_week, week_start, DEFAULT_SERVINGS};
use crate::planning::shopping::shopping_list;
use crate::utils::validation::{
    validate_servings, validate_term, validate_terms, ValidationError, MAX_FRIDGE_ITEMS,
    MAX_RECIPES,
};

/// Largest accepted request body; room for a full inline corpus
pub const MAX_BODY_SIZE: usize = 4 * 1024 * 1024; // 4MB

/// Shared application state
pub struct AppState {
    pub corpus: RecipeCorpus,
    pub resolver: LexicalResolver,
}

/// Error body of every failed request
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

type ApiResult<T> = Result<Json<T>, Response>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub fridge: Vec<String>,
    #[serde(default)]
    pub expiring: Vec<String>,
    #[serde(default)]
    pub config: SuggestionConfig,
    /// Rank these recipes instead of the served corpus
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub fridge_item: String,
    pub ingredient: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    #[serde(default)]
    pub fridge: Vec<String>,
    /// Any day of the week to plan
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub custom_exclusion_categories: Vec<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn error_reply(status: StatusCode, error_type: &str, message: &str) -> Response {
    (
        status,
        Json(create_safe_error_response(error_type, message, None)),
    )
        .into_response()
}

#[allow(clippy::needless_pass_by_value)] // Used with map_err
fn validation_failure(err: ValidationError) -> Response {
    error_reply(StatusCode::BAD_REQUEST, "validation_error", &err.to_string())
}

#[allow(clippy::needless_pass_by_value)] // Used with map_err
fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
    error_reply(
        rejection.status(),
        "invalid_request",
        "Request body is not valid JSON for this endpoint",
    )
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the corpus cannot
/// be loaded, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router over the embedded corpus.
///
/// Per-IP rate limiting needs the peer address, so it is added by [`run`]
/// rather than here.
///
/// # Errors
///
/// Returns an error if the embedded corpus cannot be loaded.
pub fn create_router() -> anyhow::Result<Router> {
    let corpus = RecipeCorpus::load_embedded()?;
    Ok(router_with_corpus(corpus))
}

/// Create the application router over `corpus`, with every route and
/// middleware except rate limiting
pub fn router_with_corpus(corpus: RecipeCorpus) -> Router {
    let state = Arc::new(AppState {
        corpus,
        resolver: LexicalResolver::french(),
    });

    Router::new()
        .route("/", get(index_handler))
        .route("/api/recipes", get(recipes_handler))
        .route("/api/suggestions", post(suggestions_handler))
        .route("/api/match", post(match_handler))
        .route("/api/menu", post(menu_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                .layer(ConcurrencyLimitLayer::new(100))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let corpus = match &args.recipes {
        Some(path) => RecipeCorpus::load_from_file(path)?,
        None => RecipeCorpus::load_embedded()?,
    };
    let recipe_count = corpus.len();

    // 10 requests per second per IP, bursts of 50
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    let app = router_with_corpus(corpus).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    tracing::info!(%addr, recipes = recipe_count, "Starting frigo-match web server");
    println!("Starting frigo-match web server at http://{addr}");

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!("Could not open browser: {e}");
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn index_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /api/recipes",
            "POST /api/suggestions",
            "POST /api/match",
            "POST /api/menu",
        ],
    }))
}

/// Return the served corpus
async fn recipes_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.corpus.len(),
        "recipes": state.corpus.recipes,
    }))
}

/// Rank recipes for the posted fridge contents
async fn suggestions_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> ApiResult<serde_json::Value> {
    let start_time = Instant::now();
    let Json(request) = payload.map_err(invalid_body)?;

    validate_terms(&request.fridge, "fridge items", MAX_FRIDGE_ITEMS)
        .map_err(validation_failure)?;

    let mut config = request.config;
    config.validate().map_err(validation_failure)?;
    if !request.expiring.is_empty() {
        config
            .prioritize_expiring
            .get_or_insert_with(Vec::new)
            .extend(request.expiring);
    }
    validate_terms(config.near_expiry(), "expiring items", MAX_FRIDGE_ITEMS)
        .map_err(validation_failure)?;

    let recipes: &[Recipe] = match &request.recipes {
        Some(recipes) if recipes.len() > MAX_RECIPES => {
            return Err(validation_failure(ValidationError::TooManyItems {
                what: "recipes",
                max: MAX_RECIPES,
            }));
        }
        Some(recipes) => recipes,
        None => &state.corpus.recipes,
    };

    let engine = RankingEngine::new(&state.resolver);
    let suggestions = engine.suggest(recipes, &request.fridge, &config);

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    tracing::debug!(
        fridge = request.fridge.len(),
        recipes = recipes.len(),
        suggestions = suggestions.len(),
        processing_time_ms = processing_time,
        "Served suggestions"
    );

    Ok(Json(serde_json::json!({
        "count": suggestions.len(),
        "suggestions": suggestions,
        "processingInfo": {
            "recipesConsidered": recipes.len(),
            "processingTimeMs": processing_time,
        },
    })))
}

/// Explain whether one fridge item satisfies one ingredient
async fn match_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> ApiResult<MatchDecision> {
    let Json(request) = payload.map_err(invalid_body)?;
    validate_term(&request.fridge_item).map_err(validation_failure)?;
    validate_term(&request.ingredient).map_err(validation_failure)?;

    let matcher = IngredientMatcher::new(&state.resolver);
    Ok(Json(matcher.explain(&request.fridge_item, &request.ingredient)))
}

/// Plan a week of meals and list what to buy
async fn menu_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MenuRequest>, JsonRejection>,
) -> ApiResult<serde_json::Value> {
    let Json(request) = payload.map_err(invalid_body)?;

    let servings = request.servings.unwrap_or(DEFAULT_SERVINGS);
    validate_servings(servings).map_err(validation_failure)?;
    validate_terms(&request.fridge, "fridge items", MAX_FRIDGE_ITEMS)
        .map_err(validation_failure)?;

    let profile = DietProfile::from_keys(
        &request.diets,
        &request.allergens,
        &request.custom_exclusion_categories,
    );
    let start = week_start(
        request
            .week_start
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    );

    let recipes = &state.corpus.recipes;
    let menu = plan_week(recipes, &request.fridge, &profile, start, servings);
    let matcher = IngredientMatcher::new(&state.resolver);
    let shopping = shopping_list(&menu.recipes(recipes), &request.fridge, &matcher);

    Ok(Json(serde_json::json!({
        "menu": menu,
        "shoppingList": shopping,
    })))
}
