//! Matchmaking web server: JSON API over the matchmaking engine.
//! Run with: cargo run --bin web
//! Bind address comes from HOST / PORT (see `ServerConfig`).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use league_matchmaker::{generate_matches, parse_roster_csv, MatchConfig, MatchResult, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Identifier of a stored matchmaking run.
type RunId = Uuid;

/// A finished matchmaking run, kept so the UI can re-fetch it.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchRun {
    id: RunId,
    created_at: DateTime<Utc>,
    players: Vec<Player>,
    config: MatchConfig,
    result: MatchResult,
}

/// Per-run entry: run data + last activity time (for auto-cleanup).
struct RunEntry {
    run: MatchRun,
    last_activity: Instant,
}

/// In-memory state: runs by id. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<RunId, RunEntry>>>;

/// Inactivity threshold: runs not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often the cleanup task sweeps for inactive runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct MatchmakingBody {
    players: Vec<Player>,
    config: MatchConfig,
}

/// Path segment: run id (e.g. /api/matchmaking/{id})
#[derive(Deserialize)]
struct RunPath {
    id: RunId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-matchmaker",
    })
}

/// Parse a roster CSV (request body) into players.
#[post("/api/roster/csv")]
async fn api_import_roster(body: String) -> HttpResponse {
    match parse_roster_csv(body.as_bytes()) {
        Ok(players) => {
            log::info!("Imported roster of {} player(s)", players.len());
            HttpResponse::Ok().json(players)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Run matchmaking for 10 players. Failures are part of the stored result, not HTTP errors.
#[post("/api/matchmaking")]
async fn api_generate(state: AppState, body: Json<MatchmakingBody>) -> HttpResponse {
    let MatchmakingBody { players, config } = body.into_inner();

    let search = tokio::task::spawn_blocking(move || {
        let result = generate_matches(&players, &config);
        (players, config, result)
    })
    .await;
    let (players, config, result) = match search {
        Ok(done) => done,
        Err(e) => {
            log::error!("Matchmaking task failed: {}", e);
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Matchmaking task failed" }));
        }
    };

    let run = MatchRun {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        players,
        config,
        result,
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&run);
    g.insert(
        run.id,
        RunEntry {
            run,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a stored run by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/matchmaking/{id}")]
async fn api_get_run(state: AppState, path: Path<RunPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.run)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No matchmaking run" })),
    }
}

/// Bind address for the server, from `HOST` / `PORT` with fallbacks.
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        Self { host, port }
    }
}

/// Drop runs idle for longer than `INACTIVITY_TIMEOUT`. Returns how many were removed.
fn sweep_inactive_runs(state: &AppState) -> usize {
    let Ok(mut g) = state.write() else {
        return 0;
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
    before - g.len()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server = ServerConfig::from_env();
    log::info!("Matchmaking API listening on {}:{}", server.host, server.port);

    let state = Data::new(RwLock::new(HashMap::<RunId, RunEntry>::new()));

    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut sweep = actix_web::rt::time::interval(CLEANUP_INTERVAL);
        loop {
            sweep.tick().await;
            let removed = sweep_inactive_runs(&state_cleanup);
            if removed > 0 {
                log::info!("Dropped {} idle matchmaking run(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_import_roster)
            .service(api_generate)
            .service(api_get_run)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
