//! REST API over the arena. Handlers are thin: parse, call the arena, map errors.

use crate::arena::Arena;
use crate::logic::ListFilter;
use crate::models::{ArenaError, NewTournament, PlayerInfo, TournamentId, TournamentStatus};
use actix_web::{
    delete, get,
    http::StatusCode,
    post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, ResponseError,
};
use serde::Deserialize;

type AppState = Data<Arena>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    filter: ListFilter,
}

#[derive(Deserialize)]
struct SetStatusBody {
    status: TournamentStatus,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

impl ResponseError for ArenaError {
    fn status_code(&self) -> StatusCode {
        match self {
            ArenaError::Validation(_) => StatusCode::BAD_REQUEST,
            ArenaError::NotFound(_) => StatusCode::NOT_FOUND,
            ArenaError::InvalidTransition { .. }
            | ArenaError::NotJoinable { .. }
            | ArenaError::TournamentFull { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }))
    }
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-arena",
    })
}

/// List tournaments newest first (`?filter=all|active|open`).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    HttpResponse::Ok().json(state.list_tournaments(query.filter))
}

#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<NewTournament>) -> Result<HttpResponse, ArenaError> {
    let tournament = state.create(&body)?;
    Ok(HttpResponse::Created().json(tournament))
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> Result<HttpResponse, ArenaError> {
    Ok(HttpResponse::Ok().json(state.get(path.id)?))
}

/// Advance the lifecycle (Upcoming -> Live -> Completed).
#[put("/api/tournaments/{id}/status")]
async fn api_set_status(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SetStatusBody>,
) -> Result<HttpResponse, ArenaError> {
    Ok(HttpResponse::Ok().json(state.set_status(path.id, body.status)?))
}

/// Delete a tournament and its registrations.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> Result<HttpResponse, ArenaError> {
    state.delete(path.id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/tournaments/{id}/registrations")]
async fn api_registrations(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    HttpResponse::Ok().json(state.registrations_of(path.id))
}

/// Join a tournament as a player.
#[post("/api/tournaments/{id}/registrations")]
async fn api_join(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<PlayerInfo>,
) -> Result<HttpResponse, ArenaError> {
    let registration = state.join(path.id, &body)?;
    Ok(HttpResponse::Created().json(registration))
}

#[get("/api/stats")]
async fn api_stats(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.stats())
}

/// Register every API route. The arena itself is supplied as app data by the caller.
///
/// Malformed bodies, query strings and path ids are reported as validation
/// errors so every failure carries the same `{"error", "kind"}` shape.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| ArenaError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ArenaError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| ArenaError::Validation(err.to_string()).into()),
    )
    .service(api_health)
    .service(api_list_tournaments)
    .service(api_create_tournament)
    .service(api_get_tournament)
    .service(api_set_status)
    .service(api_delete_tournament)
    .service(api_registrations)
    .service(api_join)
    .service(api_stats);
}
