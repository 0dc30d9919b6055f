use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, RawQuery, State},
    http::{Method, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_NUMBER_VALUE: u32 = 99999;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub number: String,
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    pub team_number: Option<String>,
    pub team_title: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    pub new_team_number: Option<String>,
    pub new_team_title: Option<String>,
}

#[derive(Default)]
pub struct Teams {
    next_id: u64,
    by_id: BTreeMap<u64, Team>,
}

pub type Db = Arc<RwLock<Teams>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Teams::default()));
    Router::new()
        .route("/ping", get(ping))
        .route("/not-json", get(not_json))
        .route("/echo", get(echo).delete(echo))
        .route("/teams", post(create_team))
        .route("/teams/all", get(list_teams))
        .route("/teams/model-constraints", get(model_constraints))
        .route("/teams/{id}", get(get_team).put(update_team).delete(delete_team))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}

fn not_found(id: u64) -> (StatusCode, Json<Value>) {
    error(StatusCode::NOT_FOUND, format!("team {id} not found"))
}

fn check_title(title: &str) -> ApiResult<()> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(error(
            StatusCode::BAD_REQUEST,
            format!("team title exceeds {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn check_number(number: &str) -> ApiResult<()> {
    match number.parse::<u32>() {
        Ok(n) if n <= MAX_NUMBER_VALUE => Ok(()),
        _ => Err(error(
            StatusCode::BAD_REQUEST,
            format!("team number must be an integer between 0 and {MAX_NUMBER_VALUE}"),
        )),
    }
}

async fn ping() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn not_json() -> &'static str {
    "this body is plain text"
}

/// Report the method and raw query string the request arrived with.
async fn echo(method: Method, RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "query": query.unwrap_or_default(),
    }))
}

async fn model_constraints() -> Json<Value> {
    Json(json!({
        "MAX_NUMBER_VALUE": MAX_NUMBER_VALUE.to_string(),
        "MAX_TITLE_LENGTH": MAX_TITLE_LENGTH.to_string(),
    }))
}

async fn list_teams(State(db): State<Db>) -> Json<Vec<Team>> {
    let teams = db.read().await;
    Json(teams.by_id.values().cloned().collect())
}

async fn create_team(
    State(db): State<Db>,
    Form(input): Form<CreateTeam>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let number = input
        .team_number
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "teamNumber is required"))?;
    let title = input
        .team_title
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "teamTitle is required"))?;
    check_number(&number)?;
    check_title(&title)?;

    let mut teams = db.write().await;
    teams.next_id += 1;
    let team = Team {
        id: teams.next_id,
        number,
        title,
    };
    teams.by_id.insert(team.id, team.clone());
    Ok((StatusCode::CREATED, Json(team)))
}

async fn get_team(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Team>> {
    let teams = db.read().await;
    teams.by_id.get(&id).cloned().map(Json).ok_or_else(|| not_found(id))
}

async fn update_team(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Form(input): Form<UpdateTeam>,
) -> ApiResult<Json<Team>> {
    if let Some(number) = &input.new_team_number {
        check_number(number)?;
    }
    if let Some(title) = &input.new_team_title {
        check_title(title)?;
    }
    let mut teams = db.write().await;
    let team = teams.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
    if let Some(number) = input.new_team_number {
        team.number = number;
    }
    if let Some(title) = input.new_team_title {
        team.title = title;
    }
    Ok(Json(team.clone()))
}

async fn delete_team(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Team>> {
    let mut teams = db.write().await;
    teams.by_id.remove(&id).map(Json).ok_or_else(|| not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_serializes_to_camel_case_json() {
        let team = Team {
            id: 1,
            number: "000004".to_string(),
            title: "Fours".to_string(),
        };
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json, json!({"id": 1, "number": "000004", "title": "Fours"}));
    }

    #[test]
    fn create_team_fields_are_optional_at_parse_time() {
        let input: CreateTeam = serde_json::from_str(r#"{"teamNumber":"7"}"#).unwrap();
        assert_eq!(input.team_number.as_deref(), Some("7"));
        assert!(input.team_title.is_none());
    }

    #[test]
    fn update_team_partial_fields() {
        let input: UpdateTeam = serde_json::from_str(r#"{"newTeamTitle":"Renamed"}"#).unwrap();
        assert_eq!(input.new_team_title.as_deref(), Some("Renamed"));
        assert!(input.new_team_number.is_none());
    }

    #[test]
    fn number_limits() {
        assert!(check_number("0").is_ok());
        assert!(check_number("003").is_ok());
        assert!(check_number("99999").is_ok());
        assert!(check_number("100000").is_err());
        assert!(check_number("003-01-01").is_err());
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        let cyrillic = "я".repeat(MAX_TITLE_LENGTH);
        assert!(check_title(&cyrillic).is_ok());
        assert!(check_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }
}
