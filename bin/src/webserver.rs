use std::io;
use std::path::Path;
use std::time::Duration;

use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

use config::Config;
use db::Db;
use error::Error;
use types::{CancellationToken, Entry};

use crate::cli::Options;

/// Per-request budget before a query is cancelled cooperatively (§4.6).
const QUERY_DEADLINE: Duration = Duration::from_secs(5);

struct AppState {
    db: Db,
    config: Config,
}

#[derive(Deserialize)]
struct SearchRequest {
    query: String,
}

#[derive(Serialize)]
struct SearchResponseBody {
    groups: Vec<types::Group>,
    total_candidates: usize,
    mode: types::SearchMode,
    fell_back: bool,
}

#[post("/search")]
async fn search_handler(state: web::Data<AppState>, body: web::Json<SearchRequest>) -> Result<impl Responder, Error> {
    let cancel = CancellationToken::with_deadline(QUERY_DEADLINE);
    let response = web::block({
        let query = body.query.clone();
        let state = state.clone();
        move || search::search(&state.db, &query, &state.config, &cancel)
    })
    .await
    .map_err(|e| Error::TransientDatabaseError(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SearchResponseBody {
        groups: response.groups,
        total_candidates: response.total_candidates,
        mode: response.mode,
        fell_back: response.fell_back,
    }))
}

#[get("/entry/{id}")]
async fn entry(state: web::Data<AppState>, id: web::Path<i64>) -> Result<impl Responder, Error> {
    let entry_id = id.into_inner();
    let fetched: Option<Entry> = web::block({
        let state = state.clone();
        move || state.db.fetch_entry(entry_id)
    })
    .await
    .map_err(|e| Error::TransientDatabaseError(e.to_string()))??;

    match fetched {
        Some(entry) => Ok(HttpResponse::Ok().json(entry)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[get("/healthz")]
async fn healthz(state: web::Data<AppState>) -> impl Responder {
    match state.db.validate_integrity() {
        Ok(true) => HttpResponse::Ok().finish(),
        _ => HttpResponse::ServiceUnavailable().finish(),
    }
}

pub async fn start(options: Options) -> io::Result<()> {
    let config = match &options.config_path {
        Some(path) => Config::load_from_path(Path::new(path)).expect("invalid configuration"),
        None => Config::load_default().expect("embedded default configuration is always valid"),
    };

    let db = Db::open(Path::new(&options.db_path)).expect("failed to open dictionary database");
    let state = web::Data::new(AppState { db, config });

    log::info!("starting webserver on {}", options.bind);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(search_handler)
            .service(entry)
            .service(healthz)
    })
    .bind(&options.bind)?
    .run()
    .await
}
