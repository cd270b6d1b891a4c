use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::{info, warn};

use entities::prelude::{NewSong, Song};

use crate::connection::{acquire, release};
use crate::errors::ApiError;
use crate::responses::responses::{
    DeletedResponse, HealthResponse, IdentityResponse, ServiceDescription,
};
use crate::DatabaseState;

pub async fn root() -> Json<ServiceDescription> {
    Json(ServiceDescription::default())
}

pub async fn identity() -> Json<IdentityResponse> {
    Json(IdentityResponse::default())
}

/// Ids that cannot exist in the table are treated as missing rows.
fn row_id(id: i64) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| ApiError::NotFound)
}

pub async fn get_songs(State(state): State<DatabaseState>) -> Result<Json<Vec<Song>>, ApiError> {
    let mut connection = acquire(&state).await?;
    let ret = queries::get_all_songs(&mut connection).await;
    release(connection).await;
    let songs = ret.map_err(ApiError::database("Error al obtener canciones"))?;
    Ok(Json(songs))
}

pub async fn get_song(
    State(state): State<DatabaseState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Song>, ApiError> {
    let Path(id) = path?;
    let id = row_id(id)?;
    let mut connection = acquire(&state).await?;
    let ret = queries::get_song_by_id(&mut connection, id).await;
    release(connection).await;
    let song = ret
        .map_err(ApiError::database("Error al obtener la canción"))?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(song))
}

pub async fn create_song(
    State(state): State<DatabaseState>,
    payload: Result<Json<NewSong>, JsonRejection>,
) -> Result<(StatusCode, Json<Song>), ApiError> {
    let Json(new_song) = payload?;
    let mut connection = acquire(&state).await?;
    let ret = queries::add_song(&mut connection, &new_song).await;
    release(connection).await;
    let id = ret.map_err(ApiError::database("Error al crear la canción"))?;
    info!("Created song {} with id {}", new_song.name, id);
    Ok((StatusCode::CREATED, Json(Song::from_new(id, new_song))))
}

/// Overwrites the whole row and echoes the request body under the
/// targeted id, without reading the row back.
pub async fn update_song(
    State(state): State<DatabaseState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewSong>, JsonRejection>,
) -> Result<Json<Song>, ApiError> {
    let Path(id) = path?;
    let Json(new_song) = payload?;
    let id = row_id(id)?;
    let mut connection = acquire(&state).await?;
    let ret = queries::update_song_by_id(&mut connection, id, &new_song).await;
    release(connection).await;
    let updated = ret.map_err(ApiError::database("Error al actualizar la canción"))?;
    if updated == 0 {
        return Err(ApiError::NotFound);
    }
    info!("Updated song with id {}", id);
    Ok(Json(Song::from_new(id, new_song)))
}

pub async fn delete_song(
    State(state): State<DatabaseState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(id) = path?;
    let id = row_id(id)?;
    let mut connection = acquire(&state).await?;
    let ret = queries::delete_song_by_id(&mut connection, id).await;
    release(connection).await;
    let deleted = ret.map_err(ApiError::database("Error al eliminar la canción"))?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    info!("Deleted song with id {}", id);
    Ok(Json(DeletedResponse::from_id(id)))
}

pub async fn health(State(state): State<DatabaseState>) -> Json<HealthResponse> {
    match acquire(&state).await {
        Ok(connection) => {
            release(connection).await;
            Json(HealthResponse::healthy())
        }
        Err(err) => {
            warn!("Health check failed: {}", err);
            Json(HealthResponse::unhealthy(err.to_string()))
        }
    }
}
