use entities::song::{NewSong, Song};
use log::debug;
use sqlx::PgConnection;

const SONG_COLUMNS: &str = "id, nombre, artista, album, url, genero, anio";

pub async fn get_all_songs(connection: &mut PgConnection) -> Result<Vec<Song>, sqlx::Error> {
    sqlx::query_as::<_, Song>(&format!(
        "select {SONG_COLUMNS} from canciones order by id desc"
    ))
    .fetch_all(connection)
    .await
}

pub async fn get_song_by_id(
    connection: &mut PgConnection,
    song_id: i32,
) -> Result<Option<Song>, sqlx::Error> {
    sqlx::query_as::<_, Song>(&format!(
        "select {SONG_COLUMNS} from canciones where id = $1"
    ))
    .bind(song_id)
    .fetch_optional(connection)
    .await
}

/// Inserts the song and returns the id the database assigned to it.
pub async fn add_song(connection: &mut PgConnection, song: &NewSong) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
insert into canciones (nombre, artista, album, url, genero, anio)
values ($1, $2, $3, $4, $5, $6)
returning id
        "#,
    )
    .bind(&song.name)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(&song.url)
    .bind(&song.genre)
    .bind(song.year)
    .fetch_one(connection)
    .await?;
    debug!("Inserted song {} with id {}", song.name, id);
    Ok(id)
}

/// Overwrites every column of the row. Returns the number of rows touched,
/// zero when no song has that id.
pub async fn update_song_by_id(
    connection: &mut PgConnection,
    song_id: i32,
    song: &NewSong,
) -> Result<u64, sqlx::Error> {
    let ret = sqlx::query(
        r#"
update canciones
set nombre = $1, artista = $2, album = $3, url = $4, genero = $5, anio = $6
where id = $7
        "#,
    )
    .bind(&song.name)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(&song.url)
    .bind(&song.genre)
    .bind(song.year)
    .bind(song_id)
    .execute(connection)
    .await?;
    Ok(ret.rows_affected())
}

pub async fn delete_song_by_id(
    connection: &mut PgConnection,
    song_id: i32,
) -> Result<u64, sqlx::Error> {
    let ret = sqlx::query("delete from canciones where id = $1")
        .bind(song_id)
        .execute(connection)
        .await?;
    Ok(ret.rows_affected())
}
