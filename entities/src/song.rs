use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `canciones` table.
#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Song {
    pub id: i32,
    #[sqlx(rename = "nombre")]
    #[serde(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "artista")]
    #[serde(rename = "artista")]
    pub artist: String,
    pub album: Option<String>,
    pub url: String,
    #[sqlx(rename = "genero")]
    #[serde(rename = "genero")]
    pub genre: Option<String>,
    #[sqlx(rename = "anio")]
    #[serde(rename = "anio")]
    pub year: Option<i32>,
}

/// Request payload for create and update. The id always comes from the
/// store or the path, never from the body.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct NewSong {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "artista")]
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    pub url: String,
    #[serde(rename = "genero", default)]
    pub genre: Option<String>,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
}

impl Song {
    pub fn from_new(id: i32, song: NewSong) -> Self {
        Song {
            id,
            name: song.name,
            artist: song.artist,
            album: song.album,
            url: song.url,
            genre: song.genre,
            year: song.year,
        }
    }
}
