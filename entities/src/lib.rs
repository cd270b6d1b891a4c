pub mod song;

pub mod prelude {
    pub use crate::song::{NewSong, Song};
}
