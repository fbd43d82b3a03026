use serde::{Deserialize, Serialize};

/// `GET <film-url>` response, reduced to the one field we display.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FilmResponse {
    pub title: String,
}
