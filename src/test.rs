//! Helpers for our unit and integration tests
//!

use env_logger::Env;

use crate::model::{Page, Person};

pub fn init_test_env() {
    let env = Env::default();
    if env_logger::try_init_from_env(env).is_ok() {
        log::debug!("Logger initialized");
    }
}

pub fn person(name: &str) -> Person {
    Person {
        name: String::from(name),
        height: String::from("172"),
        mass: String::from("77"),
        gender: String::from("male"),
        hair_color: String::from("blond"),
        films: vec![],
    }
}

pub fn page(names: Vec<&str>) -> Page {
    Page {
        records: names.into_iter().map(person).collect(),
        next_cursor: None,
        previous_cursor: None,
    }
}

/// A listing body in the upstream wire format, cursors passed through
/// verbatim (JSON null when None).
pub fn listing_body(entries: &[(&str, &[&str])], next: Option<&str>, previous: Option<&str>) -> String {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(name, films)| {
            serde_json::json!({
                "name": name,
                "height": "172",
                "mass": "77",
                "gender": "male",
                "hair_color": "blond",
                "films": films,
            })
        })
        .collect();
    serde_json::json!({
        "count": results.len(),
        "next": next,
        "previous": previous,
        "results": results,
    })
    .to_string()
}

pub fn film_body(title: &str) -> String {
    serde_json::json!({ "title": title, "episode_id": 4 }).to_string()
}
