use serde::{Deserialize, Serialize};

use crate::model::Person;

/// Raw subject entry as the listing endpoint returns it. The `films` field
/// holds linked sub-resource URLs until enrichment resolves them to titles.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PersonEntry {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
    pub hair_color: String,
    #[serde(default)]
    pub films: Vec<String>,
}

/// `GET <base>/people[/?search=<term>]` response shape. `next`/`previous`
/// are absolute URLs or JSON null.
#[derive(Serialize, Deserialize, Debug)]
pub struct PeopleListingResponse {
    pub results: Vec<PersonEntry>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl PersonEntry {
    pub fn into_person(self, films: Vec<String>) -> Person {
        Person {
            name: self.name,
            height: self.height,
            mass: self.mass,
            gender: self.gender,
            hair_color: self.hair_color,
            films,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PeopleListingResponse;
    use crate::error::HolonetError;

    #[test]
    fn test_parse_listing_with_null_cursors() -> Result<(), HolonetError> {
        let body = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [
                {
                    "name": "Luke Skywalker",
                    "height": "172",
                    "mass": "77",
                    "gender": "male",
                    "hair_color": "blond",
                    "films": ["https://swapi.dev/api/films/1/"]
                }
            ]
        }"#;
        let listing: PeopleListingResponse = serde_json::from_str(body)?;
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.next, None);
        assert_eq!(listing.previous, None);
        Ok(())
    }

    #[test]
    fn test_parse_listing_missing_results_fails() {
        let body = r#"{ "count": 0, "next": null, "previous": null }"#;
        let listing: Result<PeopleListingResponse, serde_json::Error> =
            serde_json::from_str(body);
        assert!(listing.is_err());
    }
}
