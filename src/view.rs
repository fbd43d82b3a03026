pub mod film;
pub mod people;

pub use crate::view::film::FilmResponse;
pub use crate::view::people::{PeopleListingResponse, PersonEntry};
