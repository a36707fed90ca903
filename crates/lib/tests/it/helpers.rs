//! Shared fixtures for the integration suite.

use chrono::{DateTime, TimeZone, Utc};
use datapath::Node;

/// Birth date used by the [`author`] fixture.
pub fn author_birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 10, 29, 0, 0, 0).unwrap()
}

/// A small person record exercising every container shape: nested maps,
/// a list of scalars, and a list of maps.
pub fn author() -> Node {
    let mut node = Node::map();
    node.set("name.first", "Jeremy");
    node.set("name.last", "Bankes");
    node.set("birth", author_birth());
    node.set("favorites.foods.0", "Dark Chocolate");
    node.set("favorites.foods.1", "Sushi");
    node.set("favorites.colors.0", "Gray");
    node.set("favorites.colors.1", "Cyan");
    node.set("favorites.colors.2", "White");
    node.set("favorites.movies.0.main", "Interstellar");
    node.set("favorites.movies.0.year", 2014);
    node.set("favorites.movies.1.main", "Arrival");
    node.set("favorites.movies.1.year", 2016);
    node
}

/// The schema the [`author`] fixture satisfies.
pub fn author_schema() -> Node {
    let mut schema = Node::map();
    schema.set("name.first", "string");
    schema.set("name.last", "string");
    schema.set("birth", "date");
    schema.set("favorites.colors", "array");
    schema.set("favorites.movies.0.main", "string");
    schema.set("favorites.movies.0.year", "number");
    schema
}
