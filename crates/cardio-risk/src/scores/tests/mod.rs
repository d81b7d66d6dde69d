mod coercion;
mod common;
mod evaluation;
