//! Unit test modules.

mod catalog_test;
mod trip_serialization_test;
