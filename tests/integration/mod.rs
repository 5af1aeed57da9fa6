//! Integration test modules.

mod booking_flow_test;
mod persistence_test;
