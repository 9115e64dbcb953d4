pub mod common;

mod export_test;
mod locale_routing_test;
