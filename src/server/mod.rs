//! SSR-only modules: the outbound detection-service client.

pub mod spotting;
