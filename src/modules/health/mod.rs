// Health and readiness probes

pub mod controllers;
