// Operational check endpoints

pub mod controllers;
