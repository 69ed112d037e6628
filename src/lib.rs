//! Derma Triage - Guided Skin Self-Screening Service
//!
//! A short questionnaire about a skin concern is scored by fixed rules into a
//! Low, Medium or High risk tier. Each tier maps to templated, non-diagnostic
//! guidance, and a mocked photo classifier offers advisory categories.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
