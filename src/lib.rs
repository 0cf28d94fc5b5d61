//! Affectation Wizard - guided intake questionnaire and service assignment
//!
//! This crate walks a person through a seven-step questionnaire, encodes the
//! categorical answers with the trained vocabularies, asks a pre-trained tree
//! ensemble which service should handle the request, and appends every
//! completed run to an audit history that feeds a small dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
