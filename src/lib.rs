// ==============================================================================
// lib.rs - OMIM/MedGen Database Builder Library
// ==============================================================================
// Description: Library interface for the OMIM-MedGen join pipeline modules
// Created: 2026-08-29
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

pub mod models;
pub mod output;
pub mod parsers;
pub mod processor;
pub mod validator;
