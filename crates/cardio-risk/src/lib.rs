//! Cardiovascular risk-score engine.
//!
//! The [`scores::ScoreEngine`] maps a [`scores::ClinicalInput`] onto one of the
//! bundled calculators (CHA₂DS₂-VASc, HAS-BLED, TIMI UA/NSTEMI, HEART) and
//! returns the point total with its risk-tier interpretation. Configuration,
//! telemetry and error plumbing shared with the API service live alongside it.

pub mod config;
pub mod error;
pub mod scores;
pub mod telemetry;
