// ─────────────────────────────────────────────────────────────────────
// RadMap — Survey
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Survey analysis pipeline.
//!
//! measurement table → [`input::sanitize`] → [`interpolator::interpolate`]
//! → [`zones`] classification → [`compliance::ComplianceEngine`] →
//! [`report::render_report`].

pub mod compliance;
pub mod export;
pub mod input;
pub mod interpolator;
pub mod report;
pub mod scenarios;
pub mod zones;
