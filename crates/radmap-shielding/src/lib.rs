// ─────────────────────────────────────────────────────────────────────
// RadMap — Shielding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shielding physics.
//!
//! Static NIST XCOM material catalog and narrow-beam attenuation
//! (Beer-Lambert) derived quantities.

pub mod attenuation;
pub mod materials;
