// ─────────────────────────────────────────────────────────────────────
// RadMap — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Public area upper limit (µSv/hr), CERN Safety Code F / IAEA GSR Part 3.
pub const PUBLIC_LIMIT_USV_H: f64 = 0.5;

/// Supervised area upper limit (µSv/hr).
pub const SUPERVISED_LIMIT_USV_H: f64 = 7.5;

/// Controlled area upper limit (µSv/hr). Restricted above.
pub const CONTROLLED_LIMIT_USV_H: f64 = 25.0;

/// Conservative scheme: supervised upper limit (µSv/hr).
pub const CONSERVATIVE_SUPERVISED_LIMIT_USV_H: f64 = 3.0;

/// Conservative scheme: controlled upper limit (µSv/hr).
pub const CONSERVATIVE_CONTROLLED_LIMIT_USV_H: f64 = 10.0;

/// Annual effective dose limit for occupationally exposed workers (mSv/yr).
pub const WORKER_ANNUAL_LIMIT_MSV: f64 = 20.0;

/// Annual effective dose limit for members of the public (mSv/yr).
pub const PUBLIC_ANNUAL_LIMIT_MSV: f64 = 1.0;

/// Annual limit for apprentices and students aged 16-18 (mSv/yr).
pub const APPRENTICE_ANNUAL_LIMIT_MSV: f64 = 6.0;

/// Full-time occupancy (hours/year).
pub const FULL_TIME_OCCUPANCY_H: f64 = 2000.0;

/// µSv → mSv.
pub const USV_PER_MSV: f64 = 1000.0;

/// Distance from the survey bounding box edge that counts as boundary (m).
pub const BOUNDARY_MARGIN_M: f64 = 2.0;

/// Default interpolation grid resolution (nodes per axis).
pub const DEFAULT_RESOLUTION: usize = 200;

/// Default margin added around the measurement bounding box (m).
pub const DEFAULT_BUFFER_M: f64 = 5.0;

/// Default photon energy for shielding estimates (MeV).
pub const DEFAULT_PHOTON_ENERGY_MEV: f64 = 1.0;

/// Geiger count rate per µSv/hr for the bGeigie LND 7317 tube.
pub const CPM_PER_USV_H: f64 = 334.0;

/// Metres per degree of latitude (spherical approximation).
pub const METRES_PER_DEGREE: f64 = 111_000.0;
