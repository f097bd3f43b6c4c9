use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadMapError {
    #[error("Unknown material '{key}'. Available: {available}")]
    UnknownMaterial { key: String, available: String },

    #[error("Invalid photon energy {energy_mev} MeV: must be finite and positive")]
    InvalidEnergy { energy_mev: f64 },

    #[error("Invalid dose rate {value}: {reason}")]
    InvalidDose { value: f64, reason: String },

    #[error("Insufficient data for interpolation: {0}")]
    InsufficientData(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl RadMapError {
    /// Negative or non-finite dose rate.
    pub fn invalid_dose(value: f64) -> Self {
        let reason = if value.is_finite() {
            "dose rates must be non-negative".to_string()
        } else {
            "dose rates must be finite".to_string()
        };
        RadMapError::InvalidDose { value, reason }
    }
}

pub type RadMapResult<T> = Result<T, RadMapError>;
