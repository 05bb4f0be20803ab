//! Simplified VHF/UHF link-budget model
//!
//! Free-space path loss plus a linear terrain proxy, half-wave dipole gain
//! at both ends, and a coarse QSO-probability classification of the
//! resulting received signal strength. A planning estimate, not a
//! propagation prediction: no Fresnel-zone, knife-edge or climate terms.

use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_ANTENNA_HEIGHT_M, DEFAULT_FREQUENCY_MHZ, DEFAULT_TX_POWER_WATTS, DIPOLE_GAIN_DBI,
    FSPL_CONSTANT_DB, TERRAIN_CAP_DB, TERRAIN_SLOPE_DB_PER_KM,
};
use crate::validation::{PathError, PathResult};

/// Pluggable terrain-loss strategy
pub trait TerrainModel {
    /// Extra loss attributed to terrain over a path of the given length (dB)
    fn terrain_loss_db(&self, distance_km: f64) -> f64;
}

/// Default terrain proxy: loss grows linearly with distance up to a cap
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTerrain;

impl TerrainModel for LinearTerrain {
    fn terrain_loss_db(&self, distance_km: f64) -> f64 {
        (distance_km * TERRAIN_SLOPE_DB_PER_KM).min(TERRAIN_CAP_DB)
    }
}

/// Inputs to a link-budget computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetInput {
    pub frequency_mhz: f64,
    pub tx_power_watts: f64,
    /// Accepted and carried into the result but not used by the signal
    /// formula; the model has no height-gain term.
    pub antenna_height_m: f64,
    pub distance_km: f64,
}

impl Default for LinkBudgetInput {
    fn default() -> Self {
        Self {
            frequency_mhz: DEFAULT_FREQUENCY_MHZ,
            tx_power_watts: DEFAULT_TX_POWER_WATTS,
            antenna_height_m: DEFAULT_ANTENNA_HEIGHT_M,
            distance_km: 0.0,
        }
    }
}

/// Breakdown of a computed link budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetResult {
    pub free_space_loss_db: f64,
    pub terrain_loss_db: f64,
    pub path_loss_db: f64,
    pub signal_strength_dbm: f64,
    pub qso_probability_percent: u8,
}

/// Link-budget calculator with a pluggable terrain model
pub struct LinkBudget {
    terrain: Box<dyn TerrainModel + Send + Sync>,
}

impl LinkBudget {
    pub fn new() -> Self {
        Self {
            terrain: Box::new(LinearTerrain),
        }
    }

    pub fn with_terrain(terrain: Box<dyn TerrainModel + Send + Sync>) -> Self {
        Self { terrain }
    }

    /// Compute the full budget for one path.
    ///
    /// Zero distance is `DegenerateInput` (free-space loss has no defined
    /// value there); non-positive frequency or power, negative height or
    /// distance are `OutOfRange`.
    pub fn compute(&self, input: &LinkBudgetInput) -> PathResult<LinkBudgetResult> {
        if !(input.frequency_mhz > 0.0) {
            return Err(PathError::out_of_range(
                "frequency_mhz",
                input.frequency_mhz,
                "(0, inf)",
            ));
        }
        if !(input.tx_power_watts > 0.0) {
            return Err(PathError::out_of_range(
                "tx_power_watts",
                input.tx_power_watts,
                "(0, inf)",
            ));
        }
        if !(input.antenna_height_m >= 0.0) {
            return Err(PathError::out_of_range(
                "antenna_height_m",
                input.antenna_height_m,
                "[0, inf)",
            ));
        }
        if !(input.distance_km >= 0.0) {
            return Err(PathError::out_of_range(
                "distance_km",
                input.distance_km,
                "[0, inf)",
            ));
        }
        if input.distance_km == 0.0 {
            return Err(PathError::DegenerateInput {
                reason: "link budget undefined for zero-length path".to_string(),
            });
        }

        let free_space_loss_db = FSPL_CONSTANT_DB
            + 20.0 * input.frequency_mhz.log10()
            + 20.0 * input.distance_km.log10();
        let terrain_loss_db = self.terrain.terrain_loss_db(input.distance_km);
        let path_loss_db = free_space_loss_db + terrain_loss_db;

        let tx_power_dbm = 10.0 * (input.tx_power_watts * 1000.0).log10();
        let signal_strength_dbm = tx_power_dbm - path_loss_db + DIPOLE_GAIN_DBI;

        Ok(LinkBudgetResult {
            free_space_loss_db,
            terrain_loss_db,
            path_loss_db,
            signal_strength_dbm,
            qso_probability_percent: qso_probability_percent(signal_strength_dbm),
        })
    }
}

impl Default for LinkBudget {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse contact-probability classification of a received signal level
pub fn qso_probability_percent(signal_strength_dbm: f64) -> u8 {
    if signal_strength_dbm < -120.0 {
        10
    } else if signal_strength_dbm < -100.0 {
        30
    } else if signal_strength_dbm < -80.0 {
        60
    } else if signal_strength_dbm < -60.0 {
        80
    } else {
        100
    }
}
