//! Physical constants and radio parameters

/// Mean Earth radius used by the haversine distance (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Free-space path loss constant for MHz/km units (dB)
pub const FSPL_CONSTANT_DB: f64 = 32.44;

/// Half-wave dipole antenna gain (dBi)
pub const DIPOLE_GAIN_DBI: f64 = 2.15;

/// Terrain obstruction proxy: loss accrued per kilometer (dB/km)
pub const TERRAIN_SLOPE_DB_PER_KM: f64 = 0.1;

/// Terrain obstruction proxy: maximum accrued loss (dB)
pub const TERRAIN_CAP_DB: f64 = 10.0;

/// Default operating frequency: 2 m FM calling frequency (MHz)
pub const DEFAULT_FREQUENCY_MHZ: f64 = 146.52;

/// Default transmit power, typical handheld (W)
pub const DEFAULT_TX_POWER_WATTS: f64 = 5.0;

/// Default antenna height above ground (m)
pub const DEFAULT_ANTENNA_HEIGHT_M: f64 = 2.0;
