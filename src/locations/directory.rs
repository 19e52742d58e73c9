use crate::error::{AppError, Result};
use crate::models::{Location, Region};
use tracing::debug;

/// Location used when a caller does not name one.
pub const DEFAULT_LOCATION: &str = "Chennai, Tamil Nadu";

/// Major Tamil Nadu districts followed by other major Indian cities.
const CATALOG: [(&str, f64, f64, Region); 20] = [
    ("Chennai, Tamil Nadu", 13.0827, 80.2707, Region::Chennai),
    ("Coimbatore, Tamil Nadu", 11.0168, 76.9558, Region::Coimbatore),
    ("Madurai, Tamil Nadu", 9.9252, 78.1198, Region::TamilNadu),
    ("Salem, Tamil Nadu", 11.6643, 78.1460, Region::TamilNadu),
    ("Tiruchirappalli, Tamil Nadu", 10.7905, 78.7047, Region::TamilNadu),
    ("Tirunelveli, Tamil Nadu", 8.7139, 77.7567, Region::TamilNadu),
    ("Erode, Tamil Nadu", 11.3410, 77.7172, Region::TamilNadu),
    ("Vellore, Tamil Nadu", 12.9165, 79.1325, Region::TamilNadu),
    ("Thoothukudi, Tamil Nadu", 8.7642, 78.1348, Region::TamilNadu),
    ("Thanjavur, Tamil Nadu", 10.7870, 79.1378, Region::TamilNadu),
    ("Dindigul, Tamil Nadu", 10.3624, 77.9695, Region::TamilNadu),
    ("Kancheepuram, Tamil Nadu", 12.8185, 79.6947, Region::TamilNadu),
    ("Tiruppur, Tamil Nadu", 11.1085, 77.3411, Region::TamilNadu),
    ("Karur, Tamil Nadu", 10.9601, 78.0766, Region::TamilNadu),
    ("Namakkal, Tamil Nadu", 11.2342, 78.1673, Region::TamilNadu),
    ("Delhi, NCR", 28.6139, 77.2090, Region::Delhi),
    ("Mumbai, Maharashtra", 19.0760, 72.8777, Region::Mumbai),
    ("Bangalore, Karnataka", 12.9716, 77.5946, Region::Other),
    ("Kolkata, West Bengal", 22.5726, 88.3639, Region::Kolkata),
    ("Hyderabad, Telangana", 17.3850, 78.4867, Region::Other),
];

/// An ordered, immutable list of locations with an explicit default entry.
#[derive(Debug, Clone)]
pub struct LocationDirectory {
    locations: Vec<Location>,
    default_index: usize,
}

impl LocationDirectory {
    /// The built-in catalog with `DEFAULT_LOCATION` as default.
    pub fn builtin() -> Self {
        let locations = builtin_locations();
        let default_index = first_match(&locations, DEFAULT_LOCATION).unwrap_or(0);
        Self {
            locations,
            default_index,
        }
    }

    /// The built-in catalog with a configured default.
    pub fn builtin_with_default(default_name: &str) -> Result<Self> {
        Self::with_default(builtin_locations(), default_name)
    }

    /// Builds a directory whose default is the first entry matching `default_name`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the list is empty or nothing matches the default.
    pub fn with_default(locations: Vec<Location>, default_name: &str) -> Result<Self> {
        let default_index = first_match(&locations, default_name).ok_or_else(|| {
            AppError::Config(format!(
                "Default location \"{}\" is not in the location directory",
                default_name
            ))
        })?;
        debug!(
            "Default location set to {}",
            locations[default_index].name
        );
        Ok(Self {
            locations,
            default_index,
        })
    }

    /// Every location, in catalog order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    pub fn default_location(&self) -> &Location {
        &self.locations[self.default_index]
    }

    /// Case-insensitive substring search over names, preserving catalog order.
    ///
    /// A blank query returns the whole directory.
    pub fn search(&self, query: &str) -> Vec<Location> {
        if query.trim().is_empty() {
            return self.locations.clone();
        }
        let needle = query.to_lowercase();
        self.locations
            .iter()
            .filter(|location| location.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Resolves a name to the first entry containing it (case-insensitive).
    ///
    /// `None` or a blank name resolves to the default location. Returns `None`
    /// when a name is given and nothing matches.
    pub fn resolve(&self, name: Option<&str>) -> Option<&Location> {
        match name.filter(|n| !n.trim().is_empty()) {
            None => Some(self.default_location()),
            Some(name) => first_match(&self.locations, name).map(|i| &self.locations[i]),
        }
    }
}

impl Default for LocationDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_locations() -> Vec<Location> {
    CATALOG
        .iter()
        .map(|(name, lat, lon, region)| Location::new(name, *lat, *lon, *region))
        .collect()
}

fn first_match(locations: &[Location], name: &str) -> Option<usize> {
    let needle = name.to_lowercase();
    locations
        .iter()
        .position(|location| location.name.to_lowercase().contains(&needle))
}
