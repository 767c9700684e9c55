use serde::{Deserialize, Serialize};

/// Axis-aligned geographic box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Inclusive on all four bounds
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.min_lon <= lon && lon <= self.max_lon && self.min_lat <= lat && lat <= self.max_lat
    }

    /// Smallest box enclosing both boxes
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_lon: self.min_lon.min(other.min_lon),
            min_lat: self.min_lat.min(other.min_lat),
            max_lon: self.max_lon.max(other.max_lon),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
            .iter()
            .all(|v| v.is_finite())
            && self.min_lon <= self.max_lon
            && self.min_lat <= self.max_lat
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> Self {
        Self::new(min_lon, min_lat, max_lon, max_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let bbox = BoundingBox::new(101.60, 3.10, 101.70, 3.20);
        assert!(bbox.contains(101.60, 3.10));
        assert!(bbox.contains(101.70, 3.20));
        assert!(bbox.contains(101.65, 3.15));
        assert!(!bbox.contains(101.59, 3.15));
        assert!(!bbox.contains(101.65, 3.21));
    }

    #[test]
    fn union_is_commutative() {
        let a = BoundingBox::new(101.2, 2.6, 101.9, 3.8);
        let b = BoundingBox::new(101.6, 3.0, 101.8, 3.3);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union(&b), a);
    }

    #[test]
    fn rejects_inverted_box() {
        assert!(!BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!BoundingBox::new(0.0, 0.0, f64::NAN, 1.0).is_valid());
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 0.0).is_valid());
    }
}
