use crate::domain::constants::REFERENCE_CAMPUS_POLYGON;
use crate::domain::models::Coordinate;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BoundaryError {
    #[error("campus boundary needs at least 3 vertices, got {vertices}")]
    MalformedBoundary { vertices: usize },
    #[error("campus boundary vertex {index} is not a finite coordinate")]
    NonFiniteVertex { index: usize },
}

/// Ordered, implicitly closed polygon in latitude/longitude space.
///
/// Built once from configuration and never mutated afterwards. A boundary
/// with fewer than 3 vertices can still be constructed; it simply admits
/// no interior.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusBoundary {
    vertices: Vec<Coordinate>,
}

impl CampusBoundary {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn reference() -> Self {
        Self::new(
            REFERENCE_CAMPUS_POLYGON
                .iter()
                .map(|&(lat, lon)| Coordinate::new(lat, lon))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_malformed(&self) -> bool {
        self.validate().is_err()
    }

    pub fn validate(&self) -> Result<(), BoundaryError> {
        if self.vertices.len() < 3 {
            return Err(BoundaryError::MalformedBoundary {
                vertices: self.vertices.len(),
            });
        }
        if let Some(index) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(BoundaryError::NonFiniteVertex { index });
        }
        Ok(())
    }

    /// Vertex average. Lies inside convex boundaries only.
    pub fn centroid(&self) -> Option<Coordinate> {
        if self.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (lat, lon) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), v| (lat + v.latitude, lon + v.longitude));
        Some(Coordinate::new(lat / n, lon / n))
    }
}

/// Point-in-polygon membership against a fixed campus boundary.
///
/// A boundary that fails `validate()` admits no point at all.
#[derive(Debug, Clone)]
pub struct GeofenceEngine {
    boundary: CampusBoundary,
    usable: bool,
}

impl GeofenceEngine {
    pub fn new(boundary: CampusBoundary) -> Self {
        let usable = boundary.validate().is_ok();
        Self { boundary, usable }
    }

    pub fn boundary(&self) -> &CampusBoundary {
        &self.boundary
    }

    /// Even-odd ray casting. Latitude is the `y`-like axis and longitude the
    /// `x`-like axis; the ray runs towards increasing latitude.
    ///
    /// Points on an edge or vertex may land on either side depending on
    /// rounding. Non-finite points are always outside.
    pub fn contains(&self, point: Coordinate) -> bool {
        let vertices = self.boundary.vertices();
        if !self.usable || !point.is_finite() {
            return false;
        }

        let mut inside = false;
        let mut j = vertices.len() - 1;
        for (i, vi) in vertices.iter().enumerate() {
            let vj = &vertices[j];
            let crosses = (vi.longitude > point.longitude) != (vj.longitude > point.longitude);
            if crosses {
                let x_intersect = vj.latitude
                    + (vi.latitude - vj.latitude) * (point.longitude - vj.longitude)
                        / (vi.longitude - vj.longitude);
                if point.latitude < x_intersect {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundaryError, CampusBoundary, GeofenceEngine};
    use crate::domain::models::Coordinate;

    fn square() -> CampusBoundary {
        CampusBoundary::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ])
    }

    #[test]
    fn reference_campus_contains_interior_point() {
        let engine = GeofenceEngine::new(CampusBoundary::reference());
        assert!(engine.contains(Coordinate::new(18.2565, 75.7200)));
    }

    #[test]
    fn reference_campus_rejects_point_to_the_north() {
        let engine = GeofenceEngine::new(CampusBoundary::reference());
        assert!(!engine.contains(Coordinate::new(18.3000, 75.7200)));
    }

    #[test]
    fn reference_centroid_is_inside() {
        let boundary = CampusBoundary::reference();
        let centroid = boundary.centroid().expect("centroid");
        assert!(GeofenceEngine::new(boundary).contains(centroid));
    }

    #[test]
    fn convex_shapes_contain_centroid_and_reject_far_points() {
        let triangle = CampusBoundary::new(vec![
            Coordinate::new(-5.0, -5.0),
            Coordinate::new(5.0, 0.0),
            Coordinate::new(-5.0, 5.0),
        ]);
        let hexagon = CampusBoundary::new(
            (0..6)
                .map(|k| {
                    let a = std::f64::consts::PI / 3.0 * k as f64;
                    Coordinate::new(40.0 + a.sin(), -3.0 + a.cos())
                })
                .collect(),
        );
        for boundary in [square(), triangle, hexagon] {
            let centroid = boundary.centroid().expect("centroid");
            let engine = GeofenceEngine::new(boundary);
            assert!(engine.contains(centroid));
            for far in [
                Coordinate::new(1000.0, 1000.0),
                Coordinate::new(-1000.0, 0.0),
                Coordinate::new(0.0, -1000.0),
                Coordinate::new(f64::MAX, f64::MIN),
            ] {
                assert!(!engine.contains(far), "{far:?} should be outside");
            }
        }
    }

    #[test]
    fn degenerate_boundaries_admit_nothing() {
        let vertices = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
        ];
        for n in 0..3 {
            let engine = GeofenceEngine::new(CampusBoundary::new(vertices[..n].to_vec()));
            assert!(!engine.contains(Coordinate::new(0.0, 0.0)));
            assert!(!engine.contains(Coordinate::new(1.0, 5.0)));
        }
    }

    #[test]
    fn non_finite_vertex_boundary_admits_nothing() {
        let mut vertices = square().vertices().to_vec();
        vertices[3].longitude = f64::NAN;
        let boundary = CampusBoundary::new(vertices);
        assert!(boundary.is_malformed());
        let engine = GeofenceEngine::new(boundary);
        assert!(!engine.contains(Coordinate::new(-5.0, 5.0)));
        assert!(!engine.contains(Coordinate::new(5.0, 5.0)));

        let mut vertices = square().vertices().to_vec();
        vertices[1].latitude = f64::INFINITY;
        let engine = GeofenceEngine::new(CampusBoundary::new(vertices));
        assert!(!engine.contains(Coordinate::new(5.0, 5.0)));
    }

    #[test]
    fn non_finite_points_fail_closed() {
        let engine = GeofenceEngine::new(square());
        assert!(!engine.contains(Coordinate::new(f64::NAN, 5.0)));
        assert!(!engine.contains(Coordinate::new(5.0, f64::NAN)));
        assert!(!engine.contains(Coordinate::new(f64::NEG_INFINITY, 5.0)));
        assert!(!engine.contains(Coordinate::new(5.0, f64::INFINITY)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening towards increasing latitude.
        let engine = GeofenceEngine::new(CampusBoundary::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 9.0),
            Coordinate::new(9.0, 9.0),
            Coordinate::new(9.0, 6.0),
            Coordinate::new(3.0, 6.0),
            Coordinate::new(3.0, 3.0),
            Coordinate::new(9.0, 3.0),
            Coordinate::new(9.0, 0.0),
        ]));
        assert!(engine.contains(Coordinate::new(5.0, 1.5)));
        assert!(engine.contains(Coordinate::new(1.0, 4.5)));
        assert!(!engine.contains(Coordinate::new(6.0, 4.5)));
    }

    #[test]
    fn self_intersecting_bowtie_is_deterministic() {
        let engine = GeofenceEngine::new(CampusBoundary::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ]));
        let p = Coordinate::new(5.0, 2.0);
        let first = engine.contains(p);
        assert_eq!(first, engine.contains(p));
        assert!(first);
        assert!(!engine.contains(Coordinate::new(2.0, 5.0)));
    }

    #[test]
    fn validate_reports_malformed_boundaries() {
        assert_eq!(
            CampusBoundary::new(vec![]).validate(),
            Err(BoundaryError::MalformedBoundary { vertices: 0 })
        );
        let mut vertices = square().vertices().to_vec();
        vertices[2].longitude = f64::NAN;
        assert_eq!(
            CampusBoundary::new(vertices).validate(),
            Err(BoundaryError::NonFiniteVertex { index: 2 })
        );
        assert!(CampusBoundary::reference().validate().is_ok());
        assert!(!CampusBoundary::reference().is_malformed());
    }
}
