//! Demo risk markers. Point sets and weights are fixed literals, not the
//! output of any model.

use super::coordinate::Coordinate;

/// Centers north of this latitude use the northern point set.
pub const NORTHERN_LATITUDE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Northern,
    Default,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Default => "default",
        }
    }
}

/// Coarse region lookup by latitude threshold. Not a geocoder: anything above
/// 60°N counts as the territories, everything else as the provinces.
pub fn classify_region(center: Coordinate) -> Region {
    if center.lat() > NORTHERN_LATITUDE {
        Region::Northern
    } else {
        Region::Default
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskPoint {
    pub position: Coordinate,
    pub label: &'static str,
    pub severity_weight: f64,
}

impl RiskPoint {
    const fn new(lat: f64, lng: f64, label: &'static str, severity_weight: f64) -> Self {
        Self {
            position: Coordinate::from_literal(lat, lng),
            label,
            severity_weight,
        }
    }

    pub fn bucket(&self) -> SeverityBucket {
        SeverityBucket::from_weight(self.severity_weight)
    }

    pub fn style(&self) -> MarkerStyle {
        MarkerStyle::for_weight(self.severity_weight)
    }
}

const NORTHERN_POINTS: [RiskPoint; 3] = [
    RiskPoint::new(62.45, -114.38, "NWT — watershed risk", 0.9),
    RiskPoint::new(63.1, -113.5, "Permafrost sensitivity", 0.7),
    RiskPoint::new(64.2, -111.8, "Caribou corridor proximity", 0.8),
];

const DEFAULT_POINTS: [RiskPoint; 3] = [
    RiskPoint::new(46.49, -81.01, "Sudbury watershed flag", 0.85),
    RiskPoint::new(48.47, -81.33, "Timmins wetlands buffer", 0.7),
    RiskPoint::new(47.5, -80.2, "Habitat sensitivity", 0.6),
];

pub fn risk_points_for(region: Region) -> &'static [RiskPoint] {
    match region {
        Region::Northern => &NORTHERN_POINTS,
        Region::Default => &DEFAULT_POINTS,
    }
}

/// Demo risk points for the region containing `center`.
pub fn derive_risk_points(center: Coordinate) -> Vec<RiskPoint> {
    risk_points_for(classify_region(center)).to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityBucket {
    Low,
    Medium,
    High,
}

impl SeverityBucket {
    /// Lower bounds are exclusive: 0.8 is medium, 0.65 is low.
    pub fn from_weight(weight: f64) -> Self {
        if weight > 0.8 {
            Self::High
        } else if weight > 0.65 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn palette(self) -> &'static BucketPalette {
        match self {
            Self::Low => &STYLE_TABLE[0],
            Self::Medium => &STYLE_TABLE[1],
            Self::High => &STYLE_TABLE[2],
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct BucketPalette {
    pub bucket: SeverityBucket,
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
}

pub const BASE_RADIUS: f64 = 4.0;
pub const RADIUS_SCALE: f64 = 6.0;
pub const STROKE_WEIGHT: f64 = 2.0;
pub const FILL_OPACITY: f64 = 0.35;

pub static STYLE_TABLE: [BucketPalette; 3] = [
    BucketPalette {
        bucket: SeverityBucket::Low,
        stroke_color: "#f59e0b",
        fill_color: "#fbbf24",
    },
    BucketPalette {
        bucket: SeverityBucket::Medium,
        stroke_color: "#f97316",
        fill_color: "#fb923c",
    },
    BucketPalette {
        bucket: SeverityBucket::High,
        stroke_color: "#dc2626",
        fill_color: "#ef4444",
    },
];

/// Circle-marker presentation for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub bucket: SeverityBucket,
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    pub radius: f64,
}

impl MarkerStyle {
    pub fn for_weight(weight: f64) -> Self {
        let palette = SeverityBucket::from_weight(weight).palette();
        Self {
            bucket: palette.bucket,
            stroke_color: palette.stroke_color,
            fill_color: palette.fill_color,
            stroke_weight: STROKE_WEIGHT,
            fill_opacity: FILL_OPACITY,
            radius: BASE_RADIUS + (weight * RADIUS_SCALE).round(),
        }
    }
}

/// Tooltip drawn above each marker.
pub const TOOLTIP_OFFSET: (i32, i32) = (0, -6);

/// A risk point paired with its resolved style, ready for the marker layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMarker {
    pub point: RiskPoint,
    pub style: MarkerStyle,
}

impl From<RiskPoint> for RiskMarker {
    fn from(point: RiskPoint) -> Self {
        let style = point.style();
        Self { point, style }
    }
}

pub fn risk_markers(center: Coordinate) -> Vec<RiskMarker> {
    derive_risk_points(center)
        .into_iter()
        .map(RiskMarker::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn labels(points: &[RiskPoint]) -> Vec<&'static str> {
        points.iter().map(|p| p.label).collect()
    }

    #[test]
    fn northern_centers_get_northern_set() {
        for lat in [60.0001, 62.45, 75.0, 90.0] {
            let points = derive_risk_points(at(lat, -114.38));
            assert_eq!(points.len(), 3);
            assert_eq!(
                labels(&points),
                ["NWT — watershed risk", "Permafrost sensitivity", "Caribou corridor proximity"]
            );
            assert_eq!(points, derive_risk_points(at(lat, -114.38)));
        }
    }

    #[test]
    fn other_centers_get_default_set() {
        for lat in [60.0, 46.49, 0.0, -90.0] {
            let points = derive_risk_points(at(lat, -81.01));
            assert_eq!(
                labels(&points),
                ["Sudbury watershed flag", "Timmins wetlands buffer", "Habitat sensitivity"]
            );
            let weights: Vec<f64> = points.iter().map(|p| p.severity_weight).collect();
            assert_eq!(weights, [0.85, 0.7, 0.6]);
        }
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify_region(at(60.0, 0.0)), Region::Default);
        assert_eq!(classify_region(at(60.01, 0.0)), Region::Northern);
    }

    #[test]
    fn severity_buckets() {
        assert_eq!(SeverityBucket::from_weight(0.85), SeverityBucket::High);
        assert_eq!(SeverityBucket::from_weight(0.7), SeverityBucket::Medium);
        assert_eq!(SeverityBucket::from_weight(0.5), SeverityBucket::Low);
    }

    #[test]
    fn bucket_boundaries_are_exclusive() {
        assert_eq!(SeverityBucket::from_weight(0.8), SeverityBucket::Medium);
        assert_eq!(SeverityBucket::from_weight(0.65), SeverityBucket::Low);
        assert_eq!(SeverityBucket::from_weight(0.0), SeverityBucket::Low);
        assert_eq!(SeverityBucket::from_weight(1.0), SeverityBucket::High);
    }

    #[test]
    fn style_is_repeatable() {
        for weight in [0.0, 0.5, 0.65, 0.7, 0.8, 0.85, 0.9, 1.0] {
            assert_eq!(MarkerStyle::for_weight(weight), MarkerStyle::for_weight(weight));
        }
    }

    #[test]
    fn table_entries_match_their_bucket() {
        for bucket in [SeverityBucket::Low, SeverityBucket::Medium, SeverityBucket::High] {
            assert_eq!(bucket.palette().bucket, bucket);
        }
    }

    #[test]
    fn radius_formula() {
        assert_eq!(MarkerStyle::for_weight(0.9).radius, 9.0);
        assert_eq!(MarkerStyle::for_weight(0.7).radius, 8.0);
        assert_eq!(MarkerStyle::for_weight(0.6).radius, 8.0);
        assert_eq!(MarkerStyle::for_weight(0.0).radius, 4.0);
    }

    #[test]
    fn high_marker_colors() {
        let style = MarkerStyle::for_weight(0.9);
        assert_eq!(style.bucket, SeverityBucket::High);
        assert_eq!(style.stroke_color, "#dc2626");
        assert_eq!(style.fill_color, "#ef4444");
        assert_eq!(style.stroke_weight, 2.0);
        assert_eq!(style.fill_opacity, 0.35);
    }

    #[test]
    fn markers_carry_point_style() {
        let markers = risk_markers(at(46.49, -81.01));
        let buckets: Vec<_> = markers.iter().map(|m| m.style.bucket).collect();
        assert_eq!(
            buckets,
            [SeverityBucket::High, SeverityBucket::Medium, SeverityBucket::Low]
        );
    }
}
