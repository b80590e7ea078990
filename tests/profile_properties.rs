//! Integration tests for the profile pipeline.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use mitrecut::operations::{
    AnalyzeContour, InteriorOffset, NormalizeConfig, ScaleSpec, VertexKind,
};
use mitrecut::{
    Bounds, Contour, GeometryError, MitrecutError, Point2, ProfileConfig, ProfileCut,
};
use proptest::prelude::*;

const CORSICA: &str = include_str!("../demos/outline/corse.json");

fn corsica() -> Vec<Point2> {
    let pairs: Vec<(f64, f64)> = serde_json::from_str(CORSICA).unwrap();
    pairs.into_iter().map(|(x, y)| Point2::new(x, y)).collect()
}

fn regular_polygon(n: usize, radius: f64) -> Contour {
    let points = (0..n)
        .map(|k| {
            let a = TAU * k as f64 / n as f64;
            Point2::new(radius * a.cos(), radius * a.sin())
        })
        .collect();
    Contour::new(points).unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn square_side_ten_thickness_one() {
        let config = ProfileConfig::default()
            .normalize(NormalizeConfig::with_width(10.0))
            .thickness(1.0);
        let raw = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let report = ProfileCut::new(config).execute(&raw).unwrap();
        assert_relative_eq!(report.total_length, 40.0, epsilon = 1e-9);
        assert_relative_eq!(report.profile_length, 36.0, epsilon = 1e-9);
        let cuts: Vec<f64> = report.segments.iter().map(|s| s.cut_angle_deg).collect();
        for cut in cuts {
            assert_relative_eq!(cut, 45.0, epsilon = 1e-9);
        }
        let inner = report.interior.to_contour().unwrap().bounds();
        assert_relative_eq!(inner.width(), 8.0, epsilon = 1e-9);
        assert_relative_eq!(inner.height(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn corsica_outline() {
        let config = ProfileConfig::default()
            .normalize(NormalizeConfig::with_width(915.0).flip_vertical(true))
            .thickness(20.0)
            .saw_kerf(2.0);
        let report = ProfileCut::new(config).execute(&corsica()).unwrap();

        assert_eq!(report.segment_count(), 31);
        assert_relative_eq!(report.extent.width(), 915.0, epsilon = 1e-9);
        let sum: f64 = report.segments.iter().map(|s| s.length).sum();
        assert_relative_eq!(sum, report.total_length, epsilon = 1e-9);
        assert_relative_eq!(
            report.profile_length,
            (report.total_length + report.interior.total_length()) / 2.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            report.stock_length(),
            report.profile_length + 62.0,
            epsilon = 1e-9
        );
        for s in &report.segments {
            assert!(s.interior.x.is_finite() && s.interior.y.is_finite());
            assert!((0.0..=180.0).contains(&s.cut_angle_deg));
            match s.kind {
                VertexKind::Salient => assert!(s.cut_angle_deg <= 90.0),
                VertexKind::Reentrant => assert!(s.cut_angle_deg >= 90.0),
            }
        }
        assert!(report
            .segments
            .iter()
            .any(|s| s.kind == VertexKind::Reentrant));
    }

    #[test]
    fn mirrored_survey_gives_the_same_cuts() {
        let straight = ProfileConfig::default().thickness(20.0);
        let flipped = straight.normalize(NormalizeConfig::with_width(915.0).flip_vertical(true));
        let a = ProfileCut::new(straight).execute(&corsica()).unwrap();
        let b = ProfileCut::new(flipped).execute(&corsica()).unwrap();

        assert_ne!(a.orientation, b.orientation);
        assert_relative_eq!(a.profile_length, b.profile_length, epsilon = 1e-6);
        for (x, y) in a.segments.iter().zip(&b.segments) {
            assert_relative_eq!(x.length, y.length, epsilon = 1e-9);
            assert_relative_eq!(x.cut_angle_deg, y.cut_angle_deg, epsilon = 1e-9);
            assert_eq!(x.kind, y.kind);
        }
    }

    #[test]
    fn regular_hexagon() {
        let c = regular_polygon(6, 10.0);
        let analysis = AnalyzeContour::new(&c).execute().unwrap();
        for s in analysis.segments() {
            assert_relative_eq!(s.turn_angle_degrees(), 120.0, epsilon = 1e-9);
            assert_relative_eq!(s.cut_angle, 60.0, epsilon = 1e-9);
            assert_relative_eq!(s.length, 10.0, epsilon = 1e-9);
        }
        // Apothem 5√3 shrinks by the thickness, sides shrink in proportion.
        let t = 1.0;
        let apothem = 10.0 * (PI / 6.0).cos();
        let inner = InteriorOffset::new(&analysis, t).execute().unwrap();
        assert_relative_eq!(
            inner.total_length(),
            60.0 * (apothem - t) / apothem,
            epsilon = 1e-9
        );
    }

    #[test]
    fn collinear_fold_back_fails_cleanly() {
        let raw = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 6.0),
        ];
        let config = ProfileConfig::default()
            .normalize(NormalizeConfig::default().scale(ScaleSpec::Factor(1.0)))
            .thickness(1.0);
        let err = ProfileCut::new(config).execute(&raw).unwrap_err();
        assert!(matches!(
            err,
            MitrecutError::InvalidGeometry(GeometryError::UnboundedMitre { index: 1, .. })
        ));
    }

    #[test]
    fn straight_run_is_not_degenerate() {
        let c = Contour::from_xy(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 4.0), (0.0, 4.0)])
            .unwrap();
        let analysis = AnalyzeContour::new(&c).execute().unwrap();
        let inner = InteriorOffset::new(&analysis, 1.0).execute().unwrap();
        assert_relative_eq!(inner.points()[0], Point2::new(5.0, 1.0), epsilon = 1e-9);
    }
}

/// A star-shaped polygon around the origin: strictly increasing polar angles
/// with gaps below π keep it simple.
fn star_polygon() -> impl Strategy<Value = Vec<Point2>> {
    (3usize..12)
        .prop_flat_map(|n| prop::collection::vec((0.0f64..0.4, 1.0f64..10.0), n))
        .prop_map(|params| {
            let n = params.len() as f64;
            params
                .iter()
                .enumerate()
                .map(|(k, &(jitter, r))| {
                    let a = TAU * (k as f64 + jitter) / n;
                    Point2::new(r * a.cos(), r * a.sin())
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn orientation_survives_relisting(points in star_polygon(), shift in 0usize..12) {
        let c = Contour::new(points).unwrap();
        let expected = c.orientation().unwrap();
        prop_assert_eq!(c.starting_at(shift).orientation().unwrap(), expected);
    }

    #[test]
    fn deflections_make_one_full_turn(points in star_polygon(), reverse in any::<bool>()) {
        let mut points = points;
        if reverse {
            points.reverse();
        }
        let c = Contour::new(points).unwrap();
        let analysis = AnalyzeContour::new(&c).execute().unwrap();
        prop_assert!((analysis.total_deflection() - TAU).abs() < 1e-9);
    }

    #[test]
    fn cut_angles_ignore_direction(points in star_polygon()) {
        let forward = Contour::new(points.clone()).unwrap();
        let mut reversed = points;
        reversed.reverse();
        let backward = Contour::new(reversed).unwrap();

        let cuts = |c: &Contour| {
            let mut cuts: Vec<f64> = AnalyzeContour::new(c)
                .execute()
                .unwrap()
                .segments()
                .iter()
                .map(|s| s.cut_angle)
                .collect();
            cuts.sort_by(f64::total_cmp);
            cuts
        };
        for (a, b) in cuts(&forward).iter().zip(cuts(&backward).iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn thin_strip_converges_to_outline(points in star_polygon()) {
        let c = Contour::new(points).unwrap();
        let analysis = AnalyzeContour::new(&c).execute().unwrap();
        let inner = InteriorOffset::new(&analysis, 1e-9).execute().unwrap();
        for (i, p) in inner.points().iter().enumerate() {
            prop_assert!((p - c.vertex(i + 1)).norm() < 1e-3);
        }
        prop_assert!((inner.profile_length() - analysis.total_length()).abs() < 1e-3);
    }

    #[test]
    fn unit_scale_pipeline_round_trips(points in star_polygon()) {
        // Anchored at the origin, a unit-scale normalization is the identity.
        let min = Bounds::of(&points).unwrap().min;
        let raw: Vec<Point2> = points.iter().map(|p| Point2::from(p - min)).collect();
        let config = ProfileConfig::default()
            .normalize(NormalizeConfig::default().scale(ScaleSpec::Factor(1.0)))
            .thickness(1e-9);
        let report = ProfileCut::new(config).execute(&raw).unwrap();

        let n = raw.len();
        for (i, s) in report.segments.iter().enumerate() {
            prop_assert!((s.start - raw[i]).norm() < 1e-9);
            prop_assert!((s.interior - raw[(i + 1) % n]).norm() < 1e-3);
        }
        prop_assert!((report.profile_length - report.total_length).abs() < 1e-3);
    }
}
