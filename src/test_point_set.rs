#[cfg(test)]
mod test_point_set {
    use crate::{KdError, Point2D, PointSet, Rect};

    #[test]
    fn test_point_set_ignores_duplicates() {
        let mut set = PointSet::new();
        assert!(set.insert(Point2D::new(0.3, 0.3)).unwrap());
        assert!(!set.insert(Point2D::new(0.3, 0.3)).unwrap());
        assert!(set.insert(Point2D::new(0.3, 0.4)).unwrap());
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Point2D::new(0.3, 0.3), Point2D::new(0.3, 0.4)],
            "insertion order is kept"
        );
    }

    #[test]
    fn test_point_set_has_no_domain() {
        let mut set = PointSet::new();
        assert!(set.insert(Point2D::new(-40.0, 1e9)).unwrap());
        assert!(matches!(set.insert(Point2D::new(f64::NAN, 0.0)), Err(KdError::InvalidArgument(_))));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_point_set_range_in_insertion_order() {
        let mut set = PointSet::new();
        for (x, y) in [(0.9, 0.9), (0.1, 0.1), (0.5, 0.5), (0.2, 0.8)] {
            let _inserted = set.insert(Point2D::new(x, y)).unwrap();
        }
        let found = set.range(&Rect::new(0.0, 0.0, 0.5, 0.5).unwrap());
        assert_eq!(found, vec![Point2D::new(0.1, 0.1), Point2D::new(0.5, 0.5)]);
    }

    #[test]
    fn test_point_set_nearest_tie_goes_to_first_scanned() {
        let mut set = PointSet::new();
        let _inserted = set.insert(Point2D::new(0.75, 0.5)).unwrap();
        let _inserted = set.insert(Point2D::new(0.25, 0.5)).unwrap();
        assert_eq!(set.nearest(Point2D::new(0.5, 0.5)).unwrap(), Point2D::new(0.75, 0.5));
    }

    #[test]
    fn test_point_set_nearest_empty() {
        assert_eq!(PointSet::new().nearest(Point2D::new(0.0, 0.0)), Err(KdError::EmptyCollection));
        assert!(PointSet::default().is_empty());
    }
}
