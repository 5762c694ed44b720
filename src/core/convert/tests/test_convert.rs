// src/core/convert/tests/test_convert.rs

#[cfg(test)]
mod convert_tests {
    use std::cell::Cell;

    use crate::core::common::KdPointError;
    use crate::core::convert::{convert_batch, convert_points, FromDatapoint, ToDatapoint};
    use crate::core::order::{sort_points, AxisOrder};
    use crate::core::point::{Datapoint, PointSet};

    #[derive(Debug, Clone, PartialEq)]
    struct Beacon {
        id: u32,
        x: f64,
        y: f64,
    }

    impl ToDatapoint for Beacon {
        type Payload = u32;

        fn to_datapoint(&self) -> Datapoint<u32> {
            Datapoint::new(self.id, [self.x, self.y])
        }
    }

    impl FromDatapoint for Beacon {
        fn update_from<P>(&mut self, point: &Datapoint<P>) {
            let coords = point.coords();
            self.x = coords[0];
            self.y = coords[1];
        }
    }

    struct Origin;

    impl ToDatapoint for Origin {
        type Payload = u32;

        fn to_datapoint(&self) -> Datapoint<u32> {
            Datapoint::new(0, [0.0, 0.0])
        }
    }

    struct Reading {
        coords: Vec<f64>,
    }

    impl ToDatapoint for Reading {
        type Payload = ();

        fn to_datapoint(&self) -> Datapoint<()> {
            Datapoint::detached(self.coords.clone())
        }
    }

    fn beacons() -> Vec<Beacon> {
        vec![
            Beacon {
                id: 1,
                x: 1.0,
                y: 9.0,
            },
            Beacon {
                id: 2,
                x: 2.0,
                y: 5.0,
            },
            Beacon {
                id: 3,
                x: 3.0,
                y: 1.0,
            },
        ]
    }

    #[test]
    fn test_convert_points_preserves_length_and_order() {
        let items = beacons();
        let points = convert_points(&items).unwrap();

        assert_eq!(points.len(), items.len());
        for (item, point) in items.iter().zip(points.iter()) {
            assert_eq!(point.data(), Some(&item.id));
        }
    }

    #[test]
    fn test_converted_coords_match_standalone_conversion() {
        let items = beacons();
        let points = convert_points(&items).unwrap();

        for (item, point) in items.iter().zip(points.iter()) {
            assert!(point.eq_exact(&item.to_datapoint()));
        }
    }

    #[test]
    fn test_convert_points_accepts_borrowed_items() {
        let items = beacons();
        let refs: Vec<&Beacon> = items.iter().collect();
        let points = convert_points(&refs).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_convert_points_rejects_empty_batch() {
        let items: Vec<Beacon> = Vec::new();
        assert!(matches!(
            convert_points(&items),
            Err(KdPointError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_convert_points_rejects_mixed_dimensionality() {
        let readings = vec![
            Reading {
                coords: vec![1.0, 2.0],
            },
            Reading {
                coords: vec![1.0, 2.0, 3.0],
            },
        ];
        assert_eq!(
            convert_points(&readings).unwrap_err(),
            KdPointError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_convert_batch_invokes_builder_at_depth_zero() {
        let items = beacons();
        let builder =
            |points: PointSet<u32>, depth: usize| -> (usize, usize) { (points.len(), depth) };

        let (count, depth) = convert_batch(&items, &builder).unwrap();
        assert_eq!(count, 3);
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_convert_batch_skips_builder_on_invalid_input() {
        let mixed = vec![
            Reading {
                coords: vec![1.0, 2.0],
            },
            Reading {
                coords: vec![3.0],
            },
        ];
        let calls = Cell::new(0_u32);
        let builder = |points: PointSet<()>, _depth: usize| {
            calls.set(calls.get() + 1);
            points.len()
        };

        let result = convert_batch(&mixed, &builder);
        assert_eq!(
            result.unwrap_err(),
            KdPointError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(calls.get(), 0);

        let empty: Vec<Reading> = Vec::new();
        assert!(convert_batch(&empty, &builder).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_import_append_is_observable() {
        let mut set: PointSet<u32> = PointSet::new();
        let beacon = Beacon {
            id: 7,
            x: 4.0,
            y: 2.0,
        };

        set.import(&beacon);
        assert_eq!(set.len(), 1);
        set.import(&beacon);
        assert_eq!(set.len(), 2);

        assert_eq!(set[1].data(), Some(&7));
        assert!(set[1].eq_exact(&beacon.to_datapoint()));
    }

    #[test]
    fn test_import_appends_at_the_end() {
        let mut set: PointSet<u32> = PointSet::new();
        for beacon in beacons() {
            set.import(&beacon);
        }
        let ids: Vec<u32> = set.iter().filter_map(|p| p.data().copied()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_import_through_trait_object() {
        let beacon = Beacon {
            id: 9,
            x: 0.0,
            y: 1.0,
        };
        let importable: &dyn ToDatapoint<Payload = u32> = &beacon;

        let mut set: PointSet<u32> = PointSet::new();
        set.import(importable);
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].data(), Some(&9));
    }

    #[test]
    fn test_boxed_batch_mixes_domain_types() {
        let boxed: Vec<Box<dyn ToDatapoint<Payload = u32>>> = vec![
            Box::new(Beacon {
                id: 5,
                x: 1.0,
                y: 1.0,
            }),
            Box::new(Origin),
        ];

        let points = convert_points(&boxed).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].data(), Some(&5));
        assert_eq!(points[1].data(), Some(&0));
    }

    #[test]
    fn test_update_from_absorbs_coordinates() {
        let mut beacon = Beacon {
            id: 4,
            x: 0.0,
            y: 0.0,
        };
        let probe: Datapoint<()> = Datapoint::detached([8.0, 9.0]);

        beacon.update_from(&probe);
        assert_eq!(
            beacon,
            Beacon {
                id: 4,
                x: 8.0,
                y: 9.0,
            }
        );
    }

    #[derive(Debug, PartialEq)]
    enum Node {
        Leaf,
        Branch {
            id: u32,
            left: Box<Node>,
            right: Box<Node>,
        },
    }

    fn branch(id: u32, left: Node, right: Node) -> Node {
        Node::Branch {
            id,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    // Median-split construction in the conventional shape: sort the range
    // on the depth's axis, take the middle point as the branch, recurse on
    // both halves.
    fn build_median(points: PointSet<u32>, depth: usize) -> Node {
        if points.is_empty() {
            return Node::Leaf;
        }
        let dims = points[0].dimensionality();
        let mut owned = points.into_points();
        sort_points(&mut owned, &AxisOrder::for_depth(depth, dims));

        let mid = owned.len() / 2;
        let right = owned.split_off(mid + 1);
        let median = match owned.pop() {
            Some(point) => point,
            None => return Node::Leaf,
        };

        branch(
            median.data().copied().unwrap_or_default(),
            build_median(PointSet::from(owned), depth + 1),
            build_median(PointSet::from(right), depth + 1),
        )
    }

    #[test]
    fn test_median_split_builder_end_to_end() {
        let tree = convert_batch(&beacons(), &build_median).unwrap();
        let expected = branch(
            2,
            branch(1, Node::Leaf, Node::Leaf),
            branch(3, Node::Leaf, Node::Leaf),
        );
        assert_eq!(tree, expected);
    }
}
