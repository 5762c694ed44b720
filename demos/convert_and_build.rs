//! Convert and Build Demo
//!
//! This example turns a batch of domain objects into datapoints, validates the
//! batch, and hands it to a median-split tree builder through the TreeBuilder seam.

use kdpoint::{
    convert_batch, convert_points, distance, sort_points, AxisOrder, Datapoint, PointSet,
    ToDatapoint,
};

#[derive(Debug, Clone)]
struct City {
    name: &'static str,
    lon: f64,
    lat: f64,
}

impl ToDatapoint for City {
    type Payload = &'static str;

    fn to_datapoint(&self) -> Datapoint<&'static str> {
        Datapoint::new(self.name, [self.lon, self.lat])
    }
}

struct Waypoint {
    coords: Vec<f64>,
}

impl ToDatapoint for Waypoint {
    type Payload = ();

    fn to_datapoint(&self) -> Datapoint<()> {
        Datapoint::detached(self.coords.clone())
    }
}

#[derive(Debug)]
enum Tree {
    Empty,
    Node {
        point: Datapoint<&'static str>,
        left: Box<Tree>,
        right: Box<Tree>,
    },
}

// Conventional k-d construction: sort the range on the depth's axis, take
// the middle point as the branch, recurse on both halves.
fn build(points: PointSet<&'static str>, depth: usize) -> Tree {
    if points.is_empty() {
        return Tree::Empty;
    }
    let dims = points[0].dimensionality();
    let mut owned = points.into_points();
    sort_points(&mut owned, &AxisOrder::for_depth(depth, dims));

    let mid = owned.len() / 2;
    let right = owned.split_off(mid + 1);
    let point = match owned.pop() {
        Some(point) => point,
        None => return Tree::Empty,
    };

    Tree::Node {
        point,
        left: Box::new(build(PointSet::from(owned), depth + 1)),
        right: Box::new(build(PointSet::from(right), depth + 1)),
    }
}

fn print_tree(tree: &Tree, indent: usize) {
    if let Tree::Node { point, left, right } = tree {
        println!("{:width$}{}", "", point, width = indent * 2);
        print_tree(left, indent + 1);
        print_tree(right, indent + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Convert and Build Demo ===\n");

    let cities = vec![
        City {
            name: "Harbor",
            lon: 2.0,
            lat: 3.0,
        },
        City {
            name: "Mill",
            lon: 5.0,
            lat: 4.0,
        },
        City {
            name: "Quarry",
            lon: 9.0,
            lat: 6.0,
        },
        City {
            name: "Forge",
            lon: 4.0,
            lat: 7.0,
        },
        City {
            name: "Orchard",
            lon: 8.0,
            lat: 1.0,
        },
        City {
            name: "Dlocks",
            lon: 7.0,
            lat: 2.0,
        },
    ];
    println!("✓ Prepared {} domain objects", cities.len());

    // Convert and build in one step; the builder only runs if every city
    // produced a point of the same dimensionality.
    let tree = convert_batch(&cities, &build)?;
    println!("✓ Converted the batch and built a median-split tree");

    println!("\n--- Tree structure ---");
    print_tree(&tree, 0);

    // The metric is consumed independently of construction: scan the
    // converted points for the nearest city to a probe location.
    println!("\n--- Nearest city to a probe point ---");
    let points = convert_points(&cities)?;
    let probe: Datapoint<()> = Datapoint::detached([6.0, 3.0]);

    let mut best: Option<(&Datapoint<&'static str>, f64)> = None;
    for point in &points {
        let d = distance(&probe, point)?;
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((point, d));
        }
    }
    if let Some((point, d)) = best {
        println!("✓ Probe {}", probe);
        println!("✓ Nearest is {} at distance {:.3}", point, d);
    }

    // A batch that mixes dimensionalities is refused before the builder runs.
    println!("\n--- Validation ---");
    let mixed = vec![
        Waypoint {
            coords: vec![1.0, 2.0],
        },
        Waypoint {
            coords: vec![1.0, 2.0, 3.0],
        },
    ];
    let refused = |points: PointSet<()>, _depth: usize| points.len();
    match convert_batch(&mixed, &refused) {
        Ok(_) => println!("✗ Mixed batch was unexpectedly accepted"),
        Err(e) => println!("✓ Mixed batch was refused: {}", e),
    }

    println!("\n✅ Demo complete");

    Ok(())
}
