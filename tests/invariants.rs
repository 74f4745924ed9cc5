//! The eight structural invariants every sweep operation is expected
//! to hold, checked against small hand-picked fixtures.

use sweep_geometry::{
    intersect_polygons, reduce_polygon, stroke_to_polygon, tessellate_polygon, Affine, Edge,
    FillRule, LineCap, LineJoin, PathEvent, Point, Polygon, Style, Trapezoid,
};

fn edge(p1: (i32, i32), p2: (i32, i32), dir: i8) -> Edge {
    Edge::from_segment(Point::new(p1.0, p1.1), Point::new(p2.0, p2.1), dir).unwrap()
}

fn crossing_diagonals() -> Polygon {
    Polygon::from_edges([edge((0, 0), (10, 10), 1), edge((10, 0), (0, 10), 1)])
}

fn near_miss() -> Polygon {
    Polygon::from_edges([
        edge((4, 0), (0, 9), 1),
        edge((7, 0), (0, 3), 1),
        edge((5, 0), (1, 7), 1),
    ])
}

/// Winding number at `(x, y)` from `edges`, by ray-casting a horizontal
/// ray toward `+x` and summing the `dir` of every edge it crosses.
fn winding_at(edges: &[Edge], x: i32, y: i32) -> i32 {
    edges
        .iter()
        .filter(|e| e.top() <= y && y < e.bottom())
        .filter(|e| e.x_at_y(y) > x)
        .map(|e| e.dir() as i32)
        .sum()
}

fn is_inside(rule: FillRule, w: i32) -> bool {
    match rule {
        FillRule::Winding => w != 0,
        FillRule::EvenOdd => w & 1 != 0,
    }
}

fn inside_trapezoids(traps: &[Trapezoid], x: i32, y: i32) -> bool {
    traps.iter().any(|t| {
        if y < t.top() || y >= t.bottom() {
            return false;
        }
        let left = t.left().x_at_y(y).unwrap();
        let right = t.right().x_at_y(y).unwrap();
        left <= x && x < right
    })
}

fn trapezoid_area(t: &Trapezoid) -> f64 {
    let top_width = (t.right().x_at_y(t.top()).unwrap() - t.left().x_at_y(t.top()).unwrap()) as f64;
    let bottom_width =
        (t.right().x_at_y(t.bottom()).unwrap() - t.left().x_at_y(t.bottom()).unwrap()) as f64;
    let height = (t.bottom() - t.top()) as f64;
    0.5 * (top_width + bottom_width) * height
}

/// 1. Determinism: sweeping the same polygon twice yields identical
/// trapezoid lists.
#[test]
fn determinism() {
    let polygon = crossing_diagonals();
    let a = tessellate_polygon(&polygon, FillRule::EvenOdd).unwrap();
    let b = tessellate_polygon(&polygon, FillRule::EvenOdd).unwrap();
    assert_eq!(a, b);
}

/// 2. Coverage: a trapezoid exists under a sample point exactly where
/// its winding number is inside under the fill rule.
#[test]
fn coverage() {
    let polygon = crossing_diagonals();
    let traps = tessellate_polygon(&polygon, FillRule::EvenOdd).unwrap();
    for y in 0..10 {
        for x in 0..10 {
            let w = winding_at(polygon.edges(), x, y);
            assert_eq!(
                inside_trapezoids(&traps, x, y),
                is_inside(FillRule::EvenOdd, w),
                "mismatch at ({x}, {y}), winding {w}"
            );
        }
    }
}

/// 3. Disjointness: no two trapezoids in a sweep's output overlap.
#[test]
fn disjointness() {
    let polygon = near_miss();
    let traps = tessellate_polygon(&polygon, FillRule::Winding).unwrap();
    for (i, a) in traps.iter().enumerate() {
        for b in &traps[i + 1..] {
            let lo = a.top().max(b.top());
            let hi = a.bottom().min(b.bottom());
            if lo >= hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            let (a_left, a_right) = (a.left().x_at_y(mid).unwrap(), a.right().x_at_y(mid).unwrap());
            let (b_left, b_right) = (b.left().x_at_y(mid).unwrap(), b.right().x_at_y(mid).unwrap());
            let overlap = a_left.max(b_left) < a_right.min(b_right);
            assert!(!overlap, "trapezoids overlap at y={mid}");
        }
    }
}

/// 4. Orientation: every trapezoid's left boundary is strictly left of
/// its right boundary at the vertical midpoint.
#[test]
fn orientation() {
    for polygon in [crossing_diagonals(), near_miss()] {
        for rule in [FillRule::Winding, FillRule::EvenOdd] {
            let traps = tessellate_polygon(&polygon, rule).unwrap();
            for t in &traps {
                let (left, right) = t.x_at_mid();
                assert!(left < right, "trapezoid not left-to-right: {left} >= {right}");
            }
        }
    }
}

/// 5. Idempotence: reducing an already-reduced polygon changes
/// nothing observable about its tessellated region.
#[test]
fn idempotence() {
    let polygon = near_miss();
    let once = reduce_polygon(&polygon, FillRule::Winding).unwrap();
    let twice = reduce_polygon(&once, FillRule::Winding).unwrap();

    let traps_once = tessellate_polygon(&once, FillRule::Winding).unwrap();
    let traps_twice = tessellate_polygon(&twice, FillRule::Winding).unwrap();
    assert_eq!(traps_once, traps_twice);
}

/// 6. Round-trip: reducing a polygon before tessellating describes
/// the same region as tessellating it directly.
#[test]
fn round_trip() {
    let polygon = crossing_diagonals();
    let direct = tessellate_polygon(&polygon, FillRule::EvenOdd).unwrap();
    let reduced = reduce_polygon(&polygon, FillRule::EvenOdd).unwrap();
    let via_reduce = tessellate_polygon(&reduced, FillRule::Winding).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(
                inside_trapezoids(&direct, x, y),
                inside_trapezoids(&via_reduce, x, y),
                "region mismatch at ({x}, {y})"
            );
        }
    }
}

/// 7. Intersection symmetry: `intersect(a, b)` and `intersect(b, a)`
/// describe the same region.
#[test]
fn intersection_symmetry() {
    let a = Polygon::from_edges([edge((0, 0), (0, 10), 1), edge((10, 0), (10, 10), -1)]);
    let b = Polygon::from_edges([edge((5, 0), (5, 15), 1), edge((15, 0), (15, 15), -1)]);

    let ab = intersect_polygons(&a, FillRule::Winding, &b, FillRule::Winding).unwrap();
    let ba = intersect_polygons(&b, FillRule::Winding, &a, FillRule::Winding).unwrap();

    let traps_ab = tessellate_polygon(&ab, FillRule::Winding).unwrap();
    let traps_ba = tessellate_polygon(&ba, FillRule::Winding).unwrap();

    for y in 0..10 {
        for x in 0..15 {
            assert_eq!(
                inside_trapezoids(&traps_ab, x, y),
                inside_trapezoids(&traps_ba, x, y),
                "asymmetric intersection at ({x}, {y})"
            );
        }
    }
}

/// 8. Stroke closure: a closed path's stroked, tessellated region has
/// a total area bounded above by perimeter times width plus a
/// generous allowance for join/cap overlap, and bounded below by a
/// region that at least covers the path's own perimeter.
#[test]
fn stroke_closure() {
    let path = [
        PathEvent::Move(Point::new(0, 0)),
        PathEvent::Line(Point::new(10, 0)),
        PathEvent::Line(Point::new(10, 10)),
        PathEvent::Line(Point::new(0, 10)),
        PathEvent::Close,
    ];
    let style = Style {
        line_width: 2.0,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Miter,
        miter_limit: 10.0,
        dash_pattern: None,
    };
    let identity = Affine::default();
    let stroke = stroke_to_polygon(&path, &style, &identity, &identity, 0.1).unwrap();
    let traps = tessellate_polygon(&stroke, FillRule::Winding).unwrap();
    assert!(!traps.is_empty());

    let area: f64 = traps.iter().map(trapezoid_area).sum();
    let perimeter = 40.0;
    let width = 2.0;
    // Upper bound: perimeter * width plus a generous margin for the
    // four corner miters' extra coverage.
    assert!(area <= perimeter * width + 4.0 * width * width);
    // Lower bound: at least the area of the plain unmitered band.
    assert!(area >= perimeter * width * 0.5);
}
