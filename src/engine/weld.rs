use std::collections::HashMap;

use crate::math::Point3;

/// Maps every vertex to the index of the first vertex within `tolerance`
/// of it, so faces that only share positions also share indices.
///
/// Positions are bucketed on a grid of `tolerance`-sized cells and each
/// vertex is compared against the canonical vertices of its 27 neighbouring
/// cells. Vertices with non-finite coordinates are never merged.
pub(crate) fn weld(vertices: &[Point3], tolerance: f64) -> Vec<usize> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return (0..vertices.len()).collect();
    }

    let mut grid: HashMap<[i64; 3], Vec<usize>> = HashMap::new();
    let mut canonical = Vec::with_capacity(vertices.len());

    for (index, point) in vertices.iter().enumerate() {
        let Some(cell) = cell_of(point, tolerance) else {
            canonical.push(index);
            continue;
        };
        let existing = neighbours(cell).find_map(|key| {
            grid.get(&key)?
                .iter()
                .copied()
                .find(|&other| (vertices[other] - *point).norm() <= tolerance)
        });
        match existing {
            Some(other) => canonical.push(other),
            None => {
                grid.entry(cell).or_default().push(index);
                canonical.push(index);
            }
        }
    }
    canonical
}

#[allow(clippy::cast_possible_truncation)]
fn cell_of(point: &Point3, cell_size: f64) -> Option<[i64; 3]> {
    if !point.coords.iter().all(|v| v.is_finite()) {
        return None;
    }
    let coord = |v: f64| (v / cell_size).floor() as i64;
    Some([coord(point.x), coord(point.y), coord(point.z)])
}

fn neighbours([x, y, z]: [i64; 3]) -> impl Iterator<Item = [i64; 3]> {
    (-1..=1).flat_map(move |dx| {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).map(move |dz| {
                [
                    x.saturating_add(dx),
                    y.saturating_add(dy),
                    z.saturating_add(dz),
                ]
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn distinct_vertices_keep_their_index() {
        let vertices = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert_eq!(weld(&vertices, 1e-10), vec![0, 1, 2]);
    }

    #[test]
    fn coincident_vertices_map_to_the_first() {
        let vertices = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
        ];
        assert_eq!(weld(&vertices, 1e-10), vec![0, 1, 0, 1]);
    }

    #[test]
    fn non_finite_vertices_are_left_alone() {
        let vertices = [p(f64::NAN, 0.0, 0.0), p(f64::NAN, 0.0, 0.0), p(0.0, 0.0, 0.0)];
        assert_eq!(weld(&vertices, 1e-10), vec![0, 1, 2]);
    }

    #[test]
    fn near_vertices_across_a_cell_boundary_are_merged() {
        let vertices = [p(0.999_9, 0.0, 0.0), p(1.000_1, 0.0, 0.0)];
        assert_eq!(weld(&vertices, 1e-3), vec![0, 0]);
        assert_eq!(weld(&vertices, 1e-6), vec![0, 1]);
    }
}
