#[cfg(test)]
mod _tests_cell_edges {
    use super::super::axes::build_axes;
    use super::super::cell_edges::{
        EdgeSegment, build_cell_edges, build_hexagonal_prism, hexagonal_prism_atoms,
        hexagonal_prism_vertices,
    };
    use crate::lattice::{AtomKind, LatticeParameters, solve};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    const TOL: f64 = 1e-10;

    fn triclinic_vectors() -> crate::lattice::LatticeVectors {
        solve(&LatticeParameters {
            a: 3.0,
            b: 4.0,
            c: 5.0,
            alpha: 70.0,
            beta: 80.0,
            gamma: 95.0,
        })
        .unwrap()
    }

    fn count_duplicates(edges: &[EdgeSegment]) -> usize {
        let mut duplicates = 0;
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                if edges[i].matches(&edges[j], TOL) {
                    duplicates += 1;
                }
            }
        }
        duplicates
    }

    #[test]
    fn test_cell_edges_count_and_uniqueness() {
        let edges = build_cell_edges(&triclinic_vectors());
        assert_eq!(edges.len(), 12);
        assert_eq!(count_duplicates(&edges), 0);
    }

    #[test]
    fn test_every_corner_has_three_edges() {
        let vectors = triclinic_vectors();
        let edges = build_cell_edges(&vectors);

        for corner in vectors.corners() {
            let degree = edges
                .iter()
                .filter(|edge| edge.start == corner || edge.end == corner)
                .count();
            assert_eq!(degree, 3, "corner {:?}", corner);
        }
    }

    #[test]
    fn test_cell_edges_have_no_diagonals() {
        let vectors = triclinic_vectors();
        let (a, b, c) = vectors.lengths();

        // Each edge is parallel to one lattice vector and has its length
        for edge in build_cell_edges(&vectors) {
            let length = edge.length();
            let matches_axis = [a, b, c].iter().any(|l| (length - l).abs() < TOL);
            assert!(matches_axis, "unexpected edge length {}", length);
        }
    }

    #[test]
    fn test_cubic_edges_on_grid() {
        let vectors = solve(&LatticeParameters::orthogonal(3.0, 3.0, 3.0)).unwrap();
        for edge in build_cell_edges(&vectors) {
            assert_abs_diff_eq!(edge.length(), 3.0, epsilon = TOL);
            for point in [edge.start, edge.end] {
                for x in point.iter() {
                    assert!(x.abs() < TOL || (x - 3.0).abs() < TOL);
                }
            }
        }
    }

    #[test]
    fn test_hexagonal_prism_counts() {
        let edges = build_hexagonal_prism(1.0, 2.0);
        assert_eq!(edges.len(), 18);
        assert_eq!(count_duplicates(&edges), 0);

        let vertical = edges.iter().filter(|e| (e.end - e.start).z.abs() > TOL).count();
        assert_eq!(vertical, 6);
    }

    #[test]
    fn test_hexagonal_prism_first_pair() {
        let edges = build_hexagonal_prism(1.0, 2.0);
        assert_eq!(edges[0].start, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(edges[0].end, Vector3::new(1.0, 0.0, 2.0));

        let vertices = hexagonal_prism_vertices(1.0, 2.0);
        assert_eq!(vertices[0], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(vertices[6], Vector3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_hexagonal_prism_atoms_sit_on_vertices() {
        let atoms = hexagonal_prism_atoms(3.0, 4.9);
        let vertices = hexagonal_prism_vertices(3.0, 4.9);
        assert_eq!(atoms.len(), 12);
        for (atom, vertex) in atoms.iter().zip(vertices.iter()) {
            assert_eq!(atom.kind, AtomKind::Corner);
            assert_abs_diff_eq!((atom.position - vertex).norm(), 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn test_hexagonal_prism_rings() {
        let a = 3.0;
        let c = 5.0;
        let vertices = hexagonal_prism_vertices(a, c);
        for i in 0..6 {
            // Top vertices sit directly above bottom ones
            assert_abs_diff_eq!(vertices[i].x, vertices[i + 6].x, epsilon = TOL);
            assert_abs_diff_eq!(vertices[i].y, vertices[i + 6].y, epsilon = TOL);
            assert_abs_diff_eq!(vertices[i].z, 0.0);
            assert_abs_diff_eq!(vertices[i + 6].z, c);
            assert_abs_diff_eq!(vertices[i].xy().norm(), a, epsilon = TOL);
        }
        // A regular hexagon has side length equal to its circumradius
        for edge in build_hexagonal_prism(a, c) {
            let expected = if (edge.end - edge.start).z.abs() > TOL { c } else { a };
            assert_abs_diff_eq!(edge.length(), expected, epsilon = TOL);
        }
    }

    #[test]
    fn test_hexagonal_cell_corners_lie_on_prism() {
        let a = 3.0;
        let vectors = solve(&LatticeParameters::hexagonal(a, 5.0)).unwrap();
        let vertices = hexagonal_prism_vertices(a, 5.0);
        for corner in [vectors.v1, vectors.v2, vectors.v1 + vectors.v2] {
            assert!(vertices.iter().any(|v| (v - corner).norm() < TOL));
        }
    }

    #[test]
    fn test_axes() {
        let axes = build_axes(3.0);
        let labels: Vec<char> = axes.iter().map(|axis| axis.label).collect();
        assert_eq!(labels, vec!['a', 'b', 'c']);

        assert_eq!(axes[0].end, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(axes[1].end, Vector3::new(0.0, 3.0, 0.0));
        assert_eq!(axes[2].start, Vector3::zeros());
        assert_abs_diff_eq!(axes[2].label_position.z, 3.2, epsilon = TOL);
    }
}
