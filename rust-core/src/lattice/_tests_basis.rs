#[cfg(test)]
mod _tests_basis {
    use super::super::basis::{
        AtomKind, BasisAtom, RenderCategory, body_center, corners, expand, face_centers,
    };
    use super::super::lattice_parameters::LatticeParameters;
    use super::super::lattice_vectors::solve;
    use nalgebra::Vector3;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_expand_matches_linear_combination() {
        let vectors = solve(&LatticeParameters {
            a: 3.0,
            b: 4.0,
            c: 5.0,
            alpha: 70.0,
            beta: 80.0,
            gamma: 95.0,
        })
        .unwrap();
        let basis = vec![
            BasisAtom::new(0.0, 0.0, 0.0, AtomKind::Corner),
            BasisAtom::new(0.5, 0.5, 0.5, AtomKind::BodyCenter),
            BasisAtom::new(1.0 / 3.0, 2.0 / 3.0, 0.5, AtomKind::InterstitialHcp),
            BasisAtom::new(1.0, 0.5, 0.5, AtomKind::FaceCenter),
        ];

        let atoms = expand(&vectors, &basis);
        assert_eq!(atoms.len(), basis.len());
        for (atom, source) in atoms.iter().zip(&basis) {
            let [u, v, w] = [source.position.x, source.position.y, source.position.z];
            let expected = u * vectors.v1 + v * vectors.v2 + w * vectors.v3;
            assert!((atom.position - expected).norm() < TOL);
            assert_eq!(atom.kind, source.kind);
        }
    }

    #[test]
    fn test_expand_allows_coordinates_outside_cell() {
        let vectors = solve(&LatticeParameters::orthogonal(2.0, 2.0, 2.0)).unwrap();
        let atoms = expand(
            &vectors,
            &[
                BasisAtom::new(-0.5, 1.5, 2.0, AtomKind::Corner),
                BasisAtom::new(0.25, 0.0, -1.0, AtomKind::FaceCenter),
            ],
        );
        assert!((atoms[0].position - Vector3::new(-1.0, 3.0, 4.0)).norm() < TOL);
        assert!((atoms[1].position - Vector3::new(0.5, 0.0, -2.0)).norm() < TOL);
        assert_eq!(atoms[1].kind, AtomKind::FaceCenter);
    }

    #[test]
    fn test_expand_empty_basis() {
        let vectors = solve(&LatticeParameters::orthogonal(1.0, 1.0, 1.0)).unwrap();
        assert!(expand(&vectors, &[]).is_empty());
    }

    #[test]
    fn test_basis_builders() {
        let corner_atoms = corners(AtomKind::Corner);
        assert_eq!(corner_atoms.len(), 8);
        assert!(corner_atoms.iter().all(|atom| {
            atom.position.iter().all(|&x| x == 0.0 || x == 1.0)
        }));

        assert_eq!(body_center(AtomKind::BodyCenter)[0].position, Vector3::new(0.5, 0.5, 0.5));

        let faces = face_centers(AtomKind::FaceCenter);
        assert_eq!(faces.len(), 6);
        // Every face center has exactly one coordinate on a cell face
        for atom in &faces {
            let on_face = atom.position.iter().filter(|&&x| x == 0.0 || x == 1.0).count();
            assert_eq!(on_face, 1);
        }
    }

    #[test]
    fn test_render_categories() {
        assert_eq!(AtomKind::Corner.render_category(), RenderCategory::A);
        assert_eq!(AtomKind::BodyCenter.render_category(), RenderCategory::B);
        assert_eq!(AtomKind::FaceCenter.render_category(), RenderCategory::B);
        assert_eq!(AtomKind::InterstitialHcp.render_category(), RenderCategory::B);

        assert_eq!(RenderCategory::default(), RenderCategory::A);
        assert_eq!(RenderCategory::from_tag("C"), RenderCategory::C);
        assert_eq!(RenderCategory::from_tag("purple"), RenderCategory::A);
        assert_eq!(RenderCategory::B.color(), 0xff4444);
        assert_eq!(RenderCategory::A.tag(), "A");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(AtomKind::from_tag("corner"), Some(AtomKind::Corner));
        assert_eq!(AtomKind::from_tag("center-face"), Some(AtomKind::FaceCenter));
        assert_eq!(AtomKind::from_tag("B"), Some(AtomKind::BodyCenter));
        assert_eq!(AtomKind::from_tag("unobtainium"), None);
        assert_eq!(AtomKind::from_tag_or_default("unobtainium"), AtomKind::Corner);
        assert_eq!(AtomKind::ALL.len(), 4);
    }
}
