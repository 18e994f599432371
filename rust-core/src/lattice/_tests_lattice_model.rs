#[cfg(test)]
mod _tests_lattice_model {
    use super::super::lattice_hoppings::{HoppingRegistry, HoppingTerm};
    use super::super::lattice_model::Lattice;
    use super::super::lattice_sublattices::SublatticeRegistry;
    use crate::error::{ErrorKind, LatticeError};
    use crate::interfaces::{Cartesian, Index3D};
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    // Helper function to create an empty square lattice
    fn create_square_lattice() -> Lattice {
        Lattice::new(&[Cartesian::new(1.0, 0.0, 0.0), Cartesian::new(0.0, 1.0, 0.0)]).unwrap()
    }

    // Helper function to create a square lattice with sublattices A, B and hopping t
    fn create_two_site_lattice() -> Lattice {
        let mut lattice = create_square_lattice();
        lattice.add_sublattice("A", Cartesian::zeros(), 0.0).unwrap();
        lattice.add_sublattice("B", Cartesian::new(0.5, 0.0, 0.0), 0.0).unwrap();
        lattice.register_hopping_energy("t", -1.0).unwrap();
        lattice.register_hopping_energy("t2", -0.1).unwrap();
        lattice
    }

    // ==================== Construction ====================

    #[test]
    fn test_dimensionality_from_vector_count() {
        let chain = Lattice::new(&[Cartesian::new(1.0, 0.0, 0.0)]).unwrap();
        assert_eq!(chain.ndim(), 1);

        let cubic = Lattice::new(&[
            Cartesian::new(1.0, 0.0, 0.0),
            Cartesian::new(0.0, 1.0, 0.0),
            Cartesian::new(0.0, 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(cubic.ndim(), 3);
        assert_eq!(cubic.min_neighbors(), 1);
        assert_eq!(cubic.offset(), Cartesian::zeros());

        let dropped = Lattice::from_vectors(
            Cartesian::new(1.0, 0.0, 0.0),
            Cartesian::new(0.0, 2.0, 0.0),
            Cartesian::zeros(),
        )
        .unwrap();
        assert_eq!(dropped.ndim(), 2);
    }

    #[test]
    fn test_invalid_primitive_vectors() {
        assert_eq!(Lattice::new(&[]).unwrap_err(), LatticeError::InvalidVectorCount(0));
        assert_eq!(
            Lattice::new(&[Cartesian::new(1.0, 0.0, 0.0); 4]).unwrap_err(),
            LatticeError::InvalidVectorCount(4)
        );
        assert_eq!(
            Lattice::new(&[Cartesian::new(1.0, 0.0, 0.0), Cartesian::zeros()]).unwrap_err(),
            LatticeError::ZeroVector(1)
        );

        let err = Lattice::new(&[Cartesian::new(1.0, 0.0, 0.0), Cartesian::new(2.0, 0.0, 0.0)])
            .unwrap_err();
        assert_eq!(err, LatticeError::SingularLatticeVectors);
        assert_eq!(err.kind(), ErrorKind::Geometry);
    }

    #[test]
    fn test_vector_checks_independent_of_length_unit() {
        // Centimetres
        let a = 0.02;
        let cubic = Lattice::new(&[
            Cartesian::new(a, 0.0, 0.0),
            Cartesian::new(0.0, a, 0.0),
            Cartesian::new(0.0, 0.0, a),
        ])
        .unwrap();
        assert_eq!(cubic.ndim(), 3);

        // Graphene in metres
        let a = 2.46e-10;
        let hexagonal = Lattice::new(&[
            Cartesian::new(a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0),
            Cartesian::new(-a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(hexagonal.ndim(), 2);
        let fractional =
            hexagonal.translate_coordinates(Cartesian::new(0.0, a * 3.0_f64.sqrt(), 0.0));
        assert_relative_eq!(fractional, Cartesian::new(1.0, 1.0, 0.0), epsilon = TOL);

        // Collinear vectors are still rejected at small and large scales
        for scale in [1e-10, 1e6] {
            let err = Lattice::new(&[
                Cartesian::new(scale, 0.0, 0.0),
                Cartesian::new(-3.0 * scale, 0.0, 0.0),
            ])
            .unwrap_err();
            assert_eq!(err, LatticeError::SingularLatticeVectors);
        }
    }

    #[test]
    fn test_lattice_is_a_plain_value() {
        fn assert_value<T: serde::Serialize + Clone + Send + Sync>() {}
        assert_value::<Lattice>();
        assert_value::<SublatticeRegistry>();
        assert_value::<HoppingRegistry>();
    }

    // ==================== Sublattice registry ====================

    #[test]
    fn test_sublattice_ids_are_dense() {
        let mut lattice = create_square_lattice();
        for (expected, name) in ["A", "B", "C", "D"].iter().enumerate() {
            let id = lattice.add_sublattice(name, Cartesian::zeros(), 0.0).unwrap();
            assert_eq!(id as usize, expected);
            assert_eq!(lattice.nsub(), expected + 1);
        }

        let ids: Vec<_> = lattice.sublattices().map(|s| s.unique_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(lattice.sub_name_map()["C"], 2);
        assert_eq!(lattice.sublattice_by_id(3).unwrap().name, "D");
    }

    #[test]
    fn test_duplicate_and_blank_sublattice_names() {
        let mut lattice = create_square_lattice();
        lattice.add_sublattice("A", Cartesian::zeros(), 0.0).unwrap();

        let err = lattice.add_sublattice("A", Cartesian::new(0.5, 0.0, 0.0), 1.0).unwrap_err();
        assert_eq!(err, LatticeError::DuplicateSublattice("A".to_string()));
        assert_eq!(err.kind(), ErrorKind::Naming);
        assert_eq!(lattice.nsub(), 1);
        assert_eq!(lattice.sublattice("A").unwrap().position, Cartesian::zeros());

        let err = lattice.add_sublattice("", Cartesian::zeros(), 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Sublattice name can't be blank");
        assert_eq!(lattice.nsub(), 1);
    }

    #[test]
    fn test_unknown_sublattice_lookup() {
        let lattice = create_two_site_lattice();
        assert_eq!(
            lattice.sublattice("C").unwrap_err().to_string(),
            "There is no sublattice named 'C'"
        );
        assert_eq!(
            lattice.sublattice_by_id(7).unwrap_err(),
            LatticeError::UnknownSublatticeId(7)
        );
        assert_eq!(
            lattice.hopping_family_by_id(9).unwrap_err().to_string(),
            "There is no hopping with ID = 9"
        );
    }

    #[test]
    fn test_sublattice_capacity() {
        let mut registry_full = create_square_lattice();
        for i in 0..SublatticeRegistry::CAPACITY {
            registry_full
                .add_sublattice(&format!("s{}", i), Cartesian::zeros(), 0.0)
                .unwrap();
        }
        assert_eq!(registry_full.nsub(), 256);
        assert_eq!(registry_full.sublattice("s255").unwrap().unique_id, 255);

        let err = registry_full
            .add_sublattice("overflow", Cartesian::zeros(), 0.0)
            .unwrap_err();
        assert_eq!(err, LatticeError::TooManySublattices { max: 256 });
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(registry_full.nsub(), 256);
    }

    #[test]
    fn test_alias_shares_energy_and_alias_id() {
        let mut lattice = create_square_lattice();
        let energy = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex64::new(1.0, 0.0),
                Complex64::new(0.2, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(-1.0, 0.0),
            ],
        );
        lattice.add_sublattice("A", Cartesian::zeros(), energy.clone()).unwrap();
        lattice.add_sublattice("B", Cartesian::new(0.5, 0.0, 0.0), 0.0).unwrap();

        let id = lattice.add_alias("A2", "A", Cartesian::new(0.5, 0.5, 0.0)).unwrap();
        assert_eq!(id, 2);

        let alias = lattice.sublattice("A2").unwrap();
        assert_eq!(alias.unique_id, 2);
        assert_eq!(alias.alias_id, 0);
        assert_eq!(alias.energy, energy);
        assert_eq!(alias.position, Cartesian::new(0.5, 0.5, 0.0));
        assert!(alias.is_alias());
        assert!(!lattice.sublattice("A").unwrap().is_alias());

        // An alias of an alias points at the original
        lattice.add_alias("A3", "A2", Cartesian::new(0.0, 0.5, 0.0)).unwrap();
        assert_eq!(lattice.sublattice("A3").unwrap().alias_id, 0);
    }

    #[test]
    fn test_alias_errors() {
        let mut lattice = create_two_site_lattice();
        assert_eq!(
            lattice.add_alias("C", "missing", Cartesian::zeros()).unwrap_err(),
            LatticeError::UnknownSublattice("missing".to_string())
        );
        assert_eq!(
            lattice.add_alias("B", "A", Cartesian::zeros()).unwrap_err(),
            LatticeError::DuplicateSublattice("B".to_string())
        );
        assert_eq!(lattice.nsub(), 2);
    }

    // ==================== Hopping registry ====================

    #[test]
    fn test_hopping_family_ids_and_names() {
        let mut lattice = create_two_site_lattice();
        assert_eq!(lattice.nhop(), 2);
        assert_eq!(lattice.hopping_family("t").unwrap().family_id, 0);
        assert_eq!(lattice.hopping_family("t2").unwrap().family_id, 1);
        assert_eq!(lattice.hop_name_map()["t2"], 1);

        let err = lattice.register_hopping_energy("t", -2.0).unwrap_err();
        assert_eq!(err.to_string(), "Hopping 't' already exists");
        assert_eq!(lattice.nhop(), 2);
        assert_relative_eq!(lattice.hopping_family("t").unwrap().energy[(0, 0)].re, -1.0);

        let err = lattice.register_hopping_energy("", -2.0).unwrap_err();
        assert_eq!(err, LatticeError::BlankName { entity: "Hopping" });
        assert_eq!(lattice.nhop(), 2);
    }

    #[test]
    fn test_hopping_capacity() {
        let mut registry = HoppingRegistry::new();
        for i in 0..HoppingRegistry::CAPACITY {
            let energy = DMatrix::from_element(1, 1, Complex64::new(i as f64, 0.0));
            registry.register(&format!("h{}", i), energy).unwrap();
        }
        let err = registry
            .register("overflow", DMatrix::from_element(1, 1, Complex64::new(0.0, 0.0)))
            .unwrap_err();
        assert_eq!(err, LatticeError::TooManyHoppings { max: 256 });
        assert_eq!(registry.len(), 256);
    }

    #[test]
    fn test_add_hopping_appends_term() {
        let mut lattice = create_two_site_lattice();
        lattice.add_hopping(Index3D::new(0, 0, 0), "A", "B", "t").unwrap();
        lattice.add_hopping(Index3D::new(1, 0, 0), "B", "A", "t").unwrap();
        lattice.add_hopping(Index3D::new(0, 1, 0), "A", "A", "t2").unwrap();

        let t = lattice.hopping_family("t").unwrap();
        assert_eq!(
            t.terms,
            vec![
                HoppingTerm::new(Index3D::new(0, 0, 0), 0, 1),
                HoppingTerm::new(Index3D::new(1, 0, 0), 1, 0),
            ]
        );
        assert_eq!(lattice.hopping_family("t2").unwrap().terms.len(), 1);
        assert_eq!(lattice.hopping_registry().num_terms(), 3);
    }

    #[test]
    fn test_onsite_hopping_rejected() {
        let mut lattice = create_two_site_lattice();
        let err = lattice
            .add_hopping(Index3D::new(0, 0, 0), "A", "A", "t")
            .unwrap_err();
        assert_eq!(err, LatticeError::OnsiteHopping { sublattice: "A".to_string() });
        assert_eq!(err.kind(), ErrorKind::Semantic);

        // Rejected before the family or the matrix shape is looked at
        let err = lattice
            .add_hopping(Index3D::new(0, 0, 0), "A", "A", "missing")
            .unwrap_err();
        assert!(matches!(err, LatticeError::OnsiteHopping { .. }));

        let err = lattice
            .add_hopping_energy(Index3D::new(0, 0, 0), "B", "B", DMatrix::<f64>::zeros(2, 3))
            .unwrap_err();
        assert!(matches!(err, LatticeError::OnsiteHopping { .. }));
        assert_eq!(lattice.nhop(), 2);
    }

    #[test]
    fn test_unknown_names_in_hopping() {
        let mut lattice = create_two_site_lattice();
        assert_eq!(
            lattice.add_hopping(Index3D::new(1, 0, 0), "A", "C", "t").unwrap_err(),
            LatticeError::UnknownSublattice("C".to_string())
        );
        assert_eq!(
            lattice.add_hopping(Index3D::new(1, 0, 0), "A", "B", "t3").unwrap_err(),
            LatticeError::UnknownHopping("t3".to_string())
        );
    }

    #[test]
    fn test_duplicate_and_conjugate_hoppings_rejected() {
        let mut lattice = create_two_site_lattice();
        lattice.add_hopping(Index3D::new(1, 0, 0), "A", "B", "t").unwrap();

        // Same term, same family
        let err = lattice
            .add_hopping(Index3D::new(1, 0, 0), "A", "B", "t")
            .unwrap_err();
        assert!(matches!(err, LatticeError::DuplicateHoppingTerm { .. }));

        // Same term, other family
        let err = lattice
            .add_hopping(Index3D::new(1, 0, 0), "A", "B", "t2")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The hopping [1, 0, 0] from 'A' to 'B' already exists"
        );

        // Conjugate term in any family
        for family in ["t", "t2"] {
            let err = lattice
                .add_hopping(Index3D::new(-1, 0, 0), "B", "A", family)
                .unwrap_err();
            assert!(matches!(err, LatticeError::DuplicateHoppingTerm { .. }));
        }

        // Reverse direction with the same offset is a different bond
        lattice.add_hopping(Index3D::new(1, 0, 0), "B", "A", "t2").unwrap();
        assert_eq!(lattice.hopping_registry().num_terms(), 2);
    }

    #[test]
    fn test_same_sublattice_conjugate_rejected() {
        let mut lattice = create_two_site_lattice();
        lattice.add_hopping(Index3D::new(1, 0, 0), "A", "A", "t").unwrap();
        let err = lattice
            .add_hopping(Index3D::new(-1, 0, 0), "A", "A", "t")
            .unwrap_err();
        assert!(matches!(err, LatticeError::DuplicateHoppingTerm { .. }));
    }

    #[test]
    fn test_hopping_by_energy_reuses_family() {
        let mut lattice = create_two_site_lattice();

        // -1.0 is bit-identical to family "t"
        let id = lattice
            .add_hopping_energy(Index3D::new(0, 0, 0), "A", "B", -1.0)
            .unwrap();
        assert_eq!(id, 0);
        assert_eq!(lattice.nhop(), 2);
        assert_eq!(lattice.hopping_family("t").unwrap().terms.len(), 1);

        // New energy creates an anonymous family
        let id = lattice
            .add_hopping_energy(Index3D::new(1, 0, 0), "A", "B", Complex64::new(0.0, 0.3))
            .unwrap();
        assert_eq!(id, 2);
        let family = lattice.hopping_family("__anonymous__2").unwrap();
        assert_eq!(family.family_id, 2);
        assert_eq!(family.terms, vec![HoppingTerm::new(Index3D::new(1, 0, 0), 0, 1)]);

        // Further uses of the same energy land in the anonymous family
        let id = lattice
            .add_hopping_energy(Index3D::new(0, 1, 0), "A", "B", Complex64::new(0.0, 0.3))
            .unwrap();
        assert_eq!(id, 2);
        assert_eq!(lattice.nhop(), 3);
    }

    #[test]
    fn test_failed_hopping_by_energy_leaves_registry_unchanged() {
        let mut lattice = create_two_site_lattice();
        lattice.add_hopping(Index3D::new(1, 0, 0), "A", "B", "t").unwrap();

        let err = lattice
            .add_hopping_energy(Index3D::new(-1, 0, 0), "B", "A", -0.5)
            .unwrap_err();
        assert!(matches!(err, LatticeError::DuplicateHoppingTerm { .. }));

        let err = lattice
            .add_hopping_energy(Index3D::new(0, 1, 0), "A", "B", DMatrix::<f64>::zeros(2, 1))
            .unwrap_err();
        assert!(matches!(err, LatticeError::HoppingSizeMismatch { .. }));
        assert_eq!(lattice.nhop(), 2);
        assert_eq!(lattice.hopping_registry().num_terms(), 1);
    }

    // ==================== Geometry ====================

    #[test]
    fn test_calc_position() {
        let mut lattice = create_two_site_lattice();
        let p = lattice.calc_position(Index3D::new(2, -1, 0), "").unwrap();
        assert_relative_eq!(p, Cartesian::new(2.0, -1.0, 0.0), epsilon = TOL);

        let p = lattice.calc_position(Index3D::new(2, -1, 0), "B").unwrap();
        assert_relative_eq!(p, Cartesian::new(2.5, -1.0, 0.0), epsilon = TOL);

        // The third index component is ignored for a 2D lattice
        let p = lattice.calc_position(Index3D::new(0, 0, 5), "").unwrap();
        assert_relative_eq!(p, Cartesian::zeros(), epsilon = TOL);

        lattice.set_offset(Cartesian::new(0.25, 0.0, 0.0)).unwrap();
        let p = lattice.calc_position(Index3D::new(1, 1, 0), "B").unwrap();
        assert_relative_eq!(p, Cartesian::new(1.75, 1.0, 0.0), epsilon = TOL);

        assert!(matches!(
            lattice.calc_position(Index3D::zeros(), "Z"),
            Err(LatticeError::UnknownSublattice(_))
        ));
    }

    #[test]
    fn test_translate_coordinates() {
        let a = 1.0;
        let a1 = Cartesian::new(a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0);
        let a2 = Cartesian::new(-a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0);
        let lattice = Lattice::new(&[a1, a2]).unwrap();

        let fractional = lattice.translate_coordinates(a1 * 0.3 - a2 * 0.2);
        assert_relative_eq!(fractional, Cartesian::new(0.3, -0.2, 0.0), epsilon = TOL);

        // Chain along y: the single vector does not live in the first component
        let chain = Lattice::new(&[Cartesian::new(0.0, 2.0, 0.0)]).unwrap();
        let fractional = chain.translate_coordinates(Cartesian::new(0.0, 1.0, 0.0));
        assert_relative_eq!(fractional, Cartesian::new(0.5, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_translate_coordinates_uses_leading_components() {
        // a1 leaves the plane of the first two axes; only x and y enter the solve
        let mut lattice =
            Lattice::new(&[Cartesian::new(1.0, 0.0, 1.0), Cartesian::new(0.0, 1.0, 0.0)]).unwrap();
        let fractional = lattice.translate_coordinates(Cartesian::new(0.6, 0.0, 0.0));
        assert_relative_eq!(fractional, Cartesian::new(0.6, 0.0, 0.0), epsilon = TOL);

        let err = lattice.set_offset(Cartesian::new(0.6, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, LatticeError::OffsetOutOfRange { .. }));
        assert_eq!(lattice.offset(), Cartesian::zeros());
        lattice.set_offset(Cartesian::new(0.5, 0.0, 0.0)).unwrap();
    }

    #[test]
    fn test_set_offset_bounds() {
        let mut lattice = create_square_lattice();
        for offset in [
            Cartesian::new(0.55, 0.0, 0.0),
            Cartesian::new(-0.55, 0.55, 0.0),
            Cartesian::new(0.1, -0.3, 0.0),
        ] {
            lattice.set_offset(offset).unwrap();
            assert_eq!(lattice.offset(), offset);
        }

        let err = lattice.set_offset(Cartesian::new(0.0, -0.56, 0.0)).unwrap_err();
        assert!(matches!(err, LatticeError::OffsetOutOfRange { limit, .. } if limit == 0.55));
        assert_eq!(lattice.offset(), Cartesian::new(0.1, -0.3, 0.0));

        // Bounds are fractional: a longer vector allows a longer shift
        let mut wide = Lattice::new(&[Cartesian::new(4.0, 0.0, 0.0)]).unwrap();
        wide.set_offset(Cartesian::new(2.0, 0.0, 0.0)).unwrap();
        assert!(wide.set_offset(Cartesian::new(2.4, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_derived_lattices_leave_original_untouched() {
        let mut original = create_two_site_lattice();
        original.add_hopping(Index3D::new(1, 0, 0), "A", "B", "t").unwrap();

        let mut shifted = original.with_offset(Cartesian::new(0.2, 0.2, 0.0)).unwrap();
        shifted.add_sublattice("C", Cartesian::zeros(), 0.0).unwrap();
        shifted.add_hopping(Index3D::new(0, 1, 0), "A", "B", "t").unwrap();

        let dense = original.with_min_neighbors(3);
        assert_eq!(dense.min_neighbors(), 3);

        assert_eq!(original.offset(), Cartesian::zeros());
        assert_eq!(original.min_neighbors(), 1);
        assert_eq!(original.nsub(), 2);
        assert_eq!(original.hopping_registry().num_terms(), 1);
        assert_eq!(shifted.offset(), Cartesian::new(0.2, 0.2, 0.0));
        assert_eq!(shifted.nsub(), 3);

        assert!(original.with_offset(Cartesian::new(0.9, 0.0, 0.0)).is_err());
        assert_eq!(original.offset(), Cartesian::zeros());
    }

    #[test]
    fn test_reciprocal_vectors() {
        let a1 = Cartesian::new(0.5, 3.0_f64.sqrt() / 2.0, 0.0);
        let a2 = Cartesian::new(-0.5, 3.0_f64.sqrt() / 2.0, 0.0);
        let lattice = Lattice::new(&[a1, a2]).unwrap();
        let b = lattice.reciprocal_vectors();
        assert_eq!(b.len(), 2);

        for (i, a) in [a1, a2].iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert_relative_eq!(a.dot(bj), expected, epsilon = TOL);
            }
        }
        // In-plane
        assert_relative_eq!(b[0].z, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_reciprocal_vectors_1d() {
        let a1 = Cartesian::new(0.0, 2.0, 0.0);
        let chain = Lattice::new(&[a1]).unwrap();
        let b = chain.reciprocal_vectors();
        assert_eq!(b.len(), 1);
        assert_relative_eq!(a1.dot(&b[0]), 2.0 * PI, epsilon = TOL);
        assert_relative_eq!(b[0], Cartesian::new(0.0, PI, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_reciprocal_vectors_3d() {
        // Face-centered cubic
        let a = 2.0;
        let vectors = [
            Cartesian::new(0.0, a / 2.0, a / 2.0),
            Cartesian::new(a / 2.0, 0.0, a / 2.0),
            Cartesian::new(a / 2.0, a / 2.0, 0.0),
        ];
        let lattice = Lattice::new(&vectors).unwrap();
        let b = lattice.reciprocal_vectors();
        assert_eq!(b.len(), 3);

        for (i, ai) in vectors.iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert_relative_eq!(ai.dot(bj), expected, epsilon = TOL);
            }
        }
        // Reciprocal of fcc is bcc: b1 = (2π/a)(-1, 1, 1)
        let k = 2.0 * PI / a;
        assert_relative_eq!(b[0], Cartesian::new(-k, k, k), epsilon = TOL);
    }

    // ==================== Introspection ====================

    #[test]
    fn test_introspection_predicates() {
        let mut lattice = create_two_site_lattice();
        assert!(!lattice.has_onsite_energy());
        assert!(!lattice.has_multiple_orbitals());
        assert!(!lattice.has_complex_hoppings());

        lattice.add_sublattice("C", Cartesian::zeros(), vec![0.0, 0.5]).unwrap();
        assert!(lattice.has_onsite_energy());
        assert!(lattice.has_multiple_orbitals());

        lattice
            .register_hopping_energy("tc", Complex64::new(-1.0, 0.1))
            .unwrap();
        assert!(lattice.has_complex_hoppings());
    }
}
