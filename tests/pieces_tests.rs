//! Piece catalog tests - shape data invariants and kick tables

use blockfall::types::PieceKind;

#[test]
fn catalog_has_seven_kinds_in_order() {
    assert_eq!(
        PieceKind::ALL,
        [
            PieceKind::T,
            PieceKind::O,
            PieceKind::L,
            PieceKind::J,
            PieceKind::I,
            PieceKind::S,
            PieceKind::Z,
        ]
    );
}

#[test]
fn rotation_counts_per_kind() {
    assert_eq!(PieceKind::T.shapes().len(), 4);
    assert_eq!(PieceKind::O.shapes().len(), 1);
    assert_eq!(PieceKind::L.shapes().len(), 4);
    assert_eq!(PieceKind::J.shapes().len(), 4);
    assert_eq!(PieceKind::I.shapes().len(), 2);
    assert_eq!(PieceKind::S.shapes().len(), 2);
    assert_eq!(PieceKind::Z.shapes().len(), 2);
}

#[test]
fn shapes_of_a_kind_share_their_matrix_size() {
    for kind in PieceKind::ALL {
        let expected = match kind {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        };
        for shape in kind.shapes() {
            assert_eq!(shape.size(), expected, "{:?}", kind);
        }
    }
}

#[test]
fn every_shape_has_exactly_four_cells() {
    for kind in PieceKind::ALL {
        for shape in kind.shapes() {
            assert_eq!(shape.cells().len(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn cells_stay_inside_the_bounding_matrix() {
    for kind in PieceKind::ALL {
        for shape in kind.shapes() {
            for &(dx, dy) in shape.cells().iter() {
                assert!(dx >= 0 && dx < shape.size() as i8);
                assert!(dy >= 0 && dy < shape.size() as i8);
            }
        }
    }
}

#[test]
fn kick_offsets_are_horizontal_and_ordered() {
    for kind in PieceKind::ALL {
        let expected: &[(i8, i8)] = if kind == PieceKind::I {
            &[(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0)]
        } else {
            &[(0, 0), (-1, 0), (1, 0)]
        };
        assert_eq!(kind.kick_offsets(), expected, "{:?}", kind);
    }
}

#[test]
fn i_spawn_shape_occupies_its_second_row() {
    let cells = PieceKind::I.shapes()[0].cells();
    assert_eq!(cells.as_slice(), &[(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn o_shape_fills_its_whole_matrix() {
    let cells = PieceKind::O.shapes()[0].cells();
    assert_eq!(cells.as_slice(), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn s_and_z_mirror_each_other_at_spawn() {
    let s: Vec<_> = PieceKind::S.shapes()[0].cells().to_vec();
    let z: Vec<_> = PieceKind::Z.shapes()[0].cells().to_vec();
    let mirrored: Vec<_> = z.iter().map(|&(x, y)| (2 - x, y)).collect();
    let mut s_sorted = s;
    let mut m_sorted = mirrored;
    s_sorted.sort();
    m_sorted.sort();
    assert_eq!(s_sorted, m_sorted);
}
