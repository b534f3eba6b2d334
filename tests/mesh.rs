use std::collections::HashSet;
use std::f64::consts::TAU;

use hero_mesh::mesh::MAX_VERTICES;
use hero_mesh::{build_mesh, HeroConfig, Mesh, Point, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mesh(width: f64, height: f64, config: &HeroConfig, seed: u64) -> Mesh {
    build_mesh(Viewport::new(width, height), config, &mut StdRng::seed_from_u64(seed))
}

fn no_jitter() -> HeroConfig {
    HeroConfig {
        jitter_fraction: 0.0,
        ..HeroConfig::default()
    }
}

#[test]
fn hd_viewport_counts() {
    let m = mesh(800.0, 600.0, &HeroConfig::default(), 1);
    // cols = ceil(800/120) + 2 = 9, rows = ceil(600/120) + 2 = 7, both walked from -1
    assert_eq!(m.columns(), 10);
    assert_eq!(m.rows(), 8);
    assert_eq!(m.vertices().len(), 80);
    assert_eq!(m.triangles().len(), 126);
}

#[test]
fn triangle_count_matches_grid() {
    let config = HeroConfig::default();
    for &(w, h) in &[(1.0, 1.0), (1920.0, 1080.0), (375.0, 812.0), (121.0, 240.0)] {
        let m = mesh(w, h, &config, 9);
        assert_eq!(m.triangles().len(), 2 * (m.rows() - 1) * (m.columns() - 1), "{w}x{h}");
        assert_eq!(m.vertices().len(), m.rows() * m.columns(), "{w}x{h}");
    }
}

#[test]
fn same_seed_same_mesh() {
    let config = HeroConfig::default();
    let a = mesh(1024.0, 768.0, &config, 42);
    let b = mesh(1024.0, 768.0, &config, 42);
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.triangles(), b.triangles());

    let c = mesh(1024.0, 768.0, &config, 43);
    assert_ne!(a.vertices(), c.vertices());
}

#[test]
fn lattice_overscans_every_edge() {
    let config = no_jitter();
    let cell = config.cell_size;
    for &(w, h) in &[(800.0, 600.0), (1000.0, 10.0), (119.0, 1201.0), (2560.0, 1440.0)] {
        let m = mesh(w, h, &config, 3);
        let (lo, hi) = m.bounds().expect("non-empty mesh");
        assert!(lo.x <= -cell && lo.y <= -cell, "{w}x{h}: lo={lo:?}");
        assert!(hi.x >= w + cell && hi.y >= h + cell, "{w}x{h}: hi={hi:?}");
    }
}

#[test]
fn odd_rows_are_staggered() {
    let config = no_jitter();
    let m = mesh(800.0, 600.0, &config, 5);
    // row 0 is grid row -1 (odd), row 1 is grid row 0 (even)
    let shifted = m.vertex(0, 0).unwrap().origin();
    let straight = m.vertex(1, 0).unwrap().origin();
    assert_eq!(shifted.x, -120.0 + 60.0);
    assert_eq!(shifted.y, -120.0);
    assert_eq!(straight.x, -120.0);
    assert_eq!(straight.y, 0.0);
    assert_eq!(m.vertex(2, 3).unwrap().origin().x, 3.0 * 120.0 - 120.0 + 60.0);
}

#[test]
fn jitter_stays_within_fraction_of_cell() {
    let config = HeroConfig::default();
    let cell = config.cell_size;
    let half_span = cell * config.jitter_fraction / 2.0;
    let m = mesh(900.0, 700.0, &config, 11);
    for row in 0..m.rows() {
        for column in 0..m.columns() {
            let origin = m.vertex(row, column).unwrap().origin();
            let grid_y = row as f64 - 1.0;
            let mut base_x = (column as f64 - 1.0) * cell;
            if row % 2 == 0 {
                base_x += cell / 2.0;
            }
            assert!((origin.x - base_x).abs() <= half_span, "({row},{column}) x={}", origin.x);
            assert!((origin.y - grid_y * cell).abs() <= half_span, "({row},{column}) y={}", origin.y);
        }
    }
}

#[test]
fn phases_cover_a_full_turn() {
    let m = mesh(800.0, 600.0, &HeroConfig::default(), 17);
    assert!(m.vertices().iter().all(|v| (0.0..TAU).contains(&v.phase())));
    let distinct: HashSet<u64> = m.vertices().iter().map(|v| v.phase().to_bits()).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn every_quad_splits_into_two_triangles() {
    let m = mesh(640.0, 480.0, &HeroConfig::default(), 21);
    let columns = m.columns();
    let mut directions = HashSet::new();
    let mut quad = 0;
    for row in 0..m.rows() - 1 {
        for column in 0..columns - 1 {
            let v1 = m.index(row, column);
            let corners: HashSet<usize> = [v1, v1 + 1, v1 + columns, v1 + columns + 1].into();

            let first = m.triangles()[2 * quad].corners();
            let second = m.triangles()[2 * quad + 1].corners();
            let a: HashSet<usize> = first.into();
            let b: HashSet<usize> = second.into();
            assert_eq!(a.len(), 3);
            assert_eq!(b.len(), 3);
            assert!(a.is_subset(&corners) && b.is_subset(&corners));
            assert_eq!(a.union(&b).count(), 4, "quad ({row},{column}) not fully covered");

            // the two shared corners form the diagonal
            let mut diagonal: Vec<usize> = a.intersection(&b).copied().collect();
            diagonal.sort_unstable();
            assert_eq!(diagonal.len(), 2);
            directions.insert(diagonal[1] - diagonal[0]);
            quad += 1;
        }
    }
    // v2-v3 diagonal and v1-v4 diagonal both show up
    assert_eq!(directions, HashSet::from([columns - 1, columns + 1]));
}

#[test]
fn fills_come_from_the_palette() {
    let config = HeroConfig::default();
    let m = mesh(1280.0, 720.0, &config, 8);
    assert!(m.triangles().iter().all(|t| config.palette.contains(&t.fill())));
}

#[test]
fn single_color_palette() {
    let mut config = HeroConfig::default();
    config.apply_override("palette", "#FF0000").unwrap();
    let m = mesh(300.0, 300.0, &config, 2);
    assert!(m.triangles().iter().all(|t| t.fill().to_string() == "#FF0000"));
}

#[test]
fn degenerate_viewports_build_nothing() {
    let config = HeroConfig::default();
    for &(w, h) in &[(0.0, 600.0), (800.0, 0.0), (-5.0, 10.0), (f64::NAN, 600.0), (f64::INFINITY, 1.0)] {
        let m = mesh(w, h, &config, 1);
        assert!(m.is_empty(), "{w}x{h}");
        assert!(m.triangles().is_empty());
        assert!(m.bounds().is_none());
    }
}

#[test]
fn vertices_are_shared_between_triangles() {
    let m = mesh(800.0, 600.0, &HeroConfig::default(), 4);
    let mut uses = vec![0usize; m.vertices().len()];
    for t in m.triangles() {
        for i in t.corners() {
            uses[i] += 1;
        }
    }
    assert_eq!(uses.iter().sum::<usize>(), 3 * m.triangles().len());
    assert!(uses.iter().all(|&n| (1..=8).contains(&n)));
    // an interior vertex always belongs to several triangles
    assert!(uses[m.index(3, 4)] >= 2);
}

#[test]
fn seed_one_golden_start() {
    let config = HeroConfig::default();
    let m = mesh(800.0, 600.0, &config, 1);
    let close = |a: Point, b: Point| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9;

    let first = &m.vertices()[0];
    assert!(close(first.origin(), Point::new(-37.23625261159667, -110.82069068628833)), "{:?}", first.origin());
    assert!((first.phase() - 2.6890448591707243).abs() < 1e-9, "{}", first.phase());

    let second = &m.vertices()[1];
    assert!(close(second.origin(), Point::new(44.42813040930448, -131.78151544812542)), "{:?}", second.origin());
    assert!((second.phase() - 6.048211641575151).abs() < 1e-9, "{}", second.phase());

    // first quad splits along v2-v3
    let columns = m.columns();
    assert_eq!(m.triangles()[0].corners(), [0, 1, columns]);
    assert_eq!(m.triangles()[1].corners(), [1, columns + 1, columns]);
}

// palette indices are drawn as usize, so the sequence depends on pointer width
#[cfg(target_pointer_width = "64")]
#[test]
fn seed_one_golden_fills() {
    let config = HeroConfig::default();
    let m = mesh(800.0, 600.0, &config, 1);
    assert_eq!(m.triangles()[0].fill(), config.palette[4]);
    assert_eq!(m.triangles()[1].fill(), config.palette[0]);
}

#[test]
fn tiny_cells_do_not_overflow() {
    for &cell in &[1e-12, 1e-3, 0.5] {
        let config = HeroConfig {
            cell_size: cell,
            ..HeroConfig::default()
        };
        let m = mesh(800.0, 600.0, &config, 1);
        assert!(m.is_empty(), "cell {cell}");
    }
}

#[test]
fn oversized_grids_are_skipped() {
    let config = HeroConfig {
        cell_size: 1.0,
        ..HeroConfig::default()
    };
    assert!(mesh(1920.0, 1080.0, &config, 1).is_empty());
    assert!(mesh(1e300, 1e300, &HeroConfig::default(), 1).is_empty());

    // a 1px grid that fits under the cap still builds
    let m = mesh(500.0, 500.0, &config, 1);
    assert_eq!(m.vertices().len(), 503 * 503);
    assert!(m.vertices().len() <= MAX_VERTICES);
}
