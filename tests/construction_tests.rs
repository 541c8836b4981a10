//! Tests for full-grid and restricted heap construction

use dary_grid_heap::branching::branching_factor;
use dary_grid_heap::config::HeapConfig;
use dary_grid_heap::{Connectivity, DaryHeap, Grid, HeapError, Rect, VertexArena};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_branching_factor_is_deterministic() {
    let first = branching_factor(10, 10, Connectivity::Four);
    assert_eq!(first, 4);
    for _ in 0..100 {
        assert_eq!(branching_factor(10, 10, Connectivity::Four), first);
    }
}

#[test]
fn test_full_grid_seed() {
    init_logging();
    let mut grid: Grid = Grid::new(5, 5);
    let root = grid.id_at(2, 2).unwrap();

    let heap = DaryHeap::full_grid(&mut grid, root, &HeapConfig::default()).unwrap();

    assert_eq!(heap.len(), 25);
    assert_eq!(heap.peek_min(), Some(root));
    assert_eq!(heap.key_of(root), 0);
    assert_eq!(heap.branching_factor(), branching_factor(5, 5, Connectivity::Four));
    for id in heap.arena().ids() {
        assert!(heap.contains(id));
        if id != root {
            assert_eq!(heap.key_of(id), i64::MAX);
        }
    }
    assert!(heap.is_valid());
}

#[test]
fn test_full_grid_enqueues_obstacles() {
    init_logging();
    let mut grid: Grid = Grid::new(4, 4);
    grid.set_obstacle(0, 1, true);
    let root = grid.id_at(3, 3).unwrap();

    let heap = DaryHeap::full_grid(&mut grid, root, &HeapConfig::default()).unwrap();
    assert_eq!(heap.len(), 16);
    assert!(!heap.arena().vertex_at(0, 1).unwrap().known_obstacle);
}

#[test]
fn test_restricted_build_excludes_obstacles() {
    init_logging();
    let mut grid: Grid = Grid::new(8, 8);
    grid.set_obstacle(4, 5, true);
    let target = grid.id_at(3, 4).unwrap();
    let obstacle = grid.id_at(4, 5).unwrap();
    let rect = Rect::new(3, 5, 3, 5);

    let heap = DaryHeap::restricted(&mut grid, target, rect, &HeapConfig::default()).unwrap();

    assert_eq!(heap.len(), 8);
    assert_eq!(heap.key_of(target), 0);
    assert_eq!(heap.arena().vertex(target).heap_index(), Some(0));
    assert!(heap.arena().vertex(obstacle).known_obstacle);
    assert!(!heap.contains(obstacle));
    for &id in heap.slots() {
        let (row, col) = heap.arena().coords(id);
        assert!(rect.contains(row, col));
    }
    assert!(heap.is_valid());
}

#[test]
fn test_restricted_build_derives_d_from_rect() {
    let mut grid: Grid = Grid::new(100, 100);
    let target = grid.id_at(50, 50).unwrap();
    let config = HeapConfig::new().with_connectivity(Connectivity::Eight);

    let heap = DaryHeap::restricted(&mut grid, target, Rect::new(49, 51, 49, 51), &config).unwrap();
    // 3x3 eight-connected: 72 - 36 + 4 = 40 edges over 9 vertices
    assert_eq!(heap.branching_factor(), 4);
    assert_ne!(heap.branching_factor(), branching_factor(100, 100, Connectivity::Eight));
}

#[test]
fn test_configured_branching_factor_overrides_selector() {
    let mut grid: Grid = Grid::new(10, 10);
    let root = grid.id_at(0, 0).unwrap();
    let config = HeapConfig::new().with_branching_factor(2);

    let heap = DaryHeap::full_grid(&mut grid, root, &config).unwrap();
    assert_eq!(heap.branching_factor(), 2);
    assert!(heap.is_valid());
    heap.dispose();

    let bad = HeapConfig::new().with_branching_factor(0);
    assert!(matches!(
        DaryHeap::full_grid(&mut grid, root, &bad),
        Err(HeapError::InvalidBranchingFactor(0))
    ));
}

#[test]
fn test_successive_episodes_reuse_vertices() {
    init_logging();
    let mut grid: Grid = Grid::new(6, 6);
    let goal = grid.id_at(5, 5).unwrap();

    {
        let mut heap = DaryHeap::full_grid(&mut grid, goal, &HeapConfig::default()).unwrap();
        for _ in 0..10 {
            heap.extract_min().unwrap();
        }
    }
    assert!(grid.ids().all(|id| !grid.vertex(id).is_enqueued()));

    grid.set_obstacle(2, 2, true);
    grid.reset_search_state();
    let target = grid.id_at(1, 1).unwrap();
    let heap = DaryHeap::restricted(&mut grid, target, Rect::new(0, 3, 0, 3), &HeapConfig::default())
        .unwrap();
    assert_eq!(heap.len(), 15);
    assert_eq!(heap.peek_min(), Some(target));
}

#[test]
fn test_restricted_single_cell() {
    let mut grid: Grid = Grid::new(3, 3);
    let target = grid.id_at(1, 1).unwrap();
    let mut heap =
        DaryHeap::restricted(&mut grid, target, Rect::new(1, 1, 1, 1), &HeapConfig::default())
            .unwrap();
    assert_eq!(heap.branching_factor(), 2);
    assert_eq!(heap.capacity(), 1);
    assert_eq!(heap.extract_min(), Some(target));
    assert_eq!(heap.peek_min(), None);
}
