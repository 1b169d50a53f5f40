use std::collections::HashSet;

use itree_core::models::Span;
use itree_index::{
    ITreeError, Interval, IntervalTree, LinearScan, Stabber, StabberType, build_stabber,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;

#[fixture]
fn random_spans() -> Vec<Span<f64, u32>> {
    let mut rng = StdRng::seed_from_u64(2014);
    (0..2_000u32)
        .map(|id| {
            let low = rng.random::<f64>() * 70.0;
            let high = low + rng.random::<f64>() * 40.0;
            Span::new(low, high, id)
        })
        .collect()
}

#[fixture]
fn random_points() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(1999);
    (0..200).map(|_| rng.random::<f64>() * 120.0 - 10.0).collect()
}

fn id_set<'a, N>(hits: impl IntoIterator<Item = &'a N>) -> HashSet<N::Id>
where
    N: Interval + 'a,
{
    hits.into_iter().map(|iv| iv.id()).collect()
}

fn brute_force<N: Interval>(intervals: &[N], point: N::Coord) -> HashSet<N::Id> {
    id_set(intervals.iter().filter(|iv| iv.low() <= point && point <= iv.high()))
}

#[rstest]
fn test_random_floats_match_brute_force(
    random_spans: Vec<Span<f64, u32>>,
    random_points: Vec<f64>,
) {
    let tree = IntervalTree::build(random_spans.clone()).unwrap();
    for point in random_points {
        assert_eq!(
            id_set(tree.query(point).unwrap()),
            brute_force(&random_spans, point),
            "point {point}"
        );
    }
}

#[rstest]
fn test_every_endpoint_matches_brute_force(random_spans: Vec<Span<f64, u32>>) {
    let tree = IntervalTree::build(random_spans.clone()).unwrap();
    for span in random_spans.iter().take(300) {
        for point in [span.low, span.high] {
            assert_eq!(
                id_set(tree.query(point).unwrap()),
                brute_force(&random_spans, point)
            );
        }
    }
}

#[rstest]
#[case(1, 10)]
#[case(7, 50)]
#[case(42, 500)]
#[case(99, 3)]
fn test_random_integers_match_brute_force(#[case] seed: u64, #[case] n: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    // small coordinate range forces many shared endpoints and exact hits
    let spans: Vec<Span<i64, u32>> = (0..n)
        .map(|id| Span::new(rng.random_range(0..40), rng.random_range(0..40), id))
        .collect();

    let tree = IntervalTree::build(spans.clone()).unwrap();
    for point in -2..43 {
        assert_eq!(id_set(tree.query(point).unwrap()), brute_force(&spans, point));
    }
}

#[rstest]
fn test_tree_and_scan_agree(random_spans: Vec<Span<f64, u32>>, random_points: Vec<f64>) {
    let tree = build_stabber(StabberType::IntervalTree, random_spans.clone()).unwrap();
    let scan = build_stabber(StabberType::LinearScan, random_spans).unwrap();
    assert_eq!(tree.len(), scan.len());

    for point in random_points {
        assert_eq!(
            id_set(tree.find_iter(point).unwrap()),
            id_set(scan.find_iter(point).unwrap())
        );
    }
}

#[rstest]
fn test_single_interval() {
    let tree = IntervalTree::build(vec![Span::new(2.0, 5.0, "only")]).unwrap();

    assert_eq!(tree.count(1.0).unwrap(), 0);
    assert_eq!(id_set(tree.query(2.0).unwrap()), HashSet::from(["only"]));
    assert_eq!(id_set(tree.query(3.5).unwrap()), HashSet::from(["only"]));
    assert_eq!(id_set(tree.query(5.0).unwrap()), HashSet::from(["only"]));
    assert_eq!(tree.count(6.0).unwrap(), 0);
}

#[rstest]
#[case(3.99, 0)]
#[case(4.0, 1)]
#[case(4.01, 0)]
fn test_degenerate_point_interval(#[case] point: f64, #[case] expected: usize) {
    let tree = IntervalTree::build(vec![Span::new(4.0, 4.0, 'p')]).unwrap();
    assert_eq!(tree.count(point).unwrap(), expected);
}

#[rstest]
#[case(10, true)]
#[case(20, true)]
#[case(9, false)]
#[case(21, false)]
fn test_boundaries_are_inclusive(#[case] point: i32, #[case] hit: bool) {
    let tree = IntervalTree::build(vec![
        Span::new(10, 20, "target"),
        Span::new(0, 5, "left"),
        Span::new(25, 30, "right"),
    ])
    .unwrap();
    let ids = id_set(tree.query(point).unwrap());
    assert_eq!(ids.contains("target"), hit);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(100)]
#[case(5_000)]
fn test_large_overlapping_set(#[case] n: u32) {
    let spans: Vec<Span<i64, u32>> = (0..n)
        .map(|id| Span::new(-(id as i64) - 1, id as i64 * 3 + 1, id))
        .collect();
    let tree = IntervalTree::build(spans).unwrap();

    let hits: Vec<_> = tree.query(0).unwrap().map(|s| s.val).collect();
    let unique: HashSet<u32> = hits.iter().copied().collect();
    assert_eq!(hits.len(), n as usize);
    assert_eq!(unique, (0..n).collect());
}

#[rstest]
fn test_empty_input_answers_nothing() {
    let tree: IntervalTree<Span<f64, u32>> = IntervalTree::build(vec![]).unwrap();
    for point in [-1.0, 0.0, 1e300, f64::INFINITY, f64::NAN] {
        assert_eq!(tree.count(point).unwrap(), 0);
    }
}

#[rstest]
fn test_repeated_queries_are_deterministic(random_spans: Vec<Span<f64, u32>>) {
    let tree = IntervalTree::build(random_spans).unwrap();
    let first = id_set(tree.query(33.3).unwrap());
    for _ in 0..10 {
        assert_eq!(id_set(tree.query(33.3).unwrap()), first);
    }
}

#[rstest]
fn test_rebuild_gives_same_answers(random_spans: Vec<Span<f64, u32>>, random_points: Vec<f64>) {
    let mut tree = IntervalTree::from(random_spans);
    tree.construct().unwrap();
    let before: Vec<_> = random_points
        .iter()
        .map(|&p| id_set(tree.query(p).unwrap()))
        .collect();

    tree.construct().unwrap();
    let after: Vec<_> = random_points
        .iter()
        .map(|&p| id_set(tree.query(p).unwrap()))
        .collect();
    assert_eq!(before, after);
}

#[rstest]
fn test_query_before_construct_is_rejected() {
    let tree = IntervalTree::from(vec![Span::new(1, 2, 0u8)]);
    assert_eq!(tree.query(1).unwrap_err(), ITreeError::NotConstructed);
    assert_eq!(
        tree.find_iter(1).err(),
        Some(ITreeError::NotConstructed)
    );
}

#[rstest]
fn test_concurrent_readers(random_spans: Vec<Span<f64, u32>>, random_points: Vec<f64>) {
    let tree = IntervalTree::build(random_spans.clone()).unwrap();

    std::thread::scope(|s| {
        for chunk in random_points.chunks(50) {
            let tree = &tree;
            let spans = &random_spans;
            s.spawn(move || {
                for &point in chunk {
                    assert_eq!(id_set(tree.query(point).unwrap()), brute_force(spans, point));
                }
            });
        }
    });
}

#[rstest]
fn test_query_many(random_spans: Vec<Span<f64, u32>>, random_points: Vec<f64>) {
    let tree = IntervalTree::build(random_spans.clone()).unwrap();
    let batches = tree.query_many(&random_points).unwrap();

    for (hits, &point) in batches.into_iter().zip(random_points.iter()) {
        assert_eq!(id_set(hits), brute_force(&random_spans, point));
    }
}

#[rstest]
fn test_linear_scan_directly() {
    let scan = LinearScan::build(vec![Span::new(0u8, 3, 'a'), Span::new(2, 2, 'b')]).unwrap();
    assert_eq!(id_set(scan.find(2).unwrap()), HashSet::from(['a', 'b']));
    assert_eq!(scan.iter().count(), 2);
}

#[rstest]
#[case("itree", Some(StabberType::IntervalTree))]
#[case("scan", Some(StabberType::LinearScan))]
#[case("bits", None)]
fn test_stabber_type_from_name(#[case] name: &str, #[case] expected: Option<StabberType>) {
    assert_eq!(StabberType::from_name(name), expected);
}
