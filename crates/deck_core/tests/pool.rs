use deck_core::{SeenSet, Spot, SpotId, SpotPool};

fn spot(id: &str) -> Spot {
    Spot {
        id: SpotId::new(id),
        title: format!("Spot {id}"),
        image_url: format!("https://img.example.com/{id}.jpg"),
        lat: 59.33,
        lng: 18.06,
        place_name: "Stockholm".to_string(),
    }
}

fn spots(ids: &[&str]) -> Vec<Spot> {
    ids.iter().map(|id| spot(id)).collect()
}

fn pool_ids(pool: &SpotPool) -> Vec<String> {
    pool.snapshot()
        .iter()
        .map(|s| s.id.as_str().to_string())
        .collect()
}

#[test]
fn absorb_appends_in_arrival_order() {
    let mut pool = SpotPool::new(10);
    pool.absorb(spots(&["a", "b"]));
    pool.absorb(spots(&["c"]));

    assert_eq!(pool_ids(&pool), vec!["a", "b", "c"]);
}

#[test]
fn absorb_evicts_oldest_beyond_bound() {
    let mut pool = SpotPool::new(5);
    pool.absorb(spots(&["a", "b", "c", "d", "e", "f"]));

    assert_eq!(pool.len(), 5);
    assert_eq!(pool_ids(&pool), vec!["b", "c", "d", "e", "f"]);
}

#[test]
fn absorb_empty_is_noop() {
    let mut pool = SpotPool::new(3);
    pool.absorb(spots(&["a"]));
    pool.absorb(Vec::new());

    assert_eq!(pool_ids(&pool), vec!["a"]);
}

#[test]
fn oversized_single_absorb_keeps_most_recent() {
    let mut pool = SpotPool::new(3);
    pool.absorb(spots(&["a", "b", "c", "d", "e", "f", "g"]));

    assert_eq!(pool_ids(&pool), vec!["e", "f", "g"]);
}

#[test]
fn bound_holds_after_every_absorb() {
    let mut pool = SpotPool::new(4);
    for round in 0..10 {
        let id_a = format!("r{round}a");
        let id_b = format!("r{round}b");
        let id_c = format!("r{round}c");
        pool.absorb(spots(&[id_a.as_str(), id_b.as_str(), id_c.as_str()]));
        assert!(pool.len() <= pool.max_size());
    }
}

#[test]
fn snapshot_leaves_pool_untouched() {
    let mut pool = SpotPool::new(5);
    pool.absorb(spots(&["a", "b", "c"]));

    let copy = pool.snapshot();
    assert_eq!(copy.len(), 3);
    assert_eq!(pool_ids(&pool), vec!["a", "b", "c"]);
}

#[test]
fn seen_set_filters_previously_ingested_ids() {
    let mut seen = SeenSet::new();
    let mut pool = SpotPool::new(10);

    pool.absorb(seen.filter_fresh(spots(&["a", "b", "c"])));
    assert_eq!(pool_ids(&pool), vec!["a", "b", "c"]);

    // Refetching an overlapping page only lets the new id through.
    pool.absorb(seen.filter_fresh(spots(&["b", "c", "d"])));
    assert_eq!(pool_ids(&pool), vec!["a", "b", "c", "d"]);
    assert_eq!(seen.len(), 4);
}

#[test]
fn seen_set_collapses_duplicates_within_one_page() {
    let mut seen = SeenSet::new();
    let fresh = seen.filter_fresh(spots(&["a", "a", "b"]));

    let ids: Vec<&str> = fresh.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn seen_set_membership() {
    let mut seen = SeenSet::new();
    assert!(seen.is_empty());
    assert!(seen.mark(SpotId::new("a")));
    assert!(!seen.mark(SpotId::new("a")));
    assert!(seen.contains(&SpotId::new("a")));
    assert!(!seen.contains(&SpotId::new("b")));
}
