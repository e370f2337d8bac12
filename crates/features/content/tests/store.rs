use gnomix_content::model::Stats;
use gnomix_content::{ContentSeed, ContentStore, MemoryStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn seeded_stats_match_launch_figures() {
    let store = MemoryStore::default();
    let stats = store.stats().unwrap();

    assert_eq!(
        stats,
        Stats { downloads: 8547, community_members: 50, github_stars: 463, contributors: 2 }
    );
}

#[test]
fn one_increment_changes_only_downloads() {
    let store = MemoryStore::default();
    store.increment_downloads().unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.downloads, 8548);
    assert_eq!(stats.community_members, 50);
    assert_eq!(stats.github_stars, 463);
    assert_eq!(stats.contributors, 2);
}

#[test]
fn concurrent_increments_are_not_lost() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 500;

    let store = Arc::new(MemoryStore::default());
    let initial = store.stats().unwrap().downloads;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    store.increment_downloads().unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.stats().unwrap().downloads, initial + THREADS * PER_THREAD);
}

#[test]
fn every_increment_reports_a_distinct_count() {
    let store = Arc::new(MemoryStore::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..100).map(|_| store.increment_downloads().unwrap().downloads).collect::<Vec<_>>()
            })
        })
        .collect();

    let seen: HashSet<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    assert_eq!(seen.len(), 400);
}

#[test]
fn latest_download_is_the_first_one() {
    let store = MemoryStore::default();
    let latest = store.latest_download().unwrap().expect("seeded release");

    assert_eq!(store.downloads().unwrap()[0], latest);
    assert_eq!(latest.version, "v1.0.0");
    assert!(latest.is_beta);
}

#[test]
fn latest_download_is_absent_without_releases() {
    let store = MemoryStore::from_seed(ContentSeed::default()).unwrap();

    assert!(store.latest_download().unwrap().is_none());
    assert!(store.downloads().unwrap().is_empty());
}

#[test]
fn faqs_are_seeded_in_order() {
    let faqs = MemoryStore::default().faqs().unwrap();
    let categories = ["General", "Usage", "Installation", "Updates"];

    assert_eq!(faqs.len(), 6);
    assert_eq!(faqs.iter().map(|f| f.id.as_str()).collect::<HashSet<_>>().len(), 6);
    assert!(faqs.iter().all(|f| categories.contains(&f.category.as_str())));
    assert_eq!(faqs[0].question, "What is Gnomix?");
}

#[test]
fn collections_are_returned_verbatim() {
    let seed = ContentSeed::builtin();
    let store = MemoryStore::from_seed(seed.clone()).unwrap();

    assert_eq!(store.features().unwrap(), seed.features);
    assert_eq!(store.testimonials().unwrap(), seed.testimonials);
    assert_eq!(store.system_requirements().unwrap(), seed.system_requirements);
}

#[test]
fn reads_are_repeatable() {
    let store = MemoryStore::default();
    let first = serde_json::to_vec(&store.testimonials().unwrap()).unwrap();
    let second = serde_json::to_vec(&store.testimonials().unwrap()).unwrap();
    assert_eq!(first, second);
}
