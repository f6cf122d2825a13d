use std::collections::BTreeMap;

use criterion::{criterion_group, Criterion};
use tstree::Tree;

use super::common::{get_prefixes, get_words};

fn btree_insert(words: Vec<String>) -> BTreeMap<String, usize> {
    let mut btree = BTreeMap::new();
    for (idx, word) in words.into_iter().enumerate() {
        btree.insert(word, idx);
    }
    btree
}

fn tst_insert(words: Vec<String>) -> Tree<usize> {
    let mut tree = Tree::new();
    for (idx, word) in words.into_iter().enumerate() {
        tree.insert(&word, idx).expect("generated words are never empty");
    }
    tree
}

pub fn bench(c: &mut Criterion) {
    let words = get_words(rand::random(), 4, 2..18, 256, 8);
    let nbytes = words.iter().map(|s| s.len() as u64).sum();
    {
        let mut group = c.benchmark_group("baseline/get");
        group.throughput(criterion::Throughput::Bytes(nbytes));
        group.bench_function("btree", |b| {
            b.iter_batched(
                || (&words, btree_insert(words.clone())),
                |(words, tree)| {
                    for (idx, word) in words.iter().enumerate() {
                        assert_eq!(tree.get(word), Some(&idx));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_function("tst", |b| {
            b.iter_batched(
                || (&words, tst_insert(words.clone())),
                |(words, tree)| {
                    for (idx, word) in words.iter().enumerate() {
                        assert_eq!(tree.get(word), Some(&idx));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    {
        let mut group = c.benchmark_group("baseline/insert");
        group.throughput(criterion::Throughput::Bytes(nbytes));
        group.bench_function("btree", |b| {
            b.iter_batched(|| words.clone(), btree_insert, criterion::BatchSize::SmallInput)
        });
        group.bench_function("tst", |b| {
            b.iter_batched(|| words.clone(), tst_insert, criterion::BatchSize::SmallInput)
        });
    }
    {
        let prefixes = get_prefixes(rand::random(), &words, 64, 3);
        let btree = btree_insert(words.clone());
        let tree = tst_insert(words.clone());
        let mut group = c.benchmark_group("baseline/match_prefix");
        group.bench_function("btree", |b| {
            b.iter(|| {
                prefixes
                    .iter()
                    .map(|prefix| {
                        btree
                            .range::<String, _>(prefix..)
                            .take_while(|(word, _)| word.starts_with(prefix.as_str()))
                            .count()
                    })
                    .sum::<usize>()
            })
        });
        group.bench_function("tst", |b| {
            b.iter(|| {
                prefixes
                    .iter()
                    .map(|prefix| tree.match_prefix(prefix).len())
                    .sum::<usize>()
            })
        });
    }
}

criterion_group!(bench_baseline_group, bench);
