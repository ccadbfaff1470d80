//! Sequence and mapping extensions in action.
//!
//! Run with: cargo run --example collections_demo

use std::collections::{BTreeMap, HashMap};

use collection_ext::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    println!("=== Sequence Extensions ===\n");

    let colors = vec!["red", "green", "blue"];
    println!("colors:            {:?}", colors);
    println!("safe_get(1):       {:?}", colors.safe_get(1));
    println!("safe_get(7):       {:?}", colors.safe_get(7));
    println!("safe_get(-1):      {:?}", colors.safe_get(-1));
    println!("index_of(blue):    {:?}", colors.index_of(&"blue"));
    println!("find_equal(pink):  {:?}", colors.find_equal(&"pink"));

    // Seeded so the output is reproducible
    let mut deck: Vec<u8> = (1..=10).collect();
    deck.shuffle_with(&mut StdRng::seed_from_u64(42));
    println!("shuffled deck:     {:?}", deck);

    println!("\n=== Mapping Extensions ===\n");

    let defaults: BTreeMap<_, _> =
        BTreeMap::from_pairs([("theme", "light"), ("font", "mono"), ("theme", "dark")]);
    let user = BTreeMap::from([("font", "serif"), ("lang", "en")]);
    let session = BTreeMap::from([("lang", "fr")]);

    println!("defaults:          {:?}", defaults);
    println!("union_all:         {:?}", defaults.union_all([&user, &session]));

    let settings = (Merge(defaults) | user).into_inner();
    println!("defaults | user:   {:?}", settings);

    let lengths: BTreeMap<_, _> = settings.map_values(|_, v| v.len());
    println!("value lengths:     {:?}", lengths);
    println!(
        "as lines:          {:?}",
        settings.to_vec_with(|k, v| format!("{k}={v}"))
    );

    let counts = HashMap::from([("apples", "3"), ("pears", "many")]);
    let parsed: Result<HashMap<_, u32>, _> = counts.try_map_values(|_, v| v.parse::<u32>());
    println!("parse counts:      {:?}", parsed.map_err(|e| e.to_string()));
}
