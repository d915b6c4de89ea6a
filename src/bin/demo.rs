//! Console walkthrough of the skip list: insert a batch of random keys,
//! dump the structure, then for every third key search it, remove it, and
//! search again to show the removal took.

use rand::{
    thread_rng,
    Rng,
};
use strata::SkipList;

fn main() {
    let mut list = SkipList::new();
    let mut rng = thread_rng();

    // duplicates are possible and silently absorbed by insert
    let keys: Vec<u32> = (0..10).map(|_| rng.gen_range(0..200)).collect();
    for &key in &keys {
        list.insert(key, format!("\"{key}\""));
    }

    print!("{list}");

    for &key in keys.iter().step_by(3) {
        let found = list.search(&key).map(String::as_str).unwrap_or("null");
        println!("Find element             {key:>3}: value={found}");

        let removed = list.remove(&key);
        println!(
            "Remove element           {key:>3}: value={}",
            removed.as_deref().unwrap_or("null")
        );

        let gone = list.search(&key).map(String::as_str).unwrap_or("null");
        println!("Find the removed element {key:>3}: value={gone}");
    }

    print!("{list}");
}
