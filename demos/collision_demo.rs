//! Collision resolution demonstration.
//!
//! Inserts two groups of anagrams (which all collide under the naive hasher)
//! into every table and prints what each strategy made of them.
//!
//! Run with `cargo run --example collision_demo`.

use hashprobe::config::{Config, TableConfig};
use hashprobe::error::Result;
use hashprobe::hash_map::{
    ChainedTable, DirectTable, DoubleHashTable, LinearProbeTable, NaiveHasher, OpenAddressingTable,
    ProbeStrategy, QuadraticProbeTable, StringHasher,
};

const ANAGRAMS: [&str; 8] = ["dabc", "abcd", "bcda", "cdab", "ghef", "efgh", "fghe", "hefg"];

fn report<P: ProbeStrategy, H: StringHasher>(table: &OpenAddressingTable<P, H>) {
    let stats = table.stats();
    println!("{}", table);
    println!(
        "   inserts={} collisions={} max_probe={} avg_probe={:.2}",
        stats.inserts,
        stats.collisions,
        stats.max_probe_length,
        stats.average_probe_length()
    );
}

fn main() -> Result<()> {
    hashprobe::init();

    println!("hashprobe Collision Demo");
    println!("========================");

    println!("\n1. Direct addressing (last write wins)");
    let mut direct = DirectTable::with_hasher(NaiveHasher);
    for value in ANAGRAMS {
        direct.add(value);
    }
    println!("{}", direct);
    println!("   find(\"dabc\") -> {:?}", direct.find("dabc"));

    println!("\n2. Separate chaining");
    let mut chained = ChainedTable::with_hasher(NaiveHasher);
    for value in ANAGRAMS {
        chained.add(value);
    }
    println!("{}", chained);

    println!("\n3. Open addressing from the collision stress preset");
    let config = TableConfig::collision_stress_preset();
    config.validate()?;

    let mut linear = LinearProbeTable::from_config(&config)?;
    let mut quadratic = QuadraticProbeTable::from_config(&config)?;
    let mut double = DoubleHashTable::from_config(&config)?;
    for value in ANAGRAMS {
        linear.add(value)?;
        quadratic.add(value)?;
        double.add(value)?;
    }
    report(&linear);
    report(&quadratic);
    report(&double);

    println!("\n4. Adding to a full table");
    match linear.add("one more") {
        Ok(slot) => println!("   unexpectedly stored in slot {}", slot),
        Err(e) => println!("   {} ({})", e, e.category()),
    }
    println!("   search(\"one more\") -> {:?}", linear.search("one more"));

    Ok(())
}
