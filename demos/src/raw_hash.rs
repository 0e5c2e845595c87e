// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Insert/lookup throughput driver for the fixed hash table.
//!
//! Inserts keys `0..N` with value `key * 2` into a table allocated up front,
//! then reads every key back and sums the values into a checksum.

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use probetable::error::Error;
use probetable::table::FixedHashTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Largest key count whose values (`key * 2`) still fit in an `i32`.
const MAX_KEYS: i64 = (i32::MAX / 2) as i64;

/// Raw hash table throughput benchmark
#[derive(Parser, Debug)]
#[command(name = "raw_hash")]
#[command(about = "Measure insert and lookup throughput of a fixed-capacity hash table")]
struct Args {
    /// Number of slots to allocate
    #[arg(short = 'c', long = "capacity", default_value = "20000000")]
    capacity: usize,

    /// Number of keys to insert and read back
    #[arg(
        short = 'n',
        long = "keys",
        default_value = "10000000",
        value_parser = clap::value_parser!(i32).range(0..=MAX_KEYS)
    )]
    keys: i32,

    /// Read keys back in a random order instead of insertion order
    #[arg(long = "shuffle", default_value = "false")]
    shuffle: bool,

    /// Seed for the shuffled lookup order
    #[arg(long = "seed", default_value = "42")]
    seed: u64,

    /// Maximum level of diagnostic logs (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info")]
    log_level: tracing::Level,
}

struct Phase {
    elapsed: Duration,
    ops: i32,
}

impl Phase {
    fn report(&self, name: &str) {
        let secs = self.elapsed.as_secs_f64();
        println!("{name} time: {secs:.4} seconds");
        println!(
            "throughput: {:.2} million ops/sec",
            self.ops as f64 / secs / 1e6
        );
    }
}

fn insert_all(table: &mut FixedHashTable, n: i32) -> Result<Phase, Error> {
    let start = Instant::now();
    for key in 0..n {
        table.insert(key, key * 2)?;
    }
    Ok(Phase {
        elapsed: start.elapsed(),
        ops: n,
    })
}

fn lookup_all(table: &FixedHashTable, keys: &[i32]) -> (Phase, i64) {
    let start = Instant::now();
    let mut checksum = 0i64;
    for &key in keys {
        // Missing keys count as -1.
        checksum += table.lookup(key).map_or(-1, i64::from);
    }
    let phase = Phase {
        elapsed: start.elapsed(),
        ops: keys.len() as i32,
    };
    (phase, checksum)
}

fn probe_stats(table: &FixedHashTable, n: i32) -> (f64, usize) {
    let mut total = 0usize;
    let mut max = 0usize;
    for key in 0..n {
        let distance = table.probe_distance(key).unwrap_or_default();
        total += distance;
        max = max.max(distance);
    }
    let mean = if n == 0 { 0.0 } else { total as f64 / n as f64 };
    (mean, max)
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    println!("___ Raw Hash Table Benchmark ___");

    let mut table = FixedHashTable::try_new(args.capacity)?;
    println!(
        "Allocated table ({} MB)",
        table.allocated_bytes() / 1024 / 1024
    );
    tracing::info!(
        capacity = args.capacity,
        keys = args.keys,
        shuffle = args.shuffle,
        "starting run"
    );

    println!("Inserting {} items...", args.keys);
    let insert = insert_all(&mut table, args.keys)?;
    insert.report("Insert");
    tracing::info!(
        len = table.len(),
        load_factor = table.load_factor(),
        "insert phase finished"
    );

    let mut keys: Vec<i32> = (0..args.keys).collect();
    if args.shuffle {
        keys.shuffle(&mut StdRng::seed_from_u64(args.seed));
    }

    println!("\nReading back {} items...", args.keys);
    let (lookup, checksum) = lookup_all(&table, &keys);
    lookup.report("Lookup");
    println!("checksum: {checksum}");

    let (mean, max) = probe_stats(&table, args.keys);
    println!("probe distance: mean {mean:.3}, max {max}");
    tracing::info!(mean, max, "probe distance over inserted keys");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_matches_closed_form() {
        let n = 10_000;
        let mut table = FixedHashTable::new(2 * n as usize);
        insert_all(&mut table, n).unwrap();

        let keys: Vec<i32> = (0..n).collect();
        let (phase, checksum) = lookup_all(&table, &keys);
        assert_eq!(phase.ops, n);
        assert_eq!(checksum, i64::from(n) * i64::from(n - 1));
    }

    #[test]
    fn test_missing_keys_count_as_minus_one() {
        let table = FixedHashTable::new(8);
        let (_, checksum) = lookup_all(&table, &[1, 2, 3]);
        assert_eq!(checksum, -3);
    }

    #[test]
    fn test_insert_past_capacity_fails() {
        let mut table = FixedHashTable::new(10);
        assert!(insert_all(&mut table, 11).is_err());
    }

    #[test]
    fn test_probe_stats_on_sparse_table() {
        let mut table = FixedHashTable::new(1);
        insert_all(&mut table, 1).unwrap();
        assert_eq!(probe_stats(&table, 1), (0.0, 0));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["raw_hash"]);
        assert_eq!(args.capacity, 20_000_000);
        assert_eq!(args.keys, 10_000_000);
        assert!(!args.shuffle);
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_args_reject_oversized_key_count() {
        assert!(Args::try_parse_from(["raw_hash", "--keys", "2000000000"]).is_err());
    }
}
