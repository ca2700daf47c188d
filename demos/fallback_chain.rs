use std::collections::HashMap;

use outcome_rail::{first_ok, first_ok_wrap, Outcome};

fn memory_tier() -> HashMap<&'static str, i32> {
    HashMap::from([("answer", 42)])
}

fn disk_tier() -> HashMap<&'static str, i32> {
    HashMap::from([("answer", 42), ("retries", 3)])
}

fn lookup(tier: &str, table: &HashMap<&'static str, i32>, key: &str) -> Outcome<i32, String> {
    Outcome::from_option(
        table.get(key).copied(),
        format!("{key:?} not found in {tier}"),
    )
}

fn main() {
    let memory = memory_tier();
    let disk = disk_tier();

    println!("Layered lookup, lazily:");
    for key in ["answer", "retries", "timeout"] {
        // Later tiers are only consulted when the earlier ones miss.
        let rz = first_ok!(
            lookup("memory", &memory, key),
            lookup("disk", &disk, key),
        );
        match rz {
            Some(Outcome::Ok(value)) => println!("  {key:?} -> {value}"),
            Some(Outcome::Err(err)) => println!("  {key:?} -> miss: {err}"),
            None => unreachable!("at least one tier is always consulted"),
        }
    }

    println!("\nSame chain, wrapped as a function:");
    let mut cached_get = first_ok_wrap(|key: &'static str| {
        [
            lookup("memory", &memory, key),
            lookup("disk", &disk, key),
        ]
    });
    for key in ["retries", "timeout"] {
        println!("  {key:?} -> {:?}", cached_get(key));
    }

    println!("\nMiss with a default:");
    let timeout = lookup("disk", &disk, "timeout")
        .fill(|_| true, 30)
        .value()
        .to_owned();
    println!("  timeout -> {timeout}");
}
