//! Parses a broadcast listing written as a literal and prints what each item
//! resolved to.
//!
//! Run with `cargo run --example broadcast_schedule`, or pass your own literal
//! as the first argument.

use reprlit::{parse, Value};
use std::env;
use std::error::Error;

const LISTING: &str = "['28 days, 17:34:00', [], 'day\"s', 'of', 'our', 'lives', ('NBC', 45), \
{'running time': '45 minutes', 'channels': [13, 15, 28], 'format': 'soap'}, (5,), \
'2018-09-28 22:22:43.467435']";

fn main() -> Result<(), Box<dyn Error>> {
    let input = env::args().nth(1).unwrap_or_else(|| LISTING.to_string());
    let value = parse(&input);

    println!("{}", value);
    println!();

    let Some(items) = value.as_slice() else {
        println!("{:<10} {}", value.type_name(), value);
        return Ok(());
    };

    for item in items {
        println!("{:<10} {}", item.type_name(), item);

        if let Value::Mapping(map) = item {
            for (key, entry) in map {
                println!("    {:<16} {:<14} {}", key.to_string(), entry.type_name(), entry);
            }
        }
    }

    if let Some(duration) = items.first().and_then(Value::as_duration) {
        let seconds = duration
            .total_seconds()
            .ok_or("duration does not fit in seconds")?;
        println!();
        println!("first item runs {} seconds", seconds);
    }

    Ok(())
}
