//! Looking values up in a parsed document.
//!
//! Run with: cargo run --example lookups

use cfg2::from_str;
use std::error::Error;

const TEXT: &str = "\
ipnet=home ip=10.0.0.0 ipmask=255.255.255.0
\tauth=10.0.0.1 authdom=HOME
\tfs=10.0.0.3
sys=anna ip=10.0.0.2
sys=bob ip=10.0.0.7
";

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = from_str(TEXT)?;

    // Every record keyed `sys`, in file order
    if let Some(systems) = cfg.lookup("sys") {
        for sys in systems {
            let flat = sys.flat_map();
            println!("{} -> {}", flat["sys"], flat["ip"]);
        }
    }

    // Nested maps: record key -> tuple key -> attribute -> values
    let map = cfg.build_map();
    println!("authdom: {:?}", map["ipnet"]["auth"]["authdom"]);

    // Flat map of the whole document: the first `ip` wins
    let flat = cfg.flat_map();
    println!("first ip: {}", flat["ip"]);

    // Export to JSON through serde
    println!("{}", serde_json::to_string_pretty(&cfg)?);

    Ok(())
}
