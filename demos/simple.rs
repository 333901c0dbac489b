//! Parse a cfg document and write it back out.
//!
//! Run with: cargo run --example simple

use cfg2::{from_str, to_string};
use std::error::Error;

const TEXT: &str = "\
# home network
'my network'
\tip=1.2.3.4

creds
\tuser=alice
\tmethod=key\tfile=\"./my_key.pem\"
";

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = from_str(TEXT)?;

    for record in &cfg {
        println!("record {:?} ({} tuples)", record.primary_key(), record.len());
        for tuple in record {
            for attribute in tuple {
                println!("  {} = {:?}", attribute.name(), attribute.value());
            }
        }
    }

    // Emit in canonical form
    let emitted = to_string(&cfg);
    println!("\nEmitted:\n{}", emitted);

    // Reading it back gives the same document
    assert!(from_str(&emitted)?.is_equivalent(&cfg));
    println!("✓ Round-trip successful");

    Ok(())
}
