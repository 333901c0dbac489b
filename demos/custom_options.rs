//! Choosing the quote style and turning on parser tracing.
//!
//! Run with: cargo run --example custom_options

use cfg2::{
    from_str_with_options, to_string_with_options, EmitOptions, ParseOptions, QuoteStyle,
};
use std::error::Error;

const TEXT: &str = "\"use bob's code\"\n\tcomment='a \"quoted\" word' path=/usr/bob\n";

fn main() -> Result<(), Box<dyn Error>> {
    // Per-rune tracing goes to whatever `tracing` subscriber is installed
    let cfg = from_str_with_options(TEXT, ParseOptions::new().with_verbose(true))?;

    println!("Double quotes (default):");
    let double = to_string_with_options(&cfg, EmitOptions::new());
    println!("{}", double);

    println!("Single quotes:");
    let single = to_string_with_options(&cfg, EmitOptions::new().with_quote(QuoteStyle::Single));
    println!("{}", single);

    Ok(())
}
