//! Building documents in code with the record! and tuple! macros.
//!
//! Run with: cargo run --example macro

use cfg2::{record, to_string, tuple, Cfg};

fn main() {
    let mut sys = record![
        ["sys" = "anna"],
        ["ip" = "10.0.0.2", "ether" = "0080c7c72c1c"],
    ];
    sys.push(tuple!["dom" = "anna.home", "trusted"]);

    let creds = record![
        ["creds"],
        ["user" = "alice", "comment" = "alice's laptop"],
    ];

    let cfg: Cfg = vec![sys, creds].into_iter().collect();

    println!("Keys: {:?}", cfg.keys());
    println!("{}", to_string(&cfg));
}
