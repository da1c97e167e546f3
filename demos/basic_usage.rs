//! Basic usage example for the dammgen library.
//!
//! This example walks through building codecs for several alphabet sizes,
//! encoding strings, and demonstrating error detection.

use dammgen::codec::{Alphabet, DammCodec};
use dammgen::oracle::check_antisymmetry;
use dammgen::quasigroup::Quasigroup;

fn main() {
    println!("Dammgen Library - Basic Usage Example\n");

    // The classic decimal case.
    println!("Building a decimal codec...");
    let codec = DammCodec::new(Alphabet::digits()).expect("decimal codec must build");

    let message = "4561";
    let encoded = codec.encode(message).expect("encode failed");
    println!("  {message} encodes to {encoded}");
    println!(
        "  verify({encoded}) = {}",
        codec.verify(&encoded).expect("verify failed")
    );

    // Mutations are detected.
    for mutated in ["45604", "45164"] {
        println!(
            "  verify({mutated}) = {}",
            codec.verify(mutated).expect("verify failed")
        );
    }
    println!();

    // A hexadecimal codec uses the GF(16) field-doubling construction.
    println!("Building a hexadecimal codec...");
    let hex = Alphabet::new("0123456789abcdef".chars()).expect("valid alphabet");
    let codec = DammCodec::new(hex).expect("hex codec must build");
    println!("  strategy: {}", codec.quasigroup().strategy());

    let encoded = codec.encode("deadbeef").expect("encode failed");
    println!("  deadbeef encodes to {encoded}");
    println!();

    // Which orders are constructible?
    println!("Construction across orders 1..=20:");
    for order in 1..=20 {
        match Quasigroup::build(order) {
            Ok(q) => {
                let report = check_antisymmetry(&q.cayley_table());
                println!(
                    "  order {order:>2}: {} (weakly anti-symmetric: {}, strongly: {})",
                    q.strategy(),
                    report.is_weakly_antisymmetric,
                    report.is_strongly_antisymmetric
                );
            }
            Err(e) => println!("  order {order:>2}: {e}"),
        }
    }
}
