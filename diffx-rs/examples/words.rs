//! Example: word-level diff of two sentences
//!
//! Usage: cargo run --example words ["sentence a" "sentence b"]
//!
//! With no arguments, diffs a pair of built-in sentences.

use std::env;

use diffx::{diff, diff_histogram, DiffOp, DiffOptions, OpType};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (text_a, text_b) = if args.len() == 3 {
        (args[1].clone(), args[2].clone())
    } else {
        (
            "The quick brown fox jumps over the lazy dog".to_string(),
            "A slow red fox leaps over the sleeping cat".to_string(),
        )
    };

    let a: Vec<&str> = text_a.split_whitespace().collect();
    let b: Vec<&str> = text_b.split_whitespace().collect();

    println!("A: {}", text_a);
    println!("B: {}", text_b);

    println!("\nMyers driver:");
    print_ops(&a, &b, &diff(&a, &b, DiffOptions::default()));

    println!("\nHistogram driver:");
    print_ops(&a, &b, &diff_histogram(&a, &b, DiffOptions::default()));
}

fn print_ops(a: &[&str], b: &[&str], ops: &[DiffOp]) {
    for op in ops {
        match op.kind {
            OpType::Equal => println!("  = {}", a[op.a_start..op.a_end].join(" ")),
            OpType::Delete => println!("  - {}", a[op.a_start..op.a_end].join(" ")),
            OpType::Insert => println!("  + {}", b[op.b_start..op.b_end].join(" ")),
        }
    }
}
