//! Parser fuzzer.
//!
//! Feeds arbitrary strings through the parser and checks that panic mode
//! never lets more than one diagnostic through.

use honggfuzz::fuzz;
use tasiadb::testing::check_parse;

fn main() {
    loop {
        fuzz!(|input: String| {
            let _ = check_parse(&input);
        });
    }
}
