//! Tokenizer fuzzer.
//!
//! Feeds arbitrary strings through the tokenizer and checks that it always
//! reaches end of input, that every token borrows from the input, and that
//! end of input is idempotent.

use honggfuzz::fuzz;
use tasiadb::testing::check_tokenizer_invariants;

fn main() {
    loop {
        fuzz!(|input: String| {
            check_tokenizer_invariants(&input);
        });
    }
}
