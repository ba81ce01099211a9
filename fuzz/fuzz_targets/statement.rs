//! Well-formed statement fuzzer.
//!
//! Generates arbitrary `CREATE TABLE` statements that follow the grammar and
//! checks that every one of them is accepted.

use honggfuzz::fuzz;
use tasiadb::testing::{FuzzStatement, check_statement_accepted};

fn main() {
    loop {
        fuzz!(|statement: FuzzStatement| {
            check_statement_accepted(&statement);
        });
    }
}
