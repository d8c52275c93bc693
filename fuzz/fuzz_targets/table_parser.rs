#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str::FromStr;

use fragility::search::assess_fragility;
use fragility::table::ContingencyTable;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy rejection)
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must not panic regardless of input, and a parsed table
        // must survive the full analysis without panicking either.
        if let Ok(table) = ContingencyTable::from_str(input) {
            // Bound the grand total so a single input cannot spin the greedy
            // search past the fuzzer's per-input budget; large-count behavior
            // is covered by the chi-square unit tests.
            let total: u128 = [table.a, table.b, table.c, table.d]
                .iter()
                .map(|&v| u128::from(v))
                .sum();
            if total <= 10_000 {
                let _ = assess_fragility(table);
            }
        }
    }
});
