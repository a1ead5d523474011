use honggfuzz::fuzz;

use gsr::{FormatConfig, Snapshot};

// Arbitrary bytes must only ever produce an error, never a panic.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let _ = Snapshot::read_from(data, &FormatConfig::default());
        });
    }
}
