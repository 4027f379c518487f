// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_inline_paragraph(repeats: usize) -> String {
    let base = "Some **bold** and *italic* text with `code`, an ![image](https://example.com/a.png) and a [link](https://example.com). ";
    base.repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_plain_paragraph(repeats: usize) -> String {
    "Plain words without any inline markup at all. ".repeat(repeats)
}
