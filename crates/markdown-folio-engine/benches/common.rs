// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "## Section\n\nParagraph with *some* **content** and `code`, plus a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> A quote\n> spanning lines\n\n| Name | Value |\n|:-----|------:|\n| a    | 1     |\n| b    | 2     |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("---\ntitle: Bench\ndate: 2024-01-01\n---\n# Title\n\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_inline_heavy(paragraphs: usize) -> String {
    let line = "Text with *em*, **strong**, ***both***, ~~strike~~, `code`, ![img](a.png) and \\*escapes\\* plus *unmatched and __under__ scores.\n\n";
    line.repeat(paragraphs)
}
