use std::{hint::black_box, time::Duration};

use divan::{bench, counter::BytesCount, Bencher, Divan};
use playground_html::{convert_ansi_to_html, remap_token_classes, CompilerOutput, LanguageTag};

fn main() {
    Divan::default()
        .min_time(Duration::from_millis(500))
        .config_with_args()
        .main();
}

const DIAGNOSTIC: &str = "\x1b[1m\x1b[31merror[E0308]\x1b[0m\x1b[1m: mismatched types\x1b[0m
 \x1b[1m\x1b[34m-->\x1b[0m /playground/src/main.rs:3:18
\x1b[1m\x1b[34m  |\x1b[0m
\x1b[1m\x1b[34m3 |\x1b[0m     let x: u8 = \"<hello>\";
\x1b[1m\x1b[34m  |\x1b[0m            \x1b[1m\x1b[34m--\x1b[0m   \x1b[1m\x1b[31m^^^^^^^^^\x1b[0m \x1b[1m\x1b[31mexpected `u8`, found `&str`\x1b[0m
\x1b[1m\x1b[34m  |\x1b[0m
\x1b[1m\x1b[32mnote\x1b[0m: compilation failed\n";

const LISTING: &str = "<span class=\"nl\">main:</span>\n\t<span class=\"nf\">pushq</span>\t\
<span class=\"nv\">%rbp</span>\n\t<span class=\"nf\">movl</span>\t<span class=\"no\">$</span>\
<span class=\"mh\">0x2a</span><span class=\"p\">,</span> <span class=\"nv\">%eax</span>\n\t\
<span class=\"c\"># comment</span>\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    AnsiHeavy,
    PlainText,
}

fn input(kind: Input) -> String {
    let diagnostics = DIAGNOSTIC.repeat(200);
    match kind {
        Input::AnsiHeavy => diagnostics,
        // Replace the start of all ansi escape sequences with a benign character
        Input::PlainText => diagnostics.replace('\u{1b}', "~"),
    }
}

#[bench(args = [Input::AnsiHeavy, Input::PlainText])]
fn ansi(bencher: Bencher, kind: Input) {
    let text = input(kind);
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| convert_ansi_to_html(black_box(&text)));
}

#[bench]
fn compiler_output(bencher: Bencher) {
    let text = input(Input::AnsiHeavy).replace("src/main.rs", "main.pony");
    let formatter = CompilerOutput::new();
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| formatter.format(black_box(&text)).unwrap());
}

#[bench]
fn rehighlight(bencher: Bencher) {
    let listing = LISTING.repeat(500);
    bencher
        .counter(BytesCount::of_str(&listing))
        .bench(|| remap_token_classes(black_box(&listing), LanguageTag::Assembly));
}
