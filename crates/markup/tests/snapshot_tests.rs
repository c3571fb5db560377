//! Snapshot tests for translated output.
//!
//! Escape bytes are rendered as `ESC` so snapshots stay readable.

use insta::assert_snapshot;
use warna_markup::translate;

fn show(text: &str) -> String {
    text.replace('\x1b', "ESC")
}

#[test]
fn snapshot_status_line() {
    let out = translate("{GREEN(B)}PASS{RESET} {YELLOW}3 warnings{RESET}");
    assert_snapshot!(show(&out), @"ESC[32;1mPASSESC[0m ESC[33m3 warningsESC[0mESC[0m");
}

#[test]
fn snapshot_extended_colors() {
    let out = translate("{COLOR(208)}orange {RGB(10,20,30,BG)}dark {HEX(#00FF7F)}spring");
    assert_snapshot!(
        show(&out),
        @"ESC[38;5;208morange ESC[48;2;10;20;30mdark ESC[38;2;0;255;127mspringESC[0m"
    );
}

#[test]
fn snapshot_mixed_fallbacks() {
    let out = translate("{BOLD}{RED(B,Q)}x{RGB(1,2)}{HEX(#XYZ)}");
    assert_snapshot!(show(&out), @"{BOLD}ESC[31;1mx{RGB(1,2)}{HEX(#XYZ)}ESC[0m");
}
