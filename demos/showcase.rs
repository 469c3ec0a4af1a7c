//! Styling and inheritance.
//!
//! Run with `cargo run --example showcase`. Diagnostics go to `ekho.log`
//! unless `EKHO_LOG_FILE` says otherwise.

use ekho_rs::{LogConfig, ekho, init_with_config};

fn main() -> ekho_rs::Result<()> {
    init_with_config(&LogConfig::from_env()?)?;

    let text = ekho("root ", |b| {
        b.style(|s| {
            s.bold().show_text(ekho("hover text", |b| {
                b.style(|s| {
                    s.obfuscated();
                });
            }));
        });

        // inherits the root style
        b.child("hello").newline().child("world").newline();

        // inheritance is blocked, so this starts from an empty style
        b.add_child_with("string with new style", false, |b| {
            b.style(|s| {
                s.italic().red();
            });
            b.child("string that inherits new style");
            b.add_child("string that does not inherit", false);
            b.newline();
            // italic stays, underline and color are overridden
            b.child_with("string that has additional style", |b| {
                b.style(|s| {
                    s.underline().green();
                });
            });
        });

        // out of range, falls back to white and logs a warning
        b.child_with(" fallback", |b| {
            b.style(|s| {
                s.color(0x1_000_000);
            });
        });
    });

    print!("{}", text.pretty());
    println!();
    println!("{}", text.to_plain_string());
    Ok(())
}
