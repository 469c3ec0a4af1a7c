//! Click payloads: open a URL, suggest a command, run a command.

use ekho_rs::{LogConfig, TextColor, ekho, init_with_config};

fn main() -> ekho_rs::Result<()> {
    init_with_config(&LogConfig::from_env()?)?;

    let accent = TextColor::parse("#00AAFF")?;

    let text = ekho("click testing :D", |b| {
        b.style(|s| {
            s.gold().italic();
        });
        b.newline();

        b.child_with("open url", |b| {
            b.style(|s| {
                s.red().open_url("https://example.com/wiki/hover-and-click-events");
            });
        });
        b.newline();

        b.child_with("suggest command", |b| {
            b.style(|s| {
                s.text_color(accent).suggest_command("this text is a suggestion ;)");
            });
        });
        b.newline();

        b.child_with("run command", |b| {
            b.style(|s| {
                s.green().run_command("/me command has run :D");
            });
        });
    });

    print!("{}", text.pretty());
    Ok(())
}
