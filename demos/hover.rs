//! Hover payloads: text, item, and entity tooltips.

use ekho_rs::{EntityDescriptor, ItemStack, LogConfig, ekho, init_with_config};
use uuid::Uuid;

fn main() -> ekho_rs::Result<()> {
    init_with_config(&LogConfig::from_env()?)?;

    let text = ekho("", |b| {
        b.style(|s| {
            s.green();
        });
        b.child_with("show item", |b| {
            b.style(|s| {
                s.show_item(ItemStack::new("minecraft:diamond_shovel").with_count(3));
            });
        });
        b.newline();
        b.child_with("show text", |b| {
            b.style(|s| {
                s.show_text(ekho("have some hover text", |b| {
                    b.style(|s| {
                        s.yellow().italic();
                    });
                }));
            });
        });
        b.newline();
        b.child_with("show entity", |b| {
            b.style(|s| {
                s.show_entity(
                    EntityDescriptor::new("minecraft:player", Uuid::new_v4()).with_name(ekho(
                        "player name",
                        |b| {
                            b.style(|s| {
                                s.gray();
                            });
                        },
                    )),
                );
            });
        });
    });

    print!("{}", text.pretty());
    Ok(())
}
