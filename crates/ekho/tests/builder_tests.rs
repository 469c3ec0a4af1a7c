//! Tests for tree construction and style inheritance.

use ekho::{Formatting, Inheritance, Style, Text, TextColor, ekho};

fn palette(formatting: Formatting) -> Option<TextColor> {
    Some(TextColor::Palette(formatting))
}

fn contents(text: &Text) -> Vec<&str> {
    text.children().iter().map(Text::content).collect()
}

// ============================================================================
// Leaf Inheritance
// ============================================================================

#[test]
fn leaf_inherits_parent_style_by_default() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold().underline().dark_purple().run_command("/help");
        });
        b.child("leaf");
    });

    assert_eq!(text.children()[0].style(), text.style());
}

#[test]
fn leaf_with_blocked_inheritance_is_unstyled() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold().italic().strikethrough().obfuscated().gold();
        });
        b.add_child("leaf", false);
    });

    let leaf = &text.children()[0];
    assert_eq!(leaf.style(), &Style::EMPTY);
    assert!(!leaf.is_complex());
}

#[test]
fn explicit_inherit_matches_default() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.italic();
        });
        b.add_child("a", Inheritance::Inherit).child("b");
    });

    assert_eq!(text.children()[0].style(), text.children()[1].style());
}

// ============================================================================
// Nested Blocks
// ============================================================================

#[test]
fn nested_block_inherits_then_overrides() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold().italic().red();
        });
        b.add_child_with("nested", true, |b| {
            b.style(|s| {
                s.underline().green();
            });
        });
    });

    let nested = text.children()[0].style();
    assert_eq!(nested.underlined(), Some(true));
    assert_eq!(nested.color(), palette(Formatting::Green));
    assert_eq!(nested.bold(), Some(true));
    assert_eq!(nested.italic(), Some(true));
    assert_eq!(nested.strikethrough(), None);
    assert_eq!(nested.obfuscated(), None);
}

#[test]
fn nested_block_blocks_then_sets() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold().underline().aqua();
        });
        b.add_child_with("nested", false, |b| {
            b.style(|s| {
                s.italic().red();
            });
        });
    });

    let nested = text.children()[0].style();
    assert_eq!(nested.italic(), Some(true));
    assert_eq!(nested.color(), palette(Formatting::Red));
    assert_eq!(nested.bold(), None);
    assert_eq!(nested.underlined(), None);
    assert_eq!(nested.click_event(), None);
    assert_eq!(nested.hover_event(), None);
}

#[test]
fn nested_block_without_style_keeps_seed() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.yellow();
        });
        b.child_with("inherits", |_| {});
        b.add_child_with("resets", Inheritance::Reset, |_| {});
    });

    assert_eq!(text.children()[0].style().color(), palette(Formatting::Yellow));
    assert!(text.children()[1].style().is_empty());
}

// ============================================================================
// Newlines and Ordering
// ============================================================================

#[test]
fn newline_never_inherits() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold().red();
        });
        b.newline();
        b.child_with("inner", |b| {
            b.style(|s| {
                s.italic();
            });
            b.newline();
        });
    });

    assert_eq!(text.children()[0].content(), "\n");
    assert!(text.children()[0].style().is_empty());

    let inner = &text.children()[1];
    assert_eq!(inner.children()[0].content(), "\n");
    assert!(inner.children()[0].style().is_empty());
}

#[test]
fn siblings_keep_call_order() {
    let text = ekho("", |b| {
        b.child("a");
        b.newline();
        b.child("b");
    });

    assert_eq!(contents(&text), vec!["a", "\n", "b"]);
}

#[test]
fn nested_subtree_is_a_single_sibling() {
    let text = ekho("", |b| {
        b.child("first")
            .child_with("group", |b| {
                b.child("one").child("two");
            })
            .child("last");
    });

    assert_eq!(contents(&text), vec!["first", "group", "last"]);
    assert_eq!(contents(&text.children()[1]), vec!["one", "two"]);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_bold_root_with_lines() {
    let text = ekho("root ", |b| {
        b.style(|s| {
            s.bold();
        });
        b.child("hello");
        b.newline();
        b.child("world");
    });

    assert_eq!(text.content(), "root ");
    assert_eq!(text.style().bold(), Some(true));
    assert_eq!(contents(&text), vec!["hello", "\n", "world"]);

    let children = text.children();
    assert_eq!(children[0].style().bold(), Some(true));
    assert!(children[1].style().is_empty());
    assert_eq!(children[2].style().bold(), Some(true));
    assert_eq!(text.to_plain_string(), "root hello\nworld");
}

#[test]
fn scenario_reset_child_passes_its_own_style_down() {
    let text = ekho("", |b| {
        b.style(|s| {
            s.bold();
        });
        b.add_child_with("x", false, |b| {
            b.style(|s| {
                s.italic().red();
            });
            b.child("y");
        });
    });

    let x = &text.children()[0];
    assert_eq!(x.style().italic(), Some(true));
    assert_eq!(x.style().color(), palette(Formatting::Red));
    assert_eq!(x.style().bold(), None);

    let y = &x.children()[0];
    assert_eq!(y.content(), "y");
    assert_eq!(y.style(), x.style());
    assert_eq!(y.style().bold(), None);
}

#[test]
fn finished_tree_is_shareable_across_threads() {
    let text = ekho("shared", |b| {
        b.style(|s| {
            s.show_text(ekho("tip", |_| {}));
        });
    });

    let text = std::sync::Arc::new(text);
    let worker = {
        let text = std::sync::Arc::clone(&text);
        std::thread::spawn(move || text.to_plain_string())
    };
    assert_eq!(worker.join().unwrap(), "shared");
}
