//! Line renderers
//!
//! A renderer turns the position of a node (the stack of ancestor [`Level`]s)
//! plus the node itself into a single display line. Positions count visible
//! siblings only, so glyphs and numbers follow what is actually drawn.
//!
//! ```text
//! Tree            Numbered          Tabs          Folder
//! root            root              root          ▼ root
//! ├── a              1. a           \ta              ▼ a
//! │   └── x             1.1. x      \t\tx                  x
//! └── b              2. b           \tb                  b
//! ```

use crate::RenderStyle;
use derive_new::new;

const INDENT: &str = "   ";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";
const EXPANDED: &str = "▼ ";
const COLLAPSED: &str = "▶ ";
const LEAF: &str = "  ";

/// Position among the visible children of one ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Level {
    /// 1-based index of the child being rendered
    pub current_child: usize,
    /// Number of visible children at this level
    pub last_child: usize,
}

impl Level {
    pub fn is_last(&self) -> bool {
        self.current_child >= self.last_child
    }
}

/// Everything a renderer may look at for one line
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Left padding of the whole tree
    pub offset: usize,
    /// One level per ancestor, the last one is the node's own level
    pub levels: &'a [Level],
    pub text: &'a str,
    pub collapsed: bool,
    pub visible_children: usize,
}

pub trait LineRenderer: std::fmt::Debug {
    fn render_line(&self, context: &RenderContext<'_>) -> String;
}

impl LineRenderer for RenderStyle {
    fn render_line(&self, context: &RenderContext<'_>) -> String {
        match self {
            RenderStyle::Tree => tree_line(context),
            RenderStyle::Numbered => numbered_line(context),
            RenderStyle::Tabs => tabs_line(context),
            RenderStyle::Folder => folder_line(context),
        }
    }
}

fn tabs_line(context: &RenderContext<'_>) -> String {
    format!("{}{}", "\t".repeat(context.levels.len()), context.text)
}

fn numbered_line(context: &RenderContext<'_>) -> String {
    let Some((own, ancestors)) = context.levels.split_last() else {
        return context.text.to_string();
    };

    let prefix = ancestors
        .iter()
        .map(|level| format!("{}.", level.current_child))
        .collect::<String>();

    format!(
        "{}{}{}. {}",
        INDENT.repeat(context.levels.len()),
        prefix,
        own.current_child,
        context.text
    )
}

fn tree_line(context: &RenderContext<'_>) -> String {
    let mut glyphs = String::new();

    if let Some((own, ancestors)) = context.levels.split_last() {
        for level in ancestors {
            glyphs.push_str(if level.is_last() { BLANK } else { PIPE });
        }
        glyphs.push_str(if own.is_last() { LAST_BRANCH } else { BRANCH });
    }

    format!("{}{}{}", " ".repeat(context.offset), glyphs, context.text)
}

fn folder_line(context: &RenderContext<'_>) -> String {
    let sign = if context.visible_children == 0 {
        LEAF
    } else if context.collapsed {
        COLLAPSED
    } else {
        EXPANDED
    };

    format!(
        "{}{}{}",
        INDENT.repeat(context.levels.len()),
        sign,
        context.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::tree::{ROOT, Tree};
    use pretty_assertions::assert_eq;

    fn context<'a>(levels: &'a [Level], text: &'a str) -> RenderContext<'a> {
        RenderContext {
            offset: 0,
            levels,
            text,
            collapsed: false,
            visible_children: 0,
        }
    }

    fn sample(style: RenderStyle) -> Vec<String> {
        // root
        // ├── foo
        // ├── bar
        // │   ├── baz
        // │   └── qux
        // └── end
        let mut tree: Tree<String> = Tree::new("root");
        tree.add_child(ROOT, "foo".to_string());
        let bar = tree.add_child(ROOT, "bar".to_string());
        tree.add_child(bar, "baz".to_string());
        tree.add_child(bar, "qux".to_string());
        tree.add_child(ROOT, "end".to_string());
        tree.set_render_style(style);
        tree.render()
    }

    #[test]
    fn tree_style_picks_branch_by_last_sibling() {
        assert_eq!(
            sample(RenderStyle::Tree),
            vec![
                "root",
                "├── foo",
                "├── bar",
                "│   ├── baz",
                "│   └── qux",
                "└── end",
            ]
        );
    }

    #[test]
    fn numbered_style_uses_dotted_prefix() {
        assert_eq!(
            sample(RenderStyle::Numbered),
            vec![
                "root",
                "   1. foo",
                "   2. bar",
                "      2.1. baz",
                "      2.2. qux",
                "   3. end",
            ]
        );
    }

    #[test]
    fn tabs_style_indents_per_depth() {
        assert_eq!(
            sample(RenderStyle::Tabs),
            vec!["root", "\tfoo", "\tbar", "\t\tbaz", "\t\tqux", "\tend"]
        );
    }

    #[test]
    fn folder_style_marks_expandable_nodes() {
        assert_eq!(
            sample(RenderStyle::Folder),
            vec![
                "▼ root",
                "     foo",
                "   ▼ bar",
                "        baz",
                "        qux",
                "     end",
            ]
        );
    }

    #[test]
    fn folder_style_shows_collapsed_glyph() {
        let levels = [Level::new(1, 1)];
        let line = folder_line(&RenderContext {
            collapsed: true,
            visible_children: 3,
            ..context(&levels, "dir/")
        });

        assert_eq!(line, "   ▶ dir/");
    }

    #[test]
    fn tree_style_closes_finished_ancestors() {
        let levels = [Level::new(2, 2), Level::new(1, 2)];

        assert_eq!(tree_line(&context(&levels, "x")), "    ├── x");
    }

    #[test]
    fn tree_style_offset_applies_to_every_line() {
        let levels = [Level::new(1, 1)];
        let line = tree_line(&RenderContext {
            offset: 4,
            ..context(&levels, "x")
        });

        assert_eq!(line, "    └── x");
        assert_eq!(
            tree_line(&RenderContext {
                offset: 4,
                ..context(&[], "root")
            }),
            "    root"
        );
    }

    #[test]
    fn numbered_style_root_is_bare_text() {
        assert_eq!(numbered_line(&context(&[], "root")), "root");
    }
}
