//! Indented-text formatter for directory trees
//!
//! This module provides `TreeFormatter` which renders a complete `DirTree`
//! into a string or prints it to stdout with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::DirTree;

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// Formats a `DirTree` as indented text, one directory name per line.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Renders the tree into a string, two spaces of indent per level.
    pub fn format(&self, tree: &DirTree) -> String {
        let mut out = String::new();
        Self::format_level(tree, 0, &mut out);
        out
    }

    fn format_level(tree: &DirTree, depth: usize, out: &mut String) {
        for (name, child) in tree.children() {
            out.push_str(&INDENT.repeat(depth));
            out.push_str(name);
            out.push('\n');
            Self::format_level(child, depth + 1, out);
        }
    }

    /// Prints the tree to stdout, coloring directory names when enabled.
    pub fn print(&self, tree: &DirTree) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.print_level(tree, 0, &mut stdout)
    }

    fn print_level(
        &self,
        tree: &DirTree,
        depth: usize,
        stdout: &mut StandardStream,
    ) -> io::Result<()> {
        for (name, child) in tree.children() {
            write!(stdout, "{}", INDENT.repeat(depth))?;
            if self.use_color {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(stdout, "{}", name)?;
            if self.use_color {
                stdout.reset()?;
            }
            writeln!(stdout)?;
            self.print_level(child, depth + 1, stdout)?;
        }
        Ok(())
    }
}
