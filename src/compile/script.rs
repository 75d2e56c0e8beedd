//! Built-in reference script compiler.
//!
//! Mirrors each source module into the output tree with the compiled
//! extension, optionally stripping comments, and reports lexical diagnostics
//! (unterminated comments/strings, unbalanced brackets) with 1-based
//! line/column positions. Emission is partial: a file that produced
//! diagnostics is still written, matching the external compiler contract.
//!
//! Real compilers plug in behind the [`ScriptCompiler`] trait; this one
//! exists so the pipeline is fully exercisable without an external toolchain.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::compile::{CompileOptions, Diagnostic, ScriptCompiler, ScriptOutput};
use crate::paths;

/// The built-in reference compiler.
#[derive(Debug, Default)]
pub struct RefScriptCompiler;

impl RefScriptCompiler {
    /// Create a new reference compiler.
    pub fn new() -> Self {
        Self
    }
}

impl ScriptCompiler for RefScriptCompiler {
    fn compile(&self, files: &[PathBuf], options: &CompileOptions) -> io::Result<ScriptOutput> {
        fs::create_dir_all(&options.out_dir)?;

        let mut pre_emit = Vec::new();
        let mut emit = Vec::new();
        let mut emitted = Vec::new();

        for file in files {
            let text = match fs::read_to_string(file) {
                Ok(text) => text,
                Err(e) => {
                    pre_emit.push(Diagnostic::new(format!("cannot read {}: {}", file.display(), e)));
                    continue;
                }
            };

            let (output, mut diags) = transpile(file, &text, options.remove_comments);
            pre_emit.append(&mut diags);

            let Some(out_path) =
                paths::map_tree(file, &options.root_dir, &options.out_dir, &options.out_ext)
            else {
                emit.push(Diagnostic::new(format!(
                    "{} is outside the root directory {}",
                    file.display(),
                    options.root_dir.display()
                )));
                continue;
            };

            if let Some(parent) = out_path.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    emit.push(Diagnostic::new(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    )));
                    continue;
                }
            }

            match fs::write(&out_path, output) {
                Ok(()) => emitted.push(out_path),
                Err(e) => emit.push(Diagnostic::new(format!(
                    "cannot write {}: {}",
                    out_path.display(),
                    e
                ))),
            }
        }

        // Pre-emit diagnostics first, then emit diagnostics
        let mut diagnostics = pre_emit;
        diagnostics.extend(emit);
        Ok(ScriptOutput { diagnostics, emitted })
    }
}

/// Character cursor tracking 1-based line and column.
struct Cursor {
    chars: Vec<char>,
    i: usize,
    line: usize,
    col: usize,
}

impl Cursor {
    fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), i: 0, line: 1, col: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    fn peek2(&self) -> Option<char> {
        self.chars.get(self.i + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }
}

/// Scan one module: strip comments when requested, collect lexical
/// diagnostics. Newlines inside stripped comments are preserved so line
/// numbers in downstream tooling stay stable.
fn transpile(file: &Path, text: &str, remove_comments: bool) -> (String, Vec<Diagnostic>) {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut diags = Vec::new();
    let mut stack: Vec<(char, usize, usize)> = Vec::new();

    while let Some(c) = cur.peek() {
        let (line, col) = (cur.line, cur.col);
        match c {
            '/' if cur.peek2() == Some('/') => {
                cur.bump();
                cur.bump();
                if !remove_comments {
                    out.push_str("//");
                }
                while let Some(n) = cur.peek() {
                    if n == '\n' {
                        break;
                    }
                    cur.bump();
                    if !remove_comments {
                        out.push(n);
                    }
                }
            }
            '/' if cur.peek2() == Some('*') => {
                cur.bump();
                cur.bump();
                if !remove_comments {
                    out.push_str("/*");
                }
                let mut closed = false;
                while let Some(n) = cur.peek() {
                    if n == '*' && cur.peek2() == Some('/') {
                        cur.bump();
                        cur.bump();
                        if !remove_comments {
                            out.push_str("*/");
                        }
                        closed = true;
                        break;
                    }
                    cur.bump();
                    if n == '\n' {
                        out.push('\n');
                    } else if !remove_comments {
                        out.push(n);
                    }
                }
                if !closed {
                    diags.push(Diagnostic::at(file, line, col, "unterminated block comment"));
                }
            }
            '\'' | '"' | '`' => {
                let quote = c;
                cur.bump();
                out.push(quote);
                let mut closed = false;
                while let Some(n) = cur.peek() {
                    if n == '\\' {
                        cur.bump();
                        out.push('\\');
                        if let Some(escaped) = cur.bump() {
                            out.push(escaped);
                        }
                        continue;
                    }
                    if n == quote {
                        cur.bump();
                        out.push(quote);
                        closed = true;
                        break;
                    }
                    if n == '\n' && quote != '`' {
                        // Newline terminates a single/double-quoted literal
                        break;
                    }
                    cur.bump();
                    out.push(n);
                }
                if !closed {
                    diags.push(Diagnostic::at(file, line, col, "unterminated string literal"));
                }
            }
            '(' | '[' | '{' => {
                stack.push((c, line, col));
                cur.bump();
                out.push(c);
            }
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.last() {
                    Some(&(open, _, _)) if open == expected => {
                        stack.pop();
                    }
                    _ => diags.push(Diagnostic::at(file, line, col, format!("unmatched '{}'", c))),
                }
                cur.bump();
                out.push(c);
            }
            _ => {
                cur.bump();
                out.push(c);
            }
        }
    }

    for (open, line, col) in stack {
        diags.push(Diagnostic::at(file, line, col, format!("unclosed '{}'", open)));
    }

    (out, diags)
}
