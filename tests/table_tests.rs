use ansi_term::Colour;
use rtable::{Cell, Plain, Table};
use std::io::{self, Write};

mod common;
use common::strip_ansi;

fn table_of(rows: &[&[&str]]) -> Table {
    let mut t = Table::new();
    for row in rows {
        for cell in *row {
            t.write_cell(*cell);
        }
        t.commit_row();
    }
    t
}

#[test]
fn test_two_rows_render_exact_bytes() {
    let mut t = table_of(&[&["a", "bb"], &["ccc", "d"]]);
    t.set_spacing(" ");

    assert_eq!(t.column_widths(), &[3, 2]);
    assert_eq!(t.render(), "a   bb\nccc d\n");
}

#[test]
fn test_fprintln_writes_rendered_output() {
    let mut t = table_of(&[&["a", "bb"], &["ccc", "d"]]);
    t.set_spacing(" ");

    let mut out = Vec::new();
    t.fprintln(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a   bb\nccc d\n");
}

#[test]
fn test_prefix_is_printed_on_every_row() {
    let mut t = table_of(&[&["x", "y"], &["long", "z"]]);
    t.set_prefix("> ");
    t.set_spacing(" | ");

    assert_eq!(t.render(), "> x    | y\n> long | z\n");
}

#[test]
fn test_width_tracking_keeps_the_maximum() {
    let mut t = Table::new();
    let rows: [&[&str]; 4] = [&["ab", "c"], &["a", "cccc"], &["abcde"], &["", "cc", "x"]];
    let mut expected: Vec<usize> = Vec::new();

    for row in rows {
        for cell in row {
            t.write_cell(*cell);
        }
        t.commit_row();

        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            if i < expected.len() {
                expected[i] = expected[i].max(w);
            } else {
                expected.push(w);
            }
        }
        assert_eq!(t.column_widths(), expected.as_slice());
    }

    assert_eq!(t.column_widths(), &[5, 4, 1]);
    assert_eq!(t.column_count(), 3);
}

#[test]
fn test_wider_row_extends_columns() {
    let mut t = table_of(&[&["a"]]);
    assert_eq!(t.column_widths(), &[1]);

    t.write_cell("bb");
    t.write_cell("ccc");
    t.write_cell("");
    t.commit_row();

    assert_eq!(t.column_widths(), &[2, 3, 0]);
}

#[test]
fn test_pending_row_is_not_visible_until_commit() {
    let mut t = table_of(&[&["a"]]);
    t.write_cell("very wide cell");
    t.write_cell("extra");

    assert_eq!(t.rows(), 1);
    assert_eq!(t.column_widths(), &[1]);
    assert_eq!(t.pending_cells().len(), 2);
    assert_eq!(t.render(), "a\n");

    t.commit_row();
    assert_eq!(t.rows(), 2);
    assert!(t.pending_cells().is_empty());
    assert_eq!(t.column_widths(), &[14, 5]);
}

#[test]
fn test_short_rows_omit_missing_cells() {
    let mut t = table_of(&[&["a", "b", "c"], &["dd"], &["x"]]);
    t.set_spacing("|");

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["a |b|c", "dd", "x "]);
    assert!(lines[1].len() < lines[0].len());
}

#[test]
fn test_no_trailing_padding_on_last_column() {
    let mut t = table_of(&[&["a", "b"], &["a", "bbbbbb"]]);
    t.set_spacing("  ");

    for line in t.render().lines() {
        assert!(!line.ends_with(' '), "trailing space in {line:?}");
    }
}

#[test]
fn test_empty_table() {
    let t = Table::new();

    assert_eq!(t.rows(), 0);
    assert_eq!(t.widest_cell_width(), 0);
    assert_eq!(t.width(), 0);
    assert_eq!(t.render(), "");
}

#[test]
fn test_empty_row_renders_prefix_only() {
    let mut t = Table::new();
    t.set_prefix("# ");
    t.commit_row();

    assert_eq!(t.rows(), 1);
    assert_eq!(t.column_count(), 0);
    assert_eq!(t.width(), 2);
    assert_eq!(t.render(), "# \n");
}

#[test]
fn test_width_composition() {
    let mut t = table_of(&[&["abc", "de"], &["a", "d", "f"]]);
    t.set_prefix("> ");
    t.set_spacing(" | ");

    // 3 + 2 + 1 columns, 2 prefix, 2 gaps of 3
    assert_eq!(t.width(), 6 + 2 + 3 * 2);
    assert_eq!(t.widest_cell_width(), 3);
}

#[test]
fn test_width_single_column_has_no_spacing() {
    let mut t = table_of(&[&["hello"]]);
    t.set_spacing("    ");

    assert_eq!(t.width(), 5);
}

#[test]
fn test_width_matches_longest_rendered_line() {
    let mut t = table_of(&[&["id", "name", "state"], &["1", "alice", "on"]]);
    t.set_prefix("  ");
    t.set_spacing(" ");

    // last column is not padded, so the full-width line is the one whose
    // last cell is the widest
    let longest = t.render().lines().map(|l| l.chars().count()).max().unwrap();
    assert_eq!(longest, t.width());
}

#[test]
fn test_width_counts_code_points() {
    let mut t = table_of(&[&["héllo", "日本"], &["x", "y"]]);
    t.set_prefix("→ ");

    assert_eq!(t.column_widths(), &[5, 2]);
    assert_eq!(t.width(), 5 + 2 + 2);
    assert_eq!(t.render(), "→ héllo日本\n→ x    y\n");
}

#[test]
fn test_explicit_width_controls_padding() {
    let mut t = Table::new();
    t.set_spacing(" ");
    t.write_cell_width("\x1b[31mok\x1b[0m", 2);
    t.write_cell("end");
    t.commit_row();
    t.write_cell("fail");
    t.write_cell("end");
    t.commit_row();

    assert_eq!(t.column_widths(), &[4, 3]);
    assert_eq!(t.render(), "\x1b[31mok\x1b[0m   end\nfail end\n");
}

#[test]
fn test_write_cell_color_measures_unstyled_text() {
    let mut t = Table::new();
    t.set_spacing("  ");
    t.write_cell_color("up", &Colour::Green);
    t.write_cell("x");
    t.commit_row();
    t.write_cell("down");
    t.write_cell("y");
    t.commit_row();

    assert_eq!(t.column_widths(), &[4, 1]);

    let out = t.render();
    assert!(out.contains(&Colour::Green.paint("up").to_string()));
    assert_eq!(strip_ansi(&out), "up    x\ndown  y\n");
}

#[test]
fn test_colored_row_commits_and_pads_visibly() {
    let mut t = Table::new();
    t.set_spacing("  ");
    t.write_colored_row(&Colour::Red.bold(), ["id", "name", "state"]);
    for row in [["1", "alice", "running"], ["22", "bob", "stopped"]] {
        for cell in row {
            t.write_cell(cell);
        }
        t.commit_row();
    }

    assert_eq!(t.rows(), 3);
    assert_eq!(t.column_widths(), &[2, 5, 7]);

    let out = t.render();
    let visible = strip_ansi(&out);
    assert_eq!(
        visible,
        "id  name   state\n1   alice  running\n22  bob    stopped\n"
    );

    // every non-final column, padding included, is exactly its tracked width
    for line in visible.lines() {
        assert_eq!(&line[2..4], "  ");
    }
}

#[test]
fn test_closure_styler() {
    let mut t = Table::new();
    t.set_spacing(" ");
    let brackets = |s: &str| format!("[{s}]");
    t.write_colored_row(&brackets, ["a", "bc"]);
    t.write_cell("xyz");
    t.write_cell("q");
    t.commit_row();

    // widths ignore the brackets added by the styler
    assert_eq!(t.column_widths(), &[3, 2]);
    assert_eq!(t.render(), "[a]   [bc]\nxyz q\n");
}

#[test]
fn test_plain_styler_is_identity() {
    let mut t = Table::new();
    t.write_colored_row(&Plain, vec!["a".to_string(), "b".to_string()]);

    assert_eq!(t.render(), "ab\n");
    assert_eq!(t.column_widths(), &[1, 1]);
}

#[test]
fn test_render_is_idempotent() {
    let mut t = table_of(&[&["a", "bb"], &["ccc", "d"], &["e"]]);
    t.set_prefix("- ");
    t.set_spacing(" : ");

    let first = t.render();
    let second = t.render();
    assert_eq!(first, second);
    assert_eq!(format!("{t}"), first);

    let mut a = Vec::new();
    let mut b = Vec::new();
    t.fprintln(&mut a).unwrap();
    t.fprintln(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_prefix_and_spacing_can_change_before_render() {
    let mut t = table_of(&[&["a", "b"]]);
    t.set_spacing(",");
    assert_eq!(t.render(), "a,b\n");

    t.set_spacing("");
    t.set_prefix("");
    assert_eq!(t.render(), "ab\n");
    assert_eq!(t.prefix(), "");
    assert_eq!(t.spacing(), "");
}

#[test]
fn test_cell_constructors() {
    let c = Cell::new("héllo");
    assert_eq!(c.text(), "héllo");
    assert_eq!(c.width(), 5);

    let c = Cell::with_width("\x1b[1mB\x1b[0m", 1);
    assert_eq!(c.width(), 1);
}

struct CountingWriter {
    writes: usize,
    buf: Vec<u8>,
}

impl Write for CountingWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_fprintln_uses_a_single_write() {
    let t = table_of(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
    let mut w = CountingWriter {
        writes: 0,
        buf: Vec::new(),
    };

    t.fprintln(&mut w).unwrap();
    assert_eq!(w.writes, 1);
    assert_eq!(w.buf, b"ab\ncd\nef\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_fprintln_propagates_io_errors() {
    let t = table_of(&[&["a"]]);
    let err = t.fprintln(&mut BrokenPipe).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_fprintln_on_dyn_writer() {
    let t = table_of(&[&["a", "b"]]);
    let mut buf = Vec::new();
    let w: &mut dyn Write = &mut buf;
    t.fprintln(w).unwrap();
    assert_eq!(buf, b"ab\n");
}
