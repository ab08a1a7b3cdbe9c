use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::{fill_table, read_records};
use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::parse_style;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        format,
        delimiter,
        prefix,
        spacing,
        header,
        header_style,
        rule,
        count,
    } = cmd
    {
        let delimiter = match delimiter {
            Some(c) if c.is_ascii() => *c as u8,
            Some(c) => {
                return Err(AppError::InvalidInput(format!(
                    "delimiter must be an ASCII character, got '{c}'"
                )));
            }
            None => cfg.delimiter_byte()?,
        };
        let style = parse_style(header_style.as_deref().unwrap_or(&cfg.header_style))?;

        let records = read_records(open_input(file.as_deref())?, *format, delimiter)?;

        let mut table = Table::new();
        table.set_prefix(prefix.as_deref().unwrap_or(&cfg.prefix));
        table.set_spacing(spacing.as_deref().unwrap_or(&cfg.spacing));
        fill_table(&mut table, records, *header, &style);

        let rule_line = if *rule || cfg.show_rule {
            let sep = cfg.separator()?;
            Some(std::iter::repeat_n(sep, table.width()).collect::<String>())
        } else {
            None
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Some(line) = &rule_line {
            writeln!(out, "{line}")?;
        }
        table.fprintln(&mut out)?;
        if let Some(line) = &rule_line {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        drop(out);

        if *count {
            info(format!("{} rows ({})", table.rows(), format.as_str()));
        }
    }
    Ok(())
}

fn open_input(file: Option<&str>) -> AppResult<Box<dyn Read>> {
    match file {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let path = crate::utils::path::expand_tilde(path);
            let f = File::open(&path).map_err(|e| {
                AppError::InvalidInput(format!("cannot open '{}': {e}", path.display()))
            })?;
            Ok(Box::new(BufReader::new(f)))
        }
    }
}
