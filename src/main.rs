mod cli;

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::Path;
use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::Args;
use password_stretcher::Mangler;

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{}", format!("[!] {e:#}").red());
            exit(1);
        }
    }
}

fn run(args: &Args) -> Result<i32> {
    // print help if there's nothing to read
    if args.wordlist.is_none() && io::stdin().is_terminal() {
        Args::command().print_help().ok();
        eprintln!("\n\n{}", "[!] Please specify wordlist or pipe to STDIN".red());
        return Ok(2);
    }

    let words = read_words(args.wordlist.as_deref())?;
    let mangler = Mangler::new(words, args.mangle_config())?;

    let estimated = mangler.estimated_len();
    let estimated_bytes = (mangler.average_word_length() + 1.0) * estimated as f64;
    eprintln!(
        "{}",
        format!(
            "[+] Estimated output: {} words ({})",
            group_digits(estimated),
            bytes_to_human(estimated_bytes)
        )
        .green()
    );
    thread::sleep(Duration::from_secs(2));

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = interrupted.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .ok();
    }

    let show_progress = !io::stdout().is_terminal();
    let mut writer = BufWriter::new(io::stdout().lock());
    let mut written: u64 = 0;

    for word in mangler {
        if interrupted.load(Ordering::SeqCst) {
            eprintln!("\n{}", "[!] Program interrupted.".red());
            return Ok(2);
        }

        let result = writer.write_all(&word).and_then(|()| writer.write_all(b"\n"));
        if let Err(e) = result {
            if e.kind() == io::ErrorKind::BrokenPipe {
                // consumer went away; not our problem
                return Ok(0);
            }
            return Err(e).context("failed writing to stdout");
        }

        if show_progress && written % 1000 == 0 {
            eprint!("\r[+] {} words written", group_digits(written as u128));
        }
        written += 1;
    }

    if let Err(e) = writer.flush() {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e).context("failed writing to stdout");
        }
    }
    if show_progress {
        eprintln!("\r[+] {} words written", group_digits(written as u128));
    }

    Ok(0)
}

/// Read newline-delimited words from a file or STDIN. Empty records are
/// skipped; a trailing carriage return is stripped from each record.
fn read_words(path: Option<&Path>) -> Result<Vec<Vec<u8>>> {
    let raw = match path {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read wordlist {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read STDIN")?;
            buf
        }
    };

    Ok(raw
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_vec())
        .collect())
}

fn group_digits(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn bytes_to_human(bytes: f64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    let mut value = bytes.max(0.0);
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{:.0} {}", value, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
