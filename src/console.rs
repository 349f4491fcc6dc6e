use std::io::{self, BufRead, IsTerminal, Write};

pub const PROMPT: &str = "Press Enter to exit...";

/// Holds the console open until Enter. No-op without a terminal on stdin.
pub fn wait_for_ack(enabled: bool) {
    let stdin = io::stdin();
    if !enabled || !stdin.is_terminal() {
        return;
    }

    wait_on(&mut stdin.lock(), &mut io::stderr());
}

pub fn wait_on<R: BufRead, W: Write>(input: &mut R, out: &mut W) {
    let _ = write!(out, "{PROMPT}");
    let _ = out.flush();

    let mut line = String::new();
    let _ = input.read_line(&mut line);
}
