//! Interrupt handling for interactive mode

/// End the process cleanly when the user presses Ctrl-C.
///
/// Spawns a listener thread that prints a newline, so the shell prompt starts
/// on a fresh line, and exits with status 0. Stdout must not be held locked
/// by the caller while waiting for input.
#[cfg(unix)]
pub fn exit_on_interrupt() -> anyhow::Result<()> {
    use std::io::Write;
    use std::thread;

    use anyhow::Context;
    use signal_hook::{consts::SIGINT, iterator::Signals};

    let mut signals = Signals::new([SIGINT]).context("Failed to register SIGINT handler.")?;

    thread::spawn(move || {
        if signals.forever().next().is_some() {
            tracing::debug!("interrupted, leaving interactive mode");
            let mut stdout = std::io::stdout();
            let _ = writeln!(stdout);
            let _ = stdout.flush();
            std::process::exit(0);
        }
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn exit_on_interrupt() -> anyhow::Result<()> {
    // The default Ctrl-C behavior terminates the process.
    Ok(())
}
