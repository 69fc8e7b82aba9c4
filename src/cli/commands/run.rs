//! Run command - Execute a command, tee its output and time it

use anyhow::Context;

use super::RunArgs;
use crate::config::Config;
use crate::cli::exit_codes;
use crate::term::{SgrCode, StyledOutput, StyledString, LINE_ENDING};
use crate::timing::Stopwatch;
use crate::utils::command::{run_command, ProcessOutput, RunOptions};

pub async fn execute(args: RunArgs, config: &Config) -> anyhow::Result<i32> {
    let (program, program_args) = args
        .command
        .split_first()
        .context("No command given")?;

    let options = RunOptions {
        env: args.env,
        current_dir: args.cwd,
        quiet: args.quiet,
        ..RunOptions::default()
    };

    let mut stopwatch = Stopwatch::new();
    let mut outputs = Vec::new();
    for attempt in 1..=args.repeat {
        tracing::info!("Run {}/{} of '{}'", attempt, args.repeat, program);
        let lap = stopwatch.measure();
        let output = run_command(program, program_args, &options)
            .await
            .with_context(|| format!("Failed to run '{}'", program))?;
        drop(lap);
        outputs.push(output);
    }

    if args.json {
        let json = if outputs.len() == 1 {
            serde_json::to_string_pretty(&outputs[0])
        } else {
            serde_json::to_string_pretty(&outputs)
        }
        .context("Failed to serialize command output")?;
        println!("{}", json);
    }

    let last = outputs.last().context("No run recorded")?;
    config
        .term
        .apply_output(summary(last, &stopwatch))
        .print("", LINE_ENDING)?;

    Ok(exit_codes::from_child(last.exit_code))
}

/// One-line report, e.g. `Finished in 1.23s (exit code 0)`
fn summary(last: &ProcessOutput, stopwatch: &Stopwatch) -> StyledOutput {
    let (status, colour) = if last.success() {
        ("Finished", SgrCode::Green)
    } else {
        ("Failed", SgrCode::Red)
    };

    let mut parts = vec![StyledString::new(status).with_codes([SgrCode::Bold, colour])];
    match (stopwatch.len(), stopwatch.min(), stopwatch.average(), stopwatch.max()) {
        (runs, Ok(min), Ok(average), Ok(max)) if runs > 1 => {
            parts.push(StyledString::new(format!(" {} runs in ", runs)));
            parts.push(StyledString::new(stopwatch.elapsed().to_string()).with_codes([SgrCode::Cyan]));
            parts.push(StyledString::new(format!(
                " (min {}, avg {}, max {})",
                min, average, max
            )));
        }
        _ => {
            parts.push(StyledString::new(" in "));
            parts.push(StyledString::new(stopwatch.elapsed().to_string()).with_codes([SgrCode::Cyan]));
        }
    }
    parts.push(StyledString::new(format!(" (exit code {})", last.exit_code)));

    StyledOutput::new(parts).with_is_error(true)
}
