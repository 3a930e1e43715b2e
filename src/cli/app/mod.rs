//! App command - interactive Input and Results screens

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Notify;
use tracing::debug;

use super::screens::{
    render_back_prompt, render_field_prompt, render_input_screen, render_results_screen,
    render_submitting,
};
use super::{load_config, submit_interruptible, watch_interrupts, ConnectionArgs};
use crate::domain::{
    FeatureName, PredictionProvider, PredictionResult, RawFeatureInput, SubmissionTracker,
};
use crate::infrastructure::services::SubmissionService;

const QUIT: &str = "q";

/// Run the interactive client on stdin/stdout
pub async fn run(args: ConnectionArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let service = crate::create_submission_service(&config)?;
    let interrupts = watch_interrupts();

    let mut navigator = Navigator::new(service);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    navigator.run(stdin, &mut stdout, &interrupts).await
}

/// The screen currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Input,
    /// Owns the result until the user navigates back
    Results(PredictionResult),
}

/// Moves between the Input and Results screens
#[derive(Debug)]
pub struct Navigator<P: PredictionProvider> {
    service: SubmissionService<P>,
    tracker: SubmissionTracker,
    input: RawFeatureInput,
}

impl<P: PredictionProvider> Navigator<P> {
    pub fn new(service: SubmissionService<P>) -> Self {
        Self {
            service,
            tracker: SubmissionTracker::new(),
            input: RawFeatureInput::default(),
        }
    }

    pub fn tracker(&self) -> &SubmissionTracker {
        &self.tracker
    }

    /// Drive the screens until the user quits or input ends
    pub async fn run<R, W>(
        &mut self,
        reader: R,
        writer: &mut W,
        interrupts: &Notify,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.lines();
        let mut screen = Screen::Input;

        loop {
            screen = match screen {
                Screen::Input => match self.input_screen(&mut lines, writer, interrupts).await? {
                    Some(result) => Screen::Results(result),
                    None => break,
                },
                Screen::Results(result) => {
                    write!(writer, "{}", render_results_screen(&result))?;
                    write!(writer, "{}", render_back_prompt())?;
                    writer.flush()?;

                    match read_line(&mut lines, interrupts).await? {
                        Some(line) if line.trim() != QUIT => Screen::Input,
                        _ => break,
                    }
                }
            };
        }

        debug!("Leaving interactive client");
        Ok(())
    }

    /// Collect the three fields and submit until a prediction arrives
    ///
    /// Returns `None` when the user quits.
    async fn input_screen<R, W>(
        &mut self,
        lines: &mut Lines<R>,
        writer: &mut W,
        interrupts: &Notify,
    ) -> anyhow::Result<Option<PredictionResult>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        loop {
            write!(writer, "{}", render_input_screen(&self.tracker))?;

            for name in FeatureName::ALL {
                write!(writer, "{}", render_field_prompt(name))?;
                writer.flush()?;

                match read_line(lines, interrupts).await? {
                    Some(line) if line.trim() != QUIT => self.input.set(name, line),
                    _ => return Ok(None),
                }
            }

            write!(writer, "{}", render_submitting())?;
            writer.flush()?;

            let outcome =
                submit_interruptible(&self.service, &mut self.tracker, &self.input, interrupts)
                    .await;

            match outcome {
                Ok(result) => {
                    self.input.clear();
                    return Ok(Some(result));
                }
                // The tracker holds the message; the header shows it on the next pass
                Err(e) => debug!(error = %e, "Submission failed"),
            }
        }
    }
}

async fn read_line<R>(lines: &mut Lines<R>, interrupts: &Notify) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    tokio::select! {
        line = lines.next_line() => Ok(line?),
        _ = interrupts.notified() => Ok(None),
    }
}
