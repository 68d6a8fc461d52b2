use crate::app::render;
use crate::core::coordinator::{RequestCoordinator, SubmitOutcome};
use crate::core::form::SpecificityForm;
use crate::core::{Calculator, Field, OutputFormat};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  <field> <value>      set a count (species, genera, families, orders, classes; or s/g/f/o/c)
  set <field> <value>  same as above
  show                 print the current counts and whether they are valid
  submit               calculate the host specificity of the current counts
  history              list results, most recent first
  export csv|json      print the results in a machine-readable format
  reset                set every count back to 1
  help                 show this message
  quit                 leave the form
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Field, String),
    Show,
    Submit,
    History,
    Export(OutputFormat),
    Reset,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "show" => Ok(Command::Show),
            "submit" | "calculate" => Ok(Command::Submit),
            "history" | "results" => Ok(Command::History),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "export" => match rest.as_slice() {
                [format] => format.parse().map(Command::Export),
                _ => Err("usage: export csv|json".to_string()),
            },
            "set" => match rest.as_slice() {
                [field, value] => Ok(Command::Set(field.parse()?, value.to_string())),
                _ => Err("usage: set <field> <value>".to_string()),
            },
            other => {
                let field: Field = other
                    .parse()
                    .map_err(|_| format!("unknown command '{}'; type 'help'", other))?;
                match rest.as_slice() {
                    [value] => Ok(Command::Set(field, value.to_string())),
                    _ => Err(format!("usage: {} <value>", field)),
                }
            }
        }
    }
}

/// Line-oriented rendition of the form: edit counts, submit, browse results.
pub struct FormSession<C: Calculator> {
    form: SpecificityForm,
    coordinator: RequestCoordinator<C>,
}

impl<C: Calculator> FormSession<C> {
    pub fn new(calculator: C) -> Self {
        Self {
            form: SpecificityForm::new(),
            coordinator: RequestCoordinator::new(calculator),
        }
    }

    pub fn form(&self) -> &SpecificityForm {
        &self.form
    }

    pub fn coordinator(&self) -> &RequestCoordinator<C> {
        &self.coordinator
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        writer
            .write_all(b"Host Specificity Index. Type 'help' for commands.\n")
            .await?;
        self.write_status(writer).await?;

        loop {
            writer.write_all(b"> ").await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, writer).await?,
                Err(message) => {
                    writer.write_all(format!("{}\n", message).as_bytes()).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }

    pub async fn execute<W: AsyncWrite + Unpin>(
        &mut self,
        command: Command,
        writer: &mut W,
    ) -> Result<()> {
        match command {
            Command::Set(field, text) => match self.form.set_text(field, &text) {
                Ok(stored) => {
                    writer
                        .write_all(format!("{} = {}\n", field, stored).as_bytes())
                        .await?;
                    self.write_indicator(writer).await?;
                }
                Err(message) => {
                    writer.write_all(format!("{}\n", message).as_bytes()).await?;
                }
            },
            Command::Show => self.write_status(writer).await?,
            Command::Submit => self.submit(writer).await?,
            Command::History => {
                let results = self.coordinator.history().await;
                if results.is_empty() {
                    writer.write_all(b"No results yet\n").await?;
                } else {
                    let mut buf = Vec::new();
                    render::write_table(&mut buf, &results)?;
                    writer.write_all(&buf).await?;
                }
            }
            Command::Export(format) => {
                let results = self.coordinator.history().await;
                let mut buf = Vec::new();
                render::write_results(&mut buf, &results, format)?;
                writer.write_all(&buf).await?;
            }
            Command::Reset => {
                self.form.reset();
                self.write_status(writer).await?;
            }
            Command::Help => writer.write_all(HELP.as_bytes()).await?,
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    async fn submit<W: AsyncWrite + Unpin>(&mut self, writer: &mut W) -> Result<()> {
        if !self.form.is_valid() {
            self.write_indicator(writer).await?;
            writer.write_all(b"Submission blocked\n").await?;
            return Ok(());
        }

        writer.write_all(b"Calculating...\n").await?;
        writer.flush().await?;

        match self.coordinator.submit(self.form.input()).await {
            Ok(SubmitOutcome::Recorded(result)) => {
                let mut buf = Vec::new();
                render::write_single(&mut buf, &result, OutputFormat::Table)?;
                writer.write_all(&buf).await?;
            }
            Ok(SubmitOutcome::Blocked) => {
                self.write_indicator(writer).await?;
            }
            Err(e) => {
                tracing::warn!("Submission failed: {}", e);
                let message = format!(
                    "Error: {}\nHint: {}\n",
                    e.user_friendly_message(),
                    e.recovery_suggestion()
                );
                writer.write_all(message.as_bytes()).await?;
            }
        }
        Ok(())
    }

    async fn write_status<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<()> {
        let input = self.form.input();
        let mut text = String::new();
        for field in Field::ALL {
            text.push_str(&format!(
                "{:<9} {:>4}  (1-{})\n",
                format!("{}:", field.label()),
                input.get(field),
                field.max()
            ));
        }
        writer.write_all(text.as_bytes()).await?;
        self.write_indicator(writer).await
    }

    async fn write_indicator<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<()> {
        let line = match self.form.indicator() {
            Some(indicator) => format!("{}\n", indicator),
            None => "Input valid\n".to_string(),
        };
        writer.write_all(line.as_bytes()).await?;
        Ok(())
    }
}
