// Line-based input box for terminals

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

use super::input::{InputBox, InputBoxOptions, InputError};

/// Typing this instead of a value cancels the prompt, like EOF (Ctrl-D)
pub const CANCEL_COMMAND: &str = ":q";

/// Reads whole lines, so values are echoed even when `is_secret` is set
pub struct TerminalInputBox<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl TerminalInputBox<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Input box on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
            writer: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl<R, W> TerminalInputBox<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.writer.into_inner())
    }
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[async_trait]
impl<R, W> InputBox for TerminalInputBox<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show(&self, options: InputBoxOptions<'_>) -> Result<Option<String>, InputError> {
        let mut reader = self.reader.lock().await;
        let mut writer = self.writer.lock().await;

        if let Some(title) = options.title {
            writer.write_all(format!("{}\n", title).as_bytes()).await?;
        }

        let label = if options.placeholder.is_empty() {
            format!("{}: ", options.prompt)
        } else {
            format!("{} [{}]: ", options.prompt, options.placeholder)
        };

        loop {
            writer.write_all(label.as_bytes()).await?;
            writer.flush().await?;

            let value = match read_line(&mut *reader).await? {
                Some(value) if value.trim() != CANCEL_COMMAND => value,
                _ => {
                    debug!("Input cancelled");
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                    return Ok(None);
                }
            };

            match options.validate(&value) {
                Some(message) => {
                    debug!("Input rejected: {}", message);
                    writer.write_all(format!("  {}\n", message).as_bytes()).await?;
                }
                None => return Ok(Some(value)),
            }
        }
    }
}
