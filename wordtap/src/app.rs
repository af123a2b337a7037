use std::io::Write;

use dictionary::{DictionaryError, Lookup, Word};
use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, StreamExt},
    FutureExt,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render::render;
use crate::utilities::{is_quit_command, prompt, PROMPT};
use crate::widget::{LookupId, LookupRequest, LookupWidget, Resolution};

type LookupOutcome = (LookupId, Result<Word, DictionaryError>);

/// Runs the interactive loop until the input closes or a quit command is
/// read. Lookups run concurrently with reading input, finished lookups are
/// applied before the next line is taken, and only the latest submitted
/// lookup may update the widget.
pub async fn run<L, R, W>(
    lookup: &L,
    input: R,
    output: &mut W,
    initial_word: Option<String>,
) -> anyhow::Result<LookupWidget>
where
    L: Lookup + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut widget = LookupWidget::new();
    let mut in_flight: FuturesUnordered<BoxFuture<'_, LookupOutcome>> = FuturesUnordered::new();
    let mut lines = input.lines();
    let mut input_open = true;

    if let Some(word) = initial_word {
        widget.set_word(word.trim());
        if let Some(request) = widget.submit() {
            in_flight.push(start_lookup(lookup, request));
        }
    }
    draw(output, &widget)?;

    loop {
        if !input_open && in_flight.is_empty() {
            break;
        }
        tokio::select! {
            biased;

            Some((id, result)) = in_flight.next(), if !in_flight.is_empty() => {
                match &result {
                    Err(DictionaryError::NotFound(not_found)) => tracing::info!(
                        word = not_found.word(),
                        status = %not_found.status(),
                        "no definition found"
                    ),
                    Err(error) => tracing::warn!(%error, "lookup failed"),
                    Ok(_) => {}
                }
                match widget.resolve(id, result) {
                    Resolution::Applied => draw(output, &widget)?,
                    Resolution::Stale => tracing::debug!(?id, "dropping stale lookup result"),
                }
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!(pending = widget.is_pending(), "input closed");
                    input_open = false;
                    continue;
                };
                let line = line.trim();
                if is_quit_command(line) {
                    break;
                }
                widget.set_word(line);
                match widget.submit() {
                    Some(request) => {
                        in_flight.push(start_lookup(lookup, request));
                        draw(output, &widget)?;
                    }
                    None => prompt(output, PROMPT)?,
                }
            }
        }
    }
    writeln!(output)?;
    Ok(widget)
}

fn start_lookup<L>(lookup: &L, request: LookupRequest) -> BoxFuture<'_, LookupOutcome>
where
    L: Lookup + ?Sized,
{
    tracing::info!(word = %request.word, "looking up");
    async move {
        let result = lookup.lookup(&request.word).await;
        (request.id, result)
    }
    .boxed()
}

fn draw<W: Write>(output: &mut W, widget: &LookupWidget) -> std::io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", render(widget))?;
    prompt(output, PROMPT)
}
