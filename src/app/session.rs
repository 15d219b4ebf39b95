use crate::app::commands::{Command, HELP};
use crate::config::OutputFormat;
use crate::core::expansion::ExpansionState;
use crate::core::render::CommentView;
use crate::core::store::CommentStore;
use crate::core::view::domains_of;
use crate::core::{CommentSource, FetchStatus};
use crate::domain::model::FilterCriteria;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A single viewer session. Owns the data store, the filter criteria and the
/// expansion flags; nothing is shared with other sessions.
pub struct Session<S: CommentSource> {
    source: S,
    store: CommentStore,
    criteria: FilterCriteria,
    expansion: ExpansionState,
}

impl<S: CommentSource> Session<S> {
    pub fn new(source: S, criteria: FilterCriteria) -> Self {
        Self {
            source,
            store: CommentStore::new(),
            criteria,
            expansion: ExpansionState::new(),
        }
    }

    /// Dispatches the initial fetch if the store is still idle.
    pub async fn start(&mut self) -> FetchStatus {
        self.store.fetch(&self.source).await;
        self.store.status()
    }

    pub fn store(&self) -> &CommentStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_domain_filter(&mut self, domain: impl Into<String>) {
        self.criteria.domain_filter = domain.into();
    }

    pub fn toggle_domain(&mut self, domain: &str) -> bool {
        self.expansion.toggle_domain(domain)
    }

    pub fn toggle_comment(&mut self, id: u64) -> bool {
        self.expansion.toggle_comment(id)
    }

    pub fn domains(&self) -> Vec<String> {
        domains_of(self.store.items())
    }

    pub fn view(&self) -> CommentView {
        CommentView::build(self.store.state(), &self.criteria, &self.expansion)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let view = self.view();
        match format {
            OutputFormat::Text => Ok(view.to_text()),
            OutputFormat::Json => view.to_json(),
        }
    }

    /// Applies one command and returns what should be printed, or `None` to
    /// end the session.
    pub fn apply(&mut self, command: Command, format: OutputFormat) -> Result<Option<String>> {
        tracing::debug!("Applying command: {:?}", command);

        match command {
            Command::Search(query) => self.set_query(query),
            Command::Clear => self.set_query(""),
            Command::Domain(domain) => self.set_domain_filter(domain),
            Command::ToggleDomain(domain) => {
                self.toggle_domain(&domain);
            }
            Command::ToggleComment(id) => {
                self.toggle_comment(id);
            }
            Command::Show => {}
            Command::Domains => return Ok(Some(self.domains().join("\n"))),
            Command::Help => return Ok(Some(HELP.to_string())),
            Command::Quit => return Ok(None),
        }

        self.render(format).map(Some)
    }

    /// Reads commands line by line until `quit` or end of input. Bad commands
    /// are reported and the session carries on.
    pub async fn run_interactive<R, W>(
        &mut self,
        input: R,
        out: &mut W,
        format: OutputFormat,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write!(out, "> ")?;
        out.flush()?;

        while let Some(line) = lines.next_line().await? {
            let outcome = line
                .parse::<Command>()
                .and_then(|command| self.apply(command, format));

            match outcome {
                Ok(Some(output)) => writeln!(out, "{}", output)?,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Command failed: {}", e);
                    writeln!(out, "❌ {}", e.user_friendly_message())?;
                    writeln!(out, "💡 {}", e.recovery_suggestion())?;
                }
            }

            write!(out, "> ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}
