//! Event loop that owns the board state.
//!
//! Intents arrive on a channel; remote requests run as spawned tasks whose
//! completions come back on a second channel. Only the loop touches the
//! store, so completions are applied one at a time in arrival order.

use std::io::Write;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::board::{BoardController, Completion, Dispatch, Intent, PendingRequest};
use crate::application::error::AppError;
use crate::application::store::BoardStore;
use crate::infra::error::InfraError;
use crate::presentation::views::{board_view, render_board};

const SOURCE: &str = "runtime::EventLoop";

pub struct EventLoop<W> {
    controller: BoardController,
    store: BoardStore,
    out: W,
}

impl<W: Write> EventLoop<W> {
    pub fn new(controller: BoardController, out: W) -> Self {
        Self {
            controller,
            store: BoardStore::new(),
            out,
        }
    }

    #[must_use]
    pub fn with_store(self, store: BoardStore) -> Self {
        Self { store, ..self }
    }

    /// Run until `Quit`, or until the intent channel closes and every
    /// outstanding request has settled. Returns the final store and the sink.
    pub async fn run(self, mut intents: mpsc::Receiver<Intent>) -> Result<(BoardStore, W), AppError> {
        let (completions_tx, mut completions) = mpsc::unbounded_channel();
        let mut board = Board {
            controller: self.controller,
            store: self.store,
            out: self.out,
            completions: completions_tx,
            in_flight: 0,
        };
        board.render()?;

        let mut input_open = true;
        loop {
            if !input_open && board.in_flight == 0 {
                break;
            }

            tokio::select! {
                Some(completion) = completions.recv() => {
                    board.settle(completion)?;
                }
                intent = intents.recv(), if input_open => match intent {
                    Some(Intent::Quit) => {
                        info!(target = SOURCE, abandoned = board.in_flight, "quit requested");
                        break;
                    }
                    Some(intent) => board.handle(intent)?,
                    None => {
                        debug!(target = SOURCE, pending = board.in_flight, "input closed");
                        input_open = false;
                    }
                },
            }
        }

        Ok((board.store, board.out))
    }
}

struct Board<W> {
    controller: BoardController,
    store: BoardStore,
    out: W,
    completions: mpsc::UnboundedSender<Completion>,
    in_flight: usize,
}

impl<W: Write> Board<W> {
    fn handle(&mut self, intent: Intent) -> Result<(), AppError> {
        match self.controller.handle(&mut self.store, intent) {
            Dispatch::Applied | Dispatch::Render => self.render(),
            Dispatch::Ignored | Dispatch::Quit => Ok(()),
            Dispatch::Request(request) => {
                self.spawn(request);
                Ok(())
            }
        }
    }

    fn spawn(&mut self, request: PendingRequest) {
        let controller = self.controller.clone();
        let completions = self.completions.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let completion = controller.perform(request).await;
            if completions.send(completion).is_err() {
                debug!(target = SOURCE, "board closed before request completed");
            }
        });
    }

    fn settle(&mut self, completion: Completion) -> Result<(), AppError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.controller.apply(&mut self.store, completion) {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        let rendered = render_board(&board_view(&self.store))?;
        writeln!(self.out, "{rendered}").map_err(InfraError::from)?;
        self.out.flush().map_err(InfraError::from)?;
        Ok(())
    }
}
