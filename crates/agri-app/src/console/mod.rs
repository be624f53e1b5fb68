//! Line-oriented console front end.
//!
//! Reads commands from stdin and renders session and dashboard snapshots
//! as plain text. All state lives in the dispatcher and fetcher. Answers
//! are printed by a background task, so the prompt keeps accepting
//! commands while a question is in flight.

mod command;
mod render;


use std::sync::{Arc, Mutex, PoisonError};

use agri_advisor::{DashboardFetcher, InflightQuery, QueryDispatcher};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use command::Command;

pub struct Console {
    dispatcher: Arc<QueryDispatcher>,
    dashboard: Option<DashboardFetcher>,
    /// Prints the answer to the question in flight, if any.
    answer_task: Mutex<Option<JoinHandle<()>>>,
}

impl Console {
    pub fn new(dispatcher: QueryDispatcher, dashboard: Option<DashboardFetcher>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            dashboard,
            answer_task: Mutex::new(None),
        }
    }

    /// Run until `/quit` or end of input.
    pub async fn run(&self) -> std::io::Result<()> {
        println!("{}", render::history(&self.dispatcher.session()));
        println!("(type /help for commands)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle(Command::parse(&line)).await {
                return Ok(());
            }
        }

        // Piped input ends before the last answer arrives.
        if let Some(task) = self.take_answer_task() {
            let _ = task.await;
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the console should exit.
    async fn handle(&self, command: Command) -> bool {
        match command {
            Command::Ask(question) => self.ask(&question),
            Command::History => println!("{}", render::history(&self.dispatcher.session())),
            Command::Dashboard => self.show_dashboard().await,
            Command::Good => self.rate(true, None).await,
            Command::Bad(correction) => self.rate(false, correction).await,
            Command::Help => println!("{}", command::HELP),
            Command::Quit => return false,
            Command::Empty => {}
            Command::Unknown(name) => println!("Unknown command /{name}. Try /help."),
        }
        true
    }

    fn ask(&self, question: &str) {
        match self.dispatcher.submit(question) {
            Ok(inflight) => {
                println!("...");
                let task = tokio::spawn(print_answer(Arc::clone(&self.dispatcher), inflight));
                *self
                    .answer_task
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(task);
            }
            Err(e) => println!("Not sent: {e}."),
        }
    }

    fn take_answer_task(&self) -> Option<JoinHandle<()>> {
        self.answer_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    async fn show_dashboard(&self) {
        let Some(fetcher) = &self.dashboard else {
            println!("Dashboard is disabled.");
            return;
        };
        fetcher.refresh().await;
        println!("{}", render::dashboard(&fetcher.snapshot()));
    }

    async fn rate(&self, is_satisfied: bool, correction: Option<String>) {
        let Some(question) = self.dispatcher.last_question() else {
            println!("Nothing to rate yet.");
            return;
        };
        match self
            .dispatcher
            .send_feedback(question, is_satisfied, correction)
            .await
        {
            Ok(response) => println!("{}", response.message),
            Err(e) => {
                tracing::warn!("feedback failed: {e}");
                println!("Feedback could not be sent.");
            }
        }
    }
}

async fn print_answer(dispatcher: Arc<QueryDispatcher>, inflight: InflightQuery) {
    match inflight.resolved().await {
        Some(turn) => println!("{}", render::turn(&turn)),
        // The task died; the session already holds the offline notice.
        None => {
            if let Some(turn) = dispatcher.session().last_turn() {
                println!("{}", render::turn(turn));
            }
        }
    }
}
