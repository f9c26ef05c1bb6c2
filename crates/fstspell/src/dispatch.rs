// Bridges blocking dictionary calls onto worker threads.
//
// Every query gets a oneshot channel. The worker runs the dictionary call
// under catch_unwind and sends exactly one outcome; the caller holds the
// receiving half wrapped in a `Query` future. Work starts when the query is
// created, not when it is first polled.
//
// Workers always come from a tokio blocking pool: the runtime pinned on the
// spell checker, else the one current on the calling thread, else a shared
// runtime built on first use whose pool is capped at SHARED_MAX_WORKERS
// threads. Queries beyond the cap wait in the pool's queue.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::OnceLock;
use std::task::{Context, Poll, ready};

use fstspell_core::{InvalidInputError, QueryError, SpellCheckError};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::oneshot;

const WORKER_THREAD_NAME: &str = "fstspell-query";

/// Blocking threads the shared runtime may run at once.
const SHARED_MAX_WORKERS: usize = 8;

/// Where a query's blocking work runs.
#[derive(Debug, Clone)]
pub(crate) enum Dispatcher {
    /// A tokio blocking thread pool.
    Runtime(Handle),
    /// No runtime was given and the shared one could not be built.
    Unavailable(String),
}

impl Dispatcher {
    /// Use `pinned` if given, else the runtime current on this thread, else
    /// the shared runtime.
    pub(crate) fn select(pinned: Option<&Handle>) -> Self {
        if let Some(handle) = pinned {
            return Dispatcher::Runtime(handle.clone());
        }
        if let Ok(handle) = Handle::try_current() {
            return Dispatcher::Runtime(handle);
        }
        match shared_runtime() {
            Ok(runtime) => Dispatcher::Runtime(runtime.handle().clone()),
            Err(reason) => Dispatcher::Unavailable(reason.to_string()),
        }
    }

    /// Start `job` on a worker and return the query that will carry its result.
    pub(crate) fn dispatch<T, F>(&self, job: F) -> Query<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, QueryError> + Send + 'static,
    {
        let handle = match self {
            Dispatcher::Runtime(handle) => handle,
            Dispatcher::Unavailable(reason) => {
                return Query::failed(QueryError::Unavailable(reason.clone()));
            }
        };

        let (tx, rx) = oneshot::channel();
        // Detached: completion is observed through the channel. If the
        // runtime is shutting down the closure is dropped with its sender and
        // the query resolves as abandoned.
        drop(handle.spawn_blocking(move || {
            // A dropped query has nobody left to tell; the outcome is discarded.
            let _ = tx.send(run_guarded(job));
        }));

        Query::pending(rx)
    }
}

/// The runtime serving queries issued outside any runtime.
fn shared_runtime() -> Result<&'static Runtime, &'static str> {
    static SHARED: OnceLock<Result<Runtime, String>> = OnceLock::new();
    SHARED
        .get_or_init(|| {
            Builder::new_current_thread()
                .thread_name(WORKER_THREAD_NAME)
                .max_blocking_threads(SHARED_MAX_WORKERS)
                .build()
                .map_err(|e| {
                    log::error!("failed to start shared dictionary runtime: {e}");
                    e.to_string()
                })
        })
        .as_ref()
        .map_err(String::as_str)
}

/// Run a dictionary call, turning a panic into [`QueryError::Panicked`].
pub(crate) fn run_guarded<T>(
    job: impl FnOnce() -> Result<T, QueryError>,
) -> Result<T, QueryError> {
    panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        log::error!("dictionary query panicked: {message}");
        Err(QueryError::Panicked(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

enum State<T> {
    /// Resolved without dispatching (rejected input, no worker).
    Ready(Result<T, SpellCheckError>),
    /// Waiting for a worker.
    Pending(oneshot::Receiver<Result<T, QueryError>>),
    Done,
}

/// The outcome of one dispatched spelling query.
///
/// Resolves exactly once, with either the dictionary's answer or a
/// [`SpellCheckError`]. Queries issued concurrently may complete in any
/// order. Dropping a query does not cancel the dictionary call; its result
/// is simply discarded.
#[must_use = "queries run regardless, but their outcome is lost unless awaited"]
pub struct Query<T> {
    state: State<T>,
}

// No field is ever structurally pinned.
impl<T> Unpin for Query<T> {}

impl<T> Query<T> {
    fn pending(rx: oneshot::Receiver<Result<T, QueryError>>) -> Self {
        Self {
            state: State::Pending(rx),
        }
    }

    /// A query that fails with `err` without touching the dictionary.
    pub(crate) fn rejected(err: InvalidInputError) -> Self {
        Self {
            state: State::Ready(Err(err.into())),
        }
    }

    /// A query that could not be handed to any worker.
    fn failed(err: QueryError) -> Self {
        Self {
            state: State::Ready(Err(err.into())),
        }
    }

    /// Whether the query is waiting on a worker. `false` for queries that
    /// were never dispatched and for queries that already resolved.
    pub fn is_dispatched(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    /// Block the current thread until the query resolves.
    ///
    /// For callers outside any async context.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context,
    /// like tokio's own blocking receive.
    pub fn wait(self) -> Result<T, SpellCheckError> {
        match self.state {
            State::Ready(outcome) => outcome,
            State::Pending(rx) => settle(rx.blocking_recv()),
            State::Done => panic!("`Query` waited on after completion"),
        }
    }
}

fn settle<T>(
    received: Result<Result<T, QueryError>, oneshot::error::RecvError>,
) -> Result<T, SpellCheckError> {
    received
        .unwrap_or(Err(QueryError::Abandoned))
        .map_err(SpellCheckError::from)
}

impl<T> Future for Query<T> {
    type Output = Result<T, SpellCheckError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let State::Pending(rx) = &mut this.state {
            let received = ready!(Pin::new(rx).poll(cx));
            this.state = State::Done;
            return Poll::Ready(settle(received));
        }
        match std::mem::replace(&mut this.state, State::Done) {
            State::Ready(outcome) => Poll::Ready(outcome),
            _ => panic!("`Query` polled after completion"),
        }
    }
}

impl<T> std::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Ready(_) => "ready",
            State::Pending(_) => "pending",
            State::Done => "done",
        };
        f.debug_struct("Query").field("state", &state).finish()
    }
}
