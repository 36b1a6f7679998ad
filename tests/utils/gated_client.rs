/// Metadata client whose calls stay pending until the test answers them.
///
/// Every call is pushed onto a channel; the test pulls calls in issue order
/// and resolves each one whenever it likes, which is how out-of-order
/// responses are produced.
use async_trait::async_trait;
use cinescope_lib::modules::catalog::{MetadataClient, MovieDetail, MoviePage};
use cinescope_lib::shared::errors::{AppError, AppResult};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

const CALL_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Popular(u32),
    Search(String, u32),
    Detail(u64),
}

enum Reply {
    Page(AppResult<MoviePage>),
    Detail(AppResult<MovieDetail>),
}

pub struct PendingCall {
    pub call: Call,
    responder: oneshot::Sender<Reply>,
}

impl PendingCall {
    pub fn reply_page(self, result: AppResult<MoviePage>) {
        let _ = self.responder.send(Reply::Page(result));
    }

    pub fn reply_detail(self, result: AppResult<MovieDetail>) {
        let _ = self.responder.send(Reply::Detail(result));
    }
}

pub struct GatedClient {
    calls: mpsc::UnboundedSender<PendingCall>,
}

pub struct CallLog {
    calls: mpsc::UnboundedReceiver<PendingCall>,
}

impl GatedClient {
    pub fn new() -> (Self, CallLog) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { calls: tx }, CallLog { calls: rx })
    }

    async fn issue(&self, call: Call) -> AppResult<Reply> {
        let (tx, rx) = oneshot::channel();
        self.calls
            .send(PendingCall {
                call,
                responder: tx,
            })
            .map_err(|_| AppError::NetworkError("call log dropped".to_string()))?;
        rx.await
            .map_err(|_| AppError::NetworkError("call abandoned by test".to_string()))
    }
}

#[async_trait]
impl MetadataClient for GatedClient {
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage> {
        match self.issue(Call::Popular(page)).await? {
            Reply::Page(result) => result,
            Reply::Detail(_) => panic!("answered a list call with a detail reply"),
        }
    }

    async fn search(&self, term: &str, page: u32) -> AppResult<MoviePage> {
        match self.issue(Call::Search(term.to_string(), page)).await? {
            Reply::Page(result) => result,
            Reply::Detail(_) => panic!("answered a list call with a detail reply"),
        }
    }

    async fn fetch_detail(&self, id: u64) -> AppResult<MovieDetail> {
        match self.issue(Call::Detail(id)).await? {
            Reply::Detail(result) => result,
            Reply::Page(_) => panic!("answered a detail call with a list reply"),
        }
    }
}

impl CallLog {
    /// Wait for the next issued call.
    pub async fn next(&mut self) -> PendingCall {
        timeout(CALL_TIMEOUT, self.calls.recv())
            .await
            .expect("timed out waiting for a client call")
            .expect("client dropped")
    }

    /// No call has been issued since the last `next`.
    pub fn assert_idle(&mut self) {
        assert!(
            self.calls.try_recv().is_err(),
            "unexpected client call was issued"
        );
    }
}
