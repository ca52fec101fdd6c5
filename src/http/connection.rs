use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Service;

pub struct Connection<T, S> {
    stream: T,
    service: Arc<Service<S>>,
    buffer: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl<T, S> Connection<T, S>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: T, service: Arc<Service<S>>) -> Self {
        Self {
            stream,
            service,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Ok(Some(req)) => ConnectionState::Processing(req),
                        Ok(None) => ConnectionState::Closed,
                        Err(e) => {
                            tracing::warn!(error = ?e, "malformed request, closing connection");
                            let writer = ResponseWriter::new(&Response::bad_request());
                            ConnectionState::Writing(writer, false)
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.service.handle(req);
                    let keep_alive = req.keep_alive();

                    tracing::debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading;
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until one full request is buffered.
    ///
    /// `Ok(None)` means the peer closed the connection between requests.
    pub async fn read_request(&mut self) -> Result<Option<Request>, ParseError> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(Some(request));
                }
                Err(ParseError::Incomplete) => {}
                Err(e) => return Err(e),
            }

            let mut temp = [0u8; 1024];
            let n = match self.stream.read(&mut temp).await {
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!(error = %e, "read failed, closing connection");
                    return Ok(None);
                }
            };

            if n == 0 {
                if !self.buffer.is_empty() {
                    tracing::debug!(
                        pending = self.buffer.len(),
                        "peer closed mid-request"
                    );
                }
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
