use std::fmt;
use std::sync::Arc;

use kubermatic_runtime::{
    ClientOperation, ClientTransport, Formats, OperationError, ReadResponse, submit,
};

/// The transport and format registry every facade submits through.
#[derive(Clone)]
pub(crate) struct ClientCore {
    transport: Arc<dyn ClientTransport>,
    formats: Arc<Formats>,
}

impl ClientCore {
    pub(crate) fn new(transport: Arc<dyn ClientTransport>, formats: Arc<Formats>) -> Self {
        Self { transport, formats }
    }

    pub(crate) fn set_transport(&mut self, transport: Arc<dyn ClientTransport>) {
        self.transport = transport;
    }

    pub(crate) async fn submit<E: ReadResponse>(
        &self,
        operation: ClientOperation<'_>,
    ) -> Result<E::Success, OperationError<E>> {
        submit::<E>(self.transport.as_ref(), &self.formats, operation).await
    }
}

impl fmt::Debug for ClientCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCore")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
