use bytes::Bytes;

/// Reads a source to completion, blocking the calling thread.
///
/// Implemented for every [`std::io::Read`], so files, sockets and in-memory
/// slices can be handed to the writer as they are.
pub trait ReadAll {
    /// Reads every remaining byte from the source.
    fn read_all(&mut self) -> std::io::Result<Bytes>;
}

impl<T> ReadAll for T
where
    T: std::io::Read,
{
    fn read_all(&mut self) -> std::io::Result<Bytes> {
        let mut buf = Vec::new();
        std::io::Read::read_to_end(self, &mut buf)?;
        Ok(buf.into())
    }
}

/// Reads a source to completion asynchronously, the read is the only suspension point.
pub trait AsyncReadAll {
    /// Reads every remaining byte from the source.
    fn read_all_async(&mut self) -> impl Future<Output = std::io::Result<Bytes>> + Send;
}

impl<T> AsyncReadAll for T
where
    T: tokio::io::AsyncRead + Unpin + Send,
{
    fn read_all_async(&mut self) -> impl Future<Output = std::io::Result<Bytes>> + Send {
        use tokio::io::AsyncReadExt;

        async move {
            let mut buf = Vec::new();
            self.read_to_end(&mut buf).await?;
            Ok(buf.into())
        }
    }
}
